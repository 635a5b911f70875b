pub mod account_stats;
pub mod connections;
pub mod ib_withdrawal;
pub mod referral;
pub mod version;
