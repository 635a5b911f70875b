pub mod account_stats;
pub mod connections;
pub mod deals;
pub mod ib_withdrawal;
