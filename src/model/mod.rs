pub use self::{
    account_stats::AccountStats, commission::CommissionTable,
    connection_stats::ConnectionStats,
};

mod account_stats;
mod commission;
mod connection_stats;
pub mod currency;
