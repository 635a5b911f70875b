pub use self::{
    balance::{BalanceBody, BalanceData, BalanceQuery},
    deal::{Deal, DealsBody, DealsQuery},
    exchange::ExchangeRateBody,
    ib::{
        IbWithdrawalBody, IbWithdrawalQuery, ReferralBody,
        UpdateCommissionQuery,
    },
    payment::{Deposit, DepositsBody, Withdrawal, WithdrawalsBody},
    payment_status::{PaymentStatus, RawWithdrawalStatus},
    user::{Account, User},
};

mod balance;
mod deal;
mod exchange;
mod ib;
mod payment;
mod payment_status;
mod user;
