use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::payment_status::RawWithdrawalStatus;

/// One deposit record from `/api/payment/deposit/{accountNo}`. Amounts are in
/// the payment currency (INR); conversion happens in the aggregation layer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deposit {
    #[serde(default)]
    pub account_no: Option<i64>,

    pub amount: BigDecimal,

    pub status: String,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct DepositsBody {
    pub deposits: Vec<Deposit>,
}

/// One withdrawal record from `/api/payment/withdrawal/{accountNo}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    #[serde(default)]
    pub account_no: Option<i64>,

    pub amount: BigDecimal,

    pub status: RawWithdrawalStatus,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct WithdrawalsBody {
    pub withdrawals: Vec<Withdrawal>,
}
