use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User record as served by `/api/auth/users` and `/api/auth/user/{email}`.
/// `referral_code` is only present once the backend has approved the user as
/// an introducing broker. `commission` is the backend's authoritative payable
/// figure, recomputed server-side; it is a different number from the
/// estimated commission in `ConnectionStats` and the two are never merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub email: String,

    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default)]
    pub referral_code: Option<String>,

    #[serde(default)]
    pub is_approved_ib: bool,

    #[serde(default)]
    pub commission: Option<BigDecimal>,

    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub last_withdrawal_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub account_type: Option<String>,

    #[serde(default)]
    pub accounts: Vec<Account>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_no: i64,

    #[serde(default)]
    pub currency: Option<String>,
}
