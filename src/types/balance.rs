use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Request body for `POST /api/moneyplant/checkBalance`.
#[derive(Debug, Serialize)]
pub struct BalanceQuery {
    pub accountno: String,
}

#[derive(Debug, Deserialize)]
pub struct BalanceBody {
    pub data: BalanceData,
}

/// Account summary from the MoneyPlant bridge. `response` is "success" when
/// the lookup worked; anything else comes with a `message`.
#[derive(Debug, Clone, Deserialize)]
pub struct BalanceData {
    pub response: String,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub balance: Option<BigDecimal>,

    #[serde(rename = "DWBalance", default)]
    pub dw_balance: Option<String>,
}
