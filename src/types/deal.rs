use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Executed trade record from the MoneyPlant bridge. Quantity is the traded
/// volume in lots; responses have carried it as both `quantity` and `lots`.
#[derive(Debug, Clone, Deserialize)]
pub struct Deal {
    #[serde(rename = "accountno", default)]
    pub account_no: Option<String>,

    pub symbol: String,

    #[serde(alias = "lots")]
    pub quantity: BigDecimal,
}

/// Request body for `POST /api/moneyplant/getDeals`. Dates are ISO calendar
/// dates with no time component.
#[derive(Debug, Serialize)]
pub struct DealsQuery {
    pub accountno: String,
    pub sdate: String,
    pub edate: String,
}

#[derive(Debug, Deserialize)]
pub struct DealsBody {
    #[serde(default)]
    pub data: Vec<Deal>,
}
