use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Body of `GET /api/ib/{email}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralBody {
    #[serde(default)]
    pub referral_code: Option<String>,
}

/// Body for `POST /api/ib/update-commission`. Triggers the backend's
/// authoritative commission recompute for the partner.
#[derive(Debug, Serialize)]
pub struct UpdateCommissionQuery {
    pub email: String,
    pub sdate: String,
    pub edate: String,
}

/// Body for `POST /api/ib/withdrawalIBamount`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IbWithdrawalQuery {
    pub email: String,
    pub accountno: String,
    pub amount: BigDecimal,
}

/// Backend verdict on a payout request. On rejection `message` carries the
/// backend's own wording and is surfaced to the caller unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IbWithdrawalBody {
    pub success: bool,

    #[serde(default)]
    pub orderid: Option<String>,

    #[serde(default)]
    pub new_commission: Option<BigDecimal>,

    #[serde(default)]
    pub message: Option<String>,
}
