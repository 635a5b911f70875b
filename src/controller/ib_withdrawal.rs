use actix_web::{get, post, web, Responder, Result};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::{
    configuration::{AppState, State},
    error::Error,
    handler::ib_withdrawal,
    types::IbWithdrawalQuery,
};

/// Partner commission payout. The backend's verdict passes through
/// unchanged; a rejection keeps the backend's message word for word.
#[post("/ib/withdraw")]
async fn post_index(
    state: web::Data<AppState<State>>,
    body: web::Json<IbWithdrawalQuery>,
) -> Result<impl Responder, Error> {
    let verdict =
        ib_withdrawal::withdraw(state.get_ref(), body.into_inner()).await?;

    Ok(web::Json(verdict))
}

/// INR bounds for a bank withdrawal from the given account: the fixed desk
/// floor plus a ceiling computed from the MT balance at the live rate.
#[get("/ib/withdrawal-limit")]
async fn get_index(
    state: web::Data<AppState<State>>,
    data: web::Query<Query>,
) -> Result<impl Responder, Error> {
    let max_withdraw_inr = ib_withdrawal::withdrawal_ceiling_inr(
        state.get_ref(),
        data.account_no,
    )
    .await?;

    Ok(web::Json(Response {
        min_withdraw_inr: BigDecimal::from(
            ib_withdrawal::MIN_WITHDRAWAL_INR,
        ),
        max_withdraw_inr,
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    account_no: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub min_withdraw_inr: BigDecimal,
    pub max_withdraw_inr: BigDecimal,
}
