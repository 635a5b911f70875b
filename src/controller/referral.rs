use actix_web::{get, web, Responder, Result};
use serde::Serialize;

use crate::{
    configuration::{AppState, State},
    error::Error,
};

/// Referral code lookup for the partner page's share link.
#[get("/referral/{email}")]
async fn index(
    state: web::Data<AppState<State>>,
    path: web::Path<String>,
) -> Result<impl Responder, Error> {
    let email = path.into_inner();
    let referral_code = state.backend.referral_code(&email).await?;

    Ok(web::Json(Response { referral_code }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub referral_code: Option<String>,
}
