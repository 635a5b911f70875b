use actix_web::{get, web, Responder, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::error;

use crate::{
    configuration::{AppState, State},
    error::Error,
    handler::connections,
    helpers::StatsWindow,
    model::ConnectionStats,
};

/// The "My Connections" dataset for the partner identified by email. A
/// failed or empty referral lookup renders as an empty list with a logged
/// error; the view shows "no data" rather than breaking.
#[get("/connections")]
async fn index(
    state: web::Data<AppState<State>>,
    data: web::Query<Query>,
) -> Result<impl Responder, Error> {
    let code = match state.backend.referral_code(&data.email).await {
        Ok(Some(code)) => code,
        Ok(None) => {
            error!("no referral code on file for {}", data.email);
            return Ok(web::Json(Vec::<ConnectionStats>::new()));
        }
        Err(e) => {
            error!("referral lookup for {} failed: {}", data.email, e);
            return Ok(web::Json(Vec::new()));
        }
    };

    let window = match (data.sdate, data.edate) {
        (Some(start), Some(end)) => Some(StatsWindow { start, end }),
        _ => None,
    };

    let items =
        connections::enrich(state.get_ref().clone(), &code, window).await?;

    Ok(web::Json(items))
}

#[derive(Debug, Deserialize)]
pub struct Query {
    email: String,
    sdate: Option<NaiveDate>,
    edate: Option<NaiveDate>,
}
