use actix_web::{get, web, Responder, Result};
use anyhow::Context;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::{
    configuration::{AppState, State},
    error::Error,
    handler::account_stats,
    helpers::{stats_window_for, StatsWindow},
};

/// Window stats for a single trading account, used by the admin drill-down.
/// Without explicit dates the window defaults to the owner's history.
#[get("/account-stats")]
async fn index(
    state: web::Data<AppState<State>>,
    data: web::Query<Query>,
) -> Result<impl Responder, Error> {
    let user = state.backend.user(&data.email).await?;

    let account = user
        .accounts
        .iter()
        .find(|account| account.account_no == data.account_no)
        .context(format!(
            "account {} does not belong to {}",
            data.account_no, data.email
        ))?;

    let window = match (data.sdate, data.edate) {
        (Some(start), Some(end)) => StatsWindow { start, end },
        _ => stats_window_for(&user, Utc::now()),
    };

    let stats = account_stats::collect(
        state.get_ref().clone(),
        account.account_no,
        window,
    )
    .await;

    Ok(web::Json(stats))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    email: String,
    account_no: i64,
    sdate: Option<NaiveDate>,
    edate: Option<NaiveDate>,
}
