use bigdecimal::BigDecimal;
use chrono::Utc;
use tracing::error;

use crate::{
    configuration::{AppState, State},
    error::Error,
    helpers::stats_window_for,
    types::{IbWithdrawalBody, IbWithdrawalQuery, UpdateCommissionQuery},
};

/// INR bounds on a single bank withdrawal, per the payment desk rules.
pub const MIN_WITHDRAWAL_INR: i64 = 1_000;
pub const MAX_WITHDRAWAL_INR: i64 = 100_000;

/// Submits a partner payout. The backend recomputes the authoritative
/// commission first (fire-and-forget: a failure is logged and the payout
/// attempt proceeds); its verdict comes back verbatim, success or rejection.
/// Rejections carry the backend's own message and are never retried or
/// reworded here.
pub async fn withdraw(
    state: &AppState<State>,
    query: IbWithdrawalQuery,
) -> Result<IbWithdrawalBody, Error> {
    refresh_commission(state, &query.email).await;
    state.backend.ib_withdrawal(&query).await
}

async fn refresh_commission(state: &AppState<State>, email: &str) {
    let result: Result<(), Error> = async {
        let user = state.backend.user(email).await?;
        let window = stats_window_for(&user, Utc::now());
        let query = UpdateCommissionQuery {
            email: email.to_owned(),
            sdate: window.sdate(),
            edate: window.edate(),
        };
        state.backend.update_commission(&query).await
    }
    .await;

    if let Err(e) = result {
        error!("commission refresh for {} failed: {}", email, e);
    }
}

/// Ceiling for a bank withdrawal in INR: the account's USD balance at the
/// live rate, capped by the desk maximum. The live rate is INR->USD and has
/// to be inverted; a failed rate fetch already fell back inside `Rates`.
pub async fn withdrawal_ceiling_inr(
    state: &AppState<State>,
    account_no: i64,
) -> Result<BigDecimal, Error> {
    let balance = state.backend.balance(account_no).await?;

    if balance.response != "success" {
        return Err(Error::BackendError(balance.message.unwrap_or_else(
            || "balance lookup failed".to_owned(),
        )));
    }

    let balance_usd = balance.balance.unwrap_or_default();

    let inr_to_usd = state.rates.inr_to_usd().await;
    let usd_to_inr = BigDecimal::from(1) / &inr_to_usd;
    let ceiling = balance_usd * usd_to_inr;

    let cap = BigDecimal::from(MAX_WITHDRAWAL_INR);
    Ok(if ceiling > cap { cap } else { ceiling })
}
