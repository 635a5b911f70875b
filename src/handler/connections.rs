use chrono::Utc;
use futures::future::join_all;
use tokio::task::JoinSet;
use tracing::error;

use crate::{
    configuration::{AppState, State},
    error::Error,
    helpers::{stats_window_for, StatsWindow},
    model::ConnectionStats,
    types::User,
};

use super::account_stats;

/// All users whose referral code equals `code`, exact and case-sensitive.
/// The directory has no server-side filter; the match happens here, as it
/// did in the views.
pub async fn resolve(
    state: &AppState<State>,
    code: &str,
) -> Result<Vec<User>, Error> {
    let users = state.backend.users().await?;

    Ok(users
        .into_iter()
        .filter(|user| user.referral_code.as_deref() == Some(code))
        .collect())
}

/// Builds the "My Connections" dataset for one referral code: one task per
/// connected user, batched to `max_tasks` at a time. Workers return
/// value-or-zero results that are folded here, so there is no shared
/// accumulator. A directory failure yields an empty list, not an error.
/// Outstanding tasks are aborted when the returned future is dropped.
pub async fn enrich(
    state: AppState<State>,
    code: &str,
    window: Option<StatsWindow>,
) -> Result<Vec<ConnectionStats>, Error> {
    let connected = match resolve(&state, code).await {
        Ok(users) => users,
        Err(e) => {
            error!("resolving connections for {} failed: {}", code, e);
            return Ok(Vec::new());
        }
    };

    let mut tasks = vec![];
    for user in connected {
        tasks.push(enrich_user(state.clone(), user, window.clone()));
    }

    let max_tasks = state.config.max_tasks.max(1);
    let mut data = vec![];

    while !tasks.is_empty() {
        let mut set = JoinSet::new();
        let range = if tasks.len() > max_tasks {
            max_tasks
        } else {
            tasks.len()
        };

        for _t in 0..range {
            if let Some(task) = tasks.pop() {
                set.spawn(task);
            }
        }

        while let Some(item) = set.join_next().await {
            data.push(item?);
        }
    }

    // Fan-out completes in arbitrary order; keep repeated renders stable.
    data.sort_by(|a, b| a.email.cmp(&b.email));

    Ok(data)
}

/// One user's totals across all their accounts: scatter the per-account
/// collection, gather into a single record. The window defaults to the
/// user's own history when none is given.
async fn enrich_user(
    state: AppState<State>,
    user: User,
    window: Option<StatsWindow>,
) -> ConnectionStats {
    let window =
        window.unwrap_or_else(|| stats_window_for(&user, Utc::now()));
    let mut stats = ConnectionStats::for_user(&user);

    let collects = user.accounts.iter().map(|account| {
        account_stats::collect(
            state.clone(),
            account.account_no,
            window.clone(),
        )
    });
    let results = join_all(collects).await;

    for (account, result) in user.accounts.iter().zip(results) {
        stats.absorb(account.account_no, result);
    }

    stats
}
