use tracing::error;

use crate::{
    configuration::{AppState, State},
    error::Error,
    helpers::StatsWindow,
    model::{currency, AccountStats, CommissionTable},
    types::PaymentStatus,
};

use super::deals;

/// Collects one account's stats for the window. Never fails: any fetch error
/// zero-fills the whole account with a logged error, so sibling accounts and
/// users are unaffected. The resulting undercount is accepted behavior.
pub async fn collect(
    state: AppState<State>,
    account_no: i64,
    window: StatsWindow,
) -> AccountStats {
    match try_collect(&state, account_no, &window).await {
        Ok(stats) => stats,
        Err(e) => {
            error!(
                "stats for account {} failed, contribution zero-filled: {}",
                account_no, e
            );
            AccountStats::default()
        }
    }
}

async fn try_collect(
    state: &AppState<State>,
    account_no: i64,
    window: &StatsWindow,
) -> Result<AccountStats, Error> {
    let mut stats = AccountStats::default();
    let fixed_rate = currency::inr_per_usd();

    let deposits = state.backend.deposits(account_no).await?;
    for deposit in deposits {
        if PaymentStatus::from_deposit(&deposit.status)
            == PaymentStatus::Completed
        {
            stats.total_deposit_usd +=
                currency::convert(&deposit.amount, &fixed_rate);
        }
    }

    let withdrawals = state.backend.withdrawals(account_no).await?;
    for withdrawal in withdrawals {
        if PaymentStatus::from_withdrawal(&withdrawal.status)
            == PaymentStatus::Completed
        {
            stats.total_withdrawal_usd +=
                currency::convert(&withdrawal.amount, &fixed_rate);
        }
    }

    let deal_list = state.backend.deals(account_no, window).await?;
    let totals = deals::aggregate(
        &deal_list,
        &state.commission,
        &CommissionTable::ib_share(),
    );

    stats.total_lots = totals.total_lots;
    stats.total_commission_usd = totals.total_commission_usd;
    stats.symbol_lots = totals.symbol_lots;

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::testing::state_with;
    use crate::provider::backend::testing::StubBackend;
    use crate::types::{Deal, Deposit, RawWithdrawalStatus, Withdrawal};
    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn window() -> StatsWindow {
        StatsWindow {
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        }
    }

    fn deposit(amount: i64, status: &str) -> Deposit {
        Deposit {
            account_no: None,
            amount: BigDecimal::from(amount),
            status: status.to_owned(),
            created_at: None,
        }
    }

    fn withdrawal(amount: i64, status: RawWithdrawalStatus) -> Withdrawal {
        Withdrawal {
            account_no: None,
            amount: BigDecimal::from(amount),
            status,
            created_at: None,
        }
    }

    #[tokio::test]
    async fn test_only_successful_deposits_count() {
        let mut stub = StubBackend::default();
        stub.deposits.insert(
            1001,
            vec![
                deposit(8876, "success"),
                deposit(500_000, "pending"),
                deposit(500_000, "failed"),
            ],
        );

        let stats = collect(state_with(stub), 1001, window()).await;

        // 8876 INR at the fixed 88.76 rate
        assert_eq!(stats.total_deposit_usd, BigDecimal::from(100));
    }

    #[tokio::test]
    async fn test_both_completion_spellings_count_equally() {
        let mut stub = StubBackend::default();
        stub.withdrawals.insert(
            1001,
            vec![
                withdrawal(
                    8876,
                    RawWithdrawalStatus::Label("completed".to_owned()),
                ),
                withdrawal(
                    8876,
                    RawWithdrawalStatus::Label("complated".to_owned()),
                ),
                withdrawal(
                    500_000,
                    RawWithdrawalStatus::Label("pending".to_owned()),
                ),
            ],
        );

        let stats = collect(state_with(stub), 1001, window()).await;

        assert_eq!(stats.total_withdrawal_usd, BigDecimal::from(200));
    }

    #[tokio::test]
    async fn test_deals_feed_lots_and_commission() {
        let mut stub = StubBackend::default();
        stub.deals.insert(
            1001,
            vec![Deal {
                account_no: None,
                symbol: "EURUSD".to_owned(),
                quantity: BigDecimal::from(2),
            }],
        );

        let stats = collect(state_with(stub), 1001, window()).await;

        assert_eq!(stats.total_lots, BigDecimal::from(2));
        assert_eq!(
            stats.total_commission_usd,
            BigDecimal::from_str("2.97").unwrap()
        );
    }

    #[tokio::test]
    async fn test_fetch_failure_zero_fills_the_account() {
        let mut stub = StubBackend::default();
        stub.deposits.insert(1001, vec![deposit(8876, "success")]);
        stub.failing_deal_accounts.insert(1001);

        let stats = collect(state_with(stub), 1001, window()).await;

        // The deposit fetch succeeded, but the account's whole contribution
        // is dropped once any of its fetches fails.
        assert_eq!(stats.total_deposit_usd, BigDecimal::default());
        assert_eq!(stats.total_lots, BigDecimal::default());
        assert!(stats.symbol_lots.is_empty());
    }
}
