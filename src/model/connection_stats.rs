use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

use crate::types::User;

use super::AccountStats;

/// One row of the "My Connections" dataset: a referred client with the
/// totals of all their trading accounts. Built fresh on every request;
/// nothing here is persisted or cached.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionStats {
    pub email: String,
    pub full_name: Option<String>,
    pub account_type: Option<String>,
    pub registered_at: DateTime<Utc>,
    pub accounts: Vec<i64>,
    pub total_deposit_usd: BigDecimal,
    pub total_withdrawal_usd: BigDecimal,
    pub total_lots: BigDecimal,
    pub total_commission_usd: BigDecimal,
    pub symbol_lots: HashMap<String, BigDecimal>,
}

impl ConnectionStats {
    pub fn for_user(user: &User) -> ConnectionStats {
        ConnectionStats {
            email: user.email.to_owned(),
            full_name: user.full_name.to_owned(),
            account_type: user.account_type.to_owned(),
            registered_at: user.created_at,
            accounts: Vec::new(),
            total_deposit_usd: BigDecimal::default(),
            total_withdrawal_usd: BigDecimal::default(),
            total_lots: BigDecimal::default(),
            total_commission_usd: BigDecimal::default(),
            symbol_lots: HashMap::new(),
        }
    }

    /// Folds one account's stats into the user total. Totals are additive
    /// across a user's accounts; symbol lots union by summing.
    pub fn absorb(&mut self, account_no: i64, stats: AccountStats) {
        self.accounts.push(account_no);
        self.total_deposit_usd += stats.total_deposit_usd;
        self.total_withdrawal_usd += stats.total_withdrawal_usd;
        self.total_lots += stats.total_lots;
        self.total_commission_usd += stats.total_commission_usd;

        for (symbol, lots) in stats.symbol_lots {
            let entry = self
                .symbol_lots
                .entry(symbol)
                .or_insert_with(BigDecimal::default);
            *entry += lots;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_user() -> User {
        User {
            email: "client@example.com".to_owned(),
            full_name: Some("Test Client".to_owned()),
            referral_code: None,
            is_approved_ib: false,
            commission: None,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap(),
            last_withdrawal_date: None,
            account_type: Some("standard".to_owned()),
            accounts: Vec::new(),
        }
    }

    fn account_stats(lots: i64, symbol: &str) -> AccountStats {
        let mut symbol_lots = HashMap::new();
        symbol_lots.insert(symbol.to_owned(), BigDecimal::from(lots));

        AccountStats {
            total_lots: BigDecimal::from(lots),
            symbol_lots,
            ..AccountStats::default()
        }
    }

    #[test]
    fn test_absorb_merges_accounts() {
        let mut stats = ConnectionStats::for_user(&test_user());
        stats.absorb(1001, account_stats(5, "EURUSD"));
        stats.absorb(1002, account_stats(3, "XAUUSD"));

        assert_eq!(stats.accounts, vec![1001, 1002]);
        assert_eq!(stats.total_lots, BigDecimal::from(8));
        assert_eq!(stats.symbol_lots.len(), 2);
    }

    #[test]
    fn test_absorb_sums_symbol_lots_across_accounts() {
        let mut stats = ConnectionStats::for_user(&test_user());
        stats.absorb(1001, account_stats(5, "EURUSD"));
        stats.absorb(1002, account_stats(3, "EURUSD"));

        assert_eq!(
            stats.symbol_lots.get("EURUSD"),
            Some(&BigDecimal::from(8))
        );
    }
}
