use bigdecimal::BigDecimal;
use serde::Serialize;
use std::collections::HashMap;

/// Aggregate of one trading account over a date window. All money figures
/// are USD. A fetch failure leaves the default (all-zero) value in place, so
/// totals can undercount but never abort a collection run.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountStats {
    pub total_deposit_usd: BigDecimal,
    pub total_withdrawal_usd: BigDecimal,
    pub total_lots: BigDecimal,
    pub total_commission_usd: BigDecimal,
    pub symbol_lots: HashMap<String, BigDecimal>,
}

impl AccountStats {
    /// Additive merge; symbol lots union by summing per symbol.
    pub fn merge(&mut self, other: AccountStats) {
        self.total_deposit_usd += other.total_deposit_usd;
        self.total_withdrawal_usd += other.total_withdrawal_usd;
        self.total_lots += other.total_lots;
        self.total_commission_usd += other.total_commission_usd;

        for (symbol, lots) in other.symbol_lots {
            let entry = self
                .symbol_lots
                .entry(symbol)
                .or_insert_with(BigDecimal::default);
            *entry += lots;
        }
    }
}
