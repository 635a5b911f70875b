use bigdecimal::BigDecimal;
use std::collections::HashMap;

use crate::{model::CommissionTable, types::Deal};

#[derive(Debug, Clone, Default)]
pub struct DealTotals {
    pub total_lots: BigDecimal,
    pub total_commission_usd: BigDecimal,
    pub symbol_lots: HashMap<String, BigDecimal>,
}

/// Single-pass fold over a deal list. Lots accumulate into the running total
/// and into a per-symbol total (entry created on first sight); deals whose
/// symbol carries a commission rate add `quantity * rate * ib_share` to the
/// commission total, unlisted symbols contribute lots only. Pure and
/// order-independent.
pub fn aggregate(
    deals: &[Deal],
    table: &CommissionTable,
    ib_share: &BigDecimal,
) -> DealTotals {
    let mut totals = DealTotals::default();

    for deal in deals {
        totals.total_lots += &deal.quantity;

        let entry = totals
            .symbol_lots
            .entry(deal.symbol.to_owned())
            .or_insert_with(BigDecimal::default);
        *entry += &deal.quantity;

        if let Some(rate) = table.rate_for(&deal.symbol) {
            totals.total_commission_usd += &deal.quantity * rate * ib_share;
        }
    }

    totals
}
