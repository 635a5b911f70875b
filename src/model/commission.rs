use bigdecimal::BigDecimal;
use std::collections::HashMap;

/// Per-lot commission rates as (symbol, mantissa, scale), rate = mantissa /
/// 10^scale. FX pairs pay a flat 4.5 per lot, metals pay their own rates.
/// Symbols missing from this table are tradeable but earn no commission.
const RATES_PER_LOT: &[(&str, i64, i64)] = &[
    ("EURUSD", 45, 1),
    ("GBPUSD", 45, 1),
    ("USDJPY", 45, 1),
    ("USDCHF", 45, 1),
    ("USDCAD", 45, 1),
    ("AUDUSD", 45, 1),
    ("NZDUSD", 45, 1),
    ("EURGBP", 45, 1),
    ("EURJPY", 45, 1),
    ("EURCHF", 45, 1),
    ("EURAUD", 45, 1),
    ("EURNZD", 45, 1),
    ("EURCAD", 45, 1),
    ("GBPJPY", 45, 1),
    ("GBPCHF", 45, 1),
    ("GBPAUD", 45, 1),
    ("GBPNZD", 45, 1),
    ("GBPCAD", 45, 1),
    ("AUDJPY", 45, 1),
    ("AUDNZD", 45, 1),
    ("AUDCAD", 45, 1),
    ("AUDCHF", 45, 1),
    ("NZDJPY", 45, 1),
    ("NZDCAD", 45, 1),
    ("CADJPY", 45, 1),
    ("CHFJPY", 45, 1),
    ("XAUUSD", 6075, 3),
    ("XAGUSD", 585, 2),
];

/// The partner's cut of gross commission, as (mantissa, scale): 0.33.
/// This multiplier produces the estimated, display-only commission figure;
/// the payable figure is recomputed by the backend and read back separately.
const IB_SHARE: (i64, i64) = (33, 2);

#[derive(Debug)]
pub struct CommissionTable {
    rates: HashMap<String, BigDecimal>,
}

impl CommissionTable {
    pub fn standard() -> CommissionTable {
        let rates = RATES_PER_LOT
            .iter()
            .map(|(symbol, mantissa, scale)| {
                ((*symbol).to_owned(), BigDecimal::new((*mantissa).into(), *scale))
            })
            .collect();

        CommissionTable { rates }
    }

    /// Absent symbols are valid instruments with no commission contribution.
    pub fn rate_for(&self, symbol: &str) -> Option<&BigDecimal> {
        self.rates.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn ib_share() -> BigDecimal {
        let (mantissa, scale) = IB_SHARE;
        BigDecimal::new(mantissa.into(), scale)
    }
}
