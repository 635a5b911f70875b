use bigdecimal::BigDecimal;

/// Fixed INR-per-USD rate used to convert deposit and withdrawal amounts,
/// as (mantissa, scale): 88.76. This is NOT the live rate used for the
/// withdrawal ceiling (see `provider::rates`); the two sources are distinct
/// on purpose and must stay that way.
const INR_PER_USD: (i64, i64) = (8876, 2);

pub fn inr_per_usd() -> BigDecimal {
    let (mantissa, scale) = INR_PER_USD;
    BigDecimal::new(mantissa.into(), scale)
}

/// Converts an amount in source-currency units into the target currency,
/// where `rate` is source units per 1 target unit.
pub fn convert(amount: &BigDecimal, rate: &BigDecimal) -> BigDecimal {
    amount / rate
}
