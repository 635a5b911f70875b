use bigdecimal::BigDecimal;
use serde::Deserialize;
use std::collections::HashMap;

/// Response of the public exchange-rate endpoint
/// (`/latest?amount=1&from=INR&to=USD`).
#[derive(Debug, Deserialize)]
pub struct ExchangeRateBody {
    pub rates: HashMap<String, BigDecimal>,
}
