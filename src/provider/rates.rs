use bigdecimal::BigDecimal;
use reqwest::Client;
use std::time::Duration;
use tracing::warn;

use crate::{
    configuration::Config, error::Error, types::ExchangeRateBody,
};

/// Fallback INR->USD rate as (mantissa, scale): 0.012. Used when the live
/// endpoint is unreachable; approximate on purpose, the withdrawal ceiling
/// must never block on the rate fetch. Distinct from the fixed 88.76
/// conversion rate in `model::currency`.
const FALLBACK_INR_TO_USD: (i64, i64) = (12, 3);

pub fn fallback_inr_to_usd() -> BigDecimal {
    let (mantissa, scale) = FALLBACK_INR_TO_USD;
    BigDecimal::new(mantissa.into(), scale)
}

#[derive(Debug)]
pub struct Rates {
    client: Client,
    config: Config,
}

impl Rates {
    pub fn new(config: Config) -> Result<Rates, Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Rates { client, config })
    }

    /// Live INR->USD rate (1 INR = ? USD). Infallible by contract: any fetch
    /// or parse problem logs a warning and yields the fallback rate.
    pub async fn inr_to_usd(&self) -> BigDecimal {
        match self.fetch_inr_to_usd().await {
            Ok(rate) => rate,
            Err(e) => {
                warn!("live INR->USD rate fetch failed, using fallback: {}", e);
                fallback_inr_to_usd()
            }
        }
    }

    async fn fetch_inr_to_usd(&self) -> Result<BigDecimal, Error> {
        let body = self
            .client
            .get(self.config.latest_rate_url())
            .send()
            .await?
            .error_for_status()?
            .json::<ExchangeRateBody>()
            .await?;

        body.rates
            .get("USD")
            .cloned()
            .ok_or_else(|| Error::FieldNotExist("rates.USD".to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_fallback_rate_value() {
        assert_eq!(
            fallback_inr_to_usd(),
            BigDecimal::from_str("0.012").unwrap()
        );
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_falls_back() {
        // Discard port on loopback: connection refused, no real network.
        let mut config = Config::for_tests();
        config.rates_host = "http://127.0.0.1:9".to_owned();

        let rates = Rates::new(config).unwrap();
        assert_eq!(rates.inr_to_usd().await, fallback_inr_to_usd());
    }
}
