use std::{env, fs, ops::Deref, sync::Arc};

use url::Url;

use crate::{
    error::Error,
    model::CommissionTable,
    provider::{BackendApi, Rates, SessionStore},
};

#[derive(Debug)]
pub struct AppState<T>(Arc<T>);

impl<T> AppState<T> {
    pub fn new(state: T) -> AppState<T> {
        AppState(Arc::new(state))
    }
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> AppState<T> {
        AppState(Arc::clone(&self.0))
    }
}

impl<T> Deref for AppState<T> {
    type Target = Arc<T>;

    fn deref(&self) -> &Arc<T> {
        &self.0
    }
}

pub struct State {
    pub config: Config,
    pub backend: Arc<dyn BackendApi>,
    pub rates: Rates,
    pub commission: CommissionTable,
    pub session: Arc<dyn SessionStore>,
}

impl State {
    pub fn new(
        config: Config,
        backend: Arc<dyn BackendApi>,
        rates: Rates,
        session: Arc<dyn SessionStore>,
    ) -> State {
        State {
            config,
            backend,
            rates,
            commission: CommissionTable::standard(),
            session,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub rates_host: String,
    pub server_host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub timeout: u64,
    pub max_tasks: usize,
}

impl Config {
    pub fn referral_url(&self, email: &str) -> String {
        format!("{}/api/ib/{}", self.host, email)
    }

    pub fn users_url(&self) -> String {
        format!("{}/api/auth/users", self.host)
    }

    pub fn user_url(&self, email: &str) -> String {
        format!("{}/api/auth/user/{}", self.host, email)
    }

    pub fn deposits_url(&self, account_no: i64) -> String {
        format!("{}/api/payment/deposit/{}", self.host, account_no)
    }

    pub fn withdrawals_url(&self, account_no: i64) -> String {
        format!("{}/api/payment/withdrawal/{}", self.host, account_no)
    }

    pub fn deals_url(&self) -> String {
        format!("{}/api/moneyplant/getDeals", self.host)
    }

    pub fn balance_url(&self) -> String {
        format!("{}/api/moneyplant/checkBalance", self.host)
    }

    pub fn update_commission_url(&self) -> String {
        format!("{}/api/ib/update-commission", self.host)
    }

    pub fn ib_withdrawal_url(&self) -> String {
        format!("{}/api/ib/withdrawalIBamount", self.host)
    }

    pub fn latest_rate_url(&self) -> String {
        format!("{}/latest?amount=1&from=INR&to=USD", self.rates_host)
    }
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Config {
        Config {
            host: "http://127.0.0.1:9".to_owned(),
            rates_host: "http://127.0.0.1:9".to_owned(),
            server_host: "127.0.0.1".to_owned(),
            port: 0,
            allowed_origins: vec!["*".to_owned()],
            timeout: 1,
            max_tasks: 4,
        }
    }
}

pub fn get_configuration() -> Result<Config, Error> {
    let host = env::var("HOST")?;
    let rates_host = env::var("RATES_HOST")?;

    // Both must be absolute URLs; catch typos at startup, not per request.
    Url::parse(&host)?;
    Url::parse(&rates_host)?;

    let server_host = env::var("SERVER_HOST")?;
    let port: u16 = env::var("PORT")?.parse()?;
    let timeout: u64 = env::var("TIMEOUT")?.parse()?;
    let max_tasks: usize = env::var("MAX_TASKS")?.parse()?;

    let allowed_origins = env::var("ALLOWED_ORIGINS")?
        .split(',')
        .map(|item| item.to_owned())
        .collect::<Vec<String>>();

    Ok(Config {
        host,
        rates_host,
        server_host,
        port,
        allowed_origins,
        timeout,
        max_tasks,
    })
}

pub fn set_configuration() -> Result<(), Error> {
    let config_file: &str = ".env";

    let directory = env!("CARGO_MANIFEST_DIR");
    let path = format!("{}/{}", directory, config_file);

    let config_string = fs::read_to_string(path)?;
    parse_config_string(config_string);

    Ok(())
}

fn parse_config_string(config: String) {
    let params: Vec<Option<(&str, &str)>> = config
        .split('\n')
        .map(|s| {
            let element = s.find('=');
            if let Some(e) = element {
                return Some(s.split_at(e));
            }
            None
        })
        .map(|value| {
            if let Some((k, v)) = value {
                return Some((k, &v[1..]));
            }
            None
        })
        .collect();

    for (key, value) in params.into_iter().flatten() {
        env::set_var(key, value);
    }
}
