use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use std::sync::Arc;
use std::time::Duration;

use crate::{
    configuration::Config,
    error::Error,
    helpers::StatsWindow,
    types::{
        BalanceBody, BalanceData, BalanceQuery, Deal, DealsBody, DealsQuery,
        Deposit, DepositsBody, IbWithdrawalBody, IbWithdrawalQuery,
        ReferralBody, UpdateCommissionQuery, User, Withdrawal,
        WithdrawalsBody,
    },
};

use super::session::{SessionStore, TOKEN_KEY};

/// Client interface to the brokerage backend. Everything this service knows
/// comes through these calls; there is no local storage behind them.
#[async_trait]
pub trait BackendApi: Send + Sync {
    async fn referral_code(&self, email: &str)
        -> Result<Option<String>, Error>;

    async fn users(&self) -> Result<Vec<User>, Error>;

    async fn user(&self, email: &str) -> Result<User, Error>;

    async fn deposits(&self, account_no: i64) -> Result<Vec<Deposit>, Error>;

    async fn withdrawals(
        &self,
        account_no: i64,
    ) -> Result<Vec<Withdrawal>, Error>;

    async fn deals(
        &self,
        account_no: i64,
        window: &StatsWindow,
    ) -> Result<Vec<Deal>, Error>;

    async fn update_commission(
        &self,
        query: &UpdateCommissionQuery,
    ) -> Result<(), Error>;

    async fn ib_withdrawal(
        &self,
        query: &IbWithdrawalQuery,
    ) -> Result<IbWithdrawalBody, Error>;

    async fn balance(&self, account_no: i64) -> Result<BalanceData, Error>;
}

pub struct HttpBackend {
    client: Client,
    config: Config,
    session: Arc<dyn SessionStore>,
}

impl HttpBackend {
    pub fn new(
        config: Config,
        session: Arc<dyn SessionStore>,
    ) -> Result<HttpBackend, Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(HttpBackend {
            client,
            config,
            session,
        })
    }

    fn get(&self, url: String) -> RequestBuilder {
        self.authorized(self.client.get(url))
    }

    fn post(&self, url: String) -> RequestBuilder {
        self.authorized(self.client.post(url))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.get(TOKEN_KEY) {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl BackendApi for HttpBackend {
    async fn referral_code(
        &self,
        email: &str,
    ) -> Result<Option<String>, Error> {
        let body = self
            .get(self.config.referral_url(email))
            .send()
            .await?
            .error_for_status()?
            .json::<ReferralBody>()
            .await?;

        Ok(body.referral_code)
    }

    async fn users(&self) -> Result<Vec<User>, Error> {
        let users = self
            .get(self.config.users_url())
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<User>>()
            .await?;

        Ok(users)
    }

    async fn user(&self, email: &str) -> Result<User, Error> {
        let user = self
            .get(self.config.user_url(email))
            .send()
            .await?
            .error_for_status()?
            .json::<User>()
            .await?;

        Ok(user)
    }

    async fn deposits(&self, account_no: i64) -> Result<Vec<Deposit>, Error> {
        let body = self
            .get(self.config.deposits_url(account_no))
            .send()
            .await?
            .error_for_status()?
            .json::<DepositsBody>()
            .await?;

        Ok(body.deposits)
    }

    async fn withdrawals(
        &self,
        account_no: i64,
    ) -> Result<Vec<Withdrawal>, Error> {
        let body = self
            .get(self.config.withdrawals_url(account_no))
            .send()
            .await?
            .error_for_status()?
            .json::<WithdrawalsBody>()
            .await?;

        Ok(body.withdrawals)
    }

    async fn deals(
        &self,
        account_no: i64,
        window: &StatsWindow,
    ) -> Result<Vec<Deal>, Error> {
        let query = DealsQuery {
            accountno: account_no.to_string(),
            sdate: window.sdate(),
            edate: window.edate(),
        };

        let body = self
            .post(self.config.deals_url())
            .json(&query)
            .send()
            .await?
            .error_for_status()?
            .json::<DealsBody>()
            .await?;

        Ok(body.data)
    }

    async fn update_commission(
        &self,
        query: &UpdateCommissionQuery,
    ) -> Result<(), Error> {
        self.post(self.config.update_commission_url())
            .json(query)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    async fn ib_withdrawal(
        &self,
        query: &IbWithdrawalQuery,
    ) -> Result<IbWithdrawalBody, Error> {
        let body = self
            .post(self.config.ib_withdrawal_url())
            .json(query)
            .send()
            .await?
            .json::<IbWithdrawalBody>()
            .await?;

        Ok(body)
    }

    async fn balance(&self, account_no: i64) -> Result<BalanceData, Error> {
        let query = BalanceQuery {
            accountno: account_no.to_string(),
        };

        let body = self
            .post(self.config.balance_url())
            .json(&query)
            .send()
            .await?
            .error_for_status()?
            .json::<BalanceBody>()
            .await?;

        Ok(body.data)
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::{HashMap, HashSet};

    /// Scriptable in-memory backend for pipeline tests.
    #[derive(Default)]
    pub struct StubBackend {
        pub referral: Option<String>,
        pub users: Vec<User>,
        pub deposits: HashMap<i64, Vec<Deposit>>,
        pub withdrawals: HashMap<i64, Vec<Withdrawal>>,
        pub deals: HashMap<i64, Vec<Deal>>,
        pub failing_deal_accounts: HashSet<i64>,
        pub failing_directory: bool,
        pub update_commission_fails: bool,
        pub withdrawal_verdict: Option<IbWithdrawalBody>,
        pub balance: Option<BalanceData>,
    }

    #[async_trait]
    impl BackendApi for StubBackend {
        async fn referral_code(
            &self,
            _email: &str,
        ) -> Result<Option<String>, Error> {
            Ok(self.referral.clone())
        }

        async fn users(&self) -> Result<Vec<User>, Error> {
            if self.failing_directory {
                return Err(Error::BackendError(
                    "user directory unavailable".to_owned(),
                ));
            }
            Ok(self.users.clone())
        }

        async fn user(&self, email: &str) -> Result<User, Error> {
            self.users
                .iter()
                .find(|u| u.email == email)
                .cloned()
                .ok_or_else(|| {
                    Error::BackendError(format!("unknown user {}", email))
                })
        }

        async fn deposits(
            &self,
            account_no: i64,
        ) -> Result<Vec<Deposit>, Error> {
            Ok(self.deposits.get(&account_no).cloned().unwrap_or_default())
        }

        async fn withdrawals(
            &self,
            account_no: i64,
        ) -> Result<Vec<Withdrawal>, Error> {
            Ok(self
                .withdrawals
                .get(&account_no)
                .cloned()
                .unwrap_or_default())
        }

        async fn deals(
            &self,
            account_no: i64,
            _window: &StatsWindow,
        ) -> Result<Vec<Deal>, Error> {
            if self.failing_deal_accounts.contains(&account_no) {
                return Err(Error::BackendError(format!(
                    "deal fetch failed for {}",
                    account_no
                )));
            }
            Ok(self.deals.get(&account_no).cloned().unwrap_or_default())
        }

        async fn update_commission(
            &self,
            _query: &UpdateCommissionQuery,
        ) -> Result<(), Error> {
            if self.update_commission_fails {
                return Err(Error::BackendError(
                    "commission recompute unavailable".to_owned(),
                ));
            }
            Ok(())
        }

        async fn ib_withdrawal(
            &self,
            _query: &IbWithdrawalQuery,
        ) -> Result<IbWithdrawalBody, Error> {
            self.withdrawal_verdict.clone().ok_or_else(|| {
                Error::BackendError("no scripted verdict".to_owned())
            })
        }

        async fn balance(
            &self,
            _account_no: i64,
        ) -> Result<BalanceData, Error> {
            self.balance.clone().ok_or_else(|| {
                Error::BackendError("no scripted balance".to_owned())
            })
        }
    }
}
