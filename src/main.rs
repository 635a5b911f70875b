use std::{env, sync::Arc};

use tracing::{error, Level};

use ib_aggregator::{
    configuration::{get_configuration, set_configuration, AppState, State},
    error::Error,
    provider::{HttpBackend, MemorySessionStore, Rates, SessionStore, TOKEN_KEY},
    server,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let result = app_main().await;

    if let Err(err) = &result {
        error!("{}", err);
    }

    result
}

async fn app_main() -> Result<(), Error> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_level(true)
        .with_max_level(Level::INFO)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    set_configuration()?;
    let config = match get_configuration() {
        Ok(config) => config,
        Err(e) => return Err(Error::ConfigurationError(e.to_string())),
    };

    let session: Arc<dyn SessionStore> =
        Arc::new(MemorySessionStore::default());
    if let Ok(token) = env::var("BACKEND_TOKEN") {
        session.set(TOKEN_KEY, token);
    }

    let backend = HttpBackend::new(config.clone(), session.clone())?;
    let rates = Rates::new(config.clone())?;

    let state = State::new(config, Arc::new(backend), rates, session);
    let app_state = AppState::new(state);

    server::server_task(&app_state).await
}
