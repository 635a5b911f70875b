pub use self::{
    backend::{BackendApi, HttpBackend},
    rates::Rates,
    session::{MemorySessionStore, SessionStore, TOKEN_KEY},
};

pub mod backend;
mod rates;
mod session;
