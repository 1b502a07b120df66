mod api;
mod client;
mod error;
mod token;

pub use client::{DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_MS, HEALTH_PATH, LiveBankApi};
pub use token::{NoToken, SharedToken, StaticToken, TokenSource};
