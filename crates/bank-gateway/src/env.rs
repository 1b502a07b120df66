use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use wtf_bank_client::{DEFAULT_BASE_URL, LiveBankApi, TokenSource};
use wtf_bank_mock::MockConfig;

use crate::GatewayConfig;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Env {
    /// Read once at startup. The operator can still flip it at runtime.
    #[serde(default)]
    pub bank_force_mock: bool,
    #[serde(default = "default_base_url")]
    pub bank_api_base_url: String,
    #[serde(default)]
    pub bank_mock_delay_ms: Option<u64>,
    #[serde(default)]
    pub bank_probe_timeout_ms: Option<u64>,
    #[serde(default)]
    pub bank_request_timeout_ms: Option<u64>,
}

impl Default for Env {
    fn default() -> Self {
        Self {
            bank_force_mock: false,
            bank_api_base_url: default_base_url(),
            bank_mock_delay_ms: None,
            bank_probe_timeout_ms: None,
            bank_request_timeout_ms: None,
        }
    }
}

impl Env {
    /// Reads `.env` if present, then the process environment.
    pub fn load() -> Result<Self, envy::Error> {
        let _ = dotenvy::dotenv();
        envy::from_env()
    }

    pub fn gateway_config(&self) -> GatewayConfig {
        let config = GatewayConfig::new().with_force_mock(self.bank_force_mock);
        match self.bank_probe_timeout_ms {
            Some(ms) => config.with_probe_timeout(Duration::from_millis(ms)),
            None => config,
        }
    }

    pub fn mock_config(&self) -> MockConfig {
        let config = MockConfig::default();
        match self.bank_mock_delay_ms {
            Some(ms) => config.with_delay(Duration::from_millis(ms)),
            None => config,
        }
    }

    pub fn live_client(&self, tokens: impl TokenSource + 'static) -> Arc<LiveBankApi> {
        let client = LiveBankApi::new(&self.bank_api_base_url).with_token_source(tokens);
        Arc::new(match self.bank_request_timeout_ms {
            Some(ms) => client.with_request_timeout(Duration::from_millis(ms)),
            None => client,
        })
    }
}
