use std::time::Duration;

pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 3 * 1000;

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub force_mock: bool,
    pub probe_timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GatewayConfig {
    pub fn new() -> Self {
        Self {
            force_mock: false,
            probe_timeout: Duration::from_millis(DEFAULT_PROBE_TIMEOUT_MS),
        }
    }

    pub fn with_force_mock(mut self, force_mock: bool) -> Self {
        self.force_mock = force_mock;
        self
    }

    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }
}
