mod config;
mod env;
mod gateway;
mod mode;

pub use config::{DEFAULT_PROBE_TIMEOUT_MS, GatewayConfig};
pub use env::Env;
pub use gateway::ResilientGateway;
pub use mode::{Mode, ModeInfo};
