#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use bank_gateway::{GatewayConfig, ResilientGateway};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wtf_bank_client::{HEALTH_PATH, LiveBankApi};
use wtf_bank_fixtures::NoopSleeper;
use wtf_bank_interface::BankApi;
use wtf_bank_mock::{MockBankApi, MockConfig};

pub struct TestHarness {
    pub mock_server: MockServer,
}

impl TestHarness {
    pub async fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();

        Self {
            mock_server: MockServer::start().await,
        }
    }

    pub fn live(&self) -> Arc<LiveBankApi> {
        Arc::new(LiveBankApi::new(self.mock_server.uri()))
    }

    /// Live calls and the health probe both go to the mock server.
    pub fn gateway(&self, config: GatewayConfig) -> ResilientGateway {
        ResilientGateway::new(self.live(), mock_backend(), config)
    }

    /// The probe goes to the mock server; live calls hit a closed port.
    pub fn gateway_with_unreachable_live(&self, config: GatewayConfig) -> ResilientGateway {
        ResilientGateway::from_parts(
            Arc::new(LiveBankApi::new(unreachable_base_url())),
            self.live(),
            mock_backend(),
            config,
        )
    }

    pub async fn mount_health(&self, status: u16, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path(HEALTH_PATH))
            .respond_with(ResponseTemplate::new(status))
            .expect(expected_calls)
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mount_slow_health(&self, delay: Duration) {
        Mock::given(method("GET"))
            .and(path(HEALTH_PATH))
            .respond_with(ResponseTemplate::new(200).set_delay(delay))
            .expect(1)
            .mount(&self.mock_server)
            .await;
    }
}

pub fn mock_backend() -> Arc<dyn BankApi> {
    Arc::new(MockBankApi::new(
        MockConfig::default().with_sleeper(Arc::new(NoopSleeper)),
    ))
}

pub fn fast_config() -> GatewayConfig {
    GatewayConfig::new().with_probe_timeout(Duration::from_millis(200))
}

/// A base URL on which nothing is listening.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// A server that accepts connections and closes them without answering.
/// Returns its base URL and the number of connections accepted so far.
pub async fn hangup_server() -> (String, Arc<AtomicUsize>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    let accepted = Arc::new(AtomicUsize::new(0));

    let counter = accepted.clone();
    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            counter.fetch_add(1, Ordering::SeqCst);
            drop(stream);
        }
    });

    (url, accepted)
}

/// A server that accepts connections and never writes a byte back.
pub async fn silent_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(async move {
        let mut open = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            open.push(stream);
        }
    });

    url
}
