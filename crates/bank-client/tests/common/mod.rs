#![allow(dead_code)]

use std::sync::Arc;

use bank_client::{LiveBankApi, StaticToken};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wtf_bank_fixtures::NoopSleeper;
use wtf_bank_mock::{MockBankApi, MockConfig};

pub const TEST_TOKEN: &str = "test-token";

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

    pub fn api(&self) -> LiveBankApi {
        LiveBankApi::new(self.mock_server.uri())
            .with_token_source(StaticToken(TEST_TOKEN.to_string()))
    }

    pub async fn mount_json(
        &self,
        http_method: &str,
        endpoint: &str,
        status: u16,
        body: serde_json::Value,
    ) {
        Mock::given(method(http_method))
            .and(path(endpoint))
            .and(header("Authorization", format!("Bearer {TEST_TOKEN}").as_str()))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .expect(1)
            .mount(&self.mock_server)
            .await;
    }
}

/// A mock backend with no latency, used as the source of expected payloads.
pub fn fixture_backend() -> MockBankApi {
    MockBankApi::new(MockConfig::default().with_sleeper(Arc::new(NoopSleeper)))
}

/// A base URL on which nothing is listening.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
