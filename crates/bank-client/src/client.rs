use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Method, multipart};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, RequestBuilder};
use reqwest_tracing::TracingMiddleware;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;
use wtf_bank_interface::{ApiError, UploadDocumentRequest};

use crate::error;
use crate::token::{NoToken, TokenSource};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const HEALTH_PATH: &str = "/actuator/health";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10 * 1000;

/// HTTP adapter for the real banking backend.
///
/// Performs exactly one request per call. Nothing here retries or falls back;
/// that decision belongs to whoever holds the client.
#[derive(Clone)]
pub struct LiveBankApi {
    client: ClientWithMiddleware,
    base_url: String,
    tokens: Arc<dyn TokenSource>,
    request_timeout: Duration,
}

impl std::fmt::Debug for LiveBankApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveBankApi")
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .finish_non_exhaustive()
    }
}

impl LiveBankApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let client = ClientBuilder::new(client)
            .with(TracingMiddleware::default())
            .build();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tokens: Arc::new(NoToken),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        }
    }

    /// Upper bound for a whole request, connect included. A backend that
    /// accepts the connection but never answers fails as a network error.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_token_source(mut self, tokens: impl TokenSource + 'static) -> Self {
        self.tokens = Arc::new(tokens);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// An unparseable base URL can never reach a backend, so it surfaces as a
    /// transport failure.
    pub(crate) fn url(&self, path: &str, query: &[(&str, String)]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| ApiError::network(format!("invalid backend url: {e}")))?;

        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }

        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self
            .client
            .request(method, url)
            .timeout(self.request_timeout)
            .header(ACCEPT, "application/json");

        match self.tokens.bearer_token() {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
            None => builder,
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(path, query)?;
        self.send(self.request(Method::GET, url)).await
    }

    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path, &[])?;
        self.send(self.request(method, url).json(body)).await
    }

    pub(crate) async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        request: UploadDocumentRequest,
    ) -> Result<T, ApiError> {
        let file = multipart::Part::bytes(request.content)
            .file_name(request.file_name)
            .mime_str(&request.content_type)
            .map_err(|e| ApiError::Domain {
                status: None,
                message: format!("invalid content type: {e}"),
            })?;

        let form = multipart::Form::new()
            .text("customerId", request.customer_id.to_string())
            .text("documentType", request.document_type.to_string())
            .part("file", file);

        let url = self.url(path, &[])?;
        self.send(self.request(Method::POST, url).multipart(form))
            .await
    }

    pub(crate) async fn ping(&self) -> Result<(), ApiError> {
        let url = self.url(HEALTH_PATH, &[])?;
        let response = self
            .request(Method::GET, url)
            .send()
            .await
            .map_err(error::from_middleware)?;
        error::ensure_success(response).await?;
        Ok(())
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder.send().await.map_err(error::from_middleware)?;
        let response = error::ensure_success(response).await?;

        let status = response.status();
        response
            .json::<T>()
            .await
            .map_err(|e| error::from_body(status, e))
    }
}
