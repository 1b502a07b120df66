use reqwest::{Response, StatusCode};
use wtf_bank_interface::ApiError;

pub(crate) fn from_middleware(error: reqwest_middleware::Error) -> ApiError {
    match error {
        reqwest_middleware::Error::Reqwest(e) => from_reqwest(e),
        reqwest_middleware::Error::Middleware(e) => ApiError::network(e.to_string()),
    }
}

pub(crate) fn from_reqwest(error: reqwest::Error) -> ApiError {
    match error.status() {
        Some(status) => ApiError::from_status(status.as_u16(), error.to_string()),
        None => ApiError::network(error.to_string()),
    }
}

/// A 2xx whose body could not be read is still a reachable backend, unless
/// the connection dropped while reading.
pub(crate) fn from_body(status: StatusCode, error: reqwest::Error) -> ApiError {
    if error.is_decode() {
        ApiError::Domain {
            status: Some(status.as_u16()),
            message: format!("unexpected response body: {error}"),
        }
    } else {
        ApiError::network(error.to_string())
    }
}

pub(crate) async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::debug!(status = status.as_u16(), "bank_api_error_response");
    Err(ApiError::from_status(
        status.as_u16(),
        error_message(status, &body),
    ))
}

fn error_message(status: StatusCode, body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        error: Option<String>,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message.or(parsed.error).filter(|m| !m.is_empty()) {
            return message;
        }
    }

    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }

    status
        .canonical_reason()
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| status.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_extraction() {
        let cases: &[(&str, StatusCode, &str, &str)] = &[
            (
                "json_message",
                StatusCode::FORBIDDEN,
                r#"{"message":"Access denied","status":403}"#,
                "Access denied",
            ),
            (
                "json_error",
                StatusCode::UNAUTHORIZED,
                r#"{"error":"Unauthorized"}"#,
                "Unauthorized",
            ),
            (
                "plain_text",
                StatusCode::BAD_GATEWAY,
                "upstream exploded\n",
                "upstream exploded",
            ),
            (
                "empty_body",
                StatusCode::SERVICE_UNAVAILABLE,
                "",
                "Service Unavailable",
            ),
            (
                "json_without_message",
                StatusCode::NOT_FOUND,
                r#"{"path":"/x"}"#,
                r#"{"path":"/x"}"#,
            ),
        ];

        for (name, status, body, expected) in cases {
            assert_eq!(error_message(*status, body), *expected, "{name}");
        }
    }
}
