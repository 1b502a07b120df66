#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ErrorKind {
    Network,
    HttpStatus,
    Domain,
}

/// Failure surfaced by any [`crate::BankApi`] implementation.
///
/// Adapters classify at their own boundary: the gateway only ever matches on
/// these variants and never inspects messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response was received (refused connection, DNS, timeout, aborted request).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("http {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// A business rejection that is neither a transport nor an HTTP failure,
    /// e.g. the mock adapter refusing unknown credentials.
    #[error("{message}")]
    Domain { status: Option<u16>, message: String },
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn domain(status: u16, message: impl Into<String>) -> Self {
        Self::Domain {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Builds the error for a response status. A status of 0 means no
    /// response was ever read, so it is a transport failure.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        if status == 0 {
            Self::Network(message.into())
        } else {
            Self::HttpStatus {
                status,
                message: message.into(),
            }
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) => ErrorKind::Network,
            Self::HttpStatus { .. } => ErrorKind::HttpStatus,
            Self::Domain { .. } => ErrorKind::Domain,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Network(_) => None,
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Domain { status, .. } => *status,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Network(message)
            | Self::HttpStatus { message, .. }
            | Self::Domain { message, .. } => message,
        }
    }

    pub fn is_fallback_eligible(&self) -> bool {
        self.kind() == ErrorKind::Network
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify() {
        let cases: &[(&str, ApiError, ErrorKind, Option<u16>, bool)] = &[
            (
                "transport",
                ApiError::network("connection refused"),
                ErrorKind::Network,
                None,
                true,
            ),
            (
                "status_zero_is_transport",
                ApiError::from_status(0, "aborted"),
                ErrorKind::Network,
                None,
                true,
            ),
            (
                "forbidden",
                ApiError::from_status(403, "forbidden"),
                ErrorKind::HttpStatus,
                Some(403),
                false,
            ),
            (
                "server_error",
                ApiError::from_status(503, "unavailable"),
                ErrorKind::HttpStatus,
                Some(503),
                false,
            ),
            (
                "bad_credentials",
                ApiError::domain(401, "Invalid email or password"),
                ErrorKind::Domain,
                Some(401),
                false,
            ),
        ];

        for (name, error, kind, status, eligible) in cases {
            assert_eq!(error.kind(), *kind, "{name}");
            assert_eq!(error.status(), *status, "{name}");
            assert_eq!(error.is_fallback_eligible(), *eligible, "{name}");
        }
    }

    #[test]
    fn display_keeps_domain_message_verbatim() {
        let error = ApiError::domain(401, "Invalid email or password");
        assert_eq!(error.to_string(), "Invalid email or password");
        assert_eq!(error.message(), "Invalid email or password");
        assert_eq!(ErrorKind::HttpStatus.to_string(), "http-status");
    }
}
