use std::sync::{Arc, PoisonError, RwLock};

/// Where the live client gets its bearer token. Persisting credentials is the
/// caller's business; the client only asks for the current value per request.
pub trait TokenSource: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoToken;

impl TokenSource for NoToken {
    fn bearer_token(&self) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

impl TokenSource for StaticToken {
    fn bearer_token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// An in-memory slot that can be filled after login and cleared on logout.
#[derive(Debug, Default, Clone)]
pub struct SharedToken {
    inner: Arc<RwLock<Option<String>>>,
}

impl SharedToken {
    pub fn set(&self, token: impl Into<String>) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }

    pub fn clear(&self) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl TokenSource for SharedToken {
    fn bearer_token(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_token_round_trip() {
        let token = SharedToken::default();
        let handle = token.clone();

        assert_eq!(token.bearer_token(), None);
        handle.set("abc");
        assert_eq!(token.bearer_token().as_deref(), Some("abc"));
        handle.clear();
        assert_eq!(token.bearer_token(), None);
    }
}
