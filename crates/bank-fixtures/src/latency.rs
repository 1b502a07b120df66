use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use wtf_bank_interface::ApiError;

pub const DEFAULT_DELAY_MS: u64 = 300;

#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSleeper;

#[async_trait]
impl Sleeper for NoopSleeper {
    async fn sleep(&self, _duration: Duration) {}
}

/// Records every requested delay without waiting.
#[derive(Debug, Default, Clone)]
pub struct RecordingSleeper {
    calls: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingSleeper {
    pub fn recorded(&self) -> Vec<Duration> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(duration);
    }
}

/// Simulated network latency shared by every mock response.
#[derive(Clone)]
pub struct Latency {
    sleeper: Arc<dyn Sleeper>,
    delay: Duration,
}

impl Default for Latency {
    fn default() -> Self {
        Self::new(Arc::new(TokioSleeper), Duration::from_millis(DEFAULT_DELAY_MS))
    }
}

impl Latency {
    pub fn new(sleeper: Arc<dyn Sleeper>, delay: Duration) -> Self {
        Self { sleeper, delay }
    }

    /// Resolves to `value` after the configured delay.
    pub async fn delay<T: Send>(&self, value: T) -> T {
        self.delay_for(value, self.delay).await
    }

    pub async fn delay_for<T: Send>(&self, value: T, delay: Duration) -> T {
        self.sleeper.sleep(delay).await;
        value
    }

    /// Rejects with a domain error after the configured delay.
    pub async fn delayed_error<T>(
        &self,
        message: impl Into<String>,
        status: u16,
    ) -> Result<T, ApiError> {
        let error = ApiError::domain(status, message);
        self.sleeper.sleep(self.delay).await;
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wtf_bank_interface::ErrorKind;

    #[tokio::test]
    async fn delay_goes_through_sleeper() {
        let sleeper = RecordingSleeper::default();
        let latency = Latency::new(Arc::new(sleeper.clone()), Duration::from_millis(250));

        assert_eq!(latency.delay(7).await, 7);
        assert_eq!(latency.delay_for("x", Duration::from_millis(10)).await, "x");

        assert_eq!(
            sleeper.recorded(),
            vec![Duration::from_millis(250), Duration::from_millis(10)]
        );
    }

    #[tokio::test]
    async fn delayed_error_is_domain() {
        let sleeper = RecordingSleeper::default();
        let latency = Latency::new(Arc::new(sleeper.clone()), Duration::from_millis(50));

        let err = latency
            .delayed_error::<()>("Invalid email or password", 401)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Domain);
        assert_eq!(err.status(), Some(401));
        assert_eq!(sleeper.recorded(), vec![Duration::from_millis(50)]);
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_sleeper_waits() {
        let latency = Latency::default();
        let start = tokio::time::Instant::now();

        latency.delay(()).await;

        assert!(start.elapsed() >= Duration::from_millis(DEFAULT_DELAY_MS));
    }
}
