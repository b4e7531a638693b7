use std::time::Duration;

/// Default delay applied before every store operation.
pub const DEFAULT_LATENCY_MS: u64 = 300;

/// Artificial round-trip delay standing in for a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency(Duration);

impl Latency {
    pub const fn none() -> Self {
        Self(Duration::ZERO)
    }

    pub const fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }

    pub fn duration(&self) -> Duration {
        self.0
    }

    pub async fn wait(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::from_millis(DEFAULT_LATENCY_MS)
    }
}
