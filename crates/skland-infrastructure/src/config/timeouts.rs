use std::time::Duration;

/// Timeout and pacing durations for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// HTTP request timeout
    pub http_request: Duration,

    /// Pause between two accounts
    pub account_interval: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            http_request: Duration::from_secs(9),
            account_interval: Duration::from_secs(1),
        }
    }
}

impl TimeoutConfig {
    pub fn with_account_interval(mut self, interval: Duration) -> Self {
        self.account_interval = interval;
        self
    }
}
