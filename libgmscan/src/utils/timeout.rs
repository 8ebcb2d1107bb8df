//! Timeout helpers used across the crate.

use std::time::{Duration, Instant};

use crate::constants::DEFAULT_READ_TIMEOUT_MS;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// The modules' default read timeout as Duration.
pub fn default_read_timeout() -> Duration {
    ms(DEFAULT_READ_TIMEOUT_MS)
}

/// A fixed point in time that a multi-step read must finish by.
#[derive(Debug, Clone, Copy)]
pub struct Deadline(Instant);

impl Deadline {
    pub fn after_ms(timeout_ms: u64) -> Self {
        Self(Instant::now() + ms(timeout_ms))
    }

    /// Time left, or None once the deadline has passed.
    pub fn remaining(&self) -> Option<Duration> {
        self.0
            .checked_duration_since(Instant::now())
            .filter(|d| !d.is_zero())
    }

    pub fn expired(&self) -> bool {
        self.remaining().is_none()
    }
}
