// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Time-scale values and clock abstraction for testable time handling

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Multiplier applied to the externally observed runtime clock.
///
/// Written only at true pause edge transitions, never at intermediate
/// steps, so observers never see a transient incorrect speed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "f32")]
pub struct TimeScale(f32);

impl TimeScale {
    /// Clock fully stopped (the default while paused)
    pub const STOPPED: TimeScale = TimeScale(0.0);
    /// Real-time speed (the running state)
    pub const NORMAL: TimeScale = TimeScale(1.0);

    /// Create a time scale, clamped to be non-negative.
    /// A NaN input clamps to zero.
    pub fn new(value: f32) -> Self {
        Self(value.max(0.0))
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

impl From<f32> for TimeScale {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl Default for TimeScale {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl std::fmt::Display for TimeScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A clock that provides the current time
pub trait Clock: Clone + Send + Sync {
    fn now(&self) -> Instant;
}

/// Real system clock
#[derive(Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Fake clock for testing with controllable time
#[derive(Clone)]
pub struct FakeClock {
    current: Arc<Mutex<Instant>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            current: Arc::new(Mutex::new(Instant::now())),
        }
    }

    /// Advance the clock by the given duration
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current += duration;
    }

    /// Set the clock to a specific instant
    pub fn set(&self, instant: Instant) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = instant;
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
