// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One-shot delayed events that respect the pause gate
//!
//! A scaled delay elapses in game time: while the gate is paused (scale
//! zero) it is frozen, and a slow-motion scale stretches it. An unscaled
//! delay elapses in real time regardless of pause. The queue is polled
//! from the host loop with the current clock and scale; it performs no
//! side effects itself and returns the effects to interpret.

use crate::clock::{Clock, TimeScale};
use crate::effect::{Effect, Event};
use crate::id::IdGen;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use thiserror::Error;

/// How a delay experiences time
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DelayKind {
    /// Game-time delay, frozen while the gate is paused
    Scaled,
    /// Real-time delay, unaffected by pause
    Unscaled,
}

/// A delay to schedule
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DelayConfig {
    #[serde(with = "humantime_serde")]
    pub delay: Duration,
    pub kind: DelayKind,
}

impl DelayConfig {
    pub fn scaled(delay: Duration) -> Self {
        Self {
            delay,
            kind: DelayKind::Scaled,
        }
    }

    pub fn unscaled(delay: Duration) -> Self {
        Self {
            delay,
            kind: DelayKind::Unscaled,
        }
    }
}

#[derive(Debug, Error)]
pub enum DelayError {
    #[error("delay id already scheduled: {id}")]
    DuplicateId { id: String },
}

#[derive(Clone, Debug)]
struct DelayEntry {
    id: String,
    remaining: Duration,
    kind: DelayKind,
    /// Wall instant up to which this entry has already been charged.
    /// Starts at the schedule time so an entry is never charged for time
    /// that passed before it existed.
    charged_until: Instant,
}

/// Pending one-shot delays, polled from the host loop.
///
/// Each entry fires `Event::DelayElapsed` exactly once and is removed.
#[derive(Clone, Debug, Default)]
pub struct DelayQueue {
    entries: Vec<DelayEntry>,
}

impl DelayQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a delay under a caller-chosen id
    pub fn schedule(
        &mut self,
        id: impl Into<String>,
        config: DelayConfig,
        clock: &impl Clock,
    ) -> Result<(), DelayError> {
        let id = id.into();
        if self.entries.iter().any(|e| e.id == id) {
            return Err(DelayError::DuplicateId { id });
        }
        self.entries.push(DelayEntry {
            id,
            remaining: config.delay,
            kind: config.kind,
            charged_until: clock.now(),
        });
        Ok(())
    }

    /// Schedule a delay under a freshly minted id
    pub fn schedule_with(
        &mut self,
        ids: &impl IdGen,
        config: DelayConfig,
        clock: &impl Clock,
    ) -> Result<String, DelayError> {
        let id = ids.next();
        self.schedule(id.clone(), config, clock)?;
        Ok(id)
    }

    /// Cancel a pending delay. Returns false if no such id is pending.
    pub fn cancel(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Advance pending delays and collect elapsed ones.
    ///
    /// `scale` is the current gate time scale: scaled entries advance by
    /// wall time multiplied by it, unscaled entries by wall time alone.
    /// Each entry is charged only for wall time since its own schedule
    /// instant or last poll, whichever is later.
    pub fn poll(&mut self, clock: &impl Clock, scale: TimeScale) -> Vec<Effect> {
        let now = clock.now();

        let mut effects = Vec::new();
        self.entries.retain_mut(|entry| {
            let raw = now.saturating_duration_since(entry.charged_until);
            entry.charged_until = now;

            let step = match entry.kind {
                DelayKind::Scaled => scaled_step(raw, scale),
                DelayKind::Unscaled => raw,
            };
            entry.remaining = entry.remaining.saturating_sub(step);

            if entry.remaining.is_zero() {
                effects.push(Effect::Emit(Event::DelayElapsed {
                    id: entry.id.clone(),
                }));
                false
            } else {
                true
            }
        });

        effects
    }
}

/// Scale a wall-time step, saturating instead of panicking on overflow
/// or a non-finite scale value.
fn scaled_step(raw: Duration, scale: TimeScale) -> Duration {
    if raw.is_zero() {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f32(raw.as_secs_f32() * scale.value()).unwrap_or(Duration::MAX)
}

#[cfg(test)]
#[path = "delay_tests.rs"]
mod tests;
