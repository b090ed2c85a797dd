// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effects and events produced by the pause state machine

use crate::clock::TimeScale;
use crate::reason::PauseReason;
use serde::{Deserialize, Serialize};

/// Side effects requested by state machine transitions.
///
/// Transitions never perform side effects themselves; the coordinator
/// interprets these after the transition has completed.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Emit an event for subscribers to observe
    Emit(Event),
    /// Write the externally observed clock multiplier
    SetTimeScale(TimeScale),
    /// Log a message
    Log { level: LogLevel, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Events emitted at aggregate state transitions.
///
/// `Paused` and `Unpaused` fire at most once per edge transition: the
/// moment the mask goes 0 -> nonzero, or nonzero -> 0. Additional reasons
/// arriving while already paused, or releases that leave other reasons
/// held, emit nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// The clock stopped; `reason` is the first cause that held the gate
    Paused { reason: PauseReason },
    /// The clock resumed; `reason` is the last cause to release the gate
    Unpaused { reason: PauseReason },
    /// A scheduled delay elapsed
    DelayElapsed { id: String },
}

impl Event {
    /// Stable event name for subscription pattern matching
    pub fn name(&self) -> String {
        match self {
            Event::Paused { .. } => "pause:paused".to_string(),
            Event::Unpaused { .. } => "pause:unpaused".to_string(),
            Event::DelayElapsed { .. } => "delay:elapsed".to_string(),
        }
    }
}

#[cfg(test)]
#[path = "effect_tests.rs"]
mod tests;
