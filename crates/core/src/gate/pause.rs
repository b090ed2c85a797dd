// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pause state machine with edge-transition detection
//!
//! Maps named pause reasons onto [`BitLock`] bits and emits effects only
//! at true aggregate transitions: mask 0 -> nonzero fires `Paused`,
//! nonzero -> 0 fires `Unpaused`. Overlapping reasons never re-fire pause
//! side effects or change the time scale out from under an earlier reason.

use super::bitlock::BitLock;
use crate::clock::TimeScale;
use crate::effect::{Effect, Event};
use crate::reason::PauseReason;

/// Inputs that drive pause transitions
#[derive(Clone, Copy, Debug)]
pub enum PauseInput {
    /// Request suspension under a reason, with the scale to apply while
    /// paused. The "paused" event precedes the bit being set, matching
    /// the documented edge ordering.
    Pause {
        reason: PauseReason,
        time_scale: TimeScale,
    },
    /// Release a reason. Only acts if that reason currently holds a bit;
    /// releasing a reason that was never requested is a silent no-op.
    Unpause { reason: PauseReason },
    /// Return to the initial running state, dropping all held reasons
    Reset,
}

/// The pause gate: a bit lock plus the derived paused flag and scale.
///
/// Invariant: `is_paused() == (mask != 0)` after every transition.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PauseGate {
    lock: BitLock,
    is_paused: bool,
    time_scale: TimeScale,
}

impl PauseGate {
    pub fn new() -> Self {
        Self {
            lock: BitLock::new(),
            is_paused: false,
            time_scale: TimeScale::NORMAL,
        }
    }

    pub const fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub const fn time_scale(&self) -> TimeScale {
        self.time_scale
    }

    /// Whether this specific reason currently holds the gate
    pub const fn holds(&self, reason: PauseReason) -> bool {
        self.lock.is_bit_set(reason.bit_index())
    }

    /// Pure state transition function
    pub fn transition(&self, input: PauseInput) -> (PauseGate, Vec<Effect>) {
        let mut next = *self;
        let mut effects = Vec::new();

        match input {
            PauseInput::Pause { reason, time_scale } => {
                // The edge check must read the mask before the bit is set,
                // otherwise a second reason arriving while already paused
                // would re-fire the notification and reset the scale.
                if !next.lock.is_locked() {
                    next.is_paused = true;
                    next.time_scale = time_scale;
                    effects.push(Effect::Emit(Event::Paused { reason }));
                    effects.push(Effect::SetTimeScale(time_scale));
                }
                next.lock.lock_bit(reason.bit_index());
            }

            PauseInput::Unpause { reason } => {
                // Only release a lock you hold
                if next.lock.is_bit_set(reason.bit_index()) {
                    next.lock.unlock_bit(reason.bit_index());

                    if !next.lock.is_locked() {
                        next.is_paused = false;
                        next.time_scale = TimeScale::NORMAL;
                        effects.push(Effect::Emit(Event::Unpaused { reason }));
                        effects.push(Effect::SetTimeScale(TimeScale::NORMAL));
                    }
                }
            }

            PauseInput::Reset => {
                next.lock.reset();
                next.is_paused = false;
                next.time_scale = TimeScale::NORMAL;
            }
        }

        debug_assert_eq!(next.is_paused, next.lock.is_locked());

        (next, effects)
    }
}

#[cfg(test)]
#[path = "pause_tests.rs"]
mod tests;
