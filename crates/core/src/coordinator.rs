// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stateful pause coordinator
//!
//! Owns the pause gate (sole owner and sole mutator of the mask), applies
//! requests synchronously in call order, and interprets the resulting
//! effects: events go to the bus, the time scale goes to the sink, edges
//! get traced. Constructed explicitly by the application bootstrap and
//! handed to whichever subsystems need it; there is no global instance.

use crate::clock::TimeScale;
use crate::effect::{Effect, Event, LogLevel};
use crate::events::{EventBus, EventPattern, EventReceiver, Subscription};
use crate::gate::{PauseGate, PauseInput};
use crate::id::{IdGen, UuidIdGen};
use crate::reason::PauseReason;

/// Destination for the externally observed clock multiplier.
///
/// Written only when an edge transition produces a `SetTimeScale` effect,
/// never at intermediate steps.
pub trait TimeScaleSink: Send + Sync {
    fn set(&self, scale: TimeScale);
}

/// Default sink: an `Arc`-shared value the render/game loop reads each
/// frame
#[derive(Clone, Debug, Default)]
pub struct SharedTimeScale(std::sync::Arc<std::sync::RwLock<TimeScale>>);

impl SharedTimeScale {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> TimeScale {
        *self.0.read().unwrap_or_else(|e| e.into_inner())
    }
}

impl TimeScaleSink for SharedTimeScale {
    fn set(&self, scale: TimeScale) {
        *self.0.write().unwrap_or_else(|e| e.into_inner()) = scale;
    }
}

/// Process-wide pause coordinator.
///
/// All pause/unpause traffic from independent subsystems flows through
/// here; nothing else may touch the gate mask or the time-scale sink.
pub struct PauseCoordinator<S: TimeScaleSink = SharedTimeScale> {
    gate: PauseGate,
    bus: EventBus,
    sink: S,
}

impl PauseCoordinator<SharedTimeScale> {
    pub fn new() -> Self {
        Self::with_sink(EventBus::new(), SharedTimeScale::new())
    }
}

impl Default for PauseCoordinator<SharedTimeScale> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TimeScaleSink> PauseCoordinator<S> {
    pub fn with_sink(bus: EventBus, sink: S) -> Self {
        let coordinator = Self {
            gate: PauseGate::new(),
            bus,
            sink,
        };
        coordinator.sink.set(TimeScale::NORMAL);
        coordinator
    }

    /// Request suspension under a reason, stopping the clock.
    /// Absorbed as a no-op if already paused (the bit is still recorded).
    pub fn request_pause(&mut self, reason: PauseReason) {
        self.request_pause_scaled(reason, TimeScale::STOPPED);
    }

    /// Request suspension under a reason with a caller-supplied scale
    /// (e.g. slow-motion menus). The scale applies only if this request
    /// is the edge transition; later reasons never re-scale.
    pub fn request_pause_scaled(&mut self, reason: PauseReason, time_scale: TimeScale) {
        self.apply(PauseInput::Pause { reason, time_scale }, reason);
    }

    /// Release a reason. Releasing a reason that was never requested is
    /// a silent no-op, so independent subsystems can call this
    /// defensively without tracking each other's state.
    pub fn request_unpause(&mut self, reason: PauseReason) {
        self.apply(PauseInput::Unpause { reason }, reason);
    }

    /// Return to the running state unconditionally (process bootstrap)
    pub fn reset(&mut self) {
        let (gate, _) = self.gate.transition(PauseInput::Reset);
        self.gate = gate;
        self.sink.set(TimeScale::NORMAL);
        tracing::debug!("pause gate reset");
    }

    pub fn is_paused(&self) -> bool {
        self.gate.is_paused()
    }

    pub fn time_scale(&self) -> TimeScale {
        self.gate.time_scale()
    }

    /// Whether a specific reason currently holds the gate
    pub fn holds(&self, reason: PauseReason) -> bool {
        self.gate.holds(reason)
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Subscribe to coordinator events with a fresh subscriber id
    pub fn subscribe(
        &self,
        patterns: Vec<EventPattern>,
        description: impl Into<String>,
    ) -> EventReceiver {
        self.bus
            .subscribe(Subscription::new(UuidIdGen.next(), patterns, description))
    }

    fn apply(&mut self, input: PauseInput, reason: PauseReason) {
        let (gate, effects) = self.gate.transition(input);
        self.gate = gate;

        if effects.is_empty() {
            tracing::debug!(reason = %reason, "pause request absorbed (no edge)");
            return;
        }

        for effect in effects {
            self.interpret(effect);
        }
    }

    fn interpret(&self, effect: Effect) {
        match effect {
            Effect::Emit(event) => {
                match &event {
                    Event::Paused { reason } => {
                        tracing::info!(reason = %reason, "clock paused");
                    }
                    Event::Unpaused { reason } => {
                        tracing::info!(reason = %reason, "clock resumed");
                    }
                    Event::DelayElapsed { id } => {
                        tracing::debug!(id = %id, "delay elapsed");
                    }
                }
                self.bus.publish(event);
            }
            Effect::SetTimeScale(scale) => {
                self.sink.set(scale);
            }
            Effect::Log { level, message } => match level {
                LogLevel::Debug => tracing::debug!("{}", message),
                LogLevel::Info => tracing::info!("{}", message),
                LogLevel::Warn => tracing::warn!("{}", message),
                LogLevel::Error => tracing::error!("{}", message),
            },
        }
    }

    /// Publish effects produced outside the gate (e.g. the delay queue)
    pub fn publish_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.interpret(effect);
        }
    }
}

impl<S: TimeScaleSink> std::fmt::Debug for PauseCoordinator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PauseCoordinator")
            .field("gate", &self.gate)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
