// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! timegate-core: multi-reason pause coordination for a shared runtime clock
//!
//! This crate provides:
//! - A pure pause state machine over a reason bitmask, with edge-only
//!   notification effects
//! - A stateful coordinator that owns the gate, routes events to a bus,
//!   and drives the externally observed time scale
//! - Scaled/unscaled one-shot delays that respect the pause gate
//!
//! The hazard this exists for: a boolean pause flag breaks under
//! overlapping requests — the second "unpause" from an unrelated cause
//! would incorrectly resume the clock. Here the clock resumes only when
//! every suspending reason has cleared.

pub mod clock;
pub mod id;

pub mod coordinator;
pub mod delay;
pub mod events;
pub mod gate;

// Shared leaf types
pub mod effect;
pub mod reason;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock, TimeScale};
pub use coordinator::{PauseCoordinator, SharedTimeScale, TimeScaleSink};
pub use delay::{DelayConfig, DelayError, DelayKind, DelayQueue};
pub use effect::{Effect, Event, LogLevel};
pub use events::{EventBus, EventPattern, EventReceiver, SubscriberId, Subscription};
pub use gate::{BitLock, PauseGate, PauseInput};
pub use id::{IdGen, SequentialIdGen, UuidIdGen};
pub use reason::{ParseReasonError, PauseReason};
