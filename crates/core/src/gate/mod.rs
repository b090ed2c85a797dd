// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The pause gate: a reason-agnostic bitmask leaf plus the state machine
//! that maps named reasons onto it and detects edge transitions.

pub mod bitlock;
pub mod pause;

pub use bitlock::BitLock;
pub use pause::{PauseGate, PauseInput};
