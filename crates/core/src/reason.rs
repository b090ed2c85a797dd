// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Named reasons for suspending the runtime clock
//!
//! Every subsystem that can pause the game does so under exactly one of
//! these reasons. The reason-to-bit mapping is an explicit, reviewed table
//! rather than an enum ordinal cast, so reordering variants cannot silently
//! reassign bits.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A cause that can independently request the shared clock be suspended
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PauseReason {
    /// The user's pause button / pause menu
    PauseButton,
    /// The full-screen map overlay
    MapButton,
    /// An embedded mini-game taking over input
    MiniGame,
    /// A scripted cut-scene
    CutScene,
    /// End-of-game screen
    EndGame,
}

/// Error parsing a reason name
#[derive(Debug, Error)]
#[error("unknown pause reason: {0:?}")]
pub struct ParseReasonError(String);

impl PauseReason {
    /// All reasons, in bit order
    pub const ALL: [PauseReason; 5] = [
        PauseReason::PauseButton,
        PauseReason::MapButton,
        PauseReason::MiniGame,
        PauseReason::CutScene,
        PauseReason::EndGame,
    ];

    /// The dedicated bit this reason owns in the gate mask.
    ///
    /// Indices are assigned here explicitly and must never be reused or
    /// reassigned; `reason_tests.rs` asserts the table is a bijection.
    pub const fn bit_index(self) -> u8 {
        match self {
            PauseReason::PauseButton => 0,
            PauseReason::MapButton => 1,
            PauseReason::MiniGame => 2,
            PauseReason::CutScene => 3,
            PauseReason::EndGame => 4,
        }
    }

    /// Stable name used in event names, log fields, and config
    pub const fn as_str(self) -> &'static str {
        match self {
            PauseReason::PauseButton => "pause-button",
            PauseReason::MapButton => "map-button",
            PauseReason::MiniGame => "mini-game",
            PauseReason::CutScene => "cut-scene",
            PauseReason::EndGame => "end-game",
        }
    }
}

impl std::fmt::Display for PauseReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PauseReason {
    type Err = ParseReasonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PauseReason::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| ParseReasonError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "reason_tests.rs"]
mod tests;
