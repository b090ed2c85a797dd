// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reason-agnostic bitmask with edge-free primitives
//!
//! Bit `i` set means holder `i` currently asserts the lock. The mask has
//! no idea what the bits mean; callers own the bit assignment.

/// A fixed-capacity set of independent boolean holders.
///
/// Lock and unlock are idempotent; re-locking a held bit or unlocking a
/// clear bit is a no-op on observable state. Bit indices must be below
/// the mask width (32); the typed reason API upholds this.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BitLock {
    mask: u32,
}

impl BitLock {
    pub const fn new() -> Self {
        Self { mask: 0 }
    }

    /// Clear all bits unconditionally (process initialization only)
    pub fn reset(&mut self) {
        self.mask = 0;
    }

    /// Set the nth bit
    pub fn lock_bit(&mut self, nth: u8) {
        self.mask |= 1 << nth;
    }

    /// Clear the nth bit
    pub fn unlock_bit(&mut self, nth: u8) {
        self.mask &= !(1 << nth);
    }

    /// Whether the nth bit is set
    pub const fn is_bit_set(&self, nth: u8) -> bool {
        self.mask & (1 << nth) != 0
    }

    /// Whether any bit is set
    pub const fn is_locked(&self) -> bool {
        self.mask != 0
    }

    pub const fn mask(&self) -> u32 {
        self.mask
    }
}

#[cfg(test)]
#[path = "bitlock_tests.rs"]
mod tests;
