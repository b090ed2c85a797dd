// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event delivery: pattern-matched subscriptions over a bus
//!
//! The coordinator publishes `pause:paused` / `pause:unpaused` here at
//! most once per edge transition; subscribers pick what they care about
//! by name pattern.

pub mod bus;
pub mod subscription;

pub use bus::{EventBus, EventReceiver, EventSender};
pub use subscription::{EventPattern, SubscriberId, Subscription};
