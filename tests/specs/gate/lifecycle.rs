//! Gate lifecycle specs
//!
//! Reset semantics and the running-state defaults.

use crate::prelude::*;
use timegate_core::{PauseReason, TimeScale};

#[test]
fn fresh_coordinator_reports_running_defaults() {
    let h = Harness::new();

    assert!(!h.coordinator.is_paused());
    assert_eq!(h.coordinator.time_scale(), TimeScale::NORMAL);
    assert_eq!(h.scale.get(), TimeScale::NORMAL);
}

#[test]
fn reset_clears_all_held_reasons() {
    let mut h = Harness::new();

    h.coordinator.request_pause(PauseReason::CutScene);
    h.coordinator.request_pause(PauseReason::EndGame);
    h.coordinator.reset();

    assert!(!h.coordinator.is_paused());
    assert_eq!(h.scale.get(), TimeScale::NORMAL);
    for reason in PauseReason::ALL {
        assert!(!h.coordinator.holds(reason));
    }
}

#[test]
fn reset_emits_no_events() {
    let mut h = Harness::new();

    h.coordinator.request_pause(PauseReason::CutScene);
    h.drain_event_names();

    h.coordinator.reset();
    assert!(h.drain_event_names().is_empty());
}

#[test]
fn pause_after_reset_is_a_fresh_edge() {
    let mut h = Harness::new();

    h.coordinator.request_pause(PauseReason::CutScene);
    h.coordinator.reset();
    h.drain_event_names();

    h.coordinator.request_pause(PauseReason::CutScene);
    assert_eq!(h.drain_event_names(), vec!["pause:paused".to_string()]);
}

#[test]
fn caller_supplied_scale_survives_until_the_edge_back() {
    let mut h = Harness::new();

    h.coordinator
        .request_pause_scaled(PauseReason::MapButton, TimeScale::new(0.5));
    assert_eq!(h.scale.get(), TimeScale::new(0.5));

    h.coordinator.request_unpause(PauseReason::MapButton);
    assert_eq!(h.scale.get(), TimeScale::NORMAL);
}
