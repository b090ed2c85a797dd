//! Overlapping pause reason specs
//!
//! The key correctness property: a second "unpause" from an unrelated
//! cause must never resume the clock while another reason still wants it
//! paused.

use crate::prelude::*;
use similar_asserts::assert_eq;
use timegate_core::{PauseReason, TimeScale};

#[test]
fn cut_scene_and_mini_game_overlap_scenario() {
    let mut h = Harness::new();

    // Cut-scene pauses: edge, clock stops
    h.coordinator.request_pause(PauseReason::CutScene);
    assert!(h.coordinator.is_paused());
    assert_eq!(h.scale.get(), TimeScale::STOPPED);

    // Mini-game pauses on top: still paused, scale untouched, no event
    h.coordinator.request_pause(PauseReason::MiniGame);
    assert!(h.coordinator.is_paused());
    assert_eq!(h.scale.get(), TimeScale::STOPPED);

    // Cut-scene ends: mini-game still holds the gate
    h.coordinator.request_unpause(PauseReason::CutScene);
    assert!(h.coordinator.is_paused());

    // Mini-game ends: true edge back to running
    h.coordinator.request_unpause(PauseReason::MiniGame);
    assert!(!h.coordinator.is_paused());
    assert_eq!(h.scale.get(), TimeScale::NORMAL);

    // Exactly one paused and one unpaused over the whole exchange
    assert_eq!(
        h.drain_event_names(),
        vec!["pause:paused".to_string(), "pause:unpaused".to_string()]
    );
}

#[test]
fn pausing_same_reason_twice_fires_once() {
    let mut h = Harness::new();

    h.coordinator.request_pause(PauseReason::PauseButton);
    h.coordinator.request_pause(PauseReason::PauseButton);

    assert_eq!(h.drain_event_names(), vec!["pause:paused".to_string()]);
}

#[test]
fn unpausing_a_reason_never_paused_changes_nothing() {
    let mut h = Harness::new();

    h.coordinator.request_unpause(PauseReason::MapButton);

    assert!(!h.coordinator.is_paused());
    assert_eq!(h.scale.get(), TimeScale::NORMAL);
    assert!(h.drain_event_names().is_empty());
}

#[test]
fn independent_subsystems_can_release_defensively() {
    let mut h = Harness::new();

    // A menu closes and defensively unpauses even though end-game paused
    h.coordinator.request_pause(PauseReason::EndGame);
    h.coordinator.request_unpause(PauseReason::MapButton);
    h.coordinator.request_unpause(PauseReason::MiniGame);

    assert!(h.coordinator.is_paused());
    assert_eq!(h.drain_event_names(), vec!["pause:paused".to_string()]);
}

#[test]
fn all_five_reasons_stack_and_unwind() {
    let mut h = Harness::new();

    for reason in PauseReason::ALL {
        h.coordinator.request_pause(reason);
    }
    for reason in PauseReason::ALL {
        assert!(h.coordinator.is_paused());
        h.coordinator.request_unpause(reason);
    }

    assert!(!h.coordinator.is_paused());
    assert_eq!(
        h.drain_event_names(),
        vec!["pause:paused".to_string(), "pause:unpaused".to_string()]
    );
}
