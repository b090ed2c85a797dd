//! Event routing specs
//!
//! Subscribers see only the edges they asked for, at most once per edge.

use similar_asserts::assert_eq;
use timegate_core::{
    Event, EventBus, EventPattern, PauseCoordinator, PauseReason, SharedTimeScale,
};

#[test]
fn paused_only_subscriber_misses_unpaused() {
    let mut coordinator = PauseCoordinator::new();
    let mut rx = coordinator.subscribe(vec![EventPattern::new("pause:paused")], "pause HUD");

    coordinator.request_pause(PauseReason::MiniGame);
    coordinator.request_unpause(PauseReason::MiniGame);

    assert!(matches!(rx.try_recv(), Ok(Event::Paused { .. })));
    assert!(rx.try_recv().is_err());
}

#[test]
fn multiple_subscribers_each_get_the_edge() {
    let mut coordinator = PauseCoordinator::new();
    let mut hud = coordinator.subscribe(vec![EventPattern::new("pause:*")], "HUD");
    let mut audio = coordinator.subscribe(vec![EventPattern::new("pause:*")], "audio ducking");

    coordinator.request_pause(PauseReason::CutScene);

    assert!(matches!(hud.try_recv(), Ok(Event::Paused { .. })));
    assert!(matches!(audio.try_recv(), Ok(Event::Paused { .. })));
}

#[test]
fn edge_events_name_the_causing_reason() {
    let mut coordinator = PauseCoordinator::new();
    let mut rx = coordinator.subscribe(vec![EventPattern::new("pause:*")], "observer");

    coordinator.request_pause(PauseReason::CutScene);
    coordinator.request_pause(PauseReason::MiniGame);
    coordinator.request_unpause(PauseReason::CutScene);
    coordinator.request_unpause(PauseReason::MiniGame);

    let first = rx.try_recv().unwrap();
    let second = rx.try_recv().unwrap();

    // The edge in carries the first cause; the edge out, the last release
    assert_eq!(
        first,
        Event::Paused {
            reason: PauseReason::CutScene
        }
    );
    assert_eq!(
        second,
        Event::Unpaused {
            reason: PauseReason::MiniGame
        }
    );
}

#[test]
fn dropped_receiver_does_not_stall_the_coordinator() {
    let bus = EventBus::new();
    let mut coordinator = PauseCoordinator::with_sink(bus, SharedTimeScale::new());

    let rx = coordinator.subscribe(vec![EventPattern::new("**")], "short-lived");
    drop(rx);

    // Publishing into a dropped channel is absorbed
    coordinator.request_pause(PauseReason::PauseButton);
    coordinator.request_unpause(PauseReason::PauseButton);
    assert!(!coordinator.is_paused());
}
