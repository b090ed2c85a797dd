//! Shared helpers for timegate specs

use timegate_core::{
    EventBus, EventPattern, EventReceiver, PauseCoordinator, SharedTimeScale,
};

/// A coordinator wired the way the application bootstrap would wire it:
/// a shared time-scale value for the game loop plus an all-events
/// subscriber for assertions.
pub struct Harness {
    pub coordinator: PauseCoordinator<SharedTimeScale>,
    pub scale: SharedTimeScale,
    pub events: EventReceiver,
}

impl Harness {
    pub fn new() -> Self {
        let scale = SharedTimeScale::new();
        let coordinator = PauseCoordinator::with_sink(EventBus::new(), scale.clone());
        let events = coordinator.subscribe(vec![EventPattern::new("**")], "spec observer");
        Self {
            coordinator,
            scale,
            events,
        }
    }

    /// Drain every event received so far, as stable event names
    pub fn drain_event_names(&mut self) -> Vec<String> {
        let mut names = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            names.push(event.name());
        }
        names
    }
}
