//! Outbound agent events

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Notifications the agent raises for the host and effects layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AgentEvent {
    /// The agent relocated discontinuously, deliberately or through a
    /// teleport-sized ground correction
    Teleported {
        /// World position after the jump
        position: Vec3,
    },
    /// The call-for-help cue should start playing
    CalledForHelp,
    /// The agent reached grab range while stalking
    Captured {
        /// Seconds the capture/kill sequence should run for
        duration: f32,
    },
}

/// Handler trait for agent events
pub trait AgentEventHandler {
    /// Called when the agent raises an event
    fn on_event(&mut self, event: &AgentEvent);
}

/// Default handler that buffers events for the host to inspect
#[derive(Debug, Default)]
pub struct EventCollector {
    /// Events raised since the last clear
    pub events: Vec<AgentEvent>,
}

impl EventCollector {
    /// Create a new event collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all collected events
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Teleport events since the last clear
    pub fn teleports(&self) -> impl Iterator<Item = &AgentEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, AgentEvent::Teleported { .. }))
    }

    /// Capture events since the last clear
    pub fn captures(&self) -> impl Iterator<Item = &AgentEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, AgentEvent::Captured { .. }))
    }
}

impl AgentEventHandler for EventCollector {
    fn on_event(&mut self, event: &AgentEvent) {
        self.events.push(*event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_filters() {
        let mut collector = EventCollector::new();
        collector.on_event(&AgentEvent::Teleported {
            position: Vec3::ZERO,
        });
        collector.on_event(&AgentEvent::CalledForHelp);
        collector.on_event(&AgentEvent::Captured { duration: 4.0 });

        assert_eq!(collector.teleports().count(), 1);
        assert_eq!(collector.captures().count(), 1);
        assert_eq!(collector.events.len(), 3);

        collector.clear();
        assert!(collector.events.is_empty());
    }
}
