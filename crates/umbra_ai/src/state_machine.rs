//! Hunt behavior states and their explicit transition function

use serde::{Deserialize, Serialize};

/// Hunt phases for the stalker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BehaviorState {
    /// Holding still, waiting for the hunt trigger
    #[default]
    Idle,
    /// Playing the call-for-help cue before the pursuit starts
    CallingForHelp,
    /// Actively pursuing the target
    Stalking,
}

/// Explicit transition function over [`BehaviorState`].
///
/// Inbound triggers arrive as method calls and return whether they were
/// accepted. Redundant triggers (a second "begin hunt" while already
/// hunting, a completion signal outside `CallingForHelp`) are ignored,
/// never queued or stacked.
#[derive(Debug, Clone, Default)]
pub struct BehaviorStateMachine {
    current: BehaviorState,
    previous: Option<BehaviorState>,
}

impl BehaviorStateMachine {
    /// Create a state machine in `Idle`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn current(&self) -> BehaviorState {
        self.current
    }

    /// State before the last transition.
    pub fn previous(&self) -> Option<BehaviorState> {
        self.previous
    }

    /// Check if in a specific state.
    pub fn is_in(&self, state: BehaviorState) -> bool {
        self.current == state
    }

    /// External "begin hunt" trigger (e.g. the campfire was lit).
    pub fn begin_hunt(&mut self) -> bool {
        if self.current != BehaviorState::Idle {
            log::trace!("begin_hunt ignored in {:?}", self.current);
            return false;
        }
        self.transition(BehaviorState::CallingForHelp);
        true
    }

    /// The call-for-help animation signalled completion.
    pub fn call_for_help_complete(&mut self) -> bool {
        if self.current != BehaviorState::CallingForHelp {
            log::trace!("call_for_help_complete ignored in {:?}", self.current);
            return false;
        }
        self.transition(BehaviorState::Stalking);
        true
    }

    /// Stop the hunt, from capture or an external reset.
    pub fn stop(&mut self) -> bool {
        if self.current == BehaviorState::Idle {
            log::trace!("stop ignored while already idle");
            return false;
        }
        self.transition(BehaviorState::Idle);
        true
    }

    fn transition(&mut self, to: BehaviorState) {
        log::debug!("behavior {:?} -> {to:?}", self.current);
        self.previous = Some(self.current);
        self.current = to;
    }
}
