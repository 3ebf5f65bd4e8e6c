//! Run-session state for the death interception hook

use serde::{Deserialize, Serialize};

/// Why the player is about to die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    /// The scripted end-of-loop death; always allowed through
    TimeLoop,
    /// Any other death (captured, environmental, ...)
    Other,
}

/// Verdict on an intercepted player death.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathVerdict {
    /// Let the engine's own death sequence run
    Allow,
    /// Suppress the death: respawn the player and reset the campfires
    Respawn,
    /// Suppress the death and finish the run
    EndRun,
}

/// Explicit per-run state owning the death-interception policy.
///
/// Holds the one-shot "force end of run" flag. Arming it makes the next
/// intercepted death end the run instead of respawning, after which the
/// flag clears itself. Whatever owns the run owns this; there is no
/// process-wide flag to leak between runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HuntSession {
    end_of_run_armed: bool,
}

impl HuntSession {
    /// Create a fresh session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the one-shot end-of-run flag.
    pub fn arm_end_of_run(&mut self) {
        self.end_of_run_armed = true;
    }

    /// Whether the end-of-run flag is currently armed.
    pub fn end_of_run_armed(&self) -> bool {
        self.end_of_run_armed
    }

    /// Decide what happens to an intercepted player death.
    pub fn on_player_death(&mut self, cause: DeathCause) -> DeathVerdict {
        if self.end_of_run_armed {
            self.end_of_run_armed = false;
            log::debug!("end-of-run armed; finishing the run");
            return DeathVerdict::EndRun;
        }
        match cause {
            DeathCause::TimeLoop => DeathVerdict::Allow,
            DeathCause::Other => DeathVerdict::Respawn,
        }
    }
}
