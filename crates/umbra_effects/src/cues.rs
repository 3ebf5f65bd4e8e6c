//! One-shot cue and event types emitted by the effects layer

use serde::{Deserialize, Serialize};

/// Identifier of a one-shot audio cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioCue {
    /// Stinger played when the stalker relocates
    Teleport,
    /// The stalker's call-for-help howl
    CallForHelp,
    /// Impact layer of the neck-snap kill
    NeckSnapImpact,
    /// Player-side neck-snap layer
    NeckSnapPlayer,
    /// Slam played when the player is lifted
    LiftSlam,
    /// Player-side crush layer
    PlayerCrushed,
}

/// A fire-and-forget audio request: cue identifier, volume, pitch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CueRequest {
    /// Which cue to play
    pub cue: AudioCue,
    /// Linear volume, `1.0` = full
    pub volume: f32,
    /// Playback pitch multiplier, `1.0` = unshifted
    pub pitch: f32,
}

impl CueRequest {
    /// Request a cue at full volume and unshifted pitch.
    pub fn new(cue: AudioCue) -> Self {
        Self {
            cue,
            volume: 1.0,
            pitch: 1.0,
        }
    }

    /// Set the volume.
    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = volume;
        self
    }

    /// Set the pitch.
    pub fn with_pitch(mut self, pitch: f32) -> Self {
        self.pitch = pitch;
        self
    }
}

/// Discrete narrative/haptic hooks raised by animation landmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectEvent {
    /// The kill animation reached the neck-snap frame
    NeckSnap,
    /// The kill animation reached the lift frame
    LiftPlayer,
    /// Controller rumble for the neck-snap impact
    Rumble,
}

/// One-shot animator triggers the host forwards to its animation system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationTrigger {
    /// Return to the default locomotion state
    Default,
    /// Grab the player
    Grab,
    /// Snap the player's neck
    SnapNeck,
    /// Call for help
    CallForHelp,
}
