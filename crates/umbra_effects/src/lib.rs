//! Umbra Effects - animation, audio and threat feedback
//!
//! This crate turns the agent's realized motion into presentation signals:
//!
//! - spring-smoothed animator parameters (move direction, turn speed)
//! - an edge-triggered movement-style parameter
//! - distance/visibility-driven threat intensities (static, flicker)
//! - one-shot audio cues and narrative/haptic events
//!
//! Everything here is derived state. The host feeds it the agent's
//! per-tick motion sample and camera pose, forwards the smoothed
//! parameters to its animator, and drains the queued cues; nothing flows
//! back into the simulation.
//!
//! # Example
//!
//! ```
//! use umbra_effects::prelude::*;
//! use glam::Vec3;
//!
//! let mut bridge = EffectsBridge::new(EffectsConfig::default());
//! let params = bridge.update(Vec3::new(0.0, 0.0, 2.0), 30.0, 1.0 / 60.0);
//! let camera = CameraPose { position: Vec3::ZERO, forward: Vec3::Z };
//! let los = line_of_sight_fraction(&camera, Vec3::new(0.0, 0.0, 8.0), 90.0);
//! let intensity = bridge.threat_intensity(8.0, true, los);
//! assert!(intensity.flicker > 0.0);
//! # let _ = params;
//! ```

pub mod bridge;
pub mod cues;
pub mod visibility;

pub mod prelude {
    //! Common imports for effects functionality
    pub use crate::bridge::{
        AnimationParams, EffectsBridge, EffectsConfig, MovementStyle, ThreatIntensity,
    };
    pub use crate::cues::{AnimationTrigger, AudioCue, CueRequest, EffectEvent};
    pub use crate::visibility::{line_of_sight_fraction, CameraPose};
}

pub use prelude::*;
