//! Bridges agent motion into smoothed animation, audio and visual feedback

use glam::{Vec2, Vec3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use umbra_math::kinematics::{approx_zero, clamp01};
use umbra_math::spring::{Spring, Spring2};

use crate::cues::{AnimationTrigger, AudioCue, CueRequest, EffectEvent};

/// Effects layer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectsConfig {
    /// Stiffness shared by the move and turn spring filters
    pub spring_stiffness: f32,

    /// Damping multiplier for the spring filters (`1.0` = critically damped)
    pub spring_damping: f32,

    /// Speed that maps to a move-direction parameter of 1
    pub animation_speed_scale: f32,

    /// Turn rate (deg/s) that maps to a turn parameter of 1
    pub reference_turn_speed: f32,

    /// Distance at which threat intensity fades to zero
    pub flicker_cutoff_distance: f32,

    /// Gain applied to the visibility-gated flicker output
    pub flicker_gain: f32,

    /// Off-axis angle (degrees) at which line-of-sight exposure reaches zero
    pub view_cutoff_deg: f32,

    /// Pitch randomization range for the teleport cue
    pub teleport_pitch_min: f32,
    /// Pitch randomization range for the teleport cue
    pub teleport_pitch_max: f32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            spring_stiffness: 50.0,
            spring_damping: 1.0,
            animation_speed_scale: 2.0,
            reference_turn_speed: 90.0,
            flicker_cutoff_distance: 20.0,
            flicker_gain: 6.0,
            view_cutoff_deg: 90.0,
            teleport_pitch_min: 0.9,
            teleport_pitch_max: 1.1,
        }
    }
}

impl EffectsConfig {
    /// Set the spring constants.
    pub fn with_springs(mut self, stiffness: f32, damping: f32) -> Self {
        self.spring_stiffness = stiffness;
        self.spring_damping = damping;
        self
    }

    /// Set the flicker fade-out distance.
    pub fn with_flicker_cutoff(mut self, distance: f32) -> Self {
        self.flicker_cutoff_distance = distance;
        self
    }
}

/// Discrete movement-style animation parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementStyle {
    /// Upright locomotion, used while the agent is at rest
    Normal,
    /// Hunting locomotion, used while the agent is translating
    Stalk,
}

/// Smoothed per-tick animation parameters.
#[derive(Debug, Clone, Copy)]
pub struct AnimationParams {
    /// Smoothed lateral/forward move direction
    pub move_direction: Vec2,
    /// Smoothed normalized turn speed
    pub turn_speed: f32,
    /// Current movement style
    pub style: MovementStyle,
    /// Set on the tick the style flips; `None` while it holds
    pub style_change: Option<MovementStyle>,
}

/// Per-tick threat intensities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreatIntensity {
    /// Distance-driven intensity, independent of visibility
    pub static_intensity: f32,
    /// Visibility- and line-of-sight-gated flicker intensity
    pub flicker: f32,
}

/// Maps raw motion signals into animator parameters, threat intensities
/// and one-shot cues.
///
/// Motion smoothing is purely presentational: nothing here feeds back into
/// steering or collision decisions. One-shot cues and events accumulate
/// until the host takes them; they are fire-and-forget and independent of
/// the per-tick update.
pub struct EffectsBridge {
    config: EffectsConfig,
    move_spring: Spring2,
    turn_spring: Spring,
    smoothed_move: Vec2,
    smoothed_turn: f32,
    still: bool,
    style: MovementStyle,
    cues: Vec<CueRequest>,
    events: Vec<EffectEvent>,
    triggers: Vec<AnimationTrigger>,
    rng: SmallRng,
}

impl EffectsBridge {
    /// Create a bridge.
    pub fn new(config: EffectsConfig) -> Self {
        let move_spring = Spring2::new(config.spring_stiffness, config.spring_damping);
        let turn_spring = Spring::new(config.spring_stiffness, config.spring_damping);
        Self {
            config,
            move_spring,
            turn_spring,
            smoothed_move: Vec2::ZERO,
            smoothed_turn: 0.0,
            // The first update with the agent at rest flips this to
            // `Normal`, emitting the initial style change.
            still: false,
            style: MovementStyle::Stalk,
            cues: Vec::new(),
            events: Vec::new(),
            triggers: Vec::new(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Seed the cue randomization, for deterministic tests.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    /// Current movement style.
    pub fn style(&self) -> MovementStyle {
        self.style
    }

    /// Advance the smoothed animation parameters by one tick.
    ///
    /// `relative_velocity` is the agent's velocity in its own oriented
    /// frame (x lateral, z forward); `angular_velocity` is in deg/s.
    pub fn update(
        &mut self,
        relative_velocity: Vec3,
        angular_velocity: f32,
        dt: f32,
    ) -> AnimationParams {
        let target = Vec2::new(relative_velocity.x, relative_velocity.z)
            / self.config.animation_speed_scale;
        self.smoothed_move = self.move_spring.update(self.smoothed_move, target, dt);
        self.smoothed_turn = self.turn_spring.update(
            self.smoothed_turn,
            angular_velocity / self.config.reference_turn_speed,
            dt,
        );

        let style_change = self.set_still(approx_zero(relative_velocity));

        AnimationParams {
            move_direction: self.smoothed_move,
            turn_speed: self.smoothed_turn,
            style: self.style,
            style_change,
        }
    }

    /// Threat intensities for the current distance and exposure.
    ///
    /// Static intensity ignores visibility entirely; flicker is zero
    /// whenever the agent is not visible, regardless of distance.
    pub fn threat_intensity(
        &self,
        distance: f32,
        visible: bool,
        los_fraction: f32,
    ) -> ThreatIntensity {
        let base = clamp01(1.0 - distance / self.config.flicker_cutoff_distance);
        let flicker = if visible {
            self.config.flicker_gain * base * los_fraction
        } else {
            0.0
        };
        ThreatIntensity {
            static_intensity: base,
            flicker,
        }
    }

    /// Queue an animator trigger.
    pub fn play_animation(&mut self, trigger: AnimationTrigger) {
        self.triggers.push(trigger);
    }

    /// The agent relocated; play the teleport stinger.
    pub fn on_teleport(&mut self) {
        let pitch = self
            .rng
            .gen_range(self.config.teleport_pitch_min..self.config.teleport_pitch_max);
        self.cues
            .push(CueRequest::new(AudioCue::Teleport).with_pitch(pitch));
    }

    /// Animation landmark: the call-for-help howl starts.
    pub fn anim_call_for_help(&mut self) {
        self.cues
            .push(CueRequest::new(AudioCue::CallForHelp).with_pitch(1.2));
    }

    /// Animation landmark: the neck-snap frame.
    pub fn anim_neck_snap(&mut self) {
        self.events.push(EffectEvent::NeckSnap);
    }

    /// Animation landmark: audio layer of the neck snap.
    pub fn anim_neck_snap_audio(&mut self) {
        self.cues
            .push(CueRequest::new(AudioCue::NeckSnapImpact).with_pitch(1.2));
        self.cues.push(CueRequest::new(AudioCue::NeckSnapPlayer));
        self.events.push(EffectEvent::Rumble);
    }

    /// Animation landmark: the player leaves the ground.
    pub fn anim_lift_player(&mut self) {
        self.events.push(EffectEvent::LiftPlayer);
    }

    /// Animation landmark: audio layer of the lift.
    pub fn anim_lift_player_audio(&mut self) {
        self.cues.push(CueRequest::new(AudioCue::LiftSlam));
        self.cues.push(CueRequest::new(AudioCue::PlayerCrushed));
    }

    /// Take the queued audio requests.
    pub fn take_cues(&mut self) -> Vec<CueRequest> {
        std::mem::take(&mut self.cues)
    }

    /// Take the queued narrative/haptic events.
    pub fn take_events(&mut self) -> Vec<EffectEvent> {
        std::mem::take(&mut self.events)
    }

    /// Take the queued animator triggers.
    pub fn take_triggers(&mut self) -> Vec<AnimationTrigger> {
        std::mem::take(&mut self.triggers)
    }

    /// Edge-triggered stillness flag; returns the new style on a flip.
    fn set_still(&mut self, still: bool) -> Option<MovementStyle> {
        if still == self.still {
            return None;
        }
        self.still = still;
        self.style = if still {
            MovementStyle::Normal
        } else {
            MovementStyle::Stalk
        };
        log::trace!("movement style -> {:?}", self.style);
        Some(self.style)
    }
}
