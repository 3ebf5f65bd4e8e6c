//! Agent configuration

use serde::{Deserialize, Serialize};

/// Stalker agent tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StalkerConfig {
    /// Angular acceleration bound, deg/s²
    pub angular_acceleration: f32,

    /// Turn rate the agent accelerates toward, deg/s
    pub turn_speed: f32,

    /// Linear acceleration bound, units/s²
    pub acceleration: f32,

    /// Linear speed bound, units/s
    pub max_speed: f32,

    /// Distance beyond which the agent teleports back toward the target
    pub far_distance: f32,

    /// Distance from the target a teleport re-engages at
    pub near_distance: f32,

    /// Distance below which a stalking agent captures the target
    pub grab_distance: f32,

    /// Minimum seconds between teleports
    pub teleport_cooldown: f32,

    /// Duration parameter handed to the capture hook, seconds
    pub grab_duration: f32,
}

impl Default for StalkerConfig {
    fn default() -> Self {
        Self {
            angular_acceleration: 360.0,
            turn_speed: 90.0,
            acceleration: 10.0,
            max_speed: 4.0,
            far_distance: 30.0,
            near_distance: 10.0,
            grab_distance: 2.0,
            teleport_cooldown: 10.0,
            grab_duration: 4.0,
        }
    }
}

impl StalkerConfig {
    /// Set the speed bound.
    pub fn with_max_speed(mut self, max_speed: f32) -> Self {
        self.max_speed = max_speed;
        self
    }

    /// Set the engagement distances.
    pub fn with_distances(mut self, far: f32, near: f32, grab: f32) -> Self {
        self.far_distance = far;
        self.near_distance = near;
        self.grab_distance = grab;
        self
    }

    /// Set the teleport cooldown.
    pub fn with_teleport_cooldown(mut self, seconds: f32) -> Self {
        self.teleport_cooldown = seconds;
        self
    }
}
