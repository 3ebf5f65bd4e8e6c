//! Turn-rate and linear-velocity integration with bounded acceleration

use glam::{Mat3, Quat, Vec3};
use umbra_math::kinematics::{
    move_towards, move_towards_vec3, project_on_plane, signed_angle_deg,
};

use crate::config::StalkerConfig;

/// Integrates the agent's angular and linear velocity under acceleration
/// bounds.
///
/// Both axes use the same braking idea: once the remaining angle (or
/// distance) is within what is needed to decelerate to zero at the
/// configured rate, the target speed drops to zero, so the agent arrives
/// at rest exactly on alignment instead of oscillating past it.
#[derive(Debug, Clone)]
pub struct SteeringController {
    angular_velocity: f32,
    velocity: Vec3,
    angular_acceleration: f32,
    acceleration: f32,
    max_speed: f32,
}

impl SteeringController {
    /// Create a controller from the agent tunables.
    pub fn new(config: &StalkerConfig) -> Self {
        Self {
            angular_velocity: 0.0,
            velocity: Vec3::ZERO,
            angular_acceleration: config.angular_acceleration,
            acceleration: config.acceleration,
            max_speed: config.max_speed,
        }
    }

    /// Signed turn rate in deg/s about the local up axis.
    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    /// Linear velocity in the anchor body's local frame.
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Zero the linear velocity immediately.
    pub fn halt(&mut self) {
        self.velocity = Vec3::ZERO;
    }

    /// Rotate `rotation` toward `desired_dir` about `up`.
    ///
    /// A degenerate `desired_dir` means no turn is requested; the turn
    /// rate decays to zero. The returned rotation is re-leveled so forward
    /// stays in the plane orthogonal to `up`, which stops roll/pitch drift
    /// from accumulating on a curved surface.
    pub fn turn_towards(
        &mut self,
        rotation: Quat,
        desired_dir: Vec3,
        up: Vec3,
        target_speed: f32,
        dt: f32,
    ) -> Quat {
        let from = project_on_plane(rotation * Vec3::Z, up);
        let to = project_on_plane(desired_dir, up);
        let angle_diff = signed_angle_deg(from, to, up);

        let direction = if angle_diff >= 0.0 { 1.0 } else { -1.0 };
        // Angle needed to decelerate to zero at the configured rate.
        let stopping_angle =
            self.angular_velocity * self.angular_velocity / (2.0 * self.angular_acceleration);
        let mut target = target_speed * direction;
        if (direction > 0.0 && angle_diff <= stopping_angle)
            || (direction < 0.0 && angle_diff >= -stopping_angle)
        {
            target = 0.0;
        }
        self.angular_velocity = move_towards(
            self.angular_velocity,
            target,
            self.angular_acceleration * dt,
        );

        let mut step = self.angular_velocity * dt;
        // Never rotate past the desired direction within one tick.
        if (direction > 0.0 && step > angle_diff) || (direction < 0.0 && step < angle_diff) {
            step = angle_diff;
        }
        let rotated = Quat::from_axis_angle(up, step.to_radians()) * rotation;
        level(rotated, up)
    }

    /// Advance velocity toward a destination `displacement` away.
    ///
    /// Full speed outside the braking distance, decaying toward zero
    /// inside it. Speed never exceeds the configured bound.
    pub fn advance_towards(&mut self, displacement: Vec3, dt: f32) {
        let distance = displacement.length();
        let speed = self.velocity.length();
        let stopping_distance = speed * speed / (self.max_speed * self.acceleration);

        if distance > stopping_distance && distance > f32::EPSILON {
            let target = displacement / distance * self.max_speed;
            self.velocity = move_towards_vec3(self.velocity, target, self.acceleration * dt);
        } else {
            self.velocity = move_towards_vec3(self.velocity, Vec3::ZERO, self.acceleration * dt);
        }
        self.velocity = self.velocity.clamp_length_max(self.max_speed);
    }
}

/// Rebuild a rotation with forward squashed into the plane orthogonal to
/// `up` and up forced back to `up`.
fn level(rotation: Quat, up: Vec3) -> Quat {
    let forward = project_on_plane(rotation * Vec3::Z, up).normalize_or_zero();
    if forward == Vec3::ZERO {
        return rotation;
    }
    let right = up.cross(forward).normalize_or_zero();
    if right == Vec3::ZERO {
        return rotation;
    }
    let leveled_up = forward.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, leveled_up, forward))
}
