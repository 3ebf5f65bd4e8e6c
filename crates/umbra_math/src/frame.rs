//! Reference-frame transforms for an agent anchored to a rotating body

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// World transform of the body the agent is anchored to (e.g. a planet).
///
/// The agent's position and orientation live in this body's local frame so
/// it stays glued to a rotating/orbiting surface without chasing world
/// coordinates. "Up" is radial: the normalized vector from the body's
/// origin to the point in question. Steering operates in the tangent plane
/// orthogonal to that up vector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReferenceFrame {
    position: Vec3,
    rotation: Quat,
}

impl ReferenceFrame {
    /// Create a frame from the body's world position and rotation.
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Update the body's world pose. Call once per tick for a moving body.
    pub fn set_pose(&mut self, position: Vec3, rotation: Quat) {
        self.position = position;
        self.rotation = rotation;
    }

    /// Body world position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Body world rotation.
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Convert a world-space point into the body's local frame.
    pub fn world_to_local_point(&self, world: Vec3) -> Vec3 {
        self.rotation.inverse() * (world - self.position)
    }

    /// Convert a local-frame point into world space.
    pub fn local_to_world_point(&self, local: Vec3) -> Vec3 {
        self.rotation * local + self.position
    }

    /// Convert a world-space direction into the body's local frame.
    pub fn world_to_local_dir(&self, world: Vec3) -> Vec3 {
        self.rotation.inverse() * world
    }

    /// Convert a local-frame direction into world space.
    pub fn local_to_world_dir(&self, local: Vec3) -> Vec3 {
        self.rotation * local
    }

    /// Convert a world-space rotation into the body's local frame.
    pub fn world_to_local_rot(&self, world: Quat) -> Quat {
        self.rotation.inverse() * world
    }

    /// Convert a local-frame rotation into world space.
    pub fn local_to_world_rot(&self, local: Quat) -> Quat {
        self.rotation * local
    }

    /// Radial up at a local-frame point. Falls back to `Y` at the origin.
    pub fn local_up(&self, local_point: Vec3) -> Vec3 {
        let up = local_point.normalize_or_zero();
        if up == Vec3::ZERO {
            Vec3::Y
        } else {
            up
        }
    }

    /// Radial up at a world-space point, in world space.
    pub fn global_up(&self, world_point: Vec3) -> Vec3 {
        let up = (world_point - self.position).normalize_or_zero();
        if up == Vec3::ZERO {
            self.rotation * Vec3::Y
        } else {
            up
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_point_roundtrip() {
        let frame = ReferenceFrame::new(
            Vec3::new(10.0, -5.0, 3.0),
            Quat::from_axis_angle(Vec3::Y, FRAC_PI_2),
        );
        let world = Vec3::new(1.0, 2.0, 3.0);
        let local = frame.world_to_local_point(world);
        let back = frame.local_to_world_point(local);
        assert_relative_eq!(back.x, world.x, epsilon = 1e-5);
        assert_relative_eq!(back.y, world.y, epsilon = 1e-5);
        assert_relative_eq!(back.z, world.z, epsilon = 1e-5);
    }

    #[test]
    fn test_direction_ignores_translation() {
        let frame = ReferenceFrame::new(Vec3::new(100.0, 0.0, 0.0), Quat::IDENTITY);
        assert_eq!(frame.world_to_local_dir(Vec3::X), Vec3::X);
    }

    #[test]
    fn test_local_up_is_radial() {
        let frame = ReferenceFrame::new(Vec3::ZERO, Quat::IDENTITY);
        let up = frame.local_up(Vec3::new(0.0, 0.0, 250.0));
        assert_relative_eq!(up.z, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_local_up_origin_fallback() {
        let frame = ReferenceFrame::new(Vec3::ZERO, Quat::IDENTITY);
        assert_eq!(frame.local_up(Vec3::ZERO), Vec3::Y);
    }

    #[test]
    fn test_global_up_points_away_from_body() {
        let frame = ReferenceFrame::new(Vec3::new(50.0, 0.0, 0.0), Quat::IDENTITY);
        let up = frame.global_up(Vec3::new(60.0, 0.0, 0.0));
        assert_relative_eq!(up.x, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_rotation_roundtrip() {
        let frame = ReferenceFrame::new(Vec3::ZERO, Quat::from_axis_angle(Vec3::X, 0.3));
        let world = Quat::from_axis_angle(Vec3::Z, 1.1);
        let local = frame.world_to_local_rot(world);
        let back = frame.local_to_world_rot(local);
        assert!(back.angle_between(world) < 1e-5);
    }
}
