//! Line-of-sight exposure query

use glam::Vec3;
use serde::{Deserialize, Serialize};
use umbra_math::kinematics::{approx_eq, clamp01};

/// Camera pose sampled by the host each frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraPose {
    /// Camera world position
    pub position: Vec3,
    /// Camera forward axis (unit)
    pub forward: Vec3,
}

/// Fraction of forward-facing exposure of `point` in the camera's view.
///
/// `1.0` on the view axis, fading linearly to `0.0` at `cutoff_deg` off
/// axis. Whether the point is actually on screen or occluded is the host's
/// business; this only measures angular exposure.
pub fn line_of_sight_fraction(camera: &CameraPose, point: Vec3, cutoff_deg: f32) -> f32 {
    let direction = (point - camera.position).normalize_or_zero();
    if direction == Vec3::ZERO || approx_eq(camera.forward, direction) {
        return 1.0;
    }
    let angle = camera.forward.angle_between(direction).to_degrees();
    clamp01(1.0 - angle / cutoff_deg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn camera() -> CameraPose {
        CameraPose {
            position: Vec3::ZERO,
            forward: Vec3::Z,
        }
    }

    #[test]
    fn test_on_axis_is_full() {
        let fraction = line_of_sight_fraction(&camera(), Vec3::new(0.0, 0.0, 10.0), 90.0);
        assert_eq!(fraction, 1.0);
    }

    #[test]
    fn test_behind_is_zero() {
        let fraction = line_of_sight_fraction(&camera(), Vec3::new(0.0, 0.0, -10.0), 90.0);
        assert_eq!(fraction, 0.0);
    }

    #[test]
    fn test_half_angle_is_half() {
        let fraction = line_of_sight_fraction(&camera(), Vec3::new(10.0, 0.0, 10.0), 90.0);
        assert_relative_eq!(fraction, 0.5, epsilon = 1e-4);
    }

    #[test]
    fn test_point_at_camera_is_full() {
        let fraction = line_of_sight_fraction(&camera(), Vec3::ZERO, 90.0);
        assert_eq!(fraction, 1.0);
    }
}
