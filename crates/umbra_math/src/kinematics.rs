//! Planar kinematics helpers

use glam::Vec3;

/// Length threshold below which vectors are treated as zero.
pub const APPROX_EPSILON: f32 = 1e-3;

/// Clamp a value to the `[0, 1]` range.
pub fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// Step a scalar toward a target by at most `max_delta`.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + (target - current).signum() * max_delta
    }
}

/// Step a vector toward a target by at most `max_delta` along the line
/// between them.
pub fn move_towards_vec3(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let to_target = target - current;
    let distance = to_target.length();
    if distance <= max_delta || distance < f32::EPSILON {
        target
    } else {
        current + to_target / distance * max_delta
    }
}

/// Project a vector onto the plane orthogonal to `normal`.
///
/// `normal` does not need to be unit length; a degenerate normal returns
/// the vector unchanged.
pub fn project_on_plane(vector: Vec3, normal: Vec3) -> Vec3 {
    let sq = normal.length_squared();
    if sq < f32::EPSILON {
        vector
    } else {
        vector - normal * (vector.dot(normal) / sq)
    }
}

/// Signed angle in degrees from `from` to `to` about `axis`.
///
/// Positive when the rotation from `from` to `to` is counter-clockwise
/// around `axis`. Degenerate inputs yield `0`.
pub fn signed_angle_deg(from: Vec3, to: Vec3, axis: Vec3) -> f32 {
    let denom = (from.length_squared() * to.length_squared()).sqrt();
    if denom < f32::EPSILON {
        return 0.0;
    }
    let unsigned = (from.dot(to) / denom).clamp(-1.0, 1.0).acos().to_degrees();
    if axis.dot(from.cross(to)) < 0.0 {
        -unsigned
    } else {
        unsigned
    }
}

/// Whether a vector is approximately zero.
pub fn approx_zero(vector: Vec3) -> bool {
    vector.length_squared() < APPROX_EPSILON * APPROX_EPSILON
}

/// Whether two vectors are approximately equal.
pub fn approx_eq(a: Vec3, b: Vec3) -> bool {
    approx_zero(a - b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_move_towards_clamps_step() {
        assert_eq!(move_towards(0.0, 10.0, 3.0), 3.0);
        assert_eq!(move_towards(0.0, -10.0, 3.0), -3.0);
    }

    #[test]
    fn test_move_towards_reaches_target_exactly() {
        assert_eq!(move_towards(9.5, 10.0, 3.0), 10.0);
        assert_eq!(move_towards(10.0, 10.0, 3.0), 10.0);
    }

    #[test]
    fn test_move_towards_vec3() {
        let stepped = move_towards_vec3(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 4.0);
        assert_relative_eq!(stepped.x, 4.0);
        let arrived = move_towards_vec3(Vec3::new(9.0, 0.0, 0.0), Vec3::new(10.0, 0.0, 0.0), 4.0);
        assert_eq!(arrived, Vec3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn test_project_on_plane_is_orthogonal() {
        let projected = project_on_plane(Vec3::new(1.0, 2.0, 3.0), Vec3::Y);
        assert_eq!(projected, Vec3::new(1.0, 0.0, 3.0));
        assert_relative_eq!(projected.dot(Vec3::Y), 0.0);
    }

    #[test]
    fn test_project_on_plane_degenerate_normal() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(project_on_plane(v, Vec3::ZERO), v);
    }

    #[test]
    fn test_signed_angle_sign() {
        let angle = signed_angle_deg(Vec3::Z, Vec3::X, Vec3::Y);
        assert_relative_eq!(angle, 90.0, epsilon = 1e-4);
        let angle = signed_angle_deg(Vec3::X, Vec3::Z, Vec3::Y);
        assert_relative_eq!(angle, -90.0, epsilon = 1e-4);
    }

    #[test]
    fn test_signed_angle_degenerate() {
        assert_eq!(signed_angle_deg(Vec3::ZERO, Vec3::X, Vec3::Y), 0.0);
        assert_relative_eq!(signed_angle_deg(Vec3::X, Vec3::X, Vec3::Y), 0.0);
    }

    #[test]
    fn test_signed_angle_antiparallel() {
        let angle = signed_angle_deg(Vec3::X, Vec3::NEG_X, Vec3::Y);
        assert_relative_eq!(angle.abs(), 180.0, epsilon = 1e-4);
    }

    #[test]
    fn test_approx_zero() {
        assert!(approx_zero(Vec3::ZERO));
        assert!(approx_zero(Vec3::splat(1e-4)));
        assert!(!approx_zero(Vec3::new(0.01, 0.0, 0.0)));
    }

    #[test]
    fn test_clamp01() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(0.5), 0.5);
        assert_eq!(clamp01(1.5), 1.0);
    }
}
