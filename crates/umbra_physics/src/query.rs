//! Narrow collision-query interface consumed by the resolver

use glam::{Quat, Vec3};

/// Result of a downward ground cast.
#[derive(Debug, Clone, Copy)]
pub struct GroundHit {
    /// Hit point, in the anchor body's local frame
    pub point: Vec3,
    /// Surface normal at the hit point
    pub normal: Vec3,
    /// Distance from the ray origin
    pub distance: f32,
}

/// Minimum-translation vector resolving an overlap.
///
/// Moving the agent by `direction * depth` separates the two volumes; the
/// target is never moved.
#[derive(Debug, Clone, Copy)]
pub struct Penetration {
    /// Unit direction to push the agent along
    pub direction: Vec3,
    /// Overlap depth along `direction`
    pub depth: f32,
}

/// Collision queries the pursuit core needs from the host scene.
///
/// All positions and directions are in the anchor body's local frame.
/// Implementations must not let ground casts hit the agent's own collision
/// volume. The steering/behavior logic only ever talks to this trait, so
/// tests supply deterministic fakes instead of a physics engine.
pub trait SceneQuery {
    /// Minimum-translation vector pushing the agent's collider out of the
    /// target's collider, or `None` when they do not overlap.
    fn resolve_penetration(
        &self,
        agent_position: Vec3,
        agent_rotation: Quat,
        target_position: Vec3,
        target_rotation: Quat,
    ) -> Option<Penetration>;

    /// First scene hit of a ray from `origin` along `direction` (unit),
    /// within `max_distance`.
    fn raycast_down(&self, origin: Vec3, direction: Vec3, max_distance: f32)
        -> Option<GroundHit>;
}
