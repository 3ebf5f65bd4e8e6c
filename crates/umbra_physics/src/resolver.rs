//! Per-tick position resolution: penetration push-out and ground snapping

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::query::SceneQuery;

/// Resolver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Height above the agent the first ground probe starts from
    pub low_probe_height: f32,

    /// Height the retry probe starts from when the first probe misses
    /// (steep terrain can put the low origin underground)
    pub high_probe_height: f32,

    /// Maximum ground probe distance
    pub max_ray_distance: f32,

    /// Squared snap displacement above which the correction is classified
    /// as a teleport-like discontinuity rather than continuous motion
    pub discontinuity_threshold_sq: f32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            low_probe_height: 2.0,
            high_probe_height: 50.0,
            max_ray_distance: 500.0,
            discontinuity_threshold_sq: 1.0,
        }
    }
}

impl ResolverConfig {
    /// Set the discontinuity classification threshold (squared units).
    pub fn with_discontinuity_threshold_sq(mut self, threshold_sq: f32) -> Self {
        self.discontinuity_threshold_sq = threshold_sq;
        self
    }

    /// Set the ground probe heights.
    pub fn with_probe_heights(mut self, low: f32, high: f32) -> Self {
        self.low_probe_height = low;
        self.high_probe_height = high;
        self
    }
}

/// Result of one resolution step.
#[derive(Debug, Clone, Copy)]
pub struct ResolveOutcome {
    /// Final agent position for this tick, in the anchor body's local frame
    pub position: Vec3,
    /// Whether a ground probe found a surface to snap to
    pub grounded: bool,
    /// Whether the ground snap displaced the agent far enough to count as
    /// a teleport-like discontinuity
    pub discontinuity: bool,
}

/// Resolves a velocity-integrated position against the target's collision
/// volume and the ground.
///
/// The target is never pushed; overlap is resolved entirely by moving the
/// agent. Ground snapping keeps the agent's vertical offset from the
/// surface bounded on curved terrain.
#[derive(Debug, Clone)]
pub struct CollisionResolver {
    config: ResolverConfig,
}

impl CollisionResolver {
    /// Create a resolver.
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Resolver configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve one tick of movement.
    ///
    /// Integrates `velocity` over `dt` from `position`, pushes the result
    /// out of the target's collider, then re-anchors it to the surface
    /// along `-up`. If both ground probes miss, the pre-snap position is
    /// kept and no discontinuity is reported.
    pub fn resolve<Q: SceneQuery + ?Sized>(
        &self,
        scene: &Q,
        position: Vec3,
        rotation: Quat,
        velocity: Vec3,
        target_position: Vec3,
        target_rotation: Quat,
        up: Vec3,
        dt: f32,
    ) -> ResolveOutcome {
        let mut resolved = position + velocity * dt;

        if let Some(pen) = scene.resolve_penetration(resolved, rotation, target_position, target_rotation)
        {
            resolved += pen.direction * pen.depth;
        }

        // Stick to the ground.
        let pre_snap = resolved;
        let down = -up;
        let hit = scene
            .raycast_down(
                resolved + up * self.config.low_probe_height,
                down,
                self.config.max_ray_distance,
            )
            .or_else(|| {
                scene.raycast_down(
                    resolved + up * self.config.high_probe_height,
                    down,
                    self.config.max_ray_distance,
                )
            });

        let grounded = match hit {
            Some(hit) => {
                resolved = hit.point;
                true
            }
            None => {
                log::debug!("both ground probes missed; holding position this tick");
                false
            }
        };

        let discontinuity = grounded
            && (resolved - pre_snap).length_squared() > self.config.discontinuity_threshold_sq;

        ResolveOutcome {
            position: resolved,
            grounded,
            discontinuity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{GroundHit, Penetration};
    use approx::assert_relative_eq;

    /// Deterministic scene: optional fixed penetration, ground plane at a
    /// configurable height (y = `ground_height`), and a switch that makes
    /// only the high probe see the ground.
    struct FakeScene {
        penetration: Option<Penetration>,
        ground_height: Option<f32>,
        low_probe_blind: bool,
    }

    impl FakeScene {
        fn grounded_at(height: f32) -> Self {
            Self {
                penetration: None,
                ground_height: Some(height),
                low_probe_blind: false,
            }
        }

        fn airless() -> Self {
            Self {
                penetration: None,
                ground_height: None,
                low_probe_blind: false,
            }
        }
    }

    impl SceneQuery for FakeScene {
        fn resolve_penetration(
            &self,
            _agent_position: Vec3,
            _agent_rotation: Quat,
            _target_position: Vec3,
            _target_rotation: Quat,
        ) -> Option<Penetration> {
            self.penetration
        }

        fn raycast_down(
            &self,
            origin: Vec3,
            direction: Vec3,
            max_distance: f32,
        ) -> Option<GroundHit> {
            let ground = self.ground_height?;
            if self.low_probe_blind && origin.y - ground < 10.0 {
                return None;
            }
            let distance = (origin.y - ground) / -direction.y;
            if distance < 0.0 || distance > max_distance {
                return None;
            }
            Some(GroundHit {
                point: Vec3::new(origin.x, ground, origin.z),
                normal: Vec3::Y,
                distance,
            })
        }
    }

    fn resolver() -> CollisionResolver {
        CollisionResolver::new(ResolverConfig::default())
    }

    #[test]
    fn test_integrates_velocity_and_snaps() {
        let scene = FakeScene::grounded_at(0.0);
        let outcome = resolver().resolve(
            &scene,
            Vec3::new(0.0, 0.0, 0.0),
            Quat::IDENTITY,
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(100.0, 0.0, 0.0),
            Quat::IDENTITY,
            Vec3::Y,
            0.5,
        );
        assert!(outcome.grounded);
        assert!(!outcome.discontinuity);
        assert_relative_eq!(outcome.position.x, 1.0);
        assert_relative_eq!(outcome.position.y, 0.0);
    }

    #[test]
    fn test_penetration_push_out() {
        let scene = FakeScene {
            penetration: Some(Penetration {
                direction: Vec3::NEG_X,
                depth: 0.25,
            }),
            ground_height: Some(0.0),
            low_probe_blind: false,
        };
        let outcome = resolver().resolve(
            &scene,
            Vec3::ZERO,
            Quat::IDENTITY,
            Vec3::ZERO,
            Vec3::ZERO,
            Quat::IDENTITY,
            Vec3::Y,
            1.0 / 60.0,
        );
        assert_relative_eq!(outcome.position.x, -0.25);
    }

    #[test]
    fn test_high_probe_retry() {
        let scene = FakeScene {
            penetration: None,
            ground_height: Some(0.0),
            low_probe_blind: true,
        };
        let outcome = resolver().resolve(
            &scene,
            Vec3::new(0.0, 0.5, 0.0),
            Quat::IDENTITY,
            Vec3::ZERO,
            Vec3::new(100.0, 0.0, 0.0),
            Quat::IDENTITY,
            Vec3::Y,
            1.0 / 60.0,
        );
        assert!(outcome.grounded);
        assert_relative_eq!(outcome.position.y, 0.0);
    }

    #[test]
    fn test_both_probes_missing_holds_position() {
        let scene = FakeScene::airless();
        let start = Vec3::new(3.0, 7.0, -2.0);
        let outcome = resolver().resolve(
            &scene,
            start,
            Quat::IDENTITY,
            Vec3::ZERO,
            Vec3::new(100.0, 0.0, 0.0),
            Quat::IDENTITY,
            Vec3::Y,
            1.0 / 60.0,
        );
        assert!(!outcome.grounded);
        assert!(!outcome.discontinuity);
        assert_eq!(outcome.position, start);
    }

    #[test]
    fn test_large_snap_is_a_discontinuity() {
        let scene = FakeScene::grounded_at(0.0);
        let outcome = resolver().resolve(
            &scene,
            Vec3::new(0.0, 25.0, 0.0),
            Quat::IDENTITY,
            Vec3::ZERO,
            Vec3::new(100.0, 0.0, 0.0),
            Quat::IDENTITY,
            Vec3::Y,
            1.0 / 60.0,
        );
        assert!(outcome.discontinuity);
        assert_relative_eq!(outcome.position.y, 0.0);
    }

    #[test]
    fn test_small_snap_is_not_a_discontinuity() {
        let scene = FakeScene::grounded_at(0.0);
        let outcome = resolver().resolve(
            &scene,
            Vec3::new(0.0, 0.4, 0.0),
            Quat::IDENTITY,
            Vec3::ZERO,
            Vec3::new(100.0, 0.0, 0.0),
            Quat::IDENTITY,
            Vec3::Y,
            1.0 / 60.0,
        );
        assert!(outcome.grounded);
        assert!(!outcome.discontinuity);
    }

    #[test]
    fn test_threshold_is_configurable() {
        let scene = FakeScene::grounded_at(0.0);
        let tight = CollisionResolver::new(
            ResolverConfig::default().with_discontinuity_threshold_sq(0.01),
        );
        let outcome = tight.resolve(
            &scene,
            Vec3::new(0.0, 0.4, 0.0),
            Quat::IDENTITY,
            Vec3::ZERO,
            Vec3::new(100.0, 0.0, 0.0),
            Quat::IDENTITY,
            Vec3::Y,
            1.0 / 60.0,
        );
        assert!(outcome.discontinuity);
    }
}
