//! Rapier 3D-backed scene queries

use glam::{Quat, Vec3};
use rapier3d::na::{Quaternion, UnitQuaternion};
use rapier3d::parry::query;
use rapier3d::prelude as rapier;

use crate::collider::ColliderShape;
use crate::error::{PhysicsError, Result};
use crate::query::{GroundHit, Penetration, SceneQuery};

/// Handle to a static scene collider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticHandle(pub rapier::ColliderHandle);

/// [`SceneQuery`] implementation backed by a Rapier collider set.
///
/// Holds the agent's and target's collision shapes plus the static scene
/// geometry (terrain, props) used by ground casts. The target's collider is
/// deliberately kept out of the static set so a downward cast never snaps
/// the agent onto the target; penetration queries test the two stored
/// shapes directly.
pub struct RapierSceneQuery {
    bodies: rapier::RigidBodySet,
    colliders: rapier::ColliderSet,
    islands: rapier::IslandManager,
    query_pipeline: rapier::QueryPipeline,
    agent_shape: rapier::SharedShape,
    target_shape: rapier::SharedShape,
}

impl RapierSceneQuery {
    /// Create a query scene from the agent's and target's collision shapes.
    pub fn new(agent: ColliderShape, target: ColliderShape) -> Result<Self> {
        Ok(Self {
            bodies: rapier::RigidBodySet::new(),
            colliders: rapier::ColliderSet::new(),
            islands: rapier::IslandManager::new(),
            query_pipeline: rapier::QueryPipeline::new(),
            agent_shape: agent.to_rapier()?,
            target_shape: target.to_rapier()?,
        })
    }

    /// Add a static scene collider (terrain, props).
    pub fn add_static(
        &mut self,
        shape: ColliderShape,
        position: Vec3,
        rotation: Quat,
    ) -> Result<StaticHandle> {
        let collider = rapier::ColliderBuilder::new(shape.to_rapier()?)
            .position(isometry(position, rotation))
            .build();
        let handle = self.colliders.insert(collider);
        self.query_pipeline.update(&self.colliders);
        Ok(StaticHandle(handle))
    }

    /// Remove a static scene collider.
    pub fn remove_static(&mut self, handle: StaticHandle) -> Result<()> {
        self.colliders
            .remove(handle.0, &mut self.islands, &mut self.bodies, false)
            .ok_or(PhysicsError::ColliderNotFound(handle))?;
        self.query_pipeline.update(&self.colliders);
        Ok(())
    }
}

impl SceneQuery for RapierSceneQuery {
    fn resolve_penetration(
        &self,
        agent_position: Vec3,
        agent_rotation: Quat,
        target_position: Vec3,
        target_rotation: Quat,
    ) -> Option<Penetration> {
        let contact = query::contact(
            &isometry(agent_position, agent_rotation),
            self.agent_shape.as_ref(),
            &isometry(target_position, target_rotation),
            self.target_shape.as_ref(),
            0.0,
        );
        match contact {
            Ok(Some(contact)) if contact.dist < 0.0 => {
                // normal1 points out of the agent shape toward the target;
                // the minimum translation moves the agent the other way.
                let normal = contact.normal1.into_inner();
                Some(Penetration {
                    direction: -Vec3::new(normal.x, normal.y, normal.z),
                    depth: -contact.dist,
                })
            }
            Ok(_) => None,
            Err(_) => {
                log::warn!("unsupported shape pair in penetration query");
                None
            }
        }
    }

    fn raycast_down(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
    ) -> Option<GroundHit> {
        let ray = rapier::Ray::new(
            rapier::Point::new(origin.x, origin.y, origin.z),
            rapier::Vector::new(direction.x, direction.y, direction.z),
        );
        self.query_pipeline
            .cast_ray_and_get_normal(
                &self.bodies,
                &self.colliders,
                &ray,
                max_distance,
                true,
                rapier::QueryFilter::new(),
            )
            .map(|(_, intersection)| {
                let point = ray.point_at(intersection.time_of_impact);
                GroundHit {
                    point: Vec3::new(point.x, point.y, point.z),
                    normal: Vec3::new(
                        intersection.normal.x,
                        intersection.normal.y,
                        intersection.normal.z,
                    ),
                    distance: intersection.time_of_impact,
                }
            })
    }
}

fn isometry(position: Vec3, rotation: Quat) -> rapier::Isometry<f32> {
    rapier::Isometry::from_parts(
        rapier::Translation::new(position.x, position.y, position.z),
        UnitQuaternion::from_quaternion(Quaternion::new(
            rotation.w, rotation.x, rotation.y, rotation.z,
        )),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ball_scene() -> RapierSceneQuery {
        RapierSceneQuery::new(
            ColliderShape::Ball { radius: 0.5 },
            ColliderShape::Ball { radius: 0.5 },
        )
        .unwrap()
    }

    #[test]
    fn test_penetration_pushes_agent_away() {
        let scene = ball_scene();
        let pen = scene
            .resolve_penetration(
                Vec3::ZERO,
                Quat::IDENTITY,
                Vec3::new(0.5, 0.0, 0.0),
                Quat::IDENTITY,
            )
            .expect("overlapping balls must report a penetration");

        assert_relative_eq!(pen.depth, 0.5, epsilon = 1e-4);
        assert!(pen.direction.x < -0.99);

        // Applying the MTV separates the shapes.
        let resolved = Vec3::ZERO + pen.direction * pen.depth;
        assert!(scene
            .resolve_penetration(
                resolved,
                Quat::IDENTITY,
                Vec3::new(0.5, 0.0, 0.0),
                Quat::IDENTITY
            )
            .map_or(true, |p| p.depth < 1e-3));
    }

    #[test]
    fn test_separated_shapes_report_none() {
        let scene = ball_scene();
        assert!(scene
            .resolve_penetration(
                Vec3::ZERO,
                Quat::IDENTITY,
                Vec3::new(5.0, 0.0, 0.0),
                Quat::IDENTITY
            )
            .is_none());
    }

    #[test]
    fn test_raycast_hits_floor() {
        let mut scene = ball_scene();
        scene
            .add_static(
                ColliderShape::Cuboid {
                    half_extents: Vec3::new(10.0, 0.1, 10.0),
                },
                Vec3::new(0.0, -0.1, 0.0),
                Quat::IDENTITY,
            )
            .unwrap();

        let hit = scene
            .raycast_down(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y, 500.0)
            .expect("ray straight down must hit the floor");
        assert_relative_eq!(hit.distance, 5.0, epsilon = 1e-3);
        assert_relative_eq!(hit.point.y, 0.0, epsilon = 1e-3);
        assert!(hit.normal.y > 0.99);
    }

    #[test]
    fn test_raycast_respects_max_distance() {
        let mut scene = ball_scene();
        scene
            .add_static(
                ColliderShape::Cuboid {
                    half_extents: Vec3::new(10.0, 0.1, 10.0),
                },
                Vec3::new(0.0, -0.1, 0.0),
                Quat::IDENTITY,
            )
            .unwrap();

        assert!(scene
            .raycast_down(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y, 2.0)
            .is_none());
    }

    #[test]
    fn test_remove_static() {
        let mut scene = ball_scene();
        let handle = scene
            .add_static(
                ColliderShape::Cuboid {
                    half_extents: Vec3::new(10.0, 0.1, 10.0),
                },
                Vec3::new(0.0, -0.1, 0.0),
                Quat::IDENTITY,
            )
            .unwrap();

        scene.remove_static(handle).unwrap();
        assert!(scene
            .raycast_down(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y, 500.0)
            .is_none());
        assert!(scene.remove_static(handle).is_err());
    }
}
