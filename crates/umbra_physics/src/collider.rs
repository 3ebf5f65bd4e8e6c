//! Collision shapes

use glam::Vec3;
use rapier3d::prelude as rapier;
use serde::{Deserialize, Serialize};

use crate::error::{PhysicsError, Result};

/// Collision shape descriptions accepted by the scene query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum ColliderShape {
    /// Sphere
    Ball {
        /// Sphere radius
        radius: f32,
    },
    /// Capsule aligned with the local Y axis
    Capsule {
        /// Half the length of the cylindrical segment
        half_height: f32,
        /// Capsule radius
        radius: f32,
    },
    /// Axis-aligned box
    Cuboid {
        /// Half extents along each axis
        half_extents: Vec3,
    },
}

impl ColliderShape {
    /// Validate and convert to a Rapier shape.
    pub fn to_rapier(self) -> Result<rapier::SharedShape> {
        match self {
            Self::Ball { radius } => {
                if radius <= 0.0 {
                    return Err(PhysicsError::InvalidShape(format!(
                        "ball radius must be positive, got {radius}"
                    )));
                }
                Ok(rapier::SharedShape::ball(radius))
            }
            Self::Capsule {
                half_height,
                radius,
            } => {
                if half_height < 0.0 || radius <= 0.0 {
                    return Err(PhysicsError::InvalidShape(format!(
                        "capsule half_height {half_height} / radius {radius} out of range"
                    )));
                }
                Ok(rapier::SharedShape::capsule_y(half_height, radius))
            }
            Self::Cuboid { half_extents } => {
                if half_extents.min_element() <= 0.0 {
                    return Err(PhysicsError::InvalidShape(format!(
                        "cuboid half extents must be positive, got {half_extents}"
                    )));
                }
                Ok(rapier::SharedShape::cuboid(
                    half_extents.x,
                    half_extents.y,
                    half_extents.z,
                ))
            }
        }
    }
}
