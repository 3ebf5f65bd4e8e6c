//! Umbra Physics - collision queries and position resolution
//!
//! This crate gives the pursuit core the two collision services it needs,
//! behind a narrow interface so the steering and behavior logic can be
//! tested against deterministic fakes:
//!
//! - penetration resolution against the target's collision volume
//! - downward ground raycasts for surface snapping
//!
//! [`RapierSceneQuery`] implements the interface on top of Rapier 3D;
//! [`CollisionResolver`] combines the two queries into the per-tick
//! position resolution step (integrate, push out, snap to ground, classify
//! teleport-like discontinuities).
//!
//! # Example
//!
//! ```ignore
//! use umbra_physics::prelude::*;
//! use glam::{Quat, Vec3};
//!
//! let mut scene = RapierSceneQuery::new(
//!     ColliderShape::Capsule { half_height: 0.5, radius: 0.5 },
//!     ColliderShape::Capsule { half_height: 0.5, radius: 0.5 },
//! )?;
//! scene.add_static(
//!     ColliderShape::Cuboid { half_extents: Vec3::new(100.0, 0.1, 100.0) },
//!     Vec3::ZERO,
//!     Quat::IDENTITY,
//! );
//!
//! let resolver = CollisionResolver::new(ResolverConfig::default());
//! ```

pub mod collider;
pub mod error;
pub mod query;
pub mod rapier;
pub mod resolver;

pub mod prelude {
    //! Common imports for collision functionality
    pub use crate::collider::ColliderShape;
    pub use crate::error::{PhysicsError, Result};
    pub use crate::query::{GroundHit, Penetration, SceneQuery};
    pub use crate::rapier::{RapierSceneQuery, StaticHandle};
    pub use crate::resolver::{CollisionResolver, ResolveOutcome, ResolverConfig};
}

pub use prelude::*;
