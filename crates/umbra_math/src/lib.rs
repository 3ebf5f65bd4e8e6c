//! Umbra Math - numeric primitives for the pursuit core
//!
//! This crate provides the low-level numerics the agent is built on.
//!
//! # Features
//!
//! - Critically-damped spring filters (1D and 2D)
//! - Planar kinematics helpers (move-towards, signed angles, projection)
//! - Reference-frame transforms for an agent anchored to a rotating body
//!
//! # Example
//!
//! ```
//! use umbra_math::prelude::*;
//! use glam::Vec3;
//!
//! let frame = ReferenceFrame::new(Vec3::ZERO, glam::Quat::IDENTITY);
//! let up = frame.local_up(Vec3::new(0.0, 100.0, 0.0));
//! assert_eq!(up, Vec3::Y);
//! ```

pub mod frame;
pub mod kinematics;
pub mod spring;

pub mod prelude {
    //! Common imports for the math primitives
    pub use crate::frame::ReferenceFrame;
    pub use crate::kinematics::{
        approx_eq, approx_zero, clamp01, move_towards, move_towards_vec3, project_on_plane,
        signed_angle_deg,
    };
    pub use crate::spring::{Spring, Spring2};
}

pub use prelude::*;
