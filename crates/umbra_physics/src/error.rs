//! Error types for the collision layer

use thiserror::Error;

/// Collision layer errors
#[derive(Debug, Error)]
pub enum PhysicsError {
    /// A collider shape was described with invalid parameters
    #[error("invalid collider shape: {0}")]
    InvalidShape(String),

    /// A static collider handle is not present in the scene
    #[error("static collider not found: {0:?}")]
    ColliderNotFound(crate::rapier::StaticHandle),
}

/// Result type for collision operations
pub type Result<T> = std::result::Result<T, PhysicsError>;
