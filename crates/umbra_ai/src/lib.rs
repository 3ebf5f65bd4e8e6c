//! Umbra AI - pursuit behavior for the stalker agent
//!
//! This crate drives a single autonomous agent hunting a live target
//! across the local frame of a rotating body.
//!
//! # Features
//!
//! - Steering with bounded angular/linear acceleration and braking profiles
//! - Behavior states (Idle / CallingForHelp / Stalking) with explicit triggers
//! - Cooldown-gated teleport re-engagement when the target escapes too far
//! - Capture trigger at grab range
//! - Outbound event surface for the host and effects layer
//! - Run-session death interception state
//!
//! # Example
//!
//! ```ignore
//! use umbra_ai::prelude::*;
//! use umbra_math::ReferenceFrame;
//! use umbra_physics::ResolverConfig;
//! use glam::{Quat, Vec3};
//!
//! let frame = ReferenceFrame::new(Vec3::ZERO, Quat::IDENTITY);
//! let mut agent = StalkerAgent::new(
//!     StalkerConfig::default(),
//!     ResolverConfig::default(),
//!     frame,
//!     Vec3::new(0.0, 100.0, 0.0),
//!     Quat::IDENTITY,
//! );
//! let mut events = EventCollector::new();
//!
//! agent.begin_hunt(&mut events);
//! agent.call_for_help_complete();
//!
//! // Host loop, once per physics tick:
//! // let sample = agent.tick(&scene, &target, time, dt, &mut events);
//! // feed `sample` and the drained events to the effects layer.
//! ```

pub mod agent;
pub mod config;
pub mod events;
pub mod session;
pub mod state_machine;
pub mod steering;

pub mod prelude {
    //! Common imports for pursuit functionality
    pub use crate::agent::{MotionSample, StalkerAgent, TargetSample};
    pub use crate::config::StalkerConfig;
    pub use crate::events::{AgentEvent, AgentEventHandler, EventCollector};
    pub use crate::session::{DeathCause, DeathVerdict, HuntSession};
    pub use crate::state_machine::{BehaviorState, BehaviorStateMachine};
    pub use crate::steering::SteeringController;
}

pub use prelude::*;
