//! The stalker agent: per-tick pursuit orchestration

use glam::{Quat, Vec3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use umbra_math::frame::ReferenceFrame;
use umbra_physics::query::SceneQuery;
use umbra_physics::resolver::{CollisionResolver, ResolverConfig};

use crate::config::StalkerConfig;
use crate::events::{AgentEvent, AgentEventHandler};
use crate::state_machine::{BehaviorState, BehaviorStateMachine};
use crate::steering::SteeringController;

/// World-space pose of the pursued entity, sampled at tick start.
#[derive(Debug, Clone, Copy)]
pub struct TargetSample {
    /// Target world position
    pub position: Vec3,
    /// Target world rotation
    pub rotation: Quat,
}

/// Realized motion for one tick, consumed by the effects layer.
#[derive(Debug, Clone, Copy)]
pub struct MotionSample {
    /// Velocity in the agent's own oriented frame (x lateral, z forward)
    pub relative_velocity: Vec3,
    /// Signed turn rate, deg/s
    pub angular_velocity: f32,
    /// Straight-line world distance to the target
    pub distance_to_target: f32,
    /// Agent world position after resolution
    pub position: Vec3,
}

/// The autonomous pursuit agent.
///
/// Owns its pose in the anchor body's local frame and mutates it once per
/// physics tick: sample the target, turn, move or teleport depending on
/// the behavior state, resolve collisions, check for capture. The agent is
/// created on scene entry and dropped on teardown; nothing persists.
///
/// The reference frame is a constructor argument, so steering can never
/// run against a missing frame.
pub struct StalkerAgent {
    config: StalkerConfig,
    frame: ReferenceFrame,
    steering: SteeringController,
    resolver: CollisionResolver,
    state: BehaviorStateMachine,
    local_position: Vec3,
    local_rotation: Quat,
    last_teleport_time: f64,
    rng: SmallRng,
}

impl StalkerAgent {
    /// Create an agent anchored to `frame` at a local-frame spawn pose.
    pub fn new(
        config: StalkerConfig,
        resolver_config: ResolverConfig,
        frame: ReferenceFrame,
        spawn_position: Vec3,
        spawn_rotation: Quat,
    ) -> Self {
        Self {
            steering: SteeringController::new(&config),
            resolver: CollisionResolver::new(resolver_config),
            config,
            frame,
            state: BehaviorStateMachine::new(),
            local_position: spawn_position,
            local_rotation: spawn_rotation,
            last_teleport_time: 0.0,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Seed the teleport-bearing randomization, for deterministic tests.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    /// Agent tunables.
    pub fn config(&self) -> &StalkerConfig {
        &self.config
    }

    /// Current behavior state.
    pub fn state(&self) -> BehaviorState {
        self.state.current()
    }

    /// Position in the anchor body's local frame.
    pub fn local_position(&self) -> Vec3 {
        self.local_position
    }

    /// Orientation in the anchor body's local frame.
    pub fn local_rotation(&self) -> Quat {
        self.local_rotation
    }

    /// World position.
    pub fn world_position(&self) -> Vec3 {
        self.frame.local_to_world_point(self.local_position)
    }

    /// World rotation.
    pub fn world_rotation(&self) -> Quat {
        self.frame.local_to_world_rot(self.local_rotation)
    }

    /// Linear velocity in the anchor body's local frame.
    pub fn velocity(&self) -> Vec3 {
        self.steering.velocity()
    }

    /// Signed turn rate, deg/s.
    pub fn angular_velocity(&self) -> f32 {
        self.steering.angular_velocity()
    }

    /// Anchor frame.
    pub fn frame(&self) -> &ReferenceFrame {
        &self.frame
    }

    /// Anchor frame, for per-tick pose updates of a moving body.
    pub fn frame_mut(&mut self) -> &mut ReferenceFrame {
        &mut self.frame
    }

    /// Begin the hunt (e.g. the campfire was lit).
    ///
    /// Redundant triggers while already hunting are ignored.
    pub fn begin_hunt(&mut self, handler: &mut dyn AgentEventHandler) {
        if self.state.begin_hunt() {
            handler.on_event(&AgentEvent::CalledForHelp);
        }
    }

    /// The call-for-help cue finished; start closing in.
    pub fn call_for_help_complete(&mut self) {
        self.state.call_for_help_complete();
    }

    /// Stop the pursuit and freeze in place.
    ///
    /// Safe to call between any two ticks; velocity is zeroed immediately
    /// so movement-driven effects decay from rest on the next update.
    pub fn stop(&mut self) {
        self.state.stop();
        self.steering.halt();
    }

    /// Advance one physics tick.
    ///
    /// `time` is the simulation clock in seconds, `dt` the fixed step.
    /// Stages run in order: target sampling, turning, state-dependent
    /// movement (stalk or teleport), capture check. The returned sample
    /// reflects this tick's resolved state.
    pub fn tick<Q: SceneQuery + ?Sized>(
        &mut self,
        scene: &Q,
        target: &TargetSample,
        time: f64,
        dt: f32,
        handler: &mut dyn AgentEventHandler,
    ) -> MotionSample {
        let local_target = self.frame.world_to_local_point(target.position);
        let up = self.frame.local_up(self.local_position);
        let desired = (local_target - self.local_position).normalize_or_zero();
        self.local_rotation =
            self.steering
                .turn_towards(self.local_rotation, desired, up, self.config.turn_speed, dt);

        if self.state.is_in(BehaviorState::Stalking) {
            self.stalk(scene, target, local_target, up, time, dt, handler);
        }

        let distance = (target.position - self.world_position()).length();

        // Only a stalking agent can take the target.
        if self.state.is_in(BehaviorState::Stalking) && distance < self.config.grab_distance {
            log::debug!("capture triggered at distance {distance:.2}");
            handler.on_event(&AgentEvent::Captured {
                duration: self.config.grab_duration,
            });
            self.stop();
        }

        MotionSample {
            relative_velocity: self.relative_velocity(),
            angular_velocity: self.steering.angular_velocity(),
            distance_to_target: distance,
            position: self.world_position(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn stalk<Q: SceneQuery + ?Sized>(
        &mut self,
        scene: &Q,
        target: &TargetSample,
        local_target: Vec3,
        up: Vec3,
        time: f64,
        dt: f32,
        handler: &mut dyn AgentEventHandler,
    ) {
        let displacement = local_target - self.local_position;

        if displacement.length() > self.config.far_distance
            && time > self.last_teleport_time + f64::from(self.config.teleport_cooldown)
        {
            self.teleport_near_target(local_target, time, handler);
            return;
        }

        self.steering.advance_towards(displacement, dt);

        let outcome = self.resolver.resolve(
            scene,
            self.local_position,
            self.local_rotation,
            self.steering.velocity(),
            local_target,
            self.frame.world_to_local_rot(target.rotation),
            up,
            dt,
        );
        self.local_position = outcome.position;
        if outcome.discontinuity {
            handler.on_event(&AgentEvent::Teleported {
                position: self.world_position(),
            });
        }
    }

    fn teleport_near_target(
        &mut self,
        local_target: Vec3,
        time: f64,
        handler: &mut dyn AgentEventHandler,
    ) {
        self.last_teleport_time = time;

        // Random bearing in the tangent plane around the target's radial up.
        let radial = self.frame.local_up(local_target);
        let tangent = Quat::from_rotation_arc(Vec3::Y, radial) * Vec3::NEG_X;
        let bearing_deg: f32 = self.rng.gen_range(0.0..360.0);
        let bearing = Quat::from_axis_angle(radial, bearing_deg.to_radians()) * tangent;

        self.local_position = local_target + bearing * self.config.near_distance;
        self.steering.halt();

        log::debug!(
            "teleported to {:.1} units from the target, bearing {bearing_deg:.0} deg",
            self.config.near_distance
        );
        handler.on_event(&AgentEvent::Teleported {
            position: self.world_position(),
        });
        handler.on_event(&AgentEvent::CalledForHelp);
    }

    /// Velocity expressed along the agent's own axes.
    fn relative_velocity(&self) -> Vec3 {
        self.local_rotation.inverse() * self.steering.velocity()
    }
}
