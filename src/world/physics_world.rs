use log::{debug, warn};

use crate::collision::{resolve_pair, ContactParams};
use crate::error::{PhysicsError, PhysicsResult};
use crate::integration::integrator;
use crate::math::vec2::Vec2;
use crate::objects::body::Body;
use super::arena::{BodyArena, BodyHandle};
use super::config::WorldConfig;
use super::timestep::FixedTimestep;

/// Owns every body and the tunables, and advances the simulation.
pub struct World {
    config: WorldConfig,
    arena: BodyArena,
    timestep: FixedTimestep,
    // Display names are never reused, even after removal.
    next_name: u64,
}

impl World {
    /// Creates an empty world with the default configuration.
    pub fn new() -> Self {
        let config = WorldConfig::default();
        Self {
            timestep: FixedTimestep::new(config.fixed_dt, config.max_substeps),
            config,
            arena: BodyArena::default(),
            next_name: 0,
        }
    }

    /// Creates an empty world, rejecting an invalid configuration.
    pub fn with_config(config: WorldConfig) -> PhysicsResult<Self> {
        config.validate()?;
        debug!("world created with {:?}", config);
        Ok(Self {
            timestep: FixedTimestep::new(config.fixed_dt, config.max_substeps),
            config,
            arena: BodyArena::default(),
            next_name: 0,
        })
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn gravity(&self) -> Vec2 {
        self.config.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vec2) -> PhysicsResult<()> {
        if !gravity.is_finite() {
            return Err(PhysicsError::NonFiniteVector { what: "gravity" });
        }
        debug!("gravity set to {:?}", gravity);
        self.config.gravity = gravity;
        Ok(())
    }

    pub fn friction_coefficient(&self) -> f64 {
        self.config.friction_coefficient
    }

    /// Clamps into `[0, 1]`; NaN becomes 0.
    pub fn set_friction_coefficient(&mut self, friction_coefficient: f64) {
        self.config.friction_coefficient = if friction_coefficient.is_nan() {
            0.0
        } else {
            friction_coefficient.clamp(0.0, 1.0)
        };
        debug!("friction coefficient set to {}", self.config.friction_coefficient);
    }

    /// Appends a body, names it, and returns its handle.
    pub fn add(&mut self, mut body: Body) -> BodyHandle {
        body.name = format!("Body {}", self.next_name);
        self.next_name += 1;
        debug!("adding {} ({:?}) at {:?}", body.name, body.shape().kind(), body.position);
        self.arena.insert(body)
    }

    /// Removes a body. The remaining bodies keep their order and handles.
    pub fn remove(&mut self, handle: BodyHandle) -> Option<Body> {
        let body = self.arena.remove(handle)?;
        debug!("removed {}", body.name);
        Some(body)
    }

    /// Removes every body for which `keep` returns false, returning how many
    /// were removed.
    pub fn retain<F>(&mut self, keep: F) -> usize
    where
        F: FnMut(&Body) -> bool,
    {
        let removed = self.arena.retain(keep);
        if removed > 0 {
            debug!("culled {} bodies, {} left", removed, self.arena.len());
        }
        removed
    }

    pub fn get(&self, handle: BodyHandle) -> Option<&Body> {
        self.arena.get(handle)
    }

    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.arena.get_mut(handle)
    }

    /// Bodies in insertion order.
    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &Body)> {
        self.arena.iter()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.len() == 0
    }

    /// Feeds a measured frame time into the fixed-timestep accumulator and
    /// runs the resulting number of `step(config.fixed_dt)` calls.
    pub fn advance(&mut self, frame_dt: f64) -> u32 {
        let steps = self.timestep.accumulate(frame_dt);
        for _ in 0..steps {
            self.step(self.timestep.dt());
        }
        steps
    }

    /// Fraction of a fixed step not yet simulated, for render interpolation.
    pub fn interpolation_alpha(&self) -> f64 {
        self.timestep.alpha()
    }

    /// Advances the simulation by one step of `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        if !(dt > 0.0 && dt.is_finite()) {
            warn!("ignoring step with invalid dt {}", dt);
            return;
        }

        // 1. Clear forces
        for body in self.arena.bodies_mut() {
            body.clear_forces();
        }

        // 2. Apply gravity
        let gravity = self.config.gravity;
        for body in self.arena.bodies_mut() {
            if !body.is_static() {
                let gravity_force = gravity * body.mass();
                body.apply_force(gravity_force);
            }
        }

        // 3. Detect and resolve collisions
        self.collision_pass(dt);

        // 4. Integrate motion
        for body in self.arena.bodies_mut() {
            integrator::integrate(body, dt);
        }
    }

    /// Visits every pair once, ascending `i` then ascending `j`, resolving
    /// each on the spot so later pairs see the updated state.
    fn collision_pass(&mut self, dt: f64) {
        let params = ContactParams {
            gravity: self.config.gravity,
            friction_coefficient: self.config.friction_coefficient,
            dt,
        };
        let bodies = self.arena.bodies_mut();

        for body in bodies.iter_mut() {
            body.colliding = false;
        }

        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let (head, tail) = bodies.split_at_mut(j);
                let body_a = &mut head[i];
                let body_b = &mut tail[0];

                if resolve_pair(body_a, body_b, &params) {
                    body_a.colliding = true;
                    body_b.colliding = true;
                }
            }
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
