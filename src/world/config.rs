use serde::{Deserialize, Serialize};

use crate::error::{PhysicsError, PhysicsResult};
use crate::math::vec2::Vec2;

/// Tunable world parameters. Owned by the [`World`](super::World) and changed
/// through its setters.
///
/// Missing fields take their default when deserialized, so a config file only
/// has to name what it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Acceleration applied to every dynamic body. Y points down.
    pub gravity: Vec2,
    /// Kinetic friction against halfspaces, within `[0, 1]`.
    pub friction_coefficient: f64,
    /// Step length used by [`World::advance`](super::World::advance), in seconds.
    pub fixed_dt: f64,
    /// Most steps a single `advance` call may run.
    pub max_substeps: u32,
}

impl WorldConfig {
    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_friction_coefficient(mut self, friction_coefficient: f64) -> Self {
        self.friction_coefficient = friction_coefficient;
        self
    }

    pub fn with_fixed_dt(mut self, fixed_dt: f64) -> Self {
        self.fixed_dt = fixed_dt;
        self
    }

    pub fn validate(&self) -> PhysicsResult<()> {
        if !self.gravity.is_finite() {
            return Err(PhysicsError::NonFiniteVector { what: "gravity" });
        }
        if !(0.0..=1.0).contains(&self.friction_coefficient) {
            return Err(PhysicsError::InvalidFriction(self.friction_coefficient));
        }
        if !(self.fixed_dt > 0.0 && self.fixed_dt.is_finite()) {
            return Err(PhysicsError::InvalidTimestep(self.fixed_dt));
        }
        Ok(())
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, 981.0),
            friction_coefficient: 0.5,
            fixed_dt: 1.0 / 60.0,
            max_substeps: 10,
        }
    }
}
