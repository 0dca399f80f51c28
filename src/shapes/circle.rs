use crate::error::{PhysicsError, PhysicsResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Rejects radii that are not strictly positive and finite.
    pub fn new(radius: f64) -> PhysicsResult<Self> {
        if radius > 0.0 && radius.is_finite() {
            Ok(Self { radius })
        } else {
            Err(PhysicsError::InvalidRadius(radius))
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}
