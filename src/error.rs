//! Errors raised when constructing bodies or configuring a world.
//!
//! Stepping never fails: everything that could make a step produce NaN is
//! rejected here, up front.

use thiserror::Error;

/// Errors returned by [`Body`](crate::Body) constructors and
/// [`World`](crate::World) configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    #[error("dynamic body mass must be positive and finite, got {0}")]
    NonPositiveMass(f64),
    #[error("circle radius must be positive and finite, got {0}")]
    InvalidRadius(f64),
    #[error("{what} must be finite")]
    NonFiniteVector { what: &'static str },
    #[error("fixed timestep must be positive and finite, got {0}")]
    InvalidTimestep(f64),
    #[error("friction coefficient must be within [0, 1], got {0}")]
    InvalidFriction(f64),
}

pub type PhysicsResult<T> = Result<T, PhysicsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PhysicsError::NonPositiveMass(-1.0).to_string(),
            "dynamic body mass must be positive and finite, got -1"
        );
        assert_eq!(
            PhysicsError::NonFiniteVector { what: "gravity" }.to_string(),
            "gravity must be finite"
        );
    }
}
