use crate::error::{PhysicsError, PhysicsResult};
use crate::math::vec2::Vec2;
use crate::shapes::{Circle, Halfspace, Shape};

/// A single simulated shape and its state.
///
/// Static bodies have infinite mass: they are never integrated and take no
/// impulse or force, but other bodies still collide with them. Halfspaces are
/// always static.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    // Geometry
    shape: Shape,

    // Primary state
    pub position: Vec2,
    pub velocity: Vec2,

    // Accumulated during a step, cleared at the start of the next one.
    pub(crate) net_force: Vec2,

    // Physical properties
    is_static: bool,
    mass: f64,     // f64::INFINITY for static bodies
    inv_mass: f64, // 0.0 for static bodies
    bounciness: f64,

    // Assigned by the world
    pub(crate) name: String,
    pub(crate) colliding: bool,
}

impl Body {
    /// Restitution a body starts with. Contact restitution is the product of
    /// both sides, so a value of 1 defers entirely to the other body.
    pub const DEFAULT_BOUNCINESS: f64 = 1.0;

    /// Creates a dynamic circle. Mass must be positive and finite.
    pub fn circle(radius: f64, mass: f64, position: Vec2) -> PhysicsResult<Self> {
        if !(mass > 0.0 && mass.is_finite()) {
            return Err(PhysicsError::NonPositiveMass(mass));
        }
        let circle = Circle::new(radius)?;
        check_finite(position, "position")?;
        Ok(Self::from_parts(circle.into(), position, false, mass))
    }

    /// Creates an immovable circle, e.g. a peg or an obstacle.
    pub fn static_circle(radius: f64, position: Vec2) -> PhysicsResult<Self> {
        let circle = Circle::new(radius)?;
        check_finite(position, "position")?;
        Ok(Self::from_parts(circle.into(), position, true, f64::INFINITY))
    }

    /// Creates a halfspace whose boundary passes through `point`, with its
    /// normal at `Vec2::UP` rotated by `rotation_degrees`.
    pub fn halfspace(point: Vec2, rotation_degrees: f64) -> PhysicsResult<Self> {
        check_finite(point, "halfspace point")?;
        if !rotation_degrees.is_finite() {
            return Err(PhysicsError::NonFiniteVector { what: "halfspace rotation" });
        }
        let halfspace = Halfspace::new(rotation_degrees);
        Ok(Self::from_parts(halfspace.into(), point, true, f64::INFINITY))
    }

    fn from_parts(shape: Shape, position: Vec2, is_static: bool, mass: f64) -> Self {
        let inv_mass = if is_static { 0.0 } else { 1.0 / mass };
        Self {
            shape,
            position,
            velocity: Vec2::ZERO,
            net_force: Vec2::ZERO,
            is_static,
            mass,
            inv_mass,
            bounciness: Self::DEFAULT_BOUNCINESS,
            name: String::new(),
            colliding: false,
        }
    }

    /// Sets the initial velocity. Ignored by the integrator for static bodies.
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_bounciness(mut self, bounciness: f64) -> Self {
        self.set_bounciness(bounciness);
        self
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn inv_mass(&self) -> f64 {
        self.inv_mass
    }

    pub fn bounciness(&self) -> f64 {
        self.bounciness
    }

    /// Clamps into `[0, 1]`; NaN becomes 0.
    pub fn set_bounciness(&mut self, bounciness: f64) {
        self.bounciness = if bounciness.is_nan() {
            0.0
        } else {
            bounciness.clamp(0.0, 1.0)
        };
    }

    /// Display name given by the world on insertion. Empty until then.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the body overlapped anything during the last collision pass.
    pub fn is_colliding(&self) -> bool {
        self.colliding
    }

    /// Net force from the last step. Only meaningful for debug drawing.
    pub fn net_force(&self) -> Vec2 {
        self.net_force
    }

    /// Rotates a halfspace, keeping its normal in sync. Returns `false` for
    /// circles.
    pub fn set_halfspace_rotation(&mut self, rotation_degrees: f64) -> bool {
        match &mut self.shape {
            Shape::Halfspace(h) => {
                h.set_rotation_degrees(rotation_degrees);
                true
            }
            Shape::Circle(_) => false,
        }
    }

    /// Adds a force to this step's accumulator.
    pub fn apply_force(&mut self, force: Vec2) {
        self.net_force += force;
    }

    pub fn clear_forces(&mut self) {
        self.net_force = Vec2::ZERO;
    }
}

fn check_finite(v: Vec2, what: &'static str) -> PhysicsResult<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(PhysicsError::NonFiniteVector { what })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeKind;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_body_circle() {
        let body = Body::circle(2.0, 4.0, Vec2::new(1.0, 2.0)).unwrap();
        assert_eq!(body.shape().kind(), ShapeKind::Circle);
        assert_eq!(body.shape().as_circle().map(Circle::radius), Some(2.0));
        assert!(!body.is_static());
        assert_eq!(body.mass(), 4.0);
        assert!((body.inv_mass() - 0.25).abs() < EPSILON);
        assert_eq!(body.position, Vec2::new(1.0, 2.0));
        assert_eq!(body.velocity, Vec2::ZERO);
        assert_eq!(body.net_force(), Vec2::ZERO);
        assert_eq!(body.bounciness(), Body::DEFAULT_BOUNCINESS);
        assert!(!body.is_colliding());
    }

    #[test]
    fn test_body_rejects_non_positive_mass() {
        assert_eq!(
            Body::circle(1.0, 0.0, Vec2::ZERO),
            Err(PhysicsError::NonPositiveMass(0.0))
        );
        assert_eq!(
            Body::circle(1.0, -3.0, Vec2::ZERO),
            Err(PhysicsError::NonPositiveMass(-3.0))
        );
        assert!(Body::circle(1.0, f64::NAN, Vec2::ZERO).is_err());
        assert!(Body::circle(1.0, f64::INFINITY, Vec2::ZERO).is_err());
    }

    #[test]
    fn test_body_rejects_bad_geometry() {
        assert_eq!(
            Body::circle(-1.0, 1.0, Vec2::ZERO),
            Err(PhysicsError::InvalidRadius(-1.0))
        );
        assert_eq!(
            Body::circle(1.0, 1.0, Vec2::new(f64::NAN, 0.0)),
            Err(PhysicsError::NonFiniteVector { what: "position" })
        );
        assert!(Body::halfspace(Vec2::ZERO, f64::INFINITY).is_err());
        assert!(Body::static_circle(0.0, Vec2::ZERO).is_err());
    }

    #[test]
    fn test_static_bodies_have_infinite_mass() {
        let peg = Body::static_circle(1.0, Vec2::ZERO).unwrap();
        let ground = Body::halfspace(Vec2::new(0.0, 10.0), 0.0).unwrap();
        for body in [&peg, &ground] {
            assert!(body.is_static());
            assert!(body.mass().is_infinite());
            assert_eq!(body.inv_mass(), 0.0);
        }
        assert_eq!(ground.shape().kind(), ShapeKind::Halfspace);
        assert_eq!(ground.position, Vec2::new(0.0, 10.0));
    }

    #[test]
    fn test_bounciness_is_clamped() {
        let body = Body::circle(1.0, 1.0, Vec2::ZERO).unwrap();
        assert_eq!(body.clone().with_bounciness(1.5).bounciness(), 1.0);
        assert_eq!(body.clone().with_bounciness(-0.5).bounciness(), 0.0);
        assert_eq!(body.clone().with_bounciness(f64::NAN).bounciness(), 0.0);
        assert_eq!(body.with_bounciness(0.3).bounciness(), 0.3);
    }

    #[test]
    fn test_apply_and_clear_forces() {
        let mut body = Body::circle(1.0, 1.0, Vec2::ZERO).unwrap();
        body.apply_force(Vec2::new(10.0, 0.0));
        body.apply_force(Vec2::new(0.0, 5.0));
        assert_eq!(body.net_force(), Vec2::new(10.0, 5.0));
        body.clear_forces();
        assert_eq!(body.net_force(), Vec2::ZERO);
    }

    #[test]
    fn test_set_halfspace_rotation() {
        let mut ground = Body::halfspace(Vec2::ZERO, 0.0).unwrap();
        assert!(ground.set_halfspace_rotation(90.0));
        let h = ground.shape().as_halfspace().unwrap();
        assert_eq!(h.rotation_degrees(), 90.0);
        assert!((h.normal() - Vec2::new(1.0, 0.0)).magnitude() < EPSILON);

        let mut ball = Body::circle(1.0, 1.0, Vec2::ZERO).unwrap();
        assert!(!ball.set_halfspace_rotation(90.0));
    }
}
