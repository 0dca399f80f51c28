use crate::math::vec2::Vec2;

/// An infinite boundary line. The body's position is a point on the line and
/// everything on the normal's side is open space.
///
/// `rotation_degrees` is authoritative; the normal is always
/// `Vec2::UP.rotate_degrees(rotation_degrees)` and is only ever derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Halfspace {
    rotation_degrees: f64,
    normal: Vec2,
}

impl Halfspace {
    pub fn new(rotation_degrees: f64) -> Self {
        Self {
            rotation_degrees,
            normal: Self::normal_for(rotation_degrees),
        }
    }

    pub fn rotation_degrees(&self) -> f64 {
        self.rotation_degrees
    }

    pub fn set_rotation_degrees(&mut self, rotation_degrees: f64) {
        self.rotation_degrees = rotation_degrees;
        self.normal = Self::normal_for(rotation_degrees);
    }

    /// Unit outward normal.
    pub fn normal(&self) -> Vec2 {
        self.normal
    }

    /// Direction along the boundary line.
    pub fn tangent(&self) -> Vec2 {
        self.normal.perpendicular()
    }

    fn normal_for(rotation_degrees: f64) -> Vec2 {
        // Renormalized so accumulated sin/cos error never leaves |n| != 1.
        Vec2::UP.rotate_degrees(rotation_degrees).normalize()
    }
}

impl Default for Halfspace {
    fn default() -> Self {
        Self::new(0.0)
    }
}
