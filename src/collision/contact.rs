use crate::math::vec2::Vec2;

/// Overlap found between two shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit contact normal. For circle–circle it points from A towards B; for
    /// circle–halfspace it is the halfspace normal (out of the solid side).
    pub normal: Vec2,
    /// Penetration along `normal`. Zero or a hair below zero is a touching
    /// contact.
    pub depth: f64,
}
