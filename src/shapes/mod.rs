pub mod circle;
pub mod halfspace;

pub use circle::Circle;
pub use halfspace::Halfspace;

/// Geometric shape of a body. The set is closed; collision dispatch matches
/// on every combination.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Halfspace(Halfspace),
}

/// Fieldless tag for a [`Shape`], used to pick the collision routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Halfspace,
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Halfspace(_) => ShapeKind::Halfspace,
        }
    }

    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Shape::Circle(c) => Some(c),
            Shape::Halfspace(_) => None,
        }
    }

    pub fn as_halfspace(&self) -> Option<&Halfspace> {
        match self {
            Shape::Halfspace(h) => Some(h),
            Shape::Circle(_) => None,
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Halfspace> for Shape {
    fn from(halfspace: Halfspace) -> Self {
        Shape::Halfspace(halfspace)
    }
}
