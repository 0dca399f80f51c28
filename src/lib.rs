pub mod math;
pub mod objects;
pub mod integration;
pub mod collision;
pub mod shapes;
pub mod world;
pub mod error;

// Re-export key types for easier use
pub use math::vec2::Vec2;
pub use objects::body::Body;
pub use shapes::{Shape, ShapeKind, Circle, Halfspace};
pub use world::{World, WorldConfig, BodyHandle, FixedTimestep};
pub use error::{PhysicsError, PhysicsResult};
