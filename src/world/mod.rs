mod arena;
pub mod config;
pub mod physics_world;
pub mod timestep;

pub use arena::BodyHandle;
pub use config::WorldConfig;
pub use physics_world::World;
pub use timestep::FixedTimestep;
