pub mod contact;
pub mod detection;
pub mod dispatch;
pub mod resolution;

// Re-export key types
pub use contact::Contact;
pub use detection::*;
pub use dispatch::resolve_pair;
pub use resolution::*;
