pub mod api;
pub mod assets;
pub mod components;
pub mod core;

// Re-export key types at crate root for convenience
pub use api::error::ValidationError;
pub use api::types::BodyId;
pub use assets::level::{BodyDescriptor, LevelManifest};
pub use components::body::{Body, BodyDesc};
pub use core::collision::{Aabb, ContactPoint};
pub use core::physics::{ContactEvent, PhysicsWorld};
pub use core::time::TimeStep;
