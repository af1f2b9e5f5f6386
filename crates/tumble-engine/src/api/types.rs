/// Unique identifier for a body in a world.
///
/// Assigned by [`PhysicsWorld::spawn`](crate::PhysicsWorld::spawn) from a
/// monotonic counter and never reused, even after the body is despawned.
/// Hosts should hold on to the ids of bodies they control instead of
/// re-scanning by tag every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);
