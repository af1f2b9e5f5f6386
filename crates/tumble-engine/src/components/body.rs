use glam::Vec2;

use crate::api::error::ValidationError;
use crate::api::types::BodyId;
use crate::core::collision::Aabb;

/// Default bounciness for bodies that don't specify one.
pub const DEFAULT_RESTITUTION: f32 = 0.3;

/// A rigid body: an axis-aligned box with linear motion state.
///
/// Fat struct with public fields — the world mutates `pos` and `vel` in
/// place every tick, and hosts read whatever they need for drawing and
/// gameplay. `size` and `mass` are treated as immutable after spawn.
#[derive(Debug, Clone)]
pub struct Body {
    /// Unique identifier, stable for the lifetime of the world.
    pub id: BodyId,
    /// String tag for finding bodies by role ("player", "wall", ...).
    /// Not unique, and never consulted by the solver.
    pub tag: String,
    /// Box center in world space.
    pub pos: Vec2,
    /// Linear velocity.
    pub vel: Vec2,
    /// Full extents of the box (half-size = size / 2).
    pub size: Vec2,
    /// Mass. A mass of exactly 0 marks a static body: it is skipped by
    /// integration and contributes zero inverse mass to collision response.
    pub mass: f32,
    /// Bounciness. The effective restitution of a pair is the geometric
    /// mean `sqrt(a * b)`.
    pub restitution: f32,
}

impl Body {
    /// Inverse mass: `1 / mass`, or exactly 0 for a static body.
    #[inline]
    pub fn inv_mass(&self) -> f32 {
        if self.mass != 0.0 {
            1.0 / self.mass
        } else {
            0.0
        }
    }

    /// Whether this body is static (immovable, infinite mass).
    #[inline]
    pub fn is_static(&self) -> bool {
        self.mass == 0.0
    }

    /// The body's collision box, as a fresh value copied from the current
    /// `pos`/`size`. Never aliases the live body state.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_size(self.pos, self.size)
    }
}

/// Builder for describing a body before it is spawned into a world.
#[derive(Debug, Clone)]
pub struct BodyDesc {
    pub tag: String,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub mass: f32,
    pub restitution: f32,
}

impl BodyDesc {
    /// Describe a dynamic (movable) body with the given box size and mass.
    pub fn dynamic(size: Vec2, mass: f32) -> Self {
        Self {
            tag: String::new(),
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size,
            mass,
            restitution: DEFAULT_RESTITUTION,
        }
    }

    /// Describe a fixed (static) body: mass 0, excluded from integration,
    /// immovable in collision response.
    pub fn fixed(size: Vec2) -> Self {
        Self {
            tag: String::new(),
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size,
            mass: 0.0,
            restitution: DEFAULT_RESTITUTION,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_vel(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.restitution = restitution;
        self
    }

    /// Fail-fast validation, run by [`PhysicsWorld::spawn`] so malformed
    /// values (NaN positions, negative masses) never enter the simulation.
    ///
    /// [`PhysicsWorld::spawn`]: crate::PhysicsWorld::spawn
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.mass.is_finite() || self.mass < 0.0 {
            return Err(ValidationError::InvalidMass(self.mass));
        }
        if !self.size.is_finite() || self.size.x <= 0.0 || self.size.y <= 0.0 {
            return Err(ValidationError::InvalidSize(self.size.x, self.size.y));
        }
        if !self.restitution.is_finite() || self.restitution < 0.0 {
            return Err(ValidationError::InvalidRestitution(self.restitution));
        }
        if !self.pos.is_finite() {
            return Err(ValidationError::NonFinitePosition(self.pos.x, self.pos.y));
        }
        if !self.vel.is_finite() {
            return Err(ValidationError::NonFiniteVelocity(self.vel.x, self.vel.y));
        }
        Ok(())
    }

    pub(crate) fn into_body(self, id: BodyId) -> Body {
        Body {
            id,
            tag: self.tag,
            pos: self.pos,
            vel: self.vel,
            size: self.size,
            mass: self.mass,
            restitution: self.restitution,
        }
    }
}
