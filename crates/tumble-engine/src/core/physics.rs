use glam::Vec2;

use crate::api::error::ValidationError;
use crate::api::types::BodyId;
use crate::components::body::{Body, BodyDesc};
use crate::core::collision::ContactPoint;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// A contact detected during the most recent resolution sweep.
///
/// `normal` points from `body_a` toward `body_b`; `penetration` is the
/// overlap depth before resolution. Static/static pairs are reported too,
/// even though they receive no response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactEvent {
    pub body_a: BodyId,
    pub body_b: BodyId,
    pub normal: Vec2,
    pub penetration: f32,
}

impl ContactEvent {
    /// Whether this contact involves the given body.
    pub fn involves(&self, id: BodyId) -> bool {
        self.body_a == id || self.body_b == id
    }

    /// The other participant, if `id` is one of the pair.
    pub fn other(&self, id: BodyId) -> Option<BodyId> {
        if self.body_a == id {
            Some(self.body_b)
        } else if self.body_b == id {
            Some(self.body_a)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// PhysicsWorld
// ---------------------------------------------------------------------------

/// The simulation aggregate: a gravity vector plus an ordered sequence of
/// bodies.
///
/// The world is plain owned state — construct it in the driver, thread it
/// through the frame loop, drop it when the session ends. Each tick the
/// driver calls [`step`](Self::step) then
/// [`resolve_collisions`](Self::resolve_collisions), in that order, with a
/// delta time it has already clamped (see [`TimeStep`](crate::TimeStep)).
///
/// Body storage is a flat `Vec` in spawn order. Spawn order is irrelevant
/// to single-pair physics but fixes the pair-iteration order of the
/// resolution sweep, which is observable when one body touches several
/// neighbors in the same tick.
pub struct PhysicsWorld {
    gravity: Vec2,
    bodies: Vec<Body>,
    contacts: Vec<ContactEvent>,
    next_id: u32,
}

impl PhysicsWorld {
    /// Create an empty world with the given gravity (acceleration). For
    /// Y-down coordinate systems, use positive Y for downward gravity.
    pub fn new(gravity: Vec2) -> Self {
        Self {
            gravity,
            bodies: Vec::with_capacity(64),
            contacts: Vec::new(),
            next_id: 1,
        }
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    // -- Body lifecycle --

    /// Validate a description and add the body to the world, assigning the
    /// next id. Ids are never reused.
    pub fn spawn(&mut self, desc: BodyDesc) -> Result<BodyId, ValidationError> {
        desc.validate()?;
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push(desc.into_body(id));
        Ok(id)
    }

    /// Remove a body by id. Returns the removed body if found.
    ///
    /// Uses order-preserving removal so the sweep order of the remaining
    /// bodies stays their spawn order.
    pub fn despawn(&mut self, id: BodyId) -> Option<Body> {
        let idx = self.bodies.iter().position(|b| b.id == id)?;
        Some(self.bodies.remove(idx))
    }

    // -- Queries --

    /// Get a reference to a body by id.
    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Get a mutable reference to a body by id.
    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    /// Find the first body with the given tag. Host convenience — the
    /// solver never looks at tags. Prefer looking up once and keeping the
    /// [`BodyId`] over scanning every frame.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.tag == tag)
    }

    /// Find the first body with the given tag (mutable).
    pub fn find_by_tag_mut(&mut self, tag: &str) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.tag == tag)
    }

    /// Find all bodies with the given tag.
    pub fn find_all_by_tag(&self, tag: &str) -> Vec<&Body> {
        self.bodies.iter().filter(|b| b.tag == tag).collect()
    }

    /// Iterate over all bodies in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    /// Iterate over all bodies mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.bodies.iter_mut()
    }

    /// Number of bodies in the world.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the world has no bodies.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Contacts recorded by the most recent
    /// [`resolve_collisions`](Self::resolve_collisions) call.
    pub fn contacts(&self) -> &[ContactEvent] {
        &self.contacts
    }

    // -- Simulation --

    /// Advance every dynamic body by `dt` seconds: gravity into velocity,
    /// then velocity into position (semi-implicit Euler). Static bodies
    /// (mass 0) are skipped entirely.
    ///
    /// The step is exact for whatever `dt` it receives; clamping negative
    /// or oversized frame deltas is the driver's job.
    pub fn step(&mut self, dt: f32) {
        for body in &mut self.bodies {
            if body.is_static() {
                continue;
            }

            body.vel += self.gravity * dt;
            body.pos += body.vel * dt;
        }
    }

    /// Detect and resolve all pairwise overlaps, in place.
    ///
    /// Brute-force O(n²) sweep: `i` from 0 to n-2, `j` from i+1 to n-1,
    /// each unordered pair visited once, boxes rebuilt from the bodies'
    /// current state per pair. A colliding pair is corrected and impulsed
    /// immediately, so a body touching several neighbors is resolved
    /// against them sequentially within the same call — single pass, no
    /// iterative solver, outcome dependent on spawn order. Contacts are
    /// recorded into the buffer behind [`contacts`](Self::contacts).
    pub fn resolve_collisions(&mut self) {
        self.contacts.clear();
        if self.bodies.len() < 2 {
            return;
        }

        for i in 0..self.bodies.len() - 1 {
            for j in i + 1..self.bodies.len() {
                let point = match self.bodies[i].aabb().contact(&self.bodies[j].aabb()) {
                    Some(point) => point,
                    None => continue,
                };

                let (head, tail) = self.bodies.split_at_mut(j);
                let a = &mut head[i];
                let b = &mut tail[0];

                self.contacts.push(ContactEvent {
                    body_a: a.id,
                    body_b: b.id,
                    normal: point.normal,
                    penetration: point.penetration,
                });

                resolve_pair(a, b, point);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Pair resolver
// ---------------------------------------------------------------------------

/// Positional correction + impulse response for one overlapping pair.
///
/// A pair of static bodies is left untouched: abutting walls may legally
/// overlap, with zero correction and zero impulse rather than a division
/// by zero.
fn resolve_pair(a: &mut Body, b: &mut Body, point: ContactPoint) {
    let inv_mass_a = a.inv_mass();
    let inv_mass_b = b.inv_mass();
    let total_inv_mass = inv_mass_a + inv_mass_b;
    if total_inv_mass == 0.0 {
        return;
    }

    // Split the penetration between the two bodies proportional to their
    // share of the total inverse mass; a static body's share is zero.
    let share_a = inv_mass_a / total_inv_mass;
    let share_b = inv_mass_b / total_inv_mass;
    a.pos -= point.normal * (point.penetration * share_a);
    b.pos += point.normal * (point.penetration * share_b);

    // Impulse along the contact normal, scaled by the pair's effective
    // restitution (geometric mean).
    let restitution = (a.restitution * b.restitution).sqrt();
    let relative_vel = a.vel - b.vel;
    let impulse = -(1.0 + restitution) * relative_vel.dot(point.normal) / total_inv_mass;

    a.vel += point.normal * (impulse * inv_mass_a);
    b.vel -= point.normal * (impulse * inv_mass_b);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
