use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::error::ValidationError;
use crate::components::body::{BodyDesc, DEFAULT_RESTITUTION};
use crate::core::physics::PhysicsWorld;

/// Level manifest describing a world's gravity and initial bodies.
/// Loaded from a JSON file at runtime.
///
/// Vector fields are plain `[x, y]` arrays so manifests stay readable and
/// independent of the math crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelManifest {
    /// Gravity acceleration. Positive Y is down in Y-down worlds.
    pub gravity: [f32; 2],
    /// Bodies to spawn, in order.
    pub bodies: Vec<BodyDescriptor>,
}

/// Describes a single body within a level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyDescriptor {
    /// Role tag, e.g. "ground" or "player" (default: empty).
    #[serde(default)]
    pub tag: String,
    /// Box center.
    pub pos: [f32; 2],
    /// Full box extents.
    pub size: [f32; 2],
    /// Mass. Omitted or 0 means a static body.
    #[serde(default)]
    pub mass: f32,
    /// Initial velocity (default: at rest).
    #[serde(default)]
    pub vel: [f32; 2],
    /// Bounciness (default: 0.3).
    #[serde(default = "default_restitution")]
    pub restitution: f32,
}

fn default_restitution() -> f32 {
    DEFAULT_RESTITUTION
}

impl BodyDescriptor {
    /// Convert into a spawn description.
    pub fn to_desc(&self) -> BodyDesc {
        BodyDesc {
            tag: self.tag.clone(),
            pos: Vec2::from(self.pos),
            vel: Vec2::from(self.vel),
            size: Vec2::from(self.size),
            mass: self.mass,
            restitution: self.restitution,
        }
    }
}

impl LevelManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Build a fresh world and spawn every body in manifest order.
    pub fn build_world(&self) -> Result<PhysicsWorld, ValidationError> {
        let mut world = PhysicsWorld::new(Vec2::from(self.gravity));
        for descriptor in &self.bodies {
            world.spawn(descriptor.to_desc())?;
        }
        log::info!("level loaded: {} bodies", world.len());
        Ok(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_level() {
        let json = r#"{
            "gravity": [0.0, 980.0],
            "bodies": [
                { "tag": "ground", "pos": [400.0, 590.0], "size": [800.0, 20.0] }
            ]
        }"#;
        let level = LevelManifest::from_json(json).unwrap();
        assert_eq!(level.gravity, [0.0, 980.0]);
        assert_eq!(level.bodies.len(), 1);

        let ground = &level.bodies[0];
        assert_eq!(ground.tag, "ground");
        // Omitted fields fall back to defaults: static, at rest, 0.3.
        assert_eq!(ground.mass, 0.0);
        assert_eq!(ground.vel, [0.0, 0.0]);
        assert!((ground.restitution - 0.3).abs() < 0.001);
    }

    #[test]
    fn parse_dynamic_body_with_all_fields() {
        let json = r#"{
            "gravity": [0.0, 980.0],
            "bodies": [
                { "tag": "crate", "pos": [100.0, 100.0], "size": [32.0, 32.0],
                  "mass": 60.0, "vel": [5.0, -2.0], "restitution": 0.8 }
            ]
        }"#;
        let level = LevelManifest::from_json(json).unwrap();
        let body = &level.bodies[0];
        assert_eq!(body.mass, 60.0);
        assert_eq!(body.vel, [5.0, -2.0]);
        assert!((body.restitution - 0.8).abs() < 0.001);
    }

    #[test]
    fn build_world_spawns_in_manifest_order() {
        let json = r#"{
            "gravity": [0.0, 100.0],
            "bodies": [
                { "tag": "ground", "pos": [0.0, 50.0], "size": [200.0, 20.0] },
                { "tag": "crate", "pos": [0.0, 0.0], "size": [10.0, 10.0], "mass": 1.0 }
            ]
        }"#;
        let level = LevelManifest::from_json(json).unwrap();
        let mut world = level.build_world().unwrap();

        assert_eq!(world.len(), 2);
        let tags: Vec<&str> = world.iter().map(|b| b.tag.as_str()).collect();
        assert_eq!(tags, vec!["ground", "crate"]);

        // The built world simulates: the crate falls, the ground doesn't.
        world.step(0.1);
        assert!(world.find_by_tag("crate").unwrap().pos.y > 0.0);
        assert_eq!(world.find_by_tag("ground").unwrap().pos.y, 50.0);
    }

    #[test]
    fn build_world_rejects_malformed_bodies() {
        let json = r#"{
            "gravity": [0.0, 0.0],
            "bodies": [
                { "pos": [0.0, 0.0], "size": [0.0, 10.0] }
            ]
        }"#;
        let level = LevelManifest::from_json(json).unwrap();
        assert!(level.build_world().is_err());
    }
}
