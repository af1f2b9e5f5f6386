use anyhow::{Context, Result};
use glam::Vec2;
use tumble_engine::{BodyDesc, BodyId, LevelManifest, PhysicsWorld, TimeStep};

const LEVEL_JSON: &str = include_str!("../level.json");

const TICKS: u32 = 600;
const FRAME_DT: f32 = 1.0 / 60.0;
const LOG_EVERY: u32 = 60;

/// Y is down, so jumping means a negative vertical velocity.
const WALK_SPEED: f32 = 90.0;
const JUMP_SPEED: f32 = -420.0;
const JUMP_TICKS: [u32; 2] = [120, 360];
const TURN_TICK: u32 = 300;

/// Tick where we pretend the host stalled for a quarter second, to show
/// the driver-side clamp at work.
const HITCH_TICK: u32 = 200;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let level = LevelManifest::from_json(LEVEL_JSON).context("parsing level.json")?;
    let mut world = level.build_world().context("building world")?;

    // Look the player up once and keep the id; no per-frame tag scans.
    let player = world
        .find_by_tag("player")
        .map(|body| body.id)
        .context("level has no player body")?;

    // A bouncy box dropped from high up, on top of what the level ships.
    world
        .spawn(
            BodyDesc::dynamic(Vec2::new(16.0, 16.0), 5.0)
                .with_tag("bouncer")
                .with_pos(Vec2::new(500.0, 100.0))
                .with_restitution(0.9),
        )
        .context("spawning bouncer")?;

    let timestep = TimeStep::default();
    let mut walk_dir = 1.0;
    let mut grounded = false;

    for tick in 0..TICKS {
        // The "wall clock": one 60 Hz frame, with one scripted stall.
        let raw_dt = if tick == HITCH_TICK { 0.25 } else { FRAME_DT };
        let dt = timestep.clamp(raw_dt);

        // Scripted input in place of a keyboard.
        if tick == TURN_TICK {
            walk_dir = -1.0;
        }
        if let Some(body) = world.get_mut(player) {
            if grounded {
                body.vel.x = WALK_SPEED * walk_dir;
            }
            if JUMP_TICKS.contains(&tick) && grounded {
                body.vel.y = JUMP_SPEED;
                log::info!("tick {:3}: jump!", tick);
            }
        }

        // Integrate, then detect and resolve. Strictly in that order.
        world.step(dt);
        world.resolve_collisions();

        grounded = is_grounded(&world, player);

        if tick % LOG_EVERY == 0 {
            draw(&world, tick, player, grounded);
        }
    }

    let player_body = world.get(player).context("player disappeared")?;
    log::info!(
        "done after {} ticks: player at ({:.1}, {:.1}), {} contacts in final sweep",
        TICKS,
        player_body.pos.x,
        player_body.pos.y,
        world.contacts().len()
    );
    Ok(())
}

/// A body is grounded when the last sweep produced a contact whose normal
/// supports it from below. Contact normals point from `body_a` toward
/// `body_b`, so "below" flips with which side the player is on.
fn is_grounded(world: &PhysicsWorld, player: BodyId) -> bool {
    world.contacts().iter().any(|contact| {
        (contact.body_a == player && contact.normal.y > 0.5)
            || (contact.body_b == player && contact.normal.y < -0.5)
    })
}

/// Stand-in for a renderer: one line per interesting body.
fn draw(world: &PhysicsWorld, tick: u32, player: BodyId, grounded: bool) {
    for body in world.iter().filter(|body| !body.is_static()) {
        log::info!(
            "tick {:3}: {:8} pos=({:6.1}, {:6.1}) vel=({:7.1}, {:7.1}){}",
            tick,
            body.tag,
            body.pos.x,
            body.pos.y,
            body.vel.x,
            body.vel.y,
            if body.id == player && grounded {
                " [grounded]"
            } else {
                ""
            },
        );
    }
}
