//! Road Rivals - a two-player lane-dodging road game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, weather, collisions)
//! - `input`: Pressed-key state and per-rider bindings
//! - `records`: Session-best scores
//!
//! Rendering, key-event capture and screen transitions live in the host; the
//! crate exposes the match state for drawing and consumes resolved input flags.

pub mod input;
pub mod records;
pub mod sim;

pub use input::{InputState, KeyBindings};
pub use records::SessionRecords;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Road corridor
    pub const ROAD_WIDTH: f32 = 300.0;
    pub const LANE_COUNT: u32 = 3;
    pub const LANE_WIDTH: f32 = ROAD_WIDTH / LANE_COUNT as f32;

    /// Rider defaults
    pub const RIDER_WIDTH: f32 = 40.0;
    pub const RIDER_HEIGHT: f32 = 60.0;
    pub const RIDER_MOVE_SPEED: f32 = 5.0;
    /// Collision box shrink fraction (visually touching is not colliding)
    pub const RIDER_HITBOX_SHRINK: f32 = 0.3;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 40.0;
    pub const OBSTACLE_HEIGHT: f32 = 60.0;
    pub const OBSTACLE_SPAWN_Y: f32 = -60.0;
    pub const OBSTACLE_HITBOX_SHRINK: f32 = 0.2;

    /// Decoration defaults
    pub const DECORATION_WIDTH: f32 = 30.0;
    pub const DECORATION_HEIGHT: f32 = 60.0;
    pub const DECORATION_SPAWN_Y: f32 = -80.0;
    /// Roadside strip between the corridor edge and decorations
    pub const SIDE_STRIP_WIDTH: f32 = 50.0;

    /// Entities are culled once they pass this far below the bottom edge
    pub const CULL_MARGIN: f32 = 100.0;

    /// Scroll speed at distance 0
    pub const BASE_SPEED: f32 = 3.0;
    /// Speed gained per full level span of distance
    pub const SPEED_RAMP: f32 = 2.0;
    /// Distance covered by one level before cycling to the next
    pub const LEVEL_SPAN: f32 = 5000.0;

    /// Day/night cycle length in frames (~8 minutes at 60 fps)
    pub const DAY_CYCLE_FRAMES: u64 = 30_000;

    /// Weather pacing (playtested literals, frames at 60 fps)
    pub const WEATHER_TRIGGER_CHANCE: f64 = 0.0003;
    pub const WEATHER_DURATION_FRAMES: u32 = 300;
    pub const WEATHER_COOLDOWN_FRAMES: u32 = 900;
    /// Per-frame chance of extra debris while a storm is active
    pub const STORM_DEBRIS_CHANCE: f64 = 0.05;

    /// Decoration spawn gates
    pub const DECORATION_GATE_CHANCE: f64 = 0.1;
    pub const DECORATION_SIDE_CHANCE: f64 = 0.3;
}

/// Left edge of the road corridor
#[inline]
pub fn road_left() -> f32 {
    consts::FIELD_WIDTH / 2.0 - consts::ROAD_WIDTH / 2.0
}

/// Right edge of the road corridor
#[inline]
pub fn road_right() -> f32 {
    consts::FIELD_WIDTH / 2.0 + consts::ROAD_WIDTH / 2.0
}

/// X position for an obstacle centered in the given lane (0-based)
#[inline]
pub fn lane_spawn_x(lane: u32) -> f32 {
    road_left()
        + lane as f32 * consts::LANE_WIDTH
        + (consts::LANE_WIDTH - consts::OBSTACLE_WIDTH) / 2.0
}
