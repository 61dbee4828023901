//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per host frame callback
//! - Seeded RNG only, owned by the match state
//! - No rendering or platform dependencies

pub mod collision;
pub mod environment;
pub mod level;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::rects_overlap;
pub use environment::{Weather, WeatherKind, day_phase, is_night};
pub use level::{LevelConfig, LevelId, LevelTable, Palette, speed_at, speed_for_distance};
pub use state::{
    Decoration, DecorationKind, MatchState, Obstacle, ObstacleKind, Rect, Rider, RiderView,
    Snapshot,
};
pub use tick::{TickInput, tick};
