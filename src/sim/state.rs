//! Match state and core entity types
//!
//! One `MatchState` per running match, mutated only by `tick`. The host keeps
//! a reference for drawing and takes a `Snapshot` for anything it serializes.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::environment::{Weather, WeatherKind};
use super::level::{LevelId, LevelTable, Palette};
use crate::consts::*;
use crate::input::DirectionFlags;
use crate::records::SessionRecords;
use crate::{road_left, road_right};

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Centered inset: shrink both dimensions by `frac`, keeping the center
    pub fn shrunk(&self, frac: f32) -> Rect {
        Rect {
            pos: self.pos + self.size * (frac / 2.0),
            size: self.size * (1.0 - frac),
        }
    }
}

/// A player-controlled rider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rider {
    /// Rider slot (0 or 1), indexes records and input bindings
    pub slot: usize,
    pub pos: Vec2,
    pub size: Vec2,
    /// Movement per frame along each pressed axis
    pub move_speed: f32,
    pub score: u64,
    pub alive: bool,
    pub name: String,
}

impl Rider {
    pub fn new(slot: usize, x: f32, name: String) -> Self {
        Self {
            slot,
            pos: Vec2::new(x, FIELD_HEIGHT - 150.0),
            size: Vec2::new(RIDER_WIDTH, RIDER_HEIGHT),
            move_speed: RIDER_MOVE_SPEED,
            score: 0,
            alive: true,
            name,
        }
    }

    /// Move by one frame of input. Dead riders are frozen.
    ///
    /// X stays inside the road corridor, y inside the visible frame.
    pub fn update(&mut self, flags: DirectionFlags) {
        if !self.alive {
            return;
        }
        if flags.left {
            self.pos.x -= self.move_speed;
        }
        if flags.right {
            self.pos.x += self.move_speed;
        }
        if flags.up {
            self.pos.y -= self.move_speed;
        }
        if flags.down {
            self.pos.y += self.move_speed;
        }
        self.pos.x = self.pos.x.clamp(road_left(), road_right() - self.size.x);
        self.pos.y = self.pos.y.clamp(0.0, FIELD_HEIGHT - self.size.y);
    }

    /// Visual rectangle
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Collision box: 30% smaller than the visual rect, so visually
    /// touching an obstacle is not yet a hit
    pub fn bounds(&self) -> Rect {
        self.rect().shrunk(RIDER_HITBOX_SHRINK)
    }
}

/// Obstacle categories (closed set; each level allows a subset)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Car,
    Ambulance,
    Tanker,
    Snowplow,
    Barrier,
    /// Injected only while a storm is active
    StormDebris,
}

/// A hazard on the road
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: ObstacleKind,
    /// Level active when this obstacle spawned (drives its sprite)
    pub level: LevelId,
    /// Static obstacles do not scroll
    pub is_static: bool,
    /// Mirrored from the shared current speed each frame
    pub speed: f32,
}

impl Obstacle {
    pub fn new(x: f32, kind: ObstacleKind, level: LevelId, speed: f32) -> Self {
        Self {
            pos: Vec2::new(x, OBSTACLE_SPAWN_Y),
            size: Vec2::new(OBSTACLE_WIDTH, OBSTACLE_HEIGHT),
            kind,
            level,
            is_static: false,
            speed,
        }
    }

    pub fn update(&mut self) {
        if !self.is_static {
            self.pos.y += self.speed;
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Collision box: 20% smaller than the visual rect
    pub fn bounds(&self) -> Rect {
        self.rect().shrunk(OBSTACLE_HITBOX_SHRINK)
    }
}

/// Roadside scenery categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecorationKind {
    House,
    City,
    Bridge,
    GasStation,
    SnowHouse,
}

/// Cosmetic roadside object. Never collides; its rect is used only for culling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decoration {
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: DecorationKind,
    pub level: LevelId,
    pub speed: f32,
}

impl Decoration {
    pub fn new(x: f32, kind: DecorationKind, level: LevelId, speed: f32) -> Self {
        Self {
            pos: Vec2::new(x, DECORATION_SPAWN_Y),
            size: Vec2::new(DECORATION_WIDTH, DECORATION_HEIGHT),
            kind,
            level,
            speed,
        }
    }

    pub fn update(&mut self) {
        self.pos.y += self.speed;
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Complete match state, mutated exclusively by `tick`
#[derive(Debug, Clone)]
pub struct MatchState {
    /// Match seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub running: bool,
    pub level: LevelId,
    pub base_speed: f32,
    /// Base speed plus the distance ramp; never decreases within a match
    pub current_speed: f32,
    pub distance: f32,
    pub riders: [Rider; 2],
    pub obstacles: Vec<Obstacle>,
    pub decorations: Vec<Decoration>,
    /// Day/night phase in [0, 1); night in the first and last quarter
    pub day_phase: f32,
    pub is_night: bool,
    pub weather: Weather,
    pub frame: u64,
    /// Scroll offset for the host's animated lane lines
    pub lane_line_offset: u64,
    /// Owned copy of the level table (tests pin spawn probabilities here)
    pub levels: LevelTable,
    /// Session-best score per rider slot, carried across restarts
    pub records: SessionRecords,
}

impl MatchState {
    /// Start a fresh match with empty session records
    pub fn new(seed: u64, names: [String; 2]) -> Self {
        let levels = LevelTable::standard();
        let [name0, name1] = names;
        let left = road_left();
        let state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            running: true,
            level: levels.first(),
            base_speed: BASE_SPEED,
            current_speed: BASE_SPEED,
            distance: 0.0,
            riders: [
                Rider::new(0, left + LANE_WIDTH - 20.0, name0),
                Rider::new(1, left + 2.0 * LANE_WIDTH - 20.0, name1),
            ],
            obstacles: Vec::new(),
            decorations: Vec::new(),
            day_phase: 0.5,
            is_night: false,
            weather: Weather::clear(),
            frame: 0,
            lane_line_offset: 0,
            levels,
            records: SessionRecords::default(),
        };
        log::info!(
            "match started: {} vs {} (seed {})",
            state.riders[0].name,
            state.riders[1].name,
            seed
        );
        state
    }

    /// Start a new match keeping the session records
    pub fn restart(&mut self, seed: u64, names: [String; 2]) {
        let records = self.records.clone();
        *self = MatchState::new(seed, names);
        self.records = records;
    }

    /// HUD speed as a percentage of base speed
    pub fn speed_percent(&self) -> u32 {
        (self.current_speed / self.base_speed * 100.0).floor() as u32
    }

    /// Serializable view for the presentation collaborator
    pub fn snapshot(&self) -> Snapshot {
        let cfg = self.levels.get(self.level);
        Snapshot {
            running: self.running,
            frame: self.frame,
            level_name: cfg.name.to_string(),
            palette: cfg.palette,
            speed_percent: self.speed_percent(),
            distance: self.distance,
            is_night: self.is_night,
            weather: self.weather.active_kind(),
            lane_line_offset: self.lane_line_offset,
            riders: self
                .riders
                .iter()
                .map(|r| RiderView {
                    name: r.name.clone(),
                    pos: r.pos,
                    size: r.size,
                    score: r.score,
                    alive: r.alive,
                    record: self.records.best(r.slot),
                })
                .collect(),
            obstacles: self.obstacles.clone(),
            decorations: self.decorations.clone(),
        }
    }
}

/// Per-rider slice of a snapshot
#[derive(Debug, Clone, Serialize)]
pub struct RiderView {
    pub name: String,
    pub pos: Vec2,
    pub size: Vec2,
    pub score: u64,
    pub alive: bool,
    pub record: u64,
}

/// Everything the host needs to draw one frame and the end screen
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub running: bool,
    pub frame: u64,
    pub level_name: String,
    /// Colors of the active level
    pub palette: Palette,
    pub speed_percent: u32,
    pub distance: f32,
    pub is_night: bool,
    pub weather: Option<WeatherKind>,
    pub lane_line_offset: u64,
    pub riders: Vec<RiderView>,
    pub obstacles: Vec<Obstacle>,
    pub decorations: Vec<Decoration>,
}
