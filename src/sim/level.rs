//! Level configuration and the difficulty curve
//!
//! Levels cycle with distance; speed ramps linearly with distance. Both are
//! pure functions of cumulative distance so the curve is deterministic.

use anyhow::{Result, bail, ensure};
use serde::{Deserialize, Serialize};

use super::state::ObstacleKind;
use crate::consts::{BASE_SPEED, LEVEL_SPAN, SPEED_RAMP};

/// Level identifier (key into the level table)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LevelId(pub u8);

/// Colors handed to the presentation collaborator (CSS hex)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Palette {
    pub background: &'static str,
    pub road: &'static str,
    pub lane_line: &'static str,
}

/// Static per-level configuration
#[derive(Debug, Clone, Serialize)]
pub struct LevelConfig {
    pub id: LevelId,
    pub name: &'static str,
    pub palette: Palette,
    /// Obstacle kinds this level may spawn. Duplicates weight the draw.
    pub allowed: Vec<ObstacleKind>,
    /// Per-frame Bernoulli probability of spawning an obstacle
    pub obstacle_frequency: f64,
}

/// The immutable level table plus the fixed cycle order
#[derive(Debug, Clone, Serialize)]
pub struct LevelTable {
    levels: Vec<LevelConfig>,
    cycle: Vec<LevelId>,
}

impl LevelTable {
    /// The shipped three-level rotation
    pub fn standard() -> Self {
        use ObstacleKind::*;
        let table = Self {
            levels: vec![
                LevelConfig {
                    id: LevelId(1),
                    name: "HIGHWAY",
                    palette: Palette {
                        background: "#2a4a2a",
                        road: "#333333",
                        lane_line: "#ffff00",
                    },
                    allowed: vec![Car, Ambulance, Ambulance, Barrier],
                    obstacle_frequency: 0.02,
                },
                LevelConfig {
                    id: LevelId(2),
                    name: "DESERT",
                    palette: Palette {
                        background: "#d4a574",
                        road: "#8b7355",
                        lane_line: "#ffff00",
                    },
                    allowed: vec![Car, Tanker, Tanker, Barrier],
                    obstacle_frequency: 0.02,
                },
                LevelConfig {
                    id: LevelId(3),
                    name: "SNOW",
                    palette: Palette {
                        background: "#c0c0c0",
                        road: "#666666",
                        lane_line: "#ffffff",
                    },
                    allowed: vec![Car, Snowplow, Snowplow, Barrier],
                    obstacle_frequency: 0.02,
                },
            ],
            cycle: vec![LevelId(1), LevelId(2), LevelId(3)],
        };
        debug_assert!(table.validate().is_ok());
        table
    }

    /// Reject configuration defects up front rather than per-frame
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.levels.is_empty(), "level table is empty");
        ensure!(!self.cycle.is_empty(), "level cycle is empty");
        for cfg in &self.levels {
            ensure!(
                !cfg.allowed.is_empty(),
                "level {} ({}) allows no obstacle kinds",
                cfg.id.0,
                cfg.name
            );
            ensure!(
                !cfg.allowed.contains(&ObstacleKind::StormDebris),
                "level {} ({}) lists StormDebris, which only storms spawn",
                cfg.id.0,
                cfg.name
            );
            ensure!(
                (0.0..=1.0).contains(&cfg.obstacle_frequency),
                "level {} ({}) spawn probability {} outside [0, 1]",
                cfg.id.0,
                cfg.name,
                cfg.obstacle_frequency
            );
        }
        for id in &self.cycle {
            if !self.levels.iter().any(|l| l.id == *id) {
                bail!("level cycle references unknown level {}", id.0);
            }
        }
        Ok(())
    }

    /// First level of the cycle (a match starts here)
    pub fn first(&self) -> LevelId {
        self.cycle[0]
    }

    /// Config for a level id. Panics on an unknown id, which `validate`
    /// rules out for every id the cycle can produce.
    pub fn get(&self, id: LevelId) -> &LevelConfig {
        self.levels
            .iter()
            .find(|l| l.id == id)
            .unwrap_or_else(|| panic!("unknown level id {}", id.0))
    }

    /// Mutable config access (tests pin spawn probabilities through this)
    pub fn get_mut(&mut self, id: LevelId) -> &mut LevelConfig {
        self.levels
            .iter_mut()
            .find(|l| l.id == id)
            .unwrap_or_else(|| panic!("unknown level id {}", id.0))
    }

    /// Active level for a cumulative distance: one `LEVEL_SPAN` per level,
    /// repeating through the cycle forever
    pub fn level_for_distance(&self, distance: f32) -> LevelId {
        let index = (distance / LEVEL_SPAN).floor() as usize % self.cycle.len();
        self.cycle[index]
    }
}

/// Scroll speed for a cumulative distance: linear ramp over the base,
/// `SPEED_RAMP` gained per `LEVEL_SPAN` traveled
pub fn speed_for_distance(base: f32, distance: f32) -> f32 {
    base + (distance / LEVEL_SPAN) * SPEED_RAMP
}

/// Convenience wrapper using the default base speed
pub fn speed_at(distance: f32) -> f32 {
    speed_for_distance(BASE_SPEED, distance)
}
