//! Stochastic entity spawning
//!
//! All rolls go through the match RNG so a seed reproduces a whole run.
//! The per-frame gates (level spawn frequency, decoration gates, storm
//! debris chance) live in `tick`; this module creates the entities.

use rand::Rng;

use super::level::{LevelConfig, LevelId};
use super::state::{Decoration, DecorationKind, Obstacle, ObstacleKind};
use crate::consts::{DECORATION_SIDE_CHANCE, DECORATION_WIDTH, LANE_COUNT, SIDE_STRIP_WIDTH};
use crate::{lane_spawn_x, road_left, road_right};

/// Create an obstacle in a uniformly random lane, kind drawn uniformly from
/// the level's allowed list (duplicate entries weight the draw)
pub fn spawn_obstacle(rng: &mut impl Rng, cfg: &LevelConfig, speed: f32) -> Obstacle {
    let lane = rng.random_range(0..LANE_COUNT);
    let kind = cfg.allowed[rng.random_range(0..cfg.allowed.len())];
    Obstacle::new(lane_spawn_x(lane), kind, cfg.id, speed)
}

/// Create a storm debris obstacle in a random lane. Storms bypass the level
/// frequency gate, stacking debris on top of normal traffic.
pub fn spawn_storm_debris(rng: &mut impl Rng, level: LevelId, speed: f32) -> Obstacle {
    let lane = rng.random_range(0..LANE_COUNT);
    Obstacle::new(lane_spawn_x(lane), ObstacleKind::StormDebris, level, speed)
}

/// Roll each roadside independently and append any spawned decorations
pub fn roll_decorations(
    rng: &mut impl Rng,
    level: LevelId,
    speed: f32,
    out: &mut Vec<Decoration>,
) {
    let left_x = road_left() - SIDE_STRIP_WIDTH - DECORATION_WIDTH;
    let right_x = road_right() + DECORATION_WIDTH;
    for x in [left_x, right_x] {
        if rng.random_bool(DECORATION_SIDE_CHANCE) {
            let kind = decoration_kind(rng, level);
            out.push(Decoration::new(x, kind, level, speed));
        }
    }
}

/// Level-specific weighted scenery choice
fn decoration_kind(rng: &mut impl Rng, level: LevelId) -> DecorationKind {
    match level.0 {
        1 => {
            let roll: f64 = rng.random();
            if roll < 0.3 {
                DecorationKind::City
            } else if roll < 0.6 {
                DecorationKind::House
            } else {
                DecorationKind::Bridge
            }
        }
        2 => {
            if rng.random_bool(0.7) {
                DecorationKind::House
            } else {
                DecorationKind::GasStation
            }
        }
        _ => DecorationKind::SnowHouse,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{LANE_WIDTH, OBSTACLE_SPAWN_Y};
    use crate::sim::level::LevelTable;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn obstacles_spawn_in_lane_centers_above_screen() {
        let table = LevelTable::standard();
        let cfg = table.get(LevelId(1));
        let mut rng = Pcg32::seed_from_u64(11);
        let lane_xs: Vec<f32> = (0..LANE_COUNT).map(lane_spawn_x).collect();

        for _ in 0..200 {
            let obs = spawn_obstacle(&mut rng, cfg, 3.0);
            assert_eq!(obs.pos.y, OBSTACLE_SPAWN_Y);
            assert!(lane_xs.contains(&obs.pos.x));
            assert!(cfg.allowed.contains(&obs.kind));
            assert!(!obs.is_static);
        }
    }

    #[test]
    fn obstacle_kind_draw_respects_duplicates() {
        // HIGHWAY lists Ambulance twice, so it should dominate Car roughly 2:1
        let table = LevelTable::standard();
        let cfg = table.get(LevelId(1));
        let mut rng = Pcg32::seed_from_u64(12);
        let mut ambulances = 0;
        let mut cars = 0;
        for _ in 0..4000 {
            match spawn_obstacle(&mut rng, cfg, 3.0).kind {
                ObstacleKind::Ambulance => ambulances += 1,
                ObstacleKind::Car => cars += 1,
                _ => {}
            }
        }
        assert!(ambulances > cars * 3 / 2);
    }

    #[test]
    fn storm_debris_has_its_own_kind() {
        let mut rng = Pcg32::seed_from_u64(13);
        let obs = spawn_storm_debris(&mut rng, LevelId(2), 4.5);
        assert_eq!(obs.kind, ObstacleKind::StormDebris);
        assert_eq!(obs.level, LevelId(2));
        assert_eq!(obs.speed, 4.5);
    }

    #[test]
    fn decorations_stay_off_the_road() {
        let mut rng = Pcg32::seed_from_u64(14);
        let mut out = Vec::new();
        for _ in 0..500 {
            roll_decorations(&mut rng, LevelId(1), 3.0, &mut out);
        }
        assert!(!out.is_empty());
        for dec in &out {
            let right_edge = dec.pos.x + dec.size.x;
            assert!(right_edge <= road_left() || dec.pos.x >= road_right());
        }
    }

    #[test]
    fn snow_level_only_spawns_snow_houses() {
        let mut rng = Pcg32::seed_from_u64(15);
        let mut out = Vec::new();
        for _ in 0..500 {
            roll_decorations(&mut rng, LevelId(3), 3.0, &mut out);
        }
        assert!(out.iter().all(|d| d.kind == DecorationKind::SnowHouse));
    }

    #[test]
    fn highway_mixes_city_house_bridge() {
        let mut rng = Pcg32::seed_from_u64(16);
        let mut out = Vec::new();
        for _ in 0..2000 {
            roll_decorations(&mut rng, LevelId(1), 3.0, &mut out);
        }
        let has = |k| out.iter().any(|d| d.kind == k);
        assert!(has(DecorationKind::City));
        assert!(has(DecorationKind::House));
        assert!(has(DecorationKind::Bridge));
        assert!(!has(DecorationKind::SnowHouse));
    }

    #[test]
    fn lane_width_matches_spawn_stride() {
        let stride = lane_spawn_x(1) - lane_spawn_x(0);
        assert_eq!(stride, LANE_WIDTH);
    }
}
