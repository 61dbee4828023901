//! The per-frame simulation step
//!
//! The host calls `tick` exactly once per animation frame while the match is
//! running. Each call is one complete, non-reentrant step: environment,
//! rider movement, entity advance and culling, spawn gates, collisions,
//! scoring, difficulty ramp, level cycling, terminal check.

use rand::Rng;

use super::collision;
use super::environment::{self, WeatherKind};
use super::level;
use super::spawn;
use super::state::MatchState;
use crate::consts::{CULL_MARGIN, DECORATION_GATE_CHANCE, FIELD_HEIGHT, STORM_DEBRIS_CHANCE};
use crate::input::DirectionFlags;

/// Resolved input flags for one step, one entry per rider slot
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub riders: [DirectionFlags; 2],
}

/// Advance the match by one frame. No-op once the match has ended.
pub fn tick(state: &mut MatchState, input: &TickInput) {
    if !state.running {
        return;
    }

    // 1. Frame counter and lane-line scroll
    state.frame += 1;
    state.lane_line_offset += 1;

    // 2. Environment: day/night phase, weather machine, storm debris
    state.day_phase = environment::day_phase(state.frame);
    state.is_night = environment::is_night(state.day_phase);
    state.weather.step(&mut state.rng);
    if state.weather.active_kind() == Some(WeatherKind::Storm)
        && state.rng.random_bool(STORM_DEBRIS_CHANCE)
    {
        let debris = spawn::spawn_storm_debris(&mut state.rng, state.level, state.current_speed);
        state.obstacles.push(debris);
    }

    // 3. Riders move from this step's input
    for (rider, flags) in state.riders.iter_mut().zip(input.riders) {
        rider.update(flags);
    }

    // 4. Advance scrolling entities at the shared speed, cull off-screen ones
    let speed = state.current_speed;
    for obstacle in &mut state.obstacles {
        obstacle.speed = speed;
        obstacle.update();
    }
    for decoration in &mut state.decorations {
        decoration.speed = speed;
        decoration.update();
    }
    let cull_line = FIELD_HEIGHT + CULL_MARGIN;
    state.obstacles.retain(|o| o.pos.y < cull_line);
    state.decorations.retain(|d| d.pos.y < cull_line);

    // 5. Spawn gates
    let cfg = state.levels.get(state.level);
    if state.rng.random_bool(cfg.obstacle_frequency) {
        let obstacle = spawn::spawn_obstacle(&mut state.rng, cfg, speed);
        state.obstacles.push(obstacle);
    }
    if state.rng.random_bool(DECORATION_GATE_CHANCE) {
        spawn::roll_decorations(&mut state.rng, state.level, speed, &mut state.decorations);
    }

    // 6. Collisions, then score accrual for the survivors
    collision::run_collisions(&mut state.riders, &state.obstacles);
    let gained = state.current_speed.floor() as u64;
    for rider in &mut state.riders {
        if rider.alive {
            rider.score += gained;
        }
    }

    // 7. Distance and the speed ramp
    state.distance += state.current_speed;
    state.current_speed = level::speed_for_distance(state.base_speed, state.distance);

    // 8. Level cycling on distance span boundaries
    let next = state.levels.level_for_distance(state.distance);
    if next != state.level {
        log::info!(
            "entering level {} ({}) at distance {:.0}",
            next.0,
            state.levels.get(next).name,
            state.distance
        );
        state.level = next;
    }

    // 9. Terminal check: the match ends the frame both riders are dead
    if state.riders.iter().all(|r| !r.alive) {
        end_match(state);
    }
}

fn end_match(state: &mut MatchState) {
    state.running = false;
    for rider in &state.riders {
        if state.records.submit(rider.slot, rider.score) {
            log::info!("{} set a session record: {}", rider.name, rider.score);
        }
    }
    log::info!(
        "match over after {} frames: {} {} / {} {}",
        state.frame,
        state.riders[0].name,
        state.riders[0].score,
        state.riders[1].name,
        state.riders[1].score
    );
}
