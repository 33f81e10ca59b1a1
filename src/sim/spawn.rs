//! Entity spawner
//!
//! Runs once per tick while Playing. Enemies spawn on a per-level cadence
//! measured in ticks; power-ups spawn from two independent random trials
//! every tick, so both may fire in the same frame.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, EnemyKind, GameState, PowerUp, PowerUpKind};
use crate::consts::*;
use crate::tuning::{level_tuning, ms_to_ticks};

/// Conditionally create new enemies and power-ups for this tick.
pub fn spawn_entities(state: &mut GameState) {
    spawn_enemy(state);
    spawn_power_ups(state);
}

fn spawn_enemy(state: &mut GameState) {
    // Fires once the elapsed time exceeds the current level's interval, so
    // a level-up mid-wait shortens the pending wait.
    let interval = ms_to_ticks(level_tuning(state.level).spawn_interval_ms);
    if state.time_ticks - state.last_enemy_spawn_tick <= interval {
        return;
    }
    state.last_enemy_spawn_tick = state.time_ticks;

    let kind = EnemyKind::ALL[state.rng.random_range(0..EnemyKind::ALL.len())];
    let (width, height) = kind.size();
    let id = state.next_entity_id();
    state.enemies.push(Enemy {
        id,
        kind,
        // Right edge of the playfield, feet on the ground line
        pos: Vec2::new(GAME_WIDTH, GROUND_Y - height),
        width,
        height,
        scored: false,
    });
}

fn spawn_power_ups(state: &mut GameState) {
    // Two independent trials; a life pickup never spawns at full lives.
    if state.rng.random_bool(SHIELD_SPAWN_CHANCE) {
        push_power_up(state, PowerUpKind::Shield);
    }
    if state.lives < INITIAL_LIVES && state.rng.random_bool(LIFE_SPAWN_CHANCE) {
        push_power_up(state, PowerUpKind::Life);
    }
}

fn push_power_up(state: &mut GameState, kind: PowerUpKind) {
    // Randomized height in the band a grounded or jumping player can reach
    let lift: f32 = state.rng.random_range(0.0..50.0);
    let id = state.next_entity_id();
    state.power_ups.push(PowerUp {
        id,
        kind,
        pos: Vec2::new(GAME_WIDTH, GROUND_Y - PLAYER_HEIGHT - lift),
        width: POWERUP_WIDTH,
        height: POWERUP_HEIGHT,
    });
}
