//! Fixed timestep simulation tick
//!
//! One call per rendered frame. While Playing, the pipeline runs in a fixed
//! order: player physics, spawner, enemy movement/collision, power-up
//! movement/collision, particle decay, then the level-up check. Every other
//! phase is inert: no entity moves, no timer advances, no score changes.

use glam::Vec2;
use rand::Rng;

use super::challenge;
use super::physics::integrate_player;
use super::spawn::spawn_entities;
use super::state::{Enemy, GameEvent, GamePhase, GameState, Particle, PowerUpKind};
use crate::consts::*;
use crate::tuning::{level_tuning, ms_to_ticks};

/// Input commands for a single tick. Movement is level-triggered (held),
/// jump/pause/confirm are rising edges produced by the input tracker.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub pause: bool,
    /// Menu/submit action; consumed by the driver, ignored by the sim
    pub confirm: bool,
}

/// Advance the game state by one tick.
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Pause toggle first, on the press edge.
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.set_phase(GamePhase::Paused);
                return;
            }
            GamePhase::Paused => state.set_phase(GamePhase::Playing),
            _ => {}
        }
    }

    // Simulation only runs while Playing.
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    // Shield expiry is sampled once per tick, at the start; a pickup later
    // in the same tick restarts the countdown (last write wins).
    if state.player.shielded && state.time_ticks >= state.shield_expires_tick {
        state.player.shielded = false;
    }

    integrate_player(&mut state.player, input);
    spawn_entities(state);
    advance_enemies(state);
    advance_power_ups(state);
    update_particles(state);
    check_level_up(state);
}

/// Move enemies, purge the ones that left the playfield, award dodge points,
/// and resolve collisions with the player.
///
/// The collection is rebuilt rather than mutated during traversal, so no
/// entity is skipped or processed twice.
fn advance_enemies(state: &mut GameState) {
    let tuning = level_tuning(state.level);
    let speed = tuning.enemy_speed;
    let points = tuning.points_per_dodge;
    let player_box = state.player.bounds();

    let enemies = std::mem::take(&mut state.enemies);
    let mut survivors = Vec::with_capacity(enemies.len());
    for mut enemy in enemies {
        enemy.pos.x -= speed;
        // Fully off-screen entities are purged, not hidden.
        if enemy.pos.x <= -enemy.width {
            continue;
        }

        // Dodge scoring: trailing edge past the player's leading edge, once.
        if !enemy.scored && enemy.pos.x + enemy.width < player_box.pos.x {
            enemy.scored = true;
            state.score += points;
        }

        if player_box.overlaps(&enemy.bounds()) {
            resolve_enemy_hit(state, &enemy);
            // The colliding enemy leaves the active set immediately.
            continue;
        }
        survivors.push(enemy);
    }
    state.enemies = survivors;
}

fn resolve_enemy_hit(state: &mut GameState, enemy: &Enemy) {
    if state.player.shielded {
        spawn_explosion(state, enemy.bounds().center(), COLOR_SHIELD_BLOCK);
        return;
    }
    // Once a game-over fired earlier in this pass, later collisions consume
    // their enemy but deal no damage and open no challenge.
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.lives = state.lives.saturating_sub(1);
    spawn_explosion(state, state.player.bounds().center(), COLOR_DAMAGE);
    state.push_event(GameEvent::LifeLost { remaining: state.lives });

    if state.lives == 0 {
        log::info!("game over: level {}, score {}", state.level, state.score);
        state.challenge = None;
        state.push_event(GameEvent::GameOver { score: state.score });
        state.set_phase(GamePhase::GameOver);
    } else if state.phase == GamePhase::Playing {
        challenge::begin_challenge(state);
    }
    // A collision while already in MathChallenge keeps the posed problem.
}

/// Move power-ups, purge exited ones, apply pickups on contact.
fn advance_power_ups(state: &mut GameState) {
    let player_box = state.player.bounds();

    let power_ups = std::mem::take(&mut state.power_ups);
    let mut survivors = Vec::with_capacity(power_ups.len());
    for mut pu in power_ups {
        pu.pos.x -= POWERUP_SPEED;
        if pu.pos.x <= -pu.width {
            continue;
        }
        if player_box.overlaps(&pu.bounds()) {
            apply_power_up(state, pu.kind);
            continue;
        }
        survivors.push(pu);
    }
    state.power_ups = survivors;
}

fn apply_power_up(state: &mut GameState, kind: PowerUpKind) {
    match kind {
        PowerUpKind::Shield => {
            state.player.shielded = true;
            // Restart, never stack: a fresh pickup always resets the timer.
            state.shield_expires_tick = state.time_ticks + ms_to_ticks(SHIELD_DURATION_MS);
        }
        PowerUpKind::Life => {
            state.lives = (state.lives + 1).min(INITIAL_LIVES);
            // The celebratory burst fires even when already at the cap.
            spawn_explosion(state, state.player.bounds().center(), COLOR_EXTRA_LIFE);
        }
    }
    state.push_event(GameEvent::PowerUpCollected(kind));
}

/// Enqueue one explosion burst centered at `center`.
pub(crate) fn spawn_explosion(state: &mut GameState, center: Vec2, color: u32) {
    for _ in 0..EXPLOSION_PARTICLES {
        // Bounded buffer: drop the oldest particle at the cap.
        if state.particles.len() >= MAX_PARTICLES {
            state.particles.remove(0);
        }
        let size = state.rng.random_range(1.0f32..4.0);
        let vel = Vec2::new(
            state.rng.random_range(-2.5f32..2.5),
            state.rng.random_range(-2.5f32..2.5),
        );
        let id = state.next_entity_id();
        state.particles.push(Particle {
            id,
            pos: center,
            vel,
            size,
            opacity: 1.0,
            color,
        });
    }
}

fn update_particles(state: &mut GameState) {
    for particle in state.particles.iter_mut() {
        particle.pos += particle.vel;
        particle.opacity -= PARTICLE_FADE;
    }
    state.particles.retain(|p| p.opacity > 0.0);
}

/// Level progression, evaluated once per tick after all other updates.
fn check_level_up(state: &mut GameState) {
    // Gated on still Playing so a mid-tick game-over is never overwritten.
    if state.phase != GamePhase::Playing {
        return;
    }
    if state.score < state.level as u64 * LEVEL_SCORE_TARGET {
        return;
    }
    if state.level >= TOTAL_LEVELS {
        log::info!("final level cleared, score {}", state.score);
        state.push_event(GameEvent::GameWon { score: state.score });
        state.set_phase(GamePhase::GameWon);
    } else {
        state.level += 1;
        log::info!("level up -> {}", state.level);
        state.push_event(GameEvent::LevelUp(state.level));
    }
}
