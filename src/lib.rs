//! Techno Runner - a side-scrolling hardware-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `input`: Key tracking and per-tick input snapshots
//! - `tuning`: Data-driven level balance
//! - `highscores`: Top-10 leaderboard with JSON persistence
//! - `settings`: Player preferences

pub mod highscores;
pub mod input;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::{HighScores, ScoreRecord};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate: one tick per rendered frame at 60 Hz
    pub const TICK_HZ: u64 = 60;

    /// Playfield dimensions (origin top-left, y grows downward)
    pub const GAME_WIDTH: f32 = 800.0;
    pub const GAME_HEIGHT: f32 = 600.0;
    /// Y coordinate of the ground line (player feet rest here)
    pub const GROUND_Y: f32 = GAME_HEIGHT - 50.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    pub const PLAYER_INITIAL_X: f32 = 50.0;
    /// Horizontal displacement per tick while a direction key is held
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Vertical velocity applied on jump (negative = up)
    pub const JUMP_STRENGTH: f32 = -18.0;
    /// Per-tick downward acceleration
    pub const GRAVITY: f32 = 0.8;

    /// Lives and progression
    pub const INITIAL_LIVES: u8 = 3;
    pub const TOTAL_LEVELS: u32 = 12;
    /// Level-up threshold: score >= level * LEVEL_SCORE_TARGET
    pub const LEVEL_SCORE_TARGET: u64 = 1000;

    /// Power-up defaults
    pub const POWERUP_WIDTH: f32 = 40.0;
    pub const POWERUP_HEIGHT: f32 = 40.0;
    /// Leftward displacement per tick (power-ups ignore level speed)
    pub const POWERUP_SPEED: f32 = 3.0;
    /// Per-tick spawn probability of a shield pickup
    pub const SHIELD_SPAWN_CHANCE: f64 = 0.001;
    /// Per-tick spawn probability of a life pickup (rarer, gated on lost lives)
    pub const LIFE_SPAWN_CHANCE: f64 = 0.0005;
    /// Shield buff duration in milliseconds
    pub const SHIELD_DURATION_MS: u64 = 5000;

    /// Particles per explosion burst
    pub const EXPLOSION_PARTICLES: usize = 20;
    /// Opacity lost per tick; a particle dies at opacity <= 0
    pub const PARTICLE_FADE: f32 = 0.02;
    /// Bounded particle buffer; the oldest particle is dropped at the cap
    pub const MAX_PARTICLES: usize = 256;

    /// Total answer attempts per math challenge
    pub const MATH_MAX_ATTEMPTS: u8 = 3;

    /// Explosion colors (0xRRGGBB)
    pub const COLOR_DAMAGE: u32 = 0xef4444;
    pub const COLOR_SHIELD_BLOCK: u32 = 0x3b82f6;
    pub const COLOR_EXTRA_LIFE: u32 = 0xf472b6;
}
