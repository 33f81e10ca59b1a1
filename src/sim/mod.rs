//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per rendered frame
//! - Seeded RNG only; every probabilistic branch draws from the state's rng
//! - Timers stored as tick deadlines, never wall-clock callbacks
//! - No rendering or platform dependencies

pub mod challenge;
pub mod collision;
pub mod physics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use challenge::{AnswerOutcome, MathProblem, generate_problem, submit_answer};
pub use collision::Aabb;
pub use state::{
    Challenge, Enemy, EnemyKind, Facing, GameEvent, GamePhase, GameState, Particle, Player,
    PowerUp, PowerUpKind,
};
pub use tick::{TickInput, tick};
