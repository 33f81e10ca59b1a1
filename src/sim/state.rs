//! Game state and core simulation types
//!
//! Everything the simulation owns lives here: the player, entity
//! collections, score/lives/level counters, the seeded RNG, and the phase
//! machine. Mutation happens only through `tick` and the explicit
//! operations below (`start`, `acknowledge_end`, answer submission); the
//! renderer reads the state as a shared borrow between ticks.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::challenge::MathProblem;
use super::collision::Aabb;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen with the leaderboard
    Menu,
    /// Active gameplay; the only phase in which the simulation advances
    Playing,
    /// Frozen mid-round; timers and physics hold still
    Paused,
    /// A damaging hit left lives remaining; an arithmetic problem is posed
    MathChallenge,
    /// Run ended with zero lives
    GameOver,
    /// Final level target reached
    GameWon,
}

/// Horizontal facing, tracked for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

/// Obsolete-hardware enemy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    Pc,
    Hdd,
    Ram,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Pc, EnemyKind::Hdd, EnemyKind::Ram];

    /// Bounding-box size (width, height) for this variant
    pub fn size(&self) -> (f32, f32) {
        match self {
            EnemyKind::Pc => (70.0, 70.0),
            EnemyKind::Hdd => (50.0, 30.0),
            EnemyKind::Ram => (80.0, 20.0),
        }
    }
}

/// An enemy entity scrolling in from the right edge
#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Flips true once when the enemy has passed the player; dodge points
    /// are awarded on that transition and never again.
    pub scored: bool,
}

impl Enemy {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.width, self.height)
    }
}

/// Power-up variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    Shield,
    Life,
}

/// A collectible pickup drifting in from the right edge
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub id: u32,
    pub kind: PowerUpKind,
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl PowerUp {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.width, self.height)
    }
}

/// A short-lived explosion particle. Purely visual: never collides, never
/// affects scoring or entity state.
#[derive(Debug, Clone)]
pub struct Particle {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub opacity: f32,
    /// 0xRRGGBB
    pub color: u32,
}

/// The player character
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    /// Per-tick displacement
    pub vel: Vec2,
    pub facing: Facing,
    /// Airborne flag; jumps are only honored while grounded
    pub jumping: bool,
    /// Temporary invulnerability from a shield pickup
    pub shielded: bool,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAYER_INITIAL_X, GROUND_Y - PLAYER_HEIGHT),
            vel: Vec2::ZERO,
            facing: Facing::Right,
            jumping: false,
            shielded: false,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Notifications emitted across the driver boundary (audio cues, UI
/// feedback). The simulation never depends on their consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The background music loop should start
    EnteredPlaying,
    /// The background music loop should stop
    LeftPlaying,
    LifeLost { remaining: u8 },
    PowerUpCollected(PowerUpKind),
    LevelUp(u32),
    GameOver { score: u64 },
    GameWon { score: u64 },
}

/// An in-flight math challenge; at most one exists at a time
#[derive(Debug, Clone)]
pub struct Challenge {
    pub problem: MathProblem,
    /// Attempts consumed so far (out of MATH_MAX_ATTEMPTS)
    pub attempts: u8,
}

/// Complete game state, advanced one tick per rendered frame
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Single RNG behind every probabilistic branch
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u8,
    pub level: u32,
    /// Tick counter; advances only while Playing, so every deadline stored
    /// in ticks freezes across a pause
    pub time_ticks: u64,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub power_ups: Vec<PowerUp>,
    pub particles: Vec<Particle>,
    /// Tick of the most recent enemy spawn
    pub last_enemy_spawn_tick: u64,
    /// Shield expiry deadline; meaningful only while `player.shielded`
    pub shield_expires_tick: u64,
    pub challenge: Option<Challenge>,
    events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a fresh state at the menu with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            score: 0,
            lives: INITIAL_LIVES,
            level: 1,
            time_ticks: 0,
            player: Player::new(),
            enemies: Vec::new(),
            power_ups: Vec::new(),
            particles: Vec::new(),
            last_enemy_spawn_tick: 0,
            shield_expires_tick: 0,
            challenge: None,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub(crate) fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Start (or restart) a round: reset score, lives, level, player and
    /// entities to initial values and enter Playing.
    pub fn start(&mut self) {
        self.score = 0;
        self.lives = INITIAL_LIVES;
        self.level = 1;
        self.player = Player::new();
        self.enemies.clear();
        self.power_ups.clear();
        self.particles.clear();
        self.challenge = None;
        self.last_enemy_spawn_tick = self.time_ticks;
        self.shield_expires_tick = 0;
        log::info!("round started (seed {})", self.seed);
        self.set_phase(GamePhase::Playing);
    }

    /// Dismiss a terminal screen and return to the menu.
    pub fn acknowledge_end(&mut self) {
        if matches!(self.phase, GamePhase::GameOver | GamePhase::GameWon) {
            self.set_phase(GamePhase::Menu);
        }
    }

    /// Transition phases, emitting audio-boundary events when crossing the
    /// Playing boundary in either direction.
    pub(crate) fn set_phase(&mut self, next: GamePhase) {
        if self.phase == next {
            return;
        }
        if self.phase == GamePhase::Playing && next != GamePhase::Playing {
            self.events.push(GameEvent::LeftPlaying);
        } else if self.phase != GamePhase::Playing && next == GamePhase::Playing {
            self.events.push(GameEvent::EnteredPlaying);
        }
        log::debug!("phase {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take the buffered boundary events, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_at_menu() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.lives, INITIAL_LIVES);
        assert_eq!(state.level, 1);
        assert_eq!(state.score, 0);
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_start_resets_round_state() {
        let mut state = GameState::new(7);
        state.score = 4200;
        state.lives = 1;
        state.level = 9;
        state.player.shielded = true;
        state.player.pos = Vec2::new(300.0, 100.0);
        let id = state.next_entity_id();
        state.enemies.push(Enemy {
            id,
            kind: EnemyKind::Pc,
            pos: Vec2::new(400.0, 480.0),
            width: 70.0,
            height: 70.0,
            scored: true,
        });

        state.start();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, INITIAL_LIVES);
        assert_eq!(state.level, 1);
        assert!(!state.player.shielded);
        assert_eq!(state.player.pos, Vec2::new(PLAYER_INITIAL_X, GROUND_Y - PLAYER_HEIGHT));
        assert!(state.enemies.is_empty());
        assert_eq!(state.drain_events(), vec![GameEvent::EnteredPlaying]);
    }

    #[test]
    fn test_acknowledge_end_returns_to_menu() {
        let mut state = GameState::new(7);
        state.start();
        state.set_phase(GamePhase::GameOver);
        state.acknowledge_end();
        assert_eq!(state.phase, GamePhase::Menu);

        // A no-op outside terminal phases
        state.start();
        state.acknowledge_end();
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_playing_boundary_events() {
        let mut state = GameState::new(7);
        state.start();
        state.set_phase(GamePhase::MathChallenge);
        state.set_phase(GamePhase::Playing);
        state.set_phase(GamePhase::GameWon);
        assert_eq!(
            state.drain_events(),
            vec![
                GameEvent::EnteredPlaying,
                GameEvent::LeftPlaying,
                GameEvent::EnteredPlaying,
                GameEvent::LeftPlaying,
            ]
        );
        // Drained: the buffer is now empty
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_entity_ids_are_unique() {
        let mut state = GameState::new(7);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert_ne!(a, b);
    }
}
