//! Techno Runner headless driver
//!
//! Runs the deterministic simulation without a renderer: a small autoplayer
//! holds Right and jumps over approaching hardware, math challenges are
//! answered from the posed problem, and drained events are logged the way a
//! frontend would react to them. Useful for soak-testing balance changes and
//! reproducing bugs from a seed.
//!
//! Usage: techno-runner [seed] [max_ticks]

use std::path::PathBuf;

use techno_runner::consts::*;
use techno_runner::input::{InputTracker, Key};
use techno_runner::sim::{GameEvent, GamePhase, GameState, submit_answer, tick};
use techno_runner::{HighScores, Settings};

const SETTINGS_FILE: &str = "techno-runner-settings.json";
const SCORES_FILE: &str = "techno-runner-scores.json";

/// How far ahead (in pixels) an enemy triggers an autoplayer jump
const JUMP_LOOKAHEAD: f32 = 140.0;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| std::time::UNIX_EPOCH.elapsed().map(|d| d.as_millis() as u64).unwrap_or(1));
    let max_ticks: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(60 * 60 * TICK_HZ);

    let settings_path = PathBuf::from(SETTINGS_FILE);
    let scores_path = PathBuf::from(SCORES_FILE);
    let settings = Settings::load_from(&settings_path);
    let mut high_scores = HighScores::load_from(&scores_path);

    log::info!("Techno Runner starting (seed {seed}, up to {max_ticks} ticks)");

    let mut state = GameState::new(seed);
    let mut tracker = InputTracker::new();
    state.start();

    let mut ticks_run: u64 = 0;
    while ticks_run < max_ticks {
        drive_autoplayer(&state, &mut tracker);
        let input = tracker.tick_input();
        tick(&mut state, &input);
        ticks_run += 1;

        for event in state.drain_events() {
            react_to_event(&event, &settings);
        }

        match state.phase {
            GamePhase::MathChallenge => answer_challenge(&mut state),
            GamePhase::GameOver | GamePhase::GameWon => break,
            _ => {}
        }
    }

    if matches!(state.phase, GamePhase::GameOver | GamePhase::GameWon) {
        state.acknowledge_end();
    } else {
        log::info!("tick budget exhausted at level {} with {} lives", state.level, state.lives);
    }

    log::info!(
        "run finished: score {} at level {} after {} sim ticks",
        state.score,
        state.level,
        state.time_ticks
    );

    if let Some(rank) = high_scores.add_score("AUTO", state.score) {
        log::info!("new high score: rank {rank}");
        if let Err(err) = high_scores.save_to(&scores_path) {
            log::error!("could not save high scores: {err}");
        }
    }
    if !settings_path.exists() {
        if let Err(err) = settings.save_to(&settings_path) {
            log::error!("could not save settings: {err}");
        }
    }

    println!("Final score: {} (level {})", state.score, state.level);
    for (i, entry) in high_scores.entries.iter().enumerate() {
        println!("{:>2}. {:<12} {}", i + 1, entry.name, entry.score);
    }
}

/// Hold Right and jump when the nearest enemy ahead gets close.
fn drive_autoplayer(state: &GameState, tracker: &mut InputTracker) {
    tracker.key_down(Key::Right);

    let player_front = state.player.pos.x + PLAYER_WIDTH;
    let threat = state
        .enemies
        .iter()
        .filter(|e| e.pos.x + e.width > player_front)
        .map(|e| e.pos.x - player_front)
        .fold(f32::INFINITY, f32::min);

    if threat < JUMP_LOOKAHEAD && !state.player.jumping {
        tracker.key_down(Key::Jump);
    } else {
        tracker.key_up(Key::Jump);
    }
}

/// Answer the posed problem from the state itself. The autoplayer always
/// gets it right, exercising the life-refund path.
fn answer_challenge(state: &mut GameState) {
    if let Some(answer) = state.challenge.as_ref().map(|c| c.problem.answer) {
        let question = state.challenge.as_ref().map(|c| c.problem.question.clone());
        log::info!("challenge: {} -> {answer}", question.unwrap_or_default());
        submit_answer(state, &answer.to_string());
    }
}

/// Log events the way a frontend would drive audio and UI from them.
fn react_to_event(event: &GameEvent, settings: &Settings) {
    match event {
        GameEvent::EnteredPlaying => {
            if settings.effective_music_volume() > 0.0 {
                log::debug!("music on at volume {:.2}", settings.effective_music_volume());
            }
        }
        GameEvent::LeftPlaying => log::debug!("music off"),
        GameEvent::LifeLost { remaining } => log::info!("hit! {remaining} lives left"),
        GameEvent::PowerUpCollected(kind) => log::info!("collected power-up: {kind:?}"),
        GameEvent::LevelUp(level) => log::info!("level up -> {level}"),
        GameEvent::GameOver { score } => log::info!("game over with score {score}"),
        GameEvent::GameWon { score } => log::info!("all levels cleared! score {score}"),
    }
}
