//! Math challenge engine
//!
//! Entered after a damaging hit that leaves lives remaining. A leveled
//! arithmetic problem is posed with three attempts total; answering
//! correctly refunds one life (up to the cap). Every wrong answer with
//! attempts remaining regenerates a fresh problem.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Challenge, GamePhase, GameState};
use crate::consts::{INITIAL_LIVES, MATH_MAX_ATTEMPTS};

/// One posed arithmetic problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathProblem {
    pub question: String,
    pub answer: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MathOperation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

/// Result of grading one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Answer matched; one life refunded, back to Playing
    Correct,
    /// Wrong, attempts remain; a fresh problem has been posed
    Retry,
    /// Third wrong answer; back to Playing with no bonus
    Exhausted,
}

/// Generate a problem scaled to the given level.
///
/// Division only enters the rotation from level 4. Subtraction draws the
/// subtrahend below the minuend so the result is never negative; division
/// builds the dividend from quotient and divisor so it always divides
/// evenly.
pub fn generate_problem(level: u32, rng: &mut Pcg32) -> MathProblem {
    const BASE_OPS: [MathOperation; 3] = [
        MathOperation::Addition,
        MathOperation::Subtraction,
        MathOperation::Multiplication,
    ];
    const ALL_OPS: [MathOperation; 4] = [
        MathOperation::Addition,
        MathOperation::Subtraction,
        MathOperation::Multiplication,
        MathOperation::Division,
    ];
    let ops: &[MathOperation] = if level >= 4 { &ALL_OPS } else { &BASE_OPS };
    let op = ops[rng.random_range(0..ops.len())];

    match op {
        MathOperation::Addition => {
            let range = 10 * level as i64;
            let a = rng.random_range(1..=range);
            let b = rng.random_range(1..=range);
            MathProblem { question: format!("{a} + {b} = ?"), answer: a + b }
        }
        MathOperation::Subtraction => {
            let range = 10 * level as i64;
            let a = rng.random_range(1..=range);
            let b = rng.random_range(1..=a);
            MathProblem { question: format!("{a} - {b} = ?"), answer: a - b }
        }
        MathOperation::Multiplication => {
            let cap = if level > 5 { 12 } else { 10 };
            let a = rng.random_range(1..=cap);
            let b = rng.random_range(1..=cap);
            MathProblem { question: format!("{a} × {b} = ?"), answer: a * b }
        }
        MathOperation::Division => {
            let quotient = rng.random_range(2..=11);
            let divisor = rng.random_range(2..=11);
            let dividend = quotient * divisor;
            MathProblem { question: format!("{dividend} ÷ {divisor} = ?"), answer: quotient }
        }
    }
}

/// Open a challenge: pose a fresh problem and leave Playing.
pub(crate) fn begin_challenge(state: &mut GameState) {
    let problem = generate_problem(state.level, &mut state.rng);
    state.challenge = Some(Challenge { problem, attempts: 0 });
    state.set_phase(GamePhase::MathChallenge);
}

/// Grade one submission. Returns `None` outside the MathChallenge phase.
///
/// Non-numeric input counts as an incorrect answer and consumes an attempt.
pub fn submit_answer(state: &mut GameState, raw: &str) -> Option<AnswerOutcome> {
    if state.phase != GamePhase::MathChallenge {
        return None;
    }
    let (answer, attempts) = {
        let challenge = state.challenge.as_ref()?;
        (challenge.problem.answer, challenge.attempts)
    };

    let correct = raw.trim().parse::<i64>().map(|v| v == answer).unwrap_or(false);
    if correct {
        state.lives = (state.lives + 1).min(INITIAL_LIVES);
        state.challenge = None;
        state.set_phase(GamePhase::Playing);
        return Some(AnswerOutcome::Correct);
    }

    if attempts + 1 >= MATH_MAX_ATTEMPTS {
        state.challenge = None;
        state.set_phase(GamePhase::Playing);
        return Some(AnswerOutcome::Exhausted);
    }

    // Wrong with attempts remaining: never reuse the missed problem.
    let problem = generate_problem(state.level, &mut state.rng);
    state.challenge = Some(Challenge { problem, attempts: attempts + 1 });
    Some(AnswerOutcome::Retry)
}
