//! Data-driven game balance
//!
//! Per-level constants for enemy speed, spawn cadence, and dodge scoring.
//! Levels are 1-based; lookups clamp to the configured range so a bad level
//! can never index out of the table.

use crate::consts::{TICK_HZ, TOTAL_LEVELS};

/// Balance constants for a single level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelTuning {
    /// Leftward enemy displacement per tick
    pub enemy_speed: f32,
    /// Minimum wall-clock gap between enemy spawns
    pub spawn_interval_ms: u64,
    /// Score awarded per successfully dodged enemy
    pub points_per_dodge: u64,
}

const LEVELS: [LevelTuning; TOTAL_LEVELS as usize] = [
    LevelTuning { enemy_speed: 4.0, spawn_interval_ms: 2000, points_per_dodge: 100 },
    LevelTuning { enemy_speed: 4.5, spawn_interval_ms: 1900, points_per_dodge: 120 },
    LevelTuning { enemy_speed: 5.0, spawn_interval_ms: 1800, points_per_dodge: 140 },
    LevelTuning { enemy_speed: 5.5, spawn_interval_ms: 1700, points_per_dodge: 160 },
    LevelTuning { enemy_speed: 6.0, spawn_interval_ms: 1600, points_per_dodge: 180 },
    LevelTuning { enemy_speed: 6.5, spawn_interval_ms: 1500, points_per_dodge: 200 },
    LevelTuning { enemy_speed: 7.0, spawn_interval_ms: 1400, points_per_dodge: 220 },
    LevelTuning { enemy_speed: 7.5, spawn_interval_ms: 1300, points_per_dodge: 240 },
    LevelTuning { enemy_speed: 8.0, spawn_interval_ms: 1200, points_per_dodge: 260 },
    LevelTuning { enemy_speed: 8.5, spawn_interval_ms: 1100, points_per_dodge: 280 },
    LevelTuning { enemy_speed: 9.0, spawn_interval_ms: 1000, points_per_dodge: 300 },
    LevelTuning { enemy_speed: 10.0, spawn_interval_ms: 900, points_per_dodge: 350 },
];

/// Look up the balance constants for a level (1-based). Out-of-range levels
/// clamp to the nearest configured entry.
pub fn level_tuning(level: u32) -> &'static LevelTuning {
    let idx = level.clamp(1, TOTAL_LEVELS) as usize - 1;
    &LEVELS[idx]
}

/// Convert a wall-clock duration to simulation ticks at the fixed rate.
pub fn ms_to_ticks(ms: u64) -> u64 {
    ms * TICK_HZ / 1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_ramps_monotonically() {
        for level in 2..=TOTAL_LEVELS {
            let prev = level_tuning(level - 1);
            let cur = level_tuning(level);
            assert!(cur.enemy_speed > prev.enemy_speed);
            assert!(cur.spawn_interval_ms < prev.spawn_interval_ms);
            assert!(cur.points_per_dodge > prev.points_per_dodge);
        }
    }

    #[test]
    fn test_lookup_clamps_out_of_range() {
        assert_eq!(level_tuning(0), level_tuning(1));
        assert_eq!(level_tuning(TOTAL_LEVELS + 5), level_tuning(TOTAL_LEVELS));
    }

    #[test]
    fn test_ms_to_ticks() {
        assert_eq!(ms_to_ticks(1000), TICK_HZ);
        assert_eq!(ms_to_ticks(2000), 120);
        assert_eq!(ms_to_ticks(5000), 300);
    }
}
