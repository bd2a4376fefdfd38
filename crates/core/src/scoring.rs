//! Scoring module - classic line-clear table and level progression
//!
//! Points are awarded once per lock event, not per row. The level rises by
//! one for every multiple of [`POINTS_PER_LEVEL`] the score reaches, and
//! gravity speeds up by [`FALL_STEP_MS`] per level down to [`MIN_FALL_MS`].

use crate::types::{BASE_FALL_MS, FALL_STEP_MS, LINE_SCORES, MIN_FALL_MS, POINTS_PER_LEVEL};

/// Points for clearing `rows` rows in a single lock (1-4); 0 otherwise
pub fn line_clear_score(rows: usize) -> u32 {
    LINE_SCORES.get(rows).copied().unwrap_or(0)
}

/// Level reached from `level` with the given cumulative score.
///
/// Steps one level per threshold crossed, so a single clear that jumps two
/// thresholds raises the level by two.
pub fn advance_level(score: u32, mut level: u32) -> u32 {
    // A threshold past u32::MAX can never be reached.
    while let Some(threshold) = level.checked_mul(POINTS_PER_LEVEL) {
        if score < threshold {
            break;
        }
        level += 1;
    }
    level
}

/// Gravity interval for a level (1-based), in milliseconds
pub fn fall_interval_ms(level: u32) -> u32 {
    let reduction = level.saturating_sub(1).saturating_mul(FALL_STEP_MS);
    BASE_FALL_MS.saturating_sub(reduction).max(MIN_FALL_MS)
}
