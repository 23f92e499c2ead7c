//! OSRS experience curve.
//!
//! Cumulative XP thresholds follow the live game's formula: each level
//! contributes `floor(level + 300 * 2^(level / 7))` points and the running
//! point total divided by four is the XP required for the next level.

/// Highest attainable skill level.
pub const MAX_LEVEL: u32 = 99;

/// XP required for level 99.
pub const MAX_LEVEL_XP: u64 = 13_034_431;

/// Convert an experience total into a skill level, capped at 99.
///
/// Total for all non-negative inputs; `xp_to_level(0)` is level 1.
#[must_use]
pub fn xp_to_level(xp: u64) -> u32 {
    let mut points: u64 = 0;
    for level in 1..=MAX_LEVEL {
        points += level_points(level);
        if points / 4 > xp {
            return level;
        }
    }
    MAX_LEVEL
}

/// XP threshold a player must reach to hold `level`.
///
/// Levels at or below 1 need no XP; values above 99 clamp to the
/// level-99 threshold.
#[must_use]
pub fn xp_for_level(level: u32) -> u64 {
    let level = level.min(MAX_LEVEL);
    let mut points: u64 = 0;
    for lvl in 1..level {
        points += level_points(lvl);
    }
    points / 4
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn level_points(level: u32) -> u64 {
    let exact = f64::from(level) + 300.0 * 2.0_f64.powf(f64::from(level) / 7.0);
    exact.floor() as u64
}
