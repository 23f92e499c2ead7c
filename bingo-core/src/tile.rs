use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::skill::Skill;

/// 1-based grid slot identifier; doubles as the key of the tile map and
/// the element type of the order permutation.
pub type TileId = u32;

/// Unit attached to a numeric target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Drops,
    Xp,
}

impl Unit {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Unit::Drops => "drops",
            Unit::Xp => "xp",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drops" => Ok(Unit::Drops),
            "xp" => Ok(Unit::Xp),
            _ => Err(()),
        }
    }
}

/// Variant-specific tile payload.
///
/// A skill tile always carries its level pair, so a stored board can never
/// hold a skill goal without a `goal_level`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum TileKind {
    Custom,
    Wiki,
    Skill {
        skill: Skill,
        current_level: u32,
        goal_level: u32,
    },
}

impl TileKind {
    #[must_use]
    pub const fn mode_str(&self) -> &'static str {
        match self {
            TileKind::Custom => "custom",
            TileKind::Wiki => "wiki",
            TileKind::Skill { .. } => "skill",
        }
    }
}

/// One grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub content: String,
    pub target: u64,
    pub unit: Unit,
    pub progress: u64,
    pub completed: bool,
    pub image_url: Option<String>,
    #[serde(flatten)]
    pub kind: TileKind,
}

impl Tile {
    /// Placeholder for a slot the user never edited: freeform text showing
    /// the slot number, no target, not completed.
    #[must_use]
    pub fn placeholder(id: TileId) -> Self {
        Tile {
            content: id.to_string(),
            target: 0,
            unit: Unit::default(),
            progress: 0,
            completed: false,
            image_url: None,
            kind: TileKind::Custom,
        }
    }

    /// Set the numeric target, re-clamping progress into `[0, target]`.
    pub fn set_target(&mut self, target: u64) {
        self.target = target;
        self.progress = self.progress.min(target);
    }

    /// Set progress, clamped into `[0, target]`.
    pub fn set_progress(&mut self, progress: u64) {
        self.progress = progress.min(self.target);
    }

    /// Whether this tile counts as done. Skill tiles derive completion
    /// from the level pair; the stored flag is authoritative otherwise.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        match &self.kind {
            TileKind::Skill {
                current_level,
                goal_level,
                ..
            } => current_level >= goal_level,
            TileKind::Custom | TileKind::Wiki => self.completed,
        }
    }
}

/// Compact display formatting for progress counters: `950`, `12.5k`, `1m`.
#[must_use]
pub fn format_quantity(value: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    if value >= 1_000_000 {
        if value % 1_000_000 == 0 {
            format!("{}m", value / 1_000_000)
        } else {
            format!("{:.1}m", value as f64 / 1_000_000.0)
        }
    } else if value >= 1_000 {
        if value % 1_000 == 0 {
            format!("{}k", value / 1_000)
        } else {
            format!("{:.1}k", value as f64 / 1_000.0)
        }
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_shows_slot_number() {
        let tile = Tile::placeholder(7);
        assert_eq!(tile.content, "7");
        assert_eq!(tile.kind, TileKind::Custom);
        assert!(!tile.is_complete());
    }

    #[test]
    fn progress_clamps_to_target() {
        let mut tile = Tile::placeholder(1);
        tile.set_target(50);
        tile.set_progress(80);
        assert_eq!(tile.progress, 50);
        tile.set_target(10);
        assert_eq!(tile.progress, 10);
    }

    #[test]
    fn skill_completion_is_derived_from_levels() {
        let mut tile = Tile::placeholder(1);
        tile.kind = TileKind::Skill {
            skill: Skill::Agility,
            current_level: 70,
            goal_level: 80,
        };
        assert!(!tile.is_complete());
        tile.kind = TileKind::Skill {
            skill: Skill::Agility,
            current_level: 80,
            goal_level: 80,
        };
        assert!(tile.is_complete());
    }

    #[test]
    fn wiki_completion_is_the_stored_flag() {
        let mut tile = Tile::placeholder(1);
        tile.kind = TileKind::Wiki;
        tile.completed = true;
        assert!(tile.is_complete());
    }

    #[test]
    fn quantities_render_with_suffixes() {
        assert_eq!(format_quantity(950), "950");
        assert_eq!(format_quantity(1_000), "1k");
        assert_eq!(format_quantity(12_500), "12.5k");
        assert_eq!(format_quantity(1_000_000), "1m");
        assert_eq!(format_quantity(2_300_000), "2.3m");
    }

    #[test]
    fn tile_json_carries_a_mode_tag() {
        let mut tile = Tile::placeholder(3);
        tile.kind = TileKind::Skill {
            skill: Skill::Slayer,
            current_level: 1,
            goal_level: 90,
        };
        let json = serde_json::to_value(&tile).unwrap();
        assert_eq!(json["mode"], "skill");
        assert_eq!(json["skill"], "slayer");
        let back: Tile = serde_json::from_value(json).unwrap();
        assert_eq!(back, tile);
    }
}
