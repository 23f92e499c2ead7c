use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trackable OSRS skills, plus the overall total.
///
/// Variant order matches the hiscores feed's line order; `Skill::ALL`
/// relies on it when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Skill {
    Overall,
    Attack,
    Defence,
    Strength,
    Hitpoints,
    Ranged,
    Prayer,
    Magic,
    Cooking,
    Woodcutting,
    Fletching,
    Fishing,
    Firemaking,
    Crafting,
    Smithing,
    Mining,
    Herblore,
    Agility,
    Thieving,
    Slayer,
    Farming,
    Runecrafting,
    Hunter,
    Construction,
}

impl Skill {
    /// Every skill in hiscores feed order.
    pub const ALL: [Skill; 24] = [
        Skill::Overall,
        Skill::Attack,
        Skill::Defence,
        Skill::Strength,
        Skill::Hitpoints,
        Skill::Ranged,
        Skill::Prayer,
        Skill::Magic,
        Skill::Cooking,
        Skill::Woodcutting,
        Skill::Fletching,
        Skill::Fishing,
        Skill::Firemaking,
        Skill::Crafting,
        Skill::Smithing,
        Skill::Mining,
        Skill::Herblore,
        Skill::Agility,
        Skill::Thieving,
        Skill::Slayer,
        Skill::Farming,
        Skill::Runecrafting,
        Skill::Hunter,
        Skill::Construction,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Skill::Overall => "overall",
            Skill::Attack => "attack",
            Skill::Defence => "defence",
            Skill::Strength => "strength",
            Skill::Hitpoints => "hitpoints",
            Skill::Ranged => "ranged",
            Skill::Prayer => "prayer",
            Skill::Magic => "magic",
            Skill::Cooking => "cooking",
            Skill::Woodcutting => "woodcutting",
            Skill::Fletching => "fletching",
            Skill::Fishing => "fishing",
            Skill::Firemaking => "firemaking",
            Skill::Crafting => "crafting",
            Skill::Smithing => "smithing",
            Skill::Mining => "mining",
            Skill::Herblore => "herblore",
            Skill::Agility => "agility",
            Skill::Thieving => "thieving",
            Skill::Slayer => "slayer",
            Skill::Farming => "farming",
            Skill::Runecrafting => "runecrafting",
            Skill::Hunter => "hunter",
            Skill::Construction => "construction",
        }
    }

    /// Display name with the in-game capitalization.
    #[must_use]
    pub fn display_name(self) -> String {
        let raw = self.as_str();
        let mut chars = raw.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Skill {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Skill::ALL
            .iter()
            .copied()
            .find(|skill| skill.as_str() == lower)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_order_starts_with_overall_and_ends_with_construction() {
        assert_eq!(Skill::ALL[0], Skill::Overall);
        assert_eq!(Skill::ALL[23], Skill::Construction);
        assert_eq!(Skill::ALL.len(), 24);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Runecrafting".parse::<Skill>(), Ok(Skill::Runecrafting));
        assert_eq!("slayer".parse::<Skill>(), Ok(Skill::Slayer));
        assert!("sailing".parse::<Skill>().is_err());
    }

    #[test]
    fn display_name_capitalizes() {
        assert_eq!(Skill::Hitpoints.display_name(), "Hitpoints");
        assert_eq!(Skill::Overall.to_string(), "overall");
    }
}
