//! Parsed snapshot of the external hiscores feed.
//!
//! The feed is plain text: one `rank,level,xp` triple per line, the first
//! 24 lines covering `Skill::ALL` in order. Unranked accounts report `-1`
//! in every field.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::BoardError;
use crate::levels::xp_to_level;
use crate::skill::Skill;

const SENTINEL: i64 = -1;

/// One hiscores line for a single skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub rank: i64,
    pub level: i32,
    pub xp: i64,
}

impl SkillEntry {
    #[must_use]
    pub const fn is_unranked(&self) -> bool {
        self.rank == SENTINEL && self.level == SENTINEL as i32 && self.xp == SENTINEL
    }
}

/// Cached per-skill experience totals for a named account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PlayerStats {
    pub username: String,
    entries: BTreeMap<Skill, SkillEntry>,
}

impl PlayerStats {
    /// Parse the raw hiscores payload for `username`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidExternalAccount`] when the payload has
    /// fewer than 24 skill lines or a line is not a `rank,level,xp` triple;
    /// the upstream service answers lookups of unknown names that way.
    pub fn parse(username: &str, raw: &str) -> Result<Self, BoardError> {
        let mut entries = BTreeMap::new();
        let mut lines = raw.lines();
        for skill in Skill::ALL {
            let line = lines.next().ok_or(BoardError::InvalidExternalAccount)?;
            entries.insert(skill, parse_line(line)?);
        }
        Ok(Self {
            username: username.trim().to_string(),
            entries,
        })
    }

    /// True when every field of every entry is the `-1` sentinel, which
    /// the provider uses for accounts it does not know.
    #[must_use]
    pub fn is_unranked(&self) -> bool {
        !self.entries.is_empty() && self.entries.values().all(SkillEntry::is_unranked)
    }

    #[must_use]
    pub fn entry(&self, skill: Skill) -> Option<SkillEntry> {
        self.entries.get(&skill).copied()
    }

    /// Experience total for `skill`, treating sentinel values as zero.
    #[must_use]
    pub fn xp(&self, skill: Skill) -> u64 {
        self.entry(skill)
            .map_or(0, |entry| u64::try_from(entry.xp).unwrap_or(0))
    }

    /// Level for `skill` derived from stored XP; the feed's own level
    /// column is ignored so stale or sentinel levels never leak through.
    #[must_use]
    pub fn level(&self, skill: Skill) -> u32 {
        xp_to_level(self.xp(skill))
    }
}

fn parse_line(line: &str) -> Result<SkillEntry, BoardError> {
    let mut fields = line.trim().split(',');
    let rank = next_number(&mut fields)?;
    let level = next_number(&mut fields)?;
    let xp = next_number(&mut fields)?;
    Ok(SkillEntry {
        rank,
        level: i32::try_from(level).map_err(|_| BoardError::InvalidExternalAccount)?,
        xp,
    })
}

fn next_number<'a, I>(fields: &mut I) -> Result<i64, BoardError>
where
    I: Iterator<Item = &'a str>,
{
    fields
        .next()
        .and_then(|field| field.trim().parse::<i64>().ok())
        .ok_or(BoardError::InvalidExternalAccount)
}
