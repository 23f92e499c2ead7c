//! Request/response bodies of the persistence service.
//!
//! Field names follow the service's JSON (`imageUrl`, `osrsUsername`,
//! `goalLevel`). On the wire a tile is a flat record with a `mode` string;
//! conversion to the [`Tile`] sum type rejects impossible records, so a
//! skill tile can never reach the engine without its level pair.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::board::{BoardState, MAX_DIMENSION};
use crate::error::BoardError;
use crate::hiscores::PlayerStats;
use crate::skill::Skill;
use crate::tile::{Tile, TileId, TileKind, Unit};

pub const MAX_NAME_LEN: usize = 64;

/// Flat wire form of one tile, ordered by `position` within a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileRecord {
    pub position: u32,
    pub mode: String,
    pub content: String,
    #[serde(default)]
    pub target: u64,
    #[serde(default)]
    pub unit: Unit,
    #[serde(default)]
    pub progress: u64,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill: Option<Skill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_level: Option<u32>,
}

impl TileRecord {
    #[must_use]
    pub fn from_tile(position: u32, tile: &Tile) -> Self {
        let (skill, current_level, goal_level) = match &tile.kind {
            TileKind::Skill {
                skill,
                current_level,
                goal_level,
            } => (Some(*skill), Some(*current_level), Some(*goal_level)),
            TileKind::Custom | TileKind::Wiki => (None, None, None),
        };
        TileRecord {
            position,
            mode: tile.kind.mode_str().to_string(),
            content: tile.content.clone(),
            target: tile.target,
            unit: tile.unit,
            progress: tile.progress,
            completed: tile.is_complete(),
            image_url: tile.image_url.clone(),
            skill,
            current_level,
            goal_level,
        }
    }

    /// Convert back into the typed tile model.
    ///
    /// # Errors
    ///
    /// `Validation` for an unknown mode or a skill record missing its
    /// skill or goal level.
    pub fn to_tile(&self) -> Result<Tile, BoardError> {
        let kind = match self.mode.as_str() {
            "custom" => TileKind::Custom,
            "wiki" => TileKind::Wiki,
            "skill" => {
                let skill = self.skill.ok_or_else(|| {
                    BoardError::validation(format!(
                        "skill tile at position {} has no skill",
                        self.position
                    ))
                })?;
                let goal_level = self.goal_level.ok_or_else(|| {
                    BoardError::validation(format!(
                        "skill tile at position {} has no goal level",
                        self.position
                    ))
                })?;
                TileKind::Skill {
                    skill,
                    current_level: self.current_level.unwrap_or(1),
                    goal_level,
                }
            }
            other => {
                return Err(BoardError::validation(format!(
                    "unknown tile mode '{other}' at position {}",
                    self.position
                )));
            }
        };
        let mut tile = Tile {
            content: self.content.clone(),
            target: self.target,
            unit: self.unit,
            progress: 0,
            completed: self.completed,
            image_url: self.image_url.clone(),
            kind,
        };
        tile.set_progress(self.progress);
        Ok(tile)
    }
}

/// `POST /solo-board` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoardRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub title: String,
    pub rows: u32,
    pub columns: u32,
    pub tiles: Vec<TileRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osrs_username: Option<String>,
}

/// `PUT /solo-board/:name` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBoardRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub title: String,
    pub rows: u32,
    pub columns: u32,
    pub tiles: Vec<TileRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osrs_username: Option<String>,
}

/// `GET /solo-board/:name` response: the full board with its tiles in
/// position order and the cached player snapshot when one exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardRecord {
    pub name: String,
    pub title: String,
    pub rows: u32,
    pub columns: u32,
    pub tiles: Vec<TileRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<PlayerStats>,
}

impl BoardRecord {
    /// Tile map keyed by slot id (`position + 1`), for loading into the
    /// engine.
    ///
    /// # Errors
    ///
    /// `Validation` when a tile record cannot be converted.
    pub fn tile_map(&self) -> Result<BTreeMap<TileId, Tile>, BoardError> {
        let mut sorted = self.tiles.clone();
        sorted.sort_by_key(|record| record.position);
        let mut map = BTreeMap::new();
        for record in &sorted {
            map.insert(record.position + 1, record.to_tile()?);
        }
        Ok(map)
    }

    /// Load this record into a live board, clearing its history.
    ///
    /// # Errors
    ///
    /// `Validation` when a tile record cannot be converted.
    pub fn load_into(&self, board: &mut BoardState) -> Result<(), BoardError> {
        let tiles = self.tile_map()?;
        board.load(
            self.title.clone(),
            self.rows,
            self.columns,
            tiles,
            self.player.clone(),
        );
        Ok(())
    }
}

/// Success body of create and update: `{message, boardId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveOutcome {
    pub message: String,
    pub board_id: u64,
}

/// Error body of every failed request: `{error}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Serialize the live board into a create request.
#[must_use]
pub fn create_request(
    board: &BoardState,
    name: &str,
    password: &str,
    username: Option<&str>,
) -> CreateBoardRequest {
    CreateBoardRequest {
        name: name.trim().to_string(),
        password: non_empty(password),
        title: board.title.clone(),
        rows: board.rows(),
        columns: board.columns(),
        tiles: tile_records(board),
        osrs_username: username.and_then(non_empty_str),
    }
}

/// Serialize the live board into an update request for its current name.
#[must_use]
pub fn update_request(board: &BoardState, password: &str, username: Option<&str>) -> UpdateBoardRequest {
    UpdateBoardRequest {
        password: non_empty(password),
        title: board.title.clone(),
        rows: board.rows(),
        columns: board.columns(),
        tiles: tile_records(board),
        osrs_username: username.and_then(non_empty_str),
    }
}

/// Dense position-ordered records for the live board.
#[must_use]
pub fn tile_records(board: &BoardState) -> Vec<TileRecord> {
    board
        .tiles_in_order()
        .iter()
        .enumerate()
        .map(|(position, tile)| {
            TileRecord::from_tile(u32::try_from(position).unwrap_or(u32::MAX), tile)
        })
        .collect()
}

/// Shape checks shared by create and update.
///
/// # Errors
///
/// `Validation` describing the first violated rule.
pub fn validate_shape(name: &str, rows: u32, columns: u32, tiles: &[TileRecord]) -> Result<(), BoardError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(BoardError::validation("board name must not be empty"));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(BoardError::validation("board name is too long"));
    }
    if rows < 1 || columns < 1 {
        return Err(BoardError::validation("rows and columns must be at least 1"));
    }
    if rows > MAX_DIMENSION || columns > MAX_DIMENSION {
        return Err(BoardError::validation(format!(
            "rows and columns must be at most {MAX_DIMENSION}"
        )));
    }
    let expected = (rows * columns) as usize;
    if tiles.len() != expected {
        return Err(BoardError::validation(format!(
            "expected {expected} tiles for a {rows}x{columns} board, got {}",
            tiles.len()
        )));
    }
    Ok(())
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn non_empty_str(value: &str) -> Option<String> {
    non_empty(value)
}
