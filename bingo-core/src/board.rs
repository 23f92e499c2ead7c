use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::hiscores::PlayerStats;
use crate::history::{BoardSnapshot, History};
use crate::order::TileOrder;
use crate::tile::{Tile, TileId, TileKind};

pub const DEFAULT_ROWS: u32 = 5;
pub const DEFAULT_COLUMNS: u32 = 5;
/// Upper bound on rows and columns. Keeps `cell_count` far from `u32`
/// overflow no matter what the dimension inputs feed in.
pub const MAX_DIMENSION: u32 = 10;
pub const DEFAULT_TITLE: &str = "Bingo Board";

/// Live client-side board state: grid dimensions, sparse tile map, render
/// order, undo/redo history, and the cached hiscores snapshot.
///
/// Every mutating operation records a full-state snapshot *before*
/// applying itself, so `undo` always lands on the exact pre-action state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardState {
    pub title: String,
    rows: u32,
    columns: u32,
    tiles: BTreeMap<TileId, Tile>,
    order: TileOrder,
    #[serde(skip)]
    history: History,
    pub stats: Option<PlayerStats>,
}

impl Default for BoardState {
    fn default() -> Self {
        BoardState {
            title: DEFAULT_TITLE.to_string(),
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            tiles: BTreeMap::new(),
            order: TileOrder::identity(DEFAULT_ROWS * DEFAULT_COLUMNS),
            history: History::default(),
            stats: None,
        }
    }
}

impl BoardState {
    #[must_use]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    #[must_use]
    pub fn cell_count(&self) -> u32 {
        self.rows * self.columns
    }

    #[must_use]
    pub fn order(&self) -> &TileOrder {
        &self.order
    }

    /// Tile for a slot, falling back to the untouched-slot placeholder.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Tile {
        self.tiles
            .get(&id)
            .cloned()
            .unwrap_or_else(|| Tile::placeholder(id))
    }

    /// Dense, position-ordered tile list ready for persistence.
    /// Length always equals `rows * columns`.
    #[must_use]
    pub fn tiles_in_order(&self) -> Vec<Tile> {
        self.order.ids().iter().map(|&id| self.tile(id)).collect()
    }

    pub fn set_rows(&mut self, rows: u32) {
        let rows = rows.clamp(1, MAX_DIMENSION);
        if rows == self.rows {
            return;
        }
        self.record();
        self.rows = rows;
        self.order.resize(self.cell_count());
    }

    pub fn set_columns(&mut self, columns: u32) {
        let columns = columns.clamp(1, MAX_DIMENSION);
        if columns == self.columns {
            return;
        }
        self.record();
        self.columns = columns;
        self.order.resize(self.cell_count());
    }

    /// Drag-reorder: move `from` into the slot of `to` with array-move
    /// semantics. Recorded in history.
    pub fn move_tile(&mut self, from: TileId, to: TileId) {
        if from == to || self.order.index_of(from).is_none() || self.order.index_of(to).is_none() {
            return;
        }
        self.record();
        self.order.move_tile(from, to);
    }

    /// Commit an edited tile. Recorded in history.
    pub fn put_tile(&mut self, id: TileId, tile: Tile) {
        self.record();
        self.tiles.insert(id, tile);
    }

    pub fn undo(&mut self) {
        let current = self.snapshot();
        if let Some(snapshot) = self.history.undo(current) {
            self.restore(snapshot);
        }
    }

    pub fn redo(&mut self) {
        let current = self.snapshot();
        if let Some(snapshot) = self.history.redo(current) {
            self.restore(snapshot);
        }
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.undo_depth() > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.redo_depth() > 0
    }

    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.history.has_unsaved_changes()
    }

    /// Treat the current state as saved without touching the grid.
    pub fn mark_saved(&mut self) {
        self.history.clear();
    }

    /// Replace the whole state from a fetched board and clear history.
    ///
    /// `tiles` are keyed by slot id; an order that fails permutation
    /// validation (or a missing one) falls back to identity.
    pub fn load(
        &mut self,
        title: String,
        rows: u32,
        columns: u32,
        tiles: BTreeMap<TileId, Tile>,
        stats: Option<PlayerStats>,
    ) {
        let rows = rows.clamp(1, MAX_DIMENSION);
        let columns = columns.clamp(1, MAX_DIMENSION);
        self.title = title;
        self.rows = rows;
        self.columns = columns;
        self.tiles = tiles;
        self.order = TileOrder::identity(rows * columns);
        self.stats = stats;
        self.history.clear();
        if let Some(stats) = self.stats.clone() {
            self.refresh_levels(&stats);
        }
    }

    /// Cache a fresh hiscores snapshot and refresh every skill tile's
    /// current level from it. Not a history-recorded action: level
    /// refreshes are ambient data, not user edits.
    pub fn apply_stats(&mut self, stats: PlayerStats) {
        self.refresh_levels(&stats);
        self.stats = Some(stats);
    }

    fn refresh_levels(&mut self, stats: &PlayerStats) {
        for tile in self.tiles.values_mut() {
            if let TileKind::Skill {
                skill,
                current_level,
                ..
            } = &mut tile.kind
            {
                *current_level = stats.level(*skill);
            }
        }
    }

    fn record(&mut self) {
        let before = self.snapshot();
        self.history.record(before);
    }

    fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            rows: self.rows,
            columns: self.columns,
            tiles: self.tiles.clone(),
            order: self.order.clone(),
        }
    }

    fn restore(&mut self, snapshot: BoardSnapshot) {
        self.rows = snapshot.rows;
        self.columns = snapshot.columns;
        self.tiles = snapshot.tiles;
        self.order = snapshot.order;
    }
}
