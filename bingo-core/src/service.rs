//! Persistence-service semantics behind the sync protocol.
//!
//! The production service lives across HTTP; this module captures its
//! contract against pluggable storage and stats lookups so the rules are
//! testable without a server. Mirrors the error behavior the web client
//! maps from HTTP statuses.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::BoardError;
use crate::hiscores::PlayerStats;
use crate::password::{verify_optional, PasswordHash};
use crate::protocol::{
    validate_shape, BoardRecord, CreateBoardRequest, SaveOutcome, TileRecord, UpdateBoardRequest,
};

/// A board as persisted: dense tile set, password gate, cached player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredBoard {
    pub id: u64,
    pub name: String,
    pub title: String,
    pub rows: u32,
    pub columns: u32,
    pub tiles: Vec<TileRecord>,
    pub password: Option<PasswordHash>,
    pub player: Option<PlayerStats>,
}

impl StoredBoard {
    #[must_use]
    pub fn to_record(&self) -> BoardRecord {
        BoardRecord {
            name: self.name.clone(),
            title: self.title.clone(),
            rows: self.rows,
            columns: self.columns,
            tiles: self.tiles.clone(),
            player: self.player.clone(),
        }
    }
}

/// Keyed storage of boards by unique name.
pub trait BoardStore {
    fn get(&self, name: &str) -> Option<StoredBoard>;
    fn contains(&self, name: &str) -> bool;
    /// Insert or fully replace one board record in a single step.
    fn put(&mut self, board: StoredBoard);
    fn next_id(&mut self) -> u64;
}

/// In-memory reference store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    boards: HashMap<String, StoredBoard>,
    next_id: u64,
}

impl BoardStore for MemoryStore {
    fn get(&self, name: &str) -> Option<StoredBoard> {
        self.boards.get(name).cloned()
    }

    fn contains(&self, name: &str) -> bool {
        self.boards.contains_key(name)
    }

    fn put(&mut self, board: StoredBoard) {
        self.boards.insert(board.name.clone(), board);
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Username -> hiscores snapshot lookup.
pub trait StatsProvider {
    /// # Errors
    ///
    /// `InvalidExternalAccount` when the account is unknown or unranked,
    /// `Upstream` when the provider cannot be reached.
    fn lookup(&self, username: &str) -> Result<PlayerStats, BoardError>;
}

/// Board create / fetch / update semantics over pluggable storage.
pub struct BoardService<S, P>
where
    S: BoardStore,
    P: StatsProvider,
{
    store: S,
    stats: P,
}

impl<S, P> BoardService<S, P>
where
    S: BoardStore,
    P: StatsProvider,
{
    pub const fn new(store: S, stats: P) -> Self {
        Self { store, stats }
    }

    /// Create a new board under a unique name.
    ///
    /// The name check happens before any write, and a failed username
    /// lookup fails the whole operation; a partial board is never stored.
    ///
    /// # Errors
    ///
    /// `Conflict` if the name is taken, `Validation` for a malformed
    /// request, `InvalidExternalAccount`/`Upstream` from the stats lookup.
    pub fn create(&mut self, request: &CreateBoardRequest) -> Result<SaveOutcome, BoardError> {
        validate_shape(&request.name, request.rows, request.columns, &request.tiles)?;
        let name = request.name.trim().to_string();
        if self.store.contains(&name) {
            return Err(BoardError::Conflict);
        }
        let player = self.resolve_player(request.osrs_username.as_deref())?;
        let id = self.store.next_id();
        let board = StoredBoard {
            id,
            name,
            title: request.title.clone(),
            rows: request.rows,
            columns: request.columns,
            tiles: renumbered(&request.tiles),
            password: PasswordHash::create(request.password.as_deref()),
            player,
        };
        self.store.put(board);
        Ok(SaveOutcome {
            message: "Solo board created successfully".to_string(),
            board_id: id,
        })
    }

    /// Fetch the full board by name, tiles in position order.
    ///
    /// # Errors
    ///
    /// `NotFound` when no board has that name.
    pub fn fetch(&self, name: &str) -> Result<BoardRecord, BoardError> {
        self.store
            .get(name.trim())
            .map(|board| board.to_record())
            .ok_or(BoardError::NotFound)
    }

    /// Replace a board's dimensions, title, and entire tile set.
    ///
    /// The replacement record is built completely before the single `put`,
    /// so a failure at any earlier step leaves the stored board intact and
    /// the store never holds a board with a partial tile set.
    ///
    /// # Errors
    ///
    /// `NotFound`, `Unauthorized` on password mismatch (skipped for
    /// boards stored without one), `Validation` for a malformed request,
    /// and the stats-lookup errors when a username accompanies the update.
    pub fn update(
        &mut self,
        name: &str,
        request: &UpdateBoardRequest,
    ) -> Result<SaveOutcome, BoardError> {
        validate_shape(name, request.rows, request.columns, &request.tiles)?;
        let existing = self.store.get(name.trim()).ok_or(BoardError::NotFound)?;
        if !verify_optional(existing.password.as_ref(), request.password.as_deref()) {
            return Err(BoardError::Unauthorized);
        }
        let player = match self.resolve_player(request.osrs_username.as_deref())? {
            Some(fresh) => Some(fresh),
            None => existing.player.clone(),
        };
        let updated = StoredBoard {
            id: existing.id,
            name: existing.name.clone(),
            title: request.title.clone(),
            rows: request.rows,
            columns: request.columns,
            tiles: renumbered(&request.tiles),
            password: existing.password.clone(),
            player,
        };
        self.store.put(updated);
        Ok(SaveOutcome {
            message: "Board updated successfully".to_string(),
            board_id: existing.id,
        })
    }

    fn resolve_player(&self, username: Option<&str>) -> Result<Option<PlayerStats>, BoardError> {
        let Some(username) = username.map(str::trim).filter(|u| !u.is_empty()) else {
            return Ok(None);
        };
        let stats = self.stats.lookup(username)?;
        if stats.is_unranked() {
            return Err(BoardError::InvalidExternalAccount);
        }
        Ok(Some(stats))
    }
}

/// Persisted position is the dense submission order, whatever the client
/// put in the records.
fn renumbered(tiles: &[TileRecord]) -> Vec<TileRecord> {
    tiles
        .iter()
        .enumerate()
        .map(|(position, record)| {
            let mut record = record.clone();
            record.position = u32::try_from(position).unwrap_or(u32::MAX);
            record
        })
        .collect()
}
