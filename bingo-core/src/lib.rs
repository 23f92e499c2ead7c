//! Bingo Board Engine
//!
//! Platform-agnostic state engine for the OSRS goal-bingo tracker: the
//! tile model, grid-order permutation, undo/redo snapshot history, the
//! persistence-service wire protocol and semantics, template cloning, and
//! the hiscores experience curve. No UI or browser dependencies live here.

pub mod board;
pub mod error;
pub mod hiscores;
pub mod history;
pub mod levels;
pub mod order;
pub mod password;
pub mod protocol;
pub mod service;
pub mod skill;
pub mod template;
pub mod tile;

// Re-export commonly used types
pub use board::{BoardState, DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_TITLE, MAX_DIMENSION};
pub use error::BoardError;
pub use hiscores::{PlayerStats, SkillEntry};
pub use history::{BoardSnapshot, History};
pub use levels::{xp_for_level, xp_to_level, MAX_LEVEL, MAX_LEVEL_XP};
pub use order::{TileOrder, DRAG_ACTIVATION_DISTANCE_PX};
pub use password::{verify_optional, PasswordHash};
pub use protocol::{
    create_request, tile_records, update_request, validate_shape, BoardRecord, CreateBoardRequest,
    ErrorBody, SaveOutcome, TileRecord, UpdateBoardRequest,
};
pub use service::{BoardService, BoardStore, MemoryStore, StatsProvider, StoredBoard};
pub use skill::Skill;
pub use template::{template_request, TemplateSpec};
pub use tile::{format_quantity, Tile, TileId, TileKind, Unit};
