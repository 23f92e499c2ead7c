use yew::prelude::*;

use bingo_core::{BoardState, TileId};

use crate::drag::DragTracker;

/// Transient outcome banner shown under the toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Error(String),
}

/// Every piece of UI state the board screen needs, as state handles so
/// hooks and callbacks can share them freely.
#[derive(Clone)]
pub struct AppState {
    pub board: UseStateHandle<BoardState>,
    /// Name the board is saved under; empty until the first save or load.
    pub board_name: UseStateHandle<AttrValue>,
    pub password: UseStateHandle<AttrValue>,
    pub username: UseStateHandle<AttrValue>,
    /// Slot currently open in the tile editor.
    pub editing_tile: UseStateHandle<Option<TileId>>,
    pub drag: UseStateHandle<DragTracker>,
    pub show_save: UseStateHandle<bool>,
    pub show_find: UseStateHandle<bool>,
    pub show_template: UseStateHandle<bool>,
    pub banner: UseStateHandle<Option<Banner>>,
    /// Error from the most recent dialog or hiscores request, rendered
    /// next to the control that fired it rather than in the banner.
    pub inline_error: UseStateHandle<Option<String>>,
    /// True while a network request is in flight; gates the sync buttons.
    pub busy: UseStateHandle<bool>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        board: use_state(BoardState::default),
        board_name: use_state(AttrValue::default),
        password: use_state(AttrValue::default),
        username: use_state(AttrValue::default),
        editing_tile: use_state(|| None::<TileId>),
        drag: use_state(DragTracker::new),
        show_save: use_state(|| false),
        show_find: use_state(|| false),
        show_template: use_state(|| false),
        banner: use_state(|| None::<Banner>),
        inline_error: use_state(|| None::<String>),
        busy: use_state(|| false),
    }
}

impl AppState {
    /// A board fetched from or saved to the service has a name.
    #[must_use]
    pub fn is_saved_board(&self) -> bool {
        !self.board_name.is_empty()
    }

    /// Run a mutation against a clone of the board and publish the result.
    pub fn with_board(&self, mutate: impl FnOnce(&mut BoardState)) {
        let mut board = (*self.board).clone();
        mutate(&mut board);
        self.board.set(board);
    }
}
