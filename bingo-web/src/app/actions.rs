//! Async flows behind the toolbar and modal buttons.
//!
//! Each flow clones the handles it needs, flips `busy` around the network
//! call, and reports the outcome through the banner. Failures from a
//! dialog or the username panel land in `inline_error` so the message
//! shows next to the control that fired the request. Errors never mutate
//! the board.

use yew::prelude::*;

use bingo_core::{
    create_request, template_request, update_request, validate_shape, BoardError, BoardRecord,
    BoardState, CreateBoardRequest, PlayerStats, TemplateSpec,
};

use crate::api::{BoardApi, HiscoresApi};
use crate::app::state::{AppState, Banner};

fn describe(err: &BoardError) -> String {
    match err {
        BoardError::NotFound => "No board with that name was found.".to_string(),
        BoardError::Conflict => "That board name is already taken.".to_string(),
        BoardError::Unauthorized => "Incorrect password for this board.".to_string(),
        BoardError::InvalidExternalAccount => {
            "That username was not found on the hiscores.".to_string()
        }
        BoardError::Validation(msg) => msg.clone(),
        BoardError::Upstream(msg) => format!("Something went wrong: {msg}"),
    }
}

/// Toolbar flow: failures go to the banner under the controls.
fn run<F>(state: &AppState, fut: F)
where
    F: std::future::Future<Output = Result<String, BoardError>> + 'static,
{
    run_reporting(state, false, fut);
}

/// Dialog and panel flow: failures go to `inline_error` instead.
fn run_inline<F>(state: &AppState, fut: F)
where
    F: std::future::Future<Output = Result<String, BoardError>> + 'static,
{
    run_reporting(state, true, fut);
}

fn run_reporting<F>(state: &AppState, inline: bool, fut: F)
where
    F: std::future::Future<Output = Result<String, BoardError>> + 'static,
{
    let busy = state.busy.clone();
    let banner = state.banner.clone();
    let inline_error = state.inline_error.clone();
    busy.set(true);
    wasm_bindgen_futures::spawn_local(async move {
        match fut.await {
            Ok(message) => {
                inline_error.set(None);
                banner.set(Some(Banner::Success(message)));
            }
            Err(err) => {
                log::warn!("board action failed: {err}");
                let text = describe(&err);
                if inline {
                    inline_error.set(Some(text));
                } else {
                    banner.set(Some(Banner::Error(text)));
                }
            }
        }
        busy.set(false);
    });
}

/// Rebuild the live board from the create request that made the clone,
/// layering the fresh hiscores snapshot on top when one was fetched.
fn adopt_clone(
    board: &mut BoardState,
    request: &CreateBoardRequest,
    stats: Option<PlayerStats>,
) -> Result<(), BoardError> {
    let record = BoardRecord {
        name: request.name.clone(),
        title: request.title.clone(),
        rows: request.rows,
        columns: request.columns,
        tiles: request.tiles.clone(),
        player: None,
    };
    record.load_into(board)?;
    if let Some(stats) = stats {
        board.apply_stats(stats);
    }
    Ok(())
}

/// First save: `POST /solo-board` under a new name.
pub fn create_board(state: &AppState, name: AttrValue, password: AttrValue, username: AttrValue) {
    let board = (*state.board).clone();
    let board_handle = state.board.clone();
    let name_handle = state.board_name.clone();
    let password_handle = state.password.clone();
    let username_handle = state.username.clone();
    let show_save = state.show_save.clone();
    run_inline(state, async move {
        let request = create_request(
            &board,
            name.as_str(),
            password.as_str(),
            Some(username.as_str()),
        );
        validate_shape(&request.name, request.rows, request.columns, &request.tiles)?;
        let outcome = BoardApi::create(&request).await?;
        let mut saved = board;
        saved.mark_saved();
        board_handle.set(saved);
        name_handle.set(name);
        password_handle.set(password);
        username_handle.set(username);
        show_save.set(false);
        Ok(outcome.message)
    });
}

/// Save an already-named board: `PUT /solo-board/:name`.
pub fn save_board(state: &AppState) {
    let board = (*state.board).clone();
    let board_handle = state.board.clone();
    let name = state.board_name.to_string();
    let password = state.password.to_string();
    let username = state.username.to_string();
    run(state, async move {
        let request = update_request(&board, &password, Some(&username));
        validate_shape(&name, request.rows, request.columns, &request.tiles)?;
        let outcome = BoardApi::update(&name, &request).await?;
        let mut saved = board;
        saved.mark_saved();
        board_handle.set(saved);
        Ok(outcome.message)
    });
}

/// Load a board by name, replacing the local state wholesale.
pub fn load_board(state: &AppState, name: AttrValue, password: AttrValue) {
    let board_handle = state.board.clone();
    let name_handle = state.board_name.clone();
    let password_handle = state.password.clone();
    let username_handle = state.username.clone();
    let show_find = state.show_find.clone();
    run_inline(state, async move {
        let record = BoardApi::fetch(name.as_str()).await?;
        let mut board = (*board_handle).clone();
        record.load_into(&mut board)?;
        let loaded_username = board
            .stats
            .as_ref()
            .map(|stats| stats.username.clone())
            .unwrap_or_default();
        board_handle.set(board);
        username_handle.set(AttrValue::from(loaded_username));
        name_handle.set(name.clone());
        password_handle.set(password);
        show_find.set(false);
        Ok(format!("Loaded board \"{name}\"."))
    });
}

/// Clone the current board as a fresh template under a new name and
/// switch the live state over to the clone. A failed clone leaves the
/// current board untouched.
pub fn clone_template(state: &AppState, spec: TemplateSpec) {
    let board = (*state.board).clone();
    let board_handle = state.board.clone();
    let name_handle = state.board_name.clone();
    let password_handle = state.password.clone();
    let username_handle = state.username.clone();
    let show_template = state.show_template.clone();
    run_inline(state, async move {
        let cloned_as = spec.name.trim().to_string();
        let request = template_request(&board, &spec);
        validate_shape(&request.name, request.rows, request.columns, &request.tiles)?;
        let outcome = BoardApi::create(&request).await?;
        log::info!("cloned board as {cloned_as}: {}", outcome.board_id);

        // The service cached a hiscores snapshot when the clone carried a
        // username; mirror it so skill tiles start at live levels.
        let stats = match &request.osrs_username {
            Some(username) => Some(HiscoresApi::lookup(username).await?),
            None => None,
        };

        // The clone is now the board being worked on.
        let mut clone = board;
        adopt_clone(&mut clone, &request, stats)?;
        board_handle.set(clone);
        name_handle.set(AttrValue::from(cloned_as.clone()));
        password_handle.set(AttrValue::from(spec.password.clone()));
        username_handle.set(AttrValue::from(spec.username.clone().unwrap_or_default()));
        show_template.set(false);
        Ok(format!("Template saved as \"{cloned_as}\"."))
    });
}

/// Look up a username on the hiscores and refresh skill tile levels.
pub fn apply_username(state: &AppState, username: AttrValue) {
    let board_handle = state.board.clone();
    let username_handle = state.username.clone();
    run_inline(state, async move {
        let trimmed = username.trim().to_string();
        if trimmed.is_empty() {
            return Err(BoardError::validation("Enter a username first."));
        }
        let stats = HiscoresApi::lookup(&trimmed).await?;
        let mut board = (*board_handle).clone();
        board.apply_stats(stats);
        board_handle.set(board);
        username_handle.set(AttrValue::from(trimmed.clone()));
        Ok(format!("Skill levels updated for {trimmed}."))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use bingo_core::{Skill, Tile, TileKind};

    fn stats_fixture(level: u32) -> PlayerStats {
        let xp = bingo_core::xp_for_level(level);
        let feed = vec![format!("1,{level},{xp}"); 24].join("\n");
        PlayerStats::parse("tester", &feed).unwrap()
    }

    fn board_with_skill_tile() -> BoardState {
        let mut board = BoardState::default();
        let mut tile = Tile::placeholder(3);
        tile.kind = TileKind::Skill {
            skill: Skill::Agility,
            current_level: 60,
            goal_level: 80,
        };
        board.put_tile(3, tile);
        board
    }

    #[test]
    fn errors_describe_themselves_for_display() {
        assert!(describe(&BoardError::Conflict).contains("taken"));
        assert!(describe(&BoardError::Unauthorized).contains("password"));
        assert!(describe(&BoardError::NotFound).contains("found"));
        assert!(describe(&BoardError::InvalidExternalAccount).contains("hiscores"));
        assert_eq!(describe(&BoardError::validation("too big")), "too big");
    }

    #[test]
    fn adopted_clone_with_a_username_carries_fresh_levels() {
        let board = board_with_skill_tile();
        let spec = TemplateSpec {
            name: "clone".to_string(),
            title: "Clone".to_string(),
            password: String::new(),
            username: Some("tester".to_string()),
        };
        let request = template_request(&board, &spec);

        let mut clone = board;
        adopt_clone(&mut clone, &request, Some(stats_fixture(74))).unwrap();
        assert!(clone.stats.is_some());
        assert!(!clone.has_unsaved_changes());
        match clone.tile(3).kind {
            TileKind::Skill { current_level, .. } => assert_eq!(current_level, 74),
            other => panic!("expected skill tile, got {other:?}"),
        }
    }

    #[test]
    fn adopted_clone_without_a_username_stays_unsynced() {
        let board = board_with_skill_tile();
        let spec = TemplateSpec {
            name: "clone".to_string(),
            title: "Clone".to_string(),
            password: String::new(),
            username: None,
        };
        let request = template_request(&board, &spec);

        let mut clone = board;
        adopt_clone(&mut clone, &request, None).unwrap();
        assert!(clone.stats.is_none());
        match clone.tile(3).kind {
            TileKind::Skill { current_level, .. } => assert_eq!(current_level, 1),
            other => panic!("expected skill tile, got {other:?}"),
        }
    }
}
