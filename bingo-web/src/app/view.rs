use yew::prelude::*;

use bingo_core::{Tile, TileId};

use crate::app::actions;
use crate::app::state::AppState;
use crate::components::{
    BannerView, BoardControls, BoardGrid, FindBoardModal, SaveBoardModal, TemplateModal,
    TileEditor, UsernamePanel,
};
use crate::drag::DragOutcome;

fn drag_callbacks(
    state: &AppState,
) -> (
    Callback<(TileId, f64, f64)>,
    Callback<(f64, f64)>,
    Callback<TileId>,
    Callback<()>,
    Callback<()>,
    Callback<()>,
) {
    let on_press = {
        let drag = state.drag.clone();
        Callback::from(move |(id, x, y): (TileId, f64, f64)| {
            let mut tracker = *drag;
            tracker.press(id, x, y);
            drag.set(tracker);
        })
    };
    let on_travel = {
        let drag = state.drag.clone();
        Callback::from(move |(x, y): (f64, f64)| {
            let mut tracker = *drag;
            tracker.travel(x, y);
            drag.set(tracker);
        })
    };
    let on_enter = {
        let drag = state.drag.clone();
        Callback::from(move |id: TileId| {
            let mut tracker = *drag;
            tracker.hover(Some(id));
            drag.set(tracker);
        })
    };
    let on_leave = {
        let drag = state.drag.clone();
        Callback::from(move |()| {
            let mut tracker = *drag;
            tracker.hover(None);
            drag.set(tracker);
        })
    };
    let on_release = {
        let state = state.clone();
        Callback::from(move |()| {
            let mut tracker = *state.drag;
            match tracker.release() {
                Some(DragOutcome::Click(id)) => state.editing_tile.set(Some(id)),
                Some(DragOutcome::Dropped { from, to }) => {
                    state.with_board(|board| board.move_tile(from, to));
                }
                Some(DragOutcome::Cancelled) | None => {}
            }
            state.drag.set(tracker);
        })
    };
    let on_cancel = {
        let drag = state.drag.clone();
        Callback::from(move |()| {
            let mut tracker = *drag;
            tracker.cancel();
            drag.set(tracker);
        })
    };
    (on_press, on_travel, on_enter, on_leave, on_release, on_cancel)
}

fn editor(state: &AppState) -> Html {
    let Some(id) = *state.editing_tile else {
        return Html::default();
    };
    let board = &*state.board;
    let on_save = {
        let state = state.clone();
        Callback::from(move |(id, tile): (TileId, Tile)| {
            state.with_board(|board| board.put_tile(id, tile.clone()));
            state.editing_tile.set(None);
        })
    };
    let on_close = {
        let editing = state.editing_tile.clone();
        Callback::from(move |()| editing.set(None))
    };
    html! {
        <TileEditor
            key={id}
            {id}
            tile={board.tile(id)}
            stats={board.stats.clone()}
            {on_save}
            {on_close}
        />
    }
}

pub fn render_app(state: &AppState) -> Html {
    let board = &*state.board;
    let tiles: Vec<(TileId, Tile)> = board
        .order()
        .ids()
        .iter()
        .map(|&id| (id, board.tile(id)))
        .collect();

    let (on_press, on_travel, on_enter, on_leave, on_release, on_cancel) = drag_callbacks(state);

    let on_title = {
        let state = state.clone();
        Callback::from(move |title: String| state.with_board(|board| board.title = title.clone()))
    };
    let on_rows = {
        let state = state.clone();
        Callback::from(move |rows: u32| state.with_board(|board| board.set_rows(rows)))
    };
    let on_columns = {
        let state = state.clone();
        Callback::from(move |columns: u32| state.with_board(|board| board.set_columns(columns)))
    };
    let on_undo = {
        let state = state.clone();
        Callback::from(move |()| state.with_board(bingo_core::BoardState::undo))
    };
    let on_redo = {
        let state = state.clone();
        Callback::from(move |()| state.with_board(bingo_core::BoardState::redo))
    };
    let on_save = {
        let state = state.clone();
        Callback::from(move |()| {
            if state.is_saved_board() {
                actions::save_board(&state);
            } else {
                state.inline_error.set(None);
                state.show_save.set(true);
            }
        })
    };
    let on_find = {
        let state = state.clone();
        Callback::from(move |()| {
            state.inline_error.set(None);
            state.show_find.set(true);
        })
    };
    let on_template = {
        let state = state.clone();
        Callback::from(move |()| {
            state.inline_error.set(None);
            state.show_template.set(true);
        })
    };
    let on_apply_username = {
        let state = state.clone();
        Callback::from(move |username: String| {
            actions::apply_username(&state, AttrValue::from(username));
        })
    };
    let on_dismiss_banner = {
        let banner = state.banner.clone();
        Callback::from(move |()| banner.set(None))
    };

    let on_save_submit = {
        let state = state.clone();
        Callback::from(move |(name, password, username): (String, String, String)| {
            actions::create_board(
                &state,
                AttrValue::from(name),
                AttrValue::from(password),
                AttrValue::from(username),
            );
        })
    };
    let on_find_submit = {
        let state = state.clone();
        Callback::from(move |(name, password): (String, String)| {
            actions::load_board(&state, AttrValue::from(name), AttrValue::from(password));
        })
    };
    let on_template_submit = {
        let state = state.clone();
        Callback::from(move |spec| actions::clone_template(&state, spec))
    };
    let close_save = {
        let state = state.clone();
        Callback::from(move |()| {
            state.inline_error.set(None);
            state.show_save.set(false);
        })
    };
    let close_find = {
        let state = state.clone();
        Callback::from(move |()| {
            state.inline_error.set(None);
            state.show_find.set(false);
        })
    };
    let close_template = {
        let state = state.clone();
        Callback::from(move |()| {
            state.inline_error.set(None);
            state.show_template.set(false);
        })
    };

    let modal_open = *state.show_save || *state.show_find || *state.show_template;
    let inline_error: Option<AttrValue> = (*state.inline_error).clone().map(AttrValue::from);
    // The panel shows lookup failures; dialog failures stay in the dialog.
    let panel_error = if modal_open { None } else { inline_error.clone() };

    html! {
        <main class="board-page">
            <BoardControls
                title={AttrValue::from(board.title.clone())}
                rows={board.rows()}
                columns={board.columns()}
                can_undo={board.can_undo()}
                can_redo={board.can_redo()}
                busy={*state.busy}
                is_saved={state.is_saved_board()}
                {on_title}
                {on_rows}
                {on_columns}
                {on_undo}
                {on_redo}
                {on_save}
                {on_find}
                {on_template}
            />
            <UsernamePanel
                username={(*state.username).clone()}
                has_stats={board.stats.is_some()}
                busy={*state.busy}
                error={panel_error}
                on_apply={on_apply_username}
            />
            <BannerView banner={(*state.banner).clone()} on_dismiss={on_dismiss_banner} />
            <BoardGrid
                {tiles}
                columns={board.columns()}
                dragging={state.drag.dragging()}
                drop_target={state.drag.drop_target()}
                {on_press}
                {on_travel}
                {on_enter}
                {on_leave}
                {on_release}
                {on_cancel}
            />
            { editor(state) }
            <SaveBoardModal
                open={*state.show_save}
                busy={*state.busy}
                error={inline_error.clone()}
                on_submit={on_save_submit}
                on_close={close_save}
            />
            <FindBoardModal
                open={*state.show_find}
                busy={*state.busy}
                unsaved={board.has_unsaved_changes()}
                error={inline_error.clone()}
                on_submit={on_find_submit}
                on_close={close_find}
            />
            <TemplateModal
                open={*state.show_template}
                busy={*state.busy}
                unsaved={board.has_unsaved_changes()}
                error={inline_error}
                initial_title={AttrValue::from(board.title.clone())}
                on_submit={on_template_submit}
                on_close={close_template}
            />
        </main>
    }
}
