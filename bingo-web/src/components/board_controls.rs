use web_sys::HtmlInputElement;
use yew::prelude::*;

use bingo_core::MAX_DIMENSION;

use crate::components::Button;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: AttrValue,
    pub rows: u32,
    pub columns: u32,
    pub can_undo: bool,
    pub can_redo: bool,
    /// Disables the sync buttons while a request is in flight.
    #[prop_or_default]
    pub busy: bool,
    /// True once the board has a saved name; switches Save between the
    /// first-save dialog and a direct update.
    #[prop_or_default]
    pub is_saved: bool,
    pub on_title: Callback<String>,
    pub on_rows: Callback<u32>,
    pub on_columns: Callback<u32>,
    pub on_undo: Callback<()>,
    pub on_redo: Callback<()>,
    pub on_save: Callback<()>,
    pub on_find: Callback<()>,
    pub on_template: Callback<()>,
}

fn dimension_input(label: &str, value: u32, on_change: &Callback<u32>) -> Html {
    let on_change = on_change.clone();
    let oninput = Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            if let Ok(parsed) = input.value().parse::<u32>() {
                on_change.emit(parsed.clamp(1, MAX_DIMENSION));
            }
        }
    });
    html! {
        <label class="controls__dimension">
            { label }
            <input
                type="number"
                min="1"
                max={MAX_DIMENSION.to_string()}
                value={value.to_string()}
                {oninput}
            />
        </label>
    }
}

#[function_component(BoardControls)]
pub fn board_controls(props: &Props) -> Html {
    let on_title = {
        let cb = props.on_title.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let emit = |cb: &Callback<()>| {
        let cb = cb.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="board-controls">
            <input
                class="controls__title"
                type="text"
                aria-label="Board title"
                value={props.title.clone()}
                oninput={on_title}
            />
            { dimension_input("Rows", props.rows, &props.on_rows) }
            { dimension_input("Columns", props.columns, &props.on_columns) }
            <Button label="Undo" onclick={emit(&props.on_undo)} disabled={!props.can_undo} />
            <Button label="Redo" onclick={emit(&props.on_redo)} disabled={!props.can_redo} />
            <Button
                label={if props.is_saved { "Save" } else { "Save as..." }}
                onclick={emit(&props.on_save)}
                disabled={props.busy}
            />
            <Button label="Find board" onclick={emit(&props.on_find)} disabled={props.busy} />
            <Button label="Save as template" onclick={emit(&props.on_template)} disabled={props.busy} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props() -> Props {
        Props {
            title: AttrValue::from("Bingo Board"),
            rows: 5,
            columns: 5,
            can_undo: false,
            can_redo: false,
            busy: false,
            is_saved: false,
            on_title: Callback::noop(),
            on_rows: Callback::noop(),
            on_columns: Callback::noop(),
            on_undo: Callback::noop(),
            on_redo: Callback::noop(),
            on_save: Callback::noop(),
            on_find: Callback::noop(),
            on_template: Callback::noop(),
        }
    }

    #[test]
    fn fresh_board_offers_save_as() {
        let html = block_on(LocalServerRenderer::<BoardControls>::with_props(props()).render());
        assert!(html.contains("Save as..."));
        assert!(html.contains("Bingo Board"));
    }

    #[test]
    fn saved_board_offers_plain_save() {
        let mut p = props();
        p.is_saved = true;
        p.can_undo = true;
        let html = block_on(LocalServerRenderer::<BoardControls>::with_props(p).render());
        assert!(!html.contains("Save as..."));
        assert!(html.contains("Save"));
    }
}
