use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{Button, Modal};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    #[prop_or_default]
    pub busy: bool,
    /// True when the live board has edits the load would discard.
    #[prop_or_default]
    pub unsaved: bool,
    /// Error text from the last failed load attempt, shown in the dialog.
    #[prop_or_default]
    pub error: Option<AttrValue>,
    /// Emits (name, password). The password is kept for later updates;
    /// fetching itself is open.
    pub on_submit: Callback<(String, String)>,
    pub on_close: Callback<()>,
}

fn bound_input(
    kind: &'static str,
    placeholder: &'static str,
    handle: &UseStateHandle<String>,
) -> Html {
    let value = (**handle).clone();
    let handle = handle.clone();
    let oninput = Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            handle.set(input.value());
        }
    });
    html! { <input type={kind} {placeholder} {value} {oninput} /> }
}

#[function_component(FindBoardModal)]
pub fn find_board_modal(props: &Props) -> Html {
    let name = use_state(String::new);
    let password = use_state(String::new);

    let onclick = {
        let cb = props.on_submit.clone();
        let name = name.clone();
        let password = password.clone();
        Callback::from(move |_: MouseEvent| cb.emit(((*name).clone(), (*password).clone())))
    };

    html! {
        <Modal open={props.open} title="Find a board" on_close={props.on_close.clone()}>
            { if props.unsaved {
                html! { <p class="find-board__warning">{"Loading a board discards your unsaved changes."}</p> }
            } else {
                Html::default()
            } }
            <label>{"Board name"}{ bound_input("text", "my-bingo-board", &name) }</label>
            <label>{"Password"}{ bound_input("password", "", &password) }</label>
            { if let Some(error) = &props.error {
                html! { <p class="modal__error" role="alert">{ error.clone() }</p> }
            } else {
                Html::default()
            } }
            <Button label="Load" {onclick} disabled={props.busy} />
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[function_component(SeededInput)]
    fn seeded_input() -> Html {
        let draft = use_state(|| "gielinor-goals".to_string());
        bound_input("text", "my-bingo-board", &draft)
    }

    fn props() -> Props {
        Props {
            open: true,
            busy: false,
            unsaved: false,
            error: None,
            on_submit: Callback::noop(),
            on_close: Callback::noop(),
        }
    }

    #[test]
    fn unsaved_changes_get_a_warning() {
        let mut p = props();
        p.unsaved = true;
        let html = block_on(LocalServerRenderer::<FindBoardModal>::with_props(p).render());
        assert!(html.contains("discards your unsaved changes"));
    }

    #[test]
    fn clean_board_gets_no_warning() {
        let html = block_on(LocalServerRenderer::<FindBoardModal>::with_props(props()).render());
        assert!(!html.contains("discards"));
        assert!(html.contains("Find a board"));
        assert!(!html.contains("modal__error"));
    }

    #[test]
    fn inputs_render_their_current_draft() {
        let html = block_on(LocalServerRenderer::<SeededInput>::new().render());
        assert!(html.contains("gielinor-goals"));
    }

    #[test]
    fn failed_load_shows_the_error_inline() {
        let mut p = props();
        p.error = Some(AttrValue::from("No board with that name was found."));
        let html = block_on(LocalServerRenderer::<FindBoardModal>::with_props(p).render());
        assert!(html.contains("No board with that name was found."));
    }
}
