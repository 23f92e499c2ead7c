use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{Button, Modal};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    #[prop_or_default]
    pub busy: bool,
    /// Error text from the last failed save attempt, shown in the dialog.
    #[prop_or_default]
    pub error: Option<AttrValue>,
    /// Emits (name, password, username) for the first save.
    pub on_submit: Callback<(String, String, String)>,
    pub on_close: Callback<()>,
}

fn text_input(
    label: &str,
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
    html! {
        <label>{ label }
            <input type={kind} {placeholder} {value} {oninput} />
        </label>
    }
}

/// First-save dialog: pick a name, an optional password, and an optional
/// username to attach hiscores levels to the board.
#[function_component(SaveBoardModal)]
pub fn save_board_modal(props: &Props) -> Html {
    let name = use_state(String::new);
    let password = use_state(String::new);
    let username = use_state(String::new);

    let onclick = {
        let cb = props.on_submit.clone();
        let name = name.clone();
        let password = password.clone();
        let username = username.clone();
        Callback::from(move |_: MouseEvent| {
            cb.emit(((*name).clone(), (*password).clone(), (*username).clone()));
        })
    };

    html! {
        <Modal
            open={props.open}
            title="Save board"
            description="A board without a password stays editable by anyone."
            on_close={props.on_close.clone()}
        >
            { text_input("Board name", "text", "my-bingo-board", &name) }
            { text_input("Password (optional)", "password", "", &password) }
            { text_input("OSRS username (optional)", "text", "", &username) }
            { if let Some(error) = &props.error {
                html! { <p class="modal__error" role="alert">{ error.clone() }</p> }
            } else {
                Html::default()
            } }
            <Button label="Save" {onclick} disabled={props.busy} />
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
        let draft = use_state(|| "gnome-child".to_string());
        text_input("Board name", "text", "my-bingo-board", &draft)
    }

    fn props() -> Props {
        Props {
            open: true,
            busy: false,
            error: None,
            on_submit: Callback::noop(),
            on_close: Callback::noop(),
        }
    }

    #[test]
    fn save_dialog_lists_all_three_fields() {
        let html = block_on(LocalServerRenderer::<SaveBoardModal>::with_props(props()).render());
        assert!(html.contains("Board name"));
        assert!(html.contains("Password (optional)"));
        assert!(html.contains("OSRS username (optional)"));
        assert!(html.contains("stays editable by anyone"));
        assert!(!html.contains("modal__error"));
    }

    #[test]
    fn inputs_render_their_current_draft() {
        let html = block_on(LocalServerRenderer::<SeededInput>::new().render());
        assert!(html.contains("gnome-child"));
    }

    #[test]
    fn failed_save_shows_the_error_inline() {
        let mut p = props();
        p.error = Some(AttrValue::from("That board name is already taken."));
        let html = block_on(LocalServerRenderer::<SaveBoardModal>::with_props(p).render());
        assert!(html.contains("That board name is already taken."));
    }
}
