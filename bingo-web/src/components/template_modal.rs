use web_sys::HtmlInputElement;
use yew::prelude::*;

use bingo_core::TemplateSpec;

use crate::components::{Button, Modal};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    #[prop_or_default]
    pub busy: bool,
    /// True when the live board has pending edits; the clone is built
    /// from them, so the user should know they are about to be committed.
    #[prop_or_default]
    pub unsaved: bool,
    /// Error text from the last failed clone attempt, shown in the dialog.
    #[prop_or_default]
    pub error: Option<AttrValue>,
    /// Title the clone starts from; editable before submitting.
    pub initial_title: AttrValue,
    pub on_submit: Callback<TemplateSpec>,
    pub on_close: Callback<()>,
}

fn bound_input(kind: &'static str, handle: &UseStateHandle<String>) -> Html {
    let handle = handle.clone();
    let value = (*handle).clone();
    let oninput = Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            handle.set(input.value());
        }
    });
    html! { <input type={kind} {value} {oninput} /> }
}

/// Clone-as-template dialog: the grid and goals carry over, all progress
/// starts from zero under the new name.
#[function_component(TemplateModal)]
pub fn template_modal(props: &Props) -> Html {
    let name = use_state(String::new);
    let title = use_state(|| props.initial_title.to_string());
    let password = use_state(String::new);
    let username = use_state(String::new);

    let onclick = {
        let cb = props.on_submit.clone();
        let name = name.clone();
        let title = title.clone();
        let password = password.clone();
        let username = username.clone();
        Callback::from(move |_: MouseEvent| {
            let trimmed = username.trim().to_string();
            cb.emit(TemplateSpec {
                name: (*name).clone(),
                title: (*title).clone(),
                password: (*password).clone(),
                username: (!trimmed.is_empty()).then_some(trimmed),
            });
        })
    };

    html! {
        <Modal
            open={props.open}
            title="Save as template"
            description="Copies the board with every tile's progress reset."
            on_close={props.on_close.clone()}
        >
            { if props.unsaved {
                html! {
                    <p class="template__warning">
                        {"You have unsaved changes; cloning switches you to the new board."}
                    </p>
                }
            } else {
                Html::default()
            } }
            <label>{"New board name"}{ bound_input("text", &name) }</label>
            <label>{"Title"}{ bound_input("text", &title) }</label>
            <label>{"Password (optional)"}{ bound_input("password", &password) }</label>
            <label>{"OSRS username (optional)"}{ bound_input("text", &username) }</label>
            { if let Some(error) = &props.error {
                html! { <p class="modal__error" role="alert">{ error.clone() }</p> }
            } else {
                Html::default()
            } }
            <Button label="Clone board" {onclick} disabled={props.busy} />
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn template_dialog_seeds_the_title() {
        let props = Props {
            open: true,
            busy: false,
            unsaved: false,
            error: None,
            initial_title: AttrValue::from("Herblore goals"),
            on_submit: Callback::noop(),
            on_close: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<TemplateModal>::with_props(props).render());
        assert!(html.contains("Herblore goals"));
        assert!(html.contains("progress reset"));
        assert!(html.contains("Clone board"));
        assert!(!html.contains("unsaved changes"));
        assert!(!html.contains("modal__error"));
    }

    #[test]
    fn pending_edits_get_a_notice() {
        let props = Props {
            open: true,
            busy: false,
            unsaved: true,
            error: None,
            initial_title: AttrValue::from("Herblore goals"),
            on_submit: Callback::noop(),
            on_close: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<TemplateModal>::with_props(props).render());
        assert!(html.contains("unsaved changes"));
    }

    #[test]
    fn failed_clone_shows_the_error_inline() {
        let props = Props {
            open: true,
            busy: false,
            unsaved: false,
            error: Some(AttrValue::from("That board name is already taken.")),
            initial_title: AttrValue::from("Herblore goals"),
            on_submit: Callback::noop(),
            on_close: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<TemplateModal>::with_props(props).render());
        assert!(html.contains("That board name is already taken."));
    }
}
