use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::Button;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub username: AttrValue,
    /// Whether a hiscores snapshot is currently cached for the board.
    #[prop_or_default]
    pub has_stats: bool,
    #[prop_or_default]
    pub busy: bool,
    /// Error text from the last failed lookup, shown next to the button.
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_apply: Callback<String>,
}

/// Username entry plus the lookup trigger that refreshes every skill
/// tile's current level from the hiscores.
#[function_component(UsernamePanel)]
pub fn username_panel(props: &Props) -> Html {
    let draft = use_state(|| props.username.to_string());

    let oninput = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                draft.set(input.value());
            }
        })
    };
    let onclick = {
        let draft = draft.clone();
        let cb = props.on_apply.clone();
        Callback::from(move |_: MouseEvent| cb.emit((*draft).clone()))
    };

    html! {
        <div class="username-panel">
            <input
                type="text"
                aria-label="OSRS username"
                placeholder="OSRS username"
                value={(*draft).clone()}
                {oninput}
            />
            <Button label="Update levels" {onclick} disabled={props.busy} />
            { if props.has_stats {
                html! { <span class="username-panel__synced">{"Levels synced"}</span> }
            } else {
                Html::default()
            } }
            { if let Some(error) = &props.error {
                html! { <span class="username-panel__error" role="alert">{ error.clone() }</span> }
            } else {
                Html::default()
            } }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn panel_seeds_the_input_with_the_saved_username() {
        let props = Props {
            username: AttrValue::from("Zezima"),
            has_stats: false,
            busy: false,
            error: None,
            on_apply: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<UsernamePanel>::with_props(props).render());
        assert!(html.contains("Zezima"));
        assert!(html.contains("Update levels"));
        assert!(!html.contains("Levels synced"));
        assert!(!html.contains("username-panel__error"));
    }

    #[test]
    fn cached_stats_show_the_synced_marker() {
        let props = Props {
            username: AttrValue::from("Zezima"),
            has_stats: true,
            busy: false,
            error: None,
            on_apply: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<UsernamePanel>::with_props(props).render());
        assert!(html.contains("Levels synced"));
    }

    #[test]
    fn failed_lookup_shows_the_error_next_to_the_button() {
        let props = Props {
            username: AttrValue::from("Zezima"),
            has_stats: false,
            busy: false,
            error: Some(AttrValue::from("That username was not found on the hiscores.")),
            on_apply: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<UsernamePanel>::with_props(props).render());
        assert!(html.contains("not found on the hiscores"));
    }
}
