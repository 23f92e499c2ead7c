use yew::prelude::*;

use crate::app::state::Banner;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub banner: Option<Banner>,
    pub on_dismiss: Callback<()>,
}

/// Inline outcome strip under the toolbar; success and error share one
/// slot so a new outcome replaces the old.
#[function_component(BannerView)]
pub fn banner_view(props: &Props) -> Html {
    let Some(banner) = props.banner.as_ref() else {
        return Html::default();
    };
    let (class, text) = match banner {
        Banner::Success(text) => ("banner banner--success", text.clone()),
        Banner::Error(text) => ("banner banner--error", text.clone()),
    };
    let on_dismiss = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div class={class} role="status">
            <span>{ text }</span>
            <button type="button" aria-label="Dismiss" onclick={on_dismiss}>{"X"}</button>
        </div>
    }
}
