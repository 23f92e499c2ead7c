use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::{WikiApi, WikiHit};
use crate::dom;

const DEBOUNCE_MS: i32 = 300;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Emits the chosen page title and its icon URL.
    pub on_pick: Callback<(String, String)>,
}

/// Debounced wiki page search. Each keystroke bumps a generation counter;
/// only the task holding the latest generation is allowed to publish
/// results, so stale responses never overwrite newer ones.
#[function_component(WikiSearch)]
pub fn wiki_search(props: &Props) -> Html {
    let query = use_state(String::new);
    let hits = use_state(Vec::<WikiHit>::new);
    let generation = use_mut_ref(|| 0_u64);

    let oninput = {
        let query = query.clone();
        let hits = hits.clone();
        let generation = generation.clone();
        Callback::from(move |e: InputEvent| {
            let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let value = input.value();
            query.set(value.clone());

            *generation.borrow_mut() += 1;
            let my_generation = *generation.borrow();

            let trimmed = value.trim().to_string();
            if trimmed.is_empty() {
                hits.set(Vec::new());
                return;
            }

            let hits = hits.clone();
            let generation = generation.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if dom::sleep_ms(DEBOUNCE_MS).await.is_err() {
                    return;
                }
                if *generation.borrow() != my_generation {
                    return;
                }
                match WikiApi::search(&trimmed).await {
                    Ok(results) => {
                        if *generation.borrow() == my_generation {
                            hits.set(results);
                        }
                    }
                    Err(err) => log::warn!("wiki search failed: {err}"),
                }
            });
        })
    };

    let pick = |hit: &WikiHit| {
        let cb = props.on_pick.clone();
        let title = hit.title.clone();
        let image = hit.image_url();
        Callback::from(move |_: MouseEvent| cb.emit((title.clone(), image.clone())))
    };

    html! {
        <div class="wiki-search">
            <input
                type="text"
                aria-label="Search the wiki"
                placeholder="Search the wiki..."
                value={(*query).clone()}
                {oninput}
            />
            <ul class="wiki-search__results">
                { for hits.iter().map(|hit| html! {
                    <li key={hit.title.clone()}>
                        <button type="button" onclick={pick(hit)}>
                            <img src={hit.image_url()} alt="" />
                            { hit.title.clone() }
                        </button>
                    </li>
                }) }
            </ul>
        </div>
    }
}
