#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod actions;
pub mod state;
pub mod unsaved;
pub mod view;

#[cfg(target_arch = "wasm32")]
fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <AppInner /> },
        Route::NotFound => html! {
            <main class="board-page">
                <h1>{"Page not found"}</h1>
            </main>
        },
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();
    unsaved::use_unsaved_changes_guard(app_state.board.has_unsaved_changes());
    view::render_app(&app_state)
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use yew::prelude::*;
    use yew::LocalServerRenderer;

    #[function_component(ScreenHarness)]
    fn screen_harness() -> Html {
        let app_state = super::state::use_app_state();
        super::view::render_app(&app_state)
    }

    #[test]
    fn default_screen_renders_a_full_grid_with_controls() {
        let html = block_on(LocalServerRenderer::<ScreenHarness>::new().render());
        assert_eq!(html.matches("role=\"gridcell\"").count(), 25);
        assert!(html.contains("Save as..."));
        assert!(html.contains("Find board"));
        assert!(html.contains("OSRS username"));
    }

    #[test]
    fn modals_stay_closed_until_requested() {
        let html = block_on(LocalServerRenderer::<ScreenHarness>::new().render());
        assert!(!html.contains("Save as template</h2>"));
        assert!(!html.contains("Find a board</h2>"));
    }
}
