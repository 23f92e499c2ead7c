use yew::prelude::*;

use bingo_core::{Tile, TileId};

use crate::components::TileCell;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Render-ordered slot id and tile pairs; length is rows * columns.
    pub tiles: Vec<(TileId, Tile)>,
    pub columns: u32,
    #[prop_or_default]
    pub dragging: Option<TileId>,
    #[prop_or_default]
    pub drop_target: Option<TileId>,
    pub on_press: Callback<(TileId, f64, f64)>,
    pub on_travel: Callback<(f64, f64)>,
    pub on_enter: Callback<TileId>,
    pub on_leave: Callback<()>,
    pub on_release: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(BoardGrid)]
pub fn board_grid(props: &Props) -> Html {
    let onpointermove = {
        let cb = props.on_travel.clone();
        Callback::from(move |e: PointerEvent| {
            cb.emit((f64::from(e.client_x()), f64::from(e.client_y())));
        })
    };
    let onpointerup = {
        let cb = props.on_release.clone();
        Callback::from(move |_: PointerEvent| cb.emit(()))
    };
    let onpointercancel = {
        let cb = props.on_cancel.clone();
        Callback::from(move |_: PointerEvent| cb.emit(()))
    };
    // Leaving the grid entirely clears the drop target without ending the
    // drag; releasing out there cancels it.
    let onpointerleave = {
        let cb = props.on_leave.clone();
        Callback::from(move |_: PointerEvent| cb.emit(()))
    };

    let style = format!("grid-template-columns: repeat({}, 1fr);", props.columns);

    html! {
        <div
            class="board-grid"
            role="grid"
            {style}
            {onpointermove}
            {onpointerup}
            {onpointercancel}
            {onpointerleave}
        >
            { for props.tiles.iter().map(|(id, tile)| {
                html! {
                    <TileCell
                        key={*id}
                        id={*id}
                        tile={tile.clone()}
                        dragging={props.dragging == Some(*id)}
                        drop_target={props.drop_target == Some(*id)}
                        on_press={props.on_press.clone()}
                        on_enter={props.on_enter.clone()}
                    />
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn grid_props(columns: u32, count: u32) -> Props {
        let tiles = (1..=count).map(|id| (id, Tile::placeholder(id))).collect();
        Props {
            tiles,
            columns,
            dragging: None,
            drop_target: None,
            on_press: Callback::noop(),
            on_travel: Callback::noop(),
            on_enter: Callback::noop(),
            on_leave: Callback::noop(),
            on_release: Callback::noop(),
            on_cancel: Callback::noop(),
        }
    }

    #[test]
    fn grid_renders_every_cell() {
        let html = block_on(LocalServerRenderer::<BoardGrid>::with_props(grid_props(4, 12)).render());
        assert_eq!(html.matches("role=\"gridcell\"").count(), 12);
        assert!(html.contains("repeat(4, 1fr)"));
    }

    #[test]
    fn drop_target_cell_is_highlighted() {
        let mut props = grid_props(3, 9);
        props.dragging = Some(2);
        props.drop_target = Some(5);
        let html = block_on(LocalServerRenderer::<BoardGrid>::with_props(props).render());
        assert_eq!(html.matches("tile--dragging").count(), 1);
        assert_eq!(html.matches("tile--drop-target").count(), 1);
    }
}
