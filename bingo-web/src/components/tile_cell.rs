use yew::prelude::*;

use bingo_core::{format_quantity, Tile, TileId, TileKind, Unit};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub id: TileId,
    pub tile: Tile,
    #[prop_or_default]
    pub dragging: bool,
    #[prop_or_default]
    pub drop_target: bool,
    pub on_press: Callback<(TileId, f64, f64)>,
    pub on_enter: Callback<TileId>,
}

fn footer(tile: &Tile) -> Html {
    match &tile.kind {
        TileKind::Skill {
            current_level,
            goal_level,
            ..
        } => html! {
            <span class="tile__levels">{ format!("{current_level}/{goal_level}") }</span>
        },
        TileKind::Custom | TileKind::Wiki => {
            if tile.target == 0 {
                return Html::default();
            }
            let unit = match tile.unit {
                Unit::Drops => "drops",
                Unit::Xp => "xp",
            };
            html! {
                <span class="tile__progress">
                    { format!("{}/{} {unit}", format_quantity(tile.progress), format_quantity(tile.target)) }
                </span>
            }
        }
    }
}

#[function_component(TileCell)]
pub fn tile_cell(props: &Props) -> Html {
    let id = props.id;
    let onpointerdown = {
        let cb = props.on_press.clone();
        Callback::from(move |e: PointerEvent| {
            e.prevent_default();
            cb.emit((id, f64::from(e.client_x()), f64::from(e.client_y())));
        })
    };
    let onpointerenter = {
        let cb = props.on_enter.clone();
        Callback::from(move |_: PointerEvent| cb.emit(id))
    };

    let mut class = classes!("tile");
    if props.tile.is_complete() {
        class.push("tile--complete");
    }
    if props.dragging {
        class.push("tile--dragging");
    }
    if props.drop_target {
        class.push("tile--drop-target");
    }
    if matches!(props.tile.kind, TileKind::Skill { .. }) {
        class.push("tile--skill");
    }

    html! {
        <div {class} role="gridcell" {onpointerdown} {onpointerenter}>
            { props.tile.image_url.as_ref().map(|url| html! {
                <img class="tile__icon" src={url.clone()} alt="" />
            }).unwrap_or_default() }
            <span class="tile__content">{ props.tile.content.clone() }</span>
            { footer(&props.tile) }
        </div>
    }
}
