use std::str::FromStr;

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use bingo_core::{PlayerStats, Skill, Tile, TileId, TileKind, Unit};

use crate::components::{Button, Modal, WikiSearch};

/// Which editing surface is showing; maps onto [`TileKind`] on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Custom,
    Wiki,
    Skill,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub id: TileId,
    pub tile: Tile,
    /// Cached hiscores snapshot; seeds the current level of skill tiles.
    #[prop_or_default]
    pub stats: Option<PlayerStats>,
    pub on_save: Callback<(TileId, Tile)>,
    pub on_close: Callback<()>,
}

fn parsed_u64(e: &InputEvent) -> Option<u64> {
    e.target_dyn_into::<HtmlInputElement>()
        .and_then(|input| input.value().parse::<u64>().ok())
}

/// Full tile editing dialog. Re-mounted per slot (keyed by the parent),
/// so the draft state always starts from the tile being edited.
#[function_component(TileEditor)]
pub fn tile_editor(props: &Props) -> Html {
    let initial = &props.tile;
    let (initial_mode, initial_skill, initial_goal) = match initial.kind {
        TileKind::Custom => (Mode::Custom, Skill::Attack, 99),
        TileKind::Wiki => (Mode::Wiki, Skill::Attack, 99),
        TileKind::Skill {
            skill, goal_level, ..
        } => (Mode::Skill, skill, goal_level),
    };

    let mode = use_state(|| initial_mode);
    let content = use_state(|| initial.content.clone());
    let image_url = use_state(|| initial.image_url.clone());
    let target = use_state(|| initial.target);
    let unit = use_state(|| initial.unit);
    let progress = use_state(|| initial.progress);
    let completed = use_state(|| initial.completed);
    let skill = use_state(|| initial_skill);
    let goal_level = use_state(|| initial_goal);

    let set_mode = |next: Mode| {
        let mode = mode.clone();
        Callback::from(move |_: MouseEvent| mode.set(next))
    };

    let on_content = {
        let content = content.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                content.set(input.value());
            }
        })
    };
    let on_target = {
        let target = target.clone();
        let progress = progress.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = parsed_u64(&e) {
                target.set(value);
                // Keep the draft consistent with the clamp the engine
                // applies on save.
                if *progress > value {
                    progress.set(value);
                }
            }
        })
    };
    let on_progress = {
        let progress = progress.clone();
        let target = target.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = parsed_u64(&e) {
                progress.set(value.min(*target));
            }
        })
    };
    let on_unit = {
        let unit = unit.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                unit.set(if select.value() == "xp" { Unit::Xp } else { Unit::Drops });
            }
        })
    };
    let on_completed = {
        let completed = completed.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                completed.set(input.checked());
            }
        })
    };
    let on_skill = {
        let skill = skill.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                if let Ok(parsed) = Skill::from_str(&select.value()) {
                    skill.set(parsed);
                }
            }
        })
    };
    let on_goal = {
        let goal_level = goal_level.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                if let Ok(parsed) = input.value().parse::<u32>() {
                    goal_level.set(parsed.clamp(1, 99));
                }
            }
        })
    };
    let on_wiki_pick = {
        let content = content.clone();
        let image_url = image_url.clone();
        Callback::from(move |(title, image): (String, String)| {
            content.set(title);
            image_url.set(Some(image));
        })
    };

    let on_save = {
        let id = props.id;
        let cb = props.on_save.clone();
        let stats = props.stats.clone();
        let mode = mode.clone();
        let content = content.clone();
        let image_url = image_url.clone();
        let target = target.clone();
        let unit = unit.clone();
        let progress = progress.clone();
        let completed = completed.clone();
        let skill = skill.clone();
        let goal_level = goal_level.clone();
        Callback::from(move |_: MouseEvent| {
            let kind = match *mode {
                Mode::Custom => TileKind::Custom,
                Mode::Wiki => TileKind::Wiki,
                Mode::Skill => TileKind::Skill {
                    skill: *skill,
                    current_level: stats.as_ref().map_or(1, |s| s.level(*skill)),
                    goal_level: *goal_level,
                },
            };
            let mut tile = Tile {
                content: (*content).clone(),
                target: *target,
                unit: *unit,
                progress: 0,
                completed: *completed,
                image_url: (*image_url).clone(),
                kind,
            };
            tile.set_progress(*progress);
            cb.emit((id, tile));
        })
    };

    let mode_button = |label: &'static str, value: Mode| {
        let class = if *mode == value {
            "tile-editor__mode tile-editor__mode--active"
        } else {
            "tile-editor__mode"
        };
        html! {
            <button type="button" {class} onclick={set_mode(value)}>{ label }</button>
        }
    };

    let criteria = html! {
        <div class="tile-editor__criteria">
            <label>{"Target"}
                <input type="number" min="0" value={target.to_string()} oninput={on_target} />
            </label>
            <label>{"Unit"}
                <select onchange={on_unit}>
                    <option value="drops" selected={*unit == Unit::Drops}>{"Drops"}</option>
                    <option value="xp" selected={*unit == Unit::Xp}>{"XP"}</option>
                </select>
            </label>
            <label>{"Progress"}
                <input type="number" min="0" value={progress.to_string()} oninput={on_progress} />
            </label>
            <label class="tile-editor__completed">
                <input type="checkbox" checked={*completed} onchange={on_completed} />
                {"Completed"}
            </label>
        </div>
    };

    let body = match *mode {
        Mode::Custom => html! {
            <>
                <label>{"Goal"}
                    <input
                        type="text"
                        value={(*content).clone()}
                        oninput={on_content}
                        placeholder="Describe the goal"
                    />
                </label>
                { criteria }
            </>
        },
        Mode::Wiki => html! {
            <>
                <WikiSearch on_pick={on_wiki_pick} />
                <p class="tile-editor__picked">{ (*content).clone() }</p>
                { criteria }
            </>
        },
        Mode::Skill => html! {
            <div class="tile-editor__skill">
                <label>{"Skill"}
                    <select onchange={on_skill}>
                        { for Skill::ALL.iter().filter(|s| **s != Skill::Overall).map(|s| html! {
                            <option value={s.as_str()} selected={*skill == *s}>
                                { s.display_name() }
                            </option>
                        }) }
                    </select>
                </label>
                <label>{"Goal level"}
                    <input type="number" min="1" max="99" value={goal_level.to_string()} oninput={on_goal} />
                </label>
            </div>
        },
    };

    html! {
        <Modal open={true} title="Edit tile" on_close={props.on_close.clone()}>
            <div class="tile-editor__modes" role="tablist">
                { mode_button("Custom", Mode::Custom) }
                { mode_button("Wiki", Mode::Wiki) }
                { mode_button("Skill", Mode::Skill) }
            </div>
            { body }
            <Button label="Save tile" onclick={on_save} />
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(tile: Tile) -> String {
        let props = Props {
            id: 3,
            tile,
            stats: None,
            on_save: Callback::noop(),
            on_close: Callback::noop(),
        };
        block_on(LocalServerRenderer::<TileEditor>::with_props(props).render())
    }

    #[test]
    fn custom_tile_opens_on_the_custom_surface() {
        let mut tile = Tile::placeholder(3);
        tile.content = "Fire cape".to_string();
        let html = render(tile);
        assert!(html.contains("Fire cape"));
        assert!(html.contains("tile-editor__mode--active"));
        assert!(html.contains("Target"));
    }

    #[test]
    fn skill_tile_opens_with_its_skill_selected() {
        let mut tile = Tile::placeholder(3);
        tile.kind = TileKind::Skill {
            skill: Skill::Runecrafting,
            current_level: 50,
            goal_level: 77,
        };
        let html = render(tile);
        assert!(html.contains("Goal level"));
        assert!(html.contains("77"));
        assert!(html.contains("Runecraft"));
    }

    #[test]
    fn skill_surface_never_offers_overall() {
        let mut tile = Tile::placeholder(3);
        tile.kind = TileKind::Skill {
            skill: Skill::Attack,
            current_level: 1,
            goal_level: 99,
        };
        let html = render(tile);
        assert!(!html.contains("value=\"overall\""));
    }
}
