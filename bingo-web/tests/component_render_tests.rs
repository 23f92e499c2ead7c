use bingo_core::{BoardRecord, BoardState, Skill, Tile, TileKind, TileRecord};
use bingo_web::drag::{DragOutcome, DragTracker};
use futures::executor::block_on;
use yew::prelude::*;
use yew::LocalServerRenderer;

fn sample_record() -> BoardRecord {
    let mut tiles = Vec::new();
    for position in 0..4 {
        let mut tile = Tile::placeholder(position + 1);
        tile.content = format!("goal {position}");
        tiles.push(TileRecord::from_tile(position, &tile));
    }
    let mut skill = Tile::placeholder(1);
    skill.content = "Slayer".to_string();
    skill.kind = TileKind::Skill {
        skill: Skill::Slayer,
        current_level: 87,
        goal_level: 99,
    };
    tiles[0] = TileRecord::from_tile(0, &skill);
    BoardRecord {
        name: "goals".to_string(),
        title: "Season goals".to_string(),
        rows: 2,
        columns: 2,
        tiles,
        player: None,
    }
}

#[derive(Properties, PartialEq)]
struct BoardHarnessProps {
    record: BoardRecord,
    /// Drag interaction replayed against the board before rendering.
    #[prop_or_default]
    drag_path: Vec<(f64, f64)>,
    #[prop_or_default]
    drag_from: Option<u32>,
    #[prop_or_default]
    drag_over: Option<u32>,
}

#[function_component(BoardHarness)]
fn board_harness(props: &BoardHarnessProps) -> Html {
    let mut board = BoardState::default();
    props
        .record
        .load_into(&mut board)
        .unwrap_or_else(|err| panic!("record should load: {err}"));

    if let Some(from) = props.drag_from {
        let mut tracker = DragTracker::new();
        tracker.press(from, 0.0, 0.0);
        for (x, y) in &props.drag_path {
            tracker.travel(*x, *y);
        }
        tracker.hover(props.drag_over);
        match tracker.release() {
            Some(DragOutcome::Dropped { from, to }) => board.move_tile(from, to),
            Some(DragOutcome::Click(_) | DragOutcome::Cancelled) | None => {}
        }
    }

    let tiles = board.tiles_in_order();
    html! {
        <ol>
            { for tiles.iter().map(|tile| html! { <li>{ tile.content.clone() }</li> }) }
        </ol>
    }
}

#[test]
fn loaded_board_renders_tiles_in_position_order() {
    let props = BoardHarnessProps {
        record: sample_record(),
        drag_path: Vec::new(),
        drag_from: None,
        drag_over: None,
    };
    let html = block_on(LocalServerRenderer::<BoardHarness>::with_props(props).render());
    let slayer = html.find("Slayer").unwrap_or_else(|| panic!("missing skill tile"));
    let goal1 = html.find("goal 1").unwrap_or_else(|| panic!("missing goal 1"));
    assert!(slayer < goal1);
}

#[test]
fn completed_drag_reorders_the_rendered_grid() {
    let props = BoardHarnessProps {
        record: sample_record(),
        drag_path: vec![(40.0, 0.0)],
        drag_from: Some(1),
        drag_over: Some(3),
    };
    let html = block_on(LocalServerRenderer::<BoardHarness>::with_props(props).render());
    let slayer = html.find("Slayer").unwrap_or_else(|| panic!("missing skill tile"));
    let goal2 = html.find("goal 2").unwrap_or_else(|| panic!("missing goal 2"));
    assert!(goal2 < slayer, "dragged tile should render after its drop slot");
}

#[test]
fn sub_threshold_drag_leaves_the_grid_unchanged() {
    let props = BoardHarnessProps {
        record: sample_record(),
        drag_path: vec![(2.0, 2.0)],
        drag_from: Some(1),
        drag_over: Some(3),
    };
    let html = block_on(LocalServerRenderer::<BoardHarness>::with_props(props).render());
    let slayer = html.find("Slayer").unwrap_or_else(|| panic!("missing skill tile"));
    let goal1 = html.find("goal 1").unwrap_or_else(|| panic!("missing goal 1"));
    assert!(slayer < goal1);
}
