//! Pointer-drag state machine for reordering board tiles.
//!
//! A press arms the tracker; the drag only activates once the pointer has
//! travelled the activation distance, so a press-and-release inside that
//! radius stays a click and opens the tile editor instead.

use bingo_core::{TileId, DRAG_ACTIVATION_DISTANCE_PX};

/// Outcome of releasing the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// The pointer never left the activation radius.
    Click(TileId),
    /// An active drag ended over another tile.
    Dropped { from: TileId, to: TileId },
    /// An active drag ended outside any tile.
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Press {
    tile: TileId,
    origin: (f64, f64),
    active: bool,
    over: Option<TileId>,
}

/// Tracks one pointer interaction at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragTracker {
    press: Option<Press>,
}

impl DragTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the tracker on pointer-down over a tile.
    pub fn press(&mut self, tile: TileId, x: f64, y: f64) {
        self.press = Some(Press {
            tile,
            origin: (x, y),
            active: false,
            over: Some(tile),
        });
    }

    /// Feed pointer movement; returns true once the drag is active so the
    /// view can lift the tile out of the grid flow.
    pub fn travel(&mut self, x: f64, y: f64) -> bool {
        let Some(press) = self.press.as_mut() else {
            return false;
        };
        if !press.active {
            let dx = x - press.origin.0;
            let dy = y - press.origin.1;
            if (dx * dx + dy * dy).sqrt() >= DRAG_ACTIVATION_DISTANCE_PX {
                press.active = true;
            }
        }
        press.active
    }

    /// Record which tile the pointer is currently over, if any.
    pub fn hover(&mut self, tile: Option<TileId>) {
        if let Some(press) = self.press.as_mut() {
            press.over = tile;
        }
    }

    /// Tile being dragged, once the drag is active.
    #[must_use]
    pub fn dragging(&self) -> Option<TileId> {
        self.press.filter(|p| p.active).map(|p| p.tile)
    }

    /// Current drop target while a drag is active.
    #[must_use]
    pub fn drop_target(&self) -> Option<TileId> {
        self.press.filter(|p| p.active).and_then(|p| p.over)
    }

    /// Resolve the interaction on pointer-up.
    pub fn release(&mut self) -> Option<DragOutcome> {
        let press = self.press.take()?;
        if !press.active {
            return Some(DragOutcome::Click(press.tile));
        }
        match press.over {
            Some(to) if to != press.tile => Some(DragOutcome::Dropped {
                from: press.tile,
                to,
            }),
            _ => Some(DragOutcome::Cancelled),
        }
    }

    /// Abandon the interaction (pointer cancel, focus loss).
    pub fn cancel(&mut self) {
        self.press = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_press_is_a_click() {
        let mut tracker = DragTracker::new();
        tracker.press(3, 100.0, 100.0);
        assert!(!tracker.travel(102.0, 102.0));
        assert_eq!(tracker.release(), Some(DragOutcome::Click(3)));
        assert_eq!(tracker.release(), None);
    }

    #[test]
    fn crossing_the_activation_radius_starts_a_drag() {
        let mut tracker = DragTracker::new();
        tracker.press(1, 0.0, 0.0);
        assert!(!tracker.travel(3.0, 3.9));
        assert!(tracker.travel(4.0, 4.0));
        assert_eq!(tracker.dragging(), Some(1));
    }

    #[test]
    fn drop_over_another_tile_reports_the_pair() {
        let mut tracker = DragTracker::new();
        tracker.press(2, 0.0, 0.0);
        tracker.travel(10.0, 0.0);
        tracker.hover(Some(7));
        assert_eq!(tracker.drop_target(), Some(7));
        assert_eq!(
            tracker.release(),
            Some(DragOutcome::Dropped { from: 2, to: 7 })
        );
    }

    #[test]
    fn drop_on_self_or_nowhere_cancels() {
        let mut tracker = DragTracker::new();
        tracker.press(2, 0.0, 0.0);
        tracker.travel(10.0, 0.0);
        tracker.hover(Some(2));
        assert_eq!(tracker.release(), Some(DragOutcome::Cancelled));

        tracker.press(2, 0.0, 0.0);
        tracker.travel(10.0, 0.0);
        tracker.hover(None);
        assert_eq!(tracker.release(), Some(DragOutcome::Cancelled));
    }

    #[test]
    fn cancel_discards_the_interaction() {
        let mut tracker = DragTracker::new();
        tracker.press(5, 0.0, 0.0);
        tracker.travel(20.0, 0.0);
        tracker.cancel();
        assert_eq!(tracker.release(), None);
        assert_eq!(tracker.dragging(), None);
    }

    #[test]
    fn drag_stays_active_after_returning_near_the_origin() {
        let mut tracker = DragTracker::new();
        tracker.press(4, 0.0, 0.0);
        tracker.travel(8.0, 0.0);
        assert!(tracker.travel(1.0, 0.0));
    }
}
