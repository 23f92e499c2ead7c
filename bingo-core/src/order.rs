use serde::{Deserialize, Serialize};

use crate::tile::TileId;

/// Pointer travel (in CSS pixels) required before a press becomes a drag.
/// Presses that stay under it are clicks.
pub const DRAG_ACTIVATION_DISTANCE_PX: f64 = 5.0;

/// Render-order permutation of tile ids across the grid.
///
/// Always a dense permutation of `1..=len`. Resizing to a different cell
/// count regenerates the identity permutation; any custom arrangement is
/// deliberately discarded rather than merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileOrder {
    order: Vec<TileId>,
}

impl TileOrder {
    #[must_use]
    pub fn identity(len: u32) -> Self {
        TileOrder {
            order: (1..=len).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[must_use]
    pub fn ids(&self) -> &[TileId] {
        &self.order
    }

    /// Reset to the identity permutation when the cell count changes;
    /// a same-size resize keeps the arrangement.
    pub fn resize(&mut self, len: u32) {
        if self.order.len() != len as usize {
            *self = TileOrder::identity(len);
        }
    }

    /// Move `from` to the slot currently held by `to`, shifting every tile
    /// between them by one (array-move, not swap). Unknown ids are a no-op.
    pub fn move_tile(&mut self, from: TileId, to: TileId) {
        if from == to {
            return;
        }
        let (Some(from_idx), Some(to_idx)) = (self.index_of(from), self.index_of(to)) else {
            return;
        };
        let id = self.order.remove(from_idx);
        self.order.insert(to_idx, id);
    }

    #[must_use]
    pub fn index_of(&self, id: TileId) -> Option<usize> {
        self.order.iter().position(|&candidate| candidate == id)
    }

    /// Restore a persisted permutation. Rejects anything that is not a
    /// dense permutation of `1..=len`.
    #[must_use]
    pub fn from_ids(ids: Vec<TileId>) -> Option<Self> {
        let len = u32::try_from(ids.len()).ok()?;
        let mut seen = vec![false; ids.len()];
        for &id in &ids {
            if id == 0 || id > len {
                return None;
            }
            let slot = (id - 1) as usize;
            if seen[slot] {
                return None;
            }
            seen[slot] = true;
        }
        Some(TileOrder { order: ids })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_covers_the_grid() {
        let order = TileOrder::identity(6);
        assert_eq!(order.ids(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn move_forward_shifts_intermediates_left() {
        let mut order = TileOrder::identity(5);
        order.move_tile(1, 4);
        assert_eq!(order.ids(), &[2, 3, 4, 1, 5]);
    }

    #[test]
    fn move_backward_shifts_intermediates_right() {
        let mut order = TileOrder::identity(5);
        order.move_tile(4, 2);
        assert_eq!(order.ids(), &[1, 4, 2, 3, 5]);
    }

    #[test]
    fn move_to_self_and_unknown_ids_are_noops() {
        let mut order = TileOrder::identity(4);
        order.move_tile(2, 2);
        order.move_tile(9, 1);
        assert_eq!(order.ids(), &[1, 2, 3, 4]);
    }

    #[test]
    fn resize_to_new_count_resets_to_identity() {
        let mut order = TileOrder::identity(25);
        order.move_tile(25, 1);
        order.resize(20);
        assert_eq!(order.ids(), TileOrder::identity(20).ids());
    }

    #[test]
    fn same_size_resize_keeps_arrangement() {
        let mut order = TileOrder::identity(9);
        order.move_tile(9, 1);
        let before = order.clone();
        order.resize(9);
        assert_eq!(order, before);
    }

    #[test]
    fn from_ids_validates_density() {
        assert!(TileOrder::from_ids(vec![3, 1, 2]).is_some());
        assert!(TileOrder::from_ids(vec![1, 1, 2]).is_none());
        assert!(TileOrder::from_ids(vec![0, 1, 2]).is_none());
        assert!(TileOrder::from_ids(vec![1, 2, 4]).is_none());
    }
}
