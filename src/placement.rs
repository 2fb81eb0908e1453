//! A polyomino anchored at a grid coordinate.

use crate::{coord::Coord, polyomino::Polyomino};

/// A [`Polyomino`] anchored at a [`Coord`]: the shape's relative offsets,
/// added (with wrap-around) to the anchor, give the absolute grid cells the
/// placement covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PolyominoPlacement {
    /// The shape being placed.
    pub polyomino: Polyomino,
    /// The grid cell the shape's origin offset is anchored to.
    pub anchor: Coord,
}

impl PolyominoPlacement {
    /// Return an iterator over the absolute grid cells this placement
    /// covers.
    pub fn covered_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.polyomino
            .cells()
            .iter()
            .map(move |&(dx, dy)| self.anchor.add_wrap(dx as isize, dy as isize))
    }

    /// Return true if this placement covers the given cell.
    pub fn covers(&self, cell: Coord) -> bool {
        self.covered_cells().any(|covered| covered == cell)
    }

    /// Return true if any cell of this placement is wrap-adjacent to any
    /// cell of `other`.
    pub fn touches(&self, other: &Self) -> bool {
        self.covered_cells().any(|cell| {
            other
                .covered_cells()
                .any(|other_cell| cell.adjacent_to_wrap(other_cell))
        })
    }

    /// Return true if every offset of the shape stays inside the grid
    /// without wrapping when added to the anchor.
    ///
    /// Only in-range placements are used as search candidates, so each
    /// physical footprint appears under exactly one anchor.
    pub fn is_in_range(&self) -> bool {
        self.polyomino
            .cells()
            .iter()
            .all(|&(dx, dy)| self.anchor.can_move_by(dx as isize, dy as isize))
    }
}
