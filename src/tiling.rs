//! The tetromino tiling puzzle: a toroidal grid to be covered exactly by
//! tetromino placements, and the completed tiling produced by the solver.

use crate::{coord::Coord, placement::PolyominoPlacement, polyomino::Polyomino, solver::Solver};
use rand::{seq::SliceRandom, Rng};

/// An instance of the tetromino tiling puzzle: a `width` × `height` toroidal
/// grid together with the shape catalogue and the shuffled pool of candidate
/// placements the solver draws from.
#[derive(Debug)]
pub struct TetrominoTiling {
    /// Width of the grid in cells.
    pub width: usize,
    /// Height of the grid in cells.
    pub height: usize,
    /// The deduplicated shape catalogue placements are drawn from.
    pub shapes: Vec<Polyomino>,
    /// Every in-range placement of every catalogue shape, in shuffled
    /// order.
    pub placements: Vec<PolyominoPlacement>,
}

impl TetrominoTiling {
    /// Create a puzzle over the full oriented tetromino catalogue.
    ///
    /// The placement pool is shuffled with `rng`, which randomizes which of
    /// the many valid tilings the solver produces first; a fixed seed gives
    /// a reproducible outcome.
    ///
    /// # Panics
    ///  - If `width` or `height` is zero
    pub fn new<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Self {
        Self::with_shapes(width, height, Polyomino::tetrominoes(), rng)
    }

    /// Create a puzzle over a caller-supplied shape catalogue.
    ///
    /// # Panics
    ///  - If `width` or `height` is zero
    ///  - If `shapes` is empty
    pub fn with_shapes<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        shapes: Vec<Polyomino>,
        rng: &mut R,
    ) -> Self {
        assert!(width > 0 && height > 0, "Grid dimensions must be positive.");
        assert!(!shapes.is_empty(), "Shape catalogue cannot be empty.");

        let mut placements: Vec<_> = shapes
            .iter()
            .flat_map(|shape| {
                Coord::cells(width, height).map(move |anchor| PolyominoPlacement {
                    polyomino: shape.clone(),
                    anchor,
                })
            })
            .filter(PolyominoPlacement::is_in_range)
            .collect();
        placements.shuffle(rng);

        log::debug!(
            "Generated [{}] in-range placements from [{}] shapes for a [{}x{}] grid.",
            placements.len(),
            shapes.len(),
            width,
            height
        );

        Self {
            width,
            height,
            shapes,
            placements,
        }
    }

    /// Return a solver over this puzzle's placement pool.
    pub fn solver(&self) -> Solver<'_> {
        Solver::new(self)
    }
}

/// A completed tiling: an immutable snapshot of the solved board.
///
/// `grid[c]` is the piece index covering cell `c` (row-major), and
/// `placements[i]` is the placement that produced piece `i`, so
/// `grid[c] == i` exactly when cell `c` is covered by `placements[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tiling {
    /// Piece index per cell, in row-major order.
    pub grid: Vec<usize>,
    /// The placements that produced the tiling, ordered by piece index.
    pub placements: Vec<PolyominoPlacement>,
}

impl Tiling {
    /// Number of pieces in the tiling.
    pub fn piece_count(&self) -> usize {
        self.placements.len()
    }

    /// The piece index covering the given cell.
    pub fn piece_at(&self, cell: Coord) -> usize {
        self.grid[cell.index()]
    }
}
