#![deny(missing_docs)]

//! Generator of exact [tetromino](https://en.wikipedia.org/wiki/Tetromino)
//! tilings of a toroidal grid, using backtracking
//! [exact cover](https://en.wikipedia.org/wiki/Exact_cover) search with a
//! fewest-candidates-first heuristic.
//!
//! The entry point is [`TetrominoTiling`], which owns the shape catalogue
//! and the shuffled placement pool; its
//! [`solver`](TetrominoTiling::solver) lazily yields complete [`Tiling`]s,
//! and callers typically keep only the first one.

pub mod coord;
pub mod placement;
pub mod polyomino;
pub mod solver;
pub mod tiling;

pub use coord::Coord;
pub use placement::PolyominoPlacement;
pub use polyomino::Polyomino;
pub use solver::Solver;
pub use tiling::{TetrominoTiling, Tiling};
