//! [Backtracking](https://en.wikipedia.org/wiki/Backtracking) search that
//! assigns placements from the puzzle's pool until the board is exactly
//! covered, selecting at each step the uncovered cell with the fewest
//! remaining candidates.

use crate::{
    coord::Coord,
    tiling::{TetrominoTiling, Tiling},
};
use std::collections::VecDeque;

/// Solver that iteratively returns complete tilings of the puzzle grid.
///
/// The solver is an [`Iterator`]; each call to [`next`](Iterator::next)
/// resumes the depth-first search where the previous solution left off, so
/// a caller that needs only one tiling stops the search as soon as the
/// first one is found. An exhausted iterator means the configuration admits
/// no (further) tiling; for a caller requiring a tiling, an immediate
/// `None` is a fatal configuration error, not a condition to retry.
#[derive(Debug)]
pub struct Solver<'p> {
    puzzle: &'p TetrominoTiling,

    // Values used to track the state of the search
    board: Vec<Option<usize>>,
    partial: Vec<usize>,
    stack: Vec<Frame>,
}

#[derive(Debug)]
enum FrameState {
    // Before committing the frame's current candidate
    Cover,
    // After the search below it returns, before undoing the commit
    Uncover,
}

#[derive(Debug)]
struct Frame {
    // Placements (as indices into the puzzle pool) still usable at this
    // depth
    pool: Vec<usize>,
    // Positions in `pool` covering the selected cell, tried front to back
    candidates: VecDeque<usize>,
    state: FrameState,
}

// Outcome of scanning the board for the next cell to cover.
#[derive(Debug)]
enum Scan {
    // Every cell is covered
    Solved,
    // Some uncovered cell has no remaining candidate
    Infeasible,
    // Candidate pool positions for the uncovered cell with the fewest of
    // them, in the order they should be tried
    Select(VecDeque<usize>),
}

impl<'p> Solver<'p> {
    /// Create a new `Solver` over the given puzzle.
    pub fn new(puzzle: &'p TetrominoTiling) -> Self {
        let mut solver = Self {
            puzzle,
            board: vec![None; puzzle.width * puzzle.height],
            partial: Vec::new(),
            stack: Vec::new(),
        };
        solver.push_root_frame();
        solver
    }

    /// Reset all search state; the next solution returned will be the first
    /// one again.
    pub fn reset(&mut self) {
        self.board.fill(None);
        self.partial.clear();
        self.stack.clear();
        self.push_root_frame();
    }

    fn push_root_frame(&mut self) {
        let pool: Vec<usize> = (0..self.puzzle.placements.len()).collect();

        // An unsolvable configuration leaves the stack empty, and the
        // iterator yields nothing.
        if let Scan::Select(candidates) = Self::scan(&self.board, self.puzzle, &pool) {
            self.stack.push(Frame {
                pool,
                candidates,
                state: FrameState::Cover,
            });
        }
    }

    /// Walk every cell in row-major order; for each uncovered cell collect
    /// the pool placements that would cover it, keeping the cell with the
    /// fewest. A cell with a single candidate ends the walk early, since
    /// the forced move must be made eventually.
    fn scan(board: &[Option<usize>], puzzle: &TetrominoTiling, pool: &[usize]) -> Scan {
        let mut best: Option<Vec<usize>> = None;

        for cell in Coord::cells(puzzle.width, puzzle.height) {
            if board[cell.index()].is_some() {
                continue;
            }

            let candidates: Vec<usize> = pool
                .iter()
                .enumerate()
                .filter(|&(_, &placement_ix)| {
                    let placement = &puzzle.placements[placement_ix];
                    let dx = (cell.x() + puzzle.width - placement.anchor.x()) % puzzle.width;
                    let dy = (cell.y() + puzzle.height - placement.anchor.y()) % puzzle.height;
                    placement.polyomino.has(dx, dy)
                })
                .map(|(pool_position, _)| pool_position)
                .collect();

            if candidates.is_empty() {
                return Scan::Infeasible;
            }

            let forced = candidates.len() == 1;
            if best
                .as_ref()
                .map_or(true, |current| candidates.len() < current.len())
            {
                best = Some(candidates);
            }
            if forced {
                break;
            }
        }

        match best {
            None => Scan::Solved,
            // Reverse index order, so removals from the pool leave the
            // positions of untried candidates intact
            Some(candidates) => Scan::Select(candidates.into_iter().rev().collect()),
        }
    }

    /// Return all remaining tilings.
    ///
    /// Only reasonable on small grids; the reference 10×20 grid admits far
    /// too many tilings to enumerate.
    pub fn all_solutions(&mut self) -> Vec<Tiling> {
        self.collect()
    }

    /// Compute up to the next complete tiling, returning `None` if there
    /// are no more.
    pub fn next_solution(&mut self) -> Option<Tiling> {
        enum StackOp {
            Push(Frame),
            Pop,
            None,
        }

        while !self.stack.is_empty() {
            let curr_frame = self.stack.last_mut().unwrap();

            let (stack_op, found) = match curr_frame.state {
                // Commit the frame's current candidate: mark its cells with
                // the next piece index and narrow the pool for the level
                // below.
                FrameState::Cover => {
                    let pool_position = *curr_frame.candidates.front().unwrap();
                    let placement_ix = curr_frame.pool.remove(pool_position);
                    let placement = &self.puzzle.placements[placement_ix];

                    let piece_ix = self.partial.len();
                    for cell in placement.covered_cells() {
                        self.board[cell.index()] = Some(piece_ix);
                    }
                    self.partial.push(placement_ix);

                    let child_pool: Vec<usize> = curr_frame
                        .pool
                        .iter()
                        .copied()
                        .filter(|&ix| {
                            self.puzzle.placements[ix]
                                .covered_cells()
                                .all(|cell| self.board[cell.index()].is_none())
                        })
                        .collect();

                    curr_frame.state = FrameState::Uncover;

                    match Self::scan(&self.board, self.puzzle, &child_pool) {
                        Scan::Solved => {
                            let tiling = Tiling {
                                grid: self.board.iter().map(|piece| piece.unwrap()).collect(),
                                placements: self
                                    .partial
                                    .iter()
                                    .map(|&ix| self.puzzle.placements[ix].clone())
                                    .collect(),
                            };
                            log::debug!(
                                "Found a complete tiling using [{}] pieces.",
                                tiling.placements.len()
                            );
                            (StackOp::None, Some(tiling))
                        }
                        Scan::Infeasible => (StackOp::None, None),
                        Scan::Select(candidates) => (
                            StackOp::Push(Frame {
                                pool: child_pool,
                                candidates,
                                state: FrameState::Cover,
                            }),
                            None,
                        ),
                    }
                }
                // Undo the commit and move on to the frame's next
                // candidate.
                FrameState::Uncover => {
                    let _ = curr_frame.candidates.pop_front();
                    let placement_ix = self.partial.pop().unwrap();
                    for cell in self.puzzle.placements[placement_ix].covered_cells() {
                        self.board[cell.index()] = None;
                    }

                    if curr_frame.candidates.is_empty() {
                        (StackOp::Pop, None)
                    } else {
                        curr_frame.state = FrameState::Cover;
                        (StackOp::None, None)
                    }
                }
            };

            match stack_op {
                StackOp::Push(frame) => {
                    self.stack.push(frame);
                }
                StackOp::Pop => {
                    self.stack.pop();
                }
                StackOp::None => {}
            }

            if let Some(tiling) = found {
                return Some(tiling);
            }
        }

        None
    }
}

impl Iterator for Solver<'_> {
    type Item = Tiling;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_solution()
    }
}
