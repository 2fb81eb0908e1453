mod common;

use common::{assert_valid_tiling, format_tiling};
use rand::{rngs::StdRng, SeedableRng};
use tetromino_tiling::{Polyomino, TetrominoTiling};

#[test]
fn solve_reference_grid() {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(1897);
    let puzzle = TetrominoTiling::new(10, 20, &mut rng);
    let mut solver = puzzle.solver();

    let tiling = solver.next().expect("the reference grid must be tileable");
    assert_eq!(tiling.piece_count(), 50);
    assert_valid_tiling(&puzzle, &tiling);

    let rows = format_tiling(&tiling, 10, 20);
    assert_eq!(rows.len(), 20);
    assert!(rows.iter().all(|row| row.len() == 10));
}

#[test]
fn first_tiling_is_reproducible_under_a_fixed_seed() {
    let first = {
        let mut rng = StdRng::seed_from_u64(99);
        let puzzle = TetrominoTiling::new(8, 8, &mut rng);
        puzzle.solver().next().unwrap()
    };
    let second = {
        let mut rng = StdRng::seed_from_u64(99);
        let puzzle = TetrominoTiling::new(8, 8, &mut rng);
        puzzle.solver().next().unwrap()
    };

    assert_eq!(first, second);
}

#[test]
fn restricted_catalogue_square_grid() {
    let mut rng = StdRng::seed_from_u64(4);
    let puzzle =
        TetrominoTiling::with_shapes(4, 4, vec![Polyomino::from_pattern("##,##")], &mut rng);

    let tilings = puzzle.solver().all_solutions();
    assert_eq!(tilings.len(), 1);
    assert_valid_tiling(&puzzle, &tilings[0]);

    let rows = format_tiling(&tilings[0], 4, 4);
    assert_eq!(rows, vec!["OOOO"; 4]);
}

#[test]
fn solver_yields_distinct_successive_tilings() {
    let mut rng = StdRng::seed_from_u64(21);
    let puzzle = TetrominoTiling::new(4, 4, &mut rng);

    let tilings: Vec<_> = puzzle.solver().take(2).collect();
    assert_eq!(tilings.len(), 2);
    assert_ne!(tilings[0], tilings[1]);
    for tiling in &tilings {
        assert_valid_tiling(&puzzle, tiling);
    }
}

#[test]
fn unsolvable_configurations_yield_empty_sequences() {
    let mut rng = StdRng::seed_from_u64(0);

    let indivisible = TetrominoTiling::new(3, 3, &mut rng);
    assert!(indivisible.solver().next().is_none());

    let no_fit =
        TetrominoTiling::with_shapes(1, 4, vec![Polyomino::from_pattern("##,##")], &mut rng);
    assert!(no_fit.solver().next().is_none());
}
