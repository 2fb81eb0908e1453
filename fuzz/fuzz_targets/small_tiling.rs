#![no_main]

use libfuzzer_sys::fuzz_target;
use rand::{rngs::StdRng, SeedableRng};
use tetromino_tiling::TetrominoTiling;

fuzz_target!(|input: (u8, u8, u64)| {
    let (raw_width, raw_height, seed) = input;
    let width = usize::from(raw_width % 6) + 1;
    let height = usize::from(raw_height % 6) + 1;

    let mut rng = StdRng::seed_from_u64(seed);
    let puzzle = TetrominoTiling::new(width, height, &mut rng);

    if let Some(tiling) = puzzle.solver().next() {
        assert_eq!(tiling.grid.len(), width * height);
        assert_eq!(tiling.placements.len() * 4, width * height);
        for &piece_ix in &tiling.grid {
            assert!(piece_ix < tiling.placements.len());
        }
    }
});
