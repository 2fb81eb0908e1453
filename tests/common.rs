use tetromino_tiling::{Coord, TetrominoTiling, Tiling};

/// Render a tiling as one string of class letters per row.
///
/// # Panics
///  - If any piece of the tiling is not a tetromino
#[allow(dead_code)]
pub fn format_tiling(tiling: &Tiling, width: usize, height: usize) -> Vec<String> {
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| {
                    let piece_ix = tiling.piece_at(Coord::new(width, height, x, y));
                    tiling.placements[piece_ix].polyomino.letter().unwrap()
                })
                .collect()
        })
        .collect()
}

/// Assert the structural properties every completed tiling must have: every
/// cell assigned a valid piece index, every piece covering exactly four
/// cells, and the cells of piece `i` matching the offset set of
/// `placements[i]` relative to its anchor.
#[allow(dead_code)]
pub fn assert_valid_tiling(puzzle: &TetrominoTiling, tiling: &Tiling) {
    let cell_count = puzzle.width * puzzle.height;
    assert_eq!(tiling.grid.len(), cell_count);
    assert_eq!(tiling.placements.len() * 4, cell_count);

    for (index, &piece_ix) in tiling.grid.iter().enumerate() {
        assert!(
            piece_ix < tiling.placements.len(),
            "Cell [{}] is assigned the out-of-range piece [{}].",
            index,
            piece_ix
        );
    }

    for (piece_ix, placement) in tiling.placements.iter().enumerate() {
        assert!(placement.is_in_range());

        let covered: Vec<usize> = tiling
            .grid
            .iter()
            .enumerate()
            .filter(|&(_, &piece)| piece == piece_ix)
            .map(|(index, _)| index)
            .collect();
        assert_eq!(
            covered.len(),
            4,
            "Piece [{}] covers [{}] cells.",
            piece_ix,
            covered.len()
        );

        let mut offsets: Vec<(usize, usize)> = covered
            .iter()
            .map(|&index| {
                let cell = Coord::from_index(puzzle.width, puzzle.height, index);
                (
                    (cell.x() + puzzle.width - placement.anchor.x()) % puzzle.width,
                    (cell.y() + puzzle.height - placement.anchor.y()) % puzzle.height,
                )
            })
            .collect();
        offsets.sort_unstable();
        assert_eq!(offsets.as_slice(), placement.polyomino.cells());
    }
}
