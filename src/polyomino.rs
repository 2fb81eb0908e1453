//! [Polyomino](https://en.wikipedia.org/wiki/Polyomino) shapes represented
//! as canonical sets of relative cell offsets, with rotation and reflection
//! transforms and the oriented tetromino catalogue.

/// A polyomino shape, stored as a canonical set of relative cell offsets.
///
/// Offsets are normalized so that the smallest occupied column and row are
/// both zero, and kept sorted; two shapes compare equal exactly when they
/// cover the same set of cells. A rotation or reflection that maps a shape
/// onto itself therefore produces an equal value (the square tetromino is
/// equal to all of its rotations).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Polyomino {
    cells: Vec<(usize, usize)>,
}

impl Polyomino {
    /// Parse a shape from a compact textual pattern: rows separated by `,`,
    /// `#` for an occupied cell and `.` for padding.
    ///
    /// # Panics
    ///  - If the pattern contains a character other than `#`, `.` or `,`
    ///  - If the pattern contains no occupied cell
    pub fn from_pattern(pattern: &str) -> Self {
        let mut cells = Vec::new();
        for (y, row) in pattern.split(',').enumerate() {
            for (x, symbol) in row.chars().enumerate() {
                match symbol {
                    '#' => cells.push((x, y)),
                    '.' => {}
                    other => panic!("Unrecognized symbol [{}] in shape pattern.", other),
                }
            }
        }
        assert!(!cells.is_empty(), "Shape pattern has no occupied cells.");

        Self::normalized(cells)
    }

    /// Build the catalogue of all oriented
    /// [tetrominoes](https://en.wikipedia.org/wiki/Tetromino): every
    /// rotation and reflection of the five base patterns, deduplicated by
    /// canonical equality. The catalogue has 19 entries; symmetric shapes
    /// contribute fewer than 8 orientations each.
    pub fn tetrominoes() -> Vec<Self> {
        const BASE_PATTERNS: [&str; 5] = ["####", "##,##", "###,#", "##,.##", "###,.#"];

        let mut shapes: Vec<Self> = BASE_PATTERNS
            .iter()
            .map(|pattern| Self::from_pattern(pattern))
            .flat_map(|shape| Self::rotations(&shape))
            .flat_map(|shape| {
                let reflected = shape.reflect();
                [shape, reflected]
            })
            .collect();
        shapes.sort();
        shapes.dedup();
        shapes
    }

    /// The canonical offset list, sorted, with non-negative components.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Return true if the shape occupies the offset `(x, y)`.
    pub fn has(&self, x: usize, y: usize) -> bool {
        self.cells.binary_search(&(x, y)).is_ok()
    }

    /// Width of the shape's bounding box.
    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(x, _)| x).max().map_or(0, |x| x + 1)
    }

    /// Height of the shape's bounding box.
    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(_, y)| y).max().map_or(0, |y| y + 1)
    }

    /// Rotate the shape 90° clockwise and renormalize.
    ///
    /// Four successive rotations yield a shape equal to the original.
    pub fn rotate_clockwise(&self) -> Self {
        let max_y = self.cells.iter().map(|&(_, y)| y).max().unwrap_or(0);
        Self::normalized(self.cells.iter().map(|&(x, y)| (max_y - y, x)).collect())
    }

    /// Mirror the shape across its vertical axis and renormalize.
    ///
    /// Two successive reflections yield a shape equal to the original.
    pub fn reflect(&self) -> Self {
        let max_x = self.cells.iter().map(|&(x, _)| x).max().unwrap_or(0);
        Self::normalized(self.cells.iter().map(|&(x, y)| (max_x - x, y)).collect())
    }

    /// Classify a tetromino into its one-sided class letter (`T`, `J`, `Z`,
    /// `O`, `S`, `L` or `I`), or `None` for shapes that are not
    /// tetrominoes.
    ///
    /// The classification is invariant under rotation; reflection
    /// distinguishes `S` from `Z` and `L` from `J`.
    pub fn letter(&self) -> Option<char> {
        let mut smallest = self.clone();
        let mut current = self.clone();
        for _ in 0..3 {
            current = current.rotate_clockwise();
            if current.cells < smallest.cells {
                smallest = current.clone();
            }
        }

        match smallest.cells.as_slice() {
            [(0, 0), (0, 1), (0, 2), (0, 3)] => Some('I'),
            [(0, 0), (0, 1), (1, 0), (1, 1)] => Some('O'),
            [(0, 0), (0, 1), (0, 2), (1, 1)] => Some('T'),
            [(0, 0), (0, 1), (0, 2), (1, 2)] => Some('L'),
            [(0, 0), (0, 1), (0, 2), (1, 0)] => Some('J'),
            [(0, 0), (1, 0), (1, 1), (2, 1)] => Some('Z'),
            [(0, 0), (0, 1), (1, 1), (1, 2)] => Some('S'),
            _ => None,
        }
    }

    /// All four rotations of a shape, starting with the shape itself.
    fn rotations(shape: &Self) -> Vec<Self> {
        let mut rotations = vec![shape.clone()];
        let mut current = shape.clone();
        for _ in 0..3 {
            current = current.rotate_clockwise();
            rotations.push(current.clone());
        }
        rotations
    }

    /// Translate offsets so the smallest occupied column and row are zero,
    /// then sort into the canonical order.
    fn normalized(mut cells: Vec<(usize, usize)>) -> Self {
        let min_x = cells.iter().map(|&(x, _)| x).min().unwrap_or(0);
        let min_y = cells.iter().map(|&(_, y)| y).min().unwrap_or(0);
        for cell in &mut cells {
            cell.0 -= min_x;
            cell.1 -= min_y;
        }
        cells.sort_unstable();
        Self { cells }
    }
}
