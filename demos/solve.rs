//! Generate one tetromino tiling of the reference 10×20 toroidal grid and
//! print it, one class letter per cell.
//! Usage:
//!
//! ```bash
//! cargo run --release --example solve [seed]
//! ```

use rand::{rngs::StdRng, SeedableRng};
use tetromino_tiling::{Coord, TetrominoTiling, Tiling};

const WIDTH: usize = 10;
const HEIGHT: usize = 20;

fn print_tiling(tiling: &Tiling) {
    for y in 0..HEIGHT {
        let row: String = (0..WIDTH)
            .map(|x| {
                let piece_ix = tiling.piece_at(Coord::new(WIDTH, HEIGHT, x, y));
                tiling.placements[piece_ix].polyomino.letter().unwrap_or('?')
            })
            .collect();
        println!("{}", row);
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let seed: u64 = match args.get(1) {
        Some(raw) => match raw.parse() {
            Ok(seed) => seed,
            Err(_) => {
                eprintln!("invalid seed");
                std::process::exit(1);
            }
        },
        None => rand::random(),
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let puzzle = TetrominoTiling::new(WIDTH, HEIGHT, &mut rng);
    match puzzle.solver().next() {
        Some(tiling) => {
            println!("seed {}", seed);
            print_tiling(&tiling);
        }
        None => {
            eprintln!("no tiling found");
            std::process::exit(1);
        }
    }
}
