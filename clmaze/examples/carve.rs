use std::env;

use clmaze::{
    dims::Dims,
    maze::algorithms::{DepthFirstSearch, MazeAlgorithm, Random},
};

use rand::{thread_rng, Rng as _, SeedableRng as _};

fn main() {
    let args = env::args()
        .skip(1)
        .take(2)
        .map(|s| s.parse())
        .collect::<Result<Vec<i64>, _>>()
        .expect("Expected integers: [side] [seed]");

    let side = args.first().copied().unwrap_or(21) as i32;
    let input_seed = args.get(1).copied().map(|seed| seed as u64);
    let seed = input_seed.unwrap_or_else(|| thread_rng().gen());

    if input_seed.is_none() {
        println!("Seed: {}", seed);
    }

    let mut rng = Random::seed_from_u64(seed);
    let grid = DepthFirstSearch::generate(Dims(side, side), &mut rng).expect("side must be positive");

    for y in 0..side {
        for x in 0..side {
            print!("{}", if grid.is_passage(Dims(x, y)) { "  " } else { "██" });
        }
        println!();
    }
}
