use std::time::Instant;

use clap::Parser;
use thiserror::Error;

use clmaze::{
    dims::Dims,
    maze::{
        algorithms::{DepthFirstSearch, GeneratorError, MazeAlgorithm},
        SolveError, WallFollower,
    },
};

mod logging;
mod render;

#[derive(Parser, Debug)]
#[clap(version, about, name = "lmaze")]
struct Args {
    #[clap(help = "Side length of the maze; odd numbers work best")]
    size: i32,
    #[clap(short, long, help = "Seed for a reproducible maze")]
    seed: Option<u64>,
    #[clap(long, action, help = "Only carve the maze, skip solving")]
    no_solve: bool,
    #[clap(short, long, action, help = "List the route coordinates")]
    path: bool,
    #[clap(short, long, action(clap::ArgAction::Count), help = "More verbose logging")]
    verbose: u8,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    #[error(transparent)]
    Solve(#[from] SolveError),
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    logging::init(args.verbose);

    if args.size > 0 && args.size % 2 == 0 {
        log::warn!("even sizes leave the exit sealed, use an odd size");
    }

    let size = Dims(args.size, args.size);

    let start = Instant::now();
    let grid = DepthFirstSearch::generate_seeded(size, args.seed)?;
    let carve_time = start.elapsed();
    log::info!("carving took {:?}", carve_time);
    println!("Maze generation time: {} ms", carve_time.as_millis());

    if args.no_solve {
        render::draw_board(&grid, &[]);
        return Ok(());
    }

    let start = Instant::now();
    let route = WallFollower::solve(&grid)?;
    let solve_time = start.elapsed();
    log::info!("solving took {:?}", solve_time);
    println!("Maze solving time: {} ms", solve_time.as_millis());

    render::draw_board(&grid, &route);

    if args.path {
        render::list_route(&route);
    }

    Ok(())
}
