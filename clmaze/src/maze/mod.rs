pub mod algorithms;
pub mod grid;
pub mod solve;
pub mod tile;

pub use grid::Grid;
pub use solve::{Facing, SolveError, WallFollower};
pub use tile::Tile;
