mod depth_first_search;

pub use depth_first_search::DepthFirstSearch;

use std::ops;

use rand::{thread_rng, Rng, SeedableRng as _};
use thiserror::Error;

use crate::{array::Array2D, dims::Dims, maze::grid::Grid};

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("invalid maze size: {0:?}")]
    InvalidSize(Dims),
}

/// A maze carving algorithm.
///
/// `generate` takes the RNG explicitly so tests can script the random
/// stream; `generate_seeded` is the everyday entry point.
pub trait MazeAlgorithm {
    fn generate<R: Rng + ?Sized>(size: Dims, rng: &mut R) -> Result<Grid, GeneratorError>;

    fn generate_seeded(size: Dims, seed: Option<u64>) -> Result<Grid, GeneratorError>
    where
        Self: Sized,
    {
        let mut rng = Random::seed_from_u64(seed.unwrap_or_else(|| thread_rng().gen()));
        Self::generate(size, &mut rng)
    }
}

/// Per-cell bool board, used as the visited set while carving.
#[derive(Debug, Clone)]
pub struct CellMask(Array2D<bool>);

impl CellMask {
    pub fn new(size: Dims) -> Self {
        Self(Array2D::new(false, size.0 as usize, size.1 as usize))
    }

    pub fn size(&self) -> Dims {
        self.0.size()
    }

    pub fn enabled_count(&self) -> usize {
        self.0.iter().filter(|&&b| b).count()
    }
}

impl ops::Index<Dims> for CellMask {
    type Output = bool;

    /// Returns the value at the given index, or `false` if the index is out of bounds.
    fn index(&self, index: Dims) -> &Self::Output {
        self.0.get(index).unwrap_or(&false)
    }
}

impl ops::IndexMut<Dims> for CellMask {
    fn index_mut(&mut self, index: Dims) -> &mut Self::Output {
        self.0
            .get_mut(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}
