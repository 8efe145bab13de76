use crate::{array::Array2D, dims::Dims, maze::tile::Tile};

/// A board of wall and passage tiles.
///
/// Mutation is crate-private: once a generator hands a `Grid` out it is
/// read-only, so routes computed over it can never be invalidated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Array2D<Tile>,
}

impl Grid {
    pub(crate) fn new(size: Dims) -> Self {
        assert!(size.all_positive(), "grid size must be positive: {:?}", size);

        Grid {
            tiles: Array2D::new(Tile::Wall, size.0 as usize, size.1 as usize),
        }
    }

    pub fn size(&self) -> Dims {
        self.tiles.size()
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        let size = self.size();
        0 <= pos.0 && pos.0 < size.0 && 0 <= pos.1 && pos.1 < size.1
    }

    pub fn get(&self, pos: Dims) -> Option<Tile> {
        self.tiles.get(pos).copied()
    }

    /// `false` for out-of-bounds positions, which lets callers probe
    /// neighbours without a separate bounds check.
    pub fn is_passage(&self, pos: Dims) -> bool {
        self.get(pos).is_some_and(Tile::is_passage)
    }

    /// Where routes start: the top-left corner.
    pub fn entrance(&self) -> Dims {
        Dims::ZERO
    }

    /// Where routes end: the bottom-right corner.
    pub fn exit(&self) -> Dims {
        self.size() - Dims::ONE
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        self.tiles.iter_pos()
    }

    pub(crate) fn carve(&mut self, pos: Dims) {
        self.tiles[pos] = Tile::Passage;
    }
}

impl std::ops::Index<Dims> for Grid {
    type Output = Tile;

    fn index(&self, index: Dims) -> &Self::Output {
        &self.tiles[index]
    }
}

#[cfg(test)]
mod tests {
    use super::Grid;
    use crate::{dims::Dims, maze::tile::Tile};

    #[test]
    fn new_grid_is_all_walls() {
        let grid = Grid::new(Dims(3, 3));
        assert!(grid.iter_pos().all(|pos| grid[pos] == Tile::Wall));
    }

    #[test]
    fn carve_flips_single_tile() {
        let mut grid = Grid::new(Dims(3, 3));
        grid.carve(Dims(1, 2));
        assert!(grid.is_passage(Dims(1, 2)));
        assert!(!grid.is_passage(Dims(1, 1)));
    }

    #[test]
    fn probing_outside_the_board_is_a_wall() {
        let grid = Grid::new(Dims(3, 3));
        assert!(!grid.is_passage(Dims(-1, 0)));
        assert!(!grid.is_passage(Dims(0, 3)));
        assert_eq!(grid.get(Dims(3, 3)), None);
    }

    #[test]
    fn endpoints_are_the_corners() {
        let grid = Grid::new(Dims(5, 5));
        assert_eq!(grid.entrance(), Dims(0, 0));
        assert_eq!(grid.exit(), Dims(4, 4));
    }
}
