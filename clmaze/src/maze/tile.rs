/// State of a single board cell. Corridors are carved by flipping
/// `Wall` cells to `Passage` during generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tile {
    #[default]
    Wall,
    Passage,
}

impl Tile {
    pub fn is_passage(self) -> bool {
        matches!(self, Tile::Passage)
    }

    pub fn is_wall(self) -> bool {
        matches!(self, Tile::Wall)
    }
}
