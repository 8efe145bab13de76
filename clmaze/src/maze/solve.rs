use thiserror::Error;

use crate::{dims::Dims, maze::grid::Grid};

/// Heading of the wall follower, in the canonical probing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Right,
    Down,
    Left,
    Up,
}

impl Facing {
    pub fn offset(self) -> Dims {
        match self {
            Facing::Right => Dims(1, 0),
            Facing::Down => Dims(0, 1),
            Facing::Left => Dims(-1, 0),
            Facing::Up => Dims(0, -1),
        }
    }

    pub fn turn_left(self) -> Facing {
        match self {
            Facing::Right => Facing::Up,
            Facing::Down => Facing::Right,
            Facing::Left => Facing::Down,
            Facing::Up => Facing::Left,
        }
    }

    pub fn turn_right(self) -> Facing {
        match self {
            Facing::Right => Facing::Down,
            Facing::Down => Facing::Left,
            Facing::Left => Facing::Up,
            Facing::Up => Facing::Right,
        }
    }

    pub fn reverse(self) -> Facing {
        match self {
            Facing::Right => Facing::Left,
            Facing::Down => Facing::Up,
            Facing::Left => Facing::Right,
            Facing::Up => Facing::Down,
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    #[error("entrance or exit is not a passage")]
    BlockedEndpoint,
    #[error("no route to the exit after {0} steps")]
    RouteNotFound(usize),
}

/// Left-hand wall follower.
///
/// Keeps one hand on the left wall: at every tile it probes left, straight,
/// right and finally back, and moves through the first open passage. On a
/// tree-shaped maze this always reaches the exit; the returned route may
/// revisit tiles and is not the shortest one.
pub struct WallFollower;

impl WallFollower {
    pub fn solve(grid: &Grid) -> Result<Vec<Dims>, SolveError> {
        let start = grid.entrance();
        let goal = grid.exit();

        if !grid.is_passage(start) || !grid.is_passage(goal) {
            return Err(SolveError::BlockedEndpoint);
        }

        let mut path = vec![start];
        if start == goal {
            return Ok(path);
        }

        let mut pos = start;
        let mut facing = Facing::Right;

        // A follower on a spanning tree walks each corridor side at most
        // once per direction, so a run that exceeds this allowance is stuck
        // in a loop or a sealed region of a malformed board.
        let allowance = grid.size().product() as usize * 4;

        for _ in 0..allowance {
            let probes = [facing.turn_left(), facing, facing.turn_right(), facing.reverse()];

            let Some(open) = probes
                .into_iter()
                .find(|dir| grid.is_passage(pos + dir.offset()))
            else {
                return Err(SolveError::RouteNotFound(path.len() - 1));
            };

            facing = open;
            pos += facing.offset();
            path.push(pos);

            if pos == goal {
                log::debug!("route found, {} steps", path.len() - 1);
                return Ok(path);
            }
        }

        Err(SolveError::RouteNotFound(allowance))
    }
}
