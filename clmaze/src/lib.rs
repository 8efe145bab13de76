//! **clmaze** is the core of the lmaze tool: the grid data model,
//! depth-first maze carving and wall-follower route finding.

pub mod array;
pub mod dims;
pub mod maze;
