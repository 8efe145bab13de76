use clmaze::{dims::Dims, maze::Grid};
use crossterm::style::Stylize;
use hashbrown::HashSet;

/// Prints the board to stdout: walls as solid blocks, passages as blanks,
/// the route as highlighted dots. Two characters per tile so the board
/// comes out roughly square in a terminal.
pub fn draw_board(grid: &Grid, route: &[Dims]) {
    let on_route: HashSet<Dims> = route.iter().copied().collect();
    let size = grid.size();

    for y in 0..size.1 {
        for x in 0..size.0 {
            let pos = Dims(x, y);
            if !grid.is_passage(pos) {
                print!("██");
            } else if on_route.contains(&pos) {
                print!("{}", "··".yellow());
            } else {
                print!("  ");
            }
        }
        println!();
    }
}

pub fn list_route(route: &[Dims]) {
    let text = route
        .iter()
        .map(|pos| format!("({}, {})", pos.0, pos.1))
        .collect::<Vec<_>>()
        .join(" ");

    println!("Path: {}", text);
}
