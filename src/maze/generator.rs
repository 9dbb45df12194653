//! Maze generation using randomized depth-first backtracking.
//!
//! The generator carves a perfect maze over a rectangular grid: starting
//! from the north-west cell it walks to a random unvisited neighbor, opening
//! the wall pair between them, and backtracks along an explicit stack when
//! it runs out of fresh neighbors. The result is a spanning tree of the grid
//! graph, so every cell is reachable and there is exactly one path between
//! any two cells.
//!
//! Randomness is injected by the caller, which makes generation reproducible
//! under a seeded generator.

use rand::Rng;
use rand::seq::SliceRandom;

use super::{Cell, Direction, Maze};
use crate::error::GameError;

/// Generates a perfect `width` x `height` maze.
///
/// # Arguments
/// * `width` - Grid width in cells, at least 1
/// * `height` - Grid height in cells, at least 1
/// * `rng` - Source of randomness; a seeded generator yields a
///   deterministic maze
///
/// # Errors
/// Returns [`GameError::InvalidDimensions`] when either side is zero.
/// Valid dimensions never fail.
///
/// A 1x1 maze is valid and comes out with all four walls closed;
/// connectivity trivially holds.
pub fn generate<R: Rng>(width: usize, height: usize, rng: &mut R) -> Result<Maze, GameError> {
    if width == 0 || height == 0 {
        return Err(GameError::InvalidDimensions { width, height });
    }

    let mut maze = Maze::closed(width, height);
    let mut visited = vec![false; width * height];
    let mut stack: Vec<Cell> = Vec::new();
    let mut current = Cell::new(0, 0);
    visited[0] = true;

    loop {
        let candidates: Vec<(Direction, Cell)> = Direction::ALL
            .into_iter()
            .filter_map(|dir| {
                maze.neighbor(current, dir)
                    .filter(|next| !visited[next.z * width + next.x])
                    .map(|next| (dir, next))
            })
            .collect();

        if let Some(&(dir, next)) = candidates.choose(rng) {
            maze.open_wall(current, dir);
            stack.push(current);
            visited[next.z * width + next.x] = true;
            current = next;
        } else if let Some(previous) = stack.pop() {
            current = previous;
        } else {
            break;
        }
    }

    log::debug!("generated {}x{} maze", width, height);
    Ok(maze)
}
