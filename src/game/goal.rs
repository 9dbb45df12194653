//! Goal placement and proximity detection.
//!
//! The goal marker sits at the center of a corner cell. Because the maze is
//! a spanning tree every corner is reachable from the spawn, so placement
//! needs no validation pass.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::GOAL_RADIUS;
use crate::maze::{self, Cell, Maze};

/// Picks the goal cell for a session, uniformly among the grid corners.
///
/// The spawn corner (0, 0) is excluded whenever the maze has more than one
/// cell: its center is the spawn position itself, which would put the player
/// inside the victory radius before the first input. A 1x1 maze degenerates
/// to the single cell doubling as the goal.
pub fn place<R: Rng>(maze: &Maze, rng: &mut R) -> Cell {
    let spawn = Cell::new(0, 0);
    let candidates: Vec<Cell> = maze
        .corners()
        .into_iter()
        .filter(|corner| *corner != spawn)
        .collect();
    match candidates.choose(rng) {
        Some(&corner) => corner,
        None => spawn,
    }
}

/// Whether a world position is within the victory radius of the goal-cell
/// center. Height is ignored; only the floor-plane distance counts.
pub fn reached(position: [f32; 3], goal: Cell) -> bool {
    let center = maze::cell_to_world(goal, position[1]);
    let dx = position[0] - center[0];
    let dz = position[2] - center[2];
    (dx * dx + dz * dz).sqrt() < GOAL_RADIUS
}
