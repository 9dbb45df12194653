//! Wall collision queries for continuous movement.
//!
//! Movement is continuous but the maze topology is discrete, so the only
//! question collision has to answer is whether a candidate position crosses
//! a cell boundary the walls forbid. Motion that stays inside the current
//! cell is always free; the outer boundary of the grid acts as an implicit
//! wall rather than an error.

use crate::maze::{self, Cell, Direction, Maze};

/// Decides whether the player may move from its current cell to a candidate
/// world position.
///
/// # Arguments
/// * `maze` - The maze whose walls constrain movement
/// * `from` - The cell the player currently occupies
/// * `to` - The candidate continuous position
///
/// # Rules
/// - Positions outside the grid are rejected.
/// - Staying in the same cell is always allowed.
/// - Crossing into a cardinal neighbor consults the wall flag on the
///   current cell towards the direction of travel.
/// - Crossing both axes in one step is allowed only when a fully open
///   two-step path exists through one of the two intermediate cells, so a
///   fast diagonal cannot cut through a wall corner.
/// - Anything farther than one cell per axis is rejected outright.
pub fn can_move(maze: &Maze, from: Cell, to: [f32; 3]) -> bool {
    let (tx, tz) = maze::world_to_grid(to);
    if !maze.in_bounds(tx, tz) {
        return false;
    }
    let target = Cell::new(tx as usize, tz as usize);
    let dx = tx - from.x as isize;
    let dz = tz - from.z as isize;

    if (dx, dz) == (0, 0) {
        return true;
    }
    if let Some(dir) = step_direction(dx, dz) {
        return maze.is_open(from, dir);
    }
    if dx.abs() == 1 && dz.abs() == 1 {
        return diagonal_open(maze, from, target);
    }
    false
}

/// Maps a unit cardinal step to its direction.
fn step_direction(dx: isize, dz: isize) -> Option<Direction> {
    match (dx, dz) {
        (1, 0) => Some(Direction::East),
        (-1, 0) => Some(Direction::West),
        (0, 1) => Some(Direction::South),
        (0, -1) => Some(Direction::North),
        _ => None,
    }
}

/// Whether a diagonal transition has a fully open two-step path through
/// either intermediate cell.
fn diagonal_open(maze: &Maze, from: Cell, to: Cell) -> bool {
    let step_x = if to.x > from.x {
        Direction::East
    } else {
        Direction::West
    };
    let step_z = if to.z > from.z {
        Direction::South
    } else {
        Direction::North
    };

    let via_x = maze.is_open(from, step_x) && maze.is_open(Cell::new(to.x, from.z), step_z);
    let via_z = maze.is_open(from, step_z) && maze.is_open(Cell::new(from.x, to.z), step_x);
    via_x || via_z
}
