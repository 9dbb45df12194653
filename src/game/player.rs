//! Player state and per-tick movement integration.
//!
//! The player is a continuous position plus a yaw angle; its grid cell is
//! derived by flooring the position. Each simulation tick the host feeds a
//! normalized movement input, the candidate displacement is computed from
//! the current yaw, and the collision model accepts or rejects it as a
//! whole. There is no sliding along walls: a rejected step leaves the
//! position untouched for that tick.

use crate::config::{EYE_HEIGHT, MOVE_SPEED};
use crate::game::collision;
use crate::maze::{self, Cell, Maze};

/// Yaw facing into the maze from the spawn corner, in degrees.
///
/// Also the orientation the view snaps back to when leaving the top-down
/// camera.
pub const FORWARD_YAW: f32 = 180.0;

/// Normalized movement input for one simulation tick.
///
/// Both axes are expected in `[-1.0, 1.0]` and are clamped on use. The core
/// does not care whether they came from a keyboard, a touch gesture, or a
/// replay; they are just numbers.
#[derive(Debug, Default, Clone, Copy)]
pub struct MoveInput {
    /// Forward (positive) or backward (negative) motion along the view
    /// direction.
    pub forward: f32,
    /// Rightward (positive) or leftward (negative) strafe.
    pub strafe: f32,
}

impl MoveInput {
    /// Input that requests no movement.
    pub fn idle() -> Self {
        Self::default()
    }
}

/// What happened during one movement step.
#[derive(Debug, Clone, Copy)]
pub struct StepOutcome {
    /// Whether the candidate position was committed.
    pub moved: bool,
    /// Whether the committed position lies in a different cell than before.
    pub crossed_cell: bool,
}

/// The player character's state in the world.
#[derive(Debug, Clone)]
pub struct Player {
    /// World position `[x, y, z]`, y fixed at eye height.
    pub position: [f32; 3],
    /// Horizontal look angle in degrees.
    pub yaw: f32,
    /// Movement speed in world units per second.
    pub speed: f32,
    /// The maze cell currently occupied, derived from `position`.
    pub cell: Cell,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Creates a player standing at the center of the spawn cell (0, 0),
    /// facing into the maze.
    pub fn new() -> Self {
        let spawn = Cell::new(0, 0);
        Self {
            position: maze::cell_to_world(spawn, EYE_HEIGHT),
            yaw: FORWARD_YAW,
            speed: MOVE_SPEED,
            cell: spawn,
        }
    }

    /// Applies a look delta to the yaw, wrapping into `[0, 360)`.
    pub fn turn(&mut self, yaw_delta: f32) {
        self.yaw = (self.yaw + yaw_delta).rem_euclid(360.0);
    }

    /// Integrates one tick of movement input against the maze walls.
    ///
    /// The displacement is the input scaled by speed and tick duration,
    /// rotated by the current yaw. If the collision model rejects the
    /// candidate position the step is discarded whole; otherwise it is
    /// committed and the derived cell is recomputed.
    ///
    /// # Arguments
    /// * `maze` - The maze constraining movement
    /// * `input` - Normalized forward/strafe signals
    /// * `delta` - Tick duration in seconds
    pub fn step(&mut self, maze: &Maze, input: MoveInput, delta: f32) -> StepOutcome {
        let forward = input.forward.clamp(-1.0, 1.0) * self.speed * delta;
        let strafe = input.strafe.clamp(-1.0, 1.0) * self.speed * delta;
        let sin = self.yaw.to_radians().sin();
        let cos = self.yaw.to_radians().cos();

        let candidate = [
            self.position[0] - sin * forward + cos * strafe,
            self.position[1],
            self.position[2] - cos * forward - sin * strafe,
        ];

        if !collision::can_move(maze, self.cell, candidate) {
            return StepOutcome {
                moved: false,
                crossed_cell: false,
            };
        }

        self.position = candidate;
        // In bounds is guaranteed by the collision query.
        let (x, z) = maze::world_to_grid(candidate);
        let next = Cell::new(x as usize, z as usize);
        let crossed_cell = next != self.cell;
        self.cell = next;
        StepOutcome {
            moved: true,
            crossed_cell,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CELL_SIZE;
    use crate::maze::Direction;

    #[test]
    fn spawns_at_the_center_of_the_first_cell() {
        let player = Player::new();
        assert_eq!(player.cell, Cell::new(0, 0));
        assert_eq!(player.position[0], CELL_SIZE / 2.0);
        assert_eq!(player.position[2], CELL_SIZE / 2.0);
    }

    #[test]
    fn forward_at_spawn_yaw_moves_south() {
        let mut maze = Maze::with_all_walls(1, 2);
        maze.carve(Cell::new(0, 0), Direction::South);
        let mut player = Player::new();
        let before = player.position;

        let outcome = player.step(&maze, MoveInput { forward: 1.0, strafe: 0.0 }, 0.5);
        assert!(outcome.moved);
        assert!(player.position[2] > before[2]);
        // Lateral drift is only floating-point noise from sin(180 degrees).
        assert!((player.position[0] - before[0]).abs() < 1e-5);
    }

    #[test]
    fn blocked_step_leaves_the_position_unchanged() {
        let maze = Maze::with_all_walls(1, 2);
        let mut player = Player::new();
        let before = player.position;

        // Walk into the closed south wall long enough to cross it if it
        // were open.
        let outcome = player.step(&maze, MoveInput { forward: 1.0, strafe: 0.0 }, 2.0);
        assert!(!outcome.moved);
        assert!(!outcome.crossed_cell);
        assert_eq!(player.position, before);
        assert_eq!(player.cell, Cell::new(0, 0));
    }

    #[test]
    fn crossing_a_boundary_updates_the_cell() {
        let mut maze = Maze::with_all_walls(1, 2);
        maze.carve(Cell::new(0, 0), Direction::South);
        let mut player = Player::new();

        // 3 units/s for 1.5s covers the 2.5 units to the boundary.
        let outcome = player.step(&maze, MoveInput { forward: 1.0, strafe: 0.0 }, 1.5);
        assert!(outcome.moved);
        assert!(outcome.crossed_cell);
        assert_eq!(player.cell, Cell::new(0, 1));
    }

    #[test]
    fn oversized_input_is_clamped() {
        let maze = Maze::with_all_walls(1, 1);
        let mut reference = Player::new();
        let mut player = Player::new();
        reference.step(&maze, MoveInput { forward: 0.0, strafe: 1.0 }, 0.1);
        player.step(&maze, MoveInput { forward: 0.0, strafe: 50.0 }, 0.1);
        assert_eq!(player.position, reference.position);
    }

    #[test]
    fn turn_wraps_around() {
        let mut player = Player::new();
        player.yaw = 350.0;
        player.turn(20.0);
        assert!((player.yaw - 10.0).abs() < 1e-4);
        player.turn(-30.0);
        assert!((player.yaw - 340.0).abs() < 1e-4);
    }
}
