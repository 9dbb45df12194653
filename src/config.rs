//! Difficulty tiers and world constants.
//!
//! All tunables live here rather than in flags or environment variables; the
//! crate is an interactive game core, not a command-line tool. The rendering
//! collaborator reads the geometric constants to build the scene, the
//! simulation reads the rest.

use serde::{Deserialize, Serialize};

/// Side length of one maze cell in world units.
pub const CELL_SIZE: f32 = 5.0;

/// Height of maze walls in world units, consumed by the rendering
/// collaborator when building wall geometry.
pub const WALL_HEIGHT: f32 = 3.0;

/// Camera height above the floor for the first-person viewpoint.
pub const EYE_HEIGHT: f32 = 1.6;

/// Player movement speed in world units per second.
pub const MOVE_SPEED: f32 = 3.0;

/// Distance from the goal-cell center at which the session is won.
pub const GOAL_RADIUS: f32 = 1.0;

/// Number of top-view zone picks made for the medium tier.
pub const TOP_VIEW_ZONE_COUNT: usize = 3;

/// Maximum number of entries kept per difficulty tier on the leaderboard.
pub const LEADERBOARD_CAP: usize = 10;

/// Difficulty tier selected from the menu.
///
/// The tier fixes the maze dimensions and the availability of the top-down
/// view: always on easy, zone-gated on medium, never on hard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 10x10 maze, top view always available.
    Easy,
    /// 20x20 maze, top view available only inside designated zones.
    Medium,
    /// 30x30 maze, no top view.
    Hard,
}

impl Difficulty {
    /// Side length of the (square) maze for this tier, in cells.
    pub fn maze_size(self) -> usize {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 20,
            Difficulty::Hard => 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maze_size_per_tier() {
        assert_eq!(Difficulty::Easy.maze_size(), 10);
        assert_eq!(Difficulty::Medium.maze_size(), 20);
        assert_eq!(Difficulty::Hard.maze_size(), 30);
    }

    #[test]
    fn difficulty_serializes_lowercase() {
        let key = serde_json::to_string(&Difficulty::Medium).expect("serialize difficulty");
        assert_eq!(key, "\"medium\"");
    }
}
