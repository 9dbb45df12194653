//! Top-down view zones for the medium difficulty tier.
//!
//! On medium difficulty the overhead camera is only available while the
//! player stands in one of a handful of pre-selected cells. Easy sessions
//! allow the overhead view everywhere and hard sessions never do, so both
//! get an empty zone set.

use rand::Rng;

use crate::config::{Difficulty, TOP_VIEW_ZONE_COUNT};
use crate::maze::{Cell, Maze};

/// The set of cells from which the top-down view may be engaged on medium
/// difficulty.
#[derive(Debug, Clone, Default)]
pub struct TopViewZones {
    cells: Vec<Cell>,
}

impl TopViewZones {
    /// Samples the zone set for a session.
    ///
    /// Medium picks [`TOP_VIEW_ZONE_COUNT`] cells uniformly, with
    /// replacement: duplicate picks are kept and simply shrink the number
    /// of distinct zones. Other tiers get an empty set.
    pub fn generate<R: Rng>(difficulty: Difficulty, maze: &Maze, rng: &mut R) -> Self {
        match difficulty {
            Difficulty::Medium => {
                let cells = (0..TOP_VIEW_ZONE_COUNT)
                    .map(|_| {
                        Cell::new(rng.gen_range(0..maze.width), rng.gen_range(0..maze.height))
                    })
                    .collect();
                Self { cells }
            }
            Difficulty::Easy | Difficulty::Hard => Self::default(),
        }
    }

    /// Test-only zone set with fixed cells.
    #[cfg(test)]
    pub(crate) fn from_cells(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Whether `cell` belongs to the zone set.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.iter().any(|zone| *zone == cell)
    }

    /// The sampled zone cells, duplicates included.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn medium_samples_the_configured_number_of_picks() {
        let maze = Maze::with_all_walls(20, 20);
        let mut rng = StdRng::seed_from_u64(9);
        let zones = TopViewZones::generate(Difficulty::Medium, &maze, &mut rng);
        assert_eq!(zones.cells().len(), TOP_VIEW_ZONE_COUNT);
        for cell in zones.cells() {
            assert!(cell.x < maze.width && cell.z < maze.height);
        }
    }

    #[test]
    fn other_tiers_get_no_zones() {
        let maze = Maze::with_all_walls(10, 10);
        let mut rng = StdRng::seed_from_u64(9);
        assert!(TopViewZones::generate(Difficulty::Easy, &maze, &mut rng)
            .cells()
            .is_empty());
        assert!(TopViewZones::generate(Difficulty::Hard, &maze, &mut rng)
            .cells()
            .is_empty());
    }

    #[test]
    fn contains_matches_the_sampled_cells() {
        let zones = TopViewZones::from_cells(vec![Cell::new(1, 2), Cell::new(4, 4)]);
        assert!(zones.contains(Cell::new(1, 2)));
        assert!(zones.contains(Cell::new(4, 4)));
        assert!(!zones.contains(Cell::new(2, 1)));
    }

    #[test]
    fn sampling_is_deterministic_under_a_seed() {
        let maze = Maze::with_all_walls(20, 20);
        let sample = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            TopViewZones::generate(Difficulty::Medium, &maze, &mut rng)
                .cells()
                .to_vec()
        };
        assert_eq!(sample(31), sample(31));
    }
}
