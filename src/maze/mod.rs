//! Maze grid model and coordinate conversion.
//!
//! This module defines the cell grid the whole game runs on: cardinal
//! directions, cell coordinates, and the [`Maze`] itself with one wall flag
//! per cell side. It also centralizes the conversion between grid
//! coordinates and continuous world coordinates so movement, collision, and
//! the rendering collaborator all agree on where a cell is.
//!
//! Walls are carved during generation and never change afterwards; the only
//! mutating operation is private to this module.

pub mod generator;

use crate::config::CELL_SIZE;

/// Cardinal direction of one cell side.
///
/// Wall flags are stored in a fixed-size array indexed by this enum, and
/// [`Direction::opposite`] gives the matching side on the adjacent cell, so
/// a wall can always be updated consistently on both of its faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards increasing x.
    East,
    /// Towards increasing z.
    South,
    /// Towards decreasing x.
    West,
    /// Towards decreasing z.
    North,
}

impl Direction {
    /// All four directions, in wall-array index order.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];

    /// The direction pointing the other way.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::North => Direction::South,
        }
    }

    /// Grid offset of one step in this direction as `(dx, dz)`.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::North => (0, -1),
        }
    }
}

/// A cell position in the maze grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Column index, in `[0, width)`.
    pub x: usize,
    /// Row index, in `[0, height)`.
    pub z: usize,
}

impl Cell {
    /// Creates a new cell with the given grid coordinates.
    pub fn new(x: usize, z: usize) -> Self {
        Self { x, z }
    }
}

/// A generated maze: a `width` x `height` grid of cells with four wall flags
/// each.
///
/// After generation the open walls form a spanning tree of the grid graph:
/// every cell is reachable from every other cell through exactly one path,
/// and exactly `width * height - 1` wall pairs are open. Wall flags are
/// always symmetric between neighbors.
#[derive(Debug, Clone)]
pub struct Maze {
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Row-major wall flags per cell, `true` meaning closed.
    walls: Vec<[bool; 4]>,
}

impl Maze {
    /// Creates a grid with every wall closed. Generation starts from this
    /// and carves passages; dimensions are validated by the generator.
    fn closed(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            walls: vec![[true; 4]; width * height],
        }
    }

    fn index(&self, cell: Cell) -> usize {
        cell.z * self.width + cell.x
    }

    /// Opens the wall between `cell` and its neighbor in `dir`, updating
    /// both faces. The neighbor must exist.
    fn open_wall(&mut self, cell: Cell, dir: Direction) {
        let neighbor = self
            .neighbor(cell, dir)
            .expect("open_wall requires an in-bounds neighbor");
        let index = self.index(cell);
        self.walls[index][dir as usize] = false;
        let index = self.index(neighbor);
        self.walls[index][dir.opposite() as usize] = false;
    }

    /// Test-only wall carving, for building precise fixtures.
    #[cfg(test)]
    pub(crate) fn carve(&mut self, cell: Cell, dir: Direction) {
        self.open_wall(cell, dir);
    }

    /// Test-only fully sealed grid, for building precise fixtures.
    #[cfg(test)]
    pub(crate) fn with_all_walls(width: usize, height: usize) -> Self {
        Self::closed(width, height)
    }

    /// Whether the signed grid coordinates fall inside the grid.
    pub fn in_bounds(&self, x: isize, z: isize) -> bool {
        x >= 0 && z >= 0 && (x as usize) < self.width && (z as usize) < self.height
    }

    /// The cell adjacent to `cell` in `dir`, or `None` at the grid edge.
    pub fn neighbor(&self, cell: Cell, dir: Direction) -> Option<Cell> {
        let (dx, dz) = dir.offset();
        let x = cell.x as isize + dx;
        let z = cell.z as isize + dz;
        self.in_bounds(x, z).then(|| Cell::new(x as usize, z as usize))
    }

    /// Whether the wall on `cell`'s side towards `dir` is open.
    ///
    /// By the symmetry invariant this equals the flag on the adjacent cell's
    /// opposite side. The outer boundary is always closed.
    pub fn is_open(&self, cell: Cell, dir: Direction) -> bool {
        !self.walls[self.index(cell)][dir as usize]
    }

    /// The four corner cells: north-west, north-east, south-west,
    /// south-east. Degenerate grids repeat cells.
    pub fn corners(&self) -> [Cell; 4] {
        [
            Cell::new(0, 0),
            Cell::new(self.width - 1, 0),
            Cell::new(0, self.height - 1),
            Cell::new(self.width - 1, self.height - 1),
        ]
    }

    /// Total number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Number of open wall pairs. A perfect maze has `cell_count() - 1`.
    pub fn open_pair_count(&self) -> usize {
        // Count east and south sides only so each pair is seen once.
        let mut open = 0;
        for z in 0..self.height {
            for x in 0..self.width {
                let cell = Cell::new(x, z);
                if self.neighbor(cell, Direction::East).is_some()
                    && self.is_open(cell, Direction::East)
                {
                    open += 1;
                }
                if self.neighbor(cell, Direction::South).is_some()
                    && self.is_open(cell, Direction::South)
                {
                    open += 1;
                }
            }
        }
        open
    }
}

/// Converts a grid cell to the world coordinates of its center.
///
/// # Arguments
/// * `cell` - The cell in grid coordinates
/// * `y` - The desired height of the returned point
///
/// # Coordinate System
/// The world origin sits at the north-west corner of the maze; x increases
/// east and z increases south, each cell spanning [`CELL_SIZE`] units.
pub fn cell_to_world(cell: Cell, y: f32) -> [f32; 3] {
    [
        cell.x as f32 * CELL_SIZE + CELL_SIZE / 2.0,
        y,
        cell.z as f32 * CELL_SIZE + CELL_SIZE / 2.0,
    ]
}

/// Converts a continuous world position to signed grid coordinates.
///
/// The result may lie outside the grid; callers decide how to treat that.
/// The y component is ignored since the maze is flat.
pub fn world_to_grid(position: [f32; 3]) -> (isize, isize) {
    (
        (position[0] / CELL_SIZE).floor() as isize,
        (position[2] / CELL_SIZE).floor() as isize,
    )
}
