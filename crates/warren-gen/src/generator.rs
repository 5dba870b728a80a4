//! Binary-tree maze carving.
//!
//! The grid starts solid. Every cell whose row and column are both odd is a
//! *node* and is opened. Nodes are then visited in row-major order; each
//! one opens the wall towards its north or east neighbour node, chosen
//! uniformly among the directions that stay inside the node lattice. The
//! top-right node has no valid direction and carves nothing, every other
//! node carves exactly one wall, so `nodes - 1` walls are removed and the
//! open cells form a spanning tree.

use crate::exits::{place_exits, ExitPlacement};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use warren_core::{CellState, Direction, Grid, GridError, Maze, MazeError, Position};

/// A reusable maze generator for one size and exit policy.
///
/// Dimensions are normalized once at construction with
/// [`Maze::normalize_dimensions`]: values below 5 are rejected and even
/// values are rounded down to odd.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use warren_gen::{ExitPlacement, MazeGenerator};
///
/// let generator = MazeGenerator::new(10, 12)
///     .unwrap()
///     .exit_placement(ExitPlacement::Fixed);
/// assert_eq!((generator.rows(), generator.cols()), (9, 11));
///
/// let mut rng = ChaCha8Rng::seed_from_u64(3);
/// let maze = generator.generate(&mut rng).unwrap();
/// assert_eq!(maze.rows(), 9);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeGenerator {
    rows: usize,
    cols: usize,
    exit_placement: ExitPlacement,
}

impl MazeGenerator {
    /// Create a generator for a `rows x cols` maze with random exits.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidDimensions`] if either dimension is
    /// below [`Maze::MIN_DIM`].
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        let (rows, cols) = Maze::normalize_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            exit_placement: ExitPlacement::Random,
        })
    }

    /// Set the exit placement policy. Default: [`ExitPlacement::Random`].
    pub fn exit_placement(mut self, placement: ExitPlacement) -> Self {
        self.exit_placement = placement;
        self
    }

    /// Normalized number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Normalized number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of node cells (both coordinates odd).
    pub fn node_count(&self) -> usize {
        (self.rows / 2) * (self.cols / 2)
    }

    /// Generate one maze, drawing all randomness from `rng`.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Maze, MazeError> {
        let mut grid = Grid::new(self.rows, self.cols, CellState::Wall)?;
        let carved = carve_binary_tree(&mut grid, rng)?;
        let exits = place_exits(self.rows, self.cols, self.exit_placement, rng);
        for exit in exits {
            grid.set(exit, CellState::Exit)?;
        }
        log::trace!(
            "generated {}x{} maze: {} nodes, {} walls carved, exits {} and {}",
            self.rows,
            self.cols,
            self.node_count(),
            carved,
            exits[0],
            exits[1],
        );
        Maze::from_grid(grid)
    }

    /// Generate one maze from a `ChaCha8Rng` seeded with `seed`.
    pub fn generate_seeded(&self, seed: u64) -> Result<Maze, MazeError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.generate(&mut rng)
    }
}

/// Generate a `rows x cols` maze with the given exit policy.
pub fn generate<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    exit_placement: ExitPlacement,
    rng: &mut R,
) -> Result<Maze, MazeError> {
    MazeGenerator::new(rows, cols)?
        .exit_placement(exit_placement)
        .generate(rng)
}

/// Generate a `rows x cols` maze from a seeded `ChaCha8Rng`.
pub fn generate_seeded(
    rows: usize,
    cols: usize,
    exit_placement: ExitPlacement,
    seed: u64,
) -> Result<Maze, MazeError> {
    MazeGenerator::new(rows, cols)?
        .exit_placement(exit_placement)
        .generate_seeded(seed)
}

/// Open every node and carve one wall per node towards north or east.
///
/// `grid` must be all-wall with odd dimensions. Returns the number of
/// walls carved.
fn carve_binary_tree<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Result<usize, GridError> {
    let rows = grid.rows();
    let cols = grid.cols();
    let mut carved = 0;

    for r in (1..rows - 1).step_by(2) {
        for c in (1..cols - 1).step_by(2) {
            let node = Position::new(r, c);
            grid.set(node, CellState::Passage)?;

            let mut options = [Direction::North; 2];
            let mut n = 0;
            if r > 1 {
                options[n] = Direction::North;
                n += 1;
            }
            if c + 2 < cols - 1 {
                options[n] = Direction::East;
                n += 1;
            }

            if let Some(wall) = options[..n].choose(rng).and_then(|&dir| node.step(dir)) {
                grid.set(wall, CellState::Passage)?;
                carved += 1;
            }
        }
    }

    Ok(carved)
}
