use rand::Rng;

use super::cell::{Cell, Species};
use crate::error::SimError;

/// Smallest supported grid side length.
pub const MIN_GRID_SIZE: usize = 5;

/// Square two-species grid.
///
/// Cells are stored in a flat row-major vector. Two live instances exist
/// during stepping (current and scratch) so a generation pass never reads
/// partially-updated neighbors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new all-empty grid of side `size`
    pub fn new(size: usize) -> Result<Self, SimError> {
        if size < MIN_GRID_SIZE {
            return Err(SimError::InvalidGridSize(size));
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Grid side length
    pub const fn size(&self) -> usize {
        self.size
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.size && col < self.size).then(|| self.cells[self.index(row, col)])
    }

    /// Set cell at position (mutable for painting)
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.size && col < self.size {
            let idx = self.index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Count Moore neighbors of one species around a cell.
    ///
    /// Under wrap the grid is toroidal; otherwise out-of-range offsets are
    /// simply not counted. Called once per species per cell - a cell can
    /// have neighbors of both kinds at once.
    pub fn count_neighbors(&self, row: usize, col: usize, species: Species, wrap: bool) -> u8 {
        let n = self.size as i32;
        let target = species.cell();
        let mut count = 0;
        for dr in -1..=1i32 {
            for dc in -1..=1i32 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let mut rr = row as i32 + dr;
                let mut cc = col as i32 + dc;
                if wrap {
                    rr = rr.rem_euclid(n);
                    cc = cc.rem_euclid(n);
                } else if rr < 0 || rr >= n || cc < 0 || cc >= n {
                    continue;
                }
                if self.cells[rr as usize * self.size + cc as usize] == target {
                    count += 1;
                }
            }
        }
        count
    }

    /// Scatter one species at the given density, leaving other cells as-is
    pub fn seed_species<R: Rng>(&mut self, species: Species, density: f32, rng: &mut R) {
        for cell in &mut self.cells {
            if rng.random::<f32>() < density {
                *cell = species.cell();
            }
        }
    }

    /// Reseed the whole grid: each cell becomes A or B at 20% each,
    /// empty otherwise
    pub fn seed_both<R: Rng>(&mut self, rng: &mut R) {
        for cell in &mut self.cells {
            let roll = rng.random::<f32>();
            *cell = if roll > 0.8 {
                Cell::SpeciesA
            } else if roll > 0.6 {
                Cell::SpeciesB
            } else {
                Cell::Empty
            };
        }
    }

    /// Live cell counts as (species A, species B)
    pub fn population(&self) -> (usize, usize) {
        let mut a = 0;
        let mut b = 0;
        for cell in &self.cells {
            match cell {
                Cell::SpeciesA => a += 1,
                Cell::SpeciesB => b += 1,
                Cell::Empty => {}
            }
        }
        (a, b)
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (i / self.size, i % self.size, cell))
    }

    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_rejects_tiny_grid() {
        assert!(Grid::new(4).is_err());
        assert!(Grid::new(0).is_err());
        assert!(Grid::new(5).is_ok());
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(10).unwrap();
        assert_eq!(grid.population(), (0, 0));
    }

    #[test]
    fn test_get_set_bounds() {
        let mut grid = Grid::new(10).unwrap();
        grid.set(3, 4, Cell::SpeciesA);
        assert_eq!(grid.get(3, 4), Some(Cell::SpeciesA));
        assert_eq!(grid.get(10, 0), None);
        assert_eq!(grid.get(0, 10), None);
        // out-of-bounds set is ignored, not a panic
        grid.set(100, 100, Cell::SpeciesB);
        assert_eq!(grid.population(), (1, 0));
    }

    #[test]
    fn test_corner_neighbors_wrapped_vs_bounded() {
        let n = 8;
        let mut grid = Grid::new(n).unwrap();
        // occupy every position adjacent to (0,0) on the torus
        for (r, c) in [
            (n - 1, n - 1),
            (n - 1, 0),
            (n - 1, 1),
            (0, n - 1),
            (0, 1),
            (1, n - 1),
            (1, 0),
            (1, 1),
        ] {
            grid.set(r, c, Cell::SpeciesA);
        }
        assert_eq!(grid.count_neighbors(0, 0, Species::A, true), 8);
        // bounded: only the 3 in-range positions are considered
        assert_eq!(grid.count_neighbors(0, 0, Species::A, false), 3);
    }

    #[test]
    fn test_species_counts_are_independent() {
        let mut grid = Grid::new(6).unwrap();
        grid.set(2, 2, Cell::SpeciesA);
        grid.set(2, 4, Cell::SpeciesA);
        grid.set(2, 3, Cell::SpeciesB);
        grid.set(4, 3, Cell::SpeciesB);

        assert_eq!(grid.count_neighbors(3, 3, Species::A, false), 2);
        assert_eq!(grid.count_neighbors(3, 3, Species::B, false), 2);
    }

    #[test]
    fn test_seed_species_keeps_rival() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(20).unwrap();
        grid.set(0, 0, Cell::SpeciesB);
        grid.seed_species(Species::A, 0.0, &mut rng);
        // zero density seeds nothing and disturbs nothing
        assert_eq!(grid.population(), (0, 1));

        grid.seed_species(Species::A, 1.0, &mut rng);
        let (a, b) = grid.population();
        assert_eq!(a, 400);
        assert_eq!(b, 0);
    }

    #[test]
    fn test_seed_both_rewrites_grid() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut grid = Grid::new(30).unwrap();
        grid.seed_both(&mut rng);
        let (a, b) = grid.population();
        assert!(a > 0);
        assert!(b > 0);
        assert!(a + b < 900);
    }

    #[test]
    fn test_iter_cells_positions() {
        let mut grid = Grid::new(5).unwrap();
        grid.set(1, 2, Cell::SpeciesB);
        let found: Vec<_> = grid
            .iter_cells()
            .filter(|(_, _, cell)| cell.is_occupied())
            .collect();
        assert_eq!(found, vec![(1, 2, Cell::SpeciesB)]);
    }
}
