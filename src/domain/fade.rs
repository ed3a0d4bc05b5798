use super::grid::Grid;

/// Time for a cell to fade fully in or out, in milliseconds.
pub const FADE_DURATION_MS: f32 = 400.0;

/// Continuous per-cell opacity field used for animated rendering.
///
/// Each value approaches the cell's discrete occupancy target (1 occupied,
/// 0 empty) on the render clock, independent of the generation tick rate.
#[derive(Clone, Debug, PartialEq)]
pub struct FadeField {
    size: usize,
    values: Vec<f32>,
}

impl FadeField {
    /// All-zero field for a grid of side `size`
    pub fn new(size: usize) -> Self {
        Self {
            size,
            values: vec![0.0; size * size],
        }
    }

    /// Opacity at a position; out of range reads as 0
    pub fn get(&self, row: usize, col: usize) -> f32 {
        if row < self.size && col < self.size {
            self.values[row * self.size + col]
        } else {
            0.0
        }
    }

    /// Move every value toward its target by `elapsed_ms` worth of fading,
    /// clamped so it never overshoots.
    pub fn advance(&mut self, grid: &Grid, elapsed_ms: f32) {
        debug_assert_eq!(grid.size(), self.size);
        let step = elapsed_ms / FADE_DURATION_MS;
        for (value, cell) in self.values.iter_mut().zip(grid.cells()) {
            let target = if cell.is_occupied() { 1.0 } else { 0.0 };
            if *value < target {
                *value = (*value + step).min(target);
            } else if *value > target {
                *value = (*value - step).max(target);
            }
        }
    }

    /// Snap every value to its discrete target. Used after step-back and
    /// resize, where an animated transition would misrepresent the restored
    /// state.
    pub fn snap(&mut self, grid: &Grid) {
        debug_assert_eq!(grid.size(), self.size);
        for (value, cell) in self.values.iter_mut().zip(grid.cells()) {
            *value = if cell.is_occupied() { 1.0 } else { 0.0 };
        }
    }

    /// Restart one cell's fade from zero, so a painted cell fades in
    pub fn reset(&mut self, row: usize, col: usize) {
        if row < self.size && col < self.size {
            self.values[row * self.size + col] = 0.0;
        }
    }

    /// Zero the whole field
    pub fn clear(&mut self) {
        self.values.fill(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    #[test]
    fn test_advance_approaches_target() {
        let mut grid = Grid::new(5).unwrap();
        grid.set(2, 2, Cell::SpeciesA);
        let mut fade = FadeField::new(5);

        fade.advance(&grid, 100.0);
        let quarter = fade.get(2, 2);
        assert!(quarter > 0.2 && quarter < 0.3);
        // empty cells stay at zero
        assert_eq!(fade.get(0, 0), 0.0);
    }

    #[test]
    fn test_advance_clamps_at_target() {
        let mut grid = Grid::new(5).unwrap();
        grid.set(1, 1, Cell::SpeciesB);
        let mut fade = FadeField::new(5);

        fade.advance(&grid, 10_000.0);
        assert_eq!(fade.get(1, 1), 1.0);

        // cell dies, large step fades out without undershooting
        grid.set(1, 1, Cell::Empty);
        fade.advance(&grid, 10_000.0);
        assert_eq!(fade.get(1, 1), 0.0);
    }

    #[test]
    fn test_full_duration_reaches_target() {
        let mut grid = Grid::new(5).unwrap();
        grid.set(3, 3, Cell::SpeciesA);
        let mut fade = FadeField::new(5);

        fade.advance(&grid, FADE_DURATION_MS);
        assert_eq!(fade.get(3, 3), 1.0);
    }

    #[test]
    fn test_snap_matches_grid() {
        let mut grid = Grid::new(5).unwrap();
        grid.set(0, 1, Cell::SpeciesA);
        grid.set(4, 4, Cell::SpeciesB);
        let mut fade = FadeField::new(5);
        fade.advance(&grid, 50.0);

        fade.snap(&grid);
        assert_eq!(fade.get(0, 1), 1.0);
        assert_eq!(fade.get(4, 4), 1.0);
        assert_eq!(fade.get(2, 2), 0.0);
    }

    #[test]
    fn test_reset_restarts_fade_in() {
        let mut grid = Grid::new(5).unwrap();
        grid.set(2, 3, Cell::SpeciesA);
        let mut fade = FadeField::new(5);
        fade.snap(&grid);

        fade.reset(2, 3);
        assert_eq!(fade.get(2, 3), 0.0);
        fade.advance(&grid, 100.0);
        assert!(fade.get(2, 3) > 0.0);
    }
}
