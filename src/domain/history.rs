use std::collections::VecDeque;

use super::grid::Grid;

/// Maximum number of snapshots retained for step-back.
pub const HISTORY_CAPACITY: usize = 500;

/// Bounded ring of past grid snapshots.
///
/// Pushed on every forward step, popped on step-back. The oldest snapshot
/// is dropped silently once the ring is full. Owners must clear it whenever
/// the grid is resized or edited directly, since stored snapshots no longer
/// describe the visible world.
#[derive(Clone, Debug, Default)]
pub struct HistoryBuffer {
    snapshots: VecDeque<Grid>,
    capacity: usize,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            snapshots: VecDeque::with_capacity(capacity.min(HISTORY_CAPACITY)),
            capacity,
        }
    }

    /// Store a deep copy, evicting the oldest snapshot when full
    pub fn push(&mut self, grid: &Grid) {
        if self.snapshots.len() == self.capacity {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(grid.clone());
    }

    /// Remove and return the most recent snapshot
    pub fn pop(&mut self) -> Option<Grid> {
        self.snapshots.pop_back()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    fn marked_grid(row: usize, col: usize) -> Grid {
        let mut grid = Grid::new(6).unwrap();
        grid.set(row, col, Cell::SpeciesA);
        grid
    }

    #[test]
    fn test_pop_is_lifo() {
        let mut history = HistoryBuffer::new();
        history.push(&marked_grid(0, 0));
        history.push(&marked_grid(1, 1));

        assert_eq!(history.pop(), Some(marked_grid(1, 1)));
        assert_eq!(history.pop(), Some(marked_grid(0, 0)));
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn test_eviction_drops_oldest() {
        let mut history = HistoryBuffer::with_capacity(3);
        for col in 0..5 {
            history.push(&marked_grid(0, col));
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.pop(), Some(marked_grid(0, 4)));
        assert_eq!(history.pop(), Some(marked_grid(0, 3)));
        // snapshots 0 and 1 were evicted
        assert_eq!(history.pop(), Some(marked_grid(0, 2)));
        assert!(history.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut history = HistoryBuffer::new();
        history.push(&marked_grid(2, 2));
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.pop(), None);
    }
}
