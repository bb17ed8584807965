use std::collections::HashSet;
use std::time::Duration;
use std::time::Instant;

use tracing::debug;

use crate::coord::Coord;

/// The set of coordinates whose alive/dead state changed during one
/// operation.
pub type Delta = HashSet<Coord>;

/// The sparse evolution engine.
///
/// Only live cells are stored; every coordinate absent from the set is dead.
/// This is what makes the grid logically unbounded: one generation costs
/// O(live cells), not O(area), because a cell can only change state if it is
/// alive or adjacent to a live cell.
pub struct Board {
    cells: HashSet<Coord>,
    generation: u64,
    last_compute: Duration,
}

impl Board {
    /// An empty board at generation 0.
    pub fn new() -> Self {
        Self {
            cells: HashSet::new(),
            generation: 0,
            last_compute: Duration::ZERO,
        }
    }

    /// Whether the cell at `c` is alive.
    pub fn cell(&self, c: Coord) -> bool {
        self.cells.contains(&c)
    }

    /// Set the cell at `c` alive or dead, outside the evolution cycle.
    pub fn set_cell(&mut self, c: Coord, alive: bool) {
        if alive {
            self.cells.insert(c);
        } else {
            self.cells.remove(&c);
        }
    }

    /// Flip the cell at `c`.
    pub fn toggle(&mut self, c: Coord) {
        if !self.cells.remove(&c) {
            self.cells.insert(c);
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Wall-clock duration of the most recent [`Board::evolve`] pass.
    pub fn last_compute(&self) -> Duration {
        self.last_compute
    }

    pub fn population(&self) -> usize {
        self.cells.len()
    }

    /// Iterate over every live cell, in no particular order.
    ///
    /// This is the full-refresh path: after a pan, a renderer walks the whole
    /// live population instead of a delta.
    pub fn live_cells(&self) -> impl Iterator<Item = Coord> {
        self.cells.iter().copied()
    }

    /// Advance the whole grid by one generation.
    ///
    /// Candidates are exactly the union of each live cell's 3x3 block; every
    /// other coordinate keeps its state by the rule table, so it is never
    /// inspected. Births and deaths are collected during the scan and applied
    /// together afterwards, so the set never holds a mix of two generations.
    ///
    /// Returns the delta: every coordinate that flipped.
    pub fn evolve(&mut self) -> Delta {
        let start = Instant::now();

        let mut births = HashSet::new();
        let mut deaths = HashSet::new();
        let mut tested = HashSet::with_capacity(self.cells.len() * 4);

        for cell in &self.cells {
            for candidate in cell.block() {
                if !tested.insert(candidate) {
                    continue;
                }

                let alive = self.cells.contains(&candidate);

                match (alive, self.live_neighbor_count(candidate)) {
                    // survival
                    (true, 2 | 3) => {}
                    // underpopulation or overpopulation
                    (true, _) => {
                        deaths.insert(candidate);
                    }
                    // birth
                    (false, 3) => {
                        births.insert(candidate);
                    }
                    // stays dead
                    (false, _) => {}
                }
            }
        }

        for &c in &births {
            self.cells.insert(c);
        }

        for c in &deaths {
            self.cells.remove(c);
        }

        self.generation += 1;
        self.last_compute = start.elapsed();

        debug!(
            generation = self.generation,
            candidates = tested.len(),
            births = births.len(),
            deaths = deaths.len(),
            elapsed = ?self.last_compute,
            "evolved"
        );

        let mut delta = births;
        delta.extend(deaths);

        delta
    }

    /// Kill every live cell and reset the counters.
    ///
    /// The delta is the previous live set: each of those cells just died.
    pub fn clear(&mut self) -> Delta {
        let delta = std::mem::take(&mut self.cells);

        self.generation = 0;
        self.last_compute = Duration::ZERO;

        debug!(cleared = delta.len(), "cleared");

        delta
    }

    /// Count of the 8 surrounding cells that are alive, `c` itself excluded.
    fn live_neighbor_count(&self, c: Coord) -> u8 {
        c.neighbors().filter(|n| self.cells.contains(n)).count() as u8
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::Board;
    use crate::coord::Coord;

    fn board_of(cells: &[(i64, i64)]) -> Board {
        let mut board = Board::new();

        for &(x, y) in cells {
            board.set_cell(Coord::new(x, y), true);
        }

        board
    }

    #[test]
    fn test_lone_cell_dies() {
        let mut board = board_of(&[(0, 0)]);

        let delta = board.evolve();

        assert_eq!(delta, HashSet::from([Coord::new(0, 0)]));
        assert_eq!(board.population(), 0);
        assert_eq!(board.generation(), 1);
    }

    #[test]
    fn test_birth_on_three_neighbors() {
        // L-triomino: (0,0) (1,0) (0,1). The missing corner (1,1) is born.
        let mut board = board_of(&[(0, 0), (1, 0), (0, 1)]);

        board.evolve();

        assert!(board.cell(Coord::new(1, 1)));
        assert_eq!(board.population(), 4);
    }

    #[test]
    fn test_overpopulation() {
        // Plus sign: center has 4 neighbors and dies.
        let mut board = board_of(&[(0, 0), (1, 0), (-1, 0), (0, 1), (0, -1)]);

        board.evolve();

        assert!(!board.cell(Coord::new(0, 0)));
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut board = Board::new();
        let c = Coord::new(-4, 9);

        board.toggle(c);
        assert!(board.cell(c));

        board.toggle(c);
        assert!(!board.cell(c));
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn test_negative_coordinates_evolve() {
        // Block far in the negative quadrant stays put.
        let mut board = board_of(&[(-100, -50), (-99, -50), (-100, -49), (-99, -49)]);

        let delta = board.evolve();

        assert!(delta.is_empty());
        assert_eq!(board.population(), 4);
    }
}
