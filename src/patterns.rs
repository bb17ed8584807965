use crate::GridOffset;
use crate::board::Board;
use crate::coord::Coord;

/// A named seed pattern, cells relative to a stamp origin.
///
/// Coordinates are Cartesian (y grows upward), matching the board.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(GridOffset, GridOffset)],
}

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

/// Translates by `(1, -1)` every 4 generations.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 0), (1, 0), (2, 0), (2, 1), (1, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)],
};

impl Pattern {
    /// Set every cell of the pattern alive, translated to `origin`.
    pub fn stamp(&self, board: &mut Board, origin: Coord) {
        for &(dx, dy) in self.cells {
            board.set_cell(Coord::new(origin.x + dx, origin.y + dy), true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BLOCK;
    use super::GLIDER;
    use crate::board::Board;
    use crate::coord::Coord;

    #[test]
    fn test_stamp_translates_to_origin() {
        let mut board = Board::new();

        BLOCK.stamp(&mut board, Coord::new(10, -5));

        assert_eq!(board.population(), 4);
        assert!(board.cell(Coord::new(10, -5)));
        assert!(board.cell(Coord::new(11, -4)));
        assert!(!board.cell(Coord::new(0, 0)));
    }

    #[test]
    fn test_glider_has_five_cells() {
        let mut board = Board::new();

        GLIDER.stamp(&mut board, Coord::new(0, 0));

        assert_eq!(board.population(), 5);
    }
}
