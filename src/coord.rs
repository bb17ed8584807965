use std::fmt;

use crate::GridOffset;

/// A cell position on the unbounded logical grid.
///
/// Plain value type: equality and hashing are structural, so two coordinates
/// built independently from the same pair compare equal and land in the same
/// hash bucket.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Coord {
    pub x: GridOffset,
    pub y: GridOffset,
}

impl Coord {
    pub const fn new(x: GridOffset, y: GridOffset) -> Self {
        Self { x, y }
    }

    /// The 8 surrounding coordinates (Chebyshev distance 1), self excluded.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        self.block().filter(move |&c| c != self)
    }

    /// The full 3x3 neighborhood centered on this coordinate, self included.
    ///
    /// This is the candidate set one live cell contributes to an evolution
    /// pass: nothing outside the union of these blocks can change state.
    pub fn block(self) -> impl Iterator<Item = Coord> {
        (-1..=1).flat_map(move |dy| (-1..=1).map(move |dx| Coord::new(self.x + dx, self.y + dy)))
    }
}

impl From<(GridOffset, GridOffset)> for Coord {
    fn from((x, y): (GridOffset, GridOffset)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
