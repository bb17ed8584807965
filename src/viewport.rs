use thiserror::Error;
use tracing::trace;

use crate::GridOffset;
use crate::coord::Coord;

#[derive(Error, Debug)]
pub enum GeometryError {
    #[error("Viewport {axis} must be positive, got {value}")]
    NonPositive {
        axis: &'static str,
        value: GridOffset,
    },
}

/// A pan direction, in Cartesian terms: `Up` moves the window toward larger
/// `y`, `Right` toward larger `x`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A fixed-size window onto the unbounded logical grid.
///
/// The offset is the logical coordinate of the window's origin cell. View
/// coordinates are logical coordinates minus the offset, so they always lie
/// in `[0, width) x [0, height)` when visible. Panning only moves the offset;
/// it never touches board state.
pub struct Viewport {
    offset_x: GridOffset,
    offset_y: GridOffset,
    width: GridOffset,
    height: GridOffset,
}

impl Viewport {
    /// A viewport of the given size with its origin at `(0, 0)`.
    ///
    /// Width and height are fixed for the viewport's lifetime and must both
    /// be positive.
    pub fn new(width: GridOffset, height: GridOffset) -> Result<Self, GeometryError> {
        if width <= 0 {
            return Err(GeometryError::NonPositive {
                axis: "width",
                value: width,
            });
        }

        if height <= 0 {
            return Err(GeometryError::NonPositive {
                axis: "height",
                value: height,
            });
        }

        Ok(Self {
            offset_x: 0,
            offset_y: 0,
            width,
            height,
        })
    }

    pub fn width(&self) -> GridOffset {
        self.width
    }

    pub fn height(&self) -> GridOffset {
        self.height
    }

    pub fn offset(&self) -> (GridOffset, GridOffset) {
        (self.offset_x, self.offset_y)
    }

    /// Translate a logical coordinate into view space.
    pub fn to_view(&self, c: Coord) -> Coord {
        Coord::new(c.x - self.offset_x, c.y - self.offset_y)
    }

    /// Translate a view coordinate back into logical space.
    ///
    /// Exact inverse of [`Viewport::to_view`] for a fixed offset.
    pub fn to_logical(&self, c: Coord) -> Coord {
        Coord::new(c.x + self.offset_x, c.y + self.offset_y)
    }

    /// Whether the logical coordinate `c` falls inside the window.
    pub fn is_visible(&self, c: Coord) -> bool {
        let v = self.to_view(c);

        v.x >= 0 && v.x < self.width && v.y >= 0 && v.y < self.height
    }

    /// Move the window `steps` cells in `direction`.
    ///
    /// `Up` adds to `offset_y`, `Right` adds to `offset_x`; the inverse pair
    /// above uses the same convention, so content appears to slide the
    /// opposite way on screen.
    pub fn pan(&mut self, direction: Direction, steps: GridOffset) {
        match direction {
            Direction::Up => self.offset_y += steps,
            Direction::Down => self.offset_y -= steps,
            Direction::Right => self.offset_x += steps,
            Direction::Left => self.offset_x -= steps,
        }

        trace!(?direction, steps, offset_x = self.offset_x, offset_y = self.offset_y, "pan");
    }

    /// Reset the offset to `(0, 0)`, whatever pans came before.
    pub fn home(&mut self) {
        self.offset_x = 0;
        self.offset_y = 0;

        trace!("home");
    }
}
