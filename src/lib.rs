pub mod board;
pub mod coord;
pub mod driver;
pub mod events;
pub mod input;
pub mod patterns;
pub mod render;
pub mod viewport;

/// Signed offset along one axis of the logical grid.
///
/// The grid is unbounded in every direction, so offsets are signed. Realistic
/// boards stay far from the representable bound, so plain arithmetic is used
/// throughout; an overflow would be a programming error, not a runtime
/// condition.
pub type GridOffset = i64;

/// Terminal cell dimensions.
pub type ScreenSize = u16;
