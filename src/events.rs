use crate::viewport::Direction;

pub enum Event {
    EngineEvent(EngineEvent),
    ViewEvent(ViewEvent),
    AppEvent(AppEvent),
}

pub enum EngineEvent {
    /// Advance the board by one generation
    Step,

    /// Kill every live cell and reset the counters
    Clear,

    /// Flip the cell under the cursor
    ToggleCell,

    /// Stamp a glider at the cursor
    StampGlider,

    /// Start or stop the periodic driver
    ToggleAuto,

    /// Shorten the driver's inter-tick delay
    Faster,

    /// Lengthen the driver's inter-tick delay
    Slower,
}

pub enum ViewEvent {
    /// Move the viewport across the logical grid
    Pan(Direction),

    /// Reset the pan offset to the origin
    Home,

    /// Move the edit cursor within the window
    CursorMove(Direction),
}

pub enum AppEvent {
    /// The terminal changed size
    Resize { cols: u16, rows: u16 },

    /// Exit the application
    Exit,
}
