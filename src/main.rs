use std::io;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::mpsc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use anyhow::Context;
use crossterm::cursor;
use crossterm::event;
use crossterm::execute;
use crossterm::style;
use crossterm::terminal;
use tracing_subscriber::EnvFilter;

use sparselife::GridOffset;
use sparselife::board::Board;
use sparselife::board::Delta;
use sparselife::coord::Coord;
use sparselife::driver::AutoEvolve;
use sparselife::driver::SharedBoard;
use sparselife::events::AppEvent;
use sparselife::events::EngineEvent;
use sparselife::events::Event;
use sparselife::events::ViewEvent;
use sparselife::input::convert_event;
use sparselife::patterns;
use sparselife::render::Frame;
use sparselife::viewport::Direction;
use sparselife::viewport::Viewport;

const FRAMERATE: u32 = 60;
const FRAMETIME: Duration = Duration::from_millis(1_000 / FRAMERATE as u64);

/// Cells per pan keypress.
const PAN_STEPS: GridOffset = 4;

/// Auto-evolve delay bounds, per keypress of `+`/`-`.
const AUTO_DELAY_MIN: Duration = Duration::from_millis(5);
const AUTO_DELAY_MAX: Duration = Duration::from_millis(805);
const AUTO_DELAY_STEP: Duration = Duration::from_millis(50);
const AUTO_DELAY_DEFAULT: Duration = Duration::from_millis(200);

/// Derive the cell geometry of the visible window from the terminal size.
///
/// The bottom row is reserved for the status line; each remaining terminal
/// cell renders a 2x4 block of board cells in braille.
fn window_cells(cols: u16, rows: u16) -> (usize, usize) {
    let cols = cols.max(2) as usize;
    let rows = rows.max(2) as usize;

    (cols * 2, (rows - 1) * 4)
}

/// Rebuild the viewport at a new size, carrying the pan offset over.
fn resize_viewport(view: &Viewport, w: usize, h: usize) -> anyhow::Result<Viewport> {
    let (ox, oy) = view.offset();

    let mut next = Viewport::new(w as GridOffset, h as GridOffset)
        .context("Terminal too small for a viewport")?;

    next.pan(Direction::Right, ox);
    next.pan(Direction::Up, oy);

    Ok(next)
}

/// A poisoned lock means the driver thread panicked; nothing left to run.
fn lock_board(board: &SharedBoard) -> anyhow::Result<std::sync::MutexGuard<'_, Board>> {
    board.lock().map_err(|_| anyhow::anyhow!("Board mutex poisoned"))
}

struct AutoPilot {
    driver: AutoEvolve,
    deltas: Receiver<Delta>,
}

impl AutoPilot {
    fn start(board: &SharedBoard, interval: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        Self {
            driver: AutoEvolve::spawn(Arc::clone(board), interval, tx),
            deltas: rx,
        }
    }
}

fn draw(
    frame: &mut Frame,
    board: &SharedBoard,
    view: &Viewport,
    auto: Option<&AutoPilot>,
    cursor_cell: Coord,
) -> anyhow::Result<()> {
    let mut stdout = io::stdout();

    let status = {
        let board = lock_board(board)?;

        frame.reset();
        frame.draw(&board, view);

        let at = view.to_logical(cursor_cell);
        let auto = match auto {
            Some(pilot) => format!("auto {}ms", pilot.driver.interval().as_millis()),
            None => "manual".to_string(),
        };

        format!(
            "gen {}  pop {}  compute {:?}  offset ({}, {})  cursor {}  [{auto}]",
            board.generation(),
            board.population(),
            board.last_compute(),
            view.offset().0,
            view.offset().1,
            at,
        )
    };

    execute!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0),
    )?;

    for line in frame.render().lines() {
        execute!(stdout, style::Print(line), cursor::MoveToNextLine(1))?;
    }

    execute!(stdout, style::Print(&status))?;

    // Park the terminal cursor over the edit cursor's braille cell.
    let col = (cursor_cell.x / 2) as u16;
    let row = ((frame.height() as GridOffset - 1 - cursor_cell.y) / 4) as u16;
    execute!(stdout, cursor::MoveTo(col, row), cursor::Show)?;

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    terminal::enable_raw_mode().context("Failed to enter raw mode")?;

    let result = run();

    terminal::disable_raw_mode().context("Failed to leave raw mode")?;

    result
}

fn run() -> anyhow::Result<()> {
    let (cols, rows) = terminal::size().context("Failed to read terminal size")?;
    let (w, h) = window_cells(cols, rows);

    let mut view =
        Viewport::new(w as GridOffset, h as GridOffset).context("Terminal too small")?;
    let mut frame = Frame::new(w, h).context("Terminal too small")?;

    let board: SharedBoard = Arc::new(Mutex::new(Board::new()));
    let mut auto: Option<AutoPilot> = None;
    let mut interval = AUTO_DELAY_DEFAULT;

    // Edit cursor, in view-space cells.
    let mut at = Coord::new(
        (w / 2) as GridOffset,
        (h / 2) as GridOffset,
    );

    let mut dirty = true;

    loop {
        if dirty {
            draw(&mut frame, &board, &view, auto.as_ref(), at)?;
            dirty = false;
        }

        // Deltas from the driver thread mark the frame dirty; their contents
        // are already folded into the shared board.
        if let Some(pilot) = &auto {
            while pilot.deltas.try_recv().is_ok() {
                dirty = true;
            }
        }

        let event = if event::poll(FRAMETIME)? {
            convert_event(event::read()?)
        } else {
            None
        };

        let Some(event) = event else { continue };

        dirty = true;

        match event {
            Event::AppEvent(AppEvent::Exit) => break,

            Event::AppEvent(AppEvent::Resize { cols, rows }) => {
                let (w, h) = window_cells(cols, rows);

                view = resize_viewport(&view, w, h)?;
                frame = Frame::new(w, h).context("Terminal too small")?;

                at = Coord::new(
                    at.x.clamp(0, w as GridOffset - 1),
                    at.y.clamp(0, h as GridOffset - 1),
                );
            }

            Event::EngineEvent(engine_event) => match engine_event {
                EngineEvent::Step => {
                    let mut board = lock_board(&board)?;
                    board.evolve();
                }
                EngineEvent::Clear => {
                    // Clearing also stops auto-evolve, as in the original.
                    if let Some(pilot) = auto.take() {
                        pilot.driver.stop();
                    }

                    let mut board = lock_board(&board)?;
                    board.clear();
                }
                EngineEvent::ToggleCell => {
                    let mut board = lock_board(&board)?;
                    board.toggle(view.to_logical(at));
                }
                EngineEvent::StampGlider => {
                    let mut board = lock_board(&board)?;
                    patterns::GLIDER.stamp(&mut board, view.to_logical(at));
                }
                EngineEvent::ToggleAuto => match auto.take() {
                    Some(pilot) => pilot.driver.stop(),
                    None => auto = Some(AutoPilot::start(&board, interval)),
                },
                EngineEvent::Faster => {
                    interval = interval.saturating_sub(AUTO_DELAY_STEP).max(AUTO_DELAY_MIN);

                    if let Some(pilot) = &auto {
                        pilot.driver.set_interval(interval);
                    }
                }
                EngineEvent::Slower => {
                    interval = (interval + AUTO_DELAY_STEP).min(AUTO_DELAY_MAX);

                    if let Some(pilot) = &auto {
                        pilot.driver.set_interval(interval);
                    }
                }
            },

            Event::ViewEvent(view_event) => match view_event {
                ViewEvent::Pan(direction) => view.pan(direction, PAN_STEPS),
                ViewEvent::Home => view.home(),
                ViewEvent::CursorMove(direction) => {
                    let (dx, dy) = match direction {
                        Direction::Up => (0, 1),
                        Direction::Down => (0, -1),
                        Direction::Left => (-1, 0),
                        Direction::Right => (1, 0),
                    };

                    at = Coord::new(
                        (at.x + dx).clamp(0, view.width() - 1),
                        (at.y + dy).clamp(0, view.height() - 1),
                    );
                }
            },
        }
    }

    // Wind the driver down before the terminal goes back to cooked mode.
    if let Some(pilot) = auto.take() {
        pilot.driver.stop();
    }

    Ok(())
}
