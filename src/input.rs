use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;

use crate::events::AppEvent;
use crate::events::EngineEvent;
use crate::events::Event;
use crate::events::ViewEvent;
use crate::viewport::Direction;

/// Converts a crossterm event into an app event.
///
/// Vim-style `h`/`j`/`k`/`l` pans the viewport, arrows move the edit cursor,
/// the rest mirrors the original controls: space steps, `a` toggles
/// auto-evolve, `+`/`-` adjust its speed, `t` toggles the cell under the
/// cursor, `0` homes the view.
pub fn convert_event(event: CrossTermEvent) -> Option<Event> {
    match event {
        CrossTermEvent::Key(key_event) => match key_event {
            KeyEvent {
                code: KeyCode::Char('q'),
                ..
            }
            | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => Some(Event::AppEvent(AppEvent::Exit)),

            KeyEvent {
                code: KeyCode::Char(' '),
                ..
            } => Some(Event::EngineEvent(EngineEvent::Step)),

            KeyEvent {
                code: KeyCode::Char('c'),
                ..
            } => Some(Event::EngineEvent(EngineEvent::Clear)),

            KeyEvent {
                code: KeyCode::Char('t'),
                ..
            }
            | KeyEvent {
                code: KeyCode::Enter,
                ..
            } => Some(Event::EngineEvent(EngineEvent::ToggleCell)),

            KeyEvent {
                code: KeyCode::Char('g'),
                ..
            } => Some(Event::EngineEvent(EngineEvent::StampGlider)),

            KeyEvent {
                code: KeyCode::Char('a'),
                ..
            } => Some(Event::EngineEvent(EngineEvent::ToggleAuto)),

            KeyEvent {
                code: KeyCode::Char('+'),
                ..
            } => Some(Event::EngineEvent(EngineEvent::Faster)),

            KeyEvent {
                code: KeyCode::Char('-'),
                ..
            } => Some(Event::EngineEvent(EngineEvent::Slower)),

            KeyEvent {
                code: KeyCode::Char('h'),
                ..
            } => Some(Event::ViewEvent(ViewEvent::Pan(Direction::Left))),

            KeyEvent {
                code: KeyCode::Char('j'),
                ..
            } => Some(Event::ViewEvent(ViewEvent::Pan(Direction::Down))),

            KeyEvent {
                code: KeyCode::Char('k'),
                ..
            } => Some(Event::ViewEvent(ViewEvent::Pan(Direction::Up))),

            KeyEvent {
                code: KeyCode::Char('l'),
                ..
            } => Some(Event::ViewEvent(ViewEvent::Pan(Direction::Right))),

            KeyEvent {
                code: KeyCode::Char('0'),
                ..
            } => Some(Event::ViewEvent(ViewEvent::Home)),

            KeyEvent {
                code: KeyCode::Left, ..
            } => Some(Event::ViewEvent(ViewEvent::CursorMove(Direction::Left))),

            KeyEvent {
                code: KeyCode::Down, ..
            } => Some(Event::ViewEvent(ViewEvent::CursorMove(Direction::Down))),

            KeyEvent {
                code: KeyCode::Up, ..
            } => Some(Event::ViewEvent(ViewEvent::CursorMove(Direction::Up))),

            KeyEvent {
                code: KeyCode::Right,
                ..
            } => Some(Event::ViewEvent(ViewEvent::CursorMove(Direction::Right))),

            _ => None,
        },
        CrossTermEvent::Resize(cols, rows) => {
            Some(Event::AppEvent(AppEvent::Resize { cols, rows }))
        }
        _ => None,
    }
}
