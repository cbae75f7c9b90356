use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Action;
use crate::core::geometry::Direction;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Passed to the prompt session
    Key(Action),

    // TUI-local events (handled directly in TUI)
    Quit,
    Resize,
}

/// Block until the next terminal event; `None` for events the prompt ignores.
pub fn read_event() -> std::io::Result<Option<TuiEvent>> {
    match event::read()? {
        Event::Key(key_event) => Ok(map_key(key_event)),
        Event::Resize(_, _) => Ok(Some(TuiEvent::Resize)),
        _ => Ok(None),
    }
}

pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Keyboard enhancement can report releases; only presses (and repeats) act
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );

    let shift = key_event.modifiers.contains(KeyModifiers::SHIFT);
    let arrow = |direction| Some(TuiEvent::Key(Action::Move { direction, shift }));

    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        (_, KeyCode::Up) => arrow(Direction::Up),
        (_, KeyCode::Down) => arrow(Direction::Down),
        (_, KeyCode::Left) => arrow(Direction::Left),
        (_, KeyCode::Right) => arrow(Direction::Right),
        (_, KeyCode::Enter) => Some(TuiEvent::Key(Action::Submit)),
        (_, KeyCode::Char(c)) => c
            .to_digit(10)
            .filter(|&d| d > 0)
            .map(|d| TuiEvent::Key(Action::Jump(d as usize))),
        _ => None,
    }
}
