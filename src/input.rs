use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

/// Canonical travel directions for the snake.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Returns the opposite heading.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// High-level input events consumed by the control loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Steer(Heading),
    PauseToggle,
    Confirm,
    Quit,
}

/// Polls the terminal for at most `timeout` and translates one key event.
///
/// Returns `Ok(None)` when no relevant event arrived within the timeout.
/// Key releases are ignored so terminals reporting both edges do not
/// double-steer.
pub fn poll_input(timeout: Duration) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind != KeyEventKind::Release => Ok(translate_key(key.code)),
        _ => Ok(None),
    }
}

fn translate_key(code: KeyCode) -> Option<GameInput> {
    match code {
        KeyCode::Up => Some(GameInput::Steer(Heading::Up)),
        KeyCode::Down => Some(GameInput::Steer(Heading::Down)),
        KeyCode::Left => Some(GameInput::Steer(Heading::Left)),
        KeyCode::Right => Some(GameInput::Steer(Heading::Right)),
        KeyCode::Char(' ') => Some(GameInput::PauseToggle),
        KeyCode::Enter => Some(GameInput::Confirm),
        KeyCode::Esc | KeyCode::Char('q') => Some(GameInput::Quit),
        _ => None,
    }
}
