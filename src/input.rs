use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit offset for one step along this direction.
    #[must_use]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    TogglePause,
    SpeedUp,
    SpeedDown,
    Quit,
}

/// Maps one key press to a game input.
///
/// Each arrow key maps to the same absolute direction regardless of the
/// current heading; reversal rejection lives in the snake, not here.
/// Unrecognized keys map to `None` and are silently ignored.
#[must_use]
pub fn translate_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Up => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameInput::TogglePause),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(GameInput::SpeedUp),
        KeyCode::Char('-') => Some(GameInput::SpeedDown),
        KeyCode::Esc => Some(GameInput::Quit),
        _ => None,
    }
}

/// Non-blocking keyboard poller over crossterm events.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Drains pending terminal events, waiting up to `timeout` for the
    /// first one, and returns every recognized game input in arrival order.
    pub fn poll_inputs(&mut self, timeout: Duration) -> io::Result<Vec<GameInput>> {
        let mut inputs = Vec::new();
        let mut wait = timeout;

        while event::poll(wait)? {
            if let Event::Key(key) = event::read()? {
                if let Some(input) = translate_key(key) {
                    inputs.push(input);
                }
            }
            // Only the first wait blocks; the rest drain the queue.
            wait = Duration::ZERO;
        }

        Ok(inputs)
    }
}
