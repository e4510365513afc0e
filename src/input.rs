use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

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

    /// Returns the unit cell offset for this direction.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events forwarded to the engine by the host.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    PauseToggle,
    Reset,
    Quit,
}

/// Maps a raw terminal key event to a game input.
///
/// Returns `None` for keys the game does not bind and for non-press
/// events (Windows terminals also report repeats and releases).
#[must_use]
pub fn map_key_event(event: KeyEvent) -> Option<GameInput> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    match event.code {
        KeyCode::Up | KeyCode::Char('w') => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Char('p') | KeyCode::Char(' ') => Some(GameInput::PauseToggle),
        KeyCode::Enter | KeyCode::Char('r') => Some(GameInput::Reset),
        KeyCode::Esc | KeyCode::Char('q') => Some(GameInput::Quit),
        _ => None,
    }
}
