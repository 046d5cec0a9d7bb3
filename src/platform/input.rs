//! Keyboard mapping
//!
//! Keys arrive as DOM `KeyboardEvent.key` strings. Unknown keys map to
//! nothing and are dropped.

use crate::sim::Command;

/// Key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEdge {
    Down,
    Up,
}

fn is_left(key: &str) -> bool {
    matches!(key, "ArrowLeft" | "Left")
}

fn is_right(key: &str) -> bool {
    matches!(key, "ArrowRight" | "Right")
}

/// Translate a key event into a command
pub fn map_key(key: &str, edge: KeyEdge) -> Option<Command> {
    match edge {
        KeyEdge::Down if is_right(key) => Some(Command::MoveRight),
        KeyEdge::Down if is_left(key) => Some(Command::MoveLeft),
        KeyEdge::Down => match key {
            " " | "Spacebar" => Some(Command::TogglePause),
            // Restart button equivalent; the state ignores it outside `Over`
            "r" | "R" => Some(Command::Restart),
            _ => None,
        },
        // Releasing either arrow stops the paddle
        KeyEdge::Up if is_left(key) || is_right(key) => Some(Command::StopPaddle),
        KeyEdge::Up => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(map_key("ArrowRight", KeyEdge::Down), Some(Command::MoveRight));
        assert_eq!(map_key("Right", KeyEdge::Down), Some(Command::MoveRight));
        assert_eq!(map_key("ArrowLeft", KeyEdge::Down), Some(Command::MoveLeft));
        assert_eq!(map_key("Left", KeyEdge::Down), Some(Command::MoveLeft));
        assert_eq!(map_key("ArrowLeft", KeyEdge::Up), Some(Command::StopPaddle));
        assert_eq!(map_key("Right", KeyEdge::Up), Some(Command::StopPaddle));
    }

    #[test]
    fn test_space_and_restart() {
        assert_eq!(map_key(" ", KeyEdge::Down), Some(Command::TogglePause));
        assert_eq!(map_key("r", KeyEdge::Down), Some(Command::Restart));
        assert_eq!(map_key(" ", KeyEdge::Up), None);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        assert_eq!(map_key("q", KeyEdge::Down), None);
        assert_eq!(map_key("ArrowUp", KeyEdge::Down), None);
        assert_eq!(map_key("Enter", KeyEdge::Up), None);
    }
}
