//! Keyboard input handling

use game_core::Command;
use winit::keyboard::KeyCode;

/// Map a pressed physical key to a game command
pub fn map_key(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::ArrowUp => Some(Command::PaddleUp),
        KeyCode::ArrowDown => Some(Command::PaddleDown),
        KeyCode::Space => Some(Command::TogglePause),
        KeyCode::KeyD => Some(Command::ToggleSlowMotion),
        KeyCode::Enter | KeyCode::NumpadEnter => Some(Command::LogPaddle),
        KeyCode::KeyR => Some(Command::ForceReset),
        KeyCode::KeyF => Some(Command::LogTouch),
        KeyCode::Escape => Some(Command::Quit),
        _ => None,
    }
}
