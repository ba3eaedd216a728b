//! Keyboard input for the terminal game.

use crate::core::error::GameError;
use crate::core::game_loop::{Command, InputSource};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Map a key press to a game command.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter | KeyCode::Char('k') => {
            Some(Command::Jump)
        }
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        _ => None,
    }
}

/// Reads whatever crossterm has buffered without blocking.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn drain(&mut self) -> Result<Vec<Command>, GameError> {
        let mut commands = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                commands.extend(map_key(key));
            }
        }
        Ok(commands)
    }
}

/// Block until any key is pressed, or `timeout` passes.
pub fn wait_for_key(timeout: Duration) -> Result<(), GameError> {
    if event::poll(timeout)? {
        let _ = event::read()?;
    }
    Ok(())
}
