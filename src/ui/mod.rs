//! Terminal presentation: a `Renderer` backed by ratatui and crossterm.

pub mod scene;

use crate::core::error::GameError;
use crate::core::game_loop::Renderer;
use crate::core::simulation::Snapshot;
use crate::sprite::SpriteSheet;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;

pub struct TerminalRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    sprites: Arc<SpriteSheet>,
    world: (u32, u32),
}

impl TerminalRenderer {
    /// Switch the terminal to raw mode on the alternate screen.
    /// Raw mode is undone again if any later setup step fails.
    pub fn new(sprites: Arc<SpriteSheet>, world: (u32, u32)) -> Result<Self, GameError> {
        enable_raw_mode()?;
        let terminal = undo_on_error(
            || {
                let mut stdout = io::stdout();
                stdout.execute(EnterAlternateScreen)?;
                let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
                terminal.hide_cursor()?;
                Ok(terminal)
            },
            || {
                let _ = io::stdout().execute(LeaveAlternateScreen);
                let _ = disable_raw_mode();
            },
        )?;
        Ok(Self {
            terminal,
            sprites,
            world,
        })
    }
}

/// Run `setup`; if it fails, run `undo` before handing back the error.
fn undo_on_error<T>(
    setup: impl FnOnce() -> Result<T, GameError>,
    undo: impl FnOnce(),
) -> Result<T, GameError> {
    let result = setup();
    if result.is_err() {
        undo();
    }
    result
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, snapshot: &Snapshot) -> Result<(), GameError> {
        let sprites = &self.sprites;
        let world = self.world;
        self.terminal.draw(|frame| {
            let area = frame.size();
            scene::render_scene(frame, area, snapshot, sprites, world);
        })?;
        Ok(())
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        // Give the terminal back to the shell.
        let _ = disable_raw_mode();
        let _ = self.terminal.backend_mut().execute(LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
