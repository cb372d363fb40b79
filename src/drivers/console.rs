use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::InputDriver;
use super::keyboard::KeyboardNormalizer;

pub struct ConsoleDriver {
    normalizer: KeyboardNormalizer,
}

impl Default for ConsoleDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleDriver {
    pub fn new() -> Self {
        Self {
            normalizer: KeyboardNormalizer::new(),
        }
    }

    /// Pull from `source` until an event survives normalization.
    fn read_from<F>(&mut self, mut source: F) -> io::Result<Event>
    where
        F: FnMut() -> io::Result<Event>,
    {
        loop {
            if let Some(normalized) = self.normalizer.normalize(source()?) {
                return Ok(normalized);
            }
        }
    }
}

impl InputDriver for ConsoleDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        crossterm::event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        self.read_from(crossterm::event::read)
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        if enabled {
            execute!(io::stdout(), EnableMouseCapture)
        } else {
            execute!(io::stdout(), DisableMouseCapture)
        }
    }
}

/// Owns the real terminal for the lifetime of the desktop: alternate screen,
/// raw mode and mouse reporting are enabled on `enter` and restored on `exit`
/// or drop.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    entered: bool,
}

impl TerminalSession {
    pub fn new() -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            entered: false,
        })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    pub fn enter(&mut self) -> io::Result<()> {
        if self.entered {
            return Ok(());
        }
        execute!(self.terminal.backend_mut(), EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        self.terminal.hide_cursor()?;
        self.entered = true;
        Ok(())
    }

    pub fn exit(&mut self) -> io::Result<()> {
        if !self.entered {
            return Ok(());
        }
        terminal::disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        self.terminal.show_cursor()?;
        self.entered = false;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
