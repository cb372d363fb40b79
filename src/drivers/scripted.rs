use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::Event;

use super::InputDriver;
use super::keyboard::KeyboardNormalizer;

/// Replays a fixed list of events, then reports an idle terminal.
///
/// Drives the event loop headlessly in tests and demos; events go through the
/// same normalizer the console driver uses.
pub struct ScriptedDriver {
    normalizer: KeyboardNormalizer,
    queue: VecDeque<Event>,
    mouse_capture: Option<bool>,
}

impl ScriptedDriver {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            normalizer: KeyboardNormalizer::new(),
            queue: events.into_iter().collect(),
            mouse_capture: None,
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Last value passed to `set_mouse_capture`, if any.
    pub fn mouse_capture(&self) -> Option<bool> {
        self.mouse_capture
    }
}

impl InputDriver for ScriptedDriver {
    fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
        Ok(!self.queue.is_empty())
    }

    fn read(&mut self) -> io::Result<Event> {
        while let Some(evt) = self.queue.pop_front() {
            if let Some(normalized) = self.normalizer.normalize(evt) {
                return Ok(normalized);
            }
        }
        Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "scripted input exhausted",
        ))
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        self.mouse_capture = Some(enabled);
        Ok(())
    }
}
