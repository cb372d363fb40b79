use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

/// Smooths over platform differences in key reporting: Shift+Tab always
/// arrives as `BackTab`, and only press events reach the desktop.
#[derive(Default)]
pub struct KeyboardNormalizer {
    esc_down: bool,
}

impl KeyboardNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn normalize(&mut self, evt: Event) -> Option<Event> {
        match evt {
            Event::Key(mut key) => {
                if key.code == KeyCode::Tab && key.modifiers.contains(KeyModifiers::SHIFT) {
                    key.code = KeyCode::BackTab;
                }
                if key.code == KeyCode::BackTab {
                    key.modifiers.remove(KeyModifiers::SHIFT);
                }
                match key.kind {
                    KeyEventKind::Release => {
                        if key.code == KeyCode::Esc {
                            self.esc_down = false;
                        }
                        return None;
                    }
                    KeyEventKind::Repeat if cfg!(windows) => return None,
                    _ => {}
                }
                // Windows can report a held Esc as repeated presses.
                if key.code == KeyCode::Esc {
                    if self.esc_down && cfg!(windows) {
                        return None;
                    }
                    self.esc_down = true;
                } else {
                    self.esc_down = false;
                }
                Some(Event::Key(key))
            }
            other => Some(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    #[test]
    fn tab_with_shift_becomes_backtab() {
        let mut norm = KeyboardNormalizer::new();
        let evt = Event::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT));
        match norm.normalize(evt) {
            Some(Event::Key(k)) => {
                assert_eq!(k.code, KeyCode::BackTab);
                assert!(!k.modifiers.contains(KeyModifiers::SHIFT));
            }
            other => panic!("expected key event, got {other:?}"),
        }
    }

    #[test]
    fn release_key_is_ignored() {
        let mut norm = KeyboardNormalizer::new();
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(norm.normalize(Event::Key(key)).is_none());
    }

    #[test]
    fn non_key_events_pass_through() {
        let mut norm = KeyboardNormalizer::new();
        assert_eq!(norm.normalize(Event::Resize(10, 20)), Some(Event::Resize(10, 20)));
    }
}
