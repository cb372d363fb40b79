//! Caret state for a panel's url field.
//!
//! The url text itself lives in the window store; `UrlBar` only tracks where
//! the caret sits and turns key presses into the full replacement text the
//! store should receive.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlEdit {
    /// The text changed; carries the complete new value.
    Changed(String),
    /// Enter was pressed on the url form.
    Submitted,
    /// Only the caret moved.
    CaretMoved,
    Ignored,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlBar {
    cursor: usize,
}

impl UrlBar {
    /// Caret placed after the last character of `url`.
    pub fn at_end(url: &str) -> Self {
        Self {
            cursor: url.chars().count(),
        }
    }

    fn clamp(&mut self, url: &str) {
        self.cursor = self.cursor.min(url.chars().count());
    }

    pub fn handle_key(&mut self, url: &str, key: &KeyEvent) -> UrlEdit {
        self.clamp(url);
        let len = url.chars().count();
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return UrlEdit::Ignored;
        }
        match key.code {
            KeyCode::Char(c) => UrlEdit::Changed(self.insert(url, &c.to_string())),
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return UrlEdit::Ignored;
                }
                self.cursor -= 1;
                UrlEdit::Changed(remove_char(url, self.cursor))
            }
            KeyCode::Delete => {
                if self.cursor >= len {
                    return UrlEdit::Ignored;
                }
                UrlEdit::Changed(remove_char(url, self.cursor))
            }
            KeyCode::Left if self.cursor > 0 => {
                self.cursor -= 1;
                UrlEdit::CaretMoved
            }
            KeyCode::Right if self.cursor < len => {
                self.cursor += 1;
                UrlEdit::CaretMoved
            }
            KeyCode::Home => {
                self.cursor = 0;
                UrlEdit::CaretMoved
            }
            KeyCode::End => {
                self.cursor = len;
                UrlEdit::CaretMoved
            }
            KeyCode::Enter => UrlEdit::Submitted,
            _ => UrlEdit::Ignored,
        }
    }

    /// Insert `text` at the caret and return the new url. Line breaks are
    /// dropped, as a single-line text input would.
    pub fn insert(&mut self, url: &str, text: &str) -> String {
        self.clamp(url);
        let text: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        let at = byte_index(url, self.cursor);
        let mut out = String::with_capacity(url.len() + text.len());
        out.push_str(&url[..at]);
        out.push_str(&text);
        out.push_str(&url[at..]);
        self.cursor += text.chars().count();
        out
    }

    /// Move the caret to a clicked column of the field as currently shown.
    pub fn click(&mut self, url: &str, width: usize, column: usize) {
        self.clamp(url);
        let start = if self.cursor >= width && width > 0 {
            self.cursor + 1 - width
        } else {
            0
        };
        self.cursor = (start + column).min(url.chars().count());
    }

    /// Slice of `url` that fits in `width` cells with the caret visible, and
    /// the caret column inside that slice.
    pub fn view(&self, url: &str, width: usize) -> (String, usize) {
        let cursor = self.cursor.min(url.chars().count());
        if width == 0 {
            return (String::new(), 0);
        }
        let start = if cursor >= width { cursor + 1 - width } else { 0 };
        let visible = url.chars().skip(start).take(width).collect();
        (visible, cursor - start)
    }
}

fn byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len())
}

fn remove_char(s: &str, char_idx: usize) -> String {
    s.chars()
        .enumerate()
        .filter_map(|(idx, c)| (idx != char_idx).then_some(c))
        .collect()
}
