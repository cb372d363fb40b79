//! System clipboard access for the url bar.
//!
//! A thin wrapper over `arboard` so the desktop can paste into and copy out
//! of the focused panel's url field without touching platform APIs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard backend error: {0}")]
    Backend(#[from] arboard::Error),
}

/// Read the clipboard as a `String`.
pub fn get() -> Result<String, ClipboardError> {
    let mut cb = arboard::Clipboard::new()?;
    cb.get_text().map_err(ClipboardError::from)
}

/// Set the system clipboard to `text`.
pub fn set(text: &str) -> Result<(), ClipboardError> {
    let mut cb = arboard::Clipboard::new()?;
    cb.set_text(text.to_owned()).map_err(ClipboardError::from)
}
