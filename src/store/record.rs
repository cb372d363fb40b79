use std::fmt;

use uuid::Uuid;

/// Url every new window starts with.
pub const BLANK_URL: &str = "about:blank";

/// Title every new window starts with.
pub const DEFAULT_TITLE: &str = "New Window";

/// Opaque window identifier.
///
/// Generated ids are UUID v4 strings, but any string is accepted so callers
/// can focus (or destroy) ids that were never issued.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(String);

impl WindowId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for WindowId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Signed desktop coordinate in terminal cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub id: WindowId,
    pub url: String,
    pub title: String,
    pub position: Position,
}

impl WindowRecord {
    pub fn new(id: WindowId, position: Position) -> Self {
        Self {
            id,
            url: BLANK_URL.to_string(),
            title: DEFAULT_TITLE.to_string(),
            position,
        }
    }
}

/// Pointer and keyboard activity shared by every window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    pub mouse_position: Position,
    pub keyboard_input: String,
    pub active_window_id: Option<WindowId>,
}
