pub mod decorator;

use ratatui::prelude::Rect;

use crate::store::Position;

pub use decorator::{BrowserChromeDecorator, ChromeAction, ChromeLayout};

/// Signed panel origin with unsigned size.
///
/// Panels may sit partially (or entirely) outside the viewport, so their
/// origin is kept signed and only clipped when drawing or hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatRect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl FloatRect {
    pub fn at(position: Position, width: u16, height: u16) -> Self {
        Self {
            x: position.x,
            y: position.y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width as i32)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height as i32)
    }

    /// Visible part of this rectangle inside `bounds`, if any.
    pub fn clip_to(&self, bounds: Rect) -> Option<Rect> {
        let left = self.x.max(bounds.x as i32);
        let top = self.y.max(bounds.y as i32);
        let right = self.right().min(bounds.right() as i32);
        let bottom = self.bottom().min(bounds.bottom() as i32);
        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect {
            x: left as u16,
            y: top as u16,
            width: (right - left) as u16,
            height: (bottom - top) as u16,
        })
    }

    pub fn contains(&self, column: i32, row: i32) -> bool {
        column >= self.x && column < self.right() && row >= self.y && row < self.bottom()
    }
}

/// Fixed footprint every browser panel is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSize {
    pub width: u16,
    pub height: u16,
}

impl PanelSize {
    pub const MIN_WIDTH: u16 = 24;
    pub const MIN_HEIGHT: u16 = 7;

    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: width.max(Self::MIN_WIDTH),
            height: height.max(Self::MIN_HEIGHT),
        }
    }

    pub fn rect_at(&self, position: Position) -> FloatRect {
        FloatRect::at(position, self.width, self.height)
    }
}

impl Default for PanelSize {
    fn default() -> Self {
        Self::new(60, 14)
    }
}
