use ratatui::buffer::Buffer;
use ratatui::prelude::Rect;
use ratatui::style::{Modifier, Style};

use super::FloatRect;
use crate::theme;

/// Placeholder shown where page content would be rendered.
pub const CONTENT_PLACEHOLDER: &str = "Browser content will be displayed here";

/// What a click at a given cell of a panel lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeAction {
    Close,
    Minimize,
    Maximize,
    TitleBar,
    UrlBar,
    Content,
    None,
}

/// Per-frame data the decorator needs besides geometry.
#[derive(Debug, Clone, Copy)]
pub struct PanelChrome<'a> {
    pub title: &'a str,
    /// Already scrolled to fit the url field.
    pub url: &'a str,
    /// Column of the caret inside the url field, when editing.
    pub url_cursor: Option<usize>,
    pub focused: bool,
}

/// Cell offsets of the interactive parts of a panel, relative to its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeLayout {
    pub width: u16,
    pub height: u16,
}

impl ChromeLayout {
    pub const TITLE_ROW: i32 = 1;
    pub const URL_ROW: i32 = 3;
    pub const CONTENT_TOP: i32 = 4;
    pub const TRAFFIC_CLOSE: i32 = 2;
    pub const TRAFFIC_MINIMIZE: i32 = 4;
    pub const TRAFFIC_MAXIMIZE: i32 = 6;
    pub const TITLE_START: i32 = 9;
    pub const URL_START: i32 = 4;

    pub fn for_rect(rect: FloatRect) -> Self {
        Self {
            width: rect.width,
            height: rect.height,
        }
    }

    pub fn control_close(&self) -> i32 {
        self.width as i32 - 3
    }

    pub fn control_maximize(&self) -> i32 {
        self.width as i32 - 5
    }

    pub fn control_minimize(&self) -> i32 {
        self.width as i32 - 7
    }

    /// Number of url characters that fit between the prompt and the border.
    pub fn url_width(&self) -> usize {
        (self.width as i32 - Self::URL_START - 2).max(0) as usize
    }

    pub fn title_width(&self) -> usize {
        (self.control_minimize() - Self::TITLE_START - 1).max(0) as usize
    }

    pub fn content_rows(&self) -> std::ops::Range<i32> {
        Self::CONTENT_TOP..self.height as i32 - 1
    }
}

pub trait WindowDecorator: std::fmt::Debug {
    fn render_window(
        &self,
        buffer: &mut Buffer,
        rect: FloatRect,
        bounds: Rect,
        chrome: PanelChrome,
    );

    fn hit_test(&self, rect: FloatRect, column: i32, row: i32) -> ChromeAction;
}

/// Draws a panel the way a desktop browser frames a page: traffic lights and
/// window controls in the title bar, a url row, then the page area.
#[derive(Debug, Default)]
pub struct BrowserChromeDecorator;

impl WindowDecorator for BrowserChromeDecorator {
    fn render_window(
        &self,
        buffer: &mut Buffer,
        rect: FloatRect,
        bounds: Rect,
        chrome: PanelChrome,
    ) {
        let Some(visible) = rect.clip_to(bounds) else {
            return;
        };
        let layout = ChromeLayout::for_rect(rect);
        let border = Style::default()
            .fg(theme::decorator_border())
            .bg(theme::panel_bg());
        let header = if chrome.focused {
            Style::default()
                .bg(theme::decorator_header_bg())
                .fg(theme::decorator_header_fg())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .bg(theme::decorator_header_inactive_bg())
                .fg(theme::decorator_header_fg())
        };
        let body = Style::default().bg(theme::panel_bg()).fg(theme::panel_fg());
        let url_style = Style::default().bg(theme::url_bg()).fg(theme::url_fg());

        // Opaque body so later panels cover earlier ones.
        for y in visible.top()..visible.bottom() {
            for x in visible.left()..visible.right() {
                if let Some(cell) = buffer.cell_mut((x, y)) {
                    cell.set_symbol(" ");
                    cell.set_style(body);
                }
            }
        }

        let mut put = |dx: i32, dy: i32, symbol: &str, style: Style| {
            let x = rect.x.saturating_add(dx);
            let y = rect.y.saturating_add(dy);
            if x < visible.left() as i32
                || x >= visible.right() as i32
                || y < visible.top() as i32
                || y >= visible.bottom() as i32
            {
                return;
            }
            if let Some(cell) = buffer.cell_mut((x as u16, y as u16)) {
                cell.set_symbol(symbol);
                cell.set_style(style);
            }
        };

        let w = rect.width as i32;
        let h = rect.height as i32;

        // Borders
        for dx in 0..w {
            let (top, bottom) = match dx {
                0 => ("┌", "└"),
                _ if dx == w - 1 => ("┐", "┘"),
                _ => ("─", "─"),
            };
            put(dx, 0, top, border);
            put(dx, h - 1, bottom, border);
            if dx != 0 && dx != w - 1 {
                put(dx, 2, "─", border);
            }
        }
        for dy in 1..h - 1 {
            let (left, right) = if dy == 2 { ("├", "┤") } else { ("│", "│") };
            put(0, dy, left, border);
            put(w - 1, dy, right, border);
        }

        // Title bar
        let row = ChromeLayout::TITLE_ROW;
        for dx in 1..w - 1 {
            put(dx, row, " ", header);
        }
        put(ChromeLayout::TRAFFIC_CLOSE, row, "●", header.fg(theme::traffic_close()));
        put(ChromeLayout::TRAFFIC_MINIMIZE, row, "●", header.fg(theme::traffic_minimize()));
        put(ChromeLayout::TRAFFIC_MAXIMIZE, row, "●", header.fg(theme::traffic_maximize()));
        for (idx, ch) in chrome.title.chars().take(layout.title_width()).enumerate() {
            put(ChromeLayout::TITLE_START + idx as i32, row, &ch.to_string(), header);
        }
        put(layout.control_minimize(), row, "_", header);
        put(layout.control_maximize(), row, "□", header);
        put(layout.control_close(), row, "×", header);

        // Url row
        let row = ChromeLayout::URL_ROW;
        put(2, row, ">", body.add_modifier(Modifier::BOLD));
        for dx in ChromeLayout::URL_START..w - 2 {
            put(dx, row, " ", url_style);
        }
        for (idx, ch) in chrome.url.chars().take(layout.url_width()).enumerate() {
            put(ChromeLayout::URL_START + idx as i32, row, &ch.to_string(), url_style);
        }
        if chrome.focused
            && let Some(col) = chrome.url_cursor
            && col < layout.url_width()
        {
            let dx = ChromeLayout::URL_START + col as i32;
            let symbol = chrome
                .url
                .chars()
                .nth(col)
                .map(|c| c.to_string())
                .unwrap_or_else(|| " ".to_string());
            put(dx, row, &symbol, url_style.add_modifier(Modifier::REVERSED));
        }

        // Placeholder content, centered in the page area
        let rows = layout.content_rows();
        if !rows.is_empty() {
            let mid = rows.start + (rows.end - rows.start) / 2;
            let inner = (w - 2).max(0) as usize;
            let text: String = CONTENT_PLACEHOLDER.chars().take(inner).collect();
            let start = 1 + (inner.saturating_sub(text.chars().count()) / 2) as i32;
            let muted = body.fg(theme::panel_inactive_fg());
            for (idx, ch) in text.chars().enumerate() {
                put(start + idx as i32, mid, &ch.to_string(), muted);
            }
        }
    }

    fn hit_test(&self, rect: FloatRect, column: i32, row: i32) -> ChromeAction {
        if !rect.contains(column, row) {
            return ChromeAction::None;
        }
        let layout = ChromeLayout::for_rect(rect);
        let dx = column - rect.x;
        let dy = row - rect.y;
        match dy {
            ChromeLayout::TITLE_ROW => match dx {
                ChromeLayout::TRAFFIC_CLOSE => ChromeAction::Close,
                ChromeLayout::TRAFFIC_MINIMIZE => ChromeAction::Minimize,
                ChromeLayout::TRAFFIC_MAXIMIZE => ChromeAction::Maximize,
                _ if dx == layout.control_close() => ChromeAction::Close,
                _ if dx == layout.control_maximize() => ChromeAction::Maximize,
                _ if dx == layout.control_minimize() => ChromeAction::Minimize,
                _ => ChromeAction::TitleBar,
            },
            ChromeLayout::URL_ROW => ChromeAction::UrlBar,
            _ if layout.content_rows().contains(&dy) => ChromeAction::Content,
            _ => ChromeAction::TitleBar,
        }
    }
}
