use crossterm::event::{Event, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use super::{Component, ComponentContext};
use crate::layout::rect_contains;
use crate::theme;
use crate::ui::UiFrame;

/// Clickable label pinned to the top-right corner of the desktop, drawn
/// above every panel.
#[derive(Debug, Clone)]
pub struct ToolbarButton {
    label: String,
    margin: u16,
    rect: Option<Rect>,
}

impl ToolbarButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            margin: 1,
            rect: None,
        }
    }

    pub fn rect_for(&self, area: Rect) -> Option<Rect> {
        let width = self.label.chars().count() as u16;
        if area.width < width.saturating_add(self.margin) || area.height <= self.margin {
            return None;
        }
        Some(Rect {
            x: area.right() - width - self.margin,
            y: area.y + self.margin,
            width,
            height: 1,
        })
    }

    /// Lay the button out against `area`; called whenever the viewport changes.
    pub fn place(&mut self, area: Rect) {
        self.rect = self.rect_for(area);
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.rect
            .is_some_and(|rect| rect_contains(rect, column, row))
    }
}

impl Component for ToolbarButton {
    /// Draws highlighted while `ctx` reports the pointer over the button.
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        self.place(area);
        let Some(rect) = self.rect else {
            return;
        };
        let bg = if ctx.focused() {
            theme::button_hover_bg()
        } else {
            theme::button_bg()
        };
        let style = Style::default()
            .bg(bg)
            .fg(theme::button_fg())
            .add_modifier(Modifier::BOLD);
        frame.set_string(rect.x, rect.y, &self.label, style);
    }

    /// True for a left click on the button.
    fn handle_event(&mut self, event: &Event, _ctx: &ComponentContext) -> bool {
        matches!(
            event,
            Event::Mouse(mouse)
                if mouse.kind == MouseEventKind::Down(MouseButton::Left)
                    && self.contains(mouse.column, mouse.row)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseEvent};
    use ratatui::buffer::Buffer;

    fn area() -> Rect {
        Rect {
            x: 0,
            y: 0,
            width: 40,
            height: 10,
        }
    }

    #[test]
    fn placed_in_top_right_corner() {
        let button = ToolbarButton::new("[+ New]");
        assert_eq!(
            button.rect_for(area()),
            Some(Rect {
                x: 32,
                y: 1,
                width: 7,
                height: 1
            })
        );
    }

    #[test]
    fn left_click_inside_triggers() {
        let mut button = ToolbarButton::new("[+ New]");
        button.place(area());
        let click = |column| {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row: 1,
                modifiers: KeyModifiers::NONE,
            })
        };
        let ctx = ComponentContext::default();
        assert!(button.handle_event(&click(33), &ctx));
        assert!(!button.handle_event(&click(2), &ctx));
    }

    #[test]
    fn hover_changes_background() {
        let mut button = ToolbarButton::new("[+ New]");
        let mut buffer = Buffer::empty(area());
        {
            let mut frame = UiFrame::from_parts(area(), &mut buffer);
            button.render(&mut frame, area(), &ComponentContext::default());
        }
        assert_eq!(buffer.cell((32, 1)).map(|c| c.bg), Some(theme::button_bg()));
        {
            let mut frame = UiFrame::from_parts(area(), &mut buffer);
            button.render(&mut frame, area(), &ComponentContext::new(true));
        }
        assert_eq!(
            buffer.cell((32, 1)).map(|c| c.bg),
            Some(theme::button_hover_bg())
        );
        assert_eq!(buffer.cell((32, 1)).map(|c| c.symbol()), Some("["));
    }

    #[test]
    fn hidden_when_viewport_too_small() {
        let button = ToolbarButton::new("[+ New Window]");
        let tiny = Rect {
            x: 0,
            y: 0,
            width: 5,
            height: 1,
        };
        assert_eq!(button.rect_for(tiny), None);
    }
}
