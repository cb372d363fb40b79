use crossterm::event::{Event, KeyEventKind};
use indoc::indoc;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::{Component, ComponentContext};
use crate::keybindings::{Action, KeyBindings, KeyCombo};
use crate::theme;
use crate::ui::UiFrame;

const INTRO: &str = indoc! {"
    Click a panel to focus it, then type to edit its url.
    Click the red light or × to close a panel.
    Moving the pointer over a panel moves the panel with it.
"};

#[derive(Debug)]
pub struct HelpOverlay {
    visible: bool,
    lines: Vec<String>,
    dismiss: Vec<KeyCombo>,
    width: u16,
    height: u16,
}

impl HelpOverlay {
    pub fn new(bindings: &KeyBindings) -> Self {
        let mut lines: Vec<String> = INTRO.lines().map(str::to_string).collect();
        lines.push(String::new());
        for (action, combos) in bindings.help_entries() {
            lines.push(format!("{:<12} {}", combos.join(", "), action));
        }
        let height = (lines.len() as u16).saturating_add(2);
        let dismiss = [Action::CloseHelp, Action::ToggleHelp]
            .into_iter()
            .flat_map(|action| bindings.combos(action).iter().cloned())
            .collect();
        Self {
            visible: false,
            lines,
            dismiss,
            width: 64,
            height,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Centered dialog rectangle inside `area`.
    pub fn rect_for(&self, area: Rect) -> Rect {
        let width = self.width.min(area.width);
        let height = self.height.min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }
}

impl Component for HelpOverlay {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, _ctx: &ComponentContext) {
        if !self.visible || area.width == 0 || area.height == 0 {
            return;
        }
        let rect = self.rect_for(area);
        frame.render_widget(Clear, rect);
        let style = Style::default().bg(theme::dialog_bg()).fg(theme::dialog_fg());
        let block = Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .style(style);
        let text: Vec<Line> = self.lines.iter().map(|l| Line::raw(l.as_str())).collect();
        frame.render_widget(
            Paragraph::new(text).block(block).wrap(Wrap { trim: false }),
            rect,
        );
    }

    /// While visible, help swallows every key; the close and toggle bindings
    /// hide it.
    fn handle_event(&mut self, event: &Event, _ctx: &ComponentContext) -> bool {
        if !self.visible {
            return false;
        }
        let Event::Key(key) = event else {
            return false;
        };
        if key.kind != KeyEventKind::Press {
            return true;
        }
        if self.dismiss.iter().any(|combo| combo.matches(key)) {
            self.visible = false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn lists_every_binding() {
        let help = HelpOverlay::new(&KeyBindings::default());
        assert!(help.lines.iter().any(|l| l.contains("Ctrl+N")));
        assert!(help.lines.iter().any(|l| l.contains("Quit")));
    }

    #[test]
    fn esc_closes_and_other_keys_are_swallowed() {
        let mut help = HelpOverlay::new(&KeyBindings::default());
        let ctx = ComponentContext::default();
        help.set_visible(true);
        let letter = Event::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        assert!(help.handle_event(&letter, &ctx));
        assert!(help.visible());
        let esc = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(help.handle_event(&esc, &ctx));
        assert!(!help.visible());
        assert!(!help.handle_event(&esc, &ctx));
    }

    #[test]
    fn closes_with_the_bindings_it_was_built_from() {
        let mut kb = KeyBindings::new();
        kb.add(
            Action::CloseHelp,
            KeyCombo::new(KeyCode::Char('x'), KeyModifiers::NONE),
        );
        let mut help = HelpOverlay::new(&kb);
        let ctx = ComponentContext::default();
        help.set_visible(true);
        let esc = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(help.handle_event(&esc, &ctx));
        assert!(help.visible());
        let x = Event::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        assert!(help.handle_event(&x, &ctx));
        assert!(!help.visible());
    }

    #[test]
    fn rect_is_centered_and_clamped() {
        let help = HelpOverlay::new(&KeyBindings::default());
        let area = Rect {
            x: 0,
            y: 0,
            width: 40,
            height: 6,
        };
        let rect = help.rect_for(area);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.height, 6);
        assert_eq!(rect.x, 0);
    }
}
