//! The desktop: renders the store's windows as browser panels and turns raw
//! terminal input into store operations.
//!
//! Attribution rules:
//! - Pointer motion goes to the panel picked by the configured [`HitPolicy`].
//! - Clicks go to the panel painted on top at that cell.
//! - Keys go to the active window; printable keys and Enter are recorded as
//!   key presses before they edit the url field.

use std::collections::HashMap;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::prelude::Rect;
use ratatui::style::Style;

use crate::clipboard;
use crate::components::{
    Component, ComponentContext, HelpOverlay, StatusBar, ToolbarButton, UrlBar, UrlEdit,
};
use crate::config::ViewConfig;
use crate::error::Result;
use crate::event_loop::ControlFlow;
use crate::keybindings::{Action, KeyBindings};
use crate::layout::{HitPolicy, RegionMap};
use crate::store::{PointerMode, Position, StorePolicy, WindowId, WindowRecord, WindowStore};
use crate::theme;
use crate::ui::UiFrame;
use crate::window::decorator::{ChromeAction, ChromeLayout, PanelChrome, WindowDecorator};
use crate::window::{BrowserChromeDecorator, FloatRect};

pub const NEW_WINDOW_LABEL: &str = "[+ New Window]";

#[derive(Debug, Clone)]
struct HeaderDrag {
    id: WindowId,
    initial: Position,
    start_col: u16,
    start_row: u16,
}

pub struct Desktop {
    store: WindowStore,
    view: ViewConfig,
    bindings: KeyBindings,
    decorator: Box<dyn WindowDecorator>,
    url_bars: HashMap<WindowId, UrlBar>,
    new_window: ToolbarButton,
    status: StatusBar,
    help: HelpOverlay,
    header_drag: Option<HeaderDrag>,
    button_hover: bool,
    viewport: Rect,
}

impl Desktop {
    pub fn new(policy: StorePolicy, view: ViewConfig) -> Self {
        let bindings = KeyBindings::default();
        let help = HelpOverlay::new(&bindings);
        let mut status = StatusBar::new();
        status.set_style(Style::default().bg(theme::status_bg()).fg(theme::status_fg()));
        let mut desktop = Self {
            store: WindowStore::with_policy(policy),
            view,
            bindings,
            decorator: Box::new(BrowserChromeDecorator),
            url_bars: HashMap::new(),
            new_window: ToolbarButton::new(NEW_WINDOW_LABEL),
            status,
            help,
            header_drag: None,
            button_hover: false,
            viewport: Rect::default(),
        };
        for _ in 0..view.initial_windows {
            desktop.store.create_window();
        }
        desktop
    }

    pub fn store(&self) -> &WindowStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut WindowStore {
        &mut self.store
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
        self.new_window.place(area);
    }

    pub fn help_visible(&self) -> bool {
        self.help.visible()
    }

    /// Active window id, only if that window is still open.
    pub fn active_window(&self) -> Option<WindowId> {
        self.store
            .input()
            .active_window_id
            .as_ref()
            .filter(|id| self.store.window(id).is_some())
            .cloned()
    }

    /// Screen rectangle of a window, in terminal cells.
    pub fn panel_rect(&self, record: &WindowRecord) -> FloatRect {
        let origin = record
            .position
            .offset(self.viewport.x as i32, self.viewport.y as i32);
        self.view.panel.rect_at(origin)
    }

    /// Visible panel rectangles in store order.
    pub fn regions(&self) -> RegionMap<WindowId> {
        let mut regions = RegionMap::default();
        for record in self.store.windows() {
            if let Some(rect) = self.panel_rect(record).clip_to(self.viewport) {
                regions.set(record.id.clone(), rect);
            }
        }
        regions
    }

    pub fn window_at(&self, column: u16, row: u16, policy: HitPolicy) -> Option<WindowId> {
        self.regions().hit_test(column, row, policy)
    }

    fn status_row(&self) -> Option<u16> {
        (self.viewport.height > 0).then(|| self.viewport.bottom() - 1)
    }

    /// Whether a cell is covered by something drawn above the panels.
    fn covered(&self, column: u16, row: u16) -> bool {
        self.help.visible()
            || self.new_window.contains(column, row)
            || self.status_row() == Some(row)
    }

    fn to_desktop(&self, column: u16, row: u16) -> (i32, i32) {
        (
            column as i32 - self.viewport.x as i32,
            row as i32 - self.viewport.y as i32,
        )
    }

    fn url_bar(&mut self, id: &WindowId) -> (String, &mut UrlBar) {
        let url = self
            .store
            .window(id)
            .map(|w| w.url.clone())
            .unwrap_or_default();
        let bar = self
            .url_bars
            .entry(id.clone())
            .or_insert_with(|| UrlBar::at_end(&url));
        (url, bar)
    }

    pub fn handle_event(&mut self, event: &Event) -> ControlFlow {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                self.handle_mouse(event, mouse);
                ControlFlow::Continue
            }
            Event::Resize(width, height) => {
                self.set_viewport(Rect {
                    x: 0,
                    y: 0,
                    width: *width,
                    height: *height,
                });
                ControlFlow::Continue
            }
            _ => ControlFlow::Continue,
        }
    }

    fn handle_mouse(&mut self, event: &Event, mouse: &MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(event, mouse),
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                self.handle_pointer_motion(mouse)
            }
            MouseEventKind::Up(_) => {
                self.header_drag = None;
            }
            _ => {}
        }
    }

    fn handle_pointer_motion(&mut self, mouse: &MouseEvent) {
        self.button_hover = self.new_window.contains(mouse.column, mouse.row);
        if !self.covered(mouse.column, mouse.row)
            && let Some(id) = self.window_at(mouse.column, mouse.row, self.view.hit_policy)
        {
            let (x, y) = self.to_desktop(mouse.column, mouse.row);
            self.store.record_pointer_move(x, y, &id);
        }
        if matches!(mouse.kind, MouseEventKind::Drag(_))
            && let Some(drag) = self.header_drag.clone()
        {
            let dx = mouse.column as i32 - drag.start_col as i32;
            let dy = mouse.row as i32 - drag.start_row as i32;
            self.store.move_window(&drag.id, drag.initial.offset(dx, dy));
        }
    }

    fn handle_click(&mut self, event: &Event, mouse: &MouseEvent) {
        if self.help.visible() {
            self.help.set_visible(false);
            return;
        }
        if self
            .new_window
            .handle_event(event, &ComponentContext::default())
        {
            self.store.create_window();
            return;
        }
        if self.status_row() == Some(mouse.row) {
            return;
        }
        let Some(id) = self.window_at(mouse.column, mouse.row, HitPolicy::Topmost) else {
            return;
        };
        let Some(record) = self.store.window(&id) else {
            return;
        };
        let rect = self.panel_rect(record);
        let initial = record.position;
        let action = self
            .decorator
            .hit_test(rect, mouse.column as i32, mouse.row as i32);
        match action {
            ChromeAction::Close => {
                self.store.destroy_window(&id);
                self.url_bars.remove(&id);
            }
            ChromeAction::TitleBar if self.store.policy().pointer == PointerMode::Drag => {
                self.header_drag = Some(HeaderDrag {
                    id: id.clone(),
                    initial,
                    start_col: mouse.column,
                    start_row: mouse.row,
                });
            }
            ChromeAction::UrlBar => {
                let column = (mouse.column as i32 - rect.x - ChromeLayout::URL_START).max(0);
                let width = ChromeLayout::for_rect(rect).url_width();
                let (url, bar) = self.url_bar(&id);
                bar.click(&url, width, column as usize);
            }
            _ => {}
        }
        // The click bubbles up to the panel after any control handled it,
        // so even a closed panel ends up as the focus target.
        self.store.focus_window(id);
    }

    fn handle_key(&mut self, key: &KeyEvent) -> ControlFlow {
        if key.kind != KeyEventKind::Press {
            return ControlFlow::Continue;
        }
        if self
            .help
            .handle_event(&Event::Key(*key), &ComponentContext::default())
        {
            return ControlFlow::Continue;
        }
        if let Some(action) = self.bindings.action_for_key(key) {
            return self.run_action(action);
        }
        let Some(id) = self.active_window() else {
            return ControlFlow::Continue;
        };
        if let Some(symbol) = key_symbol(key) {
            self.store.record_key_press(symbol, &id);
        }
        let (url, bar) = self.url_bar(&id);
        match bar.handle_key(&url, key) {
            UrlEdit::Changed(next) => self.store.set_window_url(&id, next),
            UrlEdit::Submitted => {
                tracing::debug!(
                    window_id = %id,
                    url = %url,
                    "url submitted; navigation is not implemented"
                );
            }
            UrlEdit::CaretMoved | UrlEdit::Ignored => {}
        }
        ControlFlow::Continue
    }

    fn run_action(&mut self, action: Action) -> ControlFlow {
        match action {
            Action::Quit => return ControlFlow::Quit,
            Action::NewWindow => {
                self.store.create_window();
            }
            Action::CloseWindow => {
                if let Some(id) = self.active_window() {
                    self.store.destroy_window(&id);
                    self.url_bars.remove(&id);
                }
            }
            Action::FocusNext => self.cycle_focus(true),
            Action::FocusPrev => self.cycle_focus(false),
            Action::ToggleHelp => self.help.toggle(),
            Action::CloseHelp => self.help.set_visible(false),
            Action::PasteUrl => {
                if let Err(err) = self.paste_into_active() {
                    tracing::warn!(error = %err, "paste failed");
                }
            }
            Action::CopyUrl => {
                if let Err(err) = self.copy_active_url() {
                    tracing::warn!(error = %err, "copy failed");
                }
            }
        }
        ControlFlow::Continue
    }

    fn cycle_focus(&mut self, forward: bool) {
        let windows = self.store.windows();
        if windows.is_empty() {
            return;
        }
        let len = windows.len();
        let current = self
            .active_window()
            .and_then(|id| windows.iter().position(|w| w.id == id));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(idx), true) => (idx + 1) % len,
            (Some(idx), false) => (idx + len - 1) % len,
        };
        let id = windows[next].id.clone();
        self.store.focus_window(id);
    }

    fn paste_into_active(&mut self) -> Result<()> {
        let Some(id) = self.active_window() else {
            return Ok(());
        };
        let text = clipboard::get()?;
        let (url, bar) = self.url_bar(&id);
        let next = bar.insert(&url, &text);
        self.store.set_window_url(&id, next);
        Ok(())
    }

    fn copy_active_url(&mut self) -> Result<()> {
        let Some(url) = self
            .active_window()
            .and_then(|id| self.store.window(&id).map(|w| w.url.clone()))
        else {
            return Ok(());
        };
        clipboard::set(&url)?;
        Ok(())
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>) {
        let area = frame.area();
        if area != self.viewport {
            self.set_viewport(area);
        }
        self.url_bars.retain(|id, _| self.store.window(id).is_some());
        frame.fill(area, Style::default().bg(theme::desktop_bg()));

        let active = self.active_window();
        for record in self.store.windows() {
            let rect = self.panel_rect(record);
            let focused = active.as_ref() == Some(&record.id);
            let width = ChromeLayout::for_rect(rect).url_width();
            let bar = self
                .url_bars
                .get(&record.id)
                .copied()
                .unwrap_or_else(|| UrlBar::at_end(&record.url));
            let (url, caret) = bar.view(&record.url, width);
            self.decorator.render_window(
                frame.buffer_mut(),
                rect,
                area,
                PanelChrome {
                    title: &record.title,
                    url: &url,
                    url_cursor: Some(caret),
                    focused,
                },
            );
        }

        self.new_window
            .render(frame, area, &ComponentContext::new(self.button_hover));

        let ctx = ComponentContext::default();
        if let Some(y) = self.status_row() {
            self.update_status();
            let row = Rect {
                x: area.x,
                y,
                width: area.width,
                height: 1,
            };
            self.status.render(frame, row, &ctx);
        }
        self.help.render(frame, area, &ctx);
    }

    fn update_status(&mut self) {
        let input = self.store.input();
        let active = input
            .active_window_id
            .as_ref()
            .map(|id| id.as_str().chars().take(8).collect::<String>())
            .unwrap_or_else(|| "none".to_string());
        let left = format!(
            " pointer {} │ key '{}' │ active {}",
            input.mouse_position, input.keyboard_input, active
        );
        let right = format!("{} windows │ F1 help ", self.store.windows().len());
        self.status.set_left(left);
        self.status.set_right(right);
    }
}

/// Symbol a page-level `keypress` listener would see for `key`, if any.
pub fn key_symbol(key: &KeyEvent) -> Option<String> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => Some(c.to_string()),
        KeyCode::Enter => Some("Enter".to_string()),
        _ => None,
    }
}
