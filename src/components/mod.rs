use crossterm::event::Event;
use ratatui::layout::Rect;

use crate::ui::UiFrame;

pub mod help_overlay;
pub mod status_bar;
pub mod toolbar_button;
pub mod url_bar;

pub use help_overlay::HelpOverlay;
pub use status_bar::StatusBar;
pub use toolbar_button::ToolbarButton;
pub use url_bar::{UrlBar, UrlEdit};

pub use crate::component_context::ComponentContext;

pub trait Component {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext);

    fn handle_event(&mut self, _event: &Event, _ctx: &ComponentContext) -> bool {
        false
    }
}
