use std::io;
use std::time::Duration;

use ratatui::Terminal;
use ratatui::backend::Backend;

use crate::desktop::Desktop;
use crate::drivers::InputDriver;
use crate::event_loop::{ControlFlow, EventLoop};
use crate::ui::UiFrame;

/// Drive `desktop` until it asks to quit: redraw whenever the poll interval
/// passes quietly, and hand every input event to the desktop in arrival order.
pub fn run_desktop<B, D>(
    terminal: &mut Terminal<B>,
    driver: D,
    desktop: &mut Desktop,
    poll_interval: Duration,
) -> io::Result<()>
where
    B: Backend,
    D: InputDriver,
{
    let mut event_loop = EventLoop::new(driver, poll_interval);
    event_loop.driver().set_mouse_capture(true)?;
    tracing::info!(windows = desktop.store().windows().len(), "desktop started");

    event_loop.run(|_driver, event| match event {
        Some(evt) => Ok(desktop.handle_event(&evt)),
        None => {
            terminal
                .draw(|frame| {
                    let mut ui = UiFrame::new(frame);
                    desktop.render(&mut ui);
                })
                .map_err(|e| io::Error::other(e.to_string()))?;
            Ok(ControlFlow::Continue)
        }
    })?;

    tracing::info!("desktop stopped");
    Ok(())
}
