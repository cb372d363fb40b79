use ratatui::style::Color;

// Centralized theme colors for the desktop, its panels and overlays.

pub const ACCENT_RGB: (u8, u8, u8) = (59, 130, 246);

pub fn accent() -> Color {
    Color::Rgb(ACCENT_RGB.0, ACCENT_RGB.1, ACCENT_RGB.2)
}

// Desktop
pub fn desktop_bg() -> Color {
    Color::Gray
}

// Panel body
pub fn panel_bg() -> Color {
    Color::White
}
pub fn panel_fg() -> Color {
    Color::Black
}
pub fn panel_inactive_fg() -> Color {
    Color::DarkGray
}

// Url field
pub fn url_bg() -> Color {
    Color::Gray
}
pub fn url_fg() -> Color {
    Color::Black
}

// Decorator
pub fn decorator_header_bg() -> Color {
    accent()
}
pub fn decorator_header_inactive_bg() -> Color {
    Color::DarkGray
}
pub fn decorator_header_fg() -> Color {
    Color::White
}
pub fn decorator_border() -> Color {
    Color::DarkGray
}

// Traffic lights
pub fn traffic_close() -> Color {
    Color::Red
}
pub fn traffic_minimize() -> Color {
    Color::Yellow
}
pub fn traffic_maximize() -> Color {
    Color::Green
}

// Toolbar button
pub fn button_bg() -> Color {
    accent()
}
pub fn button_fg() -> Color {
    Color::White
}
pub fn button_hover_bg() -> Color {
    Color::LightBlue
}

// Status bar
pub fn status_bg() -> Color {
    Color::Black
}
pub fn status_fg() -> Color {
    Color::White
}

// Dialog
pub fn dialog_bg() -> Color {
    Color::Black
}
pub fn dialog_fg() -> Color {
    Color::White
}
