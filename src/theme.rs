use ratatui::style::Color;

// Centralized dashboard colors.

// Top and bottom bars
pub fn panel_bg() -> Color {
    Color::DarkGray
}
pub fn panel_fg() -> Color {
    Color::White
}
pub fn panel_inactive_fg() -> Color {
    Color::Gray
}
pub fn chip_selected_bg() -> Color {
    Color::Gray
}
pub fn chip_selected_fg() -> Color {
    Color::Black
}
pub fn success() -> Color {
    Color::Green
}
pub fn waiting() -> Color {
    Color::Yellow
}

// Chat windows
pub fn decorator_header_bg() -> Color {
    Color::Blue
}
pub fn decorator_inactive_header_bg() -> Color {
    Color::DarkGray
}
pub fn decorator_header_fg() -> Color {
    Color::White
}
pub fn decorator_border() -> Color {
    Color::DarkGray
}
pub fn decorator_gesture_border() -> Color {
    Color::Yellow
}
pub fn decorator_body_bg() -> Color {
    Color::Black
}
pub fn decorator_body_fg() -> Color {
    Color::Gray
}

// Dock pills
pub fn pill_bg() -> Color {
    Color::DarkGray
}
pub fn pill_fg() -> Color {
    Color::White
}
pub fn pill_close_fg() -> Color {
    Color::LightRed
}

// Ticket list
pub fn ticket_fg() -> Color {
    Color::Gray
}
pub fn ticket_selected_fg() -> Color {
    Color::White
}
