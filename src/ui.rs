//! UiFrame: a thin wrapper around `ratatui::Frame` that clamps drawing to the
//! visible area.
//!
//! Chat windows live in signed pixel space and routinely hang off the left,
//! right or bottom edge of the terminal. Their cell rects are clipped before
//! drawing, and every draw call made through `UiFrame` is clipped again so a
//! stray rect can never write outside the buffer.
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

pub struct UiFrame<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    /// Construct a `UiFrame` directly from an area and buffer.
    pub(crate) fn from_parts(area: Rect, buffer: &'a mut Buffer) -> Self {
        Self { area, buffer }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        self.buffer
    }

    fn clip_rect(&self, rect: Rect) -> Option<Rect> {
        let clipped = rect.intersection(self.area);
        if clipped.width == 0 || clipped.height == 0 {
            None
        } else {
            Some(clipped)
        }
    }

    pub fn render_widget<W>(&mut self, widget: W, area: Rect)
    where
        W: Widget,
    {
        if let Some(clipped) = self.clip_rect(area) {
            widget.render(clipped, self.buffer);
        }
    }

    /// Blank `rect` with `style`. Covers whatever was painted underneath.
    pub fn fill(&mut self, rect: Rect, style: Style) {
        let Some(clipped) = self.clip_rect(rect) else {
            return;
        };
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                if let Some(cell) = self.buffer.cell_mut((x, y)) {
                    cell.reset();
                    cell.set_symbol(" ");
                    cell.set_style(style);
                }
            }
        }
    }

    pub fn set_string(&mut self, x: u16, y: u16, text: &str, style: Style) {
        safe_set_string(self.buffer, self.area, x, y, text, style);
    }
}

pub(crate) fn safe_set_string(
    buffer: &mut Buffer,
    bounds: Rect,
    x: u16,
    y: u16,
    text: &str,
    style: Style,
) {
    if bounds.width == 0 || bounds.height == 0 {
        return;
    }
    let max_x = bounds.x.saturating_add(bounds.width);
    let max_y = bounds.y.saturating_add(bounds.height);
    if x < bounds.x || x >= max_x || y < bounds.y || y >= max_y {
        return;
    }
    let available = max_x.saturating_sub(x);
    if available == 0 {
        return;
    }
    let text = truncate_to_width(text, available as usize);
    buffer.set_string(x, y, text, style);
}

pub(crate) fn truncate_to_width(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    value.chars().take(width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn truncate_to_width_short_and_long() {
        assert_eq!(truncate_to_width("abc", 5), "abc");
        assert_eq!(truncate_to_width("abcdef", 3), "abc");
    }

    #[test]
    fn safe_set_string_writes_within_bounds() {
        let bounds = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(bounds);
        safe_set_string(&mut buf, bounds, 1, 0, "hello", Style::default());
        assert_eq!(buf.cell((1, 0)).map(|c| c.symbol()), Some("h"));

        // outside bounds should be ignored (no panic)
        safe_set_string(&mut buf, bounds, 100, 0, "x", Style::default());
        safe_set_string(&mut buf, bounds, 8, 1, "overflow", Style::default());
        assert_eq!(buf.cell((9, 1)).map(|c| c.symbol()), Some("v"));
    }

    #[test]
    fn render_widget_clips_to_frame_area() {
        let area = Rect::new(0, 0, 5, 3);
        let mut buf = Buffer::empty(area);
        let mut ui = UiFrame::from_parts(area, &mut buf);

        struct FillWidget;
        impl Widget for FillWidget {
            fn render(self, area: Rect, buf: &mut Buffer) {
                for y in area.y..area.bottom() {
                    for x in area.x..area.right() {
                        if let Some(cell) = buf.cell_mut((x, y)) {
                            cell.set_symbol("A");
                        }
                    }
                }
            }
        }

        // partially past the right edge
        ui.render_widget(FillWidget, Rect::new(3, 1, 5, 2));

        assert_eq!(buf.cell((3, 1)).map(|c| c.symbol()), Some("A"));
        assert_eq!(buf.cell((2, 1)).map(|c| c.symbol()), Some(" "));
    }

    #[test]
    fn fill_covers_only_the_visible_part() {
        let area = Rect::new(0, 0, 4, 4);
        let mut buf = Buffer::empty(area);
        let mut ui = UiFrame::from_parts(area, &mut buf);
        let style = Style::default().bg(Color::Blue);
        ui.fill(Rect::new(2, 2, 10, 10), style);
        ui.set_string(0, 0, "hi", Style::default());
        assert_eq!(buf.cell((3, 3)).map(|c| c.bg), Some(Color::Blue));
        assert_eq!(buf.cell((1, 1)).map(|c| c.bg), Some(Color::Reset));
        assert_eq!(buf.cell((1, 0)).map(|c| c.symbol()), Some("i"));
    }
}
