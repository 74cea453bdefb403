use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};

use crate::theme;
use crate::ui::{UiFrame, safe_set_string, truncate_to_width};

/// One entry of the session strip.
#[derive(Debug, Clone, Copy)]
pub struct SessionChip<'a, Id> {
    pub id: &'a Id,
    pub label: &'a str,
    pub selected: bool,
    /// False when the window is hidden or docked elsewhere.
    pub on_screen: bool,
}

#[derive(Debug, Clone)]
struct PanelSessionHit<Id> {
    id: Id,
    rect: Rect,
}

/// Top strip listing active chats plus a bottom status line. Hit rects are
/// rebuilt on every render.
#[derive(Debug)]
pub struct SessionPanel<Id> {
    area: Rect,
    bottom_area: Rect,
    session_hits: Vec<PanelSessionHit<Id>>,
    mouse_capture_rect: Option<Rect>,
}

impl<Id: Clone> Default for SessionPanel<Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id: Clone> SessionPanel<Id> {
    pub fn new() -> Self {
        Self {
            area: Rect::default(),
            bottom_area: Rect::default(),
            session_hits: Vec::new(),
            mouse_capture_rect: None,
        }
    }

    pub fn begin_frame(&mut self) {
        self.session_hits.clear();
        self.mouse_capture_rect = None;
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Split `area` into the top strip (1 row), the bottom status line
    /// (1 row) and the content area between them.
    pub fn split_area(&mut self, area: Rect) -> (Rect, Rect, Rect) {
        let top_h = 1u16.min(area.height);
        let bottom_h = 1u16.min(area.height.saturating_sub(top_h));
        let panel = Rect::new(area.x, area.y, area.width, top_h);
        let bottom = Rect::new(
            area.x,
            area.bottom().saturating_sub(bottom_h),
            area.width,
            bottom_h,
        );
        let content = Rect::new(
            area.x,
            area.y.saturating_add(top_h),
            area.width,
            area.height.saturating_sub(top_h).saturating_sub(bottom_h),
        );
        self.area = panel;
        self.bottom_area = bottom;
        (panel, bottom, content)
    }

    pub fn render(
        &mut self,
        frame: &mut UiFrame<'_>,
        chips: &[SessionChip<'_, Id>],
        waiting: usize,
        mouse_capture_enabled: bool,
    ) {
        let area = self.area;
        if area.width == 0 || area.height == 0 {
            return;
        }
        let base = Style::default().bg(theme::panel_bg()).fg(theme::panel_fg());
        frame.fill(area, base);

        let buffer = frame.buffer_mut();
        let bounds = area.intersection(buffer.area);
        let y = area.y;
        let max_x = area.right();

        // Indicators are right-aligned and reserve their room first.
        let waiting_chunk = format!("[ {waiting} waiting ]");
        let mouse_chunk = "[ mouse ]";
        let indicators_width = (waiting_chunk.chars().count() + mouse_chunk.chars().count()) as u16;
        let indicator_x = max_x.saturating_sub(indicators_width).max(area.x);

        let mut x = area.x;
        let title = " chats ";
        safe_set_string(
            buffer,
            bounds,
            x,
            y,
            title,
            base.add_modifier(Modifier::BOLD),
        );
        x = x.saturating_add(title.chars().count() as u16);

        for chip in chips {
            let max_label = indicator_x.saturating_sub(x).saturating_sub(2) as usize;
            if max_label == 0 {
                break;
            }
            let label = truncate_to_width(chip.label, max_label);
            let chunk = format!(" {label} ");
            let chunk_width = chunk.chars().count() as u16;
            if x.saturating_add(chunk_width) > indicator_x {
                break;
            }
            let style = if chip.selected {
                Style::default()
                    .bg(theme::chip_selected_bg())
                    .fg(theme::chip_selected_fg())
                    .add_modifier(Modifier::BOLD)
            } else if chip.on_screen {
                base
            } else {
                base.fg(theme::panel_inactive_fg())
                    .add_modifier(Modifier::DIM)
            };
            safe_set_string(buffer, bounds, x, y, &chunk, style);
            self.session_hits.push(PanelSessionHit {
                id: chip.id.clone(),
                rect: Rect::new(x, y, chunk_width, 1),
            });
            x = x.saturating_add(chunk_width);
        }

        let waiting_style = if waiting > 0 {
            base.fg(theme::waiting()).add_modifier(Modifier::BOLD)
        } else {
            base.fg(theme::panel_inactive_fg())
        };
        safe_set_string(buffer, bounds, indicator_x, y, &waiting_chunk, waiting_style);
        let mouse_x = indicator_x.saturating_add(waiting_chunk.chars().count() as u16);
        let mouse_style = if mouse_capture_enabled {
            base.fg(theme::success()).add_modifier(Modifier::BOLD)
        } else {
            base.fg(theme::panel_inactive_fg())
        };
        safe_set_string(buffer, bounds, mouse_x, y, mouse_chunk, mouse_style);
        let width = (mouse_chunk.chars().count() as u16).min(max_x.saturating_sub(mouse_x));
        if width > 0 {
            self.mouse_capture_rect = Some(Rect::new(mouse_x, y, width, 1));
        }
    }

    /// Status text on the left, package and version on the right.
    pub fn render_bottom(&mut self, frame: &mut UiFrame<'_>, status: &str) {
        let area = self.bottom_area;
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = Style::default().bg(theme::panel_bg()).fg(theme::panel_fg());
        frame.fill(area, style);

        const PKG_NAME: &str = env!("CARGO_PKG_NAME");
        const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
        let pkg_label = format!("{PKG_NAME} {PKG_VERSION}");
        let pkg_width = pkg_label.chars().count() as u16;
        let pkg_x = area.right().saturating_sub(pkg_width).max(area.x);

        let room = pkg_x.saturating_sub(area.x).saturating_sub(1) as usize;
        frame.set_string(area.x, area.y, &truncate_to_width(status, room), style);
        frame.set_string(pkg_x, area.y, &pkg_label, style);
    }

    pub fn hit_test_session(&self, column: u16, row: u16) -> Option<Id> {
        self.session_hits
            .iter()
            .find(|hit| hit.rect.contains(Position::new(column, row)))
            .map(|hit| hit.id.clone())
    }

    pub fn hit_test_mouse_capture(&self, column: u16, row: u16) -> bool {
        self.mouse_capture_rect
            .is_some_and(|rect| rect.contains(Position::new(column, row)))
    }
}
