use ratatui::layout::Rect as CellRect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use super::Gesture;
use crate::host::SessionStatus;
use crate::input::CellMetrics;
use crate::layout::{
    ChromeSpec, DockSpec, HeaderButton, Rect, dock_close_rect, header_button_rect, header_rect,
    resize_grip_rect,
};
use crate::theme;
use crate::ui::{UiFrame, truncate_to_width};

/// What a decorator needs to paint one floating chat window.
#[derive(Debug, Clone, Copy)]
pub struct WindowDraw<'a> {
    /// Pixel rect in viewport space.
    pub rect: Rect,
    pub title: &'a str,
    pub customer: &'a str,
    pub status: SessionStatus,
    pub focused: bool,
    pub maximized: bool,
    pub gesture: Gesture,
}

#[derive(Debug, Clone, Copy)]
pub struct PillDraw<'a> {
    pub rect: Rect,
    pub label: &'a str,
}

/// Paints window chrome. `area` is the cell area the viewport is drawn into.
pub trait WindowDecorator: std::fmt::Debug {
    fn render_window(&self, frame: &mut UiFrame<'_>, area: CellRect, window: &WindowDraw<'_>);
    fn render_pill(&self, frame: &mut UiFrame<'_>, area: CellRect, pill: &PillDraw<'_>);
}

/// Box-drawn chat windows whose buttons sit exactly where pointer hit
/// testing expects them.
#[derive(Debug, Clone, Copy)]
pub struct ChatDecorator {
    metrics: CellMetrics,
    chrome: ChromeSpec,
    dock: DockSpec,
}

impl ChatDecorator {
    pub fn new(metrics: CellMetrics, chrome: ChromeSpec, dock: DockSpec) -> Self {
        Self {
            metrics,
            chrome,
            dock,
        }
    }

    fn center(cells: CellRect) -> (u16, u16) {
        (
            cells.x.saturating_add(cells.width / 2),
            cells.y.saturating_add(cells.height / 2),
        )
    }
}

impl WindowDecorator for ChatDecorator {
    fn render_window(&self, frame: &mut UiFrame<'_>, area: CellRect, window: &WindowDraw<'_>) {
        let Some(cells) = self.metrics.to_cells(window.rect, area) else {
            return;
        };

        let header_style = if window.focused {
            Style::default()
                .bg(theme::decorator_header_bg())
                .fg(theme::decorator_header_fg())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .bg(theme::decorator_inactive_header_bg())
                .fg(theme::decorator_header_fg())
        };
        let border_style = match window.gesture {
            Gesture::Idle if window.focused => Style::default().fg(theme::decorator_header_bg()),
            Gesture::Idle => Style::default().fg(theme::decorator_border()),
            _ => Style::default().fg(theme::decorator_gesture_border()),
        };
        let body_style = Style::default()
            .bg(theme::decorator_body_bg())
            .fg(theme::decorator_body_fg());

        frame.fill(cells, body_style);
        frame.render_widget(Block::bordered().border_style(border_style), cells);

        // Header band inside the border.
        if let Some(header) = self
            .metrics
            .to_cells(header_rect(window.rect, &self.chrome), area)
        {
            let inner = CellRect::new(
                header.x.saturating_add(1),
                header.y.saturating_add(1),
                header.width.saturating_sub(2),
                header.height.saturating_sub(1),
            );
            frame.fill(inner, header_style);

            let mut title_end = cells.right();
            for button in HeaderButton::ALL {
                let rect = header_button_rect(window.rect, button, &self.chrome);
                let Some(button_cells) = self.metrics.to_cells(rect, area) else {
                    continue;
                };
                title_end = title_end.min(button_cells.x);
                let (x, _) = Self::center(button_cells);
                frame.set_string(x, inner.y, button.glyph(), header_style);
            }

            let title_x = cells.x.saturating_add(2);
            let room = title_end.saturating_sub(title_x).saturating_sub(1) as usize;
            frame.set_string(
                title_x,
                inner.y,
                &truncate_to_width(window.title, room),
                header_style,
            );

            let body_y = header.bottom();
            let status_style = match window.status {
                SessionStatus::Active => body_style.fg(theme::success()),
                SessionStatus::Resolved => body_style.fg(theme::decorator_border()),
            };
            frame.set_string(title_x, body_y, window.customer, body_style);
            frame.set_string(
                title_x,
                body_y.saturating_add(1),
                window.status.label(),
                status_style,
            );
        }

        if !window.maximized
            && let Some(grip) = self
                .metrics
                .to_cells(resize_grip_rect(window.rect, &self.chrome), area)
        {
            frame.set_string(
                grip.right().saturating_sub(1),
                grip.bottom().saturating_sub(1),
                "◢",
                border_style,
            );
        }
    }

    fn render_pill(&self, frame: &mut UiFrame<'_>, area: CellRect, pill: &PillDraw<'_>) {
        let Some(cells) = self.metrics.to_cells(pill.rect, area) else {
            return;
        };
        let style = Style::default().bg(theme::pill_bg()).fg(theme::pill_fg());
        frame.fill(cells, style);
        let (_, row) = Self::center(cells);

        let close = self
            .metrics
            .to_cells(dock_close_rect(pill.rect, &self.dock), area);
        let label_end = close.map_or(cells.right(), |c| c.x);
        let room = label_end.saturating_sub(cells.x).saturating_sub(2) as usize;
        frame.set_string(
            cells.x.saturating_add(1),
            row,
            &truncate_to_width(pill.label, room),
            style,
        );
        if let Some(close) = close {
            let (x, _) = Self::center(close);
            frame.set_string(x, row, "x", style.fg(theme::pill_close_fg()));
        }
    }
}
