//! Terminal mouse input mapped into viewport pixel space.

use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect as CellRect;

use crate::config::HostConfig;
use crate::layout::{Point, Rect, Viewport};

/// Pixel size of one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetrics {
    pub width: u32,
    pub height: u32,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self::from(&HostConfig::default())
    }
}

impl From<&HostConfig> for CellMetrics {
    fn from(config: &HostConfig) -> Self {
        Self {
            width: config.cell_width.max(1),
            height: config.cell_height.max(1),
        }
    }
}

impl CellMetrics {
    /// Viewport covered by a `columns` x `rows` cell area.
    pub fn viewport(&self, columns: u16, rows: u16) -> Viewport {
        Viewport::new(
            columns as u32 * self.width,
            rows as u32 * self.height,
        )
    }

    /// Center of the cell, relative to `origin` (the top-left cell of the
    /// viewport area).
    pub fn to_pixel(&self, column: u16, row: u16, origin: (u16, u16)) -> Point {
        let col = column as i64 - origin.0 as i64;
        let row = row as i64 - origin.1 as i64;
        Point::new(
            (col * self.width as i64 + self.width as i64 / 2) as i32,
            (row * self.height as i64 + self.height as i64 / 2) as i32,
        )
    }

    /// Cells covered by a pixel rect, clipped to `area`. `None` when nothing
    /// of the rect lands inside.
    pub fn to_cells(&self, rect: Rect, area: CellRect) -> Option<CellRect> {
        let w = self.width as i64;
        let h = self.height as i64;
        let left = (rect.x as i64).div_euclid(w);
        let top = (rect.y as i64).div_euclid(h);
        let right = (rect.right() + w - 1).div_euclid(w);
        let bottom = (rect.bottom() + h - 1).div_euclid(h);

        let left = (area.x as i64 + left).max(area.x as i64);
        let top = (area.y as i64 + top).max(area.y as i64);
        let right = (area.x as i64 + right).min(area.right() as i64);
        let bottom = (area.y as i64 + bottom).min(area.bottom() as i64);
        if right <= left || bottom <= top {
            return None;
        }
        Some(CellRect::new(
            left as u16,
            top as u16,
            (right - left) as u16,
            (bottom - top) as u16,
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    DoubleClick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Point,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, position: Point) -> Self {
        Self { kind, position }
    }

    pub fn down(x: i32, y: i32) -> Self {
        Self::new(PointerKind::Down, Point::new(x, y))
    }

    pub fn moved(x: i32, y: i32) -> Self {
        Self::new(PointerKind::Move, Point::new(x, y))
    }

    pub fn up(x: i32, y: i32) -> Self {
        Self::new(PointerKind::Up, Point::new(x, y))
    }

    pub fn double_click(x: i32, y: i32) -> Self {
        Self::new(PointerKind::DoubleClick, Point::new(x, y))
    }
}

/// Converts crossterm mouse events for the left button into pointer events,
/// synthesizing a double click from two downs on the same cell.
#[derive(Debug, Clone)]
pub struct PointerTranslator {
    metrics: CellMetrics,
    origin: (u16, u16),
    double_click: Duration,
    last_down: Option<((u16, u16), Instant)>,
}

impl PointerTranslator {
    pub fn new(metrics: CellMetrics, double_click: Duration) -> Self {
        Self {
            metrics,
            origin: (0, 0),
            double_click,
            last_down: None,
        }
    }

    pub fn metrics(&self) -> CellMetrics {
        self.metrics
    }

    /// Top-left cell of the area the viewport is drawn into.
    pub fn set_origin(&mut self, column: u16, row: u16) {
        self.origin = (column, row);
    }

    pub fn translate(&mut self, mouse: &MouseEvent) -> Option<PointerEvent> {
        self.translate_at(mouse, Instant::now())
    }

    pub fn translate_at(&mut self, mouse: &MouseEvent, now: Instant) -> Option<PointerEvent> {
        let position = self
            .metrics
            .to_pixel(mouse.column, mouse.row, self.origin);
        let kind = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let cell = (mouse.column, mouse.row);
                if let Some((prev_cell, prev)) = self.last_down
                    && prev_cell == cell
                    && now.saturating_duration_since(prev) <= self.double_click
                {
                    self.last_down = None;
                    PointerKind::DoubleClick
                } else {
                    self.last_down = Some((cell, now));
                    PointerKind::Down
                }
            }
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => PointerKind::Move,
            MouseEventKind::Up(MouseButton::Left) => PointerKind::Up,
            _ => return None,
        };
        Some(PointerEvent::new(kind, position))
    }
}
