pub mod controller;
pub mod decorator;

mod store;
mod window_manager;

use crate::layout::{Point, Rect, Size};

pub use controller::{Gesture, GestureOutcome, PointerCapture, WindowController};
pub use store::WindowStore;
pub use window_manager::{DockPillView, FloatingView, RenderPlan, WindowManager};

/// Per-session window geometry and visibility. The session id is the key
/// it is stored under, never a field, so two entries can never share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowState {
    pub position: Point,
    pub size: Size,
    pub minimized: bool,
    pub visible: bool,
    pub z_index: u64,
}

impl WindowState {
    pub fn new(position: Point, size: Size, z_index: u64) -> Self {
        Self {
            position,
            size,
            minimized: false,
            visible: true,
            z_index,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_parts(self.position, self.size)
    }

    /// Visible as a free-standing window (docking is decided by the host).
    pub fn is_floating(&self) -> bool {
        self.visible && !self.minimized
    }

    /// Visible as a pill in the minimized dock.
    pub fn is_dock_pill(&self) -> bool {
        self.visible && self.minimized
    }
}
