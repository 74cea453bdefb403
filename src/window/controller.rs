//! Per-window interaction state: drag and resize gestures plus the
//! view-local maximize flag.
//!
//! Controllers never touch the store. Each transition returns a
//! [`GestureOutcome`] and the window manager applies it (focus on start,
//! `set_position` / `set_size` on release).

use super::WindowState;
use crate::layout::{Point, Rect, Size, Viewport, apply_resize_drag, clamp_drag_origin};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging {
        /// Pointer position relative to the window origin at grab time.
        grab_offset: Point,
        live: Point,
    },
    Resizing {
        start_pointer: Point,
        start_size: Size,
        live: Size,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// The window refused the gesture (maximized, minimized, or busy).
    Ignored,
    /// A gesture began; the window should be focused and capture taken.
    Started,
    Moved(Point),
    Resized(Size),
    CommitPosition(Point),
    CommitSize(Size),
    /// Pointer-up with no gesture in flight.
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureLimits {
    pub viewport: Viewport,
    pub min_size: Size,
    pub min_visible_height: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowController {
    gesture: Gesture,
    maximized: bool,
}

impl WindowController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn is_idle(&self) -> bool {
        self.gesture == Gesture::Idle
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    fn accepts_gesture(&self, state: &WindowState) -> bool {
        self.is_idle() && !self.maximized && state.is_floating()
    }

    pub fn begin_drag(&mut self, state: &WindowState, pointer: Point) -> GestureOutcome {
        if !self.accepts_gesture(state) {
            return GestureOutcome::Ignored;
        }
        let (dx, dy) = pointer.delta(state.position);
        self.gesture = Gesture::Dragging {
            grab_offset: Point::new(dx, dy),
            live: state.position,
        };
        GestureOutcome::Started
    }

    pub fn begin_resize(&mut self, state: &WindowState, pointer: Point) -> GestureOutcome {
        if !self.accepts_gesture(state) {
            return GestureOutcome::Ignored;
        }
        self.gesture = Gesture::Resizing {
            start_pointer: pointer,
            start_size: state.size,
            live: state.size,
        };
        GestureOutcome::Started
    }

    pub fn pointer_move(&mut self, pointer: Point, limits: &GestureLimits) -> GestureOutcome {
        match &mut self.gesture {
            Gesture::Idle => GestureOutcome::Ignored,
            Gesture::Dragging { grab_offset, live } => {
                let candidate =
                    pointer.offset(grab_offset.x.saturating_neg(), grab_offset.y.saturating_neg());
                *live = clamp_drag_origin(candidate, limits.viewport, limits.min_visible_height);
                GestureOutcome::Moved(*live)
            }
            Gesture::Resizing {
                start_pointer,
                start_size,
                live,
            } => {
                *live = apply_resize_drag(*start_size, *start_pointer, pointer, limits.min_size);
                GestureOutcome::Resized(*live)
            }
        }
    }

    /// Always returns the controller to idle. Releasing commits; there is no
    /// cancel.
    pub fn pointer_up(&mut self) -> GestureOutcome {
        match std::mem::take(&mut self.gesture) {
            Gesture::Idle => GestureOutcome::Released,
            Gesture::Dragging { live, .. } => GestureOutcome::CommitPosition(live),
            Gesture::Resizing { live, .. } => GestureOutcome::CommitSize(live),
        }
    }

    /// Flip the maximize flag. Ignored mid-gesture. Returns the flag.
    pub fn toggle_maximize(&mut self) -> bool {
        if self.is_idle() {
            self.maximized = !self.maximized;
        }
        self.maximized
    }

    /// Forget view-local state, as when the window view is torn down.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Stored geometry with any in-flight gesture applied.
    pub fn live_rect(&self, state: &WindowState) -> Rect {
        match self.gesture {
            Gesture::Idle => state.rect(),
            Gesture::Dragging { live, .. } => Rect::from_parts(live, state.size),
            Gesture::Resizing { live, .. } => Rect::from_parts(state.position, live),
        }
    }
}

/// Exclusive claim on pointer traffic for one gesture. While held, every
/// move and release goes to the owner no matter where the pointer is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerCapture<Id> {
    owner: Id,
}

impl<Id> PointerCapture<Id> {
    pub(crate) fn acquire(owner: Id) -> Self {
        Self { owner }
    }

    pub fn owner(&self) -> &Id {
        &self.owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> GestureLimits {
        GestureLimits {
            viewport: Viewport::new(1200, 900),
            min_size: Size::new(300, 200),
            min_visible_height: 50,
        }
    }

    fn state() -> WindowState {
        WindowState::new(Point::new(100, 100), Size::new(384, 500), 101)
    }

    #[test]
    fn drag_moves_by_pointer_travel_and_commits_on_release() {
        let mut c = WindowController::new();
        let s = state();
        assert_eq!(c.begin_drag(&s, Point::new(150, 110)), GestureOutcome::Started);
        assert_eq!(
            c.pointer_move(Point::new(250, 160), &limits()),
            GestureOutcome::Moved(Point::new(200, 150))
        );
        assert_eq!(c.live_rect(&s), Rect::new(200, 150, 384, 500));
        // dragging far below clamps the top edge
        assert_eq!(
            c.pointer_move(Point::new(250, 5000), &limits()),
            GestureOutcome::Moved(Point::new(200, 850))
        );
        assert_eq!(
            c.pointer_up(),
            GestureOutcome::CommitPosition(Point::new(200, 850))
        );
        assert!(c.is_idle());
        assert_eq!(c.pointer_up(), GestureOutcome::Released);
    }

    #[test]
    fn resize_request_below_minimum_commits_minimum() {
        let mut c = WindowController::new();
        let s = state();
        let grab = Point::new(483, 599);
        assert_eq!(c.begin_resize(&s, grab), GestureOutcome::Started);
        // ask for 100x50
        let target = grab.offset(100 - 384, 50 - 500);
        assert_eq!(
            c.pointer_move(target, &limits()),
            GestureOutcome::Resized(Size::new(300, 200))
        );
        assert_eq!(c.pointer_up(), GestureOutcome::CommitSize(Size::new(300, 200)));
    }

    #[test]
    fn maximized_and_minimized_windows_refuse_gestures() {
        let mut c = WindowController::new();
        let s = state();
        assert!(c.toggle_maximize());
        assert_eq!(c.begin_drag(&s, Point::new(0, 0)), GestureOutcome::Ignored);
        assert_eq!(c.begin_resize(&s, Point::new(0, 0)), GestureOutcome::Ignored);
        assert!(c.is_idle());

        let mut c = WindowController::new();
        let minimized = WindowState {
            minimized: true,
            ..state()
        };
        assert_eq!(
            c.begin_drag(&minimized, Point::new(0, 0)),
            GestureOutcome::Ignored
        );
    }

    #[test]
    fn drag_and_resize_are_mutually_exclusive() {
        let mut c = WindowController::new();
        let s = state();
        c.begin_drag(&s, Point::new(120, 110));
        assert_eq!(c.begin_resize(&s, Point::new(480, 590)), GestureOutcome::Ignored);
        // maximize cannot flip mid-gesture either
        assert!(!c.toggle_maximize());
        assert!(matches!(c.gesture(), Gesture::Dragging { .. }));
    }

    #[test]
    fn reset_clears_view_state() {
        let mut c = WindowController::new();
        c.toggle_maximize();
        c.reset();
        assert!(!c.is_maximized());
        assert!(c.is_idle());
    }
}
