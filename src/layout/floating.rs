use super::{Point, Rect, Size, Viewport, rect_contains, saturate_i32};
use crate::constants::{
    CARD_HEIGHT, CARD_WIDTH, CASCADE_FALLBACK, CASCADE_MARGIN_X, CASCADE_MARGIN_Y, CASCADE_STEP,
    DOCK_CLOSE_WIDTH, DOCK_GAP, DOCK_MARGIN_BOTTOM, DOCK_MARGIN_RIGHT, DOCK_PILL_HEIGHT,
    DOCK_PILL_WIDTH, HEADER_BUTTON_INSET, HEADER_BUTTON_SIZE, HEADER_HEIGHT, RESIZE_GRIP_SIZE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeSpec {
    pub card: Size,
    pub step: i32,
    pub margin: Size,
    pub fallback: Point,
}

impl Default for CascadeSpec {
    fn default() -> Self {
        Self {
            card: Size::new(CARD_WIDTH, CARD_HEIGHT),
            step: CASCADE_STEP,
            margin: Size::new(CASCADE_MARGIN_X, CASCADE_MARGIN_Y),
            fallback: Point::new(CASCADE_FALLBACK, CASCADE_FALLBACK),
        }
    }
}

/// Initial placement for the window of the `index`-th session: centered,
/// shifted diagonally per index, pulled back so the bottom-right corner stays
/// inside `viewport - margin`.
pub fn cascade_position(viewport: Viewport, index: usize, spec: &CascadeSpec) -> Point {
    let step = (index as i64).saturating_mul(spec.step as i64);
    let axis = |extent: u32, card: u32, margin: u32, fallback: i32| -> i32 {
        let max = extent as i64 - card as i64 - margin as i64;
        let centered = extent as i64 / 2 - card as i64 / 2 + step;
        let value = centered.min(max);
        if value > 0 {
            saturate_i32(value)
        } else {
            fallback
        }
    };
    Point::new(
        axis(
            viewport.width,
            spec.card.width,
            spec.margin.width,
            spec.fallback.x,
        ),
        axis(
            viewport.height,
            spec.card.height,
            spec.margin.height,
            spec.fallback.y,
        ),
    )
}

/// Keep a dragged window's top edge within `[0, height - min_visible]`.
/// The horizontal axis is left free.
pub fn clamp_drag_origin(candidate: Point, viewport: Viewport, min_visible_height: u32) -> Point {
    let max_y = viewport.height.saturating_sub(min_visible_height) as i64;
    Point::new(
        candidate.x,
        saturate_i32((candidate.y as i64).clamp(0, max_y)),
    )
}

/// Bottom-right resize: start size plus pointer travel, never below `min`.
pub fn apply_resize_drag(start: Size, start_pointer: Point, pointer: Point, min: Size) -> Size {
    let (dx, dy) = pointer.delta(start_pointer);
    let grow = |base: u32, delta: i32, floor: u32| -> u32 {
        let value = (base as i64 + delta as i64).clamp(0, u32::MAX as i64) as u32;
        value.max(floor)
    };
    Size::new(
        grow(start.width, dx, min.width),
        grow(start.height, dy, min.height),
    )
}

/// Where a maximized window paints, regardless of its stored geometry.
pub fn maximized_rect(viewport: Viewport, inset: u32) -> Rect {
    Rect::new(
        saturate_i32(inset as i64),
        0,
        viewport.width.saturating_sub(inset.saturating_mul(2)),
        viewport.height,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderButton {
    Close,
    Maximize,
    Minimize,
    EndSession,
}

impl HeaderButton {
    /// Right-to-left order along the header.
    pub const ALL: [HeaderButton; 4] = [
        HeaderButton::Close,
        HeaderButton::Maximize,
        HeaderButton::Minimize,
        HeaderButton::EndSession,
    ];

    pub fn glyph(self) -> &'static str {
        match self {
            HeaderButton::Close => "x",
            HeaderButton::Maximize => "□",
            HeaderButton::Minimize => "_",
            HeaderButton::EndSession => "⌫",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeHit {
    Button(HeaderButton),
    ResizeGrip,
    Header,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeSpec {
    pub header_height: u32,
    pub button_size: u32,
    pub button_inset: u32,
    pub grip_size: u32,
}

impl Default for ChromeSpec {
    fn default() -> Self {
        Self {
            header_height: HEADER_HEIGHT,
            button_size: HEADER_BUTTON_SIZE,
            button_inset: HEADER_BUTTON_INSET,
            grip_size: RESIZE_GRIP_SIZE,
        }
    }
}

pub fn header_rect(window: Rect, spec: &ChromeSpec) -> Rect {
    Rect::new(
        window.x,
        window.y,
        window.width,
        spec.header_height.min(window.height),
    )
}

pub fn header_button_rect(window: Rect, button: HeaderButton, spec: &ChromeSpec) -> Rect {
    let slot = HeaderButton::ALL
        .iter()
        .position(|b| *b == button)
        .unwrap_or(0) as i64;
    let header = header_rect(window, spec);
    let x = header.right() - spec.button_inset as i64 - (slot + 1) * spec.button_size as i64;
    let y = header.y as i64 + (header.height as i64 - spec.button_size as i64).max(0) / 2;
    Rect::new(
        saturate_i32(x),
        saturate_i32(y),
        spec.button_size,
        spec.button_size.min(header.height),
    )
}

pub fn resize_grip_rect(window: Rect, spec: &ChromeSpec) -> Rect {
    let grip = spec.grip_size.min(window.width).min(window.height);
    Rect::new(
        saturate_i32(window.right() - grip as i64),
        saturate_i32(window.bottom() - grip as i64),
        grip,
        grip,
    )
}

/// Classify a point inside a window. `resizable` is false for maximized
/// windows, which have no grip.
pub fn chrome_hit(window: Rect, point: Point, spec: &ChromeSpec, resizable: bool) -> Option<ChromeHit> {
    if !rect_contains(window, point) {
        return None;
    }
    if let Some(button) = HeaderButton::ALL
        .into_iter()
        .find(|button| rect_contains(header_button_rect(window, *button, spec), point))
    {
        return Some(ChromeHit::Button(button));
    }
    if resizable && rect_contains(resize_grip_rect(window, spec), point) {
        return Some(ChromeHit::ResizeGrip);
    }
    if rect_contains(header_rect(window, spec), point) {
        return Some(ChromeHit::Header);
    }
    Some(ChromeHit::Body)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockSpec {
    pub pill: Size,
    pub gap: u32,
    pub margin_right: u32,
    pub margin_bottom: u32,
    pub close_width: u32,
}

impl Default for DockSpec {
    fn default() -> Self {
        Self {
            pill: Size::new(DOCK_PILL_WIDTH, DOCK_PILL_HEIGHT),
            gap: DOCK_GAP,
            margin_right: DOCK_MARGIN_RIGHT,
            margin_bottom: DOCK_MARGIN_BOTTOM,
            close_width: DOCK_CLOSE_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockHit {
    Restore,
    Close,
}

/// Pill rects for `count` minimized windows, anchored to the bottom-right
/// corner. Index 0 is the top of the stack.
pub fn dock_slots(viewport: Viewport, count: usize, spec: &DockSpec) -> Vec<Rect> {
    let x = viewport.width as i64 - spec.margin_right as i64 - spec.pill.width as i64;
    let bottom = viewport.height as i64 - spec.margin_bottom as i64;
    let stride = spec.pill.height as i64 + spec.gap as i64;
    (0..count)
        .map(|index| {
            let from_bottom = (count - index) as i64;
            let y = bottom - from_bottom * stride + spec.gap as i64;
            Rect::new(
                saturate_i32(x),
                saturate_i32(y),
                spec.pill.width,
                spec.pill.height,
            )
        })
        .collect()
}

pub fn dock_close_rect(pill: Rect, spec: &DockSpec) -> Rect {
    let width = spec.close_width.min(pill.width);
    Rect::new(
        saturate_i32(pill.right() - width as i64),
        pill.y,
        width,
        pill.height,
    )
}

pub fn dock_hit(pill: Rect, point: Point, spec: &DockSpec) -> Option<DockHit> {
    if !rect_contains(pill, point) {
        return None;
    }
    if rect_contains(dock_close_rect(pill, spec), point) {
        Some(DockHit::Close)
    } else {
        Some(DockHit::Restore)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cascade_centers_then_steps_diagonally() {
        let spec = CascadeSpec::default();
        let viewport = Viewport::new(1600, 1200);
        assert_eq!(
            cascade_position(viewport, 0, &spec),
            Point::new(800 - 192, 600 - 250)
        );
        assert_eq!(
            cascade_position(viewport, 2, &spec),
            Point::new(800 - 192 + 60, 600 - 250 + 60)
        );
    }

    #[test]
    fn cascade_clamps_to_the_margin() {
        let spec = CascadeSpec::default();
        let viewport = Viewport::new(1000, 800);
        // x: min(1000 - 450, 308 + 300) = 550, y: min(800 - 550, 150 + 300) = 250
        assert_eq!(cascade_position(viewport, 10, &spec), Point::new(550, 250));
    }

    #[test]
    fn cascade_falls_back_when_the_viewport_is_too_small() {
        let spec = CascadeSpec::default();
        assert_eq!(
            cascade_position(Viewport::new(300, 200), 0, &spec),
            Point::new(50, 50)
        );
        // only the vertical axis is starved
        let p = cascade_position(Viewport::new(1600, 500), 0, &spec);
        assert_eq!(p, Point::new(608, 50));
    }

    #[test]
    fn drag_clamps_vertical_only() {
        let viewport = Viewport::new(800, 600);
        assert_eq!(
            clamp_drag_origin(Point::new(-300, -20), viewport, 50),
            Point::new(-300, 0)
        );
        assert_eq!(
            clamp_drag_origin(Point::new(900, 700), viewport, 50),
            Point::new(900, 550)
        );
        // a viewport shorter than the visible strip pins the window to the top
        assert_eq!(
            clamp_drag_origin(Point::new(0, 30), Viewport::new(800, 20), 50),
            Point::new(0, 0)
        );
    }

    #[test]
    fn resize_never_goes_below_minimum() {
        let min = Size::new(300, 200);
        let start = Size::new(384, 500);
        let origin = Point::new(500, 600);
        assert_eq!(
            apply_resize_drag(start, origin, Point::new(510, 640), min),
            Size::new(394, 540)
        );
        assert_eq!(
            apply_resize_drag(start, origin, Point::new(-2000, -2000), min),
            min
        );
    }

    #[test]
    fn chrome_hit_precedence() {
        let spec = ChromeSpec::default();
        let window = Rect::new(100, 100, 384, 500);
        let close = header_button_rect(window, HeaderButton::Close, &spec);
        assert_eq!(close, Rect::new(100 + 384 - 12 - 24, 108, 24, 24));
        assert_eq!(
            chrome_hit(window, Point::new(close.x + 1, close.y + 1), &spec, true),
            Some(ChromeHit::Button(HeaderButton::Close))
        );
        let end = header_button_rect(window, HeaderButton::EndSession, &spec);
        assert_eq!(
            chrome_hit(window, end.origin(), &spec, true),
            Some(ChromeHit::Button(HeaderButton::EndSession))
        );
        assert_eq!(
            chrome_hit(window, Point::new(110, 110), &spec, true),
            Some(ChromeHit::Header)
        );
        assert_eq!(
            chrome_hit(window, Point::new(483, 599), &spec, true),
            Some(ChromeHit::ResizeGrip)
        );
        assert_eq!(
            chrome_hit(window, Point::new(483, 599), &spec, false),
            Some(ChromeHit::Body)
        );
        assert_eq!(chrome_hit(window, Point::new(99, 110), &spec, true), None);
    }

    #[test]
    fn dock_stacks_upward_from_bottom_right() {
        let spec = DockSpec::default();
        let viewport = Viewport::new(1000, 800);
        let slots = dock_slots(viewport, 2, &spec);
        // last pill sits on the bottom margin
        assert_eq!(slots[1], Rect::new(824, 800 - 12 - 36, 160, 36));
        assert_eq!(slots[0], Rect::new(824, 800 - 12 - 36 - 8 - 36, 160, 36));

        let pill = slots[1];
        assert_eq!(
            dock_hit(pill, Point::new(pill.x + 2, pill.y + 2), &spec),
            Some(DockHit::Restore)
        );
        assert_eq!(
            dock_hit(pill, Point::new(pill.x + 150, pill.y + 2), &spec),
            Some(DockHit::Close)
        );
        assert_eq!(dock_hit(pill, Point::new(0, 0), &spec), None);
    }

    #[test]
    fn maximized_rect_spans_viewport() {
        assert_eq!(
            maximized_rect(Viewport::new(1200, 900), 20),
            Rect::new(20, 0, 1160, 900)
        );
    }
}
