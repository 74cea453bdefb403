//! Shared crate-wide constants.
//!
//! All distances are viewport pixels. `WmConfig::default()` is built from
//! these values; override them through the config rather than editing here.

/// Width of a freshly provisioned chat window.
pub const CARD_WIDTH: u32 = 384;
/// Height of a freshly provisioned chat window.
pub const CARD_HEIGHT: u32 = 500;

/// Smallest width a window can be resized to.
pub const MIN_WINDOW_WIDTH: u32 = 300;
/// Smallest height a window can be resized to.
pub const MIN_WINDOW_HEIGHT: u32 = 200;

/// Space between cards in the organize grid.
pub const GRID_GAP: u32 = 20;
/// Horizontal safe-area padding subtracted from both viewport edges before
/// the organize grid computes its column count.
pub const GRID_PADDING: u32 = 24;
/// Top-left corner of the first organize grid slot.
pub const GRID_ORIGIN_X: i32 = 20;
pub const GRID_ORIGIN_Y: i32 = 80;
/// Number of overflowing windows that share one stacked fallback slot.
pub const STACK_GROUP_SIZE: usize = 10;
/// Diagonal offset between stacked fallback slots.
pub const STACK_STEP: i32 = 30;

/// Diagonal offset between successive cascade placements.
pub const CASCADE_STEP: i32 = 30;
/// Room kept free past a cascaded window's bottom-right corner.
pub const CASCADE_MARGIN_X: u32 = 66;
pub const CASCADE_MARGIN_Y: u32 = 50;
/// Used for any cascade axis that would otherwise land at or before zero.
pub const CASCADE_FALLBACK: i32 = 50;

/// Part of a window that must stay above the bottom viewport edge while
/// dragging, so the header can always be grabbed again.
pub const MIN_VISIBLE_HEIGHT: u32 = 50;

/// Horizontal inset of the maximized layout.
pub const MAXIMIZED_INSET: u32 = 20;
/// Added to a maximized window's z-index when painting.
pub const MAXIMIZED_Z_BOOST: u64 = 100;

/// Initial value of the shared z-index counter.
pub const BASE_Z_INDEX: u64 = 100;

pub const HEADER_HEIGHT: u32 = 40;
pub const HEADER_BUTTON_SIZE: u32 = 24;
pub const HEADER_BUTTON_INSET: u32 = 12;
pub const RESIZE_GRIP_SIZE: u32 = 16;

pub const DOCK_PILL_WIDTH: u32 = 160;
pub const DOCK_PILL_HEIGHT: u32 = 36;
pub const DOCK_GAP: u32 = 8;
pub const DOCK_MARGIN_RIGHT: u32 = 16;
pub const DOCK_MARGIN_BOTTOM: u32 = 12;
/// Width of the close affordance at the right end of a dock pill.
pub const DOCK_CLOSE_WIDTH: u32 = 20;

/// Two pointer-downs on the same cell within this many milliseconds are
/// reported as a double-click.
pub const DOUBLE_CLICK_MS: u64 = 500;

/// How long a status message replaces the key hints in the bottom line.
pub const STATUS_TTL_MS: u64 = 4_000;
