//! Shared crate-wide constants.

use std::time::Duration;

/// Thinnest outer border a window may have, in pixels.
pub const MIN_BORDER_WIDTH: i32 = 2;

/// Smallest coordinate a window's top/left edge may settle on once a move
/// gesture ends. Keeps the titlebar grabbable.
pub const MIN_VIEWPORT_COORD: i32 = 1;

/// Builtin floor on a window's content width, before the border is added.
pub const BUILTIN_MIN_WIDTH: i32 = 120;

/// Builtin floor on a window's content height, before the border is added.
pub const BUILTIN_MIN_HEIGHT: i32 = 32;

pub const DEFAULT_LEFT: i32 = 40;
pub const DEFAULT_TOP: i32 = 40;
pub const DEFAULT_WIDTH: i32 = 320;
pub const DEFAULT_HEIGHT: i32 = 240;
pub const DEFAULT_BORDER_WIDTH: i32 = 2;
pub const DEFAULT_TITLEBAR_HEIGHT: i32 = 20;
pub const DEFAULT_BUTTON_WIDTH: i32 = 18;

/// Approximate advance of one title glyph, used to decide whether the title
/// text overflows its slot in the titlebar.
pub const DEFAULT_TITLE_CHAR_WIDTH: i32 = 7;

/// Pixels added to the border width to form the straight-edge hit band.
pub const EDGE_BAND_EXTRA: i32 = 2;

/// Pixels added to the border width to form a corner's hit band along the
/// perpendicular edge. Corners are classified before straight edges.
pub const CORNER_BAND_EXTRA: i32 = 6;

/// Hover time before a titlebar tooltip appears.
pub const TOOLTIP_SHOW_DELAY: Duration = Duration::from_millis(1000);

/// Lifetime of a visible tooltip before it is dismissed.
pub const TOOLTIP_DISMISS_DELAY: Duration = Duration::from_millis(4000);

/// Two titlebar presses on the same window within this window count as a
/// double-click.
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(500);
