use std::time::Duration;

use crate::constants::{
    DEFAULT_BUTTON_WIDTH, DEFAULT_TITLE_CHAR_WIDTH, DEFAULT_TITLEBAR_HEIGHT, DOUBLE_CLICK_WINDOW,
    TOOLTIP_DISMISS_DELAY, TOOLTIP_SHOW_DELAY,
};
use crate::layout::rect::RectDefaults;
use crate::layout::{Bounds, HitBands};

/// Coordinator-wide settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WmConfig {
    pub tooltip_show_delay: Duration,
    pub tooltip_dismiss_delay: Duration,
    pub double_click_window: Duration,
    /// Detect double-clicks from press timing. Hosts that deliver a native
    /// double-click event turn this off and call `double_click` instead.
    pub detect_double_click: bool,
    /// Run `WindowAdapter::validate` on registration.
    pub validate_adapters: bool,
    pub max_windows: Option<usize>,
    /// Ask adapters to refresh their hover flags (topmost first) before each
    /// pointer event. Hosts whose windows track hover themselves turn this off.
    pub track_hover: bool,
}

impl Default for WmConfig {
    fn default() -> Self {
        Self {
            tooltip_show_delay: TOOLTIP_SHOW_DELAY,
            tooltip_dismiss_delay: TOOLTIP_DISMISS_DELAY,
            double_click_window: DOUBLE_CLICK_WINDOW,
            detect_double_click: true,
            validate_adapters: cfg!(debug_assertions),
            max_windows: None,
            track_hover: true,
        }
    }
}

impl WmConfig {
    pub fn with_tooltip_delays(mut self, show: Duration, dismiss: Duration) -> Self {
        self.tooltip_show_delay = show;
        self.tooltip_dismiss_delay = dismiss;
        self
    }

    pub fn with_double_click_window(mut self, window: Duration) -> Self {
        self.double_click_window = window;
        self
    }

    pub fn with_detect_double_click(mut self, enabled: bool) -> Self {
        self.detect_double_click = enabled;
        self
    }

    pub fn with_validate_adapters(mut self, enabled: bool) -> Self {
        self.validate_adapters = enabled;
        self
    }

    pub fn with_max_windows(mut self, limit: Option<usize>) -> Self {
        self.max_windows = limit;
        self
    }

    pub fn with_track_hover(mut self, enabled: bool) -> Self {
        self.track_hover = enabled;
        self
    }
}

/// Per-window geometry defaults, shared by every window a host creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryDefaults {
    pub rect: RectDefaults,
    pub titlebar_height: i32,
    pub button_width: i32,
    pub title_char_width: i32,
}

impl Default for GeometryDefaults {
    fn default() -> Self {
        Self::pixels()
    }
}

impl GeometryDefaults {
    /// Browser-like pixel metrics.
    pub fn pixels() -> Self {
        Self {
            rect: RectDefaults::default(),
            titlebar_height: DEFAULT_TITLEBAR_HEIGHT,
            button_width: DEFAULT_BUTTON_WIDTH,
            title_char_width: DEFAULT_TITLE_CHAR_WIDTH,
        }
    }

    /// Metrics where one unit is one terminal cell.
    pub fn cells() -> Self {
        Self {
            rect: RectDefaults {
                bounds: Bounds::new(2, 2, 40, 12),
                min_width: 12,
                min_height: 2,
                border_width: 2,
                bands: HitBands { edge: 0, corner: 2 },
            },
            titlebar_height: 1,
            button_width: 3,
            title_char_width: 1,
        }
    }
}
