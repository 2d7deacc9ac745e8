//! Global pointer cursor modes.

use std::fmt;

use crate::layout::ResizeEdge;

/// Visual pointer mode the host should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorStyle {
    #[default]
    Default,
    NResize,
    SResize,
    EResize,
    WResize,
    NwResize,
    NeResize,
    SwResize,
    SeResize,
}

impl CursorStyle {
    /// Cursor for a resize classification; the interior maps to `Default`.
    pub const fn for_edge(edge: Option<ResizeEdge>) -> Self {
        match edge {
            None => CursorStyle::Default,
            Some(ResizeEdge::Top) => CursorStyle::NResize,
            Some(ResizeEdge::Bottom) => CursorStyle::SResize,
            Some(ResizeEdge::Right) => CursorStyle::EResize,
            Some(ResizeEdge::Left) => CursorStyle::WResize,
            Some(ResizeEdge::TopLeft) => CursorStyle::NwResize,
            Some(ResizeEdge::TopRight) => CursorStyle::NeResize,
            Some(ResizeEdge::BottomLeft) => CursorStyle::SwResize,
            Some(ResizeEdge::BottomRight) => CursorStyle::SeResize,
        }
    }

    /// CSS `cursor` keyword.
    pub const fn css_name(self) -> &'static str {
        match self {
            CursorStyle::Default => "default",
            CursorStyle::NResize => "n-resize",
            CursorStyle::SResize => "s-resize",
            CursorStyle::EResize => "e-resize",
            CursorStyle::WResize => "w-resize",
            CursorStyle::NwResize => "nw-resize",
            CursorStyle::NeResize => "ne-resize",
            CursorStyle::SwResize => "sw-resize",
            CursorStyle::SeResize => "se-resize",
        }
    }

    /// Single glyph for hosts that can only show text.
    pub const fn glyph(self) -> char {
        match self {
            CursorStyle::Default => '·',
            CursorStyle::NResize | CursorStyle::SResize => '↕',
            CursorStyle::EResize | CursorStyle::WResize => '↔',
            CursorStyle::NwResize | CursorStyle::SeResize => '⤡',
            CursorStyle::NeResize | CursorStyle::SwResize => '⤢',
        }
    }

    pub const fn is_resize(self) -> bool {
        !matches!(self, CursorStyle::Default)
    }
}

impl fmt::Display for CursorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.css_name())
    }
}
