//! Per-window geometry engine.
//!
//! Translates pointer positions into new bounding boxes for one window,
//! clamping against its minimum size. Nothing here can fail: out-of-range
//! input is clamped instead.

use super::{Bounds, HitBands, Point, ResizeEdge, Viewport};
use crate::constants::{
    BUILTIN_MIN_HEIGHT, BUILTIN_MIN_WIDTH, DEFAULT_BORDER_WIDTH, DEFAULT_HEIGHT, DEFAULT_LEFT,
    DEFAULT_TOP, DEFAULT_WIDTH, MIN_BORDER_WIDTH, MIN_VIEWPORT_COORD,
};

/// Fallbacks for every construction parameter a caller may omit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectDefaults {
    pub bounds: Bounds,
    pub min_width: i32,
    pub min_height: i32,
    pub border_width: i32,
    pub bands: HitBands,
}

impl Default for RectDefaults {
    fn default() -> Self {
        Self {
            bounds: Bounds::new(DEFAULT_LEFT, DEFAULT_TOP, DEFAULT_WIDTH, DEFAULT_HEIGHT),
            min_width: BUILTIN_MIN_WIDTH,
            min_height: BUILTIN_MIN_HEIGHT,
            border_width: DEFAULT_BORDER_WIDTH,
            bands: HitBands::default(),
        }
    }
}

/// Caller-supplied construction parameters. Each field is defaulted
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectSpec {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub min_width: Option<i32>,
    pub min_height: Option<i32>,
    pub border_width: Option<i32>,
}

impl RectSpec {
    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_min_size(mut self, min_width: i32, min_height: i32) -> Self {
        self.min_width = Some(min_width);
        self.min_height = Some(min_height);
        self
    }

    pub fn with_border_width(mut self, border_width: i32) -> Self {
        self.border_width = Some(border_width);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    left: i32,
    top: i32,
    width: i32,
    height: i32,
    min_width: i32,
    min_height: i32,
    border_width: i32,
    cursor_offset: Point,
    bands: HitBands,
}

impl Rect {
    pub fn new(spec: RectSpec, defaults: &RectDefaults) -> Self {
        let border_width = spec
            .border_width
            .unwrap_or(defaults.border_width)
            .max(MIN_BORDER_WIDTH);
        let min_width = spec.min_width.unwrap_or(0).max(defaults.min_width) + 2 * border_width;
        let min_height = spec.min_height.unwrap_or(0).max(defaults.min_height) + 2 * border_width;
        Self {
            left: spec.x.unwrap_or(defaults.bounds.left),
            top: spec.y.unwrap_or(defaults.bounds.top),
            width: spec.width.unwrap_or(defaults.bounds.width).max(min_width),
            height: spec.height.unwrap_or(defaults.bounds.height).max(min_height),
            min_width,
            min_height,
            border_width,
            cursor_offset: Point::default(),
            bands: defaults.bands,
        }
    }

    pub fn left(&self) -> i32 {
        self.left
    }

    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    pub fn min_width(&self) -> i32 {
        self.min_width
    }

    pub fn min_height(&self) -> i32 {
        self.min_height
    }

    pub fn border_width(&self) -> i32 {
        self.border_width
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.left, self.top, self.width, self.height)
    }

    /// Replace position and size wholesale. Sizes are still floored at the
    /// minimum.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.left = bounds.left;
        self.top = bounds.top;
        self.width = bounds.width.max(self.min_width);
        self.height = bounds.height.max(self.min_height);
    }

    pub fn contains(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    /// Record where the pointer grabbed the window relative to the anchor of
    /// the upcoming gesture: the top-left corner for a move, or the dragged
    /// edge/corner for a resize. Axes the edge does not move get no offset.
    pub fn set_cursor_offset(&mut self, pointer: Point, edge: Option<ResizeEdge>) {
        let anchor = match edge {
            None => Point::new(self.left, self.top),
            Some(edge) => {
                let x = if edge.moves_left() {
                    self.left
                } else if edge.moves_right() {
                    self.right()
                } else {
                    pointer.x
                };
                let y = if edge.moves_top() {
                    self.top
                } else if edge.moves_bottom() {
                    self.bottom()
                } else {
                    pointer.y
                };
                Point::new(x, y)
            }
        };
        self.cursor_offset = pointer.offset_by(anchor);
    }

    /// Resize by dragging `edge` to `pointer`. `None` (the interior) leaves
    /// the rect untouched. Corners apply both of their edge rules
    /// independently.
    pub fn resize_to_cursor(&mut self, pointer: Point, edge: Option<ResizeEdge>) {
        let Some(edge) = edge else {
            return;
        };
        let target = pointer.offset_by(self.cursor_offset);
        if edge.moves_top() {
            self.drag_top(target.y);
        } else if edge.moves_bottom() {
            self.drag_bottom(target.y);
        }
        if edge.moves_left() {
            self.drag_left(target.x);
        } else if edge.moves_right() {
            self.drag_right(target.x);
        }
    }

    fn drag_top(&mut self, y: i32) {
        let bottom = self.bottom();
        let y = y.max(MIN_VIEWPORT_COORD);
        let height = bottom - y;
        if height < self.min_height {
            // top cannot pass through bottom
            self.top = bottom - self.min_height;
            self.height = self.min_height;
        } else {
            self.top = y;
            self.height = height;
        }
    }

    fn drag_left(&mut self, x: i32) {
        let right = self.right();
        let x = x.max(MIN_VIEWPORT_COORD);
        let width = right - x;
        if width < self.min_width {
            self.left = right - self.min_width;
            self.width = self.min_width;
        } else {
            self.left = x;
            self.width = width;
        }
    }

    fn drag_bottom(&mut self, y: i32) {
        self.height = (y - self.top).max(self.min_height);
    }

    fn drag_right(&mut self, x: i32) {
        self.width = (x - self.left).max(self.min_width);
    }

    /// Classify `pointer` as one of the eight resize edges, or `None` for the
    /// interior and anything outside the rect. Corners win over straight
    /// edges.
    pub fn cursor_resize_state(&self, pointer: Point) -> Option<ResizeEdge> {
        if !self.contains(pointer) {
            return None;
        }
        let edge_band = self.border_width + self.bands.edge;
        let corner_band = self.border_width + self.bands.corner;

        let from_left = pointer.x - self.left;
        let from_right = self.right() - 1 - pointer.x;
        let from_top = pointer.y - self.top;
        let from_bottom = self.bottom() - 1 - pointer.y;

        let on_left = from_left < edge_band;
        let on_right = from_right < edge_band;
        let on_top = from_top < edge_band;
        let on_bottom = from_bottom < edge_band;

        if (on_top && from_left < corner_band) || (on_left && from_top < corner_band) {
            return Some(ResizeEdge::TopLeft);
        }
        if (on_top && from_right < corner_band) || (on_right && from_top < corner_band) {
            return Some(ResizeEdge::TopRight);
        }
        if (on_bottom && from_left < corner_band) || (on_left && from_bottom < corner_band) {
            return Some(ResizeEdge::BottomLeft);
        }
        if (on_bottom && from_right < corner_band) || (on_right && from_bottom < corner_band) {
            return Some(ResizeEdge::BottomRight);
        }
        if on_top {
            Some(ResizeEdge::Top)
        } else if on_bottom {
            Some(ResizeEdge::Bottom)
        } else if on_left {
            Some(ResizeEdge::Left)
        } else if on_right {
            Some(ResizeEdge::Right)
        } else {
            None
        }
    }

    /// Follow the pointer, keeping the grab point recorded by
    /// [`Rect::set_cursor_offset`]. Size is untouched.
    pub fn move_to_cursor(&mut self, pointer: Point) {
        let origin = pointer.offset_by(self.cursor_offset);
        self.left = origin.x;
        self.top = origin.y;
    }

    /// Pull the top/left edge back on screen. Applied once a move ends, never
    /// while dragging. Bottom/right may stay past the viewport.
    pub fn move_within_viewport(&mut self) {
        if self.left < MIN_VIEWPORT_COORD {
            self.left = MIN_VIEWPORT_COORD;
        }
        if self.top < MIN_VIEWPORT_COORD {
            self.top = MIN_VIEWPORT_COORD;
        }
    }

    /// Stretch over the whole viewport, from (1, 1) to its far corner.
    pub fn cover_viewport(&mut self, viewport: Viewport) {
        self.left = MIN_VIEWPORT_COORD;
        self.top = MIN_VIEWPORT_COORD;
        self.width = (viewport.width - MIN_VIEWPORT_COORD).max(self.min_width);
        self.height = (viewport.height - MIN_VIEWPORT_COORD).max(self.min_height);
    }
}
