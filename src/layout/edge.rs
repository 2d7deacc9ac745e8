use crate::constants::{CORNER_BAND_EXTRA, EDGE_BAND_EXTRA};

/// Edge or corner of a window being dragged to resize it.
///
/// The interior ("regular") state is modelled as `None` wherever an
/// `Option<ResizeEdge>` is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeEdge {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        ResizeEdge::Left,
        ResizeEdge::Right,
        ResizeEdge::Top,
        ResizeEdge::Bottom,
        ResizeEdge::TopLeft,
        ResizeEdge::TopRight,
        ResizeEdge::BottomLeft,
        ResizeEdge::BottomRight,
    ];

    pub const fn moves_left(self) -> bool {
        matches!(
            self,
            ResizeEdge::Left | ResizeEdge::TopLeft | ResizeEdge::BottomLeft
        )
    }

    pub const fn moves_right(self) -> bool {
        matches!(
            self,
            ResizeEdge::Right | ResizeEdge::TopRight | ResizeEdge::BottomRight
        )
    }

    pub const fn moves_top(self) -> bool {
        matches!(
            self,
            ResizeEdge::Top | ResizeEdge::TopLeft | ResizeEdge::TopRight
        )
    }

    pub const fn moves_bottom(self) -> bool {
        matches!(
            self,
            ResizeEdge::Bottom | ResizeEdge::BottomLeft | ResizeEdge::BottomRight
        )
    }

    pub const fn is_corner(self) -> bool {
        matches!(
            self,
            ResizeEdge::TopLeft
                | ResizeEdge::TopRight
                | ResizeEdge::BottomLeft
                | ResizeEdge::BottomRight
        )
    }
}

/// Widths of the resize hit bands, expressed as pixels beyond the border.
///
/// These were tuned by hand for a 2px border; re-check them before relying on
/// them with much thicker borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitBands {
    pub edge: i32,
    pub corner: i32,
}

impl Default for HitBands {
    fn default() -> Self {
        Self {
            edge: EDGE_BAND_EXTRA,
            corner: CORNER_BAND_EXTRA,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_move_two_sides() {
        for edge in ResizeEdge::ALL {
            let sides = [
                edge.moves_left(),
                edge.moves_right(),
                edge.moves_top(),
                edge.moves_bottom(),
            ]
            .iter()
            .filter(|s| **s)
            .count();
            let expected = if edge.is_corner() { 2 } else { 1 };
            assert_eq!(sides, expected, "{edge:?}");
        }
    }
}
