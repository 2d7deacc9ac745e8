//! Titlebar geometry and hit-testing for one window.

use super::TitlebarButton;
use crate::layout::{Bounds, Point};

/// What a pointer inside the titlebar is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitlebarHit {
    Title,
    Button(TitlebarButton),
    /// Titlebar background outside the title slot and the buttons.
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitlebarLayout {
    pub bar: Bounds,
    pub title: Bounds,
    pub buttons: [(TitlebarButton, Bounds); 3],
}

impl TitlebarLayout {
    /// Lay out the titlebar just inside the border of `outer`, with the
    /// buttons packed against its right end.
    pub fn new(outer: Bounds, border_width: i32, titlebar_height: i32, button_width: i32) -> Self {
        let bar = Bounds::new(
            outer.left + border_width,
            outer.top + border_width,
            (outer.width - 2 * border_width).max(0),
            titlebar_height,
        );
        let mut x = bar.right();
        let mut slot = |button| {
            x -= button_width;
            (
                button,
                Bounds::new(x.max(bar.left), bar.top, button_width, bar.height),
            )
        };
        let close = slot(TitlebarButton::Close);
        let maximize = slot(TitlebarButton::Maximize);
        let minimize = slot(TitlebarButton::Minimize);
        let title = Bounds::new(
            bar.left,
            bar.top,
            (minimize.1.left - bar.left).max(0),
            bar.height,
        );
        Self {
            bar,
            title,
            buttons: [minimize, maximize, close],
        }
    }

    pub fn button_bounds(&self, button: TitlebarButton) -> Bounds {
        self.buttons
            .iter()
            .find(|(b, _)| *b == button)
            .map(|(_, bounds)| *bounds)
            .unwrap_or_default()
    }

    pub fn hit_test(&self, point: Point) -> Option<TitlebarHit> {
        if !self.bar.contains(point) {
            return None;
        }
        if let Some((button, _)) = self.buttons.iter().find(|(_, b)| b.contains(point)) {
            return Some(TitlebarHit::Button(*button));
        }
        if self.title.contains(point) {
            Some(TitlebarHit::Title)
        } else {
            Some(TitlebarHit::Bar)
        }
    }

    pub fn title_overflows(&self, title: &str, char_width: i32) -> bool {
        title.chars().count() as i32 * char_width > self.title.width
    }
}
