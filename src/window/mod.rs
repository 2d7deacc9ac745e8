pub mod config;
pub mod floating_window;
pub mod session;
pub mod titlebar;

mod window_manager;

use std::fmt;

use crate::layout::{Point, ResizeEdge, Viewport};

pub use config::{GeometryDefaults, WmConfig};
pub use floating_window::{FloatingWindow, Tooltip, WindowHooks};
pub use session::{DragKind, DragSession};
pub use titlebar::{TitlebarHit, TitlebarLayout};
pub use window_manager::WindowManager;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitlebarButton {
    Minimize,
    Maximize,
    Close,
}

impl TitlebarButton {
    /// Tooltip label; the maximize button reads "Restore" while maximized.
    pub fn label(self, maximized: bool) -> &'static str {
        match self {
            TitlebarButton::Minimize => "Minimize",
            TitlebarButton::Maximize if maximized => "Restore",
            TitlebarButton::Maximize => "Maximize",
            TitlebarButton::Close => "Close",
        }
    }
}

impl fmt::Display for TitlebarButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label(false))
    }
}

/// Titlebar sub-region that can carry a hover tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TooltipTarget {
    Button(TitlebarButton),
    Title,
}

/// Result of committing a titlebar button click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Handled,
    /// The window agreed to close; the manager unregisters it.
    CloseRequested,
}

/// Contract between the window manager and one window.
///
/// The manager is the only caller of the mutators and the only owner of
/// stacking order. The hover flags belong to the window: it updates them
/// from its own pointer tracking and the manager only reads them.
pub trait WindowAdapter {
    fn update_window_focus(&mut self, focused: bool);
    fn update_window_z_index(&mut self, z_index: usize);
    /// Follow the pointer during a move gesture.
    fn update_window_position(&mut self, pointer: Point);
    /// Follow the pointer during a resize gesture on `edge`.
    fn update_window_size(&mut self, pointer: Point, edge: ResizeEdge);
    /// Remember the grab point at gesture start. `None` means a move.
    fn setup_cursor_offset(&mut self, pointer: Point, edge: Option<ResizeEdge>);
    /// Called once when a move gesture ends.
    fn fix_off_screen_move(&mut self);
    /// Draw the hovered titlebar button as pressed and report which one.
    fn push_titlebar_button(&mut self) -> Option<TitlebarButton>;
    fn release_titlebar_button(&mut self);
    fn handle_titlebar_button_click(
        &mut self,
        button: TitlebarButton,
        viewport: Viewport,
    ) -> ClickOutcome;
    /// Produce a tooltip for whatever is under `pointer`. Returns whether one
    /// is now visible.
    fn show_tooltip(&mut self, pointer: Point, stack_depth: usize) -> bool;
    fn close_tooltip(&mut self);
    fn cursor_state(&self, pointer: Point) -> Option<ResizeEdge>;
    fn is_title_overflowing(&self) -> bool;
    /// Cover the viewport; also used to re-cover it after a viewport resize.
    fn maximize(&mut self, viewport: Viewport);

    fn cursor_on_window(&self) -> bool;
    fn cursor_on_titlebar(&self) -> bool;
    fn cursor_on_titlebar_buttons(&self) -> bool;
    fn hover_titlebar_button(&self) -> Option<TitlebarButton>;
    fn is_maximized(&self) -> bool;
    fn is_minimized(&self) -> bool;

    fn cursor_on_title(&self) -> bool {
        false
    }

    fn tooltip_target(&self) -> Option<TooltipTarget> {
        if let Some(button) = self.hover_titlebar_button() {
            Some(TooltipTarget::Button(button))
        } else if self.cursor_on_title() {
            Some(TooltipTarget::Title)
        } else {
            None
        }
    }

    /// Refresh hover flags for `pointer`. `obscured` is set when a window
    /// higher in the stack already claimed the pointer. Returns whether the
    /// pointer is on this window.
    fn track_pointer(&mut self, _pointer: Point, _obscured: bool) -> bool {
        self.cursor_on_window()
    }

    /// Structural self-check run at registration when enabled.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maximize_label_flips_when_maximized() {
        assert_eq!(TitlebarButton::Maximize.label(false), "Maximize");
        assert_eq!(TitlebarButton::Maximize.label(true), "Restore");
        assert_eq!(TitlebarButton::Close.label(true), "Close");
        assert_eq!(TitlebarButton::Minimize.to_string(), "Minimize");
    }
}
