//! Headless floating window.
//!
//! `FloatingWindow` carries everything a view needs to draw one window
//! (geometry, titlebar state, tooltip, focus and stacking) and implements
//! [`WindowAdapter`] so the manager can drive it. Hosts render from its
//! getters and feed it nothing directly; all pointer input arrives through
//! the manager.

use std::fmt;

use super::config::GeometryDefaults;
use super::titlebar::{TitlebarHit, TitlebarLayout};
use super::{ClickOutcome, TitlebarButton, TooltipTarget, WindowAdapter};
use crate::layout::{Bounds, Point, Rect, RectSpec, ResizeEdge, Viewport};

/// Tooltip currently shown by a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    pub text: String,
    pub position: Point,
    /// Stacking depth to draw at, above every window.
    pub stack_depth: usize,
}

/// Host callbacks fired on close requests and focus transitions.
#[derive(Default)]
pub struct WindowHooks {
    on_exit: Option<Box<dyn FnMut() -> bool>>,
    on_focus: Option<Box<dyn FnMut()>>,
    on_blur: Option<Box<dyn FnMut()>>,
}

impl fmt::Debug for WindowHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowHooks")
            .field("on_exit", &self.on_exit.is_some())
            .field("on_focus", &self.on_focus.is_some())
            .field("on_blur", &self.on_blur.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct HoverFlags {
    on_window: bool,
    on_titlebar: bool,
    on_buttons: bool,
    on_title: bool,
    button: Option<TitlebarButton>,
}

#[derive(Debug)]
pub struct FloatingWindow {
    title: String,
    rect: Rect,
    titlebar_height: i32,
    button_width: i32,
    title_char_width: i32,
    focused: bool,
    z_index: usize,
    maximized: bool,
    minimized: bool,
    restore_bounds: Option<Bounds>,
    hover: HoverFlags,
    pressed: Option<TitlebarButton>,
    tooltip: Option<Tooltip>,
    hooks: WindowHooks,
}

impl FloatingWindow {
    pub fn new(title: impl Into<String>, spec: RectSpec, defaults: &GeometryDefaults) -> Self {
        Self {
            title: title.into(),
            rect: Rect::new(spec, &defaults.rect),
            titlebar_height: defaults.titlebar_height,
            button_width: defaults.button_width,
            title_char_width: defaults.title_char_width,
            focused: false,
            z_index: 0,
            maximized: false,
            minimized: false,
            restore_bounds: None,
            hover: HoverFlags::default(),
            pressed: None,
            tooltip: None,
            hooks: WindowHooks::default(),
        }
    }

    /// Veto-able close: returning `false` keeps the window open.
    pub fn on_exit(mut self, hook: impl FnMut() -> bool + 'static) -> Self {
        self.hooks.on_exit = Some(Box::new(hook));
        self
    }

    pub fn on_focus(mut self, hook: impl FnMut() + 'static) -> Self {
        self.hooks.on_focus = Some(Box::new(hook));
        self
    }

    pub fn on_blur(mut self, hook: impl FnMut() + 'static) -> Self {
        self.hooks.on_blur = Some(Box::new(hook));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    /// Box the window occupies on screen; a minimized window shrinks to its
    /// titlebar.
    pub fn bounds(&self) -> Bounds {
        let mut bounds = self.rect.bounds();
        if self.minimized {
            bounds.height = 2 * self.rect.border_width() + self.titlebar_height;
        }
        bounds
    }

    /// Box inside the border and below the titlebar. Empty while minimized.
    pub fn content_bounds(&self) -> Bounds {
        if self.minimized {
            return Bounds::default();
        }
        let outer = self.rect.bounds();
        let border = self.rect.border_width();
        Bounds::new(
            outer.left + border,
            outer.top + border + self.titlebar_height,
            (outer.width - 2 * border).max(0),
            (outer.height - 2 * border - self.titlebar_height).max(0),
        )
    }

    pub fn titlebar(&self) -> TitlebarLayout {
        TitlebarLayout::new(
            self.bounds(),
            self.rect.border_width(),
            self.titlebar_height,
            self.button_width,
        )
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn z_index(&self) -> usize {
        self.z_index
    }

    pub fn pressed_button(&self) -> Option<TitlebarButton> {
        self.pressed
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    pub fn toggle_minimize(&mut self) {
        self.minimized = !self.minimized;
        tracing::debug!(title = %self.title, minimized = self.minimized, "toggled minimize");
    }

    /// Maximize, or restore the exact bounds cached when maximizing.
    pub fn toggle_maximize(&mut self, viewport: Viewport) {
        if self.maximized {
            if let Some(bounds) = self.restore_bounds.take() {
                self.rect.set_bounds(bounds);
            }
            self.maximized = false;
            tracing::debug!(title = %self.title, "restored window");
        } else {
            self.minimized = false;
            self.maximize(viewport);
        }
    }

    fn request_exit(&mut self) -> bool {
        self.hooks.on_exit.as_mut().is_none_or(|hook| hook())
    }
}

impl WindowAdapter for FloatingWindow {
    fn update_window_focus(&mut self, focused: bool) {
        if self.focused == focused {
            return;
        }
        self.focused = focused;
        let hook = if focused {
            self.hooks.on_focus.as_mut()
        } else {
            self.hooks.on_blur.as_mut()
        };
        if let Some(hook) = hook {
            hook();
        }
    }

    fn update_window_z_index(&mut self, z_index: usize) {
        self.z_index = z_index;
    }

    fn update_window_position(&mut self, pointer: Point) {
        self.rect.move_to_cursor(pointer);
    }

    fn update_window_size(&mut self, pointer: Point, edge: ResizeEdge) {
        self.rect.resize_to_cursor(pointer, Some(edge));
    }

    fn setup_cursor_offset(&mut self, pointer: Point, edge: Option<ResizeEdge>) {
        self.rect.set_cursor_offset(pointer, edge);
    }

    fn fix_off_screen_move(&mut self) {
        self.rect.move_within_viewport();
    }

    fn push_titlebar_button(&mut self) -> Option<TitlebarButton> {
        self.pressed = self.hover.button;
        self.pressed
    }

    fn release_titlebar_button(&mut self) {
        self.pressed = None;
    }

    fn handle_titlebar_button_click(
        &mut self,
        button: TitlebarButton,
        viewport: Viewport,
    ) -> ClickOutcome {
        match button {
            TitlebarButton::Minimize => self.toggle_minimize(),
            TitlebarButton::Maximize => self.toggle_maximize(viewport),
            TitlebarButton::Close => {
                if self.request_exit() {
                    return ClickOutcome::CloseRequested;
                }
                tracing::debug!(title = %self.title, "close vetoed");
            }
        }
        ClickOutcome::Handled
    }

    fn show_tooltip(&mut self, pointer: Point, stack_depth: usize) -> bool {
        let text = match self.tooltip_target() {
            Some(TooltipTarget::Button(button)) => button.label(self.maximized).to_string(),
            Some(TooltipTarget::Title) if self.is_title_overflowing() => self.title.clone(),
            _ => return false,
        };
        self.tooltip = Some(Tooltip {
            text,
            position: Point::new(pointer.x, pointer.y + self.titlebar_height),
            stack_depth,
        });
        true
    }

    fn close_tooltip(&mut self) {
        self.tooltip = None;
    }

    fn cursor_state(&self, pointer: Point) -> Option<ResizeEdge> {
        if self.maximized || self.minimized {
            return None;
        }
        self.rect.cursor_resize_state(pointer)
    }

    fn is_title_overflowing(&self) -> bool {
        self.titlebar()
            .title_overflows(&self.title, self.title_char_width)
    }

    fn maximize(&mut self, viewport: Viewport) {
        if !self.maximized {
            self.restore_bounds = Some(self.rect.bounds());
            self.maximized = true;
            tracing::debug!(title = %self.title, "maximized window");
        }
        self.rect.cover_viewport(viewport);
    }

    fn cursor_on_window(&self) -> bool {
        self.hover.on_window
    }

    fn cursor_on_titlebar(&self) -> bool {
        self.hover.on_titlebar
    }

    fn cursor_on_titlebar_buttons(&self) -> bool {
        self.hover.on_buttons
    }

    fn hover_titlebar_button(&self) -> Option<TitlebarButton> {
        self.hover.button
    }

    fn is_maximized(&self) -> bool {
        self.maximized
    }

    fn is_minimized(&self) -> bool {
        self.minimized
    }

    fn cursor_on_title(&self) -> bool {
        self.hover.on_title
    }

    fn track_pointer(&mut self, pointer: Point, obscured: bool) -> bool {
        let on_window = !obscured && self.bounds().contains(pointer);
        let hit = if on_window {
            self.titlebar().hit_test(pointer)
        } else {
            None
        };
        let button = match hit {
            Some(TitlebarHit::Button(button)) => Some(button),
            _ => None,
        };
        self.hover = HoverFlags {
            on_window,
            on_titlebar: hit.is_some(),
            on_buttons: button.is_some(),
            on_title: hit == Some(TitlebarHit::Title),
            button,
        };
        on_window
    }

    fn validate(&self) -> Result<(), String> {
        if self.title.is_empty() {
            return Err("window title is empty".to_string());
        }
        let chrome = 2 * self.rect.border_width() + self.titlebar_height;
        if self.rect.min_height() < chrome {
            return Err(format!(
                "minimum height {} cannot hold the titlebar ({chrome})",
                self.rect.min_height()
            ));
        }
        Ok(())
    }
}
