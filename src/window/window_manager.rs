use std::time::Instant;

use crossterm::event::Event;

use super::config::WmConfig;
use super::session::{DragKind, DragSession};
use super::{ClickOutcome, TitlebarButton, TooltipTarget, WindowAdapter};
use crate::cursor::CursorStyle;
use crate::error::WmError;
use crate::input::{HostEvent, PointerButton, PointerEvent, PointerKind};
use crate::layout::{Point, Viewport};
use crate::timer::DelayTimer;

/// Coordinator for every floating window on one page.
///
/// Registry position is stacking order: index 0 is the bottom window and the
/// last index is the topmost one, which is always the only focused window.
/// The manager never does geometry itself; it decides which window's
/// adapter to call, and when.
///
/// Misuse (stale indices, rejected adapters) is logged and ignored so one
/// faulty window cannot take the others down.
pub struct WindowManager<A: WindowAdapter> {
    config: WmConfig,
    windows: Vec<A>,
    viewport: Viewport,
    cursor: CursorStyle,
    cursor_dirty: bool,
    session: DragSession,
    show_timer: DelayTimer<usize>,
    dismiss_timer: DelayTimer<usize>,
    // window currently displaying a tooltip
    tooltip_window: Option<usize>,
    // hover target the show timer was armed for, or that is being shown
    tooltip_candidate: Option<(usize, TooltipTarget)>,
    last_pointer: Point,
    // plain titlebar click that may become the first half of a double-click
    last_titlebar_press: Option<(usize, Instant, Point)>,
    // windows closed from their titlebar; host drains via `take_closed_windows`
    closed_windows: Vec<A>,
}

impl<A: WindowAdapter> WindowManager<A> {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_config(viewport, WmConfig::default())
    }

    pub fn with_config(viewport: Viewport, config: WmConfig) -> Self {
        Self {
            show_timer: DelayTimer::new(config.tooltip_show_delay),
            dismiss_timer: DelayTimer::new(config.tooltip_dismiss_delay),
            config,
            windows: Vec::new(),
            viewport,
            cursor: CursorStyle::Default,
            cursor_dirty: false,
            session: DragSession::Idle,
            tooltip_window: None,
            tooltip_candidate: None,
            last_pointer: Point::default(),
            last_titlebar_press: None,
            closed_windows: Vec::new(),
        }
    }

    pub fn config(&self) -> &WmConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Number of registered windows; also the z-index the next one gets.
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn window(&self, index: usize) -> Option<&A> {
        self.windows.get(index)
    }

    pub fn window_mut(&mut self, index: usize) -> Option<&mut A> {
        self.windows.get_mut(index)
    }

    /// Windows from bottom to top.
    pub fn windows(&self) -> impl DoubleEndedIterator<Item = &A> {
        self.windows.iter()
    }

    pub fn windows_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut A> {
        self.windows.iter_mut()
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.windows.len().checked_sub(1)
    }

    pub fn session(&self) -> DragSession {
        self.session
    }

    pub fn drag_kind(&self) -> DragKind {
        self.session.kind()
    }

    pub fn cursor(&self) -> CursorStyle {
        self.cursor
    }

    /// The new cursor style, once per change.
    pub fn take_cursor_change(&mut self) -> Option<CursorStyle> {
        if self.cursor_dirty {
            self.cursor_dirty = false;
            Some(self.cursor)
        } else {
            None
        }
    }

    pub fn tooltip_window(&self) -> Option<usize> {
        self.tooltip_window
    }

    /// Drain windows that closed themselves from their titlebar.
    pub fn take_closed_windows(&mut self) -> Vec<A> {
        std::mem::take(&mut self.closed_windows)
    }

    /// Earliest pending timer deadline, for sizing the host's poll timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.show_timer.deadline(), self.dismiss_timer.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Add a window on top of the stack and focus it. Returns its index, or
    /// `None` if it was rejected.
    pub fn register_window(&mut self, mut window: A) -> Option<usize> {
        if let Err(err) = self.admit(&window) {
            tracing::warn!(%err, "window registration rejected");
            return None;
        }
        if let Some(top) = self.windows.last_mut() {
            top.update_window_focus(false);
        }
        let index = self.windows.len();
        window.update_window_z_index(index);
        window.update_window_focus(true);
        self.windows.push(window);
        self.last_titlebar_press = None;
        tracing::debug!(index, "registered window");
        Some(index)
    }

    /// Remove the window at `index`. Every window above it slides down one
    /// slot; focus only moves when the top window was removed.
    pub fn unregister_window(&mut self, index: usize) -> Option<A> {
        if let Err(err) = self.checked_index(index) {
            tracing::warn!(%err, "unregister ignored");
            return None;
        }
        self.reset_tooltip();
        self.session = self.session.after_removal(index);
        self.last_titlebar_press = None;
        let was_top = index + 1 == self.windows.len();
        let removed = self.windows.remove(index);
        for (offset, window) in self.windows[index..].iter_mut().enumerate() {
            window.update_window_z_index(index + offset);
        }
        if was_top && let Some(top) = self.windows.last_mut() {
            top.update_window_focus(true);
        }
        tracing::debug!(index, remaining = self.windows.len(), "unregistered window");
        Some(removed)
    }

    /// Raise and focus the window at `index`; returns its new index.
    pub fn raise_window(&mut self, index: usize) -> Option<usize> {
        if let Err(err) = self.checked_index(index) {
            tracing::warn!(%err, "raise ignored");
            return None;
        }
        self.reset_tooltip();
        self.last_titlebar_press = None;
        let top = self.bring_window_to_top(index);
        self.session = self.session.after_raise(index, top);
        Some(top)
    }

    fn admit(&self, window: &A) -> Result<(), WmError> {
        if let Some(limit) = self.config.max_windows
            && self.windows.len() >= limit
        {
            return Err(WmError::RegistryFull { limit });
        }
        if self.config.validate_adapters {
            window.validate().map_err(WmError::AdapterRejected)?;
        }
        Ok(())
    }

    fn checked_index(&self, index: usize) -> Result<usize, WmError> {
        if index < self.windows.len() {
            Ok(index)
        } else {
            Err(WmError::InvalidIndex {
                index,
                len: self.windows.len(),
            })
        }
    }

    /// Move the window at `index` to the top slot. Windows above it shift
    /// down one slot, get renumbered and lose focus; only the new top ends up
    /// focused. `index` must be valid.
    fn bring_window_to_top(&mut self, index: usize) -> usize {
        let top = self.windows.len() - 1;
        if index < top {
            self.windows[index..].rotate_left(1);
            for (offset, window) in self.windows[index..top].iter_mut().enumerate() {
                window.update_window_z_index(index + offset);
                window.update_window_focus(false);
            }
        }
        let window = &mut self.windows[top];
        window.update_window_z_index(top);
        window.update_window_focus(true);
        tracing::trace!(from = index, to = top, "raised window");
        top
    }

    /// Feed a terminal event. Returns whether the manager consumed it.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        HostEvent::from_crossterm(event)
            .is_some_and(|event| self.handle_host_event(event, Instant::now()))
    }

    pub fn handle_host_event(&mut self, event: HostEvent, now: Instant) -> bool {
        match event {
            HostEvent::Pointer(PointerEvent { kind, position }) => match kind {
                PointerKind::Down(button) => self.pointer_down(position, button, now),
                PointerKind::Up(button) => self.pointer_up(position, button, now),
                PointerKind::Move => self.pointer_move(position, now),
            },
            HostEvent::Resize(viewport) => {
                self.viewport_resized(viewport);
                true
            }
        }
    }

    pub fn pointer_down(&mut self, position: Point, button: PointerButton, now: Instant) -> bool {
        self.last_pointer = position;
        self.refresh_hover(position);
        self.reset_tooltip();
        if !self.session.is_idle() {
            // another button while a gesture is running
            return true;
        }
        let Some(index) = self.hovered_index() else {
            self.last_titlebar_press = None;
            return false;
        };
        let (session, titlebar_press) = self.begin_session(index, position, button, now);
        let top = self.bring_window_to_top(index);
        self.session = session.after_raise(index, top);
        self.last_titlebar_press = titlebar_press.then_some((top, now, position));
        tracing::trace!(index = top, kind = ?self.session.kind(), "pointer down");
        true
    }

    /// Classify a press on window `index`. The flag reports a plain titlebar
    /// press that may start a double-click.
    fn begin_session(
        &mut self,
        index: usize,
        position: Point,
        button: PointerButton,
        now: Instant,
    ) -> (DragSession, bool) {
        let viewport = self.viewport;
        let window = &mut self.windows[index];
        match button {
            PointerButton::Middle => (DragSession::Idle, false),
            PointerButton::Right => {
                if window.cursor_on_titlebar() && !window.cursor_on_titlebar_buttons() {
                    (DragSession::ContextMenuPending { index }, false)
                } else {
                    (DragSession::Idle, false)
                }
            }
            PointerButton::Left => {
                if window.cursor_on_titlebar_buttons() {
                    let session = match window.push_titlebar_button() {
                        Some(button) => DragSession::ButtonPress {
                            index,
                            button,
                            held: true,
                        },
                        None => DragSession::Idle,
                    };
                    return (session, false);
                }
                let resizable = !window.is_maximized() && !window.is_minimized();
                if resizable && let Some(edge) = window.cursor_state(position) {
                    window.setup_cursor_offset(position, Some(edge));
                    return (DragSession::Resizing { index, edge }, false);
                }
                if !window.cursor_on_titlebar() {
                    return (DragSession::Idle, false);
                }
                if self.config.detect_double_click
                    && let Some((last, at, _)) = self.last_titlebar_press.take()
                    && last == index
                    && now.duration_since(at) <= self.config.double_click_window
                {
                    window.handle_titlebar_button_click(TitlebarButton::Maximize, viewport);
                    tracing::debug!(index, "titlebar double-click");
                    return (DragSession::Idle, false);
                }
                if window.is_maximized() {
                    return (DragSession::Idle, true);
                }
                window.setup_cursor_offset(position, None);
                (DragSession::Moving { index }, true)
            }
        }
    }

    pub fn pointer_move(&mut self, position: Point, now: Instant) -> bool {
        self.last_pointer = position;
        self.refresh_hover(position);
        match self.session {
            DragSession::Idle => self.update_hover(position, now),
            DragSession::Moving { index } => {
                // a press that turned into a drag is not a click
                if self
                    .last_titlebar_press
                    .is_some_and(|(_, _, origin)| origin != position)
                {
                    self.last_titlebar_press = None;
                }
                if let Some(window) = self.windows.get_mut(index) {
                    window.update_window_position(position);
                }
                true
            }
            DragSession::Resizing { index, edge } => {
                if let Some(window) = self.windows.get_mut(index) {
                    window.update_window_size(position, edge);
                }
                true
            }
            DragSession::ButtonPress {
                index,
                button,
                held,
            } => {
                let Some(window) = self.windows.get_mut(index) else {
                    return true;
                };
                let over = window.hover_titlebar_button() == Some(button);
                if over && !held {
                    window.push_titlebar_button();
                } else if !over && held {
                    window.release_titlebar_button();
                }
                self.session = DragSession::ButtonPress {
                    index,
                    button,
                    held: over,
                };
                true
            }
            DragSession::ContextMenuPending { .. } => true,
        }
    }

    pub fn pointer_up(&mut self, position: Point, button: PointerButton, now: Instant) -> bool {
        self.last_pointer = position;
        self.refresh_hover(position);
        let handled = match std::mem::take(&mut self.session) {
            DragSession::Idle => false,
            DragSession::Moving { index } => {
                if let Some(window) = self.windows.get_mut(index) {
                    window.fix_off_screen_move();
                }
                true
            }
            DragSession::Resizing { .. } => true,
            DragSession::ButtonPress {
                index,
                button: pressed,
                ..
            } => {
                self.finish_button_press(index, pressed);
                true
            }
            DragSession::ContextMenuPending { index } => {
                let on_titlebar = self
                    .windows
                    .get(index)
                    .is_some_and(|window| window.cursor_on_titlebar());
                if button == PointerButton::Right && on_titlebar {
                    // no menu yet
                    tracing::debug!(index, "titlebar context menu requested");
                }
                true
            }
        };
        self.update_hover(position, now);
        handled
    }

    fn finish_button_press(&mut self, index: usize, pressed: TitlebarButton) {
        let viewport = self.viewport;
        let Some(window) = self.windows.get_mut(index) else {
            tracing::warn!(index, "pressed window vanished before release");
            return;
        };
        window.release_titlebar_button();
        if window.hover_titlebar_button() != Some(pressed) {
            tracing::trace!(index, button = %pressed, "button released elsewhere");
            return;
        }
        tracing::debug!(index, button = %pressed, "titlebar button clicked");
        if window.handle_titlebar_button_click(pressed, viewport) == ClickOutcome::CloseRequested
            && let Some(closed) = self.unregister_window(index)
        {
            self.closed_windows.push(closed);
        }
    }

    /// Native double-click on a titlebar toggles maximize/restore, outside
    /// the drag session.
    pub fn double_click(&mut self, position: Point) -> bool {
        self.refresh_hover(position);
        let viewport = self.viewport;
        let Some(index) = self.hovered_index() else {
            return false;
        };
        let window = &mut self.windows[index];
        if !window.cursor_on_titlebar() || window.cursor_on_titlebar_buttons() {
            return false;
        }
        window.handle_titlebar_button_click(TitlebarButton::Maximize, viewport);
        true
    }

    pub fn viewport_resized(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if let Some(top) = self.windows.last_mut()
            && top.is_maximized()
        {
            top.maximize(viewport);
        }
    }

    /// Fire due tooltip timers.
    pub fn tick(&mut self, now: Instant) {
        if let Some(index) = self.show_timer.poll(now) {
            self.show_tooltip(index, now);
        }
        if let Some(index) = self.dismiss_timer.poll(now) {
            self.dismiss_tooltip(index);
        }
    }

    /// Cancel both tooltip timers and hide any visible tooltip.
    pub fn reset_tooltip(&mut self) {
        self.show_timer.cancel();
        self.dismiss_timer.cancel();
        if let Some(index) = self.tooltip_window.take()
            && let Some(window) = self.windows.get_mut(index)
        {
            window.close_tooltip();
        }
        self.tooltip_candidate = None;
    }

    fn show_tooltip(&mut self, index: usize, now: Instant) {
        let current = self.tooltip_candidate.map(|(candidate, _)| candidate);
        if !self.session.is_idle() || current != Some(index) || index >= self.windows.len() {
            tracing::trace!(index, "stale tooltip timer");
            return;
        }
        let depth = self.windows.len();
        let pointer = self.last_pointer;
        if self.windows[index].show_tooltip(pointer, depth) {
            self.tooltip_window = Some(index);
            self.dismiss_timer.cancel();
            self.dismiss_timer.start(now, index);
        }
    }

    fn dismiss_tooltip(&mut self, index: usize) {
        if self.tooltip_window != Some(index) {
            return;
        }
        self.tooltip_window = None;
        if let Some(window) = self.windows.get_mut(index) {
            window.close_tooltip();
        }
    }

    fn refresh_hover(&mut self, position: Point) {
        if !self.config.track_hover {
            return;
        }
        let mut claimed = false;
        for window in self.windows.iter_mut().rev() {
            claimed |= window.track_pointer(position, claimed);
        }
    }

    /// Topmost window reporting the pointer on it.
    fn hovered_index(&self) -> Option<usize> {
        self.windows
            .iter()
            .rposition(|window| window.cursor_on_window())
    }

    fn set_cursor(&mut self, cursor: CursorStyle) {
        if self.cursor != cursor {
            self.cursor = cursor;
            self.cursor_dirty = true;
        }
    }

    /// Idle hover: cursor style and tooltip protocol. Returns whether the
    /// pointer is over a window.
    fn update_hover(&mut self, position: Point, now: Instant) -> bool {
        let Some(index) = self.hovered_index() else {
            self.set_cursor(CursorStyle::Default);
            self.reset_tooltip();
            return false;
        };
        let edge = self.windows[index].cursor_state(position);
        self.set_cursor(CursorStyle::for_edge(edge));
        self.update_tooltip(index, now);
        true
    }

    fn update_tooltip(&mut self, index: usize, now: Instant) {
        let window = &self.windows[index];
        let target = match window.tooltip_target() {
            Some(TooltipTarget::Title) if !window.is_title_overflowing() => None,
            target => target,
        };
        let Some(target) = target else {
            self.reset_tooltip();
            return;
        };
        if self.tooltip_candidate == Some((index, target)) {
            return;
        }
        if self.tooltip_window == Some(index) {
            // same window, new target: swap without waiting
            self.tooltip_candidate = Some((index, target));
            let depth = self.windows.len();
            let pointer = self.last_pointer;
            let window = &mut self.windows[index];
            window.close_tooltip();
            self.dismiss_timer.cancel();
            if window.show_tooltip(pointer, depth) {
                self.dismiss_timer.start(now, index);
            } else {
                self.tooltip_window = None;
            }
            return;
        }
        self.reset_tooltip();
        self.tooltip_candidate = Some((index, target));
        self.show_timer.start(now, index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::ResizeEdge;
    use std::time::Duration;

    /// Records what the manager asks of it; hover flags are set by the test.
    #[derive(Debug, Default)]
    struct Recorder {
        id: usize,
        z: usize,
        focused: bool,
        focus_updates: usize,
        on_window: bool,
        on_titlebar: bool,
        button: Option<TitlebarButton>,
        edge: Option<ResizeEdge>,
        maximized: bool,
        covers: usize,
        pressed: Option<TitlebarButton>,
        clicks: Vec<TitlebarButton>,
        tooltip: bool,
        moves: usize,
        resizes: Vec<ResizeEdge>,
        snapped: usize,
        reject: bool,
    }

    impl Recorder {
        fn new(id: usize) -> Self {
            Self {
                id,
                ..Self::default()
            }
        }
    }

    impl WindowAdapter for Recorder {
        fn update_window_focus(&mut self, focused: bool) {
            self.focused = focused;
            self.focus_updates += 1;
        }
        fn update_window_z_index(&mut self, z_index: usize) {
            self.z = z_index;
        }
        fn update_window_position(&mut self, _pointer: Point) {
            self.moves += 1;
        }
        fn update_window_size(&mut self, _pointer: Point, edge: ResizeEdge) {
            self.resizes.push(edge);
        }
        fn setup_cursor_offset(&mut self, _pointer: Point, _edge: Option<ResizeEdge>) {}
        fn fix_off_screen_move(&mut self) {
            self.snapped += 1;
        }
        fn push_titlebar_button(&mut self) -> Option<TitlebarButton> {
            self.pressed = self.button;
            self.pressed
        }
        fn release_titlebar_button(&mut self) {
            self.pressed = None;
        }
        fn handle_titlebar_button_click(
            &mut self,
            button: TitlebarButton,
            _viewport: Viewport,
        ) -> ClickOutcome {
            self.clicks.push(button);
            if button == TitlebarButton::Close {
                ClickOutcome::CloseRequested
            } else {
                ClickOutcome::Handled
            }
        }
        fn show_tooltip(&mut self, _pointer: Point, _stack_depth: usize) -> bool {
            self.tooltip = self.button.is_some();
            self.tooltip
        }
        fn close_tooltip(&mut self) {
            self.tooltip = false;
        }
        fn cursor_state(&self, _pointer: Point) -> Option<ResizeEdge> {
            self.edge
        }
        fn is_title_overflowing(&self) -> bool {
            false
        }
        fn maximize(&mut self, _viewport: Viewport) {
            self.maximized = true;
            self.covers += 1;
        }
        fn cursor_on_window(&self) -> bool {
            self.on_window
        }
        fn cursor_on_titlebar(&self) -> bool {
            self.on_titlebar
        }
        fn cursor_on_titlebar_buttons(&self) -> bool {
            self.button.is_some()
        }
        fn hover_titlebar_button(&self) -> Option<TitlebarButton> {
            self.button
        }
        fn is_maximized(&self) -> bool {
            self.maximized
        }
        fn is_minimized(&self) -> bool {
            false
        }
        fn validate(&self) -> Result<(), String> {
            if self.reject {
                Err("adapter refused".to_string())
            } else {
                Ok(())
            }
        }
    }

    fn manager_with(n: usize) -> WindowManager<Recorder> {
        let config = WmConfig::default().with_track_hover(false);
        let mut wm = WindowManager::with_config(Viewport::new(800, 600), config);
        for id in 0..n {
            wm.register_window(Recorder::new(id));
        }
        wm
    }

    fn ids(wm: &WindowManager<Recorder>) -> Vec<usize> {
        wm.windows().map(|w| w.id).collect()
    }

    fn assert_single_focus_on_top(wm: &WindowManager<Recorder>) {
        let focused: Vec<usize> = wm
            .windows()
            .enumerate()
            .filter(|(_, w)| w.focused)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(focused, wm.focused_index().into_iter().collect::<Vec<_>>());
        for (i, w) in wm.windows().enumerate() {
            assert_eq!(w.z, i);
        }
    }

    fn hover(wm: &mut WindowManager<Recorder>, index: usize) -> &mut Recorder {
        for w in wm.windows_mut() {
            w.on_window = false;
            w.on_titlebar = false;
            w.button = None;
            w.edge = None;
        }
        let w = wm.window_mut(index).expect("window");
        w.on_window = true;
        w
    }

    #[test]
    fn registration_assigns_sequential_z_and_focuses_newest() {
        let wm = manager_with(4);
        assert_eq!(ids(&wm), vec![0, 1, 2, 3]);
        assert_single_focus_on_top(&wm);
        assert_eq!(wm.focused_index(), Some(3));
    }

    #[test]
    fn unregister_middle_shifts_windows_above() {
        let mut wm = manager_with(5);
        let removed = wm.unregister_window(2).expect("removed");
        assert_eq!(removed.id, 2);
        assert_eq!(ids(&wm), vec![0, 1, 3, 4]);
        assert_single_focus_on_top(&wm);
        assert_eq!(wm.window(3).map(|w| w.id), Some(4));
        // windows below were not touched after registration
        assert_eq!(wm.window(0).map(|w| w.focus_updates), Some(2));
        // neither was the top, whose focus never changed
        assert_eq!(wm.window(3).map(|w| w.focus_updates), Some(1));
        assert!(!removed.focused);
        assert_eq!(removed.focus_updates, 2);
    }

    #[test]
    fn unregister_bottom_keeps_top_focus_untouched() {
        let mut wm = manager_with(3);
        let removed = wm.unregister_window(0).expect("removed");
        assert_eq!(ids(&wm), vec![1, 2]);
        assert_single_focus_on_top(&wm);
        assert!(!removed.focused);
        assert_eq!(wm.window(1).map(|w| w.focus_updates), Some(1));
    }

    #[test]
    fn unregister_top_focuses_next() {
        let mut wm = manager_with(3);
        wm.unregister_window(2);
        assert_eq!(ids(&wm), vec![0, 1]);
        assert_single_focus_on_top(&wm);
    }

    #[test]
    fn invalid_indices_are_ignored() {
        let mut wm = manager_with(2);
        assert!(wm.unregister_window(2).is_none());
        assert!(wm.raise_window(9).is_none());
        assert_eq!(ids(&wm), vec![0, 1]);
    }

    #[test]
    fn rejected_adapters_are_not_registered() {
        let config = WmConfig::default()
            .with_validate_adapters(true)
            .with_max_windows(Some(2));
        let mut wm = WindowManager::with_config(Viewport::new(800, 600), config);
        let bad = Recorder {
            reject: true,
            ..Recorder::new(9)
        };
        assert_eq!(wm.register_window(bad), None);
        assert_eq!(wm.register_window(Recorder::new(0)), Some(0));
        assert_eq!(wm.register_window(Recorder::new(1)), Some(1));
        assert_eq!(wm.register_window(Recorder::new(2)), None);
        assert_eq!(wm.len(), 2);
    }

    #[test]
    fn press_raises_even_for_button_press() {
        let mut wm = manager_with(3);
        let w = hover(&mut wm, 0);
        w.on_titlebar = true;
        w.button = Some(TitlebarButton::Minimize);
        let now = Instant::now();
        assert!(wm.pointer_down(Point::new(5, 5), PointerButton::Left, now));
        assert_eq!(ids(&wm), vec![1, 2, 0]);
        assert_single_focus_on_top(&wm);
        assert_eq!(
            wm.session(),
            DragSession::ButtonPress {
                index: 2,
                button: TitlebarButton::Minimize,
                held: true
            }
        );
    }

    #[test]
    fn resize_edge_is_fixed_for_the_whole_gesture() {
        let mut wm = manager_with(2);
        hover(&mut wm, 1).edge = Some(ResizeEdge::Right);
        let now = Instant::now();
        wm.pointer_down(Point::new(5, 5), PointerButton::Left, now);
        assert_eq!(wm.drag_kind(), DragKind::Resizing);
        hover(&mut wm, 1).edge = Some(ResizeEdge::Top);
        wm.pointer_move(Point::new(9, 5), now);
        wm.pointer_move(Point::new(12, 5), now);
        assert_eq!(
            wm.window(1).map(|w| w.resizes.clone()),
            Some(vec![ResizeEdge::Right, ResizeEdge::Right])
        );
        wm.pointer_up(Point::new(12, 5), PointerButton::Left, now);
        assert_eq!(wm.drag_kind(), DragKind::None);
    }

    #[test]
    fn move_snaps_on_release_only() {
        let mut wm = manager_with(1);
        hover(&mut wm, 0).on_titlebar = true;
        let now = Instant::now();
        wm.pointer_down(Point::new(5, 5), PointerButton::Left, now);
        assert_eq!(wm.drag_kind(), DragKind::Moving);
        wm.pointer_move(Point::new(-5, -5), now);
        assert_eq!(wm.window(0).map(|w| (w.moves, w.snapped)), Some((1, 0)));
        wm.pointer_up(Point::new(-5, -5), PointerButton::Left, now);
        assert_eq!(wm.window(0).map(|w| w.snapped), Some(1));
    }

    #[test]
    fn right_press_on_titlebar_is_context_menu() {
        let mut wm = manager_with(1);
        hover(&mut wm, 0).on_titlebar = true;
        let now = Instant::now();
        wm.pointer_down(Point::new(5, 5), PointerButton::Right, now);
        assert_eq!(wm.drag_kind(), DragKind::ContextMenuPending);
        assert!(wm.pointer_up(Point::new(5, 5), PointerButton::Right, now));
        assert_eq!(wm.drag_kind(), DragKind::None);
    }

    #[test]
    fn close_click_unregisters_and_queues() {
        let mut wm = manager_with(2);
        let w = hover(&mut wm, 0);
        w.on_titlebar = true;
        w.button = Some(TitlebarButton::Close);
        let now = Instant::now();
        wm.pointer_down(Point::new(5, 5), PointerButton::Left, now);
        wm.pointer_up(Point::new(5, 5), PointerButton::Left, now);
        assert_eq!(ids(&wm), vec![1]);
        let closed = wm.take_closed_windows();
        assert_eq!(closed.iter().map(|w| w.id).collect::<Vec<_>>(), vec![0]);
        assert_single_focus_on_top(&wm);
    }

    #[test]
    fn cursor_follows_hover_and_drains_once() {
        let mut wm = manager_with(1);
        hover(&mut wm, 0).edge = Some(ResizeEdge::BottomLeft);
        let now = Instant::now();
        wm.pointer_move(Point::new(1, 1), now);
        assert_eq!(wm.take_cursor_change(), Some(CursorStyle::SwResize));
        assert_eq!(wm.take_cursor_change(), None);
        hover(&mut wm, 0).on_window = false;
        wm.pointer_move(Point::new(900, 900), now);
        assert_eq!(wm.cursor(), CursorStyle::Default);
    }

    #[test]
    fn unregister_cancels_pending_tooltip() {
        let mut wm = manager_with(2);
        hover(&mut wm, 1).button = Some(TitlebarButton::Close);
        let t0 = Instant::now();
        wm.pointer_move(Point::new(1, 1), t0);
        assert!(wm.next_deadline().is_some());
        wm.unregister_window(1);
        wm.tick(t0 + Duration::from_secs(2));
        assert_eq!(wm.tooltip_window(), None);
        assert!(wm.windows().all(|w| !w.tooltip));
    }

    #[test]
    fn viewport_resize_recovers_maximized_top() {
        let mut wm = manager_with(2);
        wm.viewport_resized(Viewport::new(1000, 700));
        assert_eq!(wm.window(1).map(|w| w.covers), Some(0));
        wm.window_mut(0).expect("bottom").maximize(Viewport::new(10, 10));
        wm.window_mut(1).expect("top").maximize(Viewport::new(10, 10));
        wm.viewport_resized(Viewport::new(1200, 900));
        assert_eq!(wm.viewport(), Viewport::new(1200, 900));
        assert_eq!(wm.window(1).map(|w| w.covers), Some(2));
        assert_eq!(wm.window(0).map(|w| w.covers), Some(1));
    }

    #[test]
    fn titlebar_double_press_toggles_maximize() {
        let mut wm = manager_with(1);
        hover(&mut wm, 0).on_titlebar = true;
        let t0 = Instant::now();
        wm.pointer_down(Point::new(5, 5), PointerButton::Left, t0);
        wm.pointer_up(Point::new(5, 5), PointerButton::Left, t0);
        let t1 = t0 + Duration::from_millis(200);
        wm.pointer_down(Point::new(5, 5), PointerButton::Left, t1);
        assert_eq!(wm.drag_kind(), DragKind::None);
        assert_eq!(
            wm.window(0).map(|w| w.clicks.clone()),
            Some(vec![TitlebarButton::Maximize])
        );
        wm.pointer_up(Point::new(5, 5), PointerButton::Left, t1);

        // too slow: a fresh move gesture instead
        let t2 = t1 + Duration::from_secs(1);
        wm.pointer_down(Point::new(5, 5), PointerButton::Left, t2);
        wm.pointer_up(Point::new(5, 5), PointerButton::Left, t2);
        let t3 = t2 + Duration::from_secs(1);
        wm.pointer_down(Point::new(5, 5), PointerButton::Left, t3);
        assert_eq!(wm.drag_kind(), DragKind::Moving);
        assert_eq!(wm.window(0).map(|w| w.clicks.len()), Some(1));
    }
}
