//! Host input events understood by the window manager.
//!
//! The manager only cares about pointer presses, releases, motion and
//! viewport resizes. Terminal hosts feed `crossterm` events through
//! [`HostEvent::from_crossterm`]; other hosts build these values directly.

use crossterm::event::{Event, MouseButton, MouseEventKind};

use crate::layout::{Point, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

impl From<MouseButton> for PointerButton {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => PointerButton::Left,
            MouseButton::Right => PointerButton::Right,
            MouseButton::Middle => PointerButton::Middle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down(PointerButton),
    Up(PointerButton),
    Move,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Pointer(PointerEvent),
    Resize(Viewport),
}

impl HostEvent {
    /// Translate a terminal event. Keyboard, focus, paste and scroll events
    /// have no meaning to the manager and yield `None`.
    pub fn from_crossterm(event: &Event) -> Option<Self> {
        match event {
            Event::Mouse(mouse) => {
                let kind = match mouse.kind {
                    MouseEventKind::Down(button) => PointerKind::Down(button.into()),
                    MouseEventKind::Up(button) => PointerKind::Up(button.into()),
                    MouseEventKind::Drag(_) | MouseEventKind::Moved => PointerKind::Move,
                    _ => return None,
                };
                Some(HostEvent::Pointer(PointerEvent {
                    kind,
                    position: Point::new(mouse.column as i32, mouse.row as i32),
                }))
            }
            Event::Resize(width, height) => Some(HostEvent::Resize(Viewport::new(
                *width as i32,
                *height as i32,
            ))),
            _ => None,
        }
    }
}
