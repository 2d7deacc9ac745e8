//! Pointer drag session: which gesture is in progress and on which window.

use super::TitlebarButton;
use crate::layout::ResizeEdge;

/// Kind of gesture, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    None,
    Moving,
    Resizing,
    ButtonPress,
    ContextMenuPending,
}

/// Active gesture. Indices are registry positions and follow the window when
/// the stacking order changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragSession {
    #[default]
    Idle,
    Moving {
        index: usize,
    },
    /// `edge` is fixed when the gesture starts.
    Resizing {
        index: usize,
        edge: ResizeEdge,
    },
    /// `held` tracks whether the button is currently drawn pressed.
    ButtonPress {
        index: usize,
        button: TitlebarButton,
        held: bool,
    },
    ContextMenuPending {
        index: usize,
    },
}

impl DragSession {
    pub fn kind(&self) -> DragKind {
        match self {
            DragSession::Idle => DragKind::None,
            DragSession::Moving { .. } => DragKind::Moving,
            DragSession::Resizing { .. } => DragKind::Resizing,
            DragSession::ButtonPress { .. } => DragKind::ButtonPress,
            DragSession::ContextMenuPending { .. } => DragKind::ContextMenuPending,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, DragSession::Idle)
    }

    pub fn index(&self) -> Option<usize> {
        match *self {
            DragSession::Idle => None,
            DragSession::Moving { index }
            | DragSession::Resizing { index, .. }
            | DragSession::ButtonPress { index, .. }
            | DragSession::ContextMenuPending { index } => Some(index),
        }
    }

    fn with_index(self, index: usize) -> Self {
        match self {
            DragSession::Idle => DragSession::Idle,
            DragSession::Moving { .. } => DragSession::Moving { index },
            DragSession::Resizing { edge, .. } => DragSession::Resizing { index, edge },
            DragSession::ButtonPress { button, held, .. } => DragSession::ButtonPress {
                index,
                button,
                held,
            },
            DragSession::ContextMenuPending { .. } => DragSession::ContextMenuPending { index },
        }
    }

    /// Follow the window at `raised` as it moves to `top`; windows above it
    /// slide down one slot.
    pub fn after_raise(self, raised: usize, top: usize) -> Self {
        match self.index() {
            Some(index) if index == raised => self.with_index(top),
            Some(index) if index > raised => self.with_index(index - 1),
            _ => self,
        }
    }

    /// Drop the session if its window was removed, otherwise follow the
    /// shifted index.
    pub fn after_removal(self, removed: usize) -> Self {
        match self.index() {
            Some(index) if index == removed => DragSession::Idle,
            Some(index) if index > removed => self.with_index(index - 1),
            _ => self,
        }
    }
}
