//! Draggable, resizable, stacked floating windows.
//!
//! A single [`WindowManager`](window::WindowManager) owns every registered
//! window, routes pointer events, keeps the stacking order, arbitrates focus
//! and drives the hover-tooltip timers. Windows participate through the
//! [`WindowAdapter`](window::WindowAdapter) trait; each keeps its own
//! [`Rect`](layout::Rect) geometry engine.

pub mod constants;
pub mod cursor;
pub mod drivers;
pub mod error;
pub mod event_loop;
pub mod input;
pub mod layout;
pub mod log_buffer;
pub mod timer;
pub mod tracing_sub;
pub mod window;

pub use cursor::CursorStyle;
pub use error::WmError;
pub use layout::{Bounds, Point, Rect, ResizeEdge, Viewport};
pub use window::{FloatingWindow, WindowAdapter, WindowManager, WmConfig};
