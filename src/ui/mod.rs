//! Interaction layer: pointer events and the drag/resize state machines

pub mod column_manager;
pub mod drag_controller;
pub mod pointer;
pub mod resize_controller;

pub use column_manager::ColumnManager;
pub use drag_controller::{DragController, DragOutcome, InsertionTarget};
pub use pointer::{pointer_event_from_mouse, CursorStyle, PointerEvent};
pub use resize_controller::{ResizeController, ResizeOutcome};
