//! Pointer events - the input the interaction state machines consume
//!
//! The controllers are driven by abstract pixel-space events so tests can
//! inject synthetic sequences without a real pointing device. The crossterm
//! adapter maps terminal mouse events into the same space using a cell size,
//! the way the demo host does.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// One discrete pointer input. Handlers run to completion per event; there
/// is no coalescing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
}

impl PointerEvent {
    pub fn position(&self) -> (f64, f64) {
        match *self {
            PointerEvent::Down { x, y } | PointerEvent::Move { x, y } | PointerEvent::Up { x, y } => {
                (x, y)
            }
        }
    }
}

/// Pointer affordance the host should display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Default,
    /// Over a draggable header
    Move,
    /// Within the resize zone at a column's trailing edge
    ColResize,
}

/// Convert a crossterm mouse event into a pointer event, scaling terminal
/// cells to pixels. Returns None for events the core does not consume
/// (non-left buttons, scroll wheel).
pub fn pointer_event_from_mouse(
    event: &MouseEvent,
    cell_width: f64,
    cell_height: f64,
) -> Option<PointerEvent> {
    let x = event.column as f64 * cell_width;
    let y = event.row as f64 * cell_height;

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Down { x, y }),
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
            Some(PointerEvent::Move { x, y })
        }
        MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::Up { x, y }),
        _ => None,
    }
}
