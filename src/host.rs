//! TableHost - the seam between the reorder core and the rendering host
//!
//! The core never renders; it queries geometry from the host and delegates
//! every visual effect (column relocation, widths, the drag proxy and insert
//! marker, cursor affordance) back to it. Notifications for synchronized
//! collaborators such as a fixed-header overlay are delivered through the
//! same trait, synchronously, immediately after the structural change.

use crate::data::relocation::RelocationMapping;
use crate::ui::pointer::CursorStyle;

/// Where the host should visually reinsert a relocated column, expressed in
/// visible-index space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualInsert {
    /// Insert before the column currently at this visible index
    Before(usize),
    /// No visible column follows the insertion point; append at the end
    Append,
}

pub trait TableHost {
    // -- geometry, in pixels --

    /// Left edge of the table
    fn table_left(&self) -> f64;

    /// Current total rendered width of the table
    fn table_width(&self) -> f64;

    /// Top-left corner of the header cell at a visible index
    fn header_origin(&self, visible_index: usize) -> (f64, f64);

    /// Rendered width of the column at a visible index
    fn rendered_width(&self, visible_index: usize) -> f64;

    // -- layout mode --

    /// Horizontal scrolling active: resizes adjust total table width instead
    /// of compensating through the neighbor
    fn scroll_x(&self) -> bool;

    /// Vertical scrolling active: relocations request sizing recalculation
    fn scroll_y(&self) -> bool;

    fn auto_width(&self) -> bool {
        true
    }

    fn set_auto_width(&mut self, _enabled: bool) {}

    // -- visual mutation --

    /// Move the rendered column from one visible slot to an insertion point.
    /// Header, footer and body surfaces all move together.
    fn relocate_visual(&mut self, _visible_from: usize, _insert: VisualInsert) {}

    /// Set a column's rendered width; in split header/body rendering both
    /// surfaces are expected to follow
    fn set_column_width(&mut self, _visible_index: usize, _width: f64) {}

    /// Grow or shrink the overall table width (fixed-total-width mode only)
    fn adjust_table_width(&mut self, _delta: f64) {}

    /// Recalculate column sizing after a structural change in a scrollable
    /// layout
    fn request_column_sizing(&mut self) {}

    /// Column indices changed; per-column sort triggers must be rebound
    fn rebind_sort_triggers(&mut self) {}

    // -- drag affordances --

    fn show_drag_proxy(&mut self, _visible_index: usize, _x: f64, _y: f64) {}

    fn move_drag_proxy(&mut self, _x: f64, _y: f64) {}

    fn remove_drag_proxy(&mut self) {}

    /// Position the insertion marker at the currently chosen drop point
    fn move_insert_marker(&mut self, _x: f64) {}

    fn remove_insert_marker(&mut self) {}

    fn set_cursor(&mut self, _cursor: CursorStyle) {}

    // -- notifications --

    /// A relocation was committed; `mapping.inverse()` translates new
    /// positions back to old ones for synchronized overlays
    fn column_reordered(&mut self, _from: usize, _to: usize, _mapping: &RelocationMapping) {}

    /// A resize was committed; the index is the resized column's visible
    /// index
    fn column_resized(&mut self, _visible_index: usize, _width: f64) {}
}
