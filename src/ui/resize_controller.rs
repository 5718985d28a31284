//! Resize controller - interactive width adjustment of one column
//!
//! State machine: Idle -> Resizing -> Idle. A pointer-down inside the resize
//! zone (within 5 px of a column's trailing edge) opens a session; while it
//! lives, the column's sortability and the host's auto-width feature are
//! suspended so the user's widths survive the operation. Two compensation
//! modes exist: without horizontal scrolling, the immediate visible neighbor
//! absorbs the delta and the pair's total width is conserved; with
//! horizontal scrolling the overall table width takes the delta instead and
//! no neighbor is touched.

use anyhow::Result;
use tracing::{debug, info};

use crate::data::table_model::TableModel;
use crate::host::TableHost;

/// Pixel distance from a trailing edge that counts as the resize zone
const RESIZE_ZONE_PX: f64 = 5.0;
/// Width floor: no resize may bring a column below this
const MIN_COL_WIDTH_PX: f64 = 20.0;

/// Ephemeral resize state; mutually exclusive with a drag session
#[derive(Debug, Clone)]
pub struct ResizeSession {
    /// Model index of the resized column
    pub column: usize,
    /// Visible index at session start
    pub visible: usize,
    start_x: f64,
    start_width: f64,
    /// Immediate visible neighbor (model index), if any
    neighbor: Option<usize>,
    neighbor_start_width: f64,
    /// Horizontal-scroll layout: adjust total table width, leave the
    /// neighbor alone
    fixed_total_width: bool,
    /// Applied (clamped) delta sent to the host so far
    applied: f64,
    prior_sortable: bool,
    prior_auto_width: bool,
}

/// Reported after a committed resize
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeOutcome {
    pub column: usize,
    pub visible: usize,
    pub width: f64,
}

#[derive(Debug, Default)]
pub struct ResizeController {
    session: Option<ResizeSession>,
}

impl ResizeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Open a session from a pointer-down inside the resize zone of the
    /// column at `visible_index`. Captures start widths and suspends the
    /// column's sortability and the host's auto-width until commit.
    pub fn begin(
        &mut self,
        model: &mut TableModel,
        host: &mut dyn TableHost,
        visible_index: usize,
        x: f64,
    ) -> Result<()> {
        let column = model.visible_to_model(visible_index).ok_or_else(|| {
            anyhow::anyhow!("No column at visible index {}", visible_index)
        })?;

        let neighbor = model.visible_to_model(visible_index + 1);
        let neighbor_start_width = neighbor
            .map(|_| host.rendered_width(visible_index + 1))
            .unwrap_or(0.0);

        let prior_sortable = model.columns[column].sortable;
        model.columns[column].sortable = false;
        let prior_auto_width = host.auto_width();
        host.set_auto_width(false);

        info!(target: "resize", column, visible_index, "resize started");

        self.session = Some(ResizeSession {
            column,
            visible: visible_index,
            start_x: x,
            start_width: host.rendered_width(visible_index),
            neighbor,
            neighbor_start_width,
            fixed_total_width: host.scroll_x(),
            applied: 0.0,
            prior_sortable,
            prior_auto_width,
        });
        Ok(())
    }

    /// Track the pointer: the resized column follows the delta down to the
    /// 20 px floor. The clamped delta is what the compensation side sees, so
    /// pair-width conservation holds even at the floor.
    pub fn pointer_move(&mut self, host: &mut dyn TableHost, x: f64) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let delta = x - session.start_x;
        let new_width = (session.start_width + delta).max(MIN_COL_WIDTH_PX);
        let applied = new_width - session.start_width;

        host.set_column_width(session.visible, new_width);

        if session.fixed_total_width {
            // Excel-like: the table grows/shrinks, split header/body
            // surfaces follow through the host
            host.adjust_table_width(applied - session.applied);
        } else if session.neighbor.is_some() {
            host.set_column_width(session.visible + 1, session.neighbor_start_width - applied);
        }

        session.applied = applied;
    }

    /// Commit: restore sortability and auto-width, persist final pixel
    /// widths onto the model, emit `column-resized` with the visible index.
    pub fn pointer_up(
        &mut self,
        model: &mut TableModel,
        host: &mut dyn TableHost,
    ) -> Result<Option<ResizeOutcome>> {
        let Some(session) = self.session.take() else {
            return Ok(None);
        };

        model.columns[session.column].sortable = session.prior_sortable;
        host.set_auto_width(session.prior_auto_width);

        let final_width = host.rendered_width(session.visible);
        model.set_width_px(session.column, final_width);

        if !session.fixed_total_width {
            match session.neighbor {
                Some(neighbor) => {
                    let width = host.rendered_width(session.visible + 1);
                    model.set_width_px(neighbor, width);
                }
                None => {
                    // Right-most visible column: preceding visible columns
                    // did not change numerically, but their rendered widths
                    // must be captured for layout consistency
                    for model_index in (0..session.column).rev() {
                        if !model.columns[model_index].visible {
                            continue;
                        }
                        let visible = model.model_to_visible(model_index)?;
                        let width = host.rendered_width(visible);
                        model.set_width_px(model_index, width);
                    }
                }
            }
        }

        host.column_resized(session.visible, final_width);

        info!(target: "resize",
            column = session.column, width = final_width, "resize committed");
        Ok(Some(ResizeOutcome {
            column: session.column,
            visible: session.visible,
            width: final_width,
        }))
    }
}

/// Hit-test the resize zone: the visible column whose trailing edge lies
/// within 5 px of the pointer, if any.
pub fn resize_zone_at(model: &TableModel, host: &dyn TableHost, x: f64) -> Option<usize> {
    let visible_count = model.visible_count();
    for visible in 0..visible_count {
        let (left, _) = host.header_origin(visible);
        let edge = left + host.rendered_width(visible);
        if (x - edge).abs() <= RESIZE_ZONE_PX {
            debug!(target: "resize", visible, "pointer in resize zone");
            return Some(visible);
        }
    }
    None
}

/// Hit-test the header band: the visible column containing the pointer's x
pub fn column_at(model: &TableModel, host: &dyn TableHost, x: f64) -> Option<usize> {
    let visible_count = model.visible_count();
    for visible in 0..visible_count {
        let (left, _) = host.header_origin(visible);
        let right = left + host.rendered_width(visible);
        if x >= left && x < right {
            return Some(visible);
        }
    }
    None
}
