//! Drag controller - pointer-driven column relocation
//!
//! Explicit state machine: Idle -> Armed -> Dragging -> Idle. A pointer-down
//! over a draggable header arms a session and caches the insertion-target
//! list; the drag only becomes visible (and a floating proxy appears) once
//! the pointer travels past a small threshold, so ordinary sort clicks never
//! flicker a drag element. Releasing the pointer is the only way a session
//! ends.

use anyhow::Result;
use tracing::{debug, info};

use crate::data::reorder;
use crate::data::table_model::TableModel;
use crate::host::TableHost;

/// Euclidean distance the pointer must travel from the down-point before a
/// drag becomes live
const DRAG_THRESHOLD_PX: f64 = 5.0;

/// One candidate drop point: a pixel position and the model index the source
/// column would be relocated to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsertionTarget {
    pub x: f64,
    pub to: usize,
}

/// Ephemeral drag state; at most one session is live per widget
#[derive(Debug, Clone)]
pub struct DragSession {
    pub source_model: usize,
    pub source_visible: usize,
    down_x: f64,
    down_y: f64,
    offset_x: f64,
    offset_y: f64,
    targets: Vec<InsertionTarget>,
    chosen: Option<usize>,
}

/// Reported after a committed drag, for the completion callback
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragOutcome {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Clone, Default)]
enum DragPhase {
    #[default]
    Idle,
    Armed(DragSession),
    Dragging(DragSession),
}

#[derive(Debug, Default)]
pub struct DragController {
    phase: DragPhase,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.phase, DragPhase::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging(_))
    }

    /// Arm a session from a pointer-down on the header at `visible_index`.
    /// The insertion-target list is computed here, against the current
    /// geometry: one entry at the table's leading edge (`to = 0`), then one
    /// per visible column at its trailing edge. The source column itself is
    /// skipped when counting so its neighboring slots read as "stay in
    /// place". Targets landing inside the fixed prefix are dropped.
    pub fn arm(
        &mut self,
        model: &TableModel,
        host: &dyn TableHost,
        fixed_columns: usize,
        visible_index: usize,
        x: f64,
        y: f64,
    ) -> Result<()> {
        let source_model = model.visible_to_model(visible_index).ok_or_else(|| {
            anyhow::anyhow!("No column at visible index {}", visible_index)
        })?;

        let (header_x, header_y) = host.header_origin(visible_index);

        let mut targets = vec![InsertionTarget {
            x: host.table_left(),
            to: 0,
        }];

        let mut to_point = 0;
        let mut visible = 0;
        for (model_index, col) in model.columns.iter().enumerate() {
            if model_index != source_model {
                to_point += 1;
            }
            if col.visible {
                let (left, _) = host.header_origin(visible);
                targets.push(InsertionTarget {
                    x: left + host.rendered_width(visible),
                    to: to_point,
                });
                visible += 1;
            }
        }

        targets.retain(|t| t.to >= fixed_columns);

        debug!(target: "drag",
            source_model, visible_index, targets = targets.len(), "drag armed");

        self.phase = DragPhase::Armed(DragSession {
            source_model,
            source_visible: visible_index,
            down_x: x,
            down_y: y,
            offset_x: x - header_x,
            offset_y: y - header_y,
            targets,
            chosen: None,
        });
        Ok(())
    }

    pub fn pointer_move(&mut self, host: &mut dyn TableHost, x: f64, y: f64) {
        match std::mem::take(&mut self.phase) {
            DragPhase::Idle => {}
            DragPhase::Armed(session) => {
                let dist = ((x - session.down_x).powi(2) + (y - session.down_y).powi(2)).sqrt();
                if dist < DRAG_THRESHOLD_PX {
                    // Below threshold: no visual or state change
                    self.phase = DragPhase::Armed(session);
                    return;
                }
                info!(target: "drag", source = session.source_model, "drag started");
                host.show_drag_proxy(
                    session.source_visible,
                    x - session.offset_x,
                    y - session.offset_y,
                );
                let mut session = session;
                Self::track(&mut session, host, x, y);
                self.phase = DragPhase::Dragging(session);
            }
            DragPhase::Dragging(mut session) => {
                Self::track(&mut session, host, x, y);
                self.phase = DragPhase::Dragging(session);
            }
        }
    }

    /// End the session. An armed session that never crossed the threshold
    /// dissolves with no mutation; a live drag commits the relocation at the
    /// chosen target.
    pub fn pointer_up(
        &mut self,
        model: &mut TableModel,
        host: &mut dyn TableHost,
    ) -> Result<Option<DragOutcome>> {
        match std::mem::take(&mut self.phase) {
            DragPhase::Idle => Ok(None),
            DragPhase::Armed(_) => {
                debug!(target: "drag", "released below threshold, no reorder");
                Ok(None)
            }
            DragPhase::Dragging(session) => {
                host.remove_drag_proxy();
                host.remove_insert_marker();

                let Some(to) = session.chosen else {
                    return Ok(None);
                };

                reorder::relocate(model, host, session.source_model, to)?;

                if host.scroll_x() || host.scroll_y() {
                    host.request_column_sizing();
                }

                info!(target: "drag",
                    from = session.source_model, to, "drag committed");
                Ok(Some(DragOutcome {
                    from: session.source_model,
                    to,
                }))
            }
        }
    }

    /// Reposition the proxy and pick the pending insertion target: the first
    /// target whose midpoint to the next one lies past the pointer, or the
    /// last target when the pointer is beyond them all.
    fn track(session: &mut DragSession, host: &mut dyn TableHost, x: f64, y: f64) {
        host.move_drag_proxy(x - session.offset_x, y - session.offset_y);

        let targets = &session.targets;
        if targets.is_empty() {
            session.chosen = None;
            return;
        }

        let mut index = targets.len() - 1;
        for i in 1..targets.len() {
            let midpoint = targets[i - 1].x + (targets[i].x - targets[i - 1].x) / 2.0;
            if x < midpoint {
                index = i - 1;
                break;
            }
        }

        host.move_insert_marker(targets[index].x);
        session.chosen = Some(targets[index].to);
    }
}
