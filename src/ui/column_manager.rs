//! ColumnManager - the widget tying the reorder/resize pieces together
//!
//! Owns the table model and both interaction state machines, routes pointer
//! events between them (the resize zone wins over drag arming, fixed columns
//! are excluded, and at most one session is live at a time), and drives
//! layout persistence through the configured adapter.

use anyhow::Result;
use tracing::{info, warn};

use crate::config::ReorderConfig;
use crate::data::table_model::TableModel;
use crate::host::TableHost;
use crate::persist::state::{self, SavedLayout};
use crate::persist::StateAdapter;
use crate::ui::drag_controller::{DragController, DragOutcome};
use crate::ui::pointer::{CursorStyle, PointerEvent};
use crate::ui::resize_controller::{column_at, resize_zone_at, ResizeController};

pub type ReorderCallback = Box<dyn FnMut(&DragOutcome)>;

pub struct ColumnManager {
    table_id: String,
    model: TableModel,
    config: ReorderConfig,
    drag: DragController,
    resize: ResizeController,
    adapter: Option<Box<dyn StateAdapter>>,
    on_reordered: Option<ReorderCallback>,
}

impl ColumnManager {
    /// Attach the feature to a host table. The model carries the column
    /// sequence built from the host's accessors; original indices were
    /// assigned as the columns were added and stay fixed from here on.
    pub fn attach(table_id: impl Into<String>, model: TableModel, config: ReorderConfig) -> Self {
        let table_id = table_id.into();
        info!(target: "reorder",
            table_id, columns = model.column_count(), "column manager attached");
        Self {
            table_id,
            model,
            config,
            drag: DragController::new(),
            resize: ResizeController::new(),
            adapter: None,
            on_reordered: None,
        }
    }

    pub fn with_adapter(mut self, adapter: Box<dyn StateAdapter>) -> Self {
        self.adapter = Some(adapter);
        self
    }

    pub fn with_reorder_callback(mut self, callback: ReorderCallback) -> Self {
        self.on_reordered = Some(callback);
        self
    }

    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    pub fn model(&self) -> &TableModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut TableModel {
        &mut self.model
    }

    pub fn config(&self) -> &ReorderConfig {
        &self.config
    }

    pub fn has_active_session(&self) -> bool {
        self.drag.is_active() || self.resize.is_active()
    }

    /// Apply persisted layout (or, failing that, the configured initial
    /// order and widths). A restored order overrides `initial_order`; an
    /// order list whose length or contents disagree with the current column
    /// count is reported and skipped entirely, while an independently
    /// supplied width list is still applied.
    pub fn restore(&mut self, host: &mut dyn TableHost) -> Result<()> {
        let loaded: Option<SavedLayout> = match self.adapter.as_mut() {
            Some(adapter) => adapter.load().unwrap_or_else(|e| {
                warn!(target: "state", "failed to load persisted layout: {:#}", e);
                None
            }),
            None => None,
        };

        let mut order = self.config.initial_order.clone();
        let mut widths: Option<Vec<Option<String>>> = self
            .config
            .initial_widths
            .as_ref()
            .map(|w| w.iter().cloned().map(Some).collect());
        let mut sort = None;
        let mut filters = None;

        if let Some(layout) = loaded {
            if !layout.order.is_empty() {
                order = Some(layout.order);
            }
            if !layout.widths.is_empty() {
                widths = Some(layout.widths);
            }
            if !layout.sort.is_empty() {
                sort = Some(layout.sort);
            }
            if !layout.filters.is_empty() {
                filters = Some(layout.filters);
            }
        }

        let mut order_applied = false;
        if let Some(order) = order {
            match state::apply_order(&mut self.model, host, &order) {
                Ok(()) => order_applied = true,
                Err(e) => warn!(target: "state", "{:#}", e),
            }
        }

        if let Some(widths) = widths {
            for (original, width) in widths.iter().enumerate() {
                let (Some(width), Some(slot)) = (width, self.model.model_of(original)) else {
                    continue;
                };
                self.model.columns[slot].width = Some(width.clone());
            }
            self.push_widths(host);
        }

        if let Some(sort) = sort {
            self.model.sort_keys = state::restore_sort_keys(&self.model, &sort);
        }
        if let Some(filters) = filters {
            self.model.filters = state::restore_filters(&self.model, &filters);
        }

        if order_applied {
            if host.scroll_x() || host.scroll_y() {
                host.request_column_sizing();
            }
            self.persist();
        }
        Ok(())
    }

    /// Reorder every column back to its original slot
    pub fn reset_order(&mut self, host: &mut dyn TableHost) -> Result<()> {
        let order: Vec<usize> = (0..self.model.column_count()).collect();
        state::apply_order(&mut self.model, host, &order)?;
        self.persist();
        Ok(())
    }

    /// Feed one pointer event through the interaction state machines.
    /// Handlers run to completion before the next event; a pointer-down
    /// while a session is live is ignored.
    pub fn handle_pointer(&mut self, event: PointerEvent, host: &mut dyn TableHost) -> Result<()> {
        match event {
            PointerEvent::Down { x, y } => self.pointer_down(host, x, y),
            PointerEvent::Move { x, y } => self.pointer_move(host, x, y),
            PointerEvent::Up { .. } => self.pointer_up(host),
        }
    }

    fn pointer_down(&mut self, host: &mut dyn TableHost, x: f64, y: f64) -> Result<()> {
        if self.has_active_session() {
            return Ok(());
        }

        if self.config.allow_resize {
            if let Some(visible) = resize_zone_at(&self.model, host, x) {
                if self.targetable(visible) {
                    return self.resize.begin(&mut self.model, host, visible, x);
                }
            }
        }

        if self.config.allow_reorder {
            if let Some(visible) = column_at(&self.model, host, x) {
                if self.targetable(visible) {
                    return self.drag.arm(
                        &self.model,
                        host,
                        self.config.fixed_column_count,
                        visible,
                        x,
                        y,
                    );
                }
            }
        }
        Ok(())
    }

    fn pointer_move(&mut self, host: &mut dyn TableHost, x: f64, y: f64) -> Result<()> {
        if self.resize.is_active() {
            self.resize.pointer_move(host, x);
            return Ok(());
        }
        if self.drag.is_active() {
            self.drag.pointer_move(host, x, y);
            return Ok(());
        }

        // Idle hover: resize affordance at a trailing edge, move affordance
        // over a header, default elsewhere
        let in_zone = self.config.allow_resize
            && resize_zone_at(&self.model, host, x)
                .map(|v| self.targetable(v))
                .unwrap_or(false);
        let cursor = if in_zone {
            CursorStyle::ColResize
        } else if column_at(&self.model, host, x).is_some() {
            CursorStyle::Move
        } else {
            CursorStyle::Default
        };
        host.set_cursor(cursor);
        Ok(())
    }

    fn pointer_up(&mut self, host: &mut dyn TableHost) -> Result<()> {
        if self.resize.pointer_up(&mut self.model, host)?.is_some() {
            self.persist();
            return Ok(());
        }

        if let Some(outcome) = self.drag.pointer_up(&mut self.model, host)? {
            if let Some(callback) = self.on_reordered.as_mut() {
                callback(&outcome);
            }
            self.persist();
        }
        Ok(())
    }

    /// Snapshot the layout and hand it to the adapter. Persistence failures
    /// are reported, not propagated; the in-memory state is already
    /// committed.
    pub fn persist(&mut self) {
        let Some(adapter) = self.adapter.as_mut() else {
            return;
        };
        let layout = state::snapshot(&self.model);
        if let Err(e) = adapter.save(&layout) {
            warn!(target: "state", "failed to persist layout: {:#}", e);
        }
    }

    /// Push the model's width strings to the host, visible column by visible
    /// column
    fn push_widths(&self, host: &mut dyn TableHost) {
        for visible in 0..self.model.visible_count() {
            let Some(model_index) = self.model.visible_to_model(visible) else {
                continue;
            };
            if let Some(px) = self.model.width_px(model_index) {
                host.set_column_width(visible, px);
            }
        }
    }

    /// Fixed columns are never a relocation source, drop target or resize
    /// target
    fn targetable(&self, visible: usize) -> bool {
        self.model
            .visible_to_model(visible)
            .map(|m| m >= self.config.fixed_column_count)
            .unwrap_or(false)
    }
}
