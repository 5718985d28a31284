//! Permutation engine - single-element column relocation
//!
//! `relocate` moves one column and rewrites every index-keyed structure that
//! depends on column position, in a fixed order: sort criteria first, then
//! per-column tie-break and accessor indices, then the column sequence and
//! its parallel arrays, then per-row caches and header/footer layout rows.
//! The visual move is delegated to the host in visible-index space, and a
//! `column-reordered` notification goes out synchronously at the end.

use anyhow::Result;
use tracing::debug;

use crate::data::index_space;
use crate::data::relocation::{relocate_slice, RelocationMapping};
use crate::data::table_model::TableModel;
use crate::host::{TableHost, VisualInsert};

/// Relocate the column at model index `from` to model index `to`.
///
/// `from == to` is a pointless reorder: no mutation, no notification.
/// Out-of-range indices are reported errors with zero mutation.
pub fn relocate(
    model: &mut TableModel,
    host: &mut dyn TableHost,
    from: usize,
    to: usize,
) -> Result<()> {
    let len = model.columns.len();

    if from == to {
        return Ok(());
    }
    if from >= len {
        return Err(anyhow::anyhow!("'from' index {} is out of bounds", from));
    }
    if to >= len {
        return Err(anyhow::anyhow!("'to' index {} is out of bounds", to));
    }

    let mapping = RelocationMapping::new(from, to, len);

    // Sort criteria reference columns by position
    for key in model
        .sort_keys
        .iter_mut()
        .chain(model.fixed_sort_keys.iter_mut())
    {
        key.column = mapping.old_to_new(key.column);
    }

    // Tie-break sort sources
    for col in &mut model.columns {
        for idx in &mut col.data_sort_indices {
            *idx = mapping.old_to_new(*idx);
        }
    }

    // Accessor indices; the accessor reads through the stored index, so
    // rewriting it is the rebuild
    for col in &mut model.columns {
        if let Some(idx) = col.data_accessor_index.as_mut() {
            *idx = mapping.old_to_new(*idx);
        }
    }

    // Visual insertion point, computed against the pre-move sequence: the
    // first visible column at or after `to` in the direction of motion, or
    // append when none follows. Hidden source columns move only in the model.
    let visual = if model.columns[from].visible {
        let visible_from = index_space::model_to_visible(&model.columns, from)?;
        let mut insert = VisualInsert::Append;
        let mut i = if to < from { to } else { to + 1 };
        while i < len {
            if model.columns[i].visible {
                insert = VisualInsert::Before(index_space::model_to_visible(&model.columns, i)?);
                break;
            }
            i += 1;
        }
        Some((visible_from, insert))
    } else {
        None
    };

    // The column sequence itself and its parallel filter array
    relocate_slice(&mut model.columns, from, to);
    relocate_slice(&mut model.filters, from, to);

    // Per-row cached data arrays and hidden-field caches
    for row in &mut model.rows {
        relocate_slice(&mut row.cells, from, to);
        relocate_slice(&mut row.hidden, from, to);
    }

    // Header/footer layout rows move regardless of visibility
    for header_row in &mut model.header_rows {
        relocate_slice(header_row, from, to);
    }
    for footer_row in &mut model.footer_rows {
        relocate_slice(footer_row, from, to);
    }

    if let Some((visible_from, insert)) = visual {
        host.relocate_visual(visible_from, insert);
    }

    // Every column's index changed; sort triggers must be rebound
    host.rebind_sort_triggers();

    host.column_reordered(from, to, &mapping);

    if host.scroll_x() || host.scroll_y() {
        host.request_column_sizing();
    }

    debug!(target: "reorder", from, to, "column relocated");
    Ok(())
}
