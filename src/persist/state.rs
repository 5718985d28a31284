//! Layout snapshots keyed by original column identity
//!
//! Because relocations change every model index, persisted state is written
//! against the ORIGINAL indices assigned at attach time: the order list maps
//! each current slot back to the original index of the column sitting there,
//! widths are stored under the original identity, and sort/filter column
//! references are rewritten the same way. Restoring rewrites in the other
//! direction, so a reload against a possibly-reconfigured host stays
//! consistent.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::column::{ColumnFilter, SortKey};
use crate::data::reorder;
use crate::data::table_model::TableModel;
use crate::host::TableHost;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedSortKey {
    /// Original index of the sorted column
    pub column: usize,
    pub ascending: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedFilter {
    /// Original index of the filtered column
    pub column: usize,
    pub query: String,
}

/// The persisted layout, everything keyed by original identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SavedLayout {
    /// Original index of the column at each current slot
    pub order: Vec<usize>,
    /// Width string per original index
    pub widths: Vec<Option<String>>,
    pub sort: Vec<SavedSortKey>,
    pub filters: Vec<SavedFilter>,
}

/// Capture the current layout, rewriting every column reference from
/// current to original indices.
pub fn snapshot(model: &TableModel) -> SavedLayout {
    let len = model.column_count();
    let mut order = Vec::with_capacity(len);
    let mut widths = vec![None; len];

    for col in &model.columns {
        order.push(col.original_index);
        widths[col.original_index] = col.width.clone();
    }

    let sort = model
        .sort_keys
        .iter()
        .map(|key| SavedSortKey {
            column: model.columns[key.column].original_index,
            ascending: key.ascending,
        })
        .collect();

    let filters = model
        .filters
        .iter()
        .enumerate()
        .filter(|(_, f)| !f.is_empty())
        .map(|(slot, f)| SavedFilter {
            column: model.columns[slot].original_index,
            query: f.query.clone(),
        })
        .collect();

    SavedLayout {
        order,
        widths,
        sort,
        filters,
    }
}

/// Apply a saved order (slot -> original index) by successive single-element
/// relocations through the permutation engine. The list must be a
/// permutation of `[0, len)` matching the current column count; otherwise it
/// is rejected with zero mutation.
pub fn apply_order(model: &mut TableModel, host: &mut dyn TableHost, order: &[usize]) -> Result<()> {
    let len = model.column_count();
    if order.len() != len {
        return Err(anyhow::anyhow!(
            "Order list has {} entries but table has {} columns. Skipping.",
            order.len(),
            len
        ));
    }

    let mut check: Vec<usize> = order.to_vec();
    check.sort_unstable();
    if check.iter().enumerate().any(|(i, &v)| i != v) {
        return Err(anyhow::anyhow!(
            "Order list is not a permutation of 0..{}. Skipping.",
            len
        ));
    }

    for slot in 0..len {
        let current = model
            .model_of(order[slot])
            .ok_or_else(|| anyhow::anyhow!("Unknown original index {}", order[slot]))?;
        if current != slot {
            reorder::relocate(model, host, current, slot)?;
        }
    }

    debug!(target: "state", ?order, "column order applied");
    Ok(())
}

/// Rewrite restored sort keys from original to current model indices
pub fn restore_sort_keys(model: &TableModel, saved: &[SavedSortKey]) -> Vec<SortKey> {
    saved
        .iter()
        .filter_map(|key| {
            model.model_of(key.column).map(|column| SortKey {
                column,
                ascending: key.ascending,
            })
        })
        .collect()
}

/// Rewrite restored per-column filters from original to current slots
pub fn restore_filters(model: &TableModel, saved: &[SavedFilter]) -> Vec<ColumnFilter> {
    let mut filters = vec![ColumnFilter::default(); model.column_count()];
    for entry in saved {
        if let Some(slot) = model.model_of(entry.column) {
            filters[slot] = ColumnFilter {
                query: entry.query.clone(),
            };
        }
    }
    filters
}
