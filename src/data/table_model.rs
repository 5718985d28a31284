//! TableModel - every index-keyed structure that depends on column position
//!
//! The model owns the authoritative column sequence plus the parallel
//! structures that must stay consistent with it: sort criteria, per-column
//! filters, the per-row cached data arrays (and hidden-field caches), and
//! the header/footer layout rows. The sequence is built once at attach time;
//! original indices are assigned then and reordering only ever permutes.

use anyhow::Result;

use crate::data::column::{Column, ColumnFilter, LayoutCell, SortKey, TableRow};
use crate::data::index_space;

#[derive(Debug, Clone, Default)]
pub struct TableModel {
    pub columns: Vec<Column>,
    /// Primary sort criteria, column references are model indices
    pub sort_keys: Vec<SortKey>,
    /// Fixed (always-applied) sort criteria
    pub fixed_sort_keys: Vec<SortKey>,
    /// Per-column filter entries, parallel to `columns`
    pub filters: Vec<ColumnFilter>,
    pub rows: Vec<TableRow>,
    pub header_rows: Vec<Vec<LayoutCell>>,
    pub footer_rows: Vec<Vec<LayoutCell>>,
}

impl TableModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column during attach. The original index is its slot at this
    /// point and never changes afterwards.
    pub fn add_column(&mut self, mut column: Column) {
        column.original_index = self.columns.len();
        self.columns.push(column);
        self.filters.push(ColumnFilter::default());
    }

    pub fn add_row(&mut self, row: TableRow) -> Result<()> {
        if row.cells.len() != self.columns.len() {
            return Err(anyhow::anyhow!(
                "Row has {} cells but table has {} columns",
                row.cells.len(),
                self.columns.len()
            ));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn add_header_row(&mut self, cells: Vec<LayoutCell>) -> Result<()> {
        if cells.len() != self.columns.len() {
            return Err(anyhow::anyhow!(
                "Header row has {} cells but table has {} columns",
                cells.len(),
                self.columns.len()
            ));
        }
        self.header_rows.push(cells);
        Ok(())
    }

    pub fn add_footer_row(&mut self, cells: Vec<LayoutCell>) -> Result<()> {
        if cells.len() != self.columns.len() {
            return Err(anyhow::anyhow!(
                "Footer row has {} cells but table has {} columns",
                cells.len(),
                self.columns.len()
            ));
        }
        self.footer_rows.push(cells);
        Ok(())
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn visible_count(&self) -> usize {
        index_space::visible_count(&self.columns)
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    // Index space translation over the current sequence

    pub fn model_to_visible(&self, model_index: usize) -> Result<usize> {
        index_space::model_to_visible(&self.columns, model_index)
    }

    pub fn visible_to_model(&self, visible_index: usize) -> Option<usize> {
        index_space::visible_to_model(&self.columns, visible_index)
    }

    pub fn original_of(&self, model_index: usize) -> Option<usize> {
        index_space::original_of(&self.columns, model_index)
    }

    pub fn model_of(&self, original_index: usize) -> Option<usize> {
        index_space::model_of(&self.columns, original_index)
    }

    /// Store a pixel width on a column as its width string
    pub fn set_width_px(&mut self, model_index: usize, width: f64) {
        if let Some(col) = self.columns.get_mut(model_index) {
            col.width = Some(format!("{}px", width.round() as i64));
        }
    }

    /// Parse a column's width string back to pixels, if set
    pub fn width_px(&self, model_index: usize) -> Option<f64> {
        self.columns
            .get(model_index)?
            .width
            .as_deref()?
            .trim_end_matches("px")
            .parse()
            .ok()
    }
}
