use serde::{Deserialize, Serialize};

/// Column metadata as tracked by the reorder core.
///
/// The column's position in the sequence is its model index; `original_index`
/// is assigned once at attach time and never changes for the lifetime of the
/// widget, which is what lets layouts survive persistence across sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    /// Identity assigned at construction, immutable afterwards
    pub original_index: usize,
    pub visible: bool,
    /// Rendered width, e.g. "120px"; None until a resize or restore sets it
    pub width: Option<String>,
    pub sortable: bool,
    /// Position of the data field this column reads/sorts on, if numeric
    pub data_accessor_index: Option<usize>,
    /// Other columns used as tie-break sort sources
    pub data_sort_indices: Vec<usize>,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            original_index: 0,
            visible: true,
            width: None,
            sortable: true,
            data_accessor_index: None,
            data_sort_indices: Vec::new(),
        }
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn with_accessor(mut self, index: usize) -> Self {
        self.data_accessor_index = Some(index);
        self
    }

    pub fn with_sort_indices(mut self, indices: Vec<usize>) -> Self {
        self.data_sort_indices = indices;
        self
    }

    /// Read this column's cell from a row's cached data array through the
    /// accessor index. Columns without a numeric accessor read their own slot.
    pub fn cell_value<'a>(&self, row: &'a TableRow, model_index: usize) -> Option<&'a str> {
        let idx = self.data_accessor_index.unwrap_or(model_index);
        row.cells.get(idx).map(|s| s.as_str())
    }
}

/// One cached row: the data array plus the hidden-field cache, both kept in
/// column order and relocated together with the columns.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub hidden: Vec<Option<String>>,
}

impl TableRow {
    pub fn new(cells: Vec<String>) -> Self {
        let len = cells.len();
        Self {
            cells,
            hidden: vec![None; len],
        }
    }
}

/// A cell in a header or footer layout row
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutCell {
    pub label: String,
}

impl LayoutCell {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// One sort criterion referencing a column by model index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortKey {
    pub column: usize,
    pub ascending: bool,
}

impl SortKey {
    pub fn asc(column: usize) -> Self {
        Self {
            column,
            ascending: true,
        }
    }

    pub fn desc(column: usize) -> Self {
        Self {
            column,
            ascending: false,
        }
    }
}

/// Per-column filter entry; the array is parallel to the column sequence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnFilter {
    pub query: String,
}

impl ColumnFilter {
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }
}
