//! Interactive column reordering and resizing for table widgets.
//!
//! The core is host-agnostic: it owns the authoritative column sequence and
//! every index-keyed structure that depends on column position, turns raw
//! pointer events into single-element relocations or width changes, and
//! delegates all rendering to a [`host::TableHost`]. Layouts persist across
//! sessions keyed by each column's original identity.

pub mod config;
pub mod data;
pub mod host;
pub mod persist;
pub mod registry;
pub mod ui;

pub use config::ReorderConfig;
pub use data::column::{Column, ColumnFilter, LayoutCell, SortKey, TableRow};
pub use data::relocation::RelocationMapping;
pub use data::table_model::TableModel;
pub use host::{TableHost, VisualInsert};
pub use persist::{JsonStateAdapter, LegacyStateAdapter, SavedLayout, StateAdapter};
pub use registry::InstanceRegistry;
pub use ui::{ColumnManager, CursorStyle, PointerEvent};
