//! Data layer: the column model and the permutation engine
//!
//! Everything that depends on column position lives here, separated from the
//! pointer-driven interaction layer in `ui`.

pub mod column;
pub mod index_space;
pub mod relocation;
pub mod reorder;
pub mod table_model;
