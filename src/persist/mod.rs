//! Layout persistence keyed by original column identity

pub mod adapter;
pub mod state;

pub use adapter::{JsonStateAdapter, LegacyStateAdapter, StateAdapter};
pub use state::{SavedFilter, SavedLayout, SavedSortKey};
