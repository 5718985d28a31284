//! Configuration for the reorder/resize core

pub mod config;

pub use config::ReorderConfig;
