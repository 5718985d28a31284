//! Persistence adapters - current and legacy state shapes
//!
//! Two on-disk shapes exist in the wild: the current one carries order,
//! widths, sort keys and filters; the legacy one only the flat `ColReorder`
//! order array and `ColSizes` width array. Both normalise to `SavedLayout`
//! behind one trait, so the reorder/resize core never branches on a shape.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::persist::state::SavedLayout;

pub trait StateAdapter {
    /// Load the persisted layout, if any exists
    fn load(&mut self) -> Result<Option<SavedLayout>>;

    /// Persist the layout
    fn save(&mut self, layout: &SavedLayout) -> Result<()>;
}

/// Current shape: the `SavedLayout` struct serialized as JSON
pub struct JsonStateAdapter {
    path: PathBuf,
}

impl JsonStateAdapter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StateAdapter for JsonStateAdapter {
    fn load(&mut self) -> Result<Option<SavedLayout>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        let layout: SavedLayout = serde_json::from_str(&contents)?;
        debug!(target: "state", path = %self.path.display(), "layout loaded");
        Ok(Some(layout))
    }

    fn save(&mut self, layout: &SavedLayout) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(layout)?;
        fs::write(&self.path, contents)?;
        debug!(target: "state", path = %self.path.display(), "layout saved");
        Ok(())
    }
}

/// Legacy flat shape: order and widths only, under their historical names
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LegacyState {
    #[serde(rename = "ColReorder", default)]
    col_reorder: Vec<usize>,
    #[serde(rename = "ColSizes", default)]
    col_sizes: Vec<Option<String>>,
}

/// Adapter for the legacy shape; sort and filter state is not representable
/// there and normalises to empty.
pub struct LegacyStateAdapter {
    path: PathBuf,
}

impl LegacyStateAdapter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StateAdapter for LegacyStateAdapter {
    fn load(&mut self) -> Result<Option<SavedLayout>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        let legacy: LegacyState = serde_json::from_str(&contents)?;
        debug!(target: "state", path = %self.path.display(), "legacy layout loaded");
        Ok(Some(SavedLayout {
            order: legacy.col_reorder,
            widths: legacy.col_sizes,
            sort: Vec::new(),
            filters: Vec::new(),
        }))
    }

    fn save(&mut self, layout: &SavedLayout) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let legacy = LegacyState {
            col_reorder: layout.order.clone(),
            col_sizes: layout.widths.clone(),
        };
        let contents = serde_json::to_string_pretty(&legacy)?;
        fs::write(&self.path, contents)?;
        debug!(target: "state", path = %self.path.display(), "legacy layout saved");
        Ok(())
    }
}
