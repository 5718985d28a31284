//! Instance registry - bookkeeping of live widget instances
//!
//! An explicit registry object owned by whatever manages widget lifecycles;
//! entries are weak back-references used only for enumeration during bulk
//! reset or disposal, never for cross-instance mutation. Attaching a second
//! instance to the same host table is a reported condition; the first
//! instance stays authoritative.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use anyhow::Result;
use tracing::{debug, warn};

use crate::ui::column_manager::ColumnManager;

struct RegistryEntry {
    table_id: String,
    instance: Weak<RefCell<ColumnManager>>,
}

#[derive(Default)]
pub struct InstanceRegistry {
    entries: Vec<RegistryEntry>,
}

impl InstanceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an instance under its host table id. A duplicate id is
    /// rejected and the existing registration kept.
    pub fn register(
        &mut self,
        table_id: &str,
        instance: &Rc<RefCell<ColumnManager>>,
    ) -> Result<()> {
        self.prune();

        if self.entries.iter().any(|e| e.table_id == table_id) {
            warn!(target: "registry", table_id, "attempted to initialise twice, ignoring second");
            return Err(anyhow::anyhow!(
                "An instance is already attached to table '{}'. Ignoring second.",
                table_id
            ));
        }

        self.entries.push(RegistryEntry {
            table_id: table_id.to_string(),
            instance: Rc::downgrade(instance),
        });
        debug!(target: "registry", table_id, "instance registered");
        Ok(())
    }

    pub fn unregister(&mut self, table_id: &str) {
        self.entries.retain(|e| e.table_id != table_id);
        debug!(target: "registry", table_id, "instance unregistered");
    }

    /// Look up a live instance by table id
    pub fn get(&self, table_id: &str) -> Option<Rc<RefCell<ColumnManager>>> {
        self.entries
            .iter()
            .find(|e| e.table_id == table_id)
            .and_then(|e| e.instance.upgrade())
    }

    /// Number of live instances
    pub fn len(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.instance.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop entries whose instance has been dropped without explicit detach
    pub fn prune(&mut self) {
        self.entries.retain(|e| e.instance.strong_count() > 0);
    }

    /// Enumerate live instances, e.g. for a bulk reset
    pub fn for_each_live<F>(&self, mut f: F)
    where
        F: FnMut(&str, &Rc<RefCell<ColumnManager>>),
    {
        for entry in &self.entries {
            if let Some(instance) = entry.instance.upgrade() {
                f(&entry.table_id, &instance);
            }
        }
    }

    /// Forget every registration (the instances themselves are owned
    /// elsewhere)
    pub fn dispose_all(&mut self) {
        debug!(target: "registry", count = self.entries.len(), "disposing all registrations");
        self.entries.clear();
    }
}
