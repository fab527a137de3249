//! Application state shared by the request handlers.

use std::sync::Arc;

use partstore_core::records::RecordKind;
use partstore_core::storage::TableStore;

use crate::{config::Config, dispatch::Dispatcher};

/// Shared application state: one dispatcher per record kind, all sharing
/// a single store handle.
#[derive(Clone)]
pub struct AppState {
    storage_device_types: Dispatcher,
    storage_device_instances: Dispatcher,
    component_types: Dispatcher,
}

impl AppState {
    /// Creates the dispatchers for every record kind over `store`.
    pub fn new(store: Arc<dyn TableStore>, config: &Config) -> Self {
        let dispatcher = |kind| Dispatcher::new(store.clone(), config.table_spec(kind));

        Self {
            storage_device_types: dispatcher(RecordKind::StorageDeviceType),
            storage_device_instances: dispatcher(RecordKind::StorageDeviceInstance),
            component_types: dispatcher(RecordKind::ComponentType),
        }
    }

    /// The dispatcher serving `kind`.
    pub fn dispatcher(&self, kind: RecordKind) -> &Dispatcher {
        match kind {
            RecordKind::StorageDeviceType => &self.storage_device_types,
            RecordKind::StorageDeviceInstance => &self.storage_device_instances,
            RecordKind::ComponentType => &self.component_types,
        }
    }
}

#[cfg(test)]
impl Default for AppState {
    /// In-memory state with the default table names.
    fn default() -> Self {
        use crate::storage::inmemory::InMemoryStore;

        let config = Config::default();
        let store = InMemoryStore::with_tables(
            RecordKind::all()
                .into_iter()
                .map(|kind| config.table_spec(kind)),
        );
        Self::new(Arc::new(store), &config)
    }
}
