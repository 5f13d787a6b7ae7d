//! Net registry
//!
//! - Lock-free concurrent access with DashMap
//! - Single-name lookup and name enumeration are each atomic, not jointly:
//!   a name returned by `nets()` may be gone by the time it is looked up

use crate::error::{Result, RuntimeError};
use crate::net::{GraphHandle, PlainNet};
use crate::net_def::NetDef;
use crate::prof_dag_net::{ProfDagNet, ProfilingOptions};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// Read-only view of a net registry
pub trait GraphRegistry: Send + Sync {
    /// Look up a net by exact name
    fn get_net(&self, name: &str) -> Option<GraphHandle>;

    /// Snapshot of the currently registered net names
    fn nets(&self) -> Vec<String>;
}

/// Process-level net registry
#[derive(Default)]
pub struct Workspace {
    nets: DashMap<String, GraphHandle>,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            nets: DashMap::new(),
        }
    }

    /// Register a profiling net, replacing any net with the same name
    pub fn create_net(&self, def: NetDef, options: ProfilingOptions) -> Arc<ProfDagNet> {
        let net = Arc::new(ProfDagNet::new(def, options));
        self.insert(GraphHandle::Profiled(net.clone()));
        net
    }

    /// Register a net without profiling, replacing any net with the same name
    pub fn add_plain_net(&self, def: NetDef) -> Arc<PlainNet> {
        let net = Arc::new(PlainNet::new(def));
        self.insert(GraphHandle::Plain(net.clone()));
        net
    }

    /// Register a handle under its own name; returns the replaced entry, if any
    pub fn insert(&self, handle: GraphHandle) -> Option<GraphHandle> {
        let name = handle.name().to_string();
        debug!("Registering {} net {}", handle.kind(), name);
        self.nets.insert(name, handle)
    }

    /// Register a handle, failing if the name is taken
    pub fn try_insert(&self, handle: GraphHandle) -> Result<()> {
        use dashmap::mapref::entry::Entry;

        match self.nets.entry(handle.name().to_string()) {
            Entry::Occupied(entry) => Err(RuntimeError::DuplicateNet(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(handle);
                Ok(())
            }
        }
    }

    pub fn remove_net(&self, name: &str) -> Option<GraphHandle> {
        self.nets.remove(name).map(|(_, handle)| handle)
    }

    pub fn has_net(&self, name: &str) -> bool {
        self.nets.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.nets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nets.is_empty()
    }
}

impl GraphRegistry for Workspace {
    fn get_net(&self, name: &str) -> Option<GraphHandle> {
        self.nets.get(name).map(|entry| entry.value().clone())
    }

    fn nets(&self) -> Vec<String> {
        let mut names: Vec<String> = self.nets.iter().map(|entry| entry.key().clone()).collect();
        names.sort_unstable();
        names
    }
}
