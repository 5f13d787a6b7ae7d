use crate::error::Result;
use crate::net_def::NetDef;
use crate::stats::ProfStats;
use std::fmt;
use std::sync::Arc;

/// Read-side contract of a statistics-collecting net.
///
/// Both accessors return a consistent snapshot without pausing execution and
/// without touching the running counters. A net that cannot produce one right
/// now returns `RuntimeError::StatsUnavailable`.
pub trait StatsProvider: Send + Sync {
    fn net_name(&self) -> &str;

    /// One entry per distinct operator type, costs summed over its nodes
    fn operator_stats(&self) -> Result<ProfStats>;

    /// One entry per node, in net order
    fn per_operator_cost(&self) -> Result<ProfStats>;
}

/// Net without profiling support
#[derive(Debug, Clone)]
pub struct PlainNet {
    def: NetDef,
}

impl PlainNet {
    pub fn new(def: NetDef) -> Self {
        Self { def }
    }

    pub fn name(&self) -> &str {
        &self.def.name
    }
}

/// Registry entry, tagged by capability
#[derive(Clone)]
pub enum GraphHandle {
    Plain(Arc<PlainNet>),
    Profiled(Arc<dyn StatsProvider>),
}

impl GraphHandle {
    pub fn name(&self) -> &str {
        match self {
            GraphHandle::Plain(net) => net.name(),
            GraphHandle::Profiled(net) => net.net_name(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            GraphHandle::Plain(_) => "plain",
            GraphHandle::Profiled(_) => "profiled",
        }
    }

    /// Statistics accessor, if this net collects statistics
    pub fn as_stats_provider(&self) -> Option<&Arc<dyn StatsProvider>> {
        match self {
            GraphHandle::Profiled(net) => Some(net),
            GraphHandle::Plain(_) => None,
        }
    }
}

impl fmt::Debug for GraphHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphHandle")
            .field("name", &self.name())
            .field("kind", &self.kind())
            .finish()
    }
}
