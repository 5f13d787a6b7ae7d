/*
 * profdag-runtime - Profiling DAG Net Runtime
 *
 * Nets that accumulate per-node execution costs while they run, plus the
 * registry that owns them by name.
 *
 * Architecture:
 * - NetDef / OperatorDef: net structure in canonical node order
 * - ProfDagNet: per-node and per-operator-type cost counters
 * - StatsProvider: read-side snapshot contract
 * - Workspace: concurrent name -> net registry (GraphRegistry)
 * - ProfStats: statistics record schema (serde)
 */

pub mod error;
pub mod net;
pub mod net_def;
pub mod prof_dag_net;
pub mod stats;
pub mod workspace;

// Re-exports
pub use error::{Result, RuntimeError};
pub use net::{GraphHandle, PlainNet, StatsProvider};
pub use net_def::{NetDef, OperatorDef};
pub use prof_dag_net::{ProfDagNet, ProfilingOptions, ResetGuard};
pub use stats::{CostEntry, ProfStats, Stats, TwoNumberStats};
pub use workspace::{GraphRegistry, Workspace};
