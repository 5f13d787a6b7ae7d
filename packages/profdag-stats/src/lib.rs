/*
 * profdag-stats - Profiling Statistics Extraction
 *
 * Locates a profiling net by exact or partial name and writes a snapshot of
 * its accumulated execution costs, bincode-encoded, into a single-element
 * output slot.
 *
 * Architecture:
 * - config: net selector + stats mode, validated at construction
 * - resolver: selector -> exactly one statistics-collecting net
 * - extractor: per-operator-type or per-node snapshot
 * - serializer: deterministic bincode encoding of ProfStats
 * - op: GetProfDagStatsOp (resolve -> extract -> serialize -> store)
 */

pub mod config;
pub mod error;
pub mod extractor;
pub mod op;
pub mod output;
pub mod resolver;
pub mod serializer;
pub mod telemetry;

// Re-exports
pub use config::{NetSelector, ProfStatsConfig, StatsMode, Validatable, ValidatedConfig};
pub use error::{ErrorKind, ProfStatsError, Result};
pub use extractor::extract;
pub use op::GetProfDagStatsOp;
pub use output::OutputSlot;
pub use resolver::{partial_matches, resolve, resolve_handle};
pub use serializer::{deserialize, serialize};
pub use telemetry::init_tracing;
