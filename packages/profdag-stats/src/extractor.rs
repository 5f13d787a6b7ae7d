use crate::config::StatsMode;
use crate::error::{ProfStatsError, Result};
use profdag_runtime::{ProfStats, RuntimeError, StatsProvider};
use tracing::warn;

/// Read the current statistics snapshot in the requested granularity.
///
/// Goes through the runtime's own accessors only; a net that has never run
/// yields an empty record.
pub fn extract(net: &dyn StatsProvider, mode: StatsMode) -> Result<ProfStats> {
    let snapshot = match mode {
        StatsMode::PerNode => net.per_operator_cost(),
        StatsMode::Aggregate => net.operator_stats(),
    };

    snapshot.map_err(|e| {
        warn!("Stats for net {} unavailable ({}): {}", net.net_name(), mode, e);
        accessor_error(e)
    })
}

/// Only a transient runtime failure is reported as retryable
fn accessor_error(err: RuntimeError) -> ProfStatsError {
    let message = err.to_string();
    if err.is_transient() {
        ProfStatsError::unavailable_stats(message).with_source(err)
    } else {
        ProfStatsError::runtime(message).with_source(err)
    }
}
