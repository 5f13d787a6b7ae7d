//! Statistics record codec
//!
//! bincode over the serde-derived `ProfStats` schema. Entry order comes from
//! the runtime, so equal records always encode to equal bytes.

use crate::error::{ProfStatsError, Result};
use profdag_runtime::{CostEntry, ProfStats};

/// Reject records that would encode but mean nothing to a consumer
fn validate_record(record: &ProfStats) -> Result<()> {
    for (i, entry) in record.stats.iter().enumerate() {
        check_entry(entry).map_err(|field| {
            ProfStatsError::serialization(format!(
                "Net {}: entry {} ({}) has invalid {}",
                record.net_name, i, entry.name, field
            ))
        })?;
    }
    Ok(())
}

fn check_entry(entry: &CostEntry) -> std::result::Result<(), &'static str> {
    let fields = [
        ("mean", entry.mean),
        ("stddev", entry.stddev),
        ("execution_time.mean", entry.execution_time.mean),
        ("execution_time.stddev", entry.execution_time.stddev),
    ];
    for (field, value) in fields {
        if !value.is_finite() || value < 0.0 {
            return Err(field);
        }
    }
    Ok(())
}

pub fn serialize(record: &ProfStats) -> Result<Vec<u8>> {
    validate_record(record)?;
    Ok(bincode::serialize(record)?)
}

pub fn deserialize(bytes: &[u8]) -> Result<ProfStats> {
    Ok(bincode::deserialize(bytes)?)
}
