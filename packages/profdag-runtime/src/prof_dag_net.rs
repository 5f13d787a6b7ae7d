//! Profiling DAG net
//!
//! Records per-node wall-clock costs for every run and exposes two read views:
//! - aggregate: per operator type, each run's type total fed into one `Stats`
//! - per node: one `Stats` per operator, in net order
//!
//! The first `warmup_runs` runs are observed but not recorded.

use crate::error::{Result, RuntimeError};
use crate::net::StatsProvider;
use crate::net_def::{NetDef, OperatorDef};
use crate::stats::{CostEntry, ProfStats, Stats};
use parking_lot::{RwLock, RwLockReadGuard};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use tracing::debug;

/// Profiling options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilingOptions {
    /// Leading runs excluded from the statistics
    pub warmup_runs: u64,
}

impl Default for ProfilingOptions {
    fn default() -> Self {
        Self { warmup_runs: 1 }
    }
}

#[derive(Debug, Default)]
struct Counters {
    runs: u64,
    recorded_runs: u64,
    per_node: Vec<Stats>,
    per_type: BTreeMap<String, Stats>,
}

impl Counters {
    fn new(def: &NetDef) -> Self {
        Self {
            per_node: vec![Stats::default(); def.len()],
            ..Default::default()
        }
    }
}

pub struct ProfDagNet {
    def: NetDef,
    options: ProfilingOptions,
    counters: RwLock<Counters>,
    /// Number of resets in progress
    resets_in_progress: AtomicUsize,
}

impl ProfDagNet {
    pub fn new(def: NetDef, options: ProfilingOptions) -> Self {
        let counters = Counters::new(&def);
        Self {
            def,
            options,
            counters: RwLock::new(counters),
            resets_in_progress: AtomicUsize::new(0),
        }
    }

    pub fn name(&self) -> &str {
        &self.def.name
    }

    /// Runs observed so far, warm-up included
    pub fn runs(&self) -> u64 {
        self.counters.read().runs
    }

    /// Runs that contributed to the statistics
    pub fn recorded_runs(&self) -> u64 {
        self.counters.read().recorded_runs
    }

    /// Record one run from per-node timings in milliseconds (net order)
    pub fn record_run(&self, timings_ms: &[f32]) -> Result<()> {
        if timings_ms.len() != self.def.len() {
            return Err(RuntimeError::InvalidRun {
                net: self.def.name.clone(),
                expected: self.def.len(),
                got: timings_ms.len(),
            });
        }
        if let Some((index, &value)) = timings_ms
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(RuntimeError::InvalidTiming {
                net: self.def.name.clone(),
                index,
                value,
            });
        }

        let mut counters = self.counters.write();
        counters.runs += 1;
        if counters.runs <= self.options.warmup_runs {
            debug!(
                "Net {}: skipping warm-up run {}/{}",
                self.def.name, counters.runs, self.options.warmup_runs
            );
            return Ok(());
        }

        let mut run_totals: BTreeMap<&str, f64> = BTreeMap::new();
        for (i, (op, &ms)) in self.def.ops.iter().zip(timings_ms).enumerate() {
            counters.per_node[i].add(ms as f64);
            *run_totals.entry(op.op_type.as_str()).or_insert(0.0) += ms as f64;
        }
        for (op_type, total) in run_totals {
            counters
                .per_type
                .entry(op_type.to_string())
                .or_default()
                .add(total);
        }
        counters.recorded_runs += 1;
        Ok(())
    }

    /// Execute `f` once per node in net order, timing each call, then record the run.
    ///
    /// A failing node aborts the run; nothing is recorded for it.
    pub fn run_with<F, E>(&self, mut f: F) -> Result<()>
    where
        F: FnMut(usize, &OperatorDef) -> std::result::Result<(), E>,
        E: std::fmt::Display,
    {
        let mut timings = Vec::with_capacity(self.def.len());
        for (i, op) in self.def.ops.iter().enumerate() {
            let start = Instant::now();
            f(i, op).map_err(|e| RuntimeError::operator_failed(self.def.op_label(i), e))?;
            timings.push(start.elapsed().as_secs_f32() * 1000.0);
        }
        self.record_run(&timings)
    }

    /// Start a reset. Counters are cleared when the guard drops; until every
    /// open reset has finished both stats accessors report `StatsUnavailable`.
    pub fn begin_reset(&self) -> ResetGuard<'_> {
        self.resets_in_progress.fetch_add(1, Ordering::SeqCst);
        ResetGuard { net: self }
    }

    pub fn reset_stats(&self) {
        drop(self.begin_reset());
    }

    fn snapshot(&self) -> Result<RwLockReadGuard<'_, Counters>> {
        if self.is_resetting() {
            return Err(self.unavailable());
        }
        let counters = self.counters.read();
        // A reset may have started while waiting for the lock
        if self.is_resetting() {
            return Err(self.unavailable());
        }
        Ok(counters)
    }

    fn is_resetting(&self) -> bool {
        self.resets_in_progress.load(Ordering::SeqCst) > 0
    }

    fn unavailable(&self) -> RuntimeError {
        RuntimeError::stats_unavailable(&self.def.name, "statistics reset in progress")
    }
}

impl StatsProvider for ProfDagNet {
    fn net_name(&self) -> &str {
        &self.def.name
    }

    fn operator_stats(&self) -> Result<ProfStats> {
        let counters = self.snapshot()?;
        if counters.recorded_runs == 0 {
            debug!("Net {}: no recorded runs yet", self.def.name);
            return Ok(ProfStats::empty(&self.def.name));
        }

        let stats = counters
            .per_type
            .iter()
            .map(|(op_type, stats)| CostEntry::from_stats(op_type, op_type, None, stats))
            .collect();
        Ok(ProfStats {
            net_name: self.def.name.clone(),
            stats,
        })
    }

    fn per_operator_cost(&self) -> Result<ProfStats> {
        let counters = self.snapshot()?;
        if counters.recorded_runs == 0 {
            debug!("Net {}: no recorded runs yet", self.def.name);
            return Ok(ProfStats::empty(&self.def.name));
        }

        let stats = self
            .def
            .ops
            .iter()
            .zip(&counters.per_node)
            .enumerate()
            .map(|(i, (op, stats))| {
                CostEntry::from_stats(self.def.op_label(i), &op.op_type, Some(i as u32), stats)
            })
            .collect();
        Ok(ProfStats {
            net_name: self.def.name.clone(),
            stats,
        })
    }
}

/// In-progress statistics reset; clears the counters on drop
pub struct ResetGuard<'a> {
    net: &'a ProfDagNet,
}

impl Drop for ResetGuard<'_> {
    fn drop(&mut self) {
        {
            let mut counters = self.net.counters.write();
            *counters = Counters::new(&self.net.def);
        }
        self.net.resets_in_progress.fetch_sub(1, Ordering::SeqCst);
        debug!("Net {}: statistics reset", self.net.def.name);
    }
}
