//! Statistics schema shared by the profiling runtime and its readers.
//!
//! `ProfStats` is the record handed to consumers; field order and
//! entry order are part of the encoding.

use serde::{Deserialize, Serialize};

/// Running sum / sum-of-squares accumulator
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Stats {
    sum: f64,
    sqr_sum: f64,
    cnt: u64,
}

impl Stats {
    pub fn add(&mut self, value: f64) {
        self.sum += value;
        self.sqr_sum += value * value;
        self.cnt += 1;
    }

    pub fn count(&self) -> u64 {
        self.cnt
    }

    pub fn mean(&self) -> f64 {
        if self.cnt == 0 {
            return 0.0;
        }
        self.sum / self.cnt as f64
    }

    /// Population standard deviation; clamps rounding noise below zero
    pub fn stddev(&self) -> f64 {
        if self.cnt == 0 {
            return 0.0;
        }
        let mean = self.mean();
        let variance = self.sqr_sum / self.cnt as f64 - mean * mean;
        variance.max(0.0).sqrt()
    }

    pub fn to_two_number(&self) -> TwoNumberStats {
        TwoNumberStats {
            mean: self.mean() as f32,
            stddev: self.stddev() as f32,
            count: self.cnt,
        }
    }
}

/// Mean / stddev / sample count triple
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TwoNumberStats {
    pub mean: f32,
    pub stddev: f32,
    pub count: u64,
}

/// One cost entry: an operator type (aggregate view) or a single node (per-node view)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEntry {
    /// Operator type in the aggregate view, node label in the per-node view
    pub name: String,
    pub op_type: String,
    /// Position in the net; `None` for aggregate entries
    pub node_index: Option<u32>,
    /// Mean cost per run in milliseconds
    pub mean: f32,
    pub stddev: f32,
    pub execution_time: TwoNumberStats,
}

impl CostEntry {
    pub fn from_stats(
        name: impl Into<String>,
        op_type: impl Into<String>,
        node_index: Option<u32>,
        stats: &Stats,
    ) -> Self {
        let execution_time = stats.to_two_number();
        Self {
            name: name.into(),
            op_type: op_type.into(),
            node_index,
            mean: execution_time.mean,
            stddev: execution_time.stddev,
            execution_time,
        }
    }
}

/// Statistics record for one net
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfStats {
    pub net_name: String,
    pub stats: Vec<CostEntry>,
}

impl ProfStats {
    pub fn empty(net_name: impl Into<String>) -> Self {
        Self {
            net_name: net_name.into(),
            stats: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// First entry with the given name
    pub fn find(&self, name: &str) -> Option<&CostEntry> {
        self.stats.iter().find(|entry| entry.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_mean_stddev() {
        let mut stats = Stats::default();
        for v in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            stats.add(v);
        }
        assert_eq!(stats.count(), 8);
        assert_eq!(stats.mean(), 5.0);
        assert!((stats.stddev() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_stats_empty_is_zero() {
        let stats = Stats::default();
        assert_eq!(stats.mean(), 0.0);
        assert_eq!(stats.stddev(), 0.0);
        assert_eq!(stats.to_two_number(), TwoNumberStats::default());
    }

    #[test]
    fn test_stats_constant_series_has_zero_stddev() {
        let mut stats = Stats::default();
        for _ in 0..5 {
            stats.add(0.1);
        }
        assert!(stats.stddev() >= 0.0);
        assert!(stats.stddev() < 1e-6);
    }

    #[test]
    fn test_cost_entry_from_stats() {
        let mut stats = Stats::default();
        stats.add(1.0);
        stats.add(3.0);
        let entry = CostEntry::from_stats("fc1", "FC", Some(0), &stats);
        assert_eq!(entry.mean, 2.0);
        assert_eq!(entry.stddev, 1.0);
        assert_eq!(entry.execution_time.count, 2);
        assert_eq!(entry.node_index, Some(0));
    }

    #[test]
    fn test_prof_stats_find() {
        let mut record = ProfStats::empty("train");
        assert!(record.is_empty());
        record
            .stats
            .push(CostEntry::from_stats("FC", "FC", None, &Stats::default()));
        assert_eq!(record.len(), 1);
        assert!(record.find("FC").is_some());
        assert!(record.find("Relu").is_none());
    }
}
