//! Operator configuration
//!
//! Exactly one of `net_name` / `partial_net_name` selects the target net;
//! `per_op` picks per-node statistics instead of the per-operator-type
//! aggregate. Empty strings count as unset.
//!
//! ```rust,ignore
//! use profdag_stats::config::ProfStatsConfig;
//!
//! let config = ProfStatsConfig::partial("train").per_op(true).build()?;
//! let config = ProfStatsConfig::from_yaml_file("prof_stats.yaml")?;
//! ```

pub mod io;
pub mod validation;

pub use io::ConfigFileV1;
pub use validation::Validatable;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw operator arguments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfStatsConfig {
    /// Exact net name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_name: Option<String>,

    /// Substring of the net name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partial_net_name: Option<String>,

    /// Per-node statistics instead of the per-type aggregate
    #[serde(default)]
    pub per_op: bool,
}

impl ProfStatsConfig {
    pub fn exact(net_name: impl Into<String>) -> Self {
        Self {
            net_name: Some(net_name.into()),
            ..Default::default()
        }
    }

    pub fn partial(partial_net_name: impl Into<String>) -> Self {
        Self {
            partial_net_name: Some(partial_net_name.into()),
            ..Default::default()
        }
    }

    pub fn per_op(mut self, per_op: bool) -> Self {
        self.per_op = per_op;
        self
    }

    /// Validate and freeze
    pub fn build(self) -> Result<ValidatedConfig> {
        self.validate()?;

        let selector = match (non_empty(self.net_name), non_empty(self.partial_net_name)) {
            (Some(name), None) => NetSelector::Exact(name),
            (None, Some(partial)) => NetSelector::Partial(partial),
            _ => return Err(validation::selector_error()),
        };

        Ok(ValidatedConfig {
            selector,
            mode: StatsMode::from_per_op(self.per_op),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// How the target net is identified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetSelector {
    Exact(String),
    /// Literal substring; must match exactly one registered net
    Partial(String),
}

impl fmt::Display for NetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetSelector::Exact(name) => write!(f, "net_name={}", name),
            NetSelector::Partial(partial) => write!(f, "partial_net_name={}", partial),
        }
    }
}

/// Statistics granularity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatsMode {
    /// One entry per operator type
    #[default]
    Aggregate,
    /// One entry per node, in net order
    PerNode,
}

impl StatsMode {
    pub fn from_per_op(per_op: bool) -> Self {
        if per_op {
            StatsMode::PerNode
        } else {
            StatsMode::Aggregate
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatsMode::Aggregate => "aggregate",
            StatsMode::PerNode => "per_node",
        }
    }
}

impl fmt::Display for StatsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Configuration that passed validation; immutable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    selector: NetSelector,
    mode: StatsMode,
}

impl ValidatedConfig {
    pub fn selector(&self) -> &NetSelector {
        &self.selector
    }

    pub fn mode(&self) -> StatsMode {
        self.mode
    }
}
