use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("Stats unavailable for net {net}: {reason}")]
    StatsUnavailable { net: String, reason: String },

    #[error("Invalid run for net {net}: expected {expected} timings, got {got}")]
    InvalidRun {
        net: String,
        expected: usize,
        got: usize,
    },

    #[error("Invalid timing for net {net} at node {index}: {value}")]
    InvalidTiming { net: String, index: usize, value: f32 },

    #[error("Operator {op} failed: {message}")]
    OperatorFailed { op: String, message: String },

    #[error("Net already registered: {0}")]
    DuplicateNet(String),
}

impl RuntimeError {
    pub fn stats_unavailable(net: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::StatsUnavailable {
            net: net.into(),
            reason: reason.into(),
        }
    }

    pub fn operator_failed<E: std::fmt::Display>(op: impl Into<String>, e: E) -> Self {
        Self::OperatorFailed {
            op: op.into(),
            message: e.to_string(),
        }
    }

    /// Whether the caller may retry the same request later
    pub fn is_transient(&self) -> bool {
        matches!(self, RuntimeError::StatsUnavailable { .. })
    }
}
