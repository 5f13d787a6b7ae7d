//! Error types for profdag-stats

use std::fmt;
use thiserror::Error;

/// Stats extraction error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Both or neither of net_name / partial_net_name set
    Configuration,
    /// No net matches the requested name
    NotFound,
    /// More than one net contains the requested substring
    AmbiguousMatch,
    /// The net exists but does not collect statistics
    TypeMismatch,
    /// The runtime cannot produce a consistent snapshot right now
    UnavailableStats,
    /// The statistics record could not be encoded
    Serialization,
    /// The runtime failed for a reason other than a missing snapshot
    Runtime,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Configuration => "configuration",
            ErrorKind::NotFound => "not_found",
            ErrorKind::AmbiguousMatch => "ambiguous_match",
            ErrorKind::TypeMismatch => "type_mismatch",
            ErrorKind::UnavailableStats => "unavailable_stats",
            ErrorKind::Serialization => "serialization",
            ErrorKind::Runtime => "runtime",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stats extraction error type
#[derive(Debug, Error)]
#[error("[{kind}] {message}")]
pub struct ProfStatsError {
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
    pub kind: ErrorKind,
    pub message: String,
}

impl ProfStatsError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    pub fn net_not_found(name: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::NotFound,
            format!("Can not find a net named '{}'", name),
        )
    }

    pub fn no_partial_match(partial: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::NotFound,
            format!("Can not find a net with '{}' as part of its name", partial),
        )
    }

    pub fn ambiguous_match(partial: impl fmt::Display, matches: &[String]) -> Self {
        Self::new(
            ErrorKind::AmbiguousMatch,
            format!(
                "There are multiple nets with '{}' as part of their name: {}",
                partial,
                matches.join(", ")
            ),
        )
    }

    pub fn type_mismatch(name: impl fmt::Display, kind: &str) -> Self {
        Self::new(
            ErrorKind::TypeMismatch,
            format!("Net '{}' is a {} net and does not collect statistics", name, kind),
        )
    }

    pub fn unavailable_stats(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnavailableStats, message)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization, message)
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Runtime, message)
    }

    /// Only a missing snapshot is worth retrying
    pub fn is_retryable(&self) -> bool {
        self.kind == ErrorKind::UnavailableStats
    }
}

impl From<bincode::Error> for ProfStatsError {
    fn from(err: bincode::Error) -> Self {
        ProfStatsError::serialization(format!("bincode error: {}", err)).with_source(err)
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ProfStatsError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let err = ProfStatsError::net_not_found("train");
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(
            err.to_string(),
            "[not_found] Can not find a net named 'train'"
        );
    }

    #[test]
    fn test_ambiguous_match_names_substring() {
        let err = ProfStatsError::ambiguous_match("A", &["A".to_string(), "AB".to_string()]);
        let msg = err.to_string();
        assert!(msg.contains("ambiguous_match"));
        assert!(msg.contains("'A'"));
        assert!(msg.contains("A, AB"));
    }

    #[test]
    fn test_only_unavailable_stats_is_retryable() {
        assert!(ProfStatsError::unavailable_stats("reset").is_retryable());
        assert!(!ProfStatsError::configuration("x").is_retryable());
        assert!(!ProfStatsError::no_partial_match("x").is_retryable());
        assert!(!ProfStatsError::type_mismatch("x", "plain").is_retryable());
        assert!(!ProfStatsError::serialization("x").is_retryable());
        assert!(!ProfStatsError::runtime("x").is_retryable());
    }

    #[test]
    fn test_with_source_is_exposed() {
        let runtime = profdag_runtime::RuntimeError::stats_unavailable("train", "reset");
        let err = ProfStatsError::unavailable_stats(runtime.to_string()).with_source(runtime);
        assert!(err.is_retryable());
        assert!(err.source().is_some());
    }

    #[test]
    fn test_kind_as_str() {
        assert_eq!(ErrorKind::Configuration.as_str(), "configuration");
        assert_eq!(ErrorKind::TypeMismatch.to_string(), "type_mismatch");
        assert_eq!(ErrorKind::Runtime.as_str(), "runtime");
    }
}
