//! Configuration validation

use super::ProfStatsConfig;
use crate::error::{ProfStatsError, Result};

/// Trait for validatable configuration objects
pub trait Validatable {
    /// Returns `Ok(())` if valid, a configuration error otherwise
    fn validate(&self) -> Result<()>;

    /// Configuration name for error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}

impl Validatable for ProfStatsConfig {
    fn validate(&self) -> Result<()> {
        let has_name = is_set(&self.net_name);
        let has_partial = is_set(&self.partial_net_name);

        if !has_name && !has_partial {
            return Err(ProfStatsError::configuration(format!(
                "{}: you need to provide net_name or partial_net_name",
                self.config_name()
            )));
        }
        if has_name && has_partial {
            return Err(ProfStatsError::configuration(format!(
                "{}: you can not provide both net_name and partial_net_name",
                self.config_name()
            )));
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "GetProfDagStats"
    }
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

pub(crate) fn selector_error() -> ProfStatsError {
    ProfStatsError::configuration("exactly one of net_name or partial_net_name must be set")
}
