//! Configuration I/O (YAML loading)

use super::{ProfStatsConfig, ValidatedConfig};
use crate::error::{ProfStatsError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
///
/// ```yaml
/// version: 1
/// get_prof_dag_stats:
///   partial_net_name: train
///   per_op: true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    pub version: u32,
    pub get_prof_dag_stats: ProfStatsConfig,
}

impl ProfStatsConfig {
    pub fn from_yaml_str(content: &str) -> Result<ValidatedConfig> {
        let file: ConfigFileV1 = serde_yaml::from_str(content).map_err(|e| {
            ProfStatsError::configuration(format!("YAML parsing error: {}", e)).with_source(e)
        })?;

        if !SUPPORTED_VERSIONS.contains(&file.version) {
            return Err(ProfStatsError::configuration(format!(
                "Unsupported configuration version {}. Supported versions: {:?}",
                file.version, SUPPORTED_VERSIONS
            )));
        }

        file.get_prof_dag_stats.build()
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<ValidatedConfig> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ProfStatsError::configuration(format!("Cannot read {}: {}", path.display(), e))
                .with_source(e)
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn to_yaml(&self) -> Result<String> {
        let file = ConfigFileV1 {
            version: 1,
            get_prof_dag_stats: self.clone(),
        };
        serde_yaml::to_string(&file)
            .map_err(|e| ProfStatsError::configuration(e.to_string()).with_source(e))
    }
}
