use crate::config::{ProfStatsConfig, ValidatedConfig};
use crate::error::Result;
use crate::extractor::extract;
use crate::output::OutputSlot;
use crate::resolver::resolve;
use crate::serializer::serialize;
use profdag_runtime::{GraphRegistry, ProfStats};
use std::sync::Arc;
use tracing::{debug, info};

/// Operator that writes a profiling net's statistics into its output slot.
///
/// Configuration is validated once in `new`; every `run` resolves the net,
/// reads a fresh snapshot, encodes it and stores it. The output slot is only
/// written after encoding succeeds.
pub struct GetProfDagStatsOp {
    config: ValidatedConfig,
    registry: Arc<dyn GraphRegistry>,
}

impl GetProfDagStatsOp {
    pub fn new(config: ProfStatsConfig, registry: Arc<dyn GraphRegistry>) -> Result<Self> {
        Ok(Self::with_validated(config.build()?, registry))
    }

    pub fn with_validated(config: ValidatedConfig, registry: Arc<dyn GraphRegistry>) -> Self {
        debug!(
            "GetProfDagStats configured: {} mode={}",
            config.selector(),
            config.mode()
        );
        Self { config, registry }
    }

    pub fn config(&self) -> &ValidatedConfig {
        &self.config
    }

    /// Resolve and read the current statistics without encoding them
    pub fn fetch(&self) -> Result<ProfStats> {
        let net = resolve(self.registry.as_ref(), self.config.selector())?;
        extract(net.as_ref(), self.config.mode())
    }

    pub fn run(&self, output: &mut OutputSlot) -> Result<()> {
        let record = self.fetch()?;
        let bytes = serialize(&record)?;

        info!(
            "GetProfDagStats: net={} mode={} entries={} bytes={}",
            record.net_name,
            self.config.mode(),
            record.len(),
            bytes.len()
        );
        output.write_single(bytes);
        Ok(())
    }
}
