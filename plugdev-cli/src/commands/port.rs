//! Command to allocate a dev-server port.

use crate::error::CliError;
use crate::utils::{lazy_store, load_configuration, GlobalOptions};
use clap::Args;
use plugdev::{AllocationOptions, PortAllocator, PortRange};

/// Allocate a dev-server port, reusing the last one when it is still free.
#[derive(Args)]
pub struct PortCommand {
    /// Lowest acceptable port (rounded up)
    #[arg(long, value_name = "N")]
    pub min: Option<f64>,

    /// Highest acceptable port (rounded down)
    #[arg(long, value_name = "N")]
    pub max: Option<f64>,

    /// Give up after this many taken random candidates
    #[arg(long, value_name = "N")]
    pub max_attempts: Option<u32>,
}

impl PortCommand {
    pub async fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Work out the range: flags over configuration
        let config = load_configuration(global)?;
        let configured = config.port_range()?;

        let min = self.min.unwrap_or_else(|| f64::from(configured.min().value()));
        let max = self.max.unwrap_or_else(|| f64::from(configured.max().value()));
        let range = PortRange::from_bounds(min, max)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        if self.max_attempts == Some(0) {
            return Err(CliError::InvalidArguments(
                "--max-attempts must be greater than 0".into(),
            ));
        }
        let options = AllocationOptions {
            max_attempts: self.max_attempts.or(config.max_port_attempts),
        };

        // 2. Open the store on first use and allocate
        let lazy = lazy_store(global, &config)?;
        let store = lazy.get().await?;

        global.logger.debug(&format!("allocating from {range}"));
        let port = PortAllocator::new()
            .with_options(options)
            .allocate(&store, range)
            .await?;

        println!("{port}");
        Ok(())
    }
}
