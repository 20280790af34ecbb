//! Command to show the resolved data directory path.

use crate::error::CliError;
use crate::utils::{data_dir, GlobalOptions};
use clap::Args;

/// Show the resolved data directory path.
#[derive(Args)]
pub struct ShowDataDirCommand {}

impl ShowDataDirCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let data_dir = data_dir(global)?;

        println!("{}", data_dir.display());
        Ok(())
    }
}
