//! Command to validate a package name.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use plugdev::util::validate_package_name;

/// Check whether a name is a valid package name.
#[derive(Args)]
pub struct CheckNameCommand {
    /// Name to check
    #[arg(value_name = "NAME")]
    pub name: String,
}

impl CheckNameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !validate_package_name(&self.name, &global.logger) {
            return Err(CliError::SemanticFailure(format!(
                "\"{}\" is not a valid package name",
                self.name
            )));
        }

        if !global.quiet {
            println!("{} is a valid package name", self.name);
        }
        Ok(())
    }
}
