//! Commands that read single values from a properties file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use std::path::{Path, PathBuf};

/// Print the app_id of a properties file.
#[derive(Args)]
pub struct AppIdCommand {
    /// Path to a plugin.properties file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

impl AppIdCommand {
    pub async fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        global
            .logger
            .debug(&format!("reading app_id from {}", self.file.display()));
        let value = plugdev::properties::app_id(&self.file).await?;
        print_value(&self.file, "app_id", value)
    }
}

/// Print the project type of a properties file.
#[derive(Args)]
pub struct AppTypeCommand {
    /// Path to a plugin.properties file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

impl AppTypeCommand {
    pub async fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        global
            .logger
            .debug(&format!("reading type from {}", self.file.display()));
        let value = plugdev::properties::app_type(&self.file).await?;
        print_value(&self.file, "type", value)
    }
}

fn print_value(file: &Path, key: &str, value: Option<String>) -> Result<(), CliError> {
    match value {
        Some(value) => {
            println!("{value}");
            Ok(())
        }
        None => Err(CliError::SemanticFailure(format!(
            "{} has no {key} entry",
            file.display()
        ))),
    }
}
