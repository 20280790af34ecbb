//! Command to find the plugin project that owns a path.

use crate::error::CliError;
use crate::utils::{load_configuration, shorten_path, GlobalOptions};
use clap::Args;
use plugdev::{ProjectInfo, ProjectResolver, Resolution};
use serde::Serialize;
use std::path::PathBuf;

/// Find the plugin project that owns a path.
#[derive(Args)]
pub struct ProjectInfoCommand {
    /// File or directory inside a project
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    status: &'static str,
    #[serde(flatten)]
    info: Option<&'a ProjectInfo>,
}

impl ProjectInfoCommand {
    pub async fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Resolve against the configured layouts
        let config = load_configuration(global)?;
        let resolver =
            ProjectResolver::new(config.project_structure()).with_logger(global.logger.clone());
        let resolution = resolver.resolve(&self.path).await?;

        let status = match &resolution {
            Resolution::Valid(_) => "valid",
            Resolution::InvalidLayout(_) => "invalid_layout",
            Resolution::NotFound => "not_found",
        };

        // 2. Report
        if self.json {
            let report = Report {
                status,
                info: resolution.info(),
            };
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
            println!("{json}");
        } else if let Some(info) = resolution.info() {
            println!("Project: {}", shorten_path(info.project()));
            println!("Config: {}", shorten_path(info.config_file()));
            println!("Type: {}", info.project_type().unwrap_or("-"));
            if let Some(frame) = info.frame() {
                println!("Frame: {frame}");
            }
            if let Some(app_id) = info.app_id() {
                println!("App ID: {app_id}");
            }
            println!("Status: {status}");
        }

        // 3. Anything but a valid project is a semantic failure
        match resolution {
            Resolution::Valid(_) => Ok(()),
            Resolution::InvalidLayout(info) => Err(CliError::SemanticFailure(format!(
                "{} does not have the layout its type {:?} requires",
                info.project().display(),
                info.project_type().unwrap_or_default()
            ))),
            Resolution::NotFound => Err(CliError::SemanticFailure(format!(
                "No plugin project found for {}",
                self.path.display()
            ))),
        }
    }
}
