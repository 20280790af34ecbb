//! CLI structure and command definitions.

use crate::commands::{
    AppIdCommand, AppTypeCommand, CheckNameCommand, PortCommand, ProjectInfoCommand,
    ShowDataDirCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Development helpers for plugin projects.
#[derive(Parser)]
#[command(name = "plugdev")]
#[command(version, about = "Find plugin project roots and allocate dev-server ports", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "PLUGDEV_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Find the plugin project that owns a path
    ProjectInfo(ProjectInfoCommand),

    /// Allocate a dev-server port, reusing the last one when free
    Port(PortCommand),

    /// Print the app_id of a properties file
    AppId(AppIdCommand),

    /// Print the project type of a properties file
    AppType(AppTypeCommand),

    /// Check whether a name is a valid package name
    CheckName(CheckNameCommand),

    /// Show the resolved data directory path
    ShowDataDir(ShowDataDirCommand),
}
