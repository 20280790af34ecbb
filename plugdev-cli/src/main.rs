//! Main entry point for the plugdev CLI.
//!
//! Commands:
//! - `project-info`: Find the plugin project that owns a path
//! - `port`: Allocate a dev-server port
//! - `app-id` / `app-type`: Read values from a properties file
//! - `check-name`: Validate a package name
//! - `show-data-dir`: Show the resolved data directory

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let logger = plugdev::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        logger,
    };

    let result = match cli.command {
        cli::Command::ProjectInfo(cmd) => cmd.execute(&global).await,
        cli::Command::Port(cmd) => cmd.execute(&global).await,
        cli::Command::AppId(cmd) => cmd.execute(&global).await,
        cli::Command::AppType(cmd) => cmd.execute(&global).await,
        cli::Command::CheckName(cmd) => cmd.execute(&global),
        cli::Command::ShowDataDir(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
