//! CLI command implementations.
//!
//! - `project_info`: Find the plugin project that owns a path
//! - `port`: Allocate a dev-server port
//! - `app_id`: Read `app_id` / `type` from a properties file
//! - `check_name`: Validate a package name
//! - `show_data_dir`: Show resolved data directory path

pub mod app_id;
pub mod check_name;
pub mod port;
pub mod project_info;
pub mod show_data_dir;

pub use app_id::{AppIdCommand, AppTypeCommand};
pub use check_name::CheckNameCommand;
pub use port::PortCommand;
pub use project_info::ProjectInfoCommand;
pub use show_data_dir::ShowDataDirCommand;
