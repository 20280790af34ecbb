//! Logging infrastructure for the plugdev library.
//!
//! User-facing diagnostics go to stderr through [`Logger`], tagged with the
//! crate name and a category naming the operation that produced them, e.g.
//! `WARN:plugdev:fetch_project_root: ...`. Internal traces use the `log`
//! facade instead.

use std::env;
use std::fmt;

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "PLUGDEV_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use plugdev::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Normal output level (errors and warnings).
    Normal,
    /// Verbose output (errors, warnings, info, and debug messages).
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use plugdev::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("loud").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// A stderr logger scoped to a category.
///
/// # Examples
///
/// ```
/// use plugdev::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal).category("validate_package_name");
/// logger.error("\"my app\" is not a valid package name");
/// assert_eq!(
///     logger.format_line("ERROR", "boom"),
///     "ERROR:plugdev:validate_package_name: boom"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    level: LogLevel,
    category: Option<String>,
}

impl Logger {
    /// Creates a new uncategorized logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self {
            level,
            category: None,
        }
    }

    /// Returns a copy of this logger tagged with `category`.
    #[must_use]
    pub fn category(&self, category: impl Into<String>) -> Self {
        Self {
            level: self.level,
            category: Some(category.into()),
        }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Renders one log line without writing it.
    #[must_use]
    pub fn format_line(&self, tag: &str, message: &str) -> String {
        match &self.category {
            Some(category) => format!("{tag}:plugdev:{category}: {message}"),
            None => format!("{tag}:plugdev: {message}"),
        }
    }

    /// Logs an error message. Suppressed only at Quiet.
    pub fn error(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("{}", self.format_line("ERROR", message));
        }
    }

    /// Logs a warning message. Suppressed only at Quiet.
    pub fn warn(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("{}", self.format_line("WARN", message));
        }
    }

    /// Logs an informational message (Verbose only).
    pub fn info(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("{}", self.format_line("INFO", message));
        }
    }

    /// Logs a debug message (Verbose only).
    pub fn debug(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("{}", self.format_line("DEBUG", message));
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Initializes a logger based on CLI flags and the environment.
///
/// The priority order is:
/// 1. CLI flags (`verbose` wins over `quiet`)
/// 2. `PLUGDEV_LOG_MODE` environment variable
/// 3. Default (Normal)
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    if let Ok(env_value) = env::var(LOG_MODE_ENV) {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Normal)
}
