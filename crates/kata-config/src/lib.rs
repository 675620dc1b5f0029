//! Kata Configuration
//!
//! Project-level settings for the `kata` command, stored in `kata.toml`:
//!
//! ```toml
//! [scaffold]
//! dir = "src/bin"
//! author = "Ada"
//! ```
//!
//! The file is optional. It is looked up in the starting directory and then
//! in every ancestor; the first one found wins.
//!
//! # Example
//!
//! ```no_run
//! use kata_config::ConfigLoader;
//! use std::path::Path;
//!
//! let config = ConfigLoader::new().load_from_directory(Path::new(".")).unwrap();
//! println!("{}", config.project.scaffold_dir().display());
//! ```

pub mod loader;
pub mod project;

use std::path::PathBuf;
use thiserror::Error;

/// File name of the project configuration
pub const CONFIG_FILE: &str = "kata.toml";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax in {file}: {error}")]
    TomlParseError {
        file: PathBuf,
        error: toml::de::Error,
    },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

pub use loader::{Config, ConfigLoader};
pub use project::{ProjectConfig, ScaffoldConfig};
