//! Configuration Loader
//!
//! Finds `kata.toml` by walking up from a starting directory.

use crate::project::ProjectConfig;
use crate::{ConfigResult, CONFIG_FILE};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration loader
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Stop the upward search at this directory (inclusive)
    ceiling: Option<PathBuf>,
}

/// Loaded configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Project configuration (defaults when no file was found)
    pub project: ProjectConfig,

    /// Directory containing kata.toml, if one was found
    pub project_root: Option<PathBuf>,
}

impl Config {
    /// Is there a kata.toml backing this configuration?
    pub fn is_project(&self) -> bool {
        self.project_root.is_some()
    }

    /// Scaffold directory resolved against `base`.
    ///
    /// Relative to the project root when a kata.toml was found, to `base`
    /// otherwise.
    pub fn scaffold_dir(&self, base: &Path) -> PathBuf {
        let root = self.project_root.as_deref().unwrap_or(base);
        root.join(self.project.scaffold_dir())
    }
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Do not search above `dir`
    pub fn with_ceiling(mut self, dir: impl Into<PathBuf>) -> Self {
        self.ceiling = Some(dir.into());
        self
    }

    /// Load configuration starting from the given directory
    ///
    /// Walks up the directory tree to find kata.toml. Finding none is not an
    /// error; the defaults apply.
    pub fn load_from_directory(&self, start_dir: &Path) -> ConfigResult<Config> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE);

            if config_path.is_file() {
                debug!(path = %config_path.display(), "loading project config");
                let project = ProjectConfig::load_from_file(&config_path)?;
                return Ok(Config {
                    project,
                    project_root: Some(current),
                });
            }

            if self.ceiling.as_deref() == Some(current.as_path()) {
                break;
            }

            // Try parent directory
            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => break,
            }
        }

        debug!(start = %start_dir.display(), "no {} found, using defaults", CONFIG_FILE);
        Ok(Config {
            project: ProjectConfig::default(),
            project_root: None,
        })
    }
}
