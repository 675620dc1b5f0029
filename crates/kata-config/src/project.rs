//! Project Configuration (kata.toml)

use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Directory solutions are written to when nothing else is configured
pub const DEFAULT_SCAFFOLD_DIR: &str = "src/bin";

/// Project configuration from kata.toml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Solution scaffolding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaffold: Option<ScaffoldConfig>,
}

/// Solution scaffolding settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ScaffoldConfig {
    /// Directory for generated solutions, relative to the project root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// Author credited in generated files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl ProjectConfig {
    /// Load project configuration from a file
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::IoError(e)
            }
        })?;

        Self::parse(&content, path)
    }

    /// Parse configuration text; `path` is only used in error messages
    pub fn parse(content: &str, path: &Path) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::TomlParseError {
            file: path.to_path_buf(),
            error: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the project configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let Some(scaffold) = &self.scaffold else {
            return Ok(());
        };

        if let Some(dir) = &scaffold.dir {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "scaffold.dir".to_string(),
                    reason: "directory cannot be empty".to_string(),
                });
            }
            if dir.is_absolute() || dir.components().any(|c| c == Component::ParentDir) {
                return Err(ConfigError::InvalidValue {
                    field: "scaffold.dir".to_string(),
                    reason: format!("'{}' must stay inside the project", dir.display()),
                });
            }
        }

        if let Some(author) = &scaffold.author {
            if author.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "scaffold.author".to_string(),
                    reason: "author cannot be blank".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Directory for generated solutions, relative to the project root
    pub fn scaffold_dir(&self) -> PathBuf {
        self.scaffold
            .as_ref()
            .and_then(|s| s.dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCAFFOLD_DIR))
    }

    /// Author credited in generated files, if configured
    pub fn author(&self) -> Option<&str> {
        self.scaffold.as_ref().and_then(|s| s.author.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn parse(content: &str) -> ConfigResult<ProjectConfig> {
        ProjectConfig::parse(content, Path::new("kata.toml"))
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config, ProjectConfig::default());
        assert_eq!(config.scaffold_dir(), PathBuf::from("src/bin"));
        assert_eq!(config.author(), None);
    }

    #[test]
    fn test_scaffold_section() {
        let config = parse(
            r#"
[scaffold]
dir = "solutions"
author = "Ada"
"#,
        )
        .unwrap();
        assert_eq!(config.scaffold_dir(), PathBuf::from("solutions"));
        assert_eq!(config.author(), Some("Ada"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = parse("[scaffold]\ncolour = true\n").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParseError { .. }));
        assert!(err.to_string().contains("kata.toml"));
    }

    #[rstest]
    #[case(r#"dir = """#)]
    #[case(r#"dir = "/abs/path""#)]
    #[case(r#"dir = "../outside""#)]
    #[case(r#"author = "   ""#)]
    fn test_invalid_scaffold_values(#[case] line: &str) {
        let err = parse(&format!("[scaffold]\n{}\n", line)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }), "{}", err);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ProjectConfig::load_from_file(Path::new("/nonexistent/kata.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }
}
