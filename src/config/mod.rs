#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::NodeSettings;
use crate::utils::error::Result;
use crate::utils::logger::{LOG_FORMATS, LOG_LEVELS};
use crate::utils::validation::{
    validate_env_var_name, validate_non_empty_string, validate_one_of, Validate,
};

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

pub const DEFAULT_NODE_NAME: &str = "terminal-input";
/// Set by the dataflow daemon for every node it spawns.
pub const DEFAULT_CONTEXT_VAR: &str = "DORA_NODE_CONFIG";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_FORMAT: &str = "compact";

/// Fully resolved node settings: defaults, then config file, then CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeConfig {
    pub name: String,
    pub context_var: String,
    pub log_level: String,
    pub log_format: String,
}

impl NodeConfig {
    pub fn new(name: impl Into<String>, context_var: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            context_var: context_var.into(),
            ..Self::default()
        }
    }

    /// Overlays every value the file sets.
    pub fn merge_toml(mut self, file: &TomlConfig) -> Self {
        if let Some(name) = file.node.as_ref().and_then(|n| n.name.clone()) {
            self.name = name;
        }
        if let Some(var) = file.runtime.as_ref().and_then(|r| r.context_var.clone()) {
            self.context_var = var;
        }
        if let Some(logging) = &file.logging {
            if let Some(level) = &logging.level {
                self.log_level = level.clone();
            }
            if let Some(format) = &logging.format {
                self.log_format = format.clone();
            }
        }
        self
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NODE_NAME.to_string(),
            context_var: DEFAULT_CONTEXT_VAR.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl NodeSettings for NodeConfig {
    fn node_name(&self) -> &str {
        &self.name
    }

    fn context_var(&self) -> &str {
        &self.context_var
    }
}

impl Validate for NodeConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("node.name", &self.name)?;
        validate_env_var_name("runtime.context_var", &self.context_var)?;
        validate_one_of("logging.level", &self.log_level, &LOG_LEVELS)?;
        validate_one_of("logging.format", &self.log_format, &LOG_FORMATS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = NodeConfig::default();
        assert_eq!(config.node_name(), "terminal-input");
        assert_eq!(config.context_var(), "DORA_NODE_CONFIG");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_merge_toml_overrides_only_set_fields() {
        let file = TomlConfig::from_toml_str(
            r#"
[runtime]
context_var = "ALT_NODE_CONFIG"

[logging]
format = "json"
"#,
        )
        .unwrap();

        let config = NodeConfig::default().merge_toml(&file);
        assert_eq!(config.name, "terminal-input");
        assert_eq!(config.context_var, "ALT_NODE_CONFIG");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, "json");
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = NodeConfig::new("", "DORA_NODE_CONFIG");
        assert!(config.validate().is_err());

        let config = NodeConfig::new("terminal-input", "NOT A VAR");
        assert!(config.validate().is_err());

        let config = NodeConfig {
            log_format: "xml".to_string(),
            ..NodeConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
