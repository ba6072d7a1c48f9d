use crate::config::{NodeConfig, TomlConfig};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "terminal-input")]
#[command(about = "Terminal input node; must be started by its dataflow runtime")]
pub struct CliConfig {
    /// Node identifier, used in logs and error reports.
    #[arg(long)]
    pub name: Option<String>,

    /// Environment variable the runtime uses to hand over the node context.
    #[arg(long)]
    pub context_var: Option<String>,

    /// TOML file with `[node]`, `[runtime]` and `[logging]` sections.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_parser = ["compact", "json"])]
    pub log_format: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn resolve(&self) -> Result<NodeConfig> {
        let mut config = NodeConfig::default();

        if let Some(path) = &self.config {
            let file = TomlConfig::from_file(path)?;
            config = config.merge_toml(&file);
        }
        if let Some(name) = &self.name {
            config.name = name.clone();
        }
        if let Some(var) = &self.context_var {
            config.context_var = var.clone();
        }
        if let Some(format) = &self.log_format {
            config.log_format = format.clone();
        }

        config.validate()?;
        Ok(config)
    }
}
