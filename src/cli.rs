//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(name = "userlist", version, about = "Browse the users of a REST endpoint")]
pub struct Cli {
    /// Config file (default: ~/.config/userlist/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print render modes as plain text until the list settles, then exit
    #[arg(long)]
    pub plain: bool,

    /// Override api.base_url
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Override api.simulated_latency_ms
    #[arg(long, value_name = "MS")]
    pub latency_ms: Option<u64>,
}

impl Cli {
    /// Load the config file, apply flag overrides, validate.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(latency) = self.latency_ms {
            config.api.simulated_latency_ms = latency;
        }
    }
}
