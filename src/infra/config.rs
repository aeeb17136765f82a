use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cli::{AppContext, InitArgs};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Valid namespace literals for `--namespace` validation.
    ///
    /// The Gene Ontology ships exactly three, but other OBO ontologies
    /// define their own, so the vocabulary is configuration rather than
    /// a hard-coded set.
    #[serde(default = "default_namespaces")]
    pub namespaces: Vec<String>,
}

fn default_namespaces() -> Vec<String> {
    vec![
        "biological_process".to_string(),
        "molecular_function".to_string(),
        "cellular_component".to_string(),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespaces: default_namespaces(),
        }
    }
}

impl Config {
    pub fn is_valid_namespace(&self, ns: &str) -> bool {
        self.namespaces.iter().any(|valid| valid == ns)
    }
}

pub fn load_config() -> Result<Config> {
    let mut builder = config::Config::builder();

    // Load from config files in priority order
    let config_paths = ["gobo.toml", "gobo.yaml", "gobo.json", ".gobo.toml"];

    for path in &config_paths {
        if Path::new(path).exists() {
            debug!("loading configuration from {path}");
            builder = builder.add_source(config::File::with_name(path));
            break;
        }
    }

    // Add environment variables with GOBO_ prefix; namespaces is a
    // comma-separated list (GOBO_NAMESPACES=a,b,c)
    builder = builder.add_source(
        config::Environment::with_prefix("GOBO")
            .separator("_")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("namespaces"),
    );

    let cfg = builder.build().context("Failed to load configuration")?;
    let parsed: Config = cfg
        .try_deserialize()
        .context("Failed to parse configuration")?;

    Ok(parsed)
}

/// A broken `gobo.toml` or env override should be visible, not silently
/// replaced by the built-in defaults.
pub fn load_config_or_default() -> Config {
    match load_config() {
        Ok(config) => config,
        Err(e) => {
            warn!("falling back to default configuration: {e:#}");
            Config::default()
        }
    }
}

pub fn init(args: InitArgs, ctx: &AppContext) -> Result<()> {
    let config_path = args.path.join("gobo.toml");

    if config_path.exists() && !args.force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let config = Config::default();
    let toml_string =
        toml::to_string_pretty(&config).context("Failed to serialize default config")?;

    std::fs::write(&config_path, toml_string).context("Failed to write config file")?;

    if !ctx.quiet {
        println!("Created config file at {}", config_path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_vocabulary_is_the_three_go_namespaces() {
        let config = Config::default();
        assert!(config.is_valid_namespace("biological_process"));
        assert!(config.is_valid_namespace("molecular_function"));
        assert!(config.is_valid_namespace("cellular_component"));
        assert!(!config.is_valid_namespace("bp"));
        assert!(!config.is_valid_namespace("Biological_Process"));
    }
}
