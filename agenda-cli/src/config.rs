//! Global agenda configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

static DEFAULT_DATA_FILE: &str = "db.json";

fn default_data_file() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("agenda").join(DEFAULT_DATA_FILE))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}

/// Configuration at ~/.config/agenda/config.toml, overridable with
/// `AGENDA_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct AgendaConfig {
    /// Where the snapshot of your events lives
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

impl AgendaConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("agenda");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented default file on first use.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("AGENDA"))
            .build()
            .and_then(|config| config.try_deserialize())
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Snapshot path with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.data_file.to_string_lossy()).into_owned())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> Result<()> {
        let contents = format!(
            "\
# agenda configuration

# Where your events are stored:
# data_file = \"{}\"
",
            default_data_file().display()
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Could not create config directory")?;
        }

        std::fs::write(path, contents).context("Could not write config file")?;

        Ok(())
    }
}
