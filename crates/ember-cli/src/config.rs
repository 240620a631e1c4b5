use std::path::{Path, PathBuf};

use color_eyre::eyre::{eyre, Result};
use ember_core::IgnitionDir;
use serde::Deserialize;

const EMBER_CONFIG: &str = "ember.toml";

/// Optional project configuration (ember.toml)
///
/// Hardhat projects can relocate the ignition directory via their JS config,
/// which we cannot read. An `ember.toml` next to the project records the same
/// override for this tool. Absent file means all defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmberConfig {
    /// Path to the ignition directory, relative to the working directory
    #[serde(default)]
    pub ignition: Option<PathBuf>,
}

impl EmberConfig {
    /// Load configuration from ember.toml in the current directory, if present.
    pub fn load() -> Result<Self> {
        let path = Path::new(EMBER_CONFIG);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|_| eyre!("Could not read {}", path.display()))?;

        let config: EmberConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve the ignition directory: a CLI flag wins over ember.toml,
    /// which wins over the conventional `ignition/` location.
    pub fn ignition_dir(&self, root_flag: Option<&Path>) -> IgnitionDir {
        match root_flag {
            Some(root) => IgnitionDir::at(root),
            None => match &self.ignition {
                Some(path) => IgnitionDir::at(path.clone()),
                None => IgnitionDir::new(),
            },
        }
    }
}
