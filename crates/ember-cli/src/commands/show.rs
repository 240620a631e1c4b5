//! Print the raw deployment manifest

use std::path::PathBuf;

use clap::Args;
use color_eyre::eyre::{eyre, Result};
use ember_core::{AddressResolver, ManifestReader, DEFAULT_NETWORK};

use crate::config::EmberConfig;

/// Print the full deployment manifest for a module
#[derive(Args)]
pub struct ShowCommand {
    /// Ignition module name, e.g. "CounterModule"
    pub module: String,

    /// Network name
    #[arg(long, default_value = DEFAULT_NETWORK)]
    pub network: String,

    /// Path to the ignition directory (overrides ember.toml)
    #[arg(long)]
    pub root: Option<PathBuf>,
}

impl ShowCommand {
    pub fn run(self) -> Result<()> {
        let config = EmberConfig::load()?;
        let dir = config.ignition_dir(self.root.as_deref());
        let resolver = AddressResolver::new(ManifestReader::with_dir(dir));

        let manifest = resolver
            .manifest(&self.module, &self.network)
            .ok_or_else(|| {
                eyre!(
                    "No manifest found for module '{}' on network '{}'",
                    self.module,
                    self.network
                )
            })?;

        println!("{}", serde_json::to_string_pretty(&manifest)?);
        Ok(())
    }
}
