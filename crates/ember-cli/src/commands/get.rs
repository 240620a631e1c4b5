//! Get one deployed contract address

use std::path::PathBuf;

use clap::Args;
use color_eyre::eyre::{eyre, Result};
use ember_core::{AddressResolver, ManifestReader, DEFAULT_NETWORK};

use crate::config::EmberConfig;

/// Get the deployed address of a contract in a module
#[derive(Args)]
pub struct GetCommand {
    /// Ignition module name, e.g. "CounterModule"
    pub module: String,

    /// Contract name within the module, e.g. "Counter"
    pub contract: String,

    /// Network name
    #[arg(long, default_value = DEFAULT_NETWORK)]
    pub network: String,

    /// Path to the ignition directory (overrides ember.toml)
    #[arg(long)]
    pub root: Option<PathBuf>,
}

impl GetCommand {
    pub fn run(self) -> Result<()> {
        let config = EmberConfig::load()?;
        let dir = config.ignition_dir(self.root.as_deref());
        let resolver = AddressResolver::new(ManifestReader::with_dir(dir));

        match resolver.address_of(&self.module, &self.contract, &self.network) {
            Some(address) => {
                // Just print the address for easy scripting: $(ember get CounterModule Counter)
                println!("{address}");
                Ok(())
            }
            None => Err(eyre!(
                "No deployment found for contract '{}' in module '{}' on network '{}'",
                self.contract,
                self.module,
                self.network
            )),
        }
    }
}
