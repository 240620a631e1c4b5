//! List all deployed addresses in a module

use std::path::PathBuf;

use clap::Args;
use color_eyre::eyre::Result;
use console::style;
use ember_core::{AddressResolver, ManifestReader, DEFAULT_NETWORK};

use crate::config::EmberConfig;

/// List all deployed addresses in a module
#[derive(Args)]
pub struct ListCommand {
    /// Ignition module name, e.g. "CounterModule"
    pub module: String,

    /// Network name
    #[arg(long, default_value = DEFAULT_NETWORK)]
    pub network: String,

    /// Path to the ignition directory (overrides ember.toml)
    #[arg(long)]
    pub root: Option<PathBuf>,
}

impl ListCommand {
    pub fn run(self) -> Result<()> {
        let config = EmberConfig::load()?;
        let dir = config.ignition_dir(self.root.as_deref());
        let resolver = AddressResolver::new(ManifestReader::with_dir(dir));

        let addresses = resolver.all_addresses(&self.module, &self.network);

        if addresses.is_empty() {
            println!(
                "No deployments found for module '{}' on network '{}'.",
                self.module, self.network
            );
            println!(
                "Run your Ignition deployment first, or pass {} to look elsewhere.",
                style("--network").yellow()
            );
            return Ok(());
        }

        // Print table header
        println!("{:<30} {:<44}", "Contract", "Address");
        println!("{}", "-".repeat(74));

        for (contract, address) in &addresses {
            println!("{contract:<30} {address:<44}");
        }

        println!();
        println!("Total: {} contract(s)", addresses.len());

        Ok(())
    }
}
