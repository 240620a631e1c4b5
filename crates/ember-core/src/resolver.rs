//! Address resolution over deployment manifests
//!
//! The resolver answers one question: is this contract already deployed on
//! this network, and if so, at what address? Every failure mode along the way
//! (no manifest, unknown contract, empty address field) normalizes to "not
//! deployed" so callers only ever branch on presence.

use std::collections::BTreeMap;

use crate::manifest::DeploymentManifest;
use crate::reader::ManifestReader;

/// Resolves contract addresses from Ignition deployment manifests.
#[derive(Debug, Clone, Default)]
pub struct AddressResolver {
    reader: ManifestReader,
}

impl AddressResolver {
    /// Create a resolver over the given manifest reader.
    pub fn new(reader: ManifestReader) -> Self {
        Self { reader }
    }

    /// The underlying manifest reader.
    pub fn reader(&self) -> &ManifestReader {
        &self.reader
    }

    /// Read the full manifest for a module, if one exists.
    pub fn manifest(&self, module: &str, network: &str) -> Option<DeploymentManifest> {
        self.reader.read(module, network)
    }

    /// Get the deployed address of one contract within a module.
    ///
    /// Returns `None` when the manifest is absent, the contract name is not
    /// in it, or the recorded address is empty. Never panics or errors.
    pub fn address_of(&self, module: &str, contract: &str, network: &str) -> Option<String> {
        let manifest = self.reader.read(module, network)?;
        let record = manifest.contract(contract)?;
        record.address().map(str::to_string)
    }

    /// Get all deployed addresses within a module, keyed by contract name.
    ///
    /// Contracts without a recorded address are skipped. Always returns a
    /// map; an absent manifest yields an empty one.
    pub fn all_addresses(&self, module: &str, network: &str) -> BTreeMap<String, String> {
        let Some(manifest) = self.reader.read(module, network) else {
            return BTreeMap::new();
        };

        manifest
            .contracts
            .iter()
            .filter_map(|(name, record)| {
                record.address().map(|addr| (name.clone(), addr.to_string()))
            })
            .collect()
    }
}
