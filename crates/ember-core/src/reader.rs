//! Manifest reading with an infallible boundary
//!
//! [`ManifestReader::read`] is the surface the resolver builds on: it returns
//! `Some(manifest)` or `None` and nothing else. A manifest that exists but
//! cannot be parsed is reported once through `tracing` and then treated the
//! same as a missing one, so callers fall back to a fresh deployment instead
//! of failing. [`ManifestReader::try_read`] keeps the two cases apart for
//! anyone who needs the distinction.

use std::path::Path;

use crate::dir::IgnitionDir;
use crate::error::Result;
use crate::manifest::DeploymentManifest;

/// Network name used when the caller does not specify one
pub const DEFAULT_NETWORK: &str = "hardhat";

/// Reads Ignition deployment manifests from a configured root directory.
#[derive(Debug, Clone)]
pub struct ManifestReader {
    dir: IgnitionDir,
}

impl ManifestReader {
    /// Create a reader over `ignition/` in the current directory.
    pub fn new() -> Self {
        Self {
            dir: IgnitionDir::new(),
        }
    }

    /// Create a reader over an explicit ignition directory.
    pub fn with_dir(dir: IgnitionDir) -> Self {
        Self { dir }
    }

    /// Create a reader over `ignition/` under the given project root.
    pub fn with_project_root(project_root: &Path) -> Self {
        Self {
            dir: IgnitionDir::at(project_root.join(IgnitionDir::NAME)),
        }
    }

    /// The directory this reader resolves manifests under.
    pub fn dir(&self) -> &IgnitionDir {
        &self.dir
    }

    /// Read the manifest for a module, distinguishing failure from absence.
    ///
    /// Returns `Ok(None)` when no manifest file exists for the pair, and an
    /// error when the file exists but cannot be read or parsed. Exactly one
    /// read attempt is made; nothing is cached.
    pub fn try_read(&self, module: &str, network: &str) -> Result<Option<DeploymentManifest>> {
        let path = self.dir.manifest_path(network, module);
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)?;
        let manifest: DeploymentManifest = serde_json::from_str(&content)?;
        Ok(Some(manifest))
    }

    /// Read the manifest for a module, collapsing failure into absence.
    ///
    /// A malformed or unreadable manifest is logged and reported as `None`,
    /// indistinguishable at the call site from a file that does not exist.
    pub fn read(&self, module: &str, network: &str) -> Option<DeploymentManifest> {
        match self.try_read(module, network) {
            Ok(manifest) => manifest,
            Err(err) => {
                tracing::warn!(
                    module,
                    network,
                    path = %self.dir.manifest_path(network, module).display(),
                    error = %err,
                    "failed to read deployment manifest, treating as not deployed"
                );
                None
            }
        }
    }
}

impl Default for ManifestReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;

    fn write_manifest(root: &Path, network: &str, module: &str, content: &str) {
        let dir = root.join("ignition").join("deployments").join(network);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{module}.json")), content).unwrap();
    }

    #[test]
    fn test_read_missing_manifest_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let reader = ManifestReader::with_project_root(tmp.path());

        assert!(reader.read("CounterModule", DEFAULT_NETWORK).is_none());
        assert!(reader
            .try_read("CounterModule", DEFAULT_NETWORK)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_read_existing_manifest() {
        let tmp = tempfile::tempdir().unwrap();
        write_manifest(
            tmp.path(),
            "hardhat",
            "CounterModule",
            r#"{
                "id": "CounterModule",
                "contracts": {
                    "Counter": {
                        "address": "0x1111111111111111111111111111111111111111",
                        "contractName": "Counter"
                    }
                }
            }"#,
        );

        let reader = ManifestReader::with_project_root(tmp.path());
        let manifest = reader.read("CounterModule", "hardhat").unwrap();

        assert_eq!(manifest.id, "CounterModule");
        assert_eq!(
            manifest.contract("Counter").unwrap().address(),
            Some("0x1111111111111111111111111111111111111111")
        );
    }

    #[test]
    fn test_malformed_manifest_collapses_to_none() {
        let tmp = tempfile::tempdir().unwrap();
        write_manifest(tmp.path(), "hardhat", "BrokenModule", "{ not json");

        let reader = ManifestReader::with_project_root(tmp.path());

        // The boundary hides the failure...
        assert!(reader.read("BrokenModule", "hardhat").is_none());

        // ...while the fallible layer still tells it apart from absence.
        match reader.try_read("BrokenModule", "hardhat") {
            Err(Error::Parse(_)) => {}
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        write_manifest(
            tmp.path(),
            "hardhat",
            "CounterModule",
            r#"{ "id": "CounterModule", "contracts": {} }"#,
        );

        let reader = ManifestReader::with_project_root(tmp.path());
        let first = reader.read("CounterModule", "hardhat").map(|m| m.id);
        let second = reader.read("CounterModule", "hardhat").map(|m| m.id);

        assert_eq!(first, second);
    }

    #[test]
    fn test_networks_are_separate() {
        let tmp = tempfile::tempdir().unwrap();
        write_manifest(
            tmp.path(),
            "sepolia",
            "CounterModule",
            r#"{ "id": "CounterModule", "contracts": {} }"#,
        );

        let reader = ManifestReader::with_project_root(tmp.path());

        assert!(reader.read("CounterModule", "sepolia").is_some());
        assert!(reader.read("CounterModule", "hardhat").is_none());
    }
}
