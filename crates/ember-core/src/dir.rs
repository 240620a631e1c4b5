//! Ignition directory management
//!
//! The [`IgnitionDir`] struct locates the `ignition/` directory that Hardhat
//! Ignition writes its deployment journal into.

use std::path::{Path, PathBuf};

/// Points at the `ignition/` directory of a Hardhat project.
///
/// Ignition stores one manifest per deployed module under
/// `ignition/deployments/{network}/{module}.json`. This type only computes
/// paths; it never creates or writes anything under the directory.
#[derive(Debug, Clone)]
pub struct IgnitionDir {
    path: PathBuf,
}

impl IgnitionDir {
    /// The conventional directory name in a Hardhat project
    pub const NAME: &str = "ignition";

    /// Create an `IgnitionDir` pointing to `ignition/` in the current directory.
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(Self::NAME),
        }
    }

    /// Create an `IgnitionDir` at a custom location.
    pub fn at<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Get the path to the ignition directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the path to the deployments subdirectory.
    pub fn deployments_path(&self) -> PathBuf {
        self.path.join("deployments")
    }

    /// Compute the manifest path for a module deployed to a network.
    pub fn manifest_path(&self, network: &str, module: &str) -> PathBuf {
        self.deployments_path()
            .join(network)
            .join(format!("{module}.json"))
    }

    /// Check if the ignition directory exists.
    pub fn exists(&self) -> bool {
        self.path.is_dir()
    }
}

impl Default for IgnitionDir {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Path> for IgnitionDir {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}
