//! Type definitions for Hardhat Ignition deployment manifests
//!
//! Ignition writes one JSON manifest per deployed module. The schema is open:
//! besides the fields we care about, manifests carry whatever extra metadata
//! the Ignition version that produced them chose to record. Unknown fields are
//! collected into a flattened bag so a manifest round-trips losslessly.

use std::collections::HashMap;

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

/// A deployment manifest written by Hardhat Ignition for one module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentManifest {
    /// Module identifier, e.g. "CounterModule"
    pub id: String,
    /// Deployed contracts keyed by contract name
    #[serde(default)]
    pub contracts: HashMap<String, ContractRecord>,
    /// Fields this version of ember does not interpret
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl DeploymentManifest {
    /// Look up a contract record by name (case-sensitive exact match).
    pub fn contract(&self, name: &str) -> Option<&ContractRecord> {
        self.contracts.get(name)
    }
}

/// One deployed contract instance within a manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRecord {
    /// Deployed address as written by Ignition; may be empty in partial runs
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub contract_name: String,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl ContractRecord {
    /// The deployed address, or `None` when the field is empty.
    pub fn address(&self) -> Option<&str> {
        if self.address.is_empty() {
            None
        } else {
            Some(&self.address)
        }
    }

    /// The address parsed into an [`Address`], when present and well-formed.
    pub fn parsed_address(&self) -> Option<Address> {
        self.address()?.parse().ok()
    }
}
