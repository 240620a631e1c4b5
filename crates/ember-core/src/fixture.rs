//! Reuse-if-present fixture policy
//!
//! Test fixtures want to bind to a contract the last deployment run already
//! put on chain, and only deploy a fresh instance when nothing is there.
//! [`bind_or_deploy`] implements that decision once so every fixture does not
//! re-implement it: resolve first, fall back to the caller's deploy
//! operation. Against an unchanged manifest the decision is the same on every
//! call.

use crate::resolver::AddressResolver;

/// Outcome of resolving a contract for a fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// An existing deployment was found at this address; no deploy ran.
    Reused(String),
    /// No usable deployment existed; the deploy operation produced this address.
    Deployed(String),
}

impl Binding {
    /// The address to bind to, regardless of how it was obtained.
    pub fn address(&self) -> &str {
        match self {
            Binding::Reused(addr) | Binding::Deployed(addr) => addr,
        }
    }

    /// Whether an existing deployment was reused.
    pub fn is_reused(&self) -> bool {
        matches!(self, Binding::Reused(_))
    }
}

/// Bind to an existing deployment, or run `deploy` to create one.
///
/// `deploy` is only invoked when no address resolves; its error passes
/// through untouched. Resolution itself never fails.
pub fn bind_or_deploy<E>(
    resolver: &AddressResolver,
    module: &str,
    contract: &str,
    network: &str,
    deploy: impl FnOnce() -> Result<String, E>,
) -> Result<Binding, E> {
    match resolver.address_of(module, contract, network) {
        Some(address) => Ok(Binding::Reused(address)),
        None => deploy().map(Binding::Deployed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::ManifestReader;
    use std::fs;

    const ADDRESS: &str = "0x1111111111111111111111111111111111111111";
    const FRESH: &str = "0x3333333333333333333333333333333333333333";

    fn resolver(root: &std::path::Path, with_manifest: bool) -> AddressResolver {
        if with_manifest {
            let dir = root.join("ignition").join("deployments").join("hardhat");
            fs::create_dir_all(&dir).unwrap();
            fs::write(
                dir.join("CounterModule.json"),
                format!(
                    r#"{{
                        "id": "CounterModule",
                        "contracts": {{
                            "Counter": {{ "address": "{ADDRESS}", "contractName": "Counter" }}
                        }}
                    }}"#
                ),
            )
            .unwrap();
        }
        AddressResolver::new(ManifestReader::with_project_root(root))
    }

    #[test]
    fn test_reuses_existing_deployment() {
        let tmp = tempfile::tempdir().unwrap();
        let resolver = resolver(tmp.path(), true);

        let deployed = std::cell::Cell::new(false);
        let binding = bind_or_deploy(&resolver, "CounterModule", "Counter", "hardhat", || {
            deployed.set(true);
            Ok::<_, std::convert::Infallible>(FRESH.to_string())
        })
        .unwrap();

        assert!(!deployed.get(), "deploy must not run when an address resolves");
        assert_eq!(binding, Binding::Reused(ADDRESS.to_string()));
        assert!(binding.is_reused());
        assert_eq!(binding.address(), ADDRESS);
    }

    #[test]
    fn test_deploys_when_absent() {
        let tmp = tempfile::tempdir().unwrap();
        let resolver = resolver(tmp.path(), false);

        let binding = bind_or_deploy(&resolver, "CounterModule", "Counter", "hardhat", || {
            Ok::<_, std::convert::Infallible>(FRESH.to_string())
        })
        .unwrap();

        assert_eq!(binding, Binding::Deployed(FRESH.to_string()));
        assert!(!binding.is_reused());
        assert_eq!(binding.address(), FRESH);
    }

    #[test]
    fn test_deploy_error_passes_through() {
        let tmp = tempfile::tempdir().unwrap();
        let resolver = resolver(tmp.path(), false);

        let result = bind_or_deploy(&resolver, "CounterModule", "Counter", "hardhat", || {
            Err::<String, _>("rpc unreachable")
        });

        assert_eq!(result.unwrap_err(), "rpc unreachable");
    }

    #[test]
    fn test_decision_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let resolver = resolver(tmp.path(), true);

        for _ in 0..2 {
            let binding =
                bind_or_deploy(&resolver, "CounterModule", "Counter", "hardhat", || {
                    Ok::<_, std::convert::Infallible>(FRESH.to_string())
                })
                .unwrap();
            assert_eq!(binding, Binding::Reused(ADDRESS.to_string()));
        }
    }
}
