//! The contract address registry facade.
//!
//! Thin layer over an [`AddressStore`] backend: validates the contract
//! name, delegates, and lets store errors propagate unmodified. One
//! registry owns one store instance bound to the project's configured
//! address-record location.

use std::path::Path;

use crate::config::{ProjectConfig, ProjectPaths};
use crate::error::{RegistryError, Result};
use crate::store::{AddressStore, JsonFileStore};

/// Registry of deployed contract addresses for one project.
#[derive(Debug, Clone)]
pub struct ContractRegistry<S = JsonFileStore> {
    paths: ProjectPaths,
    store: S,
}

impl ContractRegistry<JsonFileStore> {
    /// Open the registry for a project: resolve the configured paths
    /// against `root` and bind a JSON file store to the address-record
    /// location.
    pub fn open(config: &ProjectConfig, root: &Path) -> Self {
        let paths = config.resolved(root);
        let store = JsonFileStore::new(paths.addresses.clone());
        ContractRegistry { paths, store }
    }
}

impl<S: AddressStore> ContractRegistry<S> {
    /// Create a registry over an explicit store backend.
    pub fn with_store(paths: ProjectPaths, store: S) -> Self {
        ContractRegistry { paths, store }
    }

    /// Record an address for a contract, returning the new entry's
    /// zero-based index.
    pub fn set(&self, name: &str, address: &str) -> Result<usize> {
        if name.is_empty() {
            return Err(RegistryError::EmptyContractName);
        }
        self.store.append(name, address)
    }

    /// Get a deployed contract address by index.
    pub fn get(&self, name: &str, index: usize) -> Result<String> {
        self.store.address_at(name, index)
    }

    /// Get all deployed addresses of a contract, in recording order.
    ///
    /// A contract with no recorded deployments yields an empty vector.
    pub fn get_all(&self, name: &str) -> Result<Vec<String>> {
        self.store.addresses(name)
    }

    /// Contract source directory for this project.
    pub fn contracts_dir(&self) -> &Path {
        &self.paths.contracts
    }

    /// Build-artifact directory for this project.
    pub fn artifacts_dir(&self) -> &Path {
        &self.paths.artifacts
    }

    /// Address-record storage location for this project.
    pub fn addresses_path(&self) -> &Path {
        &self.paths.addresses
    }
}
