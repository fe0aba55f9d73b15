//! Deployed contract address registry for Deploybook projects.
//!
//! Tracks, per contract name, the ordered list of addresses that contract
//! has been deployed to. Records are append-only and persisted through an
//! [`AddressStore`] backend; the default backend keeps them in a single
//! JSON file inside the project tree.
//!
//! # Architecture
//!
//! - [`ProjectConfig`] reads the `deploybook.toml` manifest and resolves
//!   the project's contract, artifact, and address-record paths.
//! - [`AddressStore`] abstracts over record storage; [`JsonFileStore`] is
//!   the filesystem implementation.
//! - [`ContractRegistry`] is the facade callers use: `set`, `get`,
//!   `get_all`, keyed by contract name.

pub mod config;
pub mod error;
pub mod registry;
pub mod store;

// Re-exports for convenience.
pub use config::{PathsConfig, ProjectConfig, ProjectPaths};
pub use error::{RegistryError, Result};
pub use registry::ContractRegistry;
pub use store::{AddressStore, JsonFileStore};
