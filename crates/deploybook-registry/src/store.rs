//! Address store backend trait and JSON file implementation.
//!
//! The `AddressStore` trait abstracts over record storage backends. The
//! `JsonFileStore` persists all records in a single JSON file mapping each
//! contract name to its ordered address list:
//!
//! ```text
//! {
//!   "Migrations": ["0x1f8a…"],
//!   "Token": ["0xAAA…", "0xBBB…"]
//! }
//! ```
//!
//! Records are append-only. A store is bound to one file at construction;
//! the location never changes over its lifetime.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{RegistryError, Result};

/// Abstract address record storage.
///
/// Implementations own the mapping from contract name to its ordered,
/// append-only address sequence.
pub trait AddressStore {
    /// Append an address to the named record, returning the new entry's
    /// zero-based index.
    fn append(&self, name: &str, address: &str) -> Result<usize>;

    /// Fetch the address at `index` within the named record.
    ///
    /// Fails when the name has no record or the index is out of range.
    fn address_at(&self, name: &str, index: usize) -> Result<String>;

    /// Fetch all addresses recorded for a name, in insertion order.
    ///
    /// A name with no record yields an empty vector.
    fn addresses(&self, name: &str) -> Result<Vec<String>>;
}

/// An address store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    /// Record file location, fixed at construction.
    path: PathBuf,
}

type Records = BTreeMap<String, Vec<String>>;

impl JsonFileStore {
    /// Create a store bound to the given record file.
    pub fn new(path: PathBuf) -> Self {
        JsonFileStore { path }
    }

    /// Get the record file location of this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full record map. A missing file reads as empty.
    fn read_records(&self) -> Result<Records> {
        if !self.path.is_file() {
            return Ok(Records::new());
        }
        let data =
            std::fs::read_to_string(&self.path).map_err(|e| RegistryError::StoreUnavailable {
                path: self.path.clone(),
                detail: format!("reading records: {e}"),
            })?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Write the full record map, creating parent directories as needed.
    fn write_records(&self, records: &Records) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| RegistryError::StoreUnavailable {
                path: parent.to_path_buf(),
                detail: format!("creating record dir: {e}"),
            })?;
        }
        let data = serde_json::to_string_pretty(records)?;
        std::fs::write(&self.path, data).map_err(|e| RegistryError::StoreUnavailable {
            path: self.path.clone(),
            detail: format!("writing records: {e}"),
        })
    }
}

impl AddressStore for JsonFileStore {
    fn append(&self, name: &str, address: &str) -> Result<usize> {
        let mut records = self.read_records()?;
        let entry = records.entry(name.to_string()).or_default();
        entry.push(address.to_string());
        let index = entry.len() - 1;
        self.write_records(&records)?;
        Ok(index)
    }

    fn address_at(&self, name: &str, index: usize) -> Result<String> {
        let records = self.read_records()?;
        let entry = records
            .get(name)
            .ok_or_else(|| RegistryError::ContractNotFound {
                name: name.to_string(),
            })?;
        entry
            .get(index)
            .cloned()
            .ok_or_else(|| RegistryError::IndexOutOfRange {
                name: name.to_string(),
                index,
                len: entry.len(),
            })
    }

    fn addresses(&self, name: &str) -> Result<Vec<String>> {
        let records = self.read_records()?;
        Ok(records.get(name).cloned().unwrap_or_default())
    }
}
