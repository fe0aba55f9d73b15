//! `deploybook.toml` manifest parsing and project path configuration.
//!
//! A project manifest names three locations: the contract source
//! directory, the build-artifact directory, and the address-record file.
//! All three default to conventional values and are resolved relative to
//! the directory containing the manifest. The manifest is read once at
//! initialization; the resulting [`ProjectPaths`] never changes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Manifest file name searched for by [`ProjectConfig::find_and_load`].
pub const MANIFEST_NAME: &str = "deploybook.toml";

/// The top-level manifest structure for a Deploybook project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project path configuration.
    #[serde(default)]
    pub paths: PathsConfig,
}

/// The `[paths]` section of the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Contract source directory.
    #[serde(default = "default_contracts")]
    pub contracts: PathBuf,
    /// Build-artifact directory.
    #[serde(default = "default_artifacts")]
    pub artifacts: PathBuf,
    /// Address-record storage file.
    #[serde(default = "default_addresses")]
    pub addresses: PathBuf,
}

fn default_contracts() -> PathBuf {
    PathBuf::from("contracts")
}

fn default_artifacts() -> PathBuf {
    PathBuf::from("build/contracts")
}

fn default_addresses() -> PathBuf {
    PathBuf::from("addresses.json")
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            contracts: default_contracts(),
            artifacts: default_artifacts(),
            addresses: default_addresses(),
        }
    }
}

/// Fully resolved project paths, anchored at the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    /// Contract source directory.
    pub contracts: PathBuf,
    /// Build-artifact directory.
    pub artifacts: PathBuf,
    /// Address-record storage file.
    pub addresses: PathBuf,
}

impl ProjectConfig {
    /// Parse a manifest from a TOML string.
    pub fn parse(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Load a manifest from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Search upward from `start_dir` for a `deploybook.toml` file, parse
    /// and return it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(MANIFEST_NAME);
            if candidate.is_file() {
                let config = Self::load(&candidate)?;
                return Ok(Some((config, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Resolve the configured paths relative to the project root.
    ///
    /// Absolute entries are kept as-is.
    pub fn resolved(&self, root: &Path) -> ProjectPaths {
        ProjectPaths {
            contracts: anchor(root, &self.paths.contracts),
            artifacts: anchor(root, &self.paths.artifacts),
            addresses: anchor(root, &self.paths.addresses),
        }
    }

    /// Generate the default manifest template for a new project.
    pub fn template() -> String {
        r#"[paths]
contracts = "contracts"
artifacts = "build/contracts"
addresses = "addresses.json"
"#
        .to_string()
    }
}

fn anchor(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_manifest() {
        let toml_str = r#"
[paths]
contracts = "src/contracts"
artifacts = "out"
addresses = "deployed/addresses.json"
"#;
        let config = ProjectConfig::parse(toml_str).unwrap();
        assert_eq!(config.paths.contracts, PathBuf::from("src/contracts"));
        assert_eq!(config.paths.artifacts, PathBuf::from("out"));
        assert_eq!(
            config.paths.addresses,
            PathBuf::from("deployed/addresses.json")
        );
    }

    #[test]
    fn parse_empty_manifest_uses_defaults() {
        let config = ProjectConfig::parse("").unwrap();
        assert_eq!(config.paths.contracts, PathBuf::from("contracts"));
        assert_eq!(config.paths.artifacts, PathBuf::from("build/contracts"));
        assert_eq!(config.paths.addresses, PathBuf::from("addresses.json"));
    }

    #[test]
    fn partial_paths_section_fills_defaults() {
        let toml_str = r#"
[paths]
addresses = "registry.json"
"#;
        let config = ProjectConfig::parse(toml_str).unwrap();
        assert_eq!(config.paths.contracts, PathBuf::from("contracts"));
        assert_eq!(config.paths.addresses, PathBuf::from("registry.json"));
    }

    #[test]
    fn reject_invalid_toml() {
        assert!(ProjectConfig::parse("this is not valid toml [[[").is_err());
    }

    #[test]
    fn resolved_anchors_relative_paths() {
        let config = ProjectConfig::parse("").unwrap();
        let paths = config.resolved(Path::new("/project"));
        assert_eq!(paths.contracts, PathBuf::from("/project/contracts"));
        assert_eq!(paths.addresses, PathBuf::from("/project/addresses.json"));
    }

    #[test]
    fn resolved_keeps_absolute_paths() {
        let toml_str = r#"
[paths]
addresses = "/var/lib/deploybook/addresses.json"
"#;
        let config = ProjectConfig::parse(toml_str).unwrap();
        let paths = config.resolved(Path::new("/project"));
        assert_eq!(
            paths.addresses,
            PathBuf::from("/var/lib/deploybook/addresses.json")
        );
    }

    #[test]
    fn find_and_load_in_current_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(MANIFEST_NAME),
            "[paths]\naddresses = \"here.json\"\n",
        )
        .unwrap();

        let (config, root) = ProjectConfig::find_and_load(dir.path()).unwrap().unwrap();
        assert_eq!(config.paths.addresses, PathBuf::from("here.json"));
        assert_eq!(root, dir.path());
    }

    #[test]
    fn find_and_load_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_NAME), "").unwrap();

        let nested = dir.path().join("contracts").join("tokens");
        std::fs::create_dir_all(&nested).unwrap();

        let (_, root) = ProjectConfig::find_and_load(&nested).unwrap().unwrap();
        assert_eq!(root, dir.path());
    }

    #[test]
    fn template_is_valid_toml() {
        let config = ProjectConfig::parse(&ProjectConfig::template()).unwrap();
        assert_eq!(config.paths.contracts, PathBuf::from("contracts"));
    }
}
