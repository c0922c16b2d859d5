//! Compiled artifact storage and resolution.
//!
//! Artifacts are the Hardhat-format JSON files an external compiler toolchain
//! produced; this tool consumes them and never compiles anything itself.
//! Resolution understands both a flat layout (`artifacts/Bridge.json`) and
//! the nested Hardhat layout (`artifacts/contracts/Bridge.sol/Bridge.json`).

use alloy::json_abi::JsonAbi;
use alloy::primitives::Bytes;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while locating or parsing artifacts.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// No artifact with the requested contract name exists under the store.
    #[error("Artifact for contract '{0}' not found")]
    NotFound(String),

    /// The artifact file could not be read.
    #[error("Failed to read artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The artifact file is not valid artifact JSON.
    #[error("Malformed artifact {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The artifact carries no creation bytecode (interface or abstract
    /// contract), so there is nothing to deploy.
    #[error("Contract '{0}' has no creation bytecode and cannot be deployed")]
    NoBytecode(String),
}

/// A compiled contract artifact (Hardhat format, unknown fields ignored).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// Contract name as recorded by the compiler.
    pub contract_name: String,

    /// Contract ABI.
    pub abi: JsonAbi,

    /// Creation bytecode; `0x` for interfaces and abstract contracts.
    pub bytecode: Bytes,
}

/// Artifact directory handle resolving contracts by name.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    /// Create a store rooted at the configured artifact directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory this store scans.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a contract by name to its parsed artifact.
    pub fn resolve(&self, contract_name: &str) -> Result<Artifact, ArtifactError> {
        let path = self
            .find(contract_name)
            .ok_or_else(|| ArtifactError::NotFound(contract_name.to_string()))?;

        tracing::debug!(contract = contract_name, path = %path.display(), "Resolved artifact");
        Self::parse_file(&path)
    }

    /// Locate the artifact file for a contract, if present.
    pub fn find(&self, contract_name: &str) -> Option<PathBuf> {
        let file_name = format!("{}.json", contract_name);

        // Flat layout first.
        let flat = self.root.join(&file_name);
        if flat.is_file() {
            return Some(flat);
        }

        Self::search_dir(&self.root, &file_name)
    }

    fn search_dir(dir: &Path, file_name: &str) -> Option<PathBuf> {
        let entries = fs::read_dir(dir).ok()?;
        let mut subdirs = Vec::new();

        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                subdirs.push(path);
            } else if path.file_name().is_some_and(|n| n == file_name) {
                // Hardhat writes debug artifacts alongside (`Name.dbg.json`);
                // exact file-name match already excludes them.
                return Some(path);
            }
        }

        subdirs.into_iter().find_map(|sub| Self::search_dir(&sub, file_name))
    }

    fn parse_file(path: &Path) -> Result<Artifact, ArtifactError> {
        let content = fs::read_to_string(path)
            .map_err(|source| ArtifactError::Io { path: path.to_path_buf(), source })?;

        serde_json::from_str(&content)
            .map_err(|source| ArtifactError::Malformed { path: path.to_path_buf(), source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_artifact(dir: &Path, name: &str, bytecode: &str) {
        let json = format!(
            r#"{{"contractName":"{name}","abi":[],"bytecode":"{bytecode}"}}"#
        );
        fs::write(dir.join(format!("{name}.json")), json).unwrap();
    }

    #[test]
    fn test_flat_layout_resolution() {
        let tmp = tempfile::tempdir().unwrap();
        write_artifact(tmp.path(), "Bridge", "0x6080");

        let store = ArtifactStore::new(tmp.path());
        let artifact = store.resolve("Bridge").unwrap();
        assert_eq!(artifact.contract_name, "Bridge");
        assert_eq!(artifact.bytecode.as_ref(), &[0x60, 0x80]);
    }

    #[test]
    fn test_hardhat_layout_resolution() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("contracts").join("TokenAsset.sol");
        fs::create_dir_all(&nested).unwrap();
        write_artifact(&nested, "TokenAsset", "0x6001600101");

        let store = ArtifactStore::new(tmp.path());
        let artifact = store.resolve("TokenAsset").unwrap();
        assert_eq!(artifact.contract_name, "TokenAsset");
    }

    #[test]
    fn test_missing_artifact() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(tmp.path());
        let err = store.resolve("Bridge").unwrap_err();
        assert!(matches!(err, ArtifactError::NotFound(_)));
        assert!(err.to_string().contains("Bridge"));
    }

    #[test]
    fn test_malformed_artifact() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("Bridge.json"), "not json").unwrap();

        let store = ArtifactStore::new(tmp.path());
        let err = store.resolve("Bridge").unwrap_err();
        assert!(matches!(err, ArtifactError::Malformed { .. }));
    }

    #[test]
    fn test_debug_artifact_not_picked_up() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("Bridge.dbg.json"), "{}").unwrap();

        let store = ArtifactStore::new(tmp.path());
        assert!(store.find("Bridge").is_none());
    }
}
