//! Resolution of compiled contract artifacts by name
//!
//! The registry mirrors the layout the contract toolchain writes: one JSON
//! file per contract, named after the contract, holding its ABI and creation
//! bytecode. Compilation itself happens outside this crate.

use std::{fs, path::PathBuf};

use alloy::json_abi::JsonAbi;
use serde::Deserialize;

use crate::{constants::ARTIFACT_EXTENSION, errors::ScriptError};

/// A compiled contract artifact, as produced by the contract toolchain
#[derive(Clone, Debug, Deserialize)]
pub struct ContractArtifact {
    /// The contract ABI
    pub abi: JsonAbi,
    /// The hex-encoded creation bytecode
    pub bytecode: String,
}

/// Resolves compiled contract artifacts by name from a directory of artifact
/// JSON files
#[derive(Clone, Debug)]
pub struct ArtifactRegistry {
    /// The directory containing the artifact JSON files
    dir: PathBuf,
}

impl ArtifactRegistry {
    /// Create a registry over the given artifacts directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Resolve the artifact for the given contract name
    ///
    /// The name must match a `<name>.json` file in the artifacts directory.
    pub fn require(&self, name: &str) -> Result<ContractArtifact, ScriptError> {
        let path = self.dir.join(name).with_extension(ARTIFACT_EXTENSION);
        let contents = fs::read_to_string(&path)
            .map_err(|e| ScriptError::ArtifactResolution(format!("{}: {}", path.display(), e)))?;

        serde_json::from_str(&contents).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))
    }
}
