use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use ethers::types::Bytes;
use serde::Deserialize;

/// Errors loading compiled contract artifacts
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    /// No artifact path was configured for the contract
    #[error("No artifact configured for contract `{0}`")]
    Missing(String),
    /// The artifact file could not be read
    #[error("Failed to read artifact {path:?}")]
    Io {
        /// Path of the artifact
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// The artifact file is not valid artifact JSON
    #[error("Failed to parse artifact {path:?}")]
    Json {
        /// Path of the artifact
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },
    /// The artifact is an interface or abstract contract
    #[error("Artifact {0:?} has no creation bytecode")]
    EmptyBytecode(PathBuf),
}

/// Hardhat artifacts store the bytecode as a hex string, foundry nests it
/// under `object`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ArtifactBytecode {
    Hex(Bytes),
    Object { object: Bytes },
}

/// The parts of a compiled contract artifact needed for deployment
#[derive(Debug, Clone, Deserialize)]
pub struct ContractArtifact {
    bytecode: ArtifactBytecode,
}

impl ContractArtifact {
    /// Read and parse an artifact JSON file
    pub fn from_path(path: &Path) -> Result<Self, ArtifactError> {
        let raw = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: path.to_owned(),
            source,
        })?;
        let artifact: Self = serde_json::from_str(&raw).map_err(|source| ArtifactError::Json {
            path: path.to_owned(),
            source,
        })?;
        if artifact.bytecode().is_empty() {
            return Err(ArtifactError::EmptyBytecode(path.to_owned()));
        }
        Ok(artifact)
    }

    /// Creation bytecode of the contract
    pub fn bytecode(&self) -> &Bytes {
        match &self.bytecode {
            ArtifactBytecode::Hex(b) => b,
            ArtifactBytecode::Object { object } => object,
        }
    }
}

/// Artifact locations keyed by logical contract name (e.g. `testRecipient`)
#[derive(Debug, Clone, Default)]
pub struct ContractArtifacts {
    paths: HashMap<String, PathBuf>,
}

impl ContractArtifacts {
    /// Create from a map of contract name to artifact path
    pub fn new(paths: HashMap<String, PathBuf>) -> Self {
        Self { paths }
    }

    /// Load the creation bytecode for `name`. Names are compared ignoring
    /// ASCII case since config keys arrive flattened.
    pub fn bytecode(&self, name: &str) -> Result<Bytes, ArtifactError> {
        let path = self
            .paths
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, path)| path)
            .ok_or_else(|| ArtifactError::Missing(name.to_owned()))?;
        Ok(ContractArtifact::from_path(path)?.bytecode().clone())
    }
}
