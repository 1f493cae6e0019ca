// Copyright 2026, Battle Realms
// For licensing, see https://github.com/battle-realms/realms-deploy-rs/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts.

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::{json_abi::JsonAbi, primitives::Bytes};
use serde::Deserialize;

/// A compiled contract, as emitted by the Solidity toolchain.
///
/// The artifact is treated as opaque: only the fields deployment needs are
/// read, everything else in the file is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    pub contract_name: String,
    pub abi: JsonAbi,
    pub bytecode: Bytes,
}

impl ContractArtifact {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ArtifactError::Read {
            path: path.into(),
            source,
        })?;
        let artifact: Self = serde_json::from_str(&text)?;
        if artifact.bytecode.is_empty() {
            return Err(ArtifactError::EmptyBytecode(artifact.contract_name));
        }
        Ok(artifact)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("could not read artifact {path}: {source}", path = .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed artifact: {0}")]
    Json(#[from] serde_json::Error),
    #[error("artifact for {0} has no creation bytecode")]
    EmptyBytecode(String),
}
