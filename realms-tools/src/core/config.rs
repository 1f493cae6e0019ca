// Copyright 2026, Battle Realms
// For licensing, see https://github.com/battle-realms/realms-deploy-rs/blob/main/licenses/COPYRIGHT.md

//! Process-wide configuration, snapshotted from the environment once at startup.

use alloy::{
    primitives::FixedBytes,
    signers::{local::PrivateKeySigner, Signer},
};

use crate::utils::decode0x;

/// Environment variables read by the harness.
///
/// Loaded once and never mutated. Empty values are treated the same as unset
/// ones, so `PRIVATE_KEY=` in a `.env` file does not produce a zero-length key.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    pub private_key: Option<String>,
    pub base_mainnet_rpc: Option<String>,
    pub base_sepolia_rpc: Option<String>,
    pub etherscan_api_key: Option<String>,
}

impl EnvConfig {
    /// Reads the process environment, loading a `.env` file first when present.
    pub fn load() -> Self {
        let _ = dotenvy::dotenv();
        Self {
            private_key: read_var("PRIVATE_KEY"),
            base_mainnet_rpc: read_var("BASE_MAINNET_RPC"),
            base_sepolia_rpc: read_var("BASE_SEPOLIA_RPC"),
            etherscan_api_key: read_var("ETHERSCAN_API_KEY"),
        }
    }

    /// Resolves the signing identity for `chain_id`.
    ///
    /// A pure function of the snapshot: no RPC connection is made, so a missing
    /// key fails before any network traffic.
    pub fn signer(&self, chain_id: u64) -> Result<PrivateKeySigner, ConfigError> {
        let key = self
            .private_key
            .as_deref()
            .ok_or(ConfigError::MissingPrivateKey)?;
        let bytes = decode0x(key)?;
        if bytes.len() != 32 {
            return Err(ConfigError::BadPrivateKey(format!(
                "expected 32 bytes, got {}",
                bytes.len()
            )));
        }
        let bytes: FixedBytes<32> = FixedBytes::from_slice(&bytes);
        let signer = PrivateKeySigner::from_bytes(&bytes)
            .map_err(|err| ConfigError::BadPrivateKey(err.to_string()))?
            .with_chain_id(Some(chain_id));
        Ok(signer)
    }
}

fn read_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no signer available: set PRIVATE_KEY to deploy")]
    MissingPrivateKey,
    #[error("invalid PRIVATE_KEY: {0}")]
    BadPrivateKey(String),
    #[error("invalid PRIVATE_KEY: {0}")]
    Hex(#[from] hex::FromHexError),
}
