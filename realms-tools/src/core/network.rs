// Copyright 2026, Battle Realms
// For licensing, see https://github.com/battle-realms/realms-deploy-rs/blob/main/licenses/COPYRIGHT.md

//! Named network profiles the harness can deploy to.

use std::fmt;

use crate::core::config::EnvConfig;

/// Public fallback endpoint for Base mainnet, used when `BASE_MAINNET_RPC` is unset.
pub const BASE_MAINNET_FALLBACK: &str = "https://mainnet.base.org";
/// Public fallback endpoint for Base Sepolia, used when `BASE_SEPOLIA_RPC` is unset.
pub const BASE_SEPOLIA_FALLBACK: &str = "https://sepolia.base.org";
/// Endpoint of a node running on this machine, e.g. `anvil`.
pub const LOCALHOST_ENDPOINT: &str = "http://localhost:8545";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkProfile {
    /// Base mainnet (chain id 8453).
    Base,
    /// Base Sepolia testnet (chain id 84532).
    BaseSepolia,
    /// A local development node with no external endpoint.
    Localhost,
}

impl NetworkProfile {
    pub fn from_name(name: &str) -> Result<Self, NetworkError> {
        match name {
            "base" => Ok(Self::Base),
            "baseSepolia" => Ok(Self::BaseSepolia),
            "localhost" => Ok(Self::Localhost),
            _ => Err(NetworkError::UnknownNetwork(name.to_owned())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::BaseSepolia => "baseSepolia",
            Self::Localhost => "localhost",
        }
    }

    pub fn chain_id(&self) -> u64 {
        match self {
            Self::Base => 8453,
            Self::BaseSepolia => 84532,
            Self::Localhost => 31337,
        }
    }

    /// RPC endpoint: the profile's override variable when set, else the
    /// hard-coded public fallback. The local profile has no override.
    pub fn endpoint(&self, config: &EnvConfig) -> String {
        match self {
            Self::Base => config
                .base_mainnet_rpc
                .clone()
                .unwrap_or_else(|| BASE_MAINNET_FALLBACK.to_owned()),
            Self::BaseSepolia => config
                .base_sepolia_rpc
                .clone()
                .unwrap_or_else(|| BASE_SEPOLIA_FALLBACK.to_owned()),
            Self::Localhost => LOCALHOST_ENDPOINT.to_owned(),
        }
    }
}

impl fmt::Display for NetworkProfile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("unknown network: {0} (expected base, baseSepolia or localhost)")]
    UnknownNetwork(String),
}
