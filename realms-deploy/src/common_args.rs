// Copyright 2026, Battle Realms
// For licensing, see https://github.com/battle-realms/realms-deploy-rs/blob/main/licenses/COPYRIGHT.md

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::{
    network::EthereumWallet,
    primitives::FixedBytes,
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::{local::PrivateKeySigner, Signer},
};
use eyre::{bail, Context};
use realms_tools::{
    core::{config::EnvConfig, network::NetworkProfile},
    utils::decode0x,
};

use crate::constants::DEFAULT_ARTIFACT_PATH;

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long)]
    private_key: Option<String>,
    /// File path to a text file containing a hex-encoded private key
    #[arg(long)]
    private_key_path: Option<PathBuf>,
}

impl AuthArgs {
    /// Resolves the signer: explicit flags first, then the process environment.
    pub fn resolve_signer(
        &self,
        config: &EnvConfig,
        chain_id: u64,
    ) -> eyre::Result<PrivateKeySigner> {
        if let Some(key) = &self.private_key {
            if key.is_empty() {
                bail!("empty private key");
            }
            return signer_from_hex(key, chain_id);
        }
        if let Some(file) = &self.private_key_path {
            let key = fs::read_to_string(file).wrap_err("could not open private key file")?;
            return signer_from_hex(&key, chain_id);
        }
        Ok(config.signer(chain_id)?)
    }
}

fn signer_from_hex(key: &str, chain_id: u64) -> eyre::Result<PrivateKeySigner> {
    let bytes = decode0x(key)?;
    if bytes.len() != 32 {
        bail!("private key must be 32 bytes, got {}", bytes.len());
    }
    let bytes: FixedBytes<32> = FixedBytes::from_slice(&bytes);
    Ok(PrivateKeySigner::from_bytes(&bytes)?.with_chain_id(Some(chain_id)))
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// Network profile to deploy against.
    #[arg(short, long, default_value = "localhost", value_parser = NetworkProfile::from_name)]
    network: NetworkProfile,
    /// RPC endpoint, overriding the profile's configured endpoint.
    #[arg(short, long)]
    endpoint: Option<String>,
    /// Path to the compiled contract artifact.
    #[arg(long, default_value = DEFAULT_ARTIFACT_PATH)]
    artifact: PathBuf,
}

impl ProviderArgs {
    pub fn network(&self) -> NetworkProfile {
        self.network
    }

    pub fn artifact_path(&self) -> &Path {
        &self.artifact
    }

    pub fn endpoint(&self, config: &EnvConfig) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| self.network.endpoint(config))
    }

    pub async fn build_provider_with_wallet(
        &self,
        signer: PrivateKeySigner,
        config: &EnvConfig,
    ) -> eyre::Result<impl Provider + WalletProvider> {
        let endpoint = self.endpoint(config);
        log::debug!("connecting to {endpoint}");
        let wallet = EthereumWallet::new(signer);
        let provider = ProviderBuilder::new().wallet(wallet).connect(&endpoint).await?;
        Ok(provider)
    }
}
