// Copyright 2026, Battle Realms
// For licensing, see https://github.com/battle-realms/realms-deploy-rs/blob/main/licenses/COPYRIGHT.md

use realms_tools::{
    core::{artifact::ContractArtifact, config::EnvConfig, deployment::DeploymentRequest},
    ops,
};

use crate::{
    common_args::{AuthArgs, ProviderArgs},
    constants::{BASE_URI, MAX_SUPPLY, NAME, ROYALTY_FEE_NUMERATOR, SYMBOL},
    error::RealmsDeployResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Wallet source to use.
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args) -> RealmsDeployResult {
    let config = EnvConfig::load();
    let network = args.provider.network();

    // Signer first: without one there is nothing to deploy with, and no RPC
    // connection should be attempted.
    let signer = args.auth.resolve_signer(&config, network.chain_id())?;

    let request = DeploymentRequest {
        name: NAME.to_owned(),
        symbol: SYMBOL.to_owned(),
        base_uri: BASE_URI.to_owned(),
        max_supply: MAX_SUPPLY,
        royalty_receiver: signer.address(),
        royalty_fee_numerator: ROYALTY_FEE_NUMERATOR,
    };

    let artifact = ContractArtifact::load(args.provider.artifact_path())?;
    let provider = args
        .provider
        .build_provider_with_wallet(signer, &config)
        .await?;
    ops::deploy(&artifact, &request, network, &config, &provider).await?;
    Ok(())
}
