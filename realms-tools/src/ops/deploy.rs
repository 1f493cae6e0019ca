// Copyright 2026, Battle Realms
// For licensing, see https://github.com/battle-realms/realms-deploy-rs/blob/main/licenses/COPYRIGHT.md

//! Contract deployment.

use alloy::providers::{Provider, WalletProvider};

use crate::core::{
    artifact::ContractArtifact,
    config::EnvConfig,
    deployment::{self, DeploymentRequest, DeploymentResult},
    network::NetworkProfile,
    verification::verify_command,
};

/// Drives one deployment to completion and reports the outcome.
///
/// Sequential, no branching: submit the creation transaction, wait for
/// confirmation, query the live contract, print the report. A transient
/// failure terminates the run; re-invoke to try again.
pub async fn deploy(
    artifact: &ContractArtifact,
    request: &DeploymentRequest,
    network: NetworkProfile,
    config: &EnvConfig,
    provider: &(impl Provider + WalletProvider),
) -> crate::Result<DeploymentResult> {
    let deployer = provider.default_signer_address();
    greyln!("Deploying with: {deployer}");
    if config.etherscan_api_key.is_none() {
        debug!(@grey, "ETHERSCAN_API_KEY not set; verifying on {} will need one", network.name());
    }

    let result = deployment::deploy(artifact, request, provider).await?;
    for line in report_lines(&result, request) {
        greyln!("{line}");
    }
    Ok(result)
}

/// The post-deploy console report, one string per line.
pub fn report_lines(result: &DeploymentResult, request: &DeploymentRequest) -> Vec<String> {
    vec![
        format!("Contract deployed to: {}", result.contract_address),
        format!("Next token id starts at: {}", result.next_token_id),
        "To verify (if supported):".to_owned(),
        verify_command(result.contract_address, request),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, b256, Address, U256};

    #[test]
    fn report_follows_the_output_contract() {
        let contract_address = address!("abcabcabcabcabcabcabcabcabcabcabcabcabca");
        let result = DeploymentResult {
            deployer: Address::ZERO,
            contract_address,
            tx_hash: b256!("1111111111111111111111111111111111111111111111111111111111111111"),
            next_token_id: U256::from(1),
        };
        let request = DeploymentRequest {
            name: "Battle Realms: PvP Legends".to_owned(),
            symbol: "BRPVP".to_owned(),
            base_uri: "ipfs://REPLACE_WITH_YOUR_IPFS_BASE_URI/".to_owned(),
            max_supply: 50,
            royalty_receiver: Address::ZERO,
            royalty_fee_numerator: 500,
        };

        let lines = report_lines(&result, &request);
        assert_eq!(
            lines[0],
            format!("Contract deployed to: {contract_address}")
        );
        assert_eq!(lines[1], "Next token id starts at: 1");
        assert_eq!(lines[2], "To verify (if supported):");
        assert!(lines[3].contains(&contract_address.to_string()));
        assert!(lines[3].contains("\"BRPVP\""));
    }
}
