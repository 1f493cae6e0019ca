// Copyright 2026, Battle Realms
// For licensing, see https://github.com/battle-realms/realms-deploy-rs/blob/main/licenses/COPYRIGHT.md

//! Block-explorer verification of deployed bytecode happens outside this
//! harness; all it contributes is a ready-to-run command string.

use alloy::primitives::Address;

use crate::core::deployment::DeploymentRequest;

/// Builds the verification command for a deployed contract.
///
/// Argument order is fixed by the constructor: name, symbol, base URI, max
/// supply, royalty receiver, royalty fee numerator. Text arguments are
/// quote-wrapped; numeric and address arguments are bare. The `<network>`
/// placeholder is left for the operator, matching the contract project's
/// verification tooling.
pub fn verify_command(contract_address: Address, request: &DeploymentRequest) -> String {
    format!(
        "npx hardhat verify --network <network> {} \"{}\" \"{}\" \"{}\" {} {} {}",
        contract_address,
        request.name,
        request.symbol,
        request.base_uri,
        request.max_supply,
        request.royalty_receiver,
        request.royalty_fee_numerator,
    )
}
