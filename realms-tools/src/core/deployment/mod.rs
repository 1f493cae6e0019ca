// Copyright 2026, Battle Realms
// For licensing, see https://github.com/battle-realms/realms-deploy-rs/blob/main/licenses/COPYRIGHT.md

//! The deployment core: constructor-argument encoding, the creation
//! transaction, and the post-deploy query.

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt, Specifier},
    json_abi::Constructor,
    network::TransactionBuilder,
    primitives::{Address, TxHash, U256},
    providers::{Provider, WalletProvider},
    rpc::types::{TransactionReceipt, TransactionRequest},
    sol,
};
use eyre::Context;

use crate::{core::artifact::ContractArtifact, utils::color::DebugColor};

mod calldata;
pub use calldata::DeploymentCalldata;

sol! {
    #[sol(rpc)]
    interface BattleRealmsNFT {
        function nextTokenId() external view returns (uint256);
    }
}

/// Constructor arguments for one deployment of the NFT contract.
///
/// Built once per invocation and never mutated. The royalty fee numerator is
/// denominated in basis points over 10000; the contract itself rejects
/// numerators above the denominator.
#[derive(Debug, Clone)]
pub struct DeploymentRequest {
    pub name: String,
    pub symbol: String,
    pub base_uri: String,
    pub max_supply: u64,
    pub royalty_receiver: Address,
    pub royalty_fee_numerator: u32,
}

impl DeploymentRequest {
    /// Positional argument strings, in constructor order.
    pub fn arg_strings(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.symbol.clone(),
            self.base_uri.clone(),
            self.max_supply.to_string(),
            self.royalty_receiver.to_string(),
            self.royalty_fee_numerator.to_string(),
        ]
    }

    /// ABI-encodes the arguments against the artifact's constructor and
    /// appends them to the creation bytecode.
    pub fn calldata(
        &self,
        artifact: &ContractArtifact,
    ) -> Result<DeploymentCalldata, DeploymentError> {
        let constructor = artifact
            .abi
            .constructor
            .as_ref()
            .ok_or(DeploymentError::MissingConstructor)?;
        let args = self.arg_strings();
        if args.len() != constructor.inputs.len() {
            return Err(DeploymentError::InvalidConstructor(format!(
                "mismatched number of constructor arguments (want {:?} ({}); got {})",
                constructor.inputs,
                constructor.inputs.len(),
                args.len(),
            )));
        }
        let encoded = encode_constructor_args(constructor, &args)
            .map_err(|err| DeploymentError::InvalidConstructor(err.to_string()))?;
        Ok(DeploymentCalldata::new(&artifact.bytecode, &encoded))
    }
}

fn encode_constructor_args(constructor: &Constructor, args: &[String]) -> eyre::Result<Vec<u8>> {
    let mut values = Vec::<DynSolValue>::with_capacity(args.len());
    for (arg, param) in args.iter().zip(constructor.inputs.iter()) {
        let ty = param
            .resolve()
            .wrap_err_with(|| format!("could not resolve constructor arg: {param}"))?;
        let value = ty
            .coerce_str(arg)
            .wrap_err_with(|| format!("could not parse constructor arg: {param}"))?;
        values.push(value);
    }
    Ok(constructor.abi_encode_input_raw(&values)?)
}

/// A prepared contract-creation transaction.
#[derive(Debug)]
pub struct CreationTx {
    tx: TransactionRequest,
}

impl CreationTx {
    pub fn new(sender: Address, calldata: DeploymentCalldata) -> Self {
        Self {
            tx: TransactionRequest::default()
                .with_from(sender)
                .with_deploy_code(calldata),
        }
    }

    pub async fn estimate_gas(&self, provider: &impl Provider) -> Result<u64, DeploymentError> {
        Ok(provider.estimate_gas(self.tx.clone()).await?)
    }

    /// Submits the creation transaction and blocks until the network confirms it.
    pub async fn exec(
        self,
        provider: &impl Provider,
    ) -> Result<TransactionReceipt, DeploymentError> {
        let gas = self.estimate_gas(provider).await?;
        let max_fee_per_gas = provider.get_gas_price().await?;

        let mut tx = self.tx;
        tx.gas = Some(gas);
        tx.max_fee_per_gas = Some(max_fee_per_gas);
        tx.max_priority_fee_per_gas = Some(0);

        let tx = provider.send_transaction(tx).await?;
        let tx_hash = *tx.tx_hash();
        debug!(@grey, "sent creation tx: {}", tx_hash.debug_lavender());

        let receipt = tx
            .get_receipt()
            .await
            .or(Err(DeploymentError::FailedToComplete))?;
        if !receipt.status() {
            return Err(DeploymentError::Reverted { tx_hash });
        }

        Ok(receipt)
    }
}

/// Outcome of a confirmed deployment.
#[derive(Debug)]
pub struct DeploymentResult {
    pub deployer: Address,
    pub contract_address: Address,
    pub tx_hash: TxHash,
    pub next_token_id: U256,
}

/// Deploys the contract and queries its first post-deploy value.
///
/// One on-chain state mutation, no retries: once the creation transaction is
/// broadcast there is no rollback.
pub async fn deploy(
    artifact: &ContractArtifact,
    request: &DeploymentRequest,
    provider: &(impl Provider + WalletProvider),
) -> Result<DeploymentResult, DeploymentError> {
    let deployer = provider.default_signer_address();
    let calldata = request.calldata(artifact)?;
    debug!(@grey, "creation calldata: {} bytes", calldata.len());

    let receipt = CreationTx::new(deployer, calldata).exec(provider).await?;
    let contract_address = receipt
        .contract_address
        .ok_or(DeploymentError::NoContractAddress)?;
    debug!(@grey, "gas used: {}", receipt.gas_used);
    info!(@grey, "deployment tx hash: {}", receipt.transaction_hash.debug_lavender());

    let nft = BattleRealmsNFT::new(contract_address, provider);
    let next_token_id = nft.nextTokenId().call().await?;

    Ok(DeploymentResult {
        deployer,
        contract_address,
        tx_hash: receipt.transaction_hash,
        next_token_id,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),

    #[error("tx failed to complete")]
    FailedToComplete,
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("artifact abi has no constructor")]
    MissingConstructor,
    #[error("invalid constructor: {0}")]
    InvalidConstructor(String),
    #[error("no contract address in receipt")]
    NoContractAddress,
    #[error("post-deploy query failed: {0}")]
    PostDeployQuery(#[from] alloy::contract::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::{json_abi::JsonAbi, primitives::address};

    const SIX_ARG_ABI: &str = r#"[
        {
            "type": "constructor",
            "stateMutability": "nonpayable",
            "inputs": [
                {"name": "name_", "type": "string", "internalType": "string"},
                {"name": "symbol_", "type": "string", "internalType": "string"},
                {"name": "baseURI_", "type": "string", "internalType": "string"},
                {"name": "maxSupply_", "type": "uint256", "internalType": "uint256"},
                {"name": "royaltyReceiver_", "type": "address", "internalType": "address"},
                {"name": "royaltyFeeNumerator_", "type": "uint96", "internalType": "uint96"}
            ]
        }
    ]"#;

    fn artifact(abi: &str) -> ContractArtifact {
        ContractArtifact {
            contract_name: "BattleRealmsNFT".to_owned(),
            abi: serde_json::from_str::<JsonAbi>(abi).unwrap(),
            bytecode: vec![0x60, 0x80, 0x60, 0x40].into(),
        }
    }

    fn request() -> DeploymentRequest {
        DeploymentRequest {
            name: "Battle Realms: PvP Legends".to_owned(),
            symbol: "BRPVP".to_owned(),
            base_uri: "ipfs://REPLACE_WITH_YOUR_IPFS_BASE_URI/".to_owned(),
            max_supply: 50,
            royalty_receiver: address!("000000000000000000000000000000000000dEaD"),
            royalty_fee_numerator: 500,
        }
    }

    #[test]
    fn args_keep_constructor_order() {
        let args = request().arg_strings();
        assert_eq!(args.len(), 6);
        assert_eq!(args[0], "Battle Realms: PvP Legends");
        assert_eq!(args[1], "BRPVP");
        assert_eq!(args[2], "ipfs://REPLACE_WITH_YOUR_IPFS_BASE_URI/");
        assert_eq!(args[3], "50");
        assert_eq!(args[5], "500");
    }

    #[test]
    fn calldata_is_bytecode_then_encoded_args() {
        let calldata = request().calldata(&artifact(SIX_ARG_ABI)).unwrap();
        assert_eq!(calldata.bytecode(), [0x60, 0x80, 0x60, 0x40]);

        // Six head words: three string offsets, then the static arguments.
        let encoded = calldata.encoded_args();
        assert!(encoded.len() > 6 * 32);
        assert_eq!(encoded.len() % 32, 0);
        assert_eq!(U256::from_be_slice(&encoded[96..128]), U256::from(50));
        assert_eq!(
            Address::from_slice(&encoded[140..160]),
            address!("000000000000000000000000000000000000dEaD")
        );
        assert_eq!(U256::from_be_slice(&encoded[160..192]), U256::from(500));
    }

    #[test]
    fn arity_mismatch_is_rejected() {
        let two_arg_abi = r#"[
            {
                "type": "constructor",
                "stateMutability": "nonpayable",
                "inputs": [
                    {"name": "name_", "type": "string", "internalType": "string"},
                    {"name": "symbol_", "type": "string", "internalType": "string"}
                ]
            }
        ]"#;
        assert!(matches!(
            request().calldata(&artifact(two_arg_abi)),
            Err(DeploymentError::InvalidConstructor(_))
        ));
    }

    #[test]
    fn constructorless_abi_is_rejected() {
        assert!(matches!(
            request().calldata(&artifact("[]")),
            Err(DeploymentError::MissingConstructor)
        ));
    }

    #[test]
    fn successive_creations_land_at_distinct_addresses() {
        // Deploying twice is not idempotent: the second creation from the same
        // account uses the next nonce and yields a different address.
        let deployer = address!("000000000000000000000000000000000000dEaD");
        let first = deployer.create(7);
        let second = deployer.create(8);
        assert_ne!(first, second);
    }
}
