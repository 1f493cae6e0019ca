// Copyright 2026, Battle Realms
// For licensing, see https://github.com/battle-realms/realms-deploy-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::Bytes;

/// Calldata to send in the contract-creation transaction: the creation
/// bytecode followed by the ABI-encoded constructor arguments.
#[derive(Debug)]
pub struct DeploymentCalldata {
    data: Vec<u8>,
    bytecode_len: usize,
}

impl DeploymentCalldata {
    pub fn new(bytecode: &[u8], encoded_args: &[u8]) -> Self {
        let mut data = Vec::with_capacity(bytecode.len() + encoded_args.len());
        data.extend_from_slice(bytecode);
        data.extend_from_slice(encoded_args);
        Self {
            data,
            bytecode_len: bytecode.len(),
        }
    }

    /// The creation bytecode prefix.
    pub fn bytecode(&self) -> &[u8] {
        &self.data[..self.bytecode_len]
    }

    /// The ABI-encoded constructor-argument suffix.
    pub fn encoded_args(&self) -> &[u8] {
        &self.data[self.bytecode_len..]
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<DeploymentCalldata> for Bytes {
    fn from(calldata: DeploymentCalldata) -> Bytes {
        calldata.data.into()
    }
}
