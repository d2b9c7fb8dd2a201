// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;

use alloy::{
    contract::{ContractInstance, Interface},
    json_abi::JsonAbi,
    primitives::{Address, TxHash},
    providers::DynProvider,
};

/// Handle to a contract instance living on chain.
pub struct DeployedContract {
    contract_name: String,
    tx_hash: TxHash,
    instance: ContractInstance<DynProvider>,
}

impl DeployedContract {
    pub fn new(
        contract_name: String,
        address: Address,
        tx_hash: TxHash,
        abi: JsonAbi,
        provider: DynProvider,
    ) -> Self {
        Self {
            contract_name,
            tx_hash,
            instance: ContractInstance::new(address, provider, Interface::new(abi)),
        }
    }

    pub fn address(&self) -> Address {
        *self.instance.address()
    }

    pub fn contract_name(&self) -> &str {
        &self.contract_name
    }

    /// Hash of the transaction which created the contract.
    pub fn deployment_tx_hash(&self) -> TxHash {
        self.tx_hash
    }

    /// Dynamic binding for calling into the contract through its ABI.
    pub fn instance(&self) -> &ContractInstance<DynProvider> {
        &self.instance
    }
}

impl fmt::Debug for DeployedContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeployedContract")
            .field("contract_name", &self.contract_name)
            .field("address", &self.address())
            .field("tx_hash", &self.tx_hash)
            .finish()
    }
}
