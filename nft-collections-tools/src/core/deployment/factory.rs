// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::{
    json_abi::JsonAbi,
    network::Ethereum,
    primitives::{Address, Bytes, TxHash},
    providers::{DynProvider, PendingTransactionBuilder, Provider},
    rpc::types::TransactionReceipt,
};

use super::{DeployedContract, DeploymentError, DeploymentRequest};
use crate::{core::artifacts::Artifact, utils::color::DebugColor};

/// Deploys new instances of one compiled contract.
#[derive(Clone)]
pub struct ContractFactory {
    artifact: Artifact,
    bytecode: Bytes,
    provider: DynProvider,
    sender: Address,
    max_fee_per_gas_wei: Option<u128>,
}

impl ContractFactory {
    pub fn new(
        artifact: Artifact,
        provider: DynProvider,
        sender: Address,
        max_fee_per_gas_wei: Option<u128>,
    ) -> Result<Self, DeploymentError> {
        let bytecode = artifact.creation_code()?;
        Ok(Self {
            artifact,
            bytecode,
            provider,
            sender,
            max_fee_per_gas_wei,
        })
    }

    pub fn contract_name(&self) -> &str {
        &self.artifact.contract_name
    }

    pub fn abi(&self) -> &JsonAbi {
        &self.artifact.abi
    }

    pub fn bytecode(&self) -> &Bytes {
        &self.bytecode
    }

    pub fn sender(&self) -> Address {
        self.sender
    }

    /// Creation transaction for a deployment without constructor arguments.
    pub fn deploy_request(&self) -> Result<DeploymentRequest, DeploymentError> {
        if let Some(constructor) = &self.artifact.abi.constructor {
            if !constructor.inputs.is_empty() {
                return Err(DeploymentError::InvalidConstructor(format!(
                    "{} expects {} constructor arguments, got 0",
                    self.contract_name(),
                    constructor.inputs.len(),
                )));
            }
        }
        Ok(DeploymentRequest::new(
            self.sender,
            self.bytecode.clone(),
            self.max_fee_per_gas_wei,
        ))
    }

    /// Submits the deployment transaction.
    pub async fn deploy(&self) -> Result<PendingDeployment, DeploymentError> {
        debug!(@grey, "sender address: {}", self.sender.debug_lavender());
        let pending = self.deploy_request()?.send(&self.provider).await?;
        Ok(PendingDeployment {
            contract_name: self.artifact.contract_name.clone(),
            abi: self.artifact.abi.clone(),
            provider: self.provider.clone(),
            pending,
        })
    }
}

/// A submitted deployment transaction which may not be mined yet.
pub struct PendingDeployment {
    contract_name: String,
    abi: JsonAbi,
    provider: DynProvider,
    pending: PendingTransactionBuilder<Ethereum>,
}

impl PendingDeployment {
    pub fn tx_hash(&self) -> TxHash {
        *self.pending.tx_hash()
    }

    /// Waits until the deployment transaction is mined and code exists at the new address.
    pub async fn deployed(self) -> Result<DeployedContract, DeploymentError> {
        let tx_hash = self.tx_hash();
        let receipt = self.pending.get_receipt().await?;
        let address = created_address(&receipt)?;
        ensure_code(&self.provider, address).await?;

        debug!(@grey, "deployed code at address: {}", address.debug_lavender());
        debug!(@grey, "gas used: {}", receipt.gas_used);
        info!(@grey, "deployment tx hash: {}", tx_hash.debug_lavender());

        Ok(DeployedContract::new(
            self.contract_name,
            address,
            tx_hash,
            self.abi,
            self.provider,
        ))
    }
}

/// Address of the contract created by a successful deployment receipt.
fn created_address(receipt: &TransactionReceipt) -> Result<Address, DeploymentError> {
    let tx_hash = receipt.transaction_hash;
    if !receipt.status() {
        return Err(DeploymentError::Reverted { tx_hash });
    }
    receipt
        .contract_address
        .ok_or(DeploymentError::NoContractAddress { tx_hash })
}

async fn ensure_code(provider: &impl Provider, address: Address) -> Result<(), DeploymentError> {
    let code = provider.get_code_at(address).await?;
    if code.is_empty() {
        return Err(DeploymentError::EmptyCode { address });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloy::{
        json_abi::{Constructor, Param, StateMutability},
        primitives::{address, b256},
        providers::{PendingTransactionError, ProviderBuilder},
        transports::mock::Asserter,
    };
    use serde_json::json;

    use super::*;
    use crate::core::artifacts::tests::{artifact_json, STOP_INITCODE};

    fn factory(constructor: Option<Constructor>) -> ContractFactory {
        let mut artifact: Artifact = serde_json::from_value(artifact_json(
            "NFTCollections",
            "contracts/NFTCollections.sol",
            STOP_INITCODE,
        ))
        .unwrap();
        artifact.abi.constructor = constructor;
        let provider = ProviderBuilder::new()
            .connect_http("http://localhost:8545".parse().unwrap())
            .erased();
        ContractFactory::new(
            artifact,
            provider,
            address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"),
            None,
        )
        .unwrap()
    }

    #[test]
    fn deploys_without_constructor() {
        let factory = factory(None);
        assert_eq!(factory.contract_name(), "NFTCollections");
        let req = factory.deploy_request().unwrap();
        assert_eq!(req.tx().from, Some(factory.sender()));
    }

    #[test]
    fn accepts_empty_payable_constructor() {
        let factory = factory(Some(Constructor {
            inputs: vec![],
            state_mutability: StateMutability::Payable,
        }));
        assert!(factory.deploy_request().is_ok());
    }

    #[test]
    fn rejects_constructor_arguments() {
        let factory = factory(Some(Constructor {
            inputs: vec![Param {
                ty: "string".to_owned(),
                name: "baseUri".to_owned(),
                components: vec![],
                internal_type: None,
            }],
            state_mutability: StateMutability::NonPayable,
        }));
        match factory.deploy_request().unwrap_err() {
            DeploymentError::InvalidConstructor(msg) => {
                assert_eq!(msg, "NFTCollections expects 1 constructor arguments, got 0")
            }
            err => panic!("unexpected error: {err}"),
        }
    }

    const CREATED: Address = address!("5fbdb2315678afecb367f032d93f642f64180aa3");

    fn receipt(status: &str, contract_address: serde_json::Value) -> TransactionReceipt {
        serde_json::from_value(json!({
            "type": "0x2",
            "status": status,
            "cumulativeGasUsed": "0x1f0d8",
            "logs": [],
            "logsBloom": format!("0x{}", "0".repeat(512)),
            "transactionHash": "0x0000000000000000000000000000000000000000000000000000000000000001",
            "transactionIndex": "0x0",
            "blockHash": "0x0000000000000000000000000000000000000000000000000000000000000002",
            "blockNumber": "0x1",
            "gasUsed": "0x1f0d8",
            "effectiveGasPrice": "0x3b9aca00",
            "from": "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
            "to": null,
            "contractAddress": contract_address
        }))
        .unwrap()
    }

    fn mocked() -> (Asserter, impl Provider) {
        let asserter = Asserter::new();
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_mocked_client(asserter.clone());
        (asserter, provider)
    }

    #[test]
    fn successful_receipt_yields_created_address() {
        let receipt = receipt("0x1", json!(CREATED));
        assert_eq!(created_address(&receipt).unwrap(), CREATED);
    }

    #[test]
    fn reverted_receipt_is_an_error() {
        let receipt = receipt("0x0", json!(CREATED));
        assert!(matches!(
            created_address(&receipt),
            Err(DeploymentError::Reverted { tx_hash })
                if tx_hash == b256!("0000000000000000000000000000000000000000000000000000000000000001")
        ));
    }

    #[test]
    fn receipt_without_contract_address_is_an_error() {
        let receipt = receipt("0x1", serde_json::Value::Null);
        assert!(matches!(
            created_address(&receipt),
            Err(DeploymentError::NoContractAddress { .. })
        ));
    }

    #[tokio::test]
    async fn empty_code_is_an_error() {
        let (asserter, provider) = mocked();
        asserter.push_success(&Bytes::new());
        assert!(matches!(
            ensure_code(&provider, CREATED).await,
            Err(DeploymentError::EmptyCode { address }) if address == CREATED
        ));
    }

    #[tokio::test]
    async fn stored_code_is_accepted() {
        let (asserter, provider) = mocked();
        asserter.push_success(&Bytes::from_static(&[0x00]));
        assert!(ensure_code(&provider, CREATED).await.is_ok());
    }

    #[tokio::test]
    async fn code_lookup_failure_propagates() {
        let (asserter, provider) = mocked();
        asserter.push_failure_msg("header not found");
        match ensure_code(&provider, CREATED).await.unwrap_err() {
            DeploymentError::Rpc(err) => assert!(err.to_string().contains("header not found")),
            err => panic!("unexpected error: {err}"),
        }
    }

    #[test]
    fn confirmation_failure_keeps_its_cause() {
        let err = DeploymentError::from(PendingTransactionError::FailedToRegister);
        assert!(matches!(err, DeploymentError::FailedToComplete(_)));
        assert!(err
            .to_string()
            .starts_with("tx failed to complete: failed to register"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
