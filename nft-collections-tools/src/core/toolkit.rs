// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract-interaction toolkit handed to deployment tasks.

use alloy::{
    primitives::Address,
    providers::{DynProvider, Provider, WalletProvider},
};
use typed_builder::TypedBuilder;

use super::{
    artifacts::ArtifactStore,
    deployment::{ContractFactory, DeploymentError},
};
use crate::utils::color::DebugColor;

#[derive(Debug, thiserror::Error)]
pub enum ToolkitError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),

    #[error("the node does not manage any accounts, please configure a wallet")]
    NoAccounts,
}

/// Chain connection, signing account and compiled artifacts for one run.
#[derive(Clone, TypedBuilder)]
pub struct Toolkit {
    provider: DynProvider,
    sender: Address,
    artifacts: ArtifactStore,
    #[builder(default)]
    max_fee_per_gas_wei: Option<u128>,
}

impl Toolkit {
    /// Sends transactions signed by the provider's default wallet signer.
    pub fn from_wallet(
        provider: impl Provider + WalletProvider + 'static,
        artifacts: ArtifactStore,
    ) -> Self {
        let sender = provider.default_signer_address();
        Self::builder()
            .provider(provider.erased())
            .sender(sender)
            .artifacts(artifacts)
            .build()
    }

    /// Sends transactions from the first account the node manages, leaving signing to the node.
    pub async fn from_node_accounts(
        provider: DynProvider,
        artifacts: ArtifactStore,
    ) -> Result<Self, ToolkitError> {
        let accounts = provider.get_accounts().await?;
        let sender = *accounts.first().ok_or(ToolkitError::NoAccounts)?;
        debug!(@grey, "using node account {}", sender.debug_lavender());
        Ok(Self::builder()
            .provider(provider)
            .sender(sender)
            .artifacts(artifacts)
            .build())
    }

    pub fn with_max_fee_per_gas_wei(mut self, max_fee_per_gas_wei: Option<u128>) -> Self {
        self.max_fee_per_gas_wei = max_fee_per_gas_wei;
        self
    }

    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    pub fn sender(&self) -> Address {
        self.sender
    }

    pub fn artifacts(&self) -> &ArtifactStore {
        &self.artifacts
    }

    /// Resolves a contract by name and returns a factory able to deploy it.
    pub fn get_contract_factory(&self, name: &str) -> Result<ContractFactory, DeploymentError> {
        let artifact = self.artifacts.resolve(name)?;
        debug!(@grey, "resolved {} from {}", name, self.artifacts.root().display());
        ContractFactory::new(
            artifact,
            self.provider.clone(),
            self.sender,
            self.max_fee_per_gas_wei,
        )
    }
}
