// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deploying compiled contracts.
//!
//! A [`ContractFactory`] wraps one artifact. Calling [`ContractFactory::deploy`] submits the
//! creation transaction and hands back a [`PendingDeployment`], which resolves to a
//! [`DeployedContract`] once the transaction is mined.

use alloy::primitives::{Address, TxHash};

use crate::{core::artifacts::ArtifactError, utils::color::DebugColor};

pub use contract::DeployedContract;
pub use factory::{ContractFactory, PendingDeployment};
pub use request::DeploymentRequest;

mod contract;
mod factory;
mod request;

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),

    #[error("{0}")]
    Artifact(#[from] ArtifactError),

    #[error("invalid constructor: {0}")]
    InvalidConstructor(String),
    #[error("tx failed to complete: {0}")]
    FailedToComplete(#[from] alloy::providers::PendingTransactionError),
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("missing contract address in receipt of {}", .tx_hash.debug_red())]
    NoContractAddress { tx_hash: TxHash },
    #[error("no code was stored at {}", .address.debug_red())]
    EmptyCode { address: Address },
}
