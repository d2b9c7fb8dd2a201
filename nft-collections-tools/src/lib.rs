// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for resolving and deploying the NFTCollections contract.
//!
//! The [`core`](crate::core) module holds the contract-interaction toolkit: compiled artifacts,
//! contract factories, deployment requests and the deploy manifest. [`ops`] builds the deployment
//! task on top of it.

#[macro_use]
mod macros;

pub mod core;
pub mod ops;
pub mod utils;

#[cfg(feature = "integration-tests")]
pub mod devnet;
