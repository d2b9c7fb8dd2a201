// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::utils::color::Color;

/// Name of the network used when none is configured.
pub const LOCALHOST: &str = "localhost";

/// Endpoint of a dev node running on this machine.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8545";

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error(
        "network \"{network}\" is configured with chain id {}, but the node reports {}",
        .expected.yellow(),
        .actual.red()
    )]
    ChainIdMismatch {
        network: String,
        expected: u64,
        actual: u64,
    },
}

/// Fails if the node behind a network is not on the chain the network was configured for.
pub fn check_chain_id(network: &str, expected: u64, actual: u64) -> Result<(), NetworkError> {
    if expected == actual {
        Ok(())
    } else {
        Err(NetworkError::ChainIdMismatch {
            network: network.to_owned(),
            expected,
            actual,
        })
    }
}
