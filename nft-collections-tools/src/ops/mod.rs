// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub use deploy::{
    deploy_nft_collections_contract, deploy_nft_collections_contract_to, NftCollectionsDeployment,
    NFT_COLLECTIONS,
};

mod deploy;
