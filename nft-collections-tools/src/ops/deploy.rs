// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! NFTCollections deployment.

use std::io::{self, Write};

use crate::core::{
    deployment::{DeployedContract, DeploymentError},
    toolkit::Toolkit,
};

/// Name of the compiled contract deployed by [`deploy_nft_collections_contract`].
pub const NFT_COLLECTIONS: &str = "NFTCollections";

/// Contracts created by a deployment run.
#[derive(Debug)]
pub struct NftCollectionsDeployment {
    pub nft_collections_contract: DeployedContract,
}

/// Deploys NFTCollections with no constructor arguments and prints its address to stdout.
pub async fn deploy_nft_collections_contract(
    toolkit: &Toolkit,
) -> Result<NftCollectionsDeployment, DeploymentError> {
    deploy_nft_collections_contract_to(toolkit, &mut io::stdout()).await
}

/// Same as [`deploy_nft_collections_contract`], reporting the address to `out`.
pub async fn deploy_nft_collections_contract_to(
    toolkit: &Toolkit,
    out: &mut impl Write,
) -> Result<NftCollectionsDeployment, DeploymentError> {
    let factory = toolkit.get_contract_factory(NFT_COLLECTIONS)?;
    let nft_collections_contract = factory.deploy().await?.deployed().await?;

    let _ = report(out, &nft_collections_contract);

    Ok(NftCollectionsDeployment {
        nft_collections_contract,
    })
}

fn report(out: &mut impl Write, contract: &DeployedContract) -> io::Result<()> {
    writeln!(
        out,
        "{} deployed to: {}",
        contract.contract_name(),
        contract.address()
    )
}
