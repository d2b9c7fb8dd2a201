// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use nft_collections_tools::ops;

use crate::{common_args::EnvArgs, error::CliResult};

#[derive(Debug, clap::Args)]
pub struct Args {}

pub async fn exec(_args: Args, env: &EnvArgs) -> CliResult {
    println!("Deployment...");
    let toolkit = env.toolkit().await?;
    ops::deploy_nft_collections_contract(&toolkit).await?;
    Ok(())
}
