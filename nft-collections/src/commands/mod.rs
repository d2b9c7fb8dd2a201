// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{common_args::EnvArgs, error::CliResult};

mod deploy;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Deploy all contracts
    Deploy(deploy::Args),
}

pub async fn exec(cmd: Command, env: &EnvArgs) -> CliResult {
    match cmd {
        Command::Deploy(args) => deploy::exec(args, env).await,
    }
}
