// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Disposable Anvil node for integration tests.

use alloy::{
    network::EthereumWallet,
    signers::local::{coins_bip39::English, MnemonicBuilder, PrivateKeySigner},
};
use eyre::{Result, WrapErr};
use reqwest::{header::HeaderValue, Method, Response};
use testcontainers::{
    core::{wait::HttpWaitStrategy, IntoContainerPort, WaitFor},
    runners::AsyncRunner,
    ContainerAsync, GenericImage, ImageExt,
};

/// Mnemonic Anvil derives its prefunded accounts from.
pub const DEV_MNEMONIC: &str = "test test test test test test test test test test test junk";

const FOUNDRY_IMAGE_NAME: &str = "ghcr.io/foundry-rs/foundry";
const FOUNDRY_IMAGE_TAG: &str = "latest";
const ANVIL_PORT: u16 = 8545;

/// Manage a dev node for deploying contracts.
pub struct Node {
    _container: ContainerAsync<GenericImage>,
    rpc: String,
}

impl Node {
    /// Starts a new Anvil node in the background.
    /// This node will be shutdown when this struct is dropped.
    pub async fn new() -> Result<Self> {
        let wait_strategy = HttpWaitStrategy::new("/")
            .with_port(ANVIL_PORT.into())
            .with_method(Method::POST)
            .with_header("Content-Type", HeaderValue::from_static("application/json"))
            .with_body(r#"{"jsonrpc":"2.0","method":"net_version","params":[],"id":1}"#)
            .with_response_matcher_async(anvil_response_matcher);
        // Entrypoint is `sh -c`.
        let container = GenericImage::new(FOUNDRY_IMAGE_NAME, FOUNDRY_IMAGE_TAG)
            .with_exposed_port(ANVIL_PORT.tcp())
            .with_wait_for(WaitFor::Http(wait_strategy))
            .with_cmd(vec![format!("anvil --host 0.0.0.0 --port {ANVIL_PORT}")])
            .start()
            .await
            .wrap_err("failed to start Anvil container")?;
        let port = container
            .get_host_port_ipv4(ANVIL_PORT)
            .await
            .wrap_err("failed to get Anvil RPC port")?;
        Ok(Node {
            _container: container,
            rpc: format!("http://localhost:{port}"),
        })
    }

    /// Get the node RPC.
    pub fn rpc(&self) -> &str {
        &self.rpc
    }

    /// Signer for one of the prefunded dev accounts.
    pub fn dev_signer(index: u32) -> Result<PrivateKeySigner> {
        MnemonicBuilder::<English>::default()
            .phrase(DEV_MNEMONIC)
            .index(index)?
            .build()
            .wrap_err("failed to derive dev account")
    }

    /// Wallet holding the first prefunded dev account.
    pub fn dev_wallet() -> Result<EthereumWallet> {
        Ok(EthereumWallet::from(Self::dev_signer(0)?))
    }
}

async fn anvil_response_matcher(response: Response) -> bool {
    let Ok(text) = response.text().await else {
        return false;
    };
    text.contains("result")
}

#[cfg(test)]
mod tests {
    use alloy::providers::{Provider, ProviderBuilder};

    use super::*;

    #[tokio::test]
    async fn node_manages_dev_accounts() -> Result<()> {
        let devnode = Node::new().await?;
        let provider = ProviderBuilder::new().connect_http(devnode.rpc().parse()?);
        let accounts = provider.get_accounts().await?;
        assert_eq!(accounts.first(), Some(&Node::dev_signer(0)?.address()));
        Ok(())
    }
}
