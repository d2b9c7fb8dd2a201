// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::{
    network::EthereumWallet,
    primitives::FixedBytes,
    providers::{Provider, ProviderBuilder},
    signers::{
        local::{LocalSigner, PrivateKeySigner},
        Signer,
    },
};
use eyre::{eyre, Context};
use nft_collections_tools::{
    core::{
        artifacts::ArtifactStore,
        config::{self, ConfigError, DeployConfig},
        network::check_chain_id,
        toolkit::Toolkit,
    },
    utils::decode0x,
};

use crate::utils::convert_gwei_to_wei;

/// Options shared by every task: which network to talk to and who signs.
#[derive(Debug, clap::Args)]
pub struct EnvArgs {
    #[command(flatten)]
    pub network: NetworkArgs,
    #[command(flatten)]
    pub auth: AuthArgs,
}

impl EnvArgs {
    /// Connects to the selected network and assembles the toolkit handed to tasks.
    pub async fn toolkit(&self) -> eyre::Result<Toolkit> {
        let config = self.network.load_config()?;
        let network = config.network(self.network.network.as_deref())?;
        let endpoint = self.network.endpoint.as_ref().unwrap_or(&network.endpoint);
        log::debug!("using network {} at {endpoint}", network.name);

        let provider = ProviderBuilder::new().connect(endpoint).await?;
        let chain_id = provider
            .get_chain_id()
            .await
            .wrap_err_with(|| format!("could not reach {endpoint}"))?;
        if let Some(expected) = network.chain_id {
            check_chain_id(&network.name, expected, chain_id)?;
        }

        let artifacts = match &self.network.artifacts {
            Some(dir) => ArtifactStore::new(dir),
            None => ArtifactStore::new(config.artifacts_dir(self.network.config_dir())),
        };

        let toolkit = match self.auth.build_wallet(chain_id)? {
            Some(wallet) => {
                let provider = ProviderBuilder::new()
                    .wallet(wallet)
                    .connect(endpoint)
                    .await?;
                Toolkit::from_wallet(provider, artifacts)
            }
            None => Toolkit::from_node_accounts(provider.erased(), artifacts).await?,
        };
        Ok(toolkit.with_max_fee_per_gas_wei(self.auth.get_max_fee_per_gas_wei()?))
    }
}

#[derive(Debug, clap::Args)]
pub struct NetworkArgs {
    /// Path to the deploy manifest
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Network declared in the deploy manifest
    #[arg(long, global = true, value_name = "NAME")]
    pub network: Option<String>,
    /// RPC endpoint, overriding the network's endpoint
    #[arg(short, long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,
    /// Directory holding compiled contract artifacts
    #[arg(long, global = true, value_name = "DIR")]
    pub artifacts: Option<PathBuf>,
}

impl NetworkArgs {
    /// Loads the manifest; only a manifest given explicitly has to exist.
    pub fn load_config(&self) -> Result<DeployConfig, ConfigError> {
        match &self.config {
            Some(path) => config::load(path),
            None => match config::load(config::FILENAME) {
                Err(ConfigError::Missing(_)) => Ok(DeployConfig::default()),
                result => result,
            },
        }
    }

    fn config_dir(&self) -> &Path {
        self.config
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(Path::new(""))
    }
}

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key
    #[arg(long, global = true)]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long, global = true)]
    private_key: Option<String>,
    /// Path to an Ethereum wallet keystore file (e.g. clef)
    #[arg(long, global = true)]
    keystore_path: Option<String>,
    /// Keystore password file
    #[arg(long, global = true)]
    keystore_password_path: Option<PathBuf>,
    /// Optional max fee per gas in gwei units.
    #[arg(long, global = true)]
    max_fee_per_gas_gwei: Option<String>,
}

impl AuthArgs {
    /// Local wallet, if any signing option was given.
    fn build_wallet(&self, chain_id: u64) -> eyre::Result<Option<EthereumWallet>> {
        if let Some(key) = &self.private_key {
            if key.is_empty() {
                return Err(eyre!("empty private key"));
            }
            return wallet_from_key(key, chain_id).map(Some);
        }

        if let Some(file) = &self.private_key_path {
            let key = fs::read_to_string(file).wrap_err("could not open private key file")?;
            return wallet_from_key(&key, chain_id).map(Some);
        }

        let Some(keystore) = &self.keystore_path else {
            return Ok(None);
        };
        let password = self
            .keystore_password_path
            .as_ref()
            .map(fs::read_to_string)
            .unwrap_or(Ok("".into()))?;

        let signer =
            LocalSigner::decrypt_keystore(keystore, password)?.with_chain_id(Some(chain_id));
        Ok(Some(EthereumWallet::new(signer)))
    }

    pub fn get_max_fee_per_gas_wei(&self) -> eyre::Result<Option<u128>> {
        self.max_fee_per_gas_gwei
            .as_ref()
            .map(|fee_str| convert_gwei_to_wei(fee_str))
            .transpose()
    }
}

fn wallet_from_key(key: &str, chain_id: u64) -> eyre::Result<EthereumWallet> {
    let key = decode0x(key)?;
    if key.len() != 32 {
        return Err(eyre!("private key must be 32 bytes, got {}", key.len()));
    }
    let priv_key_bytes: FixedBytes<32> = FixedBytes::from_slice(&key);
    let signer = PrivateKeySigner::from_bytes(&priv_key_bytes)?.with_chain_id(Some(chain_id));
    Ok(EthereumWallet::new(signer))
}
