// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deploy.toml manifest definitions.
//!
//! ```toml
//! default_network = "sepolia"
//!
//! [paths]
//! artifacts = "artifacts"
//!
//! [networks.sepolia]
//! endpoint = "https://rpc.sepolia.org"
//! chain_id = 11155111
//! ```

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use super::{
    artifacts::DEFAULT_ARTIFACTS_DIR,
    network::{DEFAULT_ENDPOINT, LOCALHOST},
};

/// Default filename of the deploy manifest.
pub const FILENAME: &str = "Deploy.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml read error: {0}")]
    TomlRead(#[from] toml::de::Error),

    #[error("missing {}", .0.display())]
    Missing(PathBuf),

    #[error("unknown network \"{name}\" (configured: {})", .known.join(", "))]
    UnknownNetwork { name: String, known: Vec<String> },
}

#[derive(Debug, Default, Deserialize)]
pub struct DeployConfig {
    pub default_network: Option<String>,
    #[serde(default)]
    pub paths: TomlPaths,
    #[serde(default)]
    pub networks: HashMap<String, TomlNetwork>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TomlPaths {
    pub artifacts: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TomlNetwork {
    pub endpoint: String,
    pub chain_id: Option<u64>,
}

/// A network selected for this run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkConfig {
    pub name: String,
    pub endpoint: String,
    pub chain_id: Option<u64>,
}

impl DeployConfig {
    /// Resolves a network by name, falling back to the default network.
    ///
    /// `localhost` is always available, pointing at [`DEFAULT_ENDPOINT`] unless overridden.
    pub fn network(&self, name: Option<&str>) -> Result<NetworkConfig, ConfigError> {
        let name = name
            .or(self.default_network.as_deref())
            .unwrap_or(LOCALHOST);
        match self.networks.get(name) {
            Some(network) => Ok(NetworkConfig {
                name: name.to_owned(),
                endpoint: network.endpoint.clone(),
                chain_id: network.chain_id,
            }),
            None if name == LOCALHOST => Ok(NetworkConfig {
                name: LOCALHOST.to_owned(),
                endpoint: DEFAULT_ENDPOINT.to_owned(),
                chain_id: None,
            }),
            None => {
                let mut known: Vec<_> = self.networks.keys().cloned().collect();
                if !known.iter().any(|known| known == LOCALHOST) {
                    known.push(LOCALHOST.to_owned());
                }
                known.sort();
                Err(ConfigError::UnknownNetwork {
                    name: name.to_owned(),
                    known,
                })
            }
        }
    }

    /// Artifacts directory, relative to the manifest's directory unless absolute.
    pub fn artifacts_dir(&self, base: &Path) -> PathBuf {
        let dir = self
            .paths
            .artifacts
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ARTIFACTS_DIR));
        base.join(dir)
    }
}

pub fn load(path: impl AsRef<Path>) -> Result<DeployConfig, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigError::Missing(path.to_owned()));
    }

    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    const MANIFEST: &str = r#"
        default_network = "sepolia"

        [paths]
        artifacts = "build/artifacts"

        [networks.sepolia]
        endpoint = "https://rpc.sepolia.org"
        chain_id = 11155111

        [networks.localhost]
        endpoint = "http://127.0.0.1:9545"
    "#;

    #[test]
    fn defaults_to_localhost() {
        let config = DeployConfig::default();
        let network = config.network(None).unwrap();
        assert_eq!(network.name, LOCALHOST);
        assert_eq!(network.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(network.chain_id, None);
        assert_eq!(
            config.artifacts_dir(Path::new("/project")),
            Path::new("/project/artifacts")
        );
    }

    #[test]
    fn reads_networks_and_paths() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(FILENAME);
        fs::write(&path, MANIFEST).unwrap();
        let config = load(&path).unwrap();

        let network = config.network(None).unwrap();
        assert_eq!(network.name, "sepolia");
        assert_eq!(network.chain_id, Some(11155111));

        let network = config.network(Some(LOCALHOST)).unwrap();
        assert_eq!(network.endpoint, "http://127.0.0.1:9545");

        assert_eq!(
            config.artifacts_dir(dir.path()),
            dir.path().join("build/artifacts")
        );
    }

    #[test]
    fn unknown_network_lists_known_ones() {
        let config: DeployConfig = toml::from_str(MANIFEST).unwrap();
        match config.network(Some("mainnet")).unwrap_err() {
            ConfigError::UnknownNetwork { name, known } => {
                assert_eq!(name, "mainnet");
                assert_eq!(known, vec!["localhost", "sepolia"]);
            }
            err => panic!("unexpected error: {err}"),
        }
    }

    #[test]
    fn missing_manifest() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            load(dir.path().join(FILENAME)),
            Err(ConfigError::Missing(_))
        ));
    }
}
