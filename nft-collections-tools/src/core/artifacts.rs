// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts, laid out the way Hardhat writes them.
//!
//! Every contract `C` declared in `contracts/C.sol` lands at
//! `artifacts/contracts/C.sol/C.json`, next to a `C.dbg.json` debug file. Contracts can be looked
//! up by their bare name, or by their fully qualified name `contracts/C.sol:C` when the bare name
//! is not unique.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use alloy::{json_abi::JsonAbi, primitives::Bytes};
use serde::Deserialize;

use crate::utils::decode0x;

/// The only artifact format understood by [`ArtifactStore`].
pub const ARTIFACT_FORMAT: &str = "hh-sol-artifact-1";

/// Default artifacts directory, relative to the project root.
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse artifact {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("artifact for contract \"{name}\" not found in {}", .dir.display())]
    NotFound { name: String, dir: PathBuf },
    #[error(
        "there are multiple artifacts for contract \"{name}\", please use a fully qualified name instead: {}",
        .candidates.join(", ")
    )]
    Ambiguous {
        name: String,
        candidates: Vec<String>,
    },
    #[error("artifact {} has unsupported format \"{format}\"", .path.display())]
    UnsupportedFormat { path: PathBuf, format: String },
    #[error("artifact {} contains contract \"{found}\", expected \"{expected}\"", .path.display())]
    NameMismatch {
        path: PathBuf,
        expected: String,
        found: String,
    },
    #[error("contract \"{0}\" is abstract and can't be deployed")]
    Abstract(String),
    #[error(
        "contract \"{name}\" is missing links for the following libraries: {}",
        .libraries.join(", ")
    )]
    MissingLibraries {
        name: String,
        libraries: Vec<String>,
    },
    #[error("contract \"{name}\" has invalid bytecode: {source}")]
    InvalidBytecode {
        name: String,
        source: hex::FromHexError,
    },
    #[error("artifacts path is not valid utf-8: {}", .0.display())]
    NonUtf8Path(PathBuf),
    #[error("invalid artifact search pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

/// Byte range of an unlinked library placeholder inside the bytecode.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct LinkReference {
    pub start: usize,
    pub length: usize,
}

/// A compiled contract.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    #[serde(rename = "_format")]
    pub format: String,
    pub contract_name: String,
    pub source_name: String,
    pub abi: JsonAbi,
    /// Creation code; kept as text since unlinked libraries leave non-hex placeholders in it.
    pub bytecode: String,
    #[serde(default)]
    pub deployed_bytecode: String,
    /// Source name -> library name -> placeholder locations.
    #[serde(default)]
    pub link_references: BTreeMap<String, BTreeMap<String, Vec<LinkReference>>>,
}

impl Artifact {
    /// The `<sourceName>:<contractName>` form of the contract's name.
    pub fn fully_qualified_name(&self) -> String {
        format!("{}:{}", self.source_name, self.contract_name)
    }

    /// Abstract contracts and interfaces compile to empty creation code.
    pub fn is_abstract(&self) -> bool {
        let code = self.bytecode.trim();
        code.is_empty() || code == "0x"
    }

    /// Libraries which must be linked before the bytecode can be deployed.
    pub fn unlinked_libraries(&self) -> Vec<String> {
        self.link_references
            .iter()
            .flat_map(|(source, libraries)| {
                libraries
                    .keys()
                    .map(move |library| format!("{source}:{library}"))
            })
            .collect()
    }

    /// Decoded creation code, ready to be sent in a deployment transaction.
    pub fn creation_code(&self) -> Result<Bytes, ArtifactError> {
        if self.is_abstract() {
            return Err(ArtifactError::Abstract(self.contract_name.clone()));
        }
        let libraries = self.unlinked_libraries();
        if !libraries.is_empty() {
            return Err(ArtifactError::MissingLibraries {
                name: self.contract_name.clone(),
                libraries,
            });
        }
        decode0x(&self.bytecode)
            .map(Bytes::from)
            .map_err(|source| ArtifactError::InvalidBytecode {
                name: self.contract_name.clone(),
                source,
            })
    }
}

/// Directory tree of compiled artifacts.
#[derive(Clone, Debug)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Finds the artifact for a bare or fully qualified contract name.
    pub fn resolve(&self, name: &str) -> Result<Artifact, ArtifactError> {
        match name.rsplit_once(':') {
            Some((source, contract)) => {
                let path = self.root.join(source).join(format!("{contract}.json"));
                if !path.is_file() {
                    return Err(ArtifactError::NotFound {
                        name: name.to_owned(),
                        dir: self.root.clone(),
                    });
                }
                load(&path, contract)
            }
            None => {
                let mut paths = self.find(name)?;
                match paths.len() {
                    0 => Err(ArtifactError::NotFound {
                        name: name.to_owned(),
                        dir: self.root.clone(),
                    }),
                    1 => load(&paths.remove(0), name),
                    _ => Err(ArtifactError::Ambiguous {
                        name: name.to_owned(),
                        candidates: paths
                            .iter()
                            .map(|path| self.fully_qualified_name(path, name))
                            .collect(),
                    }),
                }
            }
        }
    }

    fn find(&self, name: &str) -> Result<Vec<PathBuf>, ArtifactError> {
        let root = self
            .root
            .to_str()
            .ok_or_else(|| ArtifactError::NonUtf8Path(self.root.clone()))?;
        let pattern = format!(
            "{}/**/{}.json",
            glob::Pattern::escape(root),
            glob::Pattern::escape(name)
        );
        let build_info = self.root.join("build-info");
        let mut paths: Vec<PathBuf> = glob::glob(&pattern)?
            .filter_map(Result::ok)
            .filter(|path| !path.starts_with(&build_info))
            .collect();
        paths.sort();
        Ok(paths)
    }

    fn fully_qualified_name(&self, path: &Path, name: &str) -> String {
        let source = path
            .parent()
            .and_then(|dir| dir.strip_prefix(&self.root).ok())
            .map(|dir| dir.to_string_lossy().replace('\\', "/"))
            .unwrap_or_default();
        format!("{source}:{name}")
    }
}

fn load(path: &Path, expected: &str) -> Result<Artifact, ArtifactError> {
    let contents = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_owned(),
        source,
    })?;
    let artifact: Artifact =
        serde_json::from_str(&contents).map_err(|source| ArtifactError::Json {
            path: path.to_owned(),
            source,
        })?;
    if artifact.format != ARTIFACT_FORMAT {
        return Err(ArtifactError::UnsupportedFormat {
            path: path.to_owned(),
            format: artifact.format,
        });
    }
    if artifact.contract_name != expected {
        return Err(ArtifactError::NameMismatch {
            path: path.to_owned(),
            expected: expected.to_owned(),
            found: artifact.contract_name,
        });
    }
    Ok(artifact)
}
