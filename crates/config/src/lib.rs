//! # bondgen-config
//!
//! Configuration for the binding generator: where compiled contract artifacts are read from and
//! where the generated module and trimmed artifacts are written to.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

use figment::{
    Figment, Provider,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod error;
pub use error::{ExtractConfigError, FAILED_TO_EXTRACT_CONFIG_MSG};

mod contract;
pub use contract::{ContractSource, Toolchain};

pub use figment;

/// Bondgen configuration.
///
/// Values are resolved from, in increasing order of precedence: [`Config::default`], the
/// `bondgen.toml` file in the project root and `BONDGEN_`-prefixed environment variables.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The project root. All relative paths are resolved against it.
    ///
    /// This is never read from the config file; it is where the file was looked up.
    #[serde(skip)]
    pub root: PathBuf,
    /// Path of the generated binding module.
    pub types_out: PathBuf,
    /// Directory that receives one trimmed artifact file per contract.
    ///
    /// The directory is cleared on every run.
    pub artifacts_out: PathBuf,
    /// Module specifier from which the shared typed-contract abstractions are imported.
    pub typing_import: String,
    /// The ordered contract registry. Contracts are bound and persisted in this order.
    pub contracts: Vec<ContractSource>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            types_out: PathBuf::from("src/generated/types.ts"),
            artifacts_out: PathBuf::from("artifacts"),
            typing_import: "../typing".to_string(),
            contracts: Vec::new(),
        }
    }
}

impl Config {
    /// File name of config toml file
    pub const FILE_NAME: &'static str = "bondgen.toml";

    /// Prefix of the environment variables that override config values.
    pub const ENV_PREFIX: &'static str = "BONDGEN_";

    /// Loads the config from `bondgen.toml` in `root`, merged with the environment.
    pub fn load_with_root(root: impl AsRef<Path>) -> Result<Self, ExtractConfigError> {
        let root = root.as_ref();
        Self::try_from(Self::figment_with_file(root.join(Self::FILE_NAME)), root)
    }

    /// Loads the config from an explicit config file, with `root` as the project root.
    pub fn load_with_file(
        root: impl AsRef<Path>,
        file: impl AsRef<Path>,
    ) -> Result<Self, ExtractConfigError> {
        Self::try_from(Self::figment_with_file(file.as_ref()), root.as_ref())
    }

    /// Returns the figment that merges the defaults, the given toml file and the environment.
    ///
    /// A missing toml file is not an error, the defaults apply.
    pub fn figment_with_file(file: impl AsRef<Path>) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(file.as_ref()))
            .merge(Env::prefixed(Self::ENV_PREFIX).ignore(&["DEBUG"]))
    }

    /// Attempts to extract a `Config` from `provider`, returning the result.
    pub fn try_from<T: Provider>(provider: T, root: &Path) -> Result<Self, ExtractConfigError> {
        trace!("load config with provider: {:?}", provider.metadata());
        let figment = Figment::from(provider);
        let mut config =
            figment.extract::<Self>().map_err(|err| ExtractConfigError::new(err, &figment))?;
        config.root = root.to_path_buf();
        Ok(config)
    }

    /// Returns the absolute path of the generated binding module.
    pub fn types_out_path(&self) -> PathBuf {
        self.root.join(&self.types_out)
    }

    /// Returns the absolute path of the artifact output directory.
    pub fn artifacts_out_path(&self) -> PathBuf {
        self.root.join(&self.artifacts_out)
    }

    /// Returns the resolved path of the compiled artifact of `contract`.
    pub fn contract_path(&self, contract: &ContractSource) -> PathBuf {
        self.root.join(&contract.path)
    }

    /// Returns the first contract name that appears more than once in the registry.
    pub fn duplicate_contract(&self) -> Option<&str> {
        self.contracts.iter().enumerate().find_map(|(i, contract)| {
            self.contracts[..i].iter().any(|c| c.name == contract.name).then_some(&*contract.name)
        })
    }
}
