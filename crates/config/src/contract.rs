use serde::{Deserialize, Serialize};
use std::{fmt, path::PathBuf};

/// A single entry of the contract registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractSource {
    /// The contract name. Used as the declaration prefix and as the artifact file stem.
    pub name: String,
    /// Path to the compiled artifact JSON, relative to the project root.
    pub path: PathBuf,
    /// The toolchain that produced the artifact.
    #[serde(default)]
    pub toolchain: Toolchain,
}

/// The compiler toolchain an artifact was produced by.
///
/// Artifacts of different toolchains differ in shape, see [`Toolchain::scrubbed_fragment_keys`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Toolchain {
    /// Solidity compiled through forge. The primary toolchain.
    #[default]
    Solc,
    /// Vyper.
    Vyper,
}

impl Toolchain {
    /// Keys removed from every ABI fragment before the artifact is persisted.
    ///
    /// Vyper emits `gas` as a number, while the downstream ABI typings only accept a string.
    /// The field is never read downstream, so it is dropped.
    pub fn scrubbed_fragment_keys(self) -> &'static [&'static str] {
        match self {
            Self::Solc => &[],
            Self::Vyper => &["gas"],
        }
    }

    /// Returns the lowercase name of the toolchain.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solc => "solc",
            Self::Vyper => "vyper",
        }
    }
}

impl fmt::Display for Toolchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
