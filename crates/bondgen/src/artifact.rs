//! Compiled contract artifacts: loading, sanitizing and the trimmed form that is persisted.

use crate::{
    abi::{ContractDescriptor, InterfaceDescription},
    error::{BindgenError, Result},
};
use bondgen_common::fs;
use bondgen_config::{ContractSource, Toolchain};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// The `bytecode` field of a compiled artifact.
///
/// Forge nests the hex string in an object next to source maps and link references, while other
/// toolchains emit the string directly.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
enum BytecodeField {
    Object { object: String },
    Hex(String),
}

impl BytecodeField {
    fn into_hex(self) -> String {
        match self {
            Self::Object { object } | Self::Hex(object) => object,
        }
    }
}

/// A compiled artifact reduced to what the generated bindings and deployment need.
///
/// Serialized as `{ "contractName": .., "abi": .., "bytecode": .. }`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrimmedArtifact {
    pub contract_name: String,
    /// The sanitized ABI, otherwise as found in the compiled artifact.
    pub abi: Value,
    pub bytecode: String,
}

/// A registry entry after its artifact has been read.
#[derive(Clone, Debug)]
pub struct LoadedContract {
    pub descriptor: ContractDescriptor,
    pub artifact: TrimmedArtifact,
}

impl TrimmedArtifact {
    /// Extracts the trimmed artifact of `name` from a compiled artifact JSON value.
    pub fn from_json(name: &str, toolchain: Toolchain, mut json: Value) -> Result<Self> {
        let mut abi = json
            .get_mut("abi")
            .map(Value::take)
            .ok_or_else(|| BindgenError::MissingAbi { name: name.to_string() })?;

        let bytecode = json
            .get_mut("bytecode")
            .map(Value::take)
            .and_then(|bytecode| BytecodeField::deserialize(bytecode).ok())
            .ok_or_else(|| BindgenError::MissingBytecode { name: name.to_string() })?
            .into_hex();

        sanitize_abi(&mut abi, toolchain);

        Ok(Self { contract_name: name.to_string(), abi, bytecode })
    }

    /// File name of the persisted artifact, `<name>.json`.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.contract_name)
    }
}

/// Removes the keys `toolchain` emits on ABI fragments that downstream typings reject.
///
/// Only the top-level fields of each fragment are touched.
pub fn sanitize_abi(abi: &mut Value, toolchain: Toolchain) {
    let keys = toolchain.scrubbed_fragment_keys();
    if keys.is_empty() {
        return;
    }
    let Some(fragments) = abi.as_array_mut() else { return };
    for fragment in fragments.iter_mut().filter_map(Value::as_object_mut) {
        for key in keys {
            fragment.remove(*key);
        }
    }
}

impl LoadedContract {
    /// Reads and parses the artifact of `source`, located at `path`.
    pub fn load(source: &ContractSource, path: &Path) -> Result<Self> {
        debug!(contract = %source.name, toolchain = %source.toolchain, ?path, "loading artifact");
        let json: Value = fs::read_json_file(path)?;
        Self::from_json(source, json)
    }

    /// Parses an already read compiled artifact of `source`.
    pub fn from_json(source: &ContractSource, json: Value) -> Result<Self> {
        let artifact = TrimmedArtifact::from_json(&source.name, source.toolchain, json)?;
        let interface = InterfaceDescription::from_json(&source.name, &artifact.abi)?;
        Ok(Self {
            descriptor: ContractDescriptor { name: source.name.clone(), interface },
            artifact,
        })
    }
}
