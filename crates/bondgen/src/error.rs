use bondgen_common::errors::FsPathError;
use std::path::PathBuf;

/// Result alias for fallible binding generation.
pub type Result<T, E = BindgenError> = std::result::Result<T, E>;

/// Errors that abort a generation run.
///
/// None of these are recoverable: the run stops at the first one.
#[derive(Debug, thiserror::Error)]
pub enum BindgenError {
    /// An ABI type has no mapping to a binding type.
    #[error("unimplemented type {0}")]
    UnsupportedType(String),
    /// The compiled artifact has no `abi` field.
    #[error("no ABI found in artifact of {name}")]
    MissingAbi { name: String },
    /// The compiled artifact has no usable `bytecode` field.
    #[error("no bytecode found in artifact of {name}")]
    MissingBytecode { name: String },
    /// The `abi` field could not be parsed into an interface description.
    #[error("invalid ABI in artifact of {name}: {source}")]
    InvalidAbi { name: String, source: serde_json::Error },
    /// Two registry entries share a contract name.
    #[error("contract {0} is registered more than once")]
    DuplicateContract(String),
    /// A file on disk differs from what would be generated.
    #[error("{} is outdated, regenerate the bindings", path.display())]
    OutdatedBindings { path: PathBuf },
    #[error(transparent)]
    Fs(#[from] FsPathError),
}

impl BindgenError {
    pub(crate) fn unsupported(ty: impl ToString) -> Self {
        Self::UnsupportedType(ty.to_string())
    }
}
