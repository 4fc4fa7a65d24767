//! Maps ABI types to TypeScript types.

use crate::{
    abi::{AbiType, TypeDescriptor},
    error::{BindgenError, Result},
    ts::TsType,
};

/// Integers at least this wide do not fit a JavaScript `number` without loss.
pub const MAX_SAFE_INTEGER_BITS: usize = 53;

/// Which representation a mapped type uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fidelity {
    /// Accept every representation ethers can coerce. Used for arguments.
    Flexible,
    /// The exact representation ethers decodes into. Used for return values and event fields.
    Precise,
}

impl Fidelity {
    pub const fn is_flexible(self) -> bool {
        matches!(self, Self::Flexible)
    }
}

/// Maps a single ABI type.
pub fn map_type(ty: &AbiType, fidelity: Fidelity) -> Result<TsType> {
    let mapped = match ty {
        AbiType::Address | AbiType::String => TsType::String,
        AbiType::Bool => TsType::Boolean,
        AbiType::Array(elem) | AbiType::FixedArray(elem, _) => {
            TsType::array(map_type(elem, fidelity)?)
        }
        AbiType::Tuple(components) => map_tuple(components, fidelity)?,
        AbiType::Bytes | AbiType::FixedBytes(_) => {
            if fidelity.is_flexible() {
                TsType::BytesLike
            } else {
                TsType::String
            }
        }
        AbiType::Int(bits) | AbiType::Uint(bits) => match fidelity {
            Fidelity::Flexible => TsType::BigNumberish,
            Fidelity::Precise if *bits >= MAX_SAFE_INTEGER_BITS => TsType::BigNumber,
            Fidelity::Precise => TsType::Number,
        },
        AbiType::Function | AbiType::Fixed { .. } => return Err(BindgenError::unsupported(ty)),
    };
    Ok(mapped)
}

/// Maps a list of components to a record if every component is named, and to a positional tuple
/// otherwise.
pub fn map_tuple(components: &[TypeDescriptor], fidelity: Fidelity) -> Result<TsType> {
    if components.iter().all(TypeDescriptor::is_named) {
        let fields = components
            .iter()
            .map(|c| Ok((c.name.clone(), map_type(&c.ty, fidelity)?)))
            .collect::<Result<_>>()?;
        Ok(TsType::Record(fields))
    } else {
        let elems = components.iter().map(|c| map_type(&c.ty, fidelity)).collect::<Result<_>>()?;
        Ok(TsType::Tuple(elems))
    }
}
