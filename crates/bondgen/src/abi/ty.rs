//! The closed ABI type model.
//!
//! Type strings from the JSON ABI are parsed exactly once, when the artifact is ingested. Every
//! later stage matches on [`AbiType`] instead of re-inspecting strings.

use crate::error::{BindgenError, Result};
use alloy_json_abi::{EventParam, Param};
use std::fmt;

/// A parameter, return value or tuple component: a type plus an optional name.
///
/// An empty `name` means the component is positional.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub name: String,
    pub ty: AbiType,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>, ty: AbiType) -> Self {
        Self { name: name.into(), ty }
    }

    /// Builds a descriptor from a JSON ABI parameter, recursing into tuple components.
    pub fn from_param(param: &Param) -> Result<Self> {
        Ok(Self::new(&param.name, AbiType::parse(&param.ty, &param.components)?))
    }

    /// Returns `true` if the component carries a name.
    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }
}

/// An event input: a [`TypeDescriptor`] plus its `indexed` flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventInput {
    pub param: TypeDescriptor,
    pub indexed: bool,
}

impl EventInput {
    pub fn from_param(param: &EventParam) -> Result<Self> {
        Ok(Self {
            param: TypeDescriptor::new(&param.name, AbiType::parse(&param.ty, &param.components)?),
            indexed: param.indexed,
        })
    }
}

/// A Solidity ABI type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AbiType {
    Address,
    Bool,
    String,
    /// Dynamic `bytes`.
    Bytes,
    /// `bytesN`.
    FixedBytes(usize),
    /// `intN`.
    Int(usize),
    /// `uintN`.
    Uint(usize),
    /// `T[]`.
    Array(Box<AbiType>),
    /// `T[k]`.
    FixedArray(Box<AbiType>, usize),
    Tuple(Vec<TypeDescriptor>),
    /// External function pointer.
    Function,
    /// `fixedMxN` / `ufixedMxN`.
    Fixed { signed: bool, bits: usize, decimals: usize },
}

impl AbiType {
    /// Parses a JSON ABI type string.
    ///
    /// `components` are only consulted for `tuple` base types.
    pub fn parse(ty: &str, components: &[Param]) -> Result<Self> {
        let ty = ty.trim();
        if let Some(prefix) = ty.strip_suffix(']') {
            let open = prefix.rfind('[').ok_or_else(|| BindgenError::unsupported(ty))?;
            let (elem, size) = (&prefix[..open], &prefix[open + 1..]);
            let elem = Box::new(Self::parse(elem, components)?);
            return if size.is_empty() {
                Ok(Self::Array(elem))
            } else {
                let size = size.parse().map_err(|_| BindgenError::unsupported(ty))?;
                Ok(Self::FixedArray(elem, size))
            };
        }

        let parsed = match ty {
            "address" => Self::Address,
            "bool" => Self::Bool,
            "string" => Self::String,
            "bytes" => Self::Bytes,
            "function" => Self::Function,
            "tuple" => Self::Tuple(
                components.iter().map(TypeDescriptor::from_param).collect::<Result<_>>()?,
            ),
            "byte" => Self::FixedBytes(1),
            "int" => Self::Int(256),
            "uint" => Self::Uint(256),
            "fixed" => Self::Fixed { signed: true, bits: 128, decimals: 18 },
            "ufixed" => Self::Fixed { signed: false, bits: 128, decimals: 18 },
            _ => Self::parse_sized(ty).ok_or_else(|| BindgenError::unsupported(ty))?,
        };
        Ok(parsed)
    }

    fn parse_sized(ty: &str) -> Option<Self> {
        if let Some(size) = ty.strip_prefix("bytes") {
            return parse_width(size).map(Self::FixedBytes);
        }
        if let Some(bits) = ty.strip_prefix("uint") {
            return parse_width(bits).map(Self::Uint);
        }
        if let Some(bits) = ty.strip_prefix("int") {
            return parse_width(bits).map(Self::Int);
        }
        let (signed, rest) = match ty.strip_prefix("ufixed") {
            Some(rest) => (false, rest),
            None => (true, ty.strip_prefix("fixed")?),
        };
        let (bits, decimals) = rest.split_once('x')?;
        let (bits, decimals) = (parse_width(bits)?, parse_width(decimals)?);
        (decimals <= 80).then_some(Self::Fixed { signed, bits, decimals })
    }
}

/// Parses an all-digit width. Rejects signs and leading `+` that `str::parse` would accept.
///
/// Any width is taken as written; the mapper only looks at the bit count.
fn parse_width(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Formats the canonical type string, with tuples written as `tuple`.
impl fmt::Display for AbiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address => f.write_str("address"),
            Self::Bool => f.write_str("bool"),
            Self::String => f.write_str("string"),
            Self::Bytes => f.write_str("bytes"),
            Self::FixedBytes(size) => write!(f, "bytes{size}"),
            Self::Int(bits) => write!(f, "int{bits}"),
            Self::Uint(bits) => write!(f, "uint{bits}"),
            Self::Array(elem) => write!(f, "{elem}[]"),
            Self::FixedArray(elem, size) => write!(f, "{elem}[{size}]"),
            Self::Tuple(_) => f.write_str("tuple"),
            Self::Function => f.write_str("function"),
            Self::Fixed { signed, bits, decimals } => {
                write!(f, "{}fixed{bits}x{decimals}", if *signed { "" } else { "u" })
            }
        }
    }
}
