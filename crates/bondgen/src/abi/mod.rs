//! Interface descriptions ingested from JSON ABIs.

use crate::error::{BindgenError, Result};
use alloy_json_abi::{Constructor, Event, Function, StateMutability};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;

mod ty;
pub use ty::{AbiType, EventInput, TypeDescriptor};

/// A named contract and its parsed interface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractDescriptor {
    pub name: String,
    pub interface: InterfaceDescription,
}

/// The parsed form of a contract ABI.
///
/// Functions and events keep their ABI declaration order. Signatures are unique; names may repeat
/// across overloads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InterfaceDescription {
    pub functions: Vec<FunctionEntry>,
    pub events: Vec<EventDescriptor>,
    pub constructor: ConstructorDescriptor,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionEntry {
    /// Canonical signature, e.g. `transfer(address,uint256)`.
    pub signature: String,
    pub name: String,
    pub inputs: Vec<TypeDescriptor>,
    pub outputs: Vec<TypeDescriptor>,
    /// `view` or `pure`.
    pub read_only: bool,
    pub payable: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventDescriptor {
    pub name: String,
    pub inputs: Vec<EventInput>,
}

/// Contracts without an explicit constructor get the implicit non-payable, argument-less one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConstructorDescriptor {
    pub inputs: Vec<TypeDescriptor>,
    pub payable: bool,
}

impl FunctionEntry {
    fn from_abi(function: &Function) -> Result<Self> {
        Ok(Self {
            signature: function.signature(),
            name: function.name.clone(),
            inputs: descriptors(&function.inputs)?,
            outputs: descriptors(&function.outputs)?,
            read_only: matches!(
                function.state_mutability,
                StateMutability::View | StateMutability::Pure
            ),
            payable: function.state_mutability == StateMutability::Payable,
        })
    }
}

impl EventDescriptor {
    fn from_abi(event: &Event) -> Result<Self> {
        Ok(Self {
            name: event.name.clone(),
            inputs: event.inputs.iter().map(EventInput::from_param).collect::<Result<_>>()?,
        })
    }
}

impl ConstructorDescriptor {
    fn from_abi(constructor: &Constructor) -> Result<Self> {
        Ok(Self {
            inputs: descriptors(&constructor.inputs)?,
            payable: constructor.state_mutability == StateMutability::Payable,
        })
    }
}

fn descriptors(params: &[alloy_json_abi::Param]) -> Result<Vec<TypeDescriptor>> {
    params.iter().map(TypeDescriptor::from_param).collect()
}

impl InterfaceDescription {
    /// Parses the `abi` array of a compiled artifact.
    ///
    /// Entries are deserialized one at a time so declaration order survives. Fallback, receive
    /// and error entries carry nothing that is bound and are skipped. A function or event whose
    /// signature was already seen is dropped, the first declaration wins.
    pub fn from_json(contract: &str, abi: &Value) -> Result<Self> {
        let invalid = |source| BindgenError::InvalidAbi { name: contract.to_string(), source };
        let entries = Vec::<Value>::deserialize(abi).map_err(invalid)?;

        let mut interface = Self::default();
        let (mut functions, mut events) = (HashSet::new(), HashSet::new());
        for entry in &entries {
            // Entries without a `type` are functions.
            match entry.get("type").and_then(Value::as_str).unwrap_or("function") {
                "function" => {
                    let function = Function::deserialize(entry).map_err(invalid)?;
                    let function = FunctionEntry::from_abi(&function)?;
                    if !functions.insert(function.signature.clone()) {
                        warn!(contract, signature = %function.signature, "duplicate definition");
                        continue;
                    }
                    interface.functions.push(function);
                }
                "event" => {
                    let event = Event::deserialize(entry).map_err(invalid)?;
                    let signature = event.signature();
                    if !events.insert(signature.clone()) {
                        warn!(contract, %signature, "duplicate definition");
                        continue;
                    }
                    interface.events.push(EventDescriptor::from_abi(&event)?);
                }
                "constructor" => {
                    let constructor = Constructor::deserialize(entry).map_err(invalid)?;
                    interface.constructor = ConstructorDescriptor::from_abi(&constructor)?;
                }
                kind => trace!(contract, kind, "skipping ABI entry"),
            }
        }
        Ok(interface)
    }
}
