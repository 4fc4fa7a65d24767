//! # bondgen
//!
//! Generates statically typed ethers contract bindings from compiled contract artifacts.
//!
//! Every contract in the [`Config`](bondgen_config::Config) registry is ingested into an
//! [`InterfaceDescription`], turned into structured declarations by [`declare_contract`] and
//! printed into a single TypeScript module. A trimmed copy of each artifact is persisted next to
//! it for deployment.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

pub mod abi;
pub use abi::{AbiType, ContractDescriptor, InterfaceDescription};

pub mod args;
pub mod artifact;

pub mod decl;
pub use decl::declare_contract;

pub mod emit;
pub use emit::Bindings;

pub mod error;
pub use error::{BindgenError, Result};

pub mod handler;
pub mod mapper;
pub mod overload;
pub mod printer;
pub mod ts;
pub mod utils;
