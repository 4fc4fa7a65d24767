//! Common utilities for the bondgen binding generator.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![warn(missing_docs)]

#[macro_use]
extern crate tracing;

pub mod errors;
pub mod fs;
