//! Overload resolution.
//!
//! ethers exposes an overloaded function only under its full signature, so the member key of
//! every function depends on whether another function of the same contract shares its name.

use crate::{abi::FunctionEntry, ts::MemberKey};

/// Returns `true` if another entry shares the name of `entry` under a different signature.
pub fn is_overloaded(entry: &FunctionEntry, siblings: &[FunctionEntry]) -> bool {
    siblings.iter().any(|other| other.name == entry.name && other.signature != entry.signature)
}

/// Returns the declaration key of `entry` among all functions of its contract.
pub fn member_key(entry: &FunctionEntry, siblings: &[FunctionEntry]) -> MemberKey {
    if is_overloaded(entry, siblings) {
        MemberKey::Signature(entry.signature.clone())
    } else {
        MemberKey::Name(entry.name.clone())
    }
}
