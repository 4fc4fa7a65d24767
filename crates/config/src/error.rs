//! Errors raised while extracting the [`Config`](crate::Config).

use crate::ContractSource;
use figment::{Figment, value::Value};
use std::{error::Error, fmt};

/// The message shown upon failing to extract the config from the figment.
pub const FAILED_TO_EXTRACT_CONFIG_MSG: &str = "failed to extract bondgen config:";

/// A failed attempt to extract the [`Config`](crate::Config).
///
/// Each distinct problem is reported once, on its own line. Problems inside the contract registry
/// name the `[[contracts]]` entry they were found in.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractConfigError {
    error: figment::Error,
    issues: Vec<String>,
}

impl ExtractConfigError {
    /// Describes every error in `error`, using `figment` to locate registry entries.
    pub fn new(error: figment::Error, figment: &Figment) -> Self {
        let mut issues = Vec::with_capacity(error.count());
        for err in error.clone() {
            let issue = describe(&err, figment);
            if !issues.contains(&issue) {
                issues.push(issue);
            }
        }
        Self { error, issues }
    }
}

/// `<where>: <what> (in <source>)`.
fn describe(err: &figment::Error, figment: &Figment) -> String {
    let mut issue = match (registry_entry(err, figment), err.path.as_slice()) {
        (Some(entry), _) => format!("{entry}: "),
        (None, []) => String::new(),
        (None, path) => format!("`{}`: ", path.join(".")),
    };
    issue.push_str(&err.kind.to_string());
    if let Some(meta) = &err.metadata {
        match &meta.source {
            Some(source) => issue.push_str(&format!(" (in {source})")),
            None => issue.push_str(&format!(" (in {})", meta.name)),
        }
    }
    issue
}

/// Names the registry entry an error under `contracts` belongs to, e.g. `contract #1 (Vault)`.
///
/// Falls back to the first entry that does not deserialize when the error carries no index.
fn registry_entry(err: &figment::Error, figment: &Figment) -> Option<String> {
    let (registry, rest) = err.path.split_first()?;
    if registry != "contracts" {
        return None;
    }
    let entries = figment.extract_inner::<Vec<Value>>("contracts").ok()?;
    let index = match rest.first().and_then(|key| key.parse::<usize>().ok()) {
        Some(index) => index,
        None => entries.iter().position(|entry| entry.deserialize::<ContractSource>().is_err())?,
    };
    let entry = match entries.get(index)?.find_ref("name").and_then(Value::as_str) {
        Some(name) => format!("contract #{index} ({name})"),
        None => format!("contract #{index}"),
    };
    Some(entry)
}

impl fmt::Display for ExtractConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{FAILED_TO_EXTRACT_CONFIG_MSG}")?;
        for issue in &self.issues {
            writeln!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl Error for ExtractConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Error::source(&self.error)
    }
}
