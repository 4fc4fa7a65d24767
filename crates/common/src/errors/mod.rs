//! Errors shared by the bondgen crates.

mod fs;
pub use fs::FsPathError;

use std::error::Error;

/// Collects the messages of `error` and its sources, outermost first.
///
/// A source whose message is already part of the previous one is dropped, so an
/// [`FsPathError`] and the io error it embeds read as a single cause.
pub fn dedup_chain(error: &(dyn Error + 'static)) -> Vec<String> {
    let mut causes = std::iter::successors(Some(error), |&err| err.source())
        .map(|err| err.to_string().trim().to_string())
        .filter(|msg| !msg.is_empty())
        .collect::<Vec<_>>();
    causes.dedup_by(|b, a| a.contains(b.as_str()));
    causes
}
