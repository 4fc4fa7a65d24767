//! Error reporting for the `bondgen` binary.

use crate::error::BindgenError;
use bondgen_common::errors::{FsPathError, dedup_chain};
use eyre::EyreHandler;
use itertools::Itertools;
use std::{error::Error, fmt, io};

/// Reports a failed run as its deduplicated cause chain, followed by a hint on how to fix the
/// registry or the artifacts when the failure points at one.
///
/// With `BONDGEN_DEBUG` set, reports are delegated to the color-eyre handler instead.
pub struct Handler {
    debug_handler: Option<Box<dyn EyreHandler>>,
}

impl Handler {
    pub fn new(debug_handler: Option<Box<dyn EyreHandler>>) -> Self {
        Self { debug_handler }
    }
}

impl EyreHandler for Handler {
    fn display(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", dedup_chain(error).iter().format(": "))
    }

    fn debug(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(debug_handler) = &self.debug_handler {
            return debug_handler.debug(error, f);
        }
        if f.alternate() {
            return fmt::Debug::fmt(error, f);
        }

        let causes = dedup_chain(error);
        let Some((message, sources)) = causes.split_first() else { return Ok(()) };
        write!(f, "{message}")?;
        for source in sources {
            write!(f, "\n  caused by: {source}")?;
        }
        if let Some(hint) = error.downcast_ref::<BindgenError>().and_then(hint) {
            write!(f, "\n\nhint: {hint}")?;
        }
        Ok(())
    }

    fn track_caller(&mut self, location: &'static std::panic::Location<'static>) {
        if let Some(debug_handler) = &mut self.debug_handler {
            debug_handler.track_caller(location);
        }
    }
}

/// What the user can change to make the next run succeed, if the error says so.
fn hint(error: &BindgenError) -> Option<String> {
    match error {
        BindgenError::DuplicateContract(name) => {
            Some(format!("give each `[[contracts]]` entry named `{name}` a unique name"))
        }
        BindgenError::MissingAbi { name } | BindgenError::MissingBytecode { name } => Some(format!(
            "the `path` of contract `{name}` must point to a compiled artifact with `abi` and \
             `bytecode`"
        )),
        BindgenError::Fs(err) => fs_hint(err),
        BindgenError::UnsupportedType(_)
        | BindgenError::InvalidAbi { .. }
        | BindgenError::OutdatedBindings { .. } => None,
    }
}

fn fs_hint(err: &FsPathError) -> Option<String> {
    match err {
        FsPathError::Read { source, .. } if source.kind() == io::ErrorKind::NotFound => Some(
            format!("compile the contracts first, {} does not exist yet", err.path().display()),
        ),
        FsPathError::ReadJson { .. } => {
            Some(format!("{} is not a compiled artifact", err.path().display()))
        }
        _ => None,
    }
}

/// Installs the bondgen [`eyre`] and [`panic`](mod@std::panic) hooks as the global ones.
///
/// Panics always go through the color-eyre panic hook.
pub fn install() {
    let panic_section = "This is a bug in bondgen, please report it along with the artifacts used.";
    let (panic_hook, debug_hook) =
        color_eyre::config::HookBuilder::default().panic_section(panic_section).into_hooks();
    panic_hook.install();
    let debug_hook = debug_hook.into_eyre_hook();
    let debug = std::env::var_os("BONDGEN_DEBUG").is_some();
    if let Err(e) = eyre::set_hook(Box::new(move |e| {
        Box::new(Handler::new(debug.then(|| debug_hook(e))))
    })) {
        debug!("failed to install eyre error hook: {e}");
    }
}
