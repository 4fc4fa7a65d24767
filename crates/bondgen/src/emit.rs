//! Module emitter.
//!
//! Generation happens in two phases: [`Bindings::generate`] reads every artifact and renders all
//! output in memory, then [`Bindings::write`] or [`Bindings::check`] touches the disk. A contract
//! that cannot be bound therefore never leaves partial output behind.

use crate::{
    artifact::{LoadedContract, TrimmedArtifact},
    decl::declare_contract,
    error::{BindgenError, Result},
    printer,
    ts::Module,
};
use bondgen_common::fs;
use bondgen_config::Config;
use std::path::{Path, PathBuf};

/// Everything one run produces, rendered and ready to be persisted.
#[derive(Clone, Debug)]
pub struct Bindings {
    types_out: PathBuf,
    artifacts_out: PathBuf,
    /// The generated binding module.
    module: String,
    artifacts: Vec<TrimmedArtifact>,
}

impl Bindings {
    /// Loads every registered contract and renders the bindings, in registry order.
    pub fn generate(config: &Config) -> Result<Self> {
        if let Some(name) = config.duplicate_contract() {
            return Err(BindgenError::DuplicateContract(name.to_string()));
        }

        let mut contracts = Vec::with_capacity(config.contracts.len());
        let mut artifacts = Vec::with_capacity(config.contracts.len());
        for source in &config.contracts {
            let loaded = LoadedContract::load(source, &config.contract_path(source))?;
            contracts.push(declare_contract(&loaded.descriptor)?);
            artifacts.push(loaded.artifact);
        }

        let module = Module { typing_import: config.typing_import.clone(), contracts };
        Ok(Self {
            types_out: config.types_out_path(),
            artifacts_out: config.artifacts_out_path(),
            module: printer::render(&module),
            artifacts,
        })
    }

    /// The rendered binding module.
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Number of bound contracts.
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    fn artifact_path(&self, artifact: &TrimmedArtifact) -> PathBuf {
        self.artifacts_out.join(artifact.file_name())
    }

    /// Replaces the artifact directory and writes the binding module.
    pub fn write(&self) -> Result<()> {
        fs::reset_dir(&self.artifacts_out)?;
        for artifact in &self.artifacts {
            let path = self.artifact_path(artifact);
            fs::write_pretty_json_file(&path, artifact)?;
            debug!(contract = %artifact.contract_name, ?path, "wrote artifact");
        }

        fs::create_parent_dir(&self.types_out)?;
        fs::write(&self.types_out, &self.module)?;
        info!(path = ?self.types_out, contracts = self.len(), "wrote bindings");
        Ok(())
    }

    /// Checks that the files on disk match what [`Bindings::write`] would produce.
    ///
    /// Any other entry in the artifact directory, file or directory, counts as outdated since a
    /// write would remove it.
    pub fn check(&self) -> Result<()> {
        check_file_contents(&self.types_out, &self.module)?;

        let mut expected = Vec::with_capacity(self.artifacts.len());
        for artifact in &self.artifacts {
            let path = self.artifact_path(artifact);
            check_file_contents(&path, &fs::to_pretty_json(&path, artifact)?)?;
            expected.push(path);
        }

        if let Some(stale) =
            fs::dir_entries(&self.artifacts_out)?.into_iter().find(|path| !expected.contains(path))
        {
            return Err(BindgenError::OutdatedBindings { path: stale });
        }

        debug!(contracts = self.len(), "bindings are up to date");
        Ok(())
    }
}

fn check_file_contents(path: &Path, expected: &str) -> Result<()> {
    if !path.is_file() {
        return Err(BindgenError::OutdatedBindings { path: path.to_path_buf() });
    }
    if fs::read_to_string(path)? != expected {
        return Err(BindgenError::OutdatedBindings { path: path.to_path_buf() });
    }
    Ok(())
}
