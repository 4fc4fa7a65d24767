use crate::{emit::Bindings, handler, utils};
use bondgen_config::{
    Config,
    figment::{
        self, Metadata, Profile, Provider,
        error::Kind::InvalidType,
        value::{Dict, Map, Value},
    },
};
use clap::{Parser, ValueHint};
use eyre::Result;
use serde::Serialize;
use std::path::PathBuf;
use yansi::Paint;

/// Run the `bondgen` command-line interface.
pub fn run() -> Result<()> {
    setup();
    BondgenArgs::parse().run()
}

/// Setup the global logger and other utilities.
pub fn setup() {
    handler::install();
    utils::subscriber();
    utils::enable_paint();
}

/// Generate typed contract bindings and trimmed artifacts from compiled contract artifacts.
///
/// CLI arguments take the highest precedence: `BondgenArgs` implements `figment::Provider` and
/// is merged over `bondgen.toml` and the environment.
#[derive(Clone, Debug, Default, Serialize, Parser)]
#[command(name = "bondgen", version, about)]
pub struct BondgenArgs {
    /// The project root. Relative paths in the config are resolved against it.
    #[arg(long, value_hint = ValueHint::DirPath, value_name = "PATH", default_value = ".")]
    #[serde(skip)]
    pub root: PathBuf,

    /// Path to the config file. Defaults to `bondgen.toml` in the project root.
    #[arg(long, short, value_hint = ValueHint::FilePath, value_name = "FILE")]
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Path of the generated binding module.
    #[arg(long, value_hint = ValueHint::FilePath, value_name = "PATH")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types_out: Option<PathBuf>,

    /// Directory that receives the trimmed artifacts. Cleared on every run.
    #[arg(long, value_hint = ValueHint::DirPath, value_name = "PATH")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifacts_out: Option<PathBuf>,

    /// Check that the generated files are up to date instead of writing them.
    #[arg(long)]
    #[serde(skip)]
    pub check: bool,
}

impl BondgenArgs {
    pub fn run(self) -> Result<()> {
        let config = self.load_config()?;
        let bindings = Bindings::generate(&config)?;

        if self.check {
            bindings.check()?;
            anstream::println!(
                "{} for {} contracts are up to date",
                "Bindings".green(),
                bindings.len()
            );
        } else {
            bindings.write()?;
            anstream::println!(
                "{} bindings for {} contracts",
                "Generated".green(),
                bindings.len()
            );
        }
        Ok(())
    }

    /// Loads the config, with these arguments merged on top.
    pub fn load_config(&self) -> Result<Config> {
        let file = self.config.clone().unwrap_or_else(|| self.root.join(Config::FILE_NAME));
        debug!(root = ?self.root, ?file, "loading config");
        let figment = Config::figment_with_file(&file).merge(self.clone());
        Ok(Config::try_from(figment, &self.root)?)
    }
}

impl Provider for BondgenArgs {
    fn metadata(&self) -> Metadata {
        Metadata::named("bondgen CLI arguments")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        let value = Value::serialize(self)?;
        let error = InvalidType(value.to_actual(), "map".into());
        let dict = value.into_dict().ok_or(error)?;
        Ok(Map::from([(Profile::Default, dict)]))
    }
}
