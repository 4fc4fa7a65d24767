use bondgen_config::Config;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tempfile::TempDir;

/// The registry used by most tests: one forge artifact and one vyper artifact.
pub const REGISTRY: &str = r#"
[[contracts]]
name = "BondToken"
path = "out/BondToken.sol/BondToken.json"

[[contracts]]
name = "CurveToken"
path = "curve/CurveTokenV5.json"
toolchain = "vyper"
"#;

fn testdata() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

/// A temporary project seeded with the fixture artifacts.
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    /// Creates a project with the fixture artifacts and [`REGISTRY`] as `bondgen.toml`.
    pub fn new() -> Self {
        Self::with_config(REGISTRY)
    }

    pub fn with_config(config: &str) -> Self {
        let prj = Self { dir: tempfile::tempdir().unwrap() };
        for fixture in ["out/BondToken.sol/BondToken.json", "curve/CurveTokenV5.json"] {
            prj.copy_fixture(fixture, fixture);
        }
        prj.write(Config::FILE_NAME, config);
        prj
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Copies a file from `testdata` into the project.
    pub fn copy_fixture(&self, fixture: &str, to: &str) {
        let to = self.root().join(to);
        fs::create_dir_all(to.parent().unwrap()).unwrap();
        fs::copy(testdata().join(fixture), to).unwrap();
    }

    pub fn write(&self, path: &str, contents: &str) {
        let path = self.root().join(path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    pub fn read(&self, path: &str) -> String {
        fs::read_to_string(self.root().join(path)).unwrap()
    }

    pub fn read_json(&self, path: &str) -> serde_json::Value {
        serde_json::from_str(&self.read(path)).unwrap()
    }

    pub fn exists(&self, path: &str) -> bool {
        self.root().join(path).exists()
    }

    pub fn config(&self) -> Config {
        Config::load_with_root(self.root()).unwrap()
    }

    /// A `bondgen` command running in the project root.
    pub fn cmd(&self) -> snapbox::cmd::Command {
        snapbox::cmd::Command::new(env!("CARGO_BIN_EXE_bondgen"))
            .current_dir(self.root())
            .env_remove("RUST_LOG")
            .env_remove("BONDGEN_DEBUG")
            .env("NO_COLOR", "1")
    }
}
