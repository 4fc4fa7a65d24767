use crate::utils::TestProject;
use snapbox::str;

#[test]
fn generates_bindings() {
    let prj = TestProject::new();
    prj.cmd().assert().success().stdout_eq(str![[r#"
Generated bindings for 2 contracts

"#]]);

    assert!(prj.exists("src/generated/types.ts"));
    assert!(prj.exists("artifacts/BondToken.json"));
    assert!(prj.exists("artifacts/CurveToken.json"));
}

#[test]
fn output_paths_from_args() {
    let prj = TestProject::new();
    prj.cmd()
        .args(["--types-out", "bindings/index.ts", "--artifacts-out", "deploy"])
        .assert()
        .success();

    assert!(prj.exists("bindings/index.ts"));
    assert!(prj.exists("deploy/CurveToken.json"));
    assert!(!prj.exists("src/generated/types.ts"));
    assert!(!prj.exists("artifacts"));
}

#[test]
fn runs_from_other_directory() {
    let prj = TestProject::new();
    let cwd = tempfile::tempdir().unwrap();
    snapbox::cmd::Command::new(env!("CARGO_BIN_EXE_bondgen"))
        .current_dir(cwd.path())
        .env("NO_COLOR", "1")
        .arg("--root")
        .arg(prj.root())
        .assert()
        .success();

    assert!(prj.exists("src/generated/types.ts"));
}

#[test]
fn check_mode() {
    let prj = TestProject::new();
    prj.cmd().arg("--check").assert().failure().stderr_eq(str![[r#"
Error: [..]types.ts is outdated, regenerate the bindings

"#]]);
    assert!(!prj.exists("artifacts"));

    prj.cmd().assert().success();
    prj.cmd().arg("--check").assert().success().stdout_eq(str![[r#"
Bindings for 2 contracts are up to date

"#]]);
}

#[test]
fn unsupported_type_fails() {
    let prj = TestProject::with_config(
        r#"
[[contracts]]
name = "Hook"
path = "out/Hook.json"
"#,
    );
    prj.write(
        "out/Hook.json",
        r#"{
  "abi": [{ "type": "event", "name": "Hooked", "anonymous": false,
            "inputs": [{ "name": "rate", "type": "ufixed128x18", "indexed": false }] }],
  "bytecode": { "object": "0x00" }
}"#,
    );

    prj.cmd().assert().failure().stderr_eq(str![[r#"
Error: unimplemented type ufixed128x18

"#]]);
    assert!(!prj.exists("src/generated/types.ts"));
}

#[test]
fn duplicate_contract_fails() {
    let prj = TestProject::with_config(
        r#"
[[contracts]]
name = "BondToken"
path = "out/BondToken.sol/BondToken.json"

[[contracts]]
name = "BondToken"
path = "curve/CurveTokenV5.json"
toolchain = "vyper"
"#,
    );

    prj.cmd().assert().failure().stderr_eq(str![[r#"
Error: contract BondToken is registered more than once

hint: give each `[[contracts]]` entry named `BondToken` a unique name

"#]]);
}

#[test]
fn missing_abi_fails() {
    let prj = TestProject::with_config(
        r#"
[[contracts]]
name = "Broken"
path = "out/Broken.json"
"#,
    );
    prj.write("out/Broken.json", r#"{ "bytecode": "0x00" }"#);

    prj.cmd().assert().failure().stderr_eq(str![[r#"
Error: no ABI found in artifact of Broken

hint: the `path` of contract `Broken` must point to a compiled artifact with `abi` and `bytecode`

"#]]);
}

#[test]
fn missing_artifact_fails() {
    let prj = TestProject::with_config(
        r#"
[[contracts]]
name = "Ghost"
path = "out/Ghost.json"
"#,
    );

    prj.cmd().assert().failure().stderr_eq(str![[r#"
Error: failed to read from "[..]Ghost.json": [..]

hint: compile the contracts first, [..]Ghost.json does not exist yet

"#]]);
}
