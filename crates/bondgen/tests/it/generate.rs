use crate::utils::{REGISTRY, TestProject};
use bondgen::{BindgenError, Bindings};
use serde_json::json;
use similar_asserts::assert_eq;
use snapbox::{assert_data_eq, str};

const TYPES: &str = "src/generated/types.ts";

fn generate(prj: &TestProject) -> Bindings {
    let bindings = Bindings::generate(&prj.config()).unwrap();
    bindings.write().unwrap();
    bindings
}

#[test]
fn renders_module() {
    let prj = TestProject::new();
    let bindings = generate(&prj);
    assert_eq!(bindings.module(), prj.read(TYPES).as_str());

    assert_data_eq!(
        prj.read(TYPES),
        str![[r#"
// Automatically @generated by `bondgen`. Do not edit.

import { Log } from "@ethersproject/abstract-provider";
import { BigNumber, BigNumberish } from "@ethersproject/bignumber";
import { BytesLike } from "@ethersproject/bytes";
import { Overrides, CallOverrides, PayableOverrides, EventFilter } from "@ethersproject/contracts";

import { TypedContract, TypedContractFactory, TypedLogDescription } from "../typing";

interface BondTokenCalls {
  balanceOf(account: string, _overrides?: CallOverrides): Promise<BigNumber>;
  getBond(bondID: BigNumberish, _overrides?: CallOverrides): Promise<{ lusdAmount: BigNumber; startTime: BigNumber; status: number }>;
  getReserves(_overrides?: CallOverrides): Promise<{ reserve0: BigNumber; reserve1: BigNumber; blockTimestampLast: number }>;
}

interface BondTokenTransactions {
  ["transfer(address,uint256)"](to: string, amount: BigNumberish, _overrides?: Overrides): Promise<boolean>;
  ["transfer(address,uint256,bytes)"](to: string, amount: BigNumberish, data: BytesLike, _overrides?: Overrides): Promise<boolean>;
  deposit(_overrides?: PayableOverrides): Promise<void>;
}

export interface BondToken
  extends TypedContract<BondTokenCalls, BondTokenTransactions> {
  readonly filters: {
    Transfer(from?: string | null, to?: string | null, value?: null): EventFilter;
    BondCreated(bonder?: string | null, bondId?: null, amount?: null): EventFilter;
  };
  extractEvents(logs: Log[], name: "Transfer"): TypedLogDescription<{ from: string; to: string; value: BigNumber }>[];
  extractEvents(logs: Log[], name: "BondCreated"): TypedLogDescription<{ bonder: string; bondId: BigNumber; amount: BigNumber }>[];
}

export type BondTokenFactory = TypedContractFactory<BondToken, [_name: string, _cap: BigNumberish, _overrides?: Overrides]>;

interface CurveTokenCalls {
  balanceOf(arg0: string, _overrides?: CallOverrides): Promise<BigNumber>;
}

interface CurveTokenTransactions {
  mint(_to: string, _value: BigNumberish, _overrides?: Overrides): Promise<boolean>;
}

export interface CurveToken
  extends TypedContract<CurveTokenCalls, CurveTokenTransactions> {
  readonly filters: {
    Transfer(sender?: string | null, receiver?: string | null, value?: null): EventFilter;
  };
  extractEvents(logs: Log[], name: "Transfer"): TypedLogDescription<{ sender: string; receiver: string; value: BigNumber }>[];
}

export type CurveTokenFactory = TypedContractFactory<CurveToken, [_name: string, _symbol: string, _overrides?: Overrides]>;

"#]]
    );
}

#[test]
fn writes_trimmed_artifacts() {
    let prj = TestProject::new();
    generate(&prj);

    let bond_token = prj.read_json("artifacts/BondToken.json");
    assert_eq!(
        bond_token.as_object().unwrap().keys().collect::<Vec<_>>(),
        ["contractName", "abi", "bytecode"]
    );
    assert_eq!(bond_token["contractName"], "BondToken");
    assert_eq!(bond_token["bytecode"], "0x608060405234801561001057600080fd5b50");

    let compiled = prj.read_json("out/BondToken.sol/BondToken.json");
    assert_eq!(bond_token["abi"], compiled["abi"]);

    let curve_token = prj.read_json("artifacts/CurveToken.json");
    assert_eq!(curve_token["bytecode"], "0x61082c56600436101561000d576105f4565b");

    let persisted = prj.read("artifacts/BondToken.json");
    assert!(persisted.starts_with("{\n  \"contractName\": \"BondToken\",\n  \"abi\": ["));
}

#[test]
fn gas_patch_only_applies_to_vyper() {
    let prj = TestProject::new();
    // a forge artifact that carries `gas` keeps it
    let mut compiled = prj.read_json("out/BondToken.sol/BondToken.json");
    compiled["abi"][1]["gas"] = json!(2963);
    prj.write("out/BondToken.sol/BondToken.json", &compiled.to_string());

    generate(&prj);

    let bond_token = prj.read_json("artifacts/BondToken.json");
    assert_eq!(bond_token["abi"][1]["gas"], json!(2963));

    let curve_token = prj.read_json("artifacts/CurveToken.json");
    let fragments = curve_token["abi"].as_array().unwrap();
    assert_eq!(fragments.len(), 4);
    assert!(fragments.iter().all(|fragment| fragment.get("gas").is_none()));
    assert_eq!(
        fragments[2],
        json!({
            "stateMutability": "view",
            "type": "function",
            "name": "balanceOf",
            "inputs": [{ "name": "arg0", "type": "address" }],
            "outputs": [{ "name": "", "type": "uint256" }]
        })
    );
}

#[test]
fn is_idempotent() {
    let prj = TestProject::new();
    generate(&prj);
    let types = prj.read(TYPES);
    let artifacts =
        ["BondToken", "CurveToken"].map(|name| prj.read(&format!("artifacts/{name}.json")));

    generate(&prj);
    assert_eq!(prj.read(TYPES), types);
    for (name, artifact) in ["BondToken", "CurveToken"].iter().zip(&artifacts) {
        assert_eq!(&prj.read(&format!("artifacts/{name}.json")), artifact);
    }
}

#[test]
fn resets_artifact_directory() {
    let prj = TestProject::new();
    prj.write("artifacts/Retired.json", "{}");
    prj.write("artifacts/nested/Old.json", "{}");

    generate(&prj);

    assert!(!prj.exists("artifacts/Retired.json"));
    assert!(!prj.exists("artifacts/nested"));
    assert!(prj.exists("artifacts/BondToken.json"));
    assert!(prj.exists("artifacts/CurveToken.json"));
}

#[test]
fn unsupported_type_aborts_before_writing() {
    let prj = TestProject::new();
    prj.write(
        "out/Hook.sol/Hook.json",
        &json!({
            "abi": [{
                "type": "function",
                "name": "register",
                "inputs": [{ "name": "callback", "type": "function" }],
                "outputs": [],
                "stateMutability": "nonpayable"
            }],
            "bytecode": { "object": "0x00" }
        })
        .to_string(),
    );
    prj.write(
        "bondgen.toml",
        &format!("{REGISTRY}\n[[contracts]]\nname = \"Hook\"\npath = \"out/Hook.sol/Hook.json\"\n"),
    );
    prj.write("artifacts/Keep.json", "{}");

    let err = Bindings::generate(&prj.config()).unwrap_err();
    assert_eq!(err.to_string(), "unimplemented type function");
    assert!(matches!(err, BindgenError::UnsupportedType(_)));

    assert!(!prj.exists(TYPES));
    assert!(prj.exists("artifacts/Keep.json"));
}

#[test]
fn empty_registry_writes_header_only() {
    let prj = TestProject::with_config(r#"typing_import = "@bonds/typing""#);
    let bindings = generate(&prj);
    assert!(bindings.is_empty());

    let types = prj.read(TYPES);
    assert!(types.ends_with(concat!(
        "import { TypedContract, TypedContractFactory, TypedLogDescription } ",
        "from \"@bonds/typing\";\n\n\n"
    )));
    assert!(prj.exists("artifacts"));
}

#[test]
fn check_mode_reports_outdated_files() {
    let prj = TestProject::new();
    let bindings = Bindings::generate(&prj.config()).unwrap();
    assert!(matches!(bindings.check(), Err(BindgenError::OutdatedBindings { .. })));

    bindings.write().unwrap();
    bindings.check().unwrap();

    prj.write("artifacts/Retired.json", "{}");
    let err = bindings.check().unwrap_err();
    assert_eq!(
        err.to_string(),
        format!(
            "{} is outdated, regenerate the bindings",
            prj.root().join("artifacts/Retired.json").display()
        )
    );
    // check mode never deletes
    assert!(prj.exists("artifacts/Retired.json"));
}

#[test]
fn check_mode_reports_stale_subdirectory() {
    let prj = TestProject::new();
    let bindings = generate(&prj);
    bindings.check().unwrap();

    prj.write("artifacts/nested/Old.json", "{}");
    let err = bindings.check().unwrap_err();
    assert_eq!(
        err.to_string(),
        format!(
            "{} is outdated, regenerate the bindings",
            prj.root().join("artifacts/nested").display()
        )
    );

    bindings.write().unwrap();
    assert!(!prj.exists("artifacts/nested"));
    bindings.check().unwrap();
}
