use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

mod common;
use common::TestEnv;

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

#[test]
fn validate_json_output_matches_contract() {
    let env = TestEnv::new();
    let out = env.run_json(&["validate"]);
    validate("validate_report.schema.json", &out);
}

#[test]
fn score_json_output_matches_contract() {
    let env = TestEnv::new();
    let out = env.run_json(&["score"]);
    validate("score_report.schema.json", &out);
}

#[test]
fn challenge_json_output_matches_verdict_shape() {
    let env = TestEnv::new();
    let out = env.run_json(&["challenge", "1"]);
    assert_eq!(out["ok"], true);
    let checks = out["data"]["checks"].as_array().expect("checks array");
    assert_eq!(checks.len(), 7);
    for check in checks {
        assert!(check["name"].is_string());
        assert!(check["hint"].is_string());
        assert!(check["passed"].is_boolean());
    }
}
