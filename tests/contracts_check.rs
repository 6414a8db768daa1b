mod common;

use common::TestEnv;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let path = root.join("docs/contracts").join(name);
    let raw = fs::read_to_string(&path).expect("read schema");
    serde_json::from_str(&raw).expect("parse schema")
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
fn json_output_matches_contract_for_every_status() {
    let env = TestEnv::new();

    let out = env.run_json(&[], 1);
    assert_eq!(out["data"]["status"], "template_missing");
    validate("sanity-report.schema.json", &out);

    env.write(".env.example", "API_KEY=\nDB_URL=\n");
    let out = env.run_json(&[], 1);
    assert_eq!(out["data"]["status"], "actual_file_missing");
    validate("sanity-report.schema.json", &out);

    env.write(".env", "API_KEY=xyz\n");
    let out = env.run_json(&[], 1);
    assert_eq!(out["data"]["status"], "missing_variables");
    validate("sanity-report.schema.json", &out);

    env.write(".env", "API_KEY=xyz\nDB_URL=postgres://localhost\n");
    let out = env.run_json(&[], 0);
    assert_eq!(out["data"]["status"], "passed");
    validate("sanity-report.schema.json", &out);
}
