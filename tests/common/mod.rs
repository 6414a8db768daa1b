#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub struct TestEnv {
    tmp: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            tmp: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn dir(&self) -> &Path {
        self.tmp.path()
    }

    pub fn write(&self, name: &str, content: &str) -> &Self {
        fs::write(self.dir().join(name), content).expect("write env fixture");
        self
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("env-sanity-check");
        cmd.current_dir(self.dir())
            .env_remove("ENV_SANITY_TEMPLATE")
            .env_remove("ENV_SANITY_FILE")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn run_json(&self, args: &[&str], code: i32) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .code(code)
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}
