#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const ALL_TOOLS: [&str; 3] = ["openroad", "yosys", "klayout"];

/// Stub `openroad` that behaves like a clean run: writes all three reports and exits 0.
pub const OPENROAD_OK: &str = "echo \"OpenROAD stub: $*\"
echo 'slack = 50ps' > reports/timing_report.txt
echo 'Total power 1.2 mW' > reports/power_report.txt
echo 'Design area 240 u^2' > reports/area_report.txt
exit 0";

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    pub bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().join("project");
        let bin = tmp.path().join("bin");
        fs::create_dir_all(root.join("config")).expect("create project config dir");
        fs::create_dir_all(&bin).expect("create stub bin dir");
        fs::write(
            root.join("config/openroad_config.tcl"),
            "set TOP_MODULE vixen_dio_pro\n",
        )
        .expect("write control config");

        Self {
            _tmp: tmp,
            root,
            bin,
        }
    }

    /// Environment with all required tools; `openroad` runs `openroad_body`.
    pub fn with_tools(openroad_body: &str) -> Self {
        let env = Self::new();
        env.stub("openroad", openroad_body);
        env.stub("yosys", "exit 0");
        env.stub("klayout", "exit 0");
        env
    }

    pub fn stub(&self, name: &str, body: &str) -> PathBuf {
        let path = self.bin.join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write stub");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod stub");
        path
    }

    /// Binary invocation isolated to the stub `PATH`, run from the project root.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("vixen-flow");
        cmd.env("PATH", &self.bin)
            .env_remove("VIXEN_FLOW_LOG")
            .current_dir(&self.root);
        cmd
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).expect("read project file")
    }
}

pub fn dir_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}
