#![cfg(unix)]

mod common;

use common::{dir_names, TestEnv};
use predicates::str::contains;

#[test]
fn help_prints_usage_and_does_no_work() {
    for flag in ["-h", "--help"] {
        let env = TestEnv::new();
        env.cmd()
            .arg(flag)
            .assert()
            .success()
            .stdout(contains("Vixen Dio Pro Synthesis Flow"))
            .stdout(contains("Usage:"));
        assert_eq!(dir_names(&env.root), vec!["config"]);
    }
}

#[test]
fn long_help_describes_the_flow() {
    let env = TestEnv::new();
    env.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("complete OpenROAD synthesis flow"));
}

#[test]
fn version_flag_exits_zero() {
    let env = TestEnv::new();
    env.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("vixen-flow"));
}

#[test]
fn stray_arguments_still_run_the_flow() {
    let env = TestEnv::new();
    env.cmd()
        .arg("whatever")
        .assert()
        .failure()
        .stdout(contains("Missing required tools"));
}
