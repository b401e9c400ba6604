// tests/cli.rs
//! Mock generator CLI tests.

use assert_cmd::Command;
use assert_fs::fixture::FileWriteStr;
use assert_fs::fixture::PathChild;
use predicates::prelude::*;
use predicates::str::contains;

type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Temp dir whose config turns colors and timestamps off.
fn plain_dir() -> Result<assert_fs::TempDir, Box<dyn std::error::Error>> {
    let tmp = assert_fs::TempDir::new()?;
    tmp.child(".mock-generator.toml")
        .write_str("color = \"never\"\ntimestamps = false\n")?;
    Ok(tmp)
}

fn bin(dir: &assert_fs::TempDir) -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("mock-generator")?;
    cmd.current_dir(dir);
    Ok(cmd)
}

#[test]
fn dies_no_args() -> TestResult {
    let tmp = plain_dir()?;
    bin(&tmp)?
        .assert()
        .code(1)
        .stderr(contains("Invalid usage"))
        .stderr(contains("--check-mocks-autogen <CommitSHA1> <CommitSHA2>"));
    Ok(())
}

#[test]
fn unknown_flag_matches_no_args_output() -> TestResult {
    let tmp = plain_dir()?;
    let none = bin(&tmp)?.output()?;
    let unknown = bin(&tmp)?.arg("--not-a-flag").output()?;
    assert_eq!(unknown.status.code(), Some(1));
    assert_eq!(none.stderr, unknown.stderr);
    Ok(())
}

#[test]
fn each_flag_succeeds_with_one_line() -> TestResult {
    let tmp = plain_dir()?;
    for flag in [
        "--mock-all",
        "--check-mocks-autogen",
        "--commit-unstaged-mocks",
    ] {
        let out = bin(&tmp)?.arg(flag).output()?;
        assert_eq!(out.status.code(), Some(0), "flag {flag}");
        let stderr = String::from_utf8(out.stderr)?;
        assert_eq!(stderr.lines().count(), 1, "got: {stderr}");
        assert!(stderr.starts_with("mock_generator: Yeeey!"), "got: {stderr}");
        assert!(stderr.contains(&format!("{flag} flag")), "got: {stderr}");
    }
    Ok(())
}

#[test]
fn check_mocks_ignores_commit_values() -> TestResult {
    let tmp = plain_dir()?;
    let a = bin(&tmp)?
        .args(["--check-mocks-autogen", "abc123", "def456"])
        .output()?;
    let b = bin(&tmp)?
        .args(["--check-mocks-autogen", "0f4d524", "not-even-a-sha", "third"])
        .output()?;
    assert_eq!(a.status.code(), Some(0));
    assert_eq!(b.status.code(), Some(0));
    assert_eq!(a.stderr, b.stderr);
    assert!(String::from_utf8(a.stderr)?.contains("--check-mocks-autogen flag"));
    Ok(())
}

#[test]
fn only_first_flag_runs() -> TestResult {
    let tmp = plain_dir()?;
    bin(&tmp)?
        .args(["--mock-all", "--commit-unstaged-mocks"])
        .assert()
        .success()
        .stderr(contains("--mock-all flag"))
        .stderr(contains("--commit-unstaged-mocks").not());
    Ok(())
}

#[test]
fn flag_must_come_first() -> TestResult {
    let tmp = plain_dir()?;
    bin(&tmp)?
        .args(["extra", "--mock-all"])
        .assert()
        .code(1)
        .stderr(contains("Invalid usage"));
    Ok(())
}

#[test]
fn default_output_is_colored() -> TestResult {
    let tmp = assert_fs::TempDir::new()?;
    bin(&tmp)?
        .arg("--mock-all")
        .assert()
        .success()
        .stderr(contains("\x1b[36mmock_generator: \x1b[0m\x1b[32mYeeey!"))
        .stderr(predicate::str::is_match(r"^\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2} ")?);
    Ok(())
}

#[test]
fn fatal_usage_is_red() -> TestResult {
    let tmp = assert_fs::TempDir::new()?;
    bin(&tmp)?
        .assert()
        .code(1)
        .stderr(contains("\x1b[31mInvalid usage"))
        .stderr(contains("aborting...\x1b[0m"));
    Ok(())
}

#[test]
fn stray_config_key_only_warns() -> TestResult {
    let tmp = assert_fs::TempDir::new()?;
    tmp.child(".mock-generator.toml")
        .write_str("verbose = true\n")?;
    bin(&tmp)?
        .arg("--mock-all")
        .assert()
        .code(0)
        .stderr(contains("\x1b[33minvalid config"))
        .stderr(contains("using defaults"))
        .stderr(contains("--mock-all flag"));
    Ok(())
}

#[test]
fn broken_config_still_reports_usage() -> TestResult {
    let tmp = assert_fs::TempDir::new()?;
    tmp.child(".mock-generator.toml")
        .write_str("color = \"sometimes\"\n")?;
    bin(&tmp)?
        .assert()
        .code(1)
        .stderr(contains("invalid config"))
        .stderr(contains("Invalid usage"));
    Ok(())
}

#[test]
fn help_is_not_a_flag() -> TestResult {
    let tmp = plain_dir()?;
    bin(&tmp)?
        .arg("--help")
        .assert()
        .code(1)
        .stderr(contains("Invalid usage"))
        .stdout("");
    Ok(())
}

#[test]
fn stdout_stays_empty() -> TestResult {
    let tmp = plain_dir()?;
    bin(&tmp)?.arg("--mock-all").assert().success().stdout("");
    Ok(())
}
