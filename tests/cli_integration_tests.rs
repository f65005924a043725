use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::tempdir;

fn cpu_compare_binary() -> &'static str {
    env!("CARGO_BIN_EXE_cpu-compare")
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Run in an empty directory so no local settings file is picked up.
fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(cpu_compare_binary())
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute cpu-compare")
}

fn run_with_fixture(args: &[&str]) -> Output {
    let dir = tempdir().unwrap();
    let data = fixture("cpu_ranking.txt");
    let mut full_args: Vec<&str> = args.to_vec();
    full_args.push("--data");
    full_args.push(data.to_str().unwrap());
    run_in(dir.path(), &full_args)
}

#[test]
fn test_cli_help_command() {
    let output = Command::new(cpu_compare_binary())
        .arg("--help")
        .output()
        .expect("Failed to execute cpu-compare --help");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("list"));
    assert!(stdout.contains("show"));
    assert!(stdout.contains("search"));
    assert!(stdout.contains("compare"));
}

#[test]
fn test_list_prints_table() {
    let output = run_with_fixture(&["list"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("CPU Name"));
    assert!(stdout.contains("AMD Ryzen 9 7950X3D"));
    assert!(stdout.contains("19460"));
}

#[test]
fn test_search_prints_matches() {
    let output = run_with_fixture(&["search", "apple"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "Apple M3 Max 16 Core\nApple M2\n");
}

#[test]
fn test_search_empty_query_prints_nothing() {
    let output = run_with_fixture(&["search", ""]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_compare_prints_verdict() {
    let output = run_with_fixture(&["compare", "Apple M2", "Intel Core i5-12400"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Intel Core i5-12400 has a higher score than Apple M2."));
}

#[test]
fn test_compare_json() {
    let output = run_with_fixture(&["compare", "Apple M2", "Apple M2", "--format", "json"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["outcome"], "equal");
    assert_eq!(value["difference"], 0);
}

#[test]
fn test_compare_unknown_cpu_fails_with_advisory() {
    let output = run_with_fixture(&["compare", "Pentium 4", "Apple M2"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("CPU 'Pentium 4' was not found in the catalog."));
}

#[test]
fn test_compare_incomplete_selection() {
    let output = run_with_fixture(&["compare", "", "Apple M2"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Please select two CPUs to compare."));
}

#[test]
fn test_truncated_data_aborts() {
    let dir = tempdir().unwrap();
    let data = fixture("truncated.txt");
    let output = run_in(dir.path(), &["list", "--data", data.to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("truncated"));
}

#[test]
fn test_missing_data_file_aborts() {
    let dir = tempdir().unwrap();
    let output = run_in(dir.path(), &["list"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("cpu_ranking.txt"));
    assert!(stderr.contains("unavailable"));
}

#[test]
fn test_local_settings_file_supplies_data_and_format() {
    let dir = tempdir().unwrap();
    fs::copy(fixture("cpu_ranking.txt"), dir.path().join("ranking.txt")).unwrap();
    fs::write(
        dir.path().join("cpu-compare.yaml"),
        "data_file: ranking.txt\nformat: json\n",
    )
    .unwrap();

    let output = run_in(dir.path(), &["show", "Apple M2"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["score"], 15200);
}

#[test]
fn test_explicit_missing_config_fails() {
    let dir = tempdir().unwrap();
    let output = run_in(dir.path(), &["list", "--config", "absent.yaml"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Settings file not found"));
}

#[test]
fn test_malformed_local_config_reports_yaml_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("cpu-compare.yaml"), "format: [json\n").unwrap();

    let output = run_in(dir.path(), &["list"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to load settings: Invalid settings YAML"));
}

#[test]
fn test_explicit_config_path_is_named_in_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("custom.yaml"), "colour: blue\n").unwrap();

    let output = run_in(dir.path(), &["list", "--config", "custom.yaml"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to load settings from custom.yaml"));
}
