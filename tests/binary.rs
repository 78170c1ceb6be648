use std::io::Write;
use std::process::{Command, Output, Stdio};

use census::testutil::{NJ_DATA, bundled_data_path, temp_data_file};

fn run_census(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_census"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("CENSUS_DATA__PATH")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_sentinel_exits_successfully() {
    let data = bundled_data_path();
    let output = run_census(&["--data", data.to_str().unwrap()], "1900\n0\n");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\nYear: 1900\nPopulation: 1883669.00\n\n"));
    assert!(output.stderr.is_empty(), "loading should be silent by default");
}

#[test]
fn test_end_of_input_exits_successfully() {
    let data = bundled_data_path();
    let output = run_census(&["--data", data.to_str().unwrap()], "2005");
    assert!(output.status.success());
}

#[test]
fn test_missing_data_file_fails() {
    let (dir, _) = temp_data_file(NJ_DATA);
    let missing = dir.path().join("missing.dat");
    let output = run_census(&["--data", missing.to_str().unwrap()], "0\n");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Cannot read census data from"));
}

#[test]
fn test_data_path_from_config_file() {
    let (dir, data) = temp_data_file(NJ_DATA);
    let config = dir.path().join("census.toml");
    std::fs::write(&config, format!("[data]\npath = {:?}\n", data.to_str().unwrap())).unwrap();

    let output = run_census(&["--config", config.to_str().unwrap()], "1790\n0\n");
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().contains("Population: 184139.00"));
}

#[test]
fn test_verbose_traces_to_stderr() {
    let data = bundled_data_path();
    let output = run_census(&["-v", "--data", data.to_str().unwrap()], "1795\n0\n");

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("loaded census record"));
    assert!(stderr.contains("year=1790"));
    assert!(stderr.contains("year=2010"));
    assert!(stderr.contains("interpolation needed"));
    assert!(stderr.contains("year=1795"));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("loaded census record"));
}
