use std::io::Write;
use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_launcher-cli"))
        .args(args)
        .env_remove("ARC_LAUNCHER_ARC_FACTOR")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_cli_solve_table() {
    let output = run_cli(&["solve", "--from", "0,64,0", "--to", "30,64,0"]);

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("LAUNCH SOLUTION"), "Should contain solution table: {}", stdout);
    assert!(stdout.contains("Motion X"));
}

#[test]
fn test_cli_solve_json_negative_coordinates() {
    let output = run_cli(&[
        "solve", "--from", "-5,64,3", "--to", "-35,64,3", "--arc-factor", "1.5", "-o", "json",
    ]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["arc_factor"].as_f64(), Some(1.5));
    assert!(value["motion"]["x"].as_f64().unwrap() < 0.0);
    assert_eq!(value["motion"]["z"].as_f64(), Some(0.0));
    assert!(value["motion"]["y"].as_f64().unwrap() > 0.0);
}

#[test]
fn test_cli_solve_with_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "arc_factor = 2.0").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let output = run_cli(&["solve", "-f", "0,10,0", "-t", "4,10,0", "-c", &path, "-o", "json"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["arc_factor"].as_f64(), Some(2.0));
    assert_eq!(value["peak_height"].as_f64(), Some(20.0));
}

#[test]
fn test_cli_env_arc_factor() {
    let output = Command::new(env!("CARGO_BIN_EXE_launcher-cli"))
        .args(["solve", "-f", "0,10,0", "-t", "4,10,0", "-o", "json"])
        .env("ARC_LAUNCHER_ARC_FACTOR", "3.0")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["arc_factor"].as_f64(), Some(3.0));
}

#[test]
fn test_cli_invalid_arc_fails() {
    let output = run_cli(&["solve", "--from", "0,64,0", "--to", "0,64,0", "--arc-factor", "0.5"]);

    assert!(!output.status.success(), "Too-flat arc should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("arc factor too small"), "stderr: {}", stderr);
}

#[test]
fn test_cli_sample_csv() {
    let output = run_cli(&["sample", "--from", "0,64,0", "--to", "20,70,0", "-n", "8", "-o", "csv"]);

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "time_s,x,y,z,speed,flags");
    assert_eq!(lines.len(), 10);
    assert!(lines[1].ends_with("launch"));
    assert!(lines[9].ends_with("return_height"));
}

#[test]
fn test_cli_sample_downhill_ends_at_source_height() {
    let output = run_cli(&["sample", "--from", "0,80,0", "--to", "20,64,0", "-n", "4", "-o", "json"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let last = &value["samples"][4];
    assert!((last["position"]["x"].as_f64().unwrap() - 20.0).abs() < 1e-9);
    assert!((last["position"]["y"].as_f64().unwrap() - 80.0).abs() < 1e-9);
    assert_eq!(last["flags"][0], "return_height");
}

#[test]
fn test_cli_sample_count_too_large() {
    let output = run_cli(&[
        "sample", "--from", "0,64,0", "--to", "20,64,0", "-n", "18446744073709551615",
    ]);

    assert!(!output.status.success(), "Oversized sample count should be rejected");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("limited to"), "stderr: {}", stderr);
    assert!(!stderr.contains("panicked"), "stderr: {}", stderr);
}

#[test]
fn test_cli_help() {
    let output = run_cli(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("solve"), "Should list solve command");
    assert!(stdout.contains("sample"), "Should list sample command");
    assert!(stdout.contains("info"), "Should list info command");
}

#[test]
fn test_cli_info() {
    let output = run_cli(&["info"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("19.8347"));
    assert!(stdout.contains("13.63"));
    assert!(stdout.contains("21.81817"));
}

#[test]
fn test_cli_bad_point() {
    let output = run_cli(&["solve", "--from", "0,64", "--to", "1,2,3"]);
    assert!(!output.status.success(), "Malformed point should be rejected");
}
