use assert_cmd::Command;
use regex::Regex;

const PASSWORD_CHARS: &str = r"[A-Za-z0-9!@#$%^&*()_+\[\]{}<>?/|~]";

fn passforge() -> Command {
    Command::cargo_bin("passforge").expect("binary should build")
}

fn strip_ansi(text: &str) -> String {
    let re = Regex::new(r"\x1b\[[0-9;]*m").unwrap();
    re.replace_all(text, "").to_string()
}

fn stdout_of(output: &std::process::Output) -> String {
    strip_ansi(&String::from_utf8_lossy(&output.stdout))
}

fn stderr_of(output: &std::process::Output) -> String {
    strip_ansi(&String::from_utf8_lossy(&output.stderr))
}

// --- GENERATE TESTS ---

#[test]
fn test_generate_emits_default_length_password() {
    let output = passforge().args(["generate", "--seed", "11"]).output().unwrap();
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    let first = stdout.lines().next().unwrap_or("");
    let re = Regex::new(&format!("^{}{{12}}$", PASSWORD_CHARS)).unwrap();
    assert!(
        re.is_match(first),
        "unexpected password line {:?}\nfull stdout:\n{}",
        first,
        stdout
    );
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let run = || {
        passforge()
            .args(["generate", "--seed", "12345", "--length", "20"])
            .output()
            .unwrap()
    };
    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_count_emits_one_password_per_line() {
    let output = passforge()
        .args(["generate", "-n", "3", "--seed", "9"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    // Three passwords plus the strength meter line.
    assert_eq!(lines.len(), 4, "stdout was:\n{}", stdout);
    let re = Regex::new(&format!("^{}{{12}}$", PASSWORD_CHARS)).unwrap();
    for line in &lines[..3] {
        assert!(re.is_match(line), "bad password line {:?}", line);
    }
}

#[test]
fn test_all_classes_disabled_fails_with_clear_error() {
    let output = passforge()
        .args([
            "generate",
            "--no-uppercase",
            "--no-lowercase",
            "--no-digits",
            "--no-symbols",
        ])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains("No character class selected"),
        "stderr was:\n{}",
        stderr
    );
}

#[test]
fn test_json_report_structure() {
    let output = passforge()
        .args(["generate", "--seed", "3", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let report: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should be pure JSON");

    assert_eq!(report["passwords"].as_array().map(|a| a.len()), Some(1));
    assert_eq!(report["passwords"][0].as_str().map(|p| p.len()), Some(12));
    assert_eq!(report["strength"]["value"], 5);
    assert_eq!(report["strength"]["label"], "strong");
    assert_eq!(report["strength"]["color"], "emeraldLight");
    assert_eq!(report["poolSize"], 84);
    assert!(report["entropyBits"].as_f64().unwrap() > 70.0);
}

// --- STRENGTH TESTS ---

#[test]
fn test_strength_breakdown_table() {
    let output = passforge().arg("strength").output().unwrap();
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("5/6"), "stdout was:\n{}", stdout);
    assert!(stdout.contains("Strong"), "stdout was:\n{}", stdout);
    assert!(stdout.contains("84"), "stdout was:\n{}", stdout);
}

#[test]
fn test_strength_of_long_password_maxes_out() {
    let output = passforge()
        .args(["strength", "--length", "16"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("6/6"), "stdout was:\n{}", stdout);
    assert!(stdout.contains("Very strong"), "stdout was:\n{}", stdout);
}

#[test]
fn test_strength_json_summary() {
    let output = passforge()
        .args(["strength", "--json", "--no-digits"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let summary: serde_json::Value =
        serde_json::from_str(&stdout).expect("stdout should be pure JSON");
    assert_eq!(summary["strength"]["value"], 4);
    assert_eq!(summary["strength"]["label"], "good");
    assert_eq!(summary["poolSize"], 74);
}

// --- PROFILE TESTS ---

#[test]
fn test_profile_feeds_generation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.json");
    std::fs::write(&path, r#"{ "length": 16, "symbols": false }"#).unwrap();

    let output = passforge()
        .args(["generate", "--seed", "5", "--profile"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    let first = stdout.lines().next().unwrap_or("");
    let re = Regex::new("^[A-Za-z0-9]{16}$").unwrap();
    assert!(re.is_match(first), "profile not applied, line {:?}", first);
}

#[test]
fn test_cli_flag_beats_profile_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.json");
    std::fs::write(&path, r#"{ "length": 16, "symbols": false }"#).unwrap();

    let output = passforge()
        .args(["generate", "--seed", "5", "--length", "8", "--profile"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    let first = stdout.lines().next().unwrap_or("");
    let re = Regex::new("^[A-Za-z0-9]{8}$").unwrap();
    assert!(re.is_match(first), "override not applied, line {:?}", first);
}

#[test]
fn test_unreadable_profile_aborts() {
    let output = passforge()
        .args(["generate", "--profile", "/no/such/profile.json"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Failed to load profile"));
}

// --- POLICY TESTS ---

#[test]
fn test_underlength_policies_differ() {
    let reject = passforge()
        .args(["generate", "--length", "2", "--underlength", "reject"])
        .output()
        .unwrap();
    assert!(!reject.status.success());
    assert!(stderr_of(&reject).contains("cannot cover"));

    let truncate = passforge()
        .args(["generate", "--length", "2", "--seed", "4"])
        .output()
        .unwrap();
    assert!(truncate.status.success());
    let stdout = stdout_of(&truncate);
    assert_eq!(stdout.lines().next().unwrap_or("").len(), 2);
}

// --- HELP TESTS ---

#[test]
fn test_help_mentions_subcommands_and_caveat() {
    let output = passforge().arg("--help").output().unwrap();
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("generate"));
    assert!(stdout.contains("strength"));
    assert!(stdout.contains("interactive"));
    assert!(stdout.to_lowercase().contains("cryptographically"));
}
