mod common;

use std::fs;

use common::CentralSiteProcess;
use tempfile::TempDir;

const FALLBACK: &str = "No manual found. Add a .md file to the manuals directory.";

// ============================================================================
// version command
// ============================================================================

#[test]
fn version_human() {
    let output = CentralSiteProcess::spawn_command(&["version"]);
    assert!(
        output.status.success(),
        "version should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("central-site"),
        "version output should contain the binary name: {stdout}"
    );
    assert!(stdout.contains('.'), "version output should contain a version: {stdout}");
}

#[test]
fn version_json() {
    let output = CentralSiteProcess::spawn_command(&["version", "--format", "json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("version JSON should be valid");
    assert_eq!(parsed["name"], "central-site");
    assert!(parsed.get("version").is_some(), "missing version: {stdout}");
}

// ============================================================================
// completions command
// ============================================================================

#[test]
fn completions_bash() {
    let output = CentralSiteProcess::spawn_command(&["completions", "bash"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("central-site"),
        "bash completions should reference central-site"
    );
}

#[test]
fn completions_invalid_shell() {
    let output = CentralSiteProcess::spawn_command(&["completions", "tcsh"]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn unknown_flag_is_usage_error() {
    let output = CentralSiteProcess::spawn_command(&["build", "--no-such-flag"]);
    assert_eq!(output.status.code(), Some(64));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--no-such-flag"), "expected clap message: {stderr}");
}

#[test]
fn help_exits_0() {
    let output = CentralSiteProcess::spawn_command(&["--help"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("build"));
}

// ============================================================================
// build command
// ============================================================================

#[test]
fn build_renders_fixture_manuals() {
    let out = TempDir::new().unwrap();
    let manuals = CentralSiteProcess::fixture_path("manuals");
    let output = CentralSiteProcess::spawn_command(&[
        "--quiet",
        "build",
        "--manuals",
        manuals.to_str().unwrap(),
        "--public",
        out.path().join("no-public").to_str().unwrap(),
        "--out",
        out.path().join("dist").to_str().unwrap(),
    ]);
    assert!(
        output.status.success(),
        "build should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let page = fs::read_to_string(out.path().join("dist/index.html")).unwrap();
    assert!(page.contains("# BMI\nEnter height and weight.</pre>"));
    assert!(page.contains("Review taxes &amp; deductions &lt;before&gt; submitting."));
    // Only the employee board has no manual in the fixtures.
    assert_eq!(page.matches(FALLBACK).count(), 1);
    assert!(!page.contains("Not a manual"));
}

#[test]
fn build_with_portal_file() {
    let out = TempDir::new().unwrap();
    let manuals = CentralSiteProcess::fixture_path("manuals");
    let config = CentralSiteProcess::fixture_path("portal.yaml");
    let output = CentralSiteProcess::spawn_command(&[
        "build",
        "--manuals",
        manuals.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "--public",
        out.path().join("no-public").to_str().unwrap(),
        "--out",
        out.path().to_str().unwrap(),
    ]);
    assert!(
        output.status.success(),
        "build should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let page = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(page.contains("<title>Ops Portal</title>"));
    assert!(page.contains("Ops Team</div>"));
    assert_eq!(page.matches("<div class=\"card\">").count(), 2);
    assert_eq!(page.matches(FALLBACK).count(), 1);

    // The Archive card has no actions; the loader warns about it.
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("neither link_href nor download_href"),
        "expected descriptor warning: {stderr}"
    );
}

#[test]
fn build_with_missing_manuals_directory() {
    let out = TempDir::new().unwrap();
    let output = CentralSiteProcess::spawn_command(&[
        "--quiet",
        "build",
        "--manuals",
        out.path().join("missing").to_str().unwrap(),
        "--public",
        out.path().join("no-public").to_str().unwrap(),
        "--out",
        out.path().join("dist").to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let page = fs::read_to_string(out.path().join("dist/index.html")).unwrap();
    assert_eq!(page.matches(FALLBACK).count(), 3);
}

#[test]
fn quiet_build_writes_nothing_to_stderr() {
    let out = TempDir::new().unwrap();
    let output = CentralSiteProcess::spawn_command(&[
        "--quiet",
        "build",
        "--manuals",
        CentralSiteProcess::fixture_path("manuals").to_str().unwrap(),
        "--public",
        out.path().join("no-public").to_str().unwrap(),
        "--out",
        out.path().join("dist").to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(
        output.stderr.is_empty(),
        "unexpected stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn build_into_directory_inside_public() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("BMICalculator.apk"), b"apk").unwrap();
    let output = CentralSiteProcess::spawn_command(&[
        "--quiet",
        "build",
        "--manuals",
        root.path().join("manuals").to_str().unwrap(),
        "--public",
        root.path().to_str().unwrap(),
        "--out",
        root.path().join("dist").to_str().unwrap(),
    ]);
    assert!(
        output.status.success(),
        "build should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let dist = root.path().join("dist");
    assert!(dist.join("index.html").is_file());
    assert!(dist.join("BMICalculator.apk").is_file());
    assert!(!dist.join("dist").exists());
}

#[test]
fn build_with_invalid_portal_file_exits_2() {
    let out = TempDir::new().unwrap();
    let config = CentralSiteProcess::fixture_path("invalid_portal.yaml");
    let output = CentralSiteProcess::spawn_command(&[
        "--quiet",
        "build",
        "--config",
        config.to_str().unwrap(),
        "--out",
        out.path().to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"), "expected error message: {stderr}");
}

// ============================================================================
// manuals command
// ============================================================================

#[test]
fn manuals_json_report() {
    let manuals = CentralSiteProcess::fixture_path("manuals");
    let output = CentralSiteProcess::spawn_command(&[
        "--quiet",
        "manuals",
        "--manuals",
        manuals.to_str().unwrap(),
        "--format",
        "json",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("manuals JSON should be valid");

    let keys: Vec<&str> = parsed["manuals"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["bmi-calculator", "payroll-calculator-prc"]);

    let resolved: Vec<bool> = parsed["apps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["resolved"].as_bool().unwrap())
        .collect();
    assert_eq!(resolved, vec![false, true, true]);
}

#[test]
fn manuals_human_missing_directory() {
    let output = CentralSiteProcess::spawn_command(&[
        "--quiet",
        "manuals",
        "--manuals",
        "/tmp/nonexistent_central_site_manuals_xyz",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No manuals found"), "unexpected output: {stdout}");
}

// ============================================================================
// serve command
// ============================================================================

#[test]
fn serve_invalid_bind_exits_4() {
    let output = CentralSiteProcess::spawn_command(&["--quiet", "serve", "--bind", "nowhere"]);
    assert_eq!(output.status.code(), Some(4));
}
