//! Integration tests for the `stackgen` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn stackgen() -> Command {
    let mut cmd = Command::cargo_bin("stackgen").unwrap();
    // Keep host environment out of the picture.
    cmd.env_remove("STACKGEN_ROOT")
        .env_remove("STACKGEN_PROJECT_NAME")
        .env_remove("STACKGEN_BASE_PORT")
        .env_remove("STACKGEN_FRONTEND_PORT")
        .env_remove("STACKGEN_POSTGRES_PORT")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_lists_generate() {
    stackgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_matches_cargo() {
    stackgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_color_env_value_is_accepted() {
    // no-color.org is presence-based: NO_COLOR=1 disables colour, it is not
    // a boolean literal to be parsed.
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("acme");

    stackgen()
        .env("NO_COLOR", "1")
        .args(["generate", "--dry-run", "--root"])
        .arg(&root)
        .assert()
        .success();
}

#[test]
fn generate_creates_the_full_tree() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("acme");

    stackgen()
        .args(["generate", "--yes", "--root"])
        .arg(&root)
        .assert()
        .success();

    for path in [
        "model-service/src",
        "model-service/package.json",
        "model-service/Dockerfile",
        "user-management/src/index.js",
        "search-service/config/default.json",
        "notification-service/src/schema.js",
        "frontend/src/pages/Home.jsx",
        "frontend/public/index.html",
        "libraries/logger/src",
        "infrastructure/database/init.sql",
        ".gitignore",
        "README.md",
        ".env.example",
        "docker-compose.yml",
    ] {
        assert!(root.join(path).exists(), "missing: {path}");
    }

    let compose = std::fs::read_to_string(root.join("docker-compose.yml")).unwrap();
    assert!(compose.contains("model-service:"));
    assert!(compose.contains("\"4001:4001\""));
    assert!(!compose.contains("{{"));
}

#[test]
fn generate_is_rerunnable() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("acme");

    stackgen()
        .args(["generate", "--yes", "--root"])
        .arg(&root)
        .assert()
        .success();

    // Hand-edit a generated file, then re-run: the file is restored.
    let pkg = root.join("model-service/package.json");
    std::fs::write(&pkg, "broken").unwrap();

    stackgen()
        .args(["generate", "--yes", "--root"])
        .arg(&root)
        .assert()
        .success();

    let restored = std::fs::read_to_string(&pkg).unwrap();
    assert!(restored.contains("\"name\": \"model-service\""));
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("acme");

    stackgen()
        .args(["generate", "--dry-run", "--root"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!root.exists());
}

#[test]
fn dry_run_json_is_parseable() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("acme");

    let output = stackgen()
        .args(["generate", "--dry-run", "--format", "json", "--root"])
        .arg(&root)
        .output()
        .unwrap();
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(plan["directories"].as_array().unwrap().len() > 10);
    assert!(plan["files"].as_array().unwrap().len() > 10);
}

#[test]
fn base_port_env_override_reaches_compose() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("acme");

    stackgen()
        .env("STACKGEN_BASE_PORT", "5001")
        .args(["generate", "--yes", "--root"])
        .arg(&root)
        .assert()
        .success();

    let compose = std::fs::read_to_string(root.join("docker-compose.yml")).unwrap();
    assert!(compose.contains("\"5001:5001\""));
    assert!(compose.contains("\"5004:5004\""));
}

#[test]
fn invalid_port_env_is_a_configuration_error() {
    stackgen()
        .env("STACKGEN_BASE_PORT", "not-a-port")
        .args(["generate", "--dry-run"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("STACKGEN_BASE_PORT"));
}

#[test]
fn invalid_project_name_is_a_user_error() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("acme");

    stackgen()
        .args(["generate", "--yes", "--project-name", ".hidden", "--root"])
        .arg(&root)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("project name"));
}
