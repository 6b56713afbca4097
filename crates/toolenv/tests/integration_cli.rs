//! Integration tests for the toolenv CLI

use assert_cmd::cargo;
use predicates::str::contains;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolate a command from the real user profile and shell environment.
///
/// `TOOLENV_HOME` redirects the global settings and config files. The working
/// directory carries a `.git` marker so the project file search stops there.
fn isolate(cmd: &mut assert_cmd::Command, temp_dir: &TempDir, path: &str) {
    let workdir = temp_dir.path().join("workdir");
    fs::create_dir_all(workdir.join(".git")).unwrap();
    cmd.env("TOOLENV_HOME", temp_dir.path())
        .env("SHELL", "/bin/testsh")
        .env("PATH", path)
        .env_remove("GOPATH")
        .env_remove("GOROOT")
        .env_remove("GOOS")
        .env_remove("TOOLENV_ROOT_VARIABLE")
        .env_remove("TOOLENV_WORKSPACE_VARIABLE")
        .env_remove("TOOLENV_LOG")
        .current_dir(&workdir);
}

fn write_global_settings(temp_dir: &TempDir, value: serde_json::Value) {
    let path = temp_dir.path().join(".config/toolenv/settings.json");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
}

fn write_project_settings(temp_dir: &TempDir, value: serde_json::Value) {
    let path = temp_dir.path().join("workdir/.toolenv.json");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
}

#[cfg(unix)]
fn make_executable(path: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "#!/bin/sh\nexit 0\n").unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    path.to_path_buf()
}

#[test]
fn test_setting_from_project_file() {
    let temp_dir = TempDir::new().unwrap();
    write_project_settings(&temp_dir, serde_json::json!({"GOOS": "plan9"}));

    let mut cmd = cargo::cargo_bin_cmd!("toolenv");
    isolate(&mut cmd, &temp_dir, "/usr/bin");
    cmd.args(["setting", "GOOS"])
        .assert()
        .success()
        .stdout(contains("GOOS=plan9 (from project file)"));
}

#[test]
fn test_setting_falls_back_to_shell() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = cargo::cargo_bin_cmd!("toolenv");
    isolate(&mut cmd, &temp_dir, "/usr/bin");
    cmd.env("GOOS", "linux")
        .args(["setting", "GOOS", "--json"])
        .assert()
        .success()
        .stdout(contains("\"value\": \"linux\""))
        .stdout(contains("\"source\": \"/bin/testsh\""));
}

#[test]
fn test_setting_not_set() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = cargo::cargo_bin_cmd!("toolenv");
    isolate(&mut cmd, &temp_dir, "/usr/bin");
    cmd.args(["setting", "GOARCH_UNUSED"])
        .assert()
        .success()
        .stdout(contains("GOARCH_UNUSED (not set)"));
}

#[test]
fn test_missing_workspace_directory_fails() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = cargo::cargo_bin_cmd!("toolenv");
    isolate(&mut cmd, &temp_dir, "/usr/bin");
    cmd.env("GOPATH", "/nonexistent/toolenv/gopath")
        .args(["setting", "GOPATH"])
        .assert()
        .failure()
        .stderr(contains("Error: The GOPATH environment variable"))
        .stderr(contains("\"/nonexistent/toolenv/gopath\" does not exist"));
}

#[test]
fn test_settings_override_takes_priority() {
    let temp_dir = TempDir::new().unwrap();
    write_project_settings(&temp_dir, serde_json::json!({"GOOS": "plan9"}));
    let override_path = temp_dir.path().join("override.json");
    fs::write(&override_path, r#"{"GOOS": "js"}"#).unwrap();

    let mut cmd = cargo::cargo_bin_cmd!("toolenv");
    isolate(&mut cmd, &temp_dir, "/usr/bin");
    cmd.arg("--settings")
        .arg(&override_path)
        .args(["setting", "GOOS"])
        .assert()
        .success()
        .stdout(contains("GOOS=js (from settings override)"));
}

#[cfg(unix)]
#[test]
fn test_which_finds_executable_on_shell_path() {
    let temp_dir = TempDir::new().unwrap();
    let bin = temp_dir.path().join("shellbin");
    let go = make_executable(&bin.join("go"));

    let mut cmd = cargo::cargo_bin_cmd!("toolenv");
    isolate(&mut cmd, &temp_dir, bin.to_str().unwrap());
    cmd.args(["which", "go"])
        .assert()
        .success()
        .stdout(contains(go.display().to_string()))
        .stdout(contains("(from /bin/testsh)"));
}

#[cfg(unix)]
#[test]
fn test_which_prefers_platform_path_setting() {
    let temp_dir = TempDir::new().unwrap();
    let shell_bin = temp_dir.path().join("shellbin");
    let custom_bin = temp_dir.path().join("custombin");
    make_executable(&shell_bin.join("go"));
    let custom_go = make_executable(&custom_bin.join("go"));

    let key = if cfg!(target_os = "macos") { "osx" } else { "linux" };
    write_global_settings(
        &temp_dir,
        serde_json::json!({ key: {"PATH": custom_bin.to_str().unwrap()} }),
    );

    let mut cmd = cargo::cargo_bin_cmd!("toolenv");
    isolate(&mut cmd, &temp_dir, shell_bin.to_str().unwrap());
    cmd.args(["which", "go", "--json"])
        .assert()
        .success()
        .stdout(contains(custom_go.display().to_string()))
        .stdout(contains("toolenv settings (os-specific)"));
}

#[test]
fn test_which_missing_executable_exits_nonzero() {
    let temp_dir = TempDir::new().unwrap();
    let empty = temp_dir.path().join("empty");
    fs::create_dir_all(&empty).unwrap();

    let mut cmd = cargo::cargo_bin_cmd!("toolenv");
    isolate(&mut cmd, &temp_dir, empty.to_str().unwrap());
    cmd.args(["which", "definitely-not-a-tool"])
        .assert()
        .failure()
        .stderr(contains("executable definitely-not-a-tool not found"));
}

#[cfg(unix)]
#[test]
fn test_env_applies_settings_and_removes_nulls() {
    let temp_dir = TempDir::new().unwrap();
    let bin = temp_dir.path().join("shellbin");
    make_executable(&bin.join("go"));
    let gopath = temp_dir.path().join("gopath");
    fs::create_dir_all(&gopath).unwrap();

    write_project_settings(
        &temp_dir,
        serde_json::json!({"GOPATH": gopath.to_str().unwrap(), "GOOS": null}),
    );

    let mut cmd = cargo::cargo_bin_cmd!("toolenv");
    isolate(&mut cmd, &temp_dir, bin.to_str().unwrap());
    let output = cmd
        .env("GOOS", "windows")
        .args(["env", "go", "--require", "GOPATH", "--optional", "GOOS", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let response: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response["env"]["GOPATH"], gopath.to_str().unwrap());
    assert!(response["env"].get("GOOS").is_none());
    assert!(response["path"].as_str().unwrap().ends_with("go"));
}

#[cfg(unix)]
#[test]
fn test_env_missing_required_variable() {
    let temp_dir = TempDir::new().unwrap();
    let bin = temp_dir.path().join("shellbin");
    make_executable(&bin.join("go"));

    let mut cmd = cargo::cargo_bin_cmd!("toolenv");
    isolate(&mut cmd, &temp_dir, bin.to_str().unwrap());
    cmd.args(["env", "go", "--require", "GOPATH"])
        .assert()
        .failure()
        .stderr(contains("currently unset: GOPATH"));
}

#[cfg(unix)]
#[test]
fn test_root_mismatch_warning_survives_warn_log_level() {
    let temp_dir = TempDir::new().unwrap();
    let bin = temp_dir.path().join("shellbin");
    make_executable(&bin.join("go"));
    let goroot = temp_dir.path().join("goroot");
    fs::create_dir_all(&goroot).unwrap();

    let mut cmd = cargo::cargo_bin_cmd!("toolenv");
    isolate(&mut cmd, &temp_dir, bin.to_str().unwrap());
    cmd.env("GOROOT", &goroot)
        .env("TOOLENV_LOG", "warn")
        .args(["env", "go", "--require", "GOROOT"])
        .assert()
        .success()
        .stderr(contains("warning - binary go was found at"))
        .stderr(contains("which is not inside of the GOROOT"));
}

#[test]
fn test_request_reports_invalid_argument() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = cargo::cargo_bin_cmd!("toolenv");
    isolate(&mut cmd, &temp_dir, "/usr/bin");
    cmd.arg("request")
        .write_stdin(r#"{"op": "setting_value", "name": 42}"#)
        .assert()
        .success()
        .stdout(contains("name must be a string, not number"));
}

#[test]
fn test_request_setting_value() {
    let temp_dir = TempDir::new().unwrap();
    write_global_settings(&temp_dir, serde_json::json!({"GOOS": "freebsd"}));

    let mut cmd = cargo::cargo_bin_cmd!("toolenv");
    isolate(&mut cmd, &temp_dir, "/usr/bin");
    let output = cmd
        .arg("request")
        .write_stdin(r#"{"op": "setting_value", "name": "GOOS"}"#)
        .output()
        .unwrap();
    assert!(output.status.success());

    let response: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        response,
        serde_json::json!({"value": "freebsd", "source": "toolenv settings"})
    );
}

#[test]
fn test_request_rejects_malformed_json() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = cargo::cargo_bin_cmd!("toolenv");
    isolate(&mut cmd, &temp_dir, "/usr/bin");
    cmd.arg("request")
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(contains("Request is not valid JSON"));
}

#[test]
fn test_config_shows_defaults_and_files() {
    let temp_dir = TempDir::new().unwrap();
    write_global_settings(&temp_dir, serde_json::json!({}));

    let mut cmd = cargo::cargo_bin_cmd!("toolenv");
    isolate(&mut cmd, &temp_dir, "/usr/bin");
    cmd.arg("config")
        .assert()
        .success()
        .stdout(contains("root_variable: GOROOT"))
        .stdout(contains("workspace_variable: GOPATH"))
        .stdout(contains("settings.json (found)"))
        .stdout(contains("config.toml (not found)"));
}

#[test]
fn test_config_file_and_cli_overrides() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join(".config/toolenv");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[toolchain]\nroot_variable = \"TOOL_ROOT\"\nworkspace_variable = \"TOOL_PATH\"\n",
    )
    .unwrap();

    let mut cmd = cargo::cargo_bin_cmd!("toolenv");
    isolate(&mut cmd, &temp_dir, "/usr/bin");
    let output = cmd
        .args(["config", "--json", "--workspace-variable", "CLI_PATH"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let response: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response["toolchain"]["root_variable"], "TOOL_ROOT");
    assert_eq!(response["toolchain"]["workspace_variable"], "CLI_PATH");
    assert_eq!(response["configFile"]["exists"], true);
}

#[test]
fn test_explicit_config_must_parse() {
    let temp_dir = TempDir::new().unwrap();
    let bad = temp_dir.path().join("bad.toml");
    fs::write(&bad, "[toolchain\n").unwrap();

    let mut cmd = cargo::cargo_bin_cmd!("toolenv");
    isolate(&mut cmd, &temp_dir, "/usr/bin");
    cmd.arg("--config")
        .arg(&bad)
        .arg("config")
        .assert()
        .failure()
        .stderr(contains("TOML parsing error"));
}
