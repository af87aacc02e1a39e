// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::{json, Value};
use std::process::{Command, Output};

fn auditrs() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_auditrs"));
    command
        .env_remove("APP_ENVIRONMENT")
        .env_remove("AUDITRS__AUDIT__TOOL")
        .env_remove("AUDITRS__AUDIT__TIMEOUT_SECS")
        .env_remove("AUDITRS__LAUNCHER__USE_SHELL")
        .env("RUST_LOG", "off");
    command
}

fn stdout_json(output: &Output) -> Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(stdout.trim()).unwrap_or_else(|e| {
        panic!("stdout is not a single JSON object ({}): {:?}", e, stdout)
    })
}

#[test]
fn test_missing_url_prints_usage_and_exits_1() {
    let output = auditrs().output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_json(&output), json!({ "error": "Usage: auditrs <url>" }));
}

#[test]
fn test_invalid_environment_setting_is_fatal() {
    let output = auditrs()
        .env("AUDITRS__AUDIT__TIMEOUT_SECS", "abc")
        .arg("https://example.com")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let payload = stdout_json(&output);
    let object = payload.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert!(object["error"].is_string());
}

#[cfg(unix)]
#[test]
fn test_missing_tool_prints_not_found_and_exits_0() {
    let output = auditrs()
        .env("AUDITRS__AUDIT__TOOL", "/nonexistent/auditrs-npx")
        .env("AUDITRS__LAUNCHER__USE_SHELL", "false")
        .arg("https://example.com")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_json(&output),
        json!({ "error": "Lighthouse CLI not found. Install with: npm install -g lighthouse" })
    );
}

#[cfg(unix)]
mod fake_tool {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    /// 写出一个模拟Lighthouse的shell脚本
    fn write_tool(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("fake-npx");
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    const FIND_OUTPUT: &str = r#"for arg in "$@"; do
  case "$arg" in
    --output-path=*) out="${arg#--output-path=}" ;;
  esac
done"#;

    #[test]
    fn test_fake_tool_report_is_summarized() {
        let dir = tempfile::tempdir().unwrap();
        let tool = write_tool(
            dir.path(),
            &format!(
                "{}\nprintf '%s' '{}' > \"$out\"",
                FIND_OUTPUT,
                r#"{"categories":{"performance":{"score":0.95},"accessibility":{"score":0.8},"best-practices":{"score":1.0},"seo":{"score":0.7}}}"#
            ),
        );

        let output = auditrs()
            .env("AUDITRS__AUDIT__TOOL", &tool)
            .arg("https://example.com")
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(0));
        assert_eq!(
            stdout_json(&output),
            json!({
                "url": "https://example.com",
                "scores": {
                    "performance": 95,
                    "accessibility": 80,
                    "best_practices": 100,
                    "seo": 70
                },
                "summary": "[OK] Excellent performance"
            })
        );
        // Pretty printed with two-space indentation
        assert!(String::from_utf8_lossy(&output.stdout).contains("\n  \"url\""));
    }

    #[test]
    fn test_fake_tool_without_report_surfaces_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let tool = write_tool(dir.path(), "echo 'Unable to connect to Chrome' >&2\nexit 1");

        let output = auditrs()
            .env("AUDITRS__AUDIT__TOOL", &tool)
            .arg("https://example.com")
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(0));
        assert_eq!(
            stdout_json(&output),
            json!({
                "error": "Lighthouse failed to generate report",
                "stderr": "Unable to connect to Chrome\n"
            })
        );
    }

    #[test]
    fn test_fake_tool_timeout() {
        let dir = tempfile::tempdir().unwrap();
        let tool = write_tool(dir.path(), "exec sleep 10");

        let output = auditrs()
            .env("AUDITRS__AUDIT__TOOL", &tool)
            .env("AUDITRS__AUDIT__TIMEOUT_SECS", "1")
            .arg("https://example.com")
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(0));
        assert_eq!(stdout_json(&output), json!({ "error": "Lighthouse audit timed out" }));
    }

    #[test]
    fn test_config_files_in_working_directory_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join("config");
        std::fs::create_dir(&config_dir).unwrap();
        std::fs::write(config_dir.join("default.toml"), "audit = [not toml").unwrap();
        std::fs::write(config_dir.join("production.yaml"), "audit: {timeout_secs: abc").unwrap();
        let tool = write_tool(
            dir.path(),
            &format!(
                "{}\nprintf '%s' '{}' > \"$out\"",
                FIND_OUTPUT,
                r#"{"categories":{"performance":{"score":0.4}}}"#
            ),
        );

        let output = auditrs()
            .current_dir(dir.path())
            .env("APP_ENVIRONMENT", "production")
            .env("AUDITRS__AUDIT__TOOL", &tool)
            .arg("https://example.com")
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(0));
        assert_eq!(stdout_json(&output)["summary"], "[X] Poor performance");
    }
}
