//! Integration tests for the `scoutly` CLI binary.
//!
//! Argument parsing, help output, completions and error exit codes run
//! without a deployment; the end-to-end cases point the binary at a
//! wiremock server.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// A `scoutly` command isolated from the user's environment: no
/// `SCOUTLY_*` variables and a config path that does not exist.
fn scoutly_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("scoutly");
    cmd.env("HOME", "/tmp/scoutly-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/scoutly-cli-test-nonexistent")
        .env(
            "SCOUTLY_CONFIG",
            "/tmp/scoutly-cli-test-nonexistent/config.toml",
        )
        .env_remove("SCOUTLY_PROFILE")
        .env_remove("SCOUTLY_API_URL")
        .env_remove("SCOUTLY_TOKEN")
        .env_remove("SCOUTLY_OUTPUT")
        .env_remove("SCOUTLY_TIMEOUT")
        .env_remove("RUST_LOG");
    cmd
}

fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

async fn run_against(server: &MockServer, args: &[&str]) -> std::process::Output {
    let mut cmd = scoutly_cmd();
    cmd.args(["--api-url", &server.uri(), "--token", "t0k3n"])
        .args(args);
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = scoutly_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    scoutly_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("players")
            .and(predicate::str::contains("coaches"))
            .and(predicate::str::contains("shortlists"))
            .and(predicate::str::contains("reports")),
    );
}

#[test]
fn test_version_flag() {
    scoutly_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("scoutly"));
}

#[test]
fn test_invalid_subcommand() {
    scoutly_cmd().arg("transfers").assert().failure().code(2);
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    scoutly_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    scoutly_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_completions_fish() {
    scoutly_cmd()
        .args(["completions", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}

// ── Argument validation ─────────────────────────────────────────────

#[test]
fn test_page_zero_is_usage_error() {
    scoutly_cmd()
        .args(["players", "list", "--page", "0"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_unknown_sort_key_is_usage_error() {
    scoutly_cmd()
        .args(["players", "list", "--sort", "height"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_page_size_above_limit_is_usage_error() {
    scoutly_cmd()
        .args(["--page-size", "500", "coaches", "list"])
        .assert()
        .failure()
        .code(2);
}

// ── Configuration errors ────────────────────────────────────────────

#[test]
fn test_list_without_config_points_at_init() {
    let output = scoutly_cmd().args(["players", "list"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let text = combined_output(&output);
    assert!(
        text.contains("config init"),
        "Expected a 'config init' hint:\n{text}"
    );
}

#[test]
fn test_api_url_without_token_is_auth_error() {
    scoutly_cmd()
        .args(["--api-url", "http://127.0.0.1:9", "players", "list"])
        .assert()
        .failure()
        .code(3);
}

#[test]
fn test_non_http_api_url_is_rejected() {
    scoutly_cmd()
        .args(["--api-url", "ftp://scout.example.com", "--token", "t", "me"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_unknown_profile_is_reported() {
    let output = scoutly_cmd()
        .args(["--profile", "academy", "players", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(combined_output(&output).contains("academy"));
}

fn write_config(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_config_show_redacts_token() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
default_profile = "club"

[profiles.club]
api_url = "https://scout.example.com"
token = "s3cret"
"#,
    );

    scoutly_cmd()
        .env("SCOUTLY_CONFIG", &path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("[profiles.club]")
                .and(predicate::str::contains("****"))
                .and(predicate::str::contains("s3cret").not()),
        );
}

#[test]
fn test_config_use_unknown_profile_lists_available() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
[profiles.club]
api_url = "https://scout.example.com"
"#,
    );

    let output = scoutly_cmd()
        .env("SCOUTLY_CONFIG", &path)
        .args(["config", "use", "academy"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(combined_output(&output).contains("club"));
}

// ── Against a mock deployment ───────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_players_list_plain_prints_ids_and_footer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/players"))
        .and(query_param("position", "ST"))
        .and(query_param("skip", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                { "id": "p1", "name": "Erling Haaland", "position": "ST" },
                { "id": "p2", "name": "Victor Osimhen", "position": "ST" }
            ],
            "meta": { "pagination": { "page": 2, "per_page": 20, "total": 42, "total_pages": 3 } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_against(
        &server,
        &["-o", "plain", "players", "list", "--position", "ST", "--page", "2"],
    )
    .await;

    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "p1\np2");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Page 2 of 3 (42 total)"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_token_exits_with_auth_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "detail": "Invalid token" })))
        .mount(&server)
        .await;

    let output = run_against(&server, &["me"]).await;
    assert_eq!(output.status.code(), Some(3), "{}", combined_output(&output));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_player_exits_with_not_found_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/players/ghost"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "error": { "code": "NOT_FOUND", "message": "Player not found" }
        })))
        .mount(&server)
        .await;

    let output = run_against(&server, &["players", "get", "ghost", "--no-similar"]).await;
    assert_eq!(output.status.code(), Some(4));
    assert!(combined_output(&output).contains("scoutly players list"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_profile_from_config_file_reaches_deployment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/coaches"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{ "id": "c1", "name": "Xabi Alonso" }],
            "meta": { "pagination": { "page": 1, "per_page": 5, "total": 1, "total_pages": 1 } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        &format!(
            "default_profile = \"club\"\n\n[profiles.club]\napi_url = \"{}\"\ntoken_env = \"SCOUTLY_TEST_TOKEN\"\npage_size = 5\n",
            server.uri()
        ),
    );

    let mut cmd = scoutly_cmd();
    cmd.env("SCOUTLY_CONFIG", &path)
        .env("SCOUTLY_TEST_TOKEN", "t0k3n")
        .args(["-o", "plain", "coaches", "list"]);
    let output = tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap();

    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "c1");
}
