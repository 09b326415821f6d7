//! Tests for CLI argument parsing, in-process and against the built binary.

mod common;

use clap::Parser;
use common::mock_backend::{MockBackend, MockResponse};
use common::{free_port, LEANNE_JSON};
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;
use userlist::cli::Cli;
use userlist::config::Config;

fn userlist_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_userlist"))
}

/// Config with millisecond backoff so failing runs end quickly.
fn fast_config(dir: &TempDir, base_url: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    let content = format!(
        r#"
[api]
base_url = "{}"
timeout_seconds = 2
connect_timeout_seconds = 1

[query]
retry_delay_base_ms = 10
retry_delay_max_ms = 20
"#,
        base_url
    );
    std::fs::write(&path, content).unwrap();
    path
}

async fn run_plain_binary(config: PathBuf) -> Output {
    tokio::task::spawn_blocking(move || {
        userlist_cmd()
            .arg("--plain")
            .arg("--config")
            .arg(config)
            .env_remove("USERLIST_LOG")
            .output()
            .expect("Failed to execute command")
    })
    .await
    .unwrap()
}

#[test]
fn test_parse_defaults() {
    let cli = Cli::try_parse_from(["userlist"]).unwrap();
    assert!(!cli.plain);
    assert!(cli.config.is_none());
    assert!(cli.base_url.is_none());
    assert!(cli.latency_ms.is_none());
}

#[test]
fn test_parse_all_flags() {
    let cli = Cli::try_parse_from([
        "userlist",
        "--plain",
        "--config",
        "/tmp/custom.toml",
        "--base-url",
        "http://localhost:9000",
        "--latency-ms",
        "2000",
    ])
    .unwrap();

    assert!(cli.plain);
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/custom.toml")));
    assert_eq!(cli.base_url.as_deref(), Some("http://localhost:9000"));
    assert_eq!(cli.latency_ms, Some(2000));
}

#[test]
fn test_non_numeric_latency_is_rejected() {
    assert!(Cli::try_parse_from(["userlist", "--latency-ms", "soon"]).is_err());
}

#[test]
fn test_overrides_replace_file_values() {
    let cli = Cli::try_parse_from([
        "userlist",
        "--base-url",
        "http://127.0.0.1:1",
        "--latency-ms",
        "50",
    ])
    .unwrap();
    let mut config = Config::default();
    cli.apply_overrides(&mut config);

    assert_eq!(config.api.base_url, "http://127.0.0.1:1");
    assert_eq!(config.api.simulated_latency_ms, 50);
    assert_eq!(config.api.users_path, "/users");
}

#[test]
fn test_load_config_validates_overrides() {
    let dir = TempDir::new().unwrap();
    let cli = Cli::try_parse_from([
        "userlist",
        "--config",
        dir.path().join("absent.toml").to_str().unwrap(),
        "--base-url",
        "not-a-url",
    ])
    .unwrap();

    assert!(cli.load_config().is_err());
}

#[test]
fn test_help_lists_flags() {
    let output = userlist_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--plain"));
    assert!(stdout.contains("--base-url"));
    assert!(stdout.contains("--latency-ms"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let path = fast_config(&dir, "ftp://example.com");

    let output = userlist_cmd()
        .arg("--plain")
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("loading configuration"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_plain_mode_prints_users_and_succeeds() {
    let backend = MockBackend::start().await;
    backend.enqueue(MockResponse::json(LEANNE_JSON)).await;
    let dir = TempDir::new().unwrap();

    let output = run_plain_binary(fast_config(&dir, &backend.base_url())).await;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Carregando usuários..."));
    assert!(stdout.contains("Lista de Usuários (1)"));
    assert!(stdout.contains("Leanne Graham"));
    assert!(stdout.contains("Gwenborough"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_plain_mode_fails_when_backend_unreachable() {
    let dir = TempDir::new().unwrap();
    let base_url = format!("http://127.0.0.1:{}", free_port());

    let output = run_plain_binary(fast_config(&dir, &base_url)).await;

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Erro ao carregar usuários"));
    assert!(stdout.contains("[Tentar novamente]"));
}

/// Without `--config`, the file under the user config directory is used.
#[cfg(target_os = "linux")]
#[test]
fn test_default_config_path_is_read() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("userlist");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[api]\nbase_url = \"ftp://from-default-path\"\n",
    )
    .unwrap();

    let output = userlist_cmd()
        .arg("--plain")
        .env("XDG_CONFIG_HOME", home.path())
        .env_remove("USERLIST_LOG")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ftp://from-default-path"));
}
