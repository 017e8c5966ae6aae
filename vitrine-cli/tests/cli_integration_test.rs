//! Integration tests for the `vitrine` binary
//!
//! Only commands that need no live backend are exercised here; the HTTP
//! paths are covered by the core crate's integration tests.

use anyhow::Result;
use std::fs;
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn vitrine_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_vitrine"))
}

/// Run the binary with an isolated config file and no env overrides
fn run_vitrine(dir: &Path, args: &[&str]) -> Result<Output> {
    let config_path = dir.join("config.yaml");
    if !config_path.exists() {
        fs::write(&config_path, "timeout_seconds: 2\n")?;
    }

    let output = Command::new(vitrine_binary())
        .arg("--config")
        .arg(&config_path)
        .args(args)
        .current_dir(dir)
        .env_remove("VITRINE_BASE_URL")
        .env_remove("VITRINE_TIMEOUT_SECONDS")
        .output()?;
    Ok(output)
}

fn closed_port_url() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}"))
}

#[test]
fn test_render_registration_page() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = run_vitrine(temp_dir.path(), &["render", "registration"])?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let html = fs::read_to_string(temp_dir.path().join("cadastro.html"))?;
    assert!(html.contains("id=\"formCadastroProduto\""));
    assert!(html.contains("id=\"produtoPreco\""));
    Ok(())
}

#[test]
fn test_list_unreachable_backend_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let base_url = closed_port_url()?;

    let output = run_vitrine(temp_dir.path(), &["list", "--base-url", &base_url])?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(&base_url), "stderr: {stderr}");
    Ok(())
}

#[test]
fn test_render_listing_with_unreachable_backend_writes_error_page_and_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let base_url = closed_port_url()?;

    let output = run_vitrine(
        temp_dir.path(),
        &["render", "listing", "--out", "lista.html", "--base-url", &base_url],
    )?;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(&base_url), "stderr: {stderr}");

    let html = fs::read_to_string(temp_dir.path().join("lista.html"))?;
    assert!(html.contains("Erro ao carregar produtos!"));
    assert!(html.contains(&base_url));
    Ok(())
}

#[test]
fn test_create_with_invalid_price_fails_without_request() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let base_url = closed_port_url()?;

    let output = run_vitrine(
        temp_dir.path(),
        &[
            "create",
            "--name",
            "Shampoo",
            "--price",
            "quarenta",
            "--base-url",
            &base_url,
        ],
    )?;

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Preço inválido"), "stdout: {stdout}");
    Ok(())
}

#[test]
fn test_rejects_non_http_base_url() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = run_vitrine(temp_dir.path(), &["list", "--base-url", "localhost:8080"])?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid --base-url"), "stderr: {stderr}");
    Ok(())
}
