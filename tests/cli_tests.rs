//! E2E tests for the link-sweep CLI

#![allow(deprecated)] // cargo_bin deprecation - will update when assert_cmd stabilizes replacement

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn link_sweep() -> Command {
    let mut cmd = Command::cargo_bin("link-sweep").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("LINK_SWEEP_CONCURRENCY")
        .env_remove("LINK_SWEEP_PER_HOST")
        .env_remove("LINK_SWEEP_TIMEOUT")
        .env_remove("LINK_SWEEP_RETRIES")
        .env_remove("LINK_SWEEP_USER_AGENT");
    cmd
}

// Runs the binary off the async runtime so the mock server keeps serving
async fn run(mut cmd: Command) -> std::process::Output {
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

async fn site_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(path("/good"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(path("/bad"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/no-head"))
        .respond_with(ResponseTemplate::new(405))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/no-head"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    server
}

fn write_page(dir: &Path, name: &str, hrefs: &[String]) {
    let body: String = hrefs
        .iter()
        .map(|href| format!("<a href=\"{}\">link</a>\n", href))
        .collect();
    fs::write(dir.join(name), format!("<html><body>{}</body></html>", body)).unwrap();
}

#[test]
fn test_help() {
    link_sweep()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--concurrency"))
        .stdout(predicate::str::contains("--per-host"))
        .stdout(predicate::str::contains("--retries"));
}

#[test]
fn test_version() {
    link_sweep()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("link-sweep"));
}

#[test]
fn test_missing_directory_exits_with_2() {
    let dir = tempdir().unwrap();
    link_sweep()
        .arg(dir.path().join("does-not-exist"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_no_documents_is_clean() {
    let dir = tempdir().unwrap();
    link_sweep()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("RESULTS: 0 broken unique URLs found"));

    let csv = fs::read_to_string(dir.path().join("broken_links_report.csv")).unwrap();
    assert_eq!(csv, "page,url,status,reason\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_reports_broken_link_once_per_page() {
    let server = site_server().await;
    let good = format!("{}/good", server.uri());
    let bad = format!("{}/bad", server.uri());

    let dir = tempdir().unwrap();
    write_page(dir.path(), "a.html", &[good.clone()]);
    write_page(dir.path(), "b.html", &[good.clone(), bad.clone()]);

    let mut cmd = link_sweep();
    cmd.arg(dir.path());
    let output = run(cmd).await;

    assert_eq!(output.status.code(), Some(1));

    let csv = fs::read_to_string(dir.path().join("broken_links_report.csv")).unwrap();
    assert_eq!(
        csv,
        format!("page,url,status,reason\nb.html,{},500,Internal Server Error\n", bad)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("RESULTS: 1 broken unique URLs found"));
    assert!(stdout.contains("[500] Internal Server Error"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_healthy_links_exit_with_0() {
    let server = site_server().await;
    let dir = tempdir().unwrap();
    write_page(
        dir.path(),
        "index.html",
        &[
            format!("{}/good", server.uri()),
            format!("{}/no-head", server.uri()),
            "/relative/page.html".to_string(),
            "mailto:someone@example.com".to_string(),
        ],
    );

    let mut cmd = link_sweep();
    cmd.arg(dir.path());
    let output = run(cmd).await;

    assert_eq!(output.status.code(), Some(0));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_json_output_and_custom_report_path() {
    let server = site_server().await;
    let bad = format!("{}/bad", server.uri());

    let dir = tempdir().unwrap();
    fs::write(dir.path().join("README.md"), format!("See [this]({})", bad)).unwrap();
    let report_path = dir.path().join("out.csv");

    let mut cmd = link_sweep();
    cmd.arg(dir.path()).arg("--json").arg("--output").arg(&report_path);
    let output = run(cmd).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(report_path.exists());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["broken_references"], 1);
    assert_eq!(json["failures"][0]["page"], "README.md");
    assert_eq!(json["failures"][0]["status"], 500);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unreachable_host_reports_na() {
    // Bind a port, then free it so nothing is listening there
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let dead = format!("http://127.0.0.1:{}/", port);

    let dir = tempdir().unwrap();
    write_page(dir.path(), "a.html", &[dead.clone()]);

    let mut cmd = link_sweep();
    cmd.arg(dir.path()).args(["--retries", "0", "--timeout", "5"]);
    let output = run(cmd).await;

    assert_eq!(output.status.code(), Some(1));
    let csv = fs::read_to_string(dir.path().join("broken_links_report.csv")).unwrap();
    assert!(csv.contains(&format!("a.html,{},N/A,Connection failed", dead)));
}
