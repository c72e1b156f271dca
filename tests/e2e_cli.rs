//! CLI end-to-end tests
//!
//! Tests for the tankobon command-line interface.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Get a command for the tankobon binary
#[allow(deprecated)]
fn tankobon_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tankobon").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn touch(root: &Path, relative: &str, contents: &[u8]) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn cbz_with_comic_info(xml: &str) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer.start_file("001.jpg", SimpleFileOptions::default()).unwrap();
    writer.start_file("ComicInfo.xml", SimpleFileOptions::default()).unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

#[test]
fn test_cli_no_args_shows_help() {
    let mut cmd = tankobon_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = tankobon_cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tankobon"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_command() {
    let mut cmd = tankobon_cmd();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_parse_help() {
    let mut cmd = tankobon_cmd();
    cmd.args(["parse", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--library-type"))
        .stdout(predicate::str::contains("--no-metadata"));
}

#[test]
fn test_cli_parse_requires_files() {
    let mut cmd = tankobon_cmd();
    cmd.arg("parse").assert().failure();
}

#[test]
fn test_cli_parse_file_name() {
    let dir = tempdir().unwrap();
    let mut cmd = tankobon_cmd();
    cmd.current_dir(dir.path())
        .args(["parse", "/manga/Naruto/Naruto v01.cbz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Series:   Naruto"))
        .stdout(predicate::str::contains("Volumes:  1"))
        .stdout(predicate::str::contains("Chapters: -"));
}

#[test]
fn test_cli_parse_json() {
    let dir = tempdir().unwrap();
    let mut cmd = tankobon_cmd();
    let output = cmd
        .current_dir(dir.path())
        .args([
            "parse",
            "--json",
            "--library-type",
            "comic",
            "/comics/Batman/Batman #12.cbz",
            "/comics/notes.txt",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["result"]["series"], "Batman");
    assert_eq!(json[0]["result"]["chapters"], "12");
    assert_eq!(json[0]["result"]["volumes"], "-100000");
    assert!(json[1]["result"].is_null());
}

#[test]
fn test_cli_parse_invalid_library_type() {
    let mut cmd = tankobon_cmd();
    cmd.args(["parse", "--library-type", "films", "/a/b.cbz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid library type"));
}

#[test]
fn test_cli_parse_reads_comic_info() {
    let dir = tempdir().unwrap();
    touch(
        dir.path(),
        "Batman/Batman 001.cbz",
        &cbz_with_comic_info("<ComicInfo><Series>The Batman</Series><Number>7</Number></ComicInfo>"),
    );
    let file = dir.path().join("Batman/Batman 001.cbz");

    let mut cmd = tankobon_cmd();
    cmd.current_dir(dir.path())
        .args(["parse", "-t", "comic"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Series:   The Batman"))
        .stdout(predicate::str::contains("Chapters: 7"));

    let mut cmd = tankobon_cmd();
    cmd.current_dir(dir.path())
        .args(["parse", "-t", "comic", "--no-metadata"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Series:   Batman"))
        .stdout(predicate::str::contains("Chapters: 1"));
}

#[test]
fn test_cli_validate_command() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("tankobon.toml");
    fs::write(
        &config_path,
        r#"
[scan]
threads = 2

[[libraries]]
name = "Manga"
root = "/nonexistent/manga"
library_type = "manga"
"#,
    )
    .unwrap();

    let mut cmd = tankobon_cmd();
    cmd.arg("validate")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("Manga (manga)"));
}

#[test]
fn test_cli_validate_rejects_duplicate_names() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("tankobon.toml");
    fs::write(
        &config_path,
        "[[libraries]]\nname = \"A\"\nroot = \"/a\"\n[[libraries]]\nname = \"A\"\nroot = \"/b\"\n",
    )
    .unwrap();

    let mut cmd = tankobon_cmd();
    cmd.arg("validate")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate library name"));
}

#[test]
fn test_cli_validate_missing_file() {
    let mut cmd = tankobon_cmd();
    cmd.args(["validate", "/nonexistent/tankobon.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_cli_scan_library() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("manga");
    touch(&root, "Naruto/Naruto v01.cbz", b"");
    touch(&root, "Naruto/Naruto v02.cbz", b"");
    touch(&root, "Berserk/Vol 02/001.cbz", b"");
    touch(&root, "Berserk/readme.txt", b"");

    let config_path = dir.path().join("tankobon.toml");
    fs::write(
        &config_path,
        format!(
            "[[libraries]]\nname = \"Manga\"\nroot = {:?}\nlibrary_type = \"manga\"\n",
            root.to_string_lossy()
        ),
    )
    .unwrap();

    let mut cmd = tankobon_cmd();
    cmd.arg("--config")
        .arg(&config_path)
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Library: Manga"))
        .stdout(predicate::str::contains("Naruto (2 files)"))
        .stdout(predicate::str::contains("Berserk (1 files)"))
        .stdout(predicate::str::contains("3 files, 2 series, 0 not recognised"));

    let mut cmd = tankobon_cmd();
    let output = cmd
        .arg("--config")
        .arg(&config_path)
        .args(["scan", "--json", "--library", "manga"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["library"], "Manga");
    assert_eq!(json[0]["series"]["Berserk"][0]["volumes"], "2");
    assert_eq!(json[0]["series"]["Naruto"].as_array().unwrap().len(), 2);
}

#[test]
fn test_cli_scan_unknown_library() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("tankobon.toml");
    fs::write(&config_path, "[[libraries]]\nname = \"A\"\nroot = \"/a\"\n").unwrap();

    let mut cmd = tankobon_cmd();
    cmd.arg("--config")
        .arg(&config_path)
        .args(["scan", "--library", "B"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Library not found"));
}

#[test]
fn test_cli_scan_without_libraries() {
    let dir = tempdir().unwrap();
    let mut cmd = tankobon_cmd();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .arg("scan")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No libraries configured"));
}
