//! The `notepub` binary.

use crate::common::*;
use std::process::Command;

fn notepub() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_notepub"));
    cmd.env("NO_COLOR", "1").env_remove("NOTEPUB_BASE_URL");
    cmd
}

fn stdout(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_slug_command() {
    let out = stdout(notepub().args(["slug", "Привет, мир!", "Tips & Tricks"]));
    assert_eq!(out, "privet-mir\ntips-and-tricks\n");
}

#[test]
fn test_slug_command_unique() {
    let out = stdout(notepub().args(["slug", "--unique", "Intro", "Intro"]));
    assert_eq!(out, "intro\nintro-2\n");
}

#[test]
fn test_search_json_output() {
    let site = tempfile::tempdir().unwrap();
    write_index(site.path(), "search.json", &hello_world_index());

    let out = stdout(notepub().args(["search", "hello", "--format", "json", "--site"]).arg(site.path()));
    let response: notepub::SearchResponse = serde_json::from_str(&out).unwrap();
    assert_eq!(paths(&response.items), ["/a"]);
}

#[test]
fn test_search_html_output_with_base() {
    let site = tempfile::tempdir().unwrap();
    write_index(site.path(), "search.json", &hello_world_index());

    let out = stdout(
        notepub()
            .args(["search", "xyz", "--format", "html", "--base", "/blog", "--site"])
            .arg(site.path()),
    );
    assert_eq!(out.trim_end(), NOTHING_FOUND);
}

#[test]
fn test_inspect_rejects_non_index() {
    let site = tempfile::tempdir().unwrap();
    write_index(site.path(), "search.json", "<html></html>");

    let output = notepub()
        .arg("inspect")
        .arg(site.path().join("search.json"))
        .output()
        .unwrap();
    assert!(!output.status.success());
}
