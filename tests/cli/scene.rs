//! `senda scene` integration tests

use crate::cli::support::{senda, write_dataset, SHORTCUT_DATA};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_scene_human_frame() {
    let dir = tempdir().unwrap();
    let path = write_dataset(dir.path(), SHORTCUT_DATA);

    senda()
        .current_dir(dir.path())
        .args(["scene", "--from", "1", "--to", "4", "--data"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS from 1 to 4"))
        .stdout(predicate::str::contains("path: 1 -> 4"))
        .stdout(predicate::str::contains("nodes:"))
        .stdout(predicate::str::contains("edges:"))
        .stdout(predicate::str::contains("  1 -> 4 *"));
}

#[test]
fn test_scene_records_frame() {
    let dir = tempdir().unwrap();
    let path = write_dataset(dir.path(), SHORTCUT_DATA);

    senda()
        .current_dir(dir.path())
        .args([
            "--format", "records", "scene", "--from", "1", "--to", "4", "--data",
        ])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H senda=1 records=1 mode=scene vertices=4 edges=4",
        ))
        .stdout(predicate::str::contains("N 1 0 0 path"))
        .stdout(predicate::str::contains("E 1 4 path"))
        .stdout(predicate::str::contains("P 1 4"))
        .stdout(predicate::str::contains("S \"BFS from 1 to 4\""));
}

#[test]
fn test_scene_json_snapshot() {
    let dir = tempdir().unwrap();
    let path = write_dataset(dir.path(), SHORTCUT_DATA);

    let output = senda()
        .current_dir(dir.path())
        .args([
            "--format", "json", "scene", "--from", "1", "--to", "4", "--data",
        ])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let scene: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(scene["status"], "BFS from 1 to 4");
    assert_eq!(scene["path"], serde_json::json!([1, 4]));
    assert_eq!(scene["nodes"].as_array().unwrap().len(), 4);
    assert_eq!(scene["edges"].as_array().unwrap().len(), 4);
    assert_eq!(scene["nodes"][0]["on_path"], true);
    assert_eq!(scene["nodes"][1]["on_path"], false);
}

#[test]
fn test_scene_defaults_to_self_path() {
    let dir = tempdir().unwrap();
    let path = write_dataset(dir.path(), SHORTCUT_DATA);

    senda()
        .current_dir(dir.path())
        .args(["--format", "records", "scene", "--data"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("P 1"))
        .stdout(predicate::str::contains("S \"BFS from 1 to 1\""));
}

#[test]
fn test_scene_clamps_selection_to_graph() {
    let dir = tempdir().unwrap();
    let path = write_dataset(dir.path(), SHORTCUT_DATA);

    // 0 and 99 are outside the identity range; both clamp.
    senda()
        .current_dir(dir.path())
        .args(["scene", "--from", "0", "--to", "99", "--data"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS from 1 to 4"));
}

#[test]
fn test_scene_dfs_flags_chain_edges() {
    let dir = tempdir().unwrap();
    let path = write_dataset(dir.path(), SHORTCUT_DATA);

    senda()
        .current_dir(dir.path())
        .args([
            "--format", "records", "scene", "--from", "1", "--to", "4", "--algo", "dfs",
            "--data",
        ])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("P 1 2 3 4"))
        .stdout(predicate::str::contains("E 1 2 path"))
        .stdout(predicate::str::contains("S \"DFS from 1 to 4\""));
}
