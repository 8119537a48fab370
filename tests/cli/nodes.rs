//! `senda nodes` integration tests

use crate::cli::support::{senda, write_dataset, SHORTCUT_DATA};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_nodes_lists_every_vertex() {
    let dir = tempdir().unwrap();
    let path = write_dataset(dir.path(), SHORTCUT_DATA);

    senda()
        .current_dir(dir.path())
        .args(["nodes", "--data"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 (0.0, 0.0)"))
        .stdout(predicate::str::contains("2 (173.2, 100.0)"))
        .stdout(predicate::str::contains("4 ("));
}

#[test]
fn test_nodes_reads_dataset_from_env() {
    let dir = tempdir().unwrap();
    let path = write_dataset(dir.path(), SHORTCUT_DATA);

    senda()
        .current_dir(dir.path())
        .env("SENDA_DATA", &path)
        .arg("nodes")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 (0.0, 0.0)"));
}

#[test]
fn test_nodes_json() {
    let dir = tempdir().unwrap();
    let path = write_dataset(dir.path(), SHORTCUT_DATA);

    let output = senda()
        .current_dir(dir.path())
        .args(["--format", "json", "nodes", "--data"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let nodes: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let nodes = nodes.as_array().unwrap();
    assert_eq!(nodes.len(), 4);
    assert_eq!(nodes[0]["id"], 1);
    assert_eq!(nodes[0]["x"], 0.0);
    assert_eq!(nodes[0]["y"], 0.0);
}

#[test]
fn test_nodes_records() {
    let dir = tempdir().unwrap();
    let path = write_dataset(dir.path(), SHORTCUT_DATA);

    senda()
        .current_dir(dir.path())
        .args(["--format", "records", "nodes", "--data"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H senda=1 records=1 mode=nodes vertices=4",
        ))
        .stdout(predicate::str::contains("N 1 0 0"));
}

#[test]
fn test_nodes_vertex_count_override_extends_graph() {
    let dir = tempdir().unwrap();
    let path = write_dataset(dir.path(), SHORTCUT_DATA);

    senda()
        .current_dir(dir.path())
        .args(["--format", "records", "--vertices", "6", "nodes", "--data"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H senda=1 records=1 mode=nodes vertices=6",
        ))
        .stdout(predicate::str::contains("N 6 "));
}
