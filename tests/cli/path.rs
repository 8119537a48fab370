//! `senda path` integration tests

use crate::cli::support::{senda, write_dataset, CHAIN_DATA, SHORTCUT_DATA};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_bfs_follows_chain() {
    let dir = tempdir().unwrap();
    let path = write_dataset(dir.path(), CHAIN_DATA);

    senda()
        .current_dir(dir.path())
        .args(["path", "1", "4", "--data"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "BFS from 1 to 4: 1 -> 2 -> 3 -> 4 (3 hops)",
        ));
}

#[test]
fn test_bfs_takes_shortcut() {
    let dir = tempdir().unwrap();
    let path = write_dataset(dir.path(), SHORTCUT_DATA);

    senda()
        .current_dir(dir.path())
        .args(["path", "1", "4", "--data"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS from 1 to 4: 1 -> 4 (1 hops)"));
}

#[test]
fn test_dfs_commits_to_first_listed_edge() {
    let dir = tempdir().unwrap();
    let path = write_dataset(dir.path(), SHORTCUT_DATA);

    senda()
        .current_dir(dir.path())
        .args(["path", "1", "4", "--algo", "dfs", "--data"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "DFS from 1 to 4: 1 -> 2 -> 3 -> 4 (3 hops)",
        ));
}

#[test]
fn test_no_reverse_path_is_still_success() {
    let dir = tempdir().unwrap();
    let path = write_dataset(dir.path(), CHAIN_DATA);

    senda()
        .current_dir(dir.path())
        .args(["path", "4", "1", "--data"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS from 4 to 1: no path"));
}

#[test]
fn test_self_path_is_single_vertex() {
    let dir = tempdir().unwrap();
    let path = write_dataset(dir.path(), CHAIN_DATA);

    senda()
        .current_dir(dir.path())
        .args(["path", "2", "2", "--data"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS from 2 to 2: 2 (0 hops)"));
}

#[test]
fn test_absent_vertex_yields_no_path() {
    let dir = tempdir().unwrap();
    let path = write_dataset(dir.path(), CHAIN_DATA);

    senda()
        .current_dir(dir.path())
        .args(["path", "1", "9", "--data"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS from 1 to 9: no path"));
}

#[test]
fn test_path_json_report() {
    let dir = tempdir().unwrap();
    let path = write_dataset(dir.path(), SHORTCUT_DATA);

    let output = senda()
        .current_dir(dir.path())
        .args(["--format", "json", "path", "1", "4", "--data"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["algorithm"], "bfs");
    assert_eq!(report["found"], true);
    assert_eq!(report["hops"], 1);
    assert_eq!(report["vertices"][0]["id"], 1);
    assert_eq!(report["vertices"][1]["id"], 4);
}

#[test]
fn test_path_records() {
    let dir = tempdir().unwrap();
    let path = write_dataset(dir.path(), SHORTCUT_DATA);

    senda()
        .current_dir(dir.path())
        .args(["--format", "records", "path", "1", "4", "--data"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H senda=1 records=1 mode=path algo=bfs from=1 to=4 found=true",
        ))
        .stdout(predicate::str::contains("P 1 4"));
}

#[test]
fn test_path_records_not_found_has_no_p_line() {
    let dir = tempdir().unwrap();
    let path = write_dataset(dir.path(), CHAIN_DATA);

    senda()
        .current_dir(dir.path())
        .args(["--format", "records", "path", "4", "1", "--data"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("found=false"))
        .stdout(predicate::str::contains("\nP").not());
}

#[test]
fn test_default_algorithm_comes_from_config() {
    let dir = tempdir().unwrap();
    write_dataset(dir.path(), SHORTCUT_DATA);
    std::fs::write(
        dir.path().join("senda.toml"),
        "data_path = \"graph.csv\"\nalgorithm = \"dfs\"\n",
    )
    .unwrap();

    // No --data and no --algo: both come from ./senda.toml.
    senda()
        .current_dir(dir.path())
        .args(["path", "1", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DFS from 1 to 4"));
}

#[test]
fn test_algo_flag_overrides_config() {
    let dir = tempdir().unwrap();
    write_dataset(dir.path(), SHORTCUT_DATA);
    std::fs::write(
        dir.path().join("senda.toml"),
        "data_path = \"graph.csv\"\nalgorithm = \"dfs\"\n",
    )
    .unwrap();

    senda()
        .current_dir(dir.path())
        .args(["path", "1", "4", "--algo", "bfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS from 1 to 4: 1 -> 4"));
}

#[test]
fn test_explicit_config_flag() {
    let dir = tempdir().unwrap();
    let data = write_dataset(dir.path(), CHAIN_DATA);
    let config = dir.path().join("custom.toml");
    std::fs::write(
        &config,
        format!("data_path = \"{}\"\n", data.display()),
    )
    .unwrap();

    senda()
        .args(["path", "1", "4", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 -> 2 -> 3 -> 4"));
}
