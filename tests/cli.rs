//! Runs the `mapbench` and `gen-dataset` binaries as a user would:
//! report on stdout, logs on stderr, non-zero exit on fatal input.

use {
    mapbench::Dataset,
    std::{
        fs,
        path::{Path, PathBuf},
        process::{Command, Output},
    },
    tempfile::TempDir,
};

const MAPBENCH: &str = env!("CARGO_BIN_EXE_mapbench");
const GEN_DATASET: &str = env!("CARGO_BIN_EXE_gen-dataset");

fn write(dir: &TempDir, name: &str, json: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, json).unwrap();
    path
}

fn mapbench(load: &Path, query: &Path, extra: &[&str]) -> Output {
    Command::new(MAPBENCH)
        .arg(load)
        .arg(query)
        .args(extra)
        .env("RUST_LOG", "info")
        .output()
        .expect("Failed to run mapbench")
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

// ── Reports ────────────────────────────────────────────────────────────────

#[test]
fn small_scenario_prints_a_clean_report_per_backend() {
    let dir = TempDir::new().unwrap();
    let load = write(&dir, "input.json", r#"{"0":0,"1":10,"2":20,"3":30}"#);
    let query = write(&dir, "query.json", r#"{"0":0,"1":2,"2":1}"#);

    let output = mapbench(&load, &query, &["-b", "swiss-map", "-b", "tree-map", "-b", "hash-map"]);
    assert!(output.status.success(), "stderr: {}", text(&output.stderr));

    let stdout = text(&output.stdout);
    assert_eq!(stdout.matches("container <<<<<").count(), 3);
    assert!(stdout.contains("container <<<<<hashbrown HashMap>>>>"));
    assert!(stdout.contains("container <<<<<std BTreeMap>>>>"));
    assert!(stdout.contains("container <<<<<std HashMap>>>>"));
    assert_eq!(stdout.matches("Mismatched values: 0").count(), 3);
    assert_eq!(stdout.matches("Failed lookups: 0").count(), 3);

    //  Logs stay off stdout
    assert!(!stdout.contains("read JSON dataset"));
    assert!(text(&output.stderr).contains("read JSON dataset"));
}

#[test]
fn every_backend_runs_by_default() {
    let dir = TempDir::new().unwrap();
    let load = write(&dir, "input.json", r#"{"0":0,"1":10,"2":20}"#);
    let query = write(&dir, "query.json", r#"{"0":0,"1":1}"#);

    let output = mapbench(&load, &query, &[]);
    assert!(output.status.success());
    assert_eq!(text(&output.stdout).matches("container <<<<<").count(), 9);
}

#[test]
fn absent_query_keys_are_reported_not_fatal() {
    let dir = TempDir::new().unwrap();
    let load = write(&dir, "input.json", r#"{"0":0}"#);
    let query = write(&dir, "query.json", r#"{"0":0,"1":1}"#);

    let output = mapbench(&load, &query, &["-b", "chained-map"]);
    assert!(output.status.success());
    let stdout = text(&output.stdout);
    assert!(stdout.contains("Failed lookups: 1"));
    assert!(stdout.contains("key 1 not found"));
}

// ── Fatal inputs ───────────────────────────────────────────────────────────

#[test]
fn missing_load_file_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    let query = write(&dir, "query.json", r#"{"0":0,"1":1}"#);

    let output = mapbench(&dir.path().join("absent.json"), &query, &[]);
    assert!(!output.status.success());
    assert!(text(&output.stdout).is_empty());
    assert!(text(&output.stderr).contains("failed to open"));
}

#[test]
fn missing_query_file_wins_over_a_malformed_load_file() {
    let dir = TempDir::new().unwrap();
    let load = write(&dir, "input.json", r#"{"0":0,"1":"#);
    let missing = dir.path().join("query.json");

    let output = mapbench(&load, &missing, &[]);
    assert!(!output.status.success());
    let stderr = text(&output.stderr);
    assert!(stderr.contains("failed to open"), "stderr: {}", stderr);
    assert!(stderr.contains("query.json"), "stderr: {}", stderr);
    assert!(!stderr.contains("malformed input"), "stderr: {}", stderr);
}

#[test]
fn malformed_load_file_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    let load = write(&dir, "input.json", r#"{"0":0,"1":10,"3":30}"#);
    let query = write(&dir, "query.json", r#"{"0":0,"1":1}"#);

    let output = mapbench(&load, &query, &[]);
    assert!(!output.status.success());
    assert!(text(&output.stderr).contains("malformed input"));
}

// ── Generator ──────────────────────────────────────────────────────────────

#[test]
fn generated_files_feed_the_benchmark() {
    let dir = TempDir::new().unwrap();
    let load = dir.path().join("input.json");
    let query = dir.path().join("query.json");

    let output = Command::new(GEN_DATASET)
        .args(&["--records", "50", "--queries", "80", "--miss-ratio", "0.5", "--seed", "9"])
        .arg("--load-out")
        .arg(&load)
        .arg("--query-out")
        .arg(&query)
        .output()
        .expect("Failed to run gen-dataset");
    assert!(output.status.success(), "stderr: {}", text(&output.stderr));

    let load_set = Dataset::from_path(&load).unwrap();
    let query_set = Dataset::from_path(&query).unwrap();
    assert_eq!(load_set.len(), 50);
    assert_eq!(query_set.len(), 80);
    assert!(query_set.values().iter().all(|k| *k >= 1));

    let misses = query_set.values().iter().filter(|k| **k > 50).count();
    let output = mapbench(&load, &query, &["-b", "tree-map"]);
    assert!(output.status.success());
    let stdout = text(&output.stdout);
    assert!(stdout.contains("Mismatched values: 0"));
    assert!(stdout.contains(&format!("Failed lookups: {}", misses)));
}

#[test]
fn same_seed_writes_identical_files() {
    let dir = TempDir::new().unwrap();
    let run = |suffix: &str| {
        let load = dir.path().join(format!("input-{}.json", suffix));
        let query = dir.path().join(format!("query-{}.json", suffix));
        let status = Command::new(GEN_DATASET)
            .args(&["-r", "20", "-q", "20", "-s", "3"])
            .arg("--load-out")
            .arg(&load)
            .arg("--query-out")
            .arg(&query)
            .status()
            .expect("Failed to run gen-dataset");
        assert!(status.success());
        (fs::read(load).unwrap(), fs::read(query).unwrap())
    };
    assert_eq!(run("a"), run("b"));
}
