// Shared helpers for fmeadash integration tests
#![allow(dead_code)]

use fmeadash::core::Snapshot;
use fmeadash::testkit::sample_snapshot;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write `snapshot` as JSON into a fresh temp dir and return both.
pub fn write_snapshot_json(snapshot: &Snapshot) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.json");
    std::fs::write(&path, serde_json::to_string_pretty(snapshot).unwrap()).unwrap();
    (dir, path)
}

pub fn write_sample_snapshot() -> (TempDir, PathBuf) {
    write_snapshot_json(&sample_snapshot())
}

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}
