#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn hbt() -> Command {
    cargo_bin_cmd!("habitrack")
}

/// Write a test config (no splash delay, no colors) into the system temp dir
/// and return its path
pub fn write_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_habitrack.conf", name));
    let cfg_path = path.to_string_lossy().to_string();

    fs::write(
        &path,
        "greeting: Welcome\nsplash_millis: 0\nseparator_char: \"-\"\nuse_colors: false\n",
    )
    .expect("write test config");

    cfg_path
}

/// Run one scripted session: feed `script` on stdin with the splash delay
/// disabled and colors off, returning the assert for further checks
pub fn run_script(name: &str, script: &str) -> assert_cmd::assert::Assert {
    let cfg = write_test_config(name);
    hbt()
        .args(["--no-splash", "--config", &cfg])
        .write_stdin(script.to_string())
        .assert()
}
