//! Tests that run the `recaman-tube` binary.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::path::Path;
use std::process::{Command, Output};

use mesh_io::load_obj;
use tempfile::tempdir;

fn run(args: &[&str], dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_recaman-tube"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("spawn recaman-tube")
}

#[test]
fn writes_default_output_file() {
    let dir = tempdir().expect("tempdir");
    let output = run(&["-n", "10"], dir.path());

    assert!(output.status.success(), "{output:?}");
    let mesh = load_obj(dir.path().join("a.obj")).expect("load");
    assert!(!mesh.is_empty());
}

#[test]
fn number_axis_flag_controls_axis_tube() {
    let dir = tempdir().expect("tempdir");
    let with_axis = run(&["-n", "6", "--output", "with.obj"], dir.path());
    let without = run(
        &["-n", "6", "--number_axis", "false", "--output", "without.obj"],
        dir.path(),
    );
    assert!(with_axis.status.success());
    assert!(without.status.success());

    let with_axis = load_obj(dir.path().join("with.obj")).expect("load");
    let without = load_obj(dir.path().join("without.obj")).expect("load");
    assert_eq!(with_axis.vertex_count(), without.vertex_count() + 2 * 8);
}

#[test]
fn failure_names_stage_and_exits_non_zero() {
    let dir = tempdir().expect("tempdir");
    let output = run(&["--tube_resolution", "2"], dir.path());

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid argument tube_resolution"), "{stderr}");
    assert!(!dir.path().join("a.obj").exists());
}

#[test]
fn zero_twist_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let output = run(&["--twist_factor", "0"], dir.path());

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("twist_factor"), "{stderr}");
}

#[test]
fn bad_boolean_is_a_usage_error() {
    let dir = tempdir().expect("tempdir");
    let output = run(&["--number_axis", "sure"], dir.path());
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
}
