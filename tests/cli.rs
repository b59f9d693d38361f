extern crate assert_cmd;
extern crate predicates;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn mandel() -> Command {
    Command::cargo_bin("mandel").unwrap()
}

#[test]
fn fails_without_arguments() {
    mandel().assert().failure();
}

#[test]
fn renders_a_small_picture() {
    mandel()
        .args(&[
            "-w", "16", "-h", "12", "-a", "-2.0", "-b", "-1.0", "-c", "1.0", "-d", "1.0", "-i",
            "100",
        ])
        .assert()
        .success();
}

#[test]
fn repeats_runs_for_benchmarking() {
    mandel()
        .args(&[
            "-w", "8", "-h", "8", "-a", "-2.0", "-b", "-1.5", "-c", "1.0", "-d", "1.5", "-i",
            "50", "-r", "3", "-s",
        ])
        .assert()
        .success();
}

#[test]
fn rejects_an_inverted_viewport() {
    mandel()
        .args(&[
            "-w", "16", "-h", "12", "-a", "1.0", "-b", "-1.0", "-c", "-2.0", "-d", "1.0", "-i",
            "100",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("viewport is degenerate"));
}

#[test]
fn rejects_a_zero_width() {
    mandel()
        .args(&[
            "-w", "0", "-h", "12", "-a", "-2.0", "-b", "-1.0", "-c", "1.0", "-d", "1.0", "-i",
            "100",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Picture width must be at least 1"));
}

#[test]
fn rejects_an_unparseable_coordinate() {
    mandel()
        .args(&[
            "-w", "16", "-h", "12", "-a", "left", "-b", "-1.0", "-c", "1.0", "-d", "1.0", "-i",
            "100",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse minimal x coordinate"));
}
