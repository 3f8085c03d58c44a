//! End-to-end tests running the `chunksort` binary.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

use crate::helpers::{read_lines, write_lines};

fn chunksort(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_chunksort"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to run chunksort")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Parse the `[a b c]` line following `header` in a console report.
fn sequence_after(report: &str, header: &str) -> Vec<i64> {
    let mut lines = report.lines();
    lines.find(|line| *line == header).expect("header missing");
    let line = lines.next().expect("sequence missing");
    line.trim_start_matches('[')
        .trim_end_matches(']')
        .split_whitespace()
        .map(|v| v.parse().unwrap())
        .collect()
}

#[test]
fn test_file_mode_prints_all_stages() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("nums.txt");
    write_lines(&input, &[5, 3, 8, 1, 9, 2, 7, 4, 6, 0]);

    let output = chunksort(&["file", "-i", input.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let expected = "Original numbers:\n[5 3 8 1 9 2 7 4 6 0]\n\n\
                    Chunks before sorting:\n\
                    Chunk 0: [5 3 8]\nChunk 1: [1 9 2]\nChunk 2: [7 4]\nChunk 3: [6 0]\n\n\
                    Chunks after sorting:\n\
                    Chunk 0: [3 5 8]\nChunk 1: [1 2 9]\nChunk 2: [4 7]\nChunk 3: [0 6]\n\n\
                    Final sorted result:\n[0 1 2 3 4 5 6 7 8 9]\n";
    assert_eq!(stdout(&output), expected);
}

#[test]
fn test_file_mode_parse_error_names_line() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bad.txt");
    std::fs::write(&input, "1\n2\n\n4\nfive\n").unwrap();

    let output = chunksort(&["file", "-i", input.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("line 5"), "stderr: {}", stderr(&output));
}

#[test]
fn test_file_mode_invalid_utf8_names_line() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("binary.txt");
    std::fs::write(&input, b"1\n2\n3\n\xff\xfe\n5\n").unwrap();

    let output = chunksort(&["file", "-i", input.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("line 4"), "stderr: {}", stderr(&output));
}

#[test]
fn test_file_mode_too_few_values() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("short.txt");
    write_lines(&input, &[1, 2, 3, 4, 5, 6, 7, 8, 9]);

    let output = chunksort(&["file", "-i", input.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("at least 10"));
}

#[test]
fn test_file_mode_missing_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.txt");
    let output = chunksort(&["file", "-i", missing.to_str().unwrap()]);
    assert!(!output.status.success());
}

#[test]
fn test_random_mode_seeded_is_reproducible() {
    let args = ["random", "-n", "50", "--seed", "1234"];
    let first = chunksort(&args);
    let second = chunksort(&["random", "-n", "50", "--seed", "1234", "--merge", "heap", "-t", "3"]);
    assert!(first.status.success(), "stderr: {}", stderr(&first));
    assert!(second.status.success(), "stderr: {}", stderr(&second));
    assert_eq!(stdout(&first), stdout(&second));

    let report = stdout(&first);
    let original = sequence_after(&report, "Original numbers:");
    let sorted = sequence_after(&report, "Final sorted result:");
    assert_eq!(original.len(), 50);
    assert!(original.iter().all(|v| (0..=999).contains(v)));

    let mut expected = original.clone();
    expected.sort_unstable();
    assert_eq!(sorted, expected);
    // ceil(sqrt(50)) = 8 chunks
    assert!(report.contains("Chunk 7: "));
    assert!(!report.contains("Chunk 8: "));
}

#[test]
fn test_random_mode_rejects_small_count() {
    let output = chunksort(&["random", "-n", "5"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("must be >= 10"));
}

#[test]
fn test_zero_threads_rejected() {
    let output = chunksort(&["random", "-n", "20", "--threads", "0"]);
    assert!(!output.status.success());
}

#[test]
fn test_dir_mode_default_output() {
    let root = TempDir::new().unwrap();
    let input = root.path().join("data");
    std::fs::create_dir(&input).unwrap();
    write_lines(&input.join("one.txt"), &(0..12).rev().collect::<Vec<i64>>());
    write_lines(&input.join("two.txt"), &[3, 1, 2]);
    write_lines(&input.join("skip.csv"), &(0..12).collect::<Vec<i64>>());

    let output = chunksort(&["dir", "-d", input.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out_dir = root.path().join("data_sorted");
    assert!(stdout(&output).contains("Sorted files saved in directory:"));
    assert!(stdout(&output).contains(out_dir.to_str().unwrap()));
    assert_eq!(read_lines(&out_dir.join("one.txt")), (0..12).collect::<Vec<i64>>());
    assert!(!out_dir.join("two.txt").exists());
    assert!(!out_dir.join("skip.csv").exists());
    assert!(stderr(&output).contains("Skipping"));
}

#[test]
fn test_dir_mode_custom_output_and_suffix() {
    let root = TempDir::new().unwrap();
    let input = root.path().join("data");
    let out_dir = root.path().join("custom");
    std::fs::create_dir(&input).unwrap();
    write_lines(&input.join("a.nums"), &[10, -3, 7, 7, 0, 2, 99, -50, 4, 1, 8]);

    let output = chunksort(&[
        "dir",
        "-d",
        input.to_str().unwrap(),
        "-o",
        out_dir.to_str().unwrap(),
        "--suffix",
        ".nums",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(read_lines(&out_dir.join("a.nums")), vec![-50, -3, 0, 1, 2, 4, 7, 7, 8, 10, 99]);
}

#[test]
fn test_dir_mode_missing_directory() {
    let root = TempDir::new().unwrap();
    let missing = root.path().join("nope");
    let output = chunksort(&["dir", "-d", missing.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(!Path::new(&format!("{}_sorted", missing.display())).exists());
}

#[test]
fn test_help_lists_modes() {
    let output = chunksort(&["--help"]);
    assert!(output.status.success());
    let text = stdout(&output);
    for mode in ["random", "file", "dir"] {
        assert!(text.contains(mode), "help missing {mode}");
    }
}
