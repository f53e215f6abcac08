mod common;
use common::*;
use fishy::term::compile_file;
use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

/// Compile with the system C compiler and run, feeding `stdin`.
/// `None` when no C compiler is installed.
fn run(name: &str, source: &str, stdin: &str) -> Option<String> {
    let has_cc = Command::new("cc")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false);
    if !has_cc {
        return None;
    }
    let dir = scratch_dir(name);
    let input = dir.join("prog.fishy");
    let c_file = dir.join("out.c");
    let exe = dir.join("prog");
    fs::write(&input, source).unwrap();
    compile_file(&input, &c_file).unwrap();
    let status = Command::new("cc")
        .arg("-std=c11")
        .arg("-pedantic-errors")
        .arg(&c_file)
        .arg("-o")
        .arg(&exe)
        .status()
        .unwrap();
    assert!(status.success(), "cc rejected {}", c_file.display());
    let mut child = Command::new(&exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    fs::remove_dir_all(&dir).unwrap();
    Some(String::from_utf8(output.stdout).unwrap())
}

#[test]
fn test_print_one() {
    if let Some(out) = run("one", "LET a = 1\nPRINT a\n", "") {
        assert_eq!(out, "1.00\n");
    }
}

#[test]
fn test_float_division() {
    if let Some(out) = run("div", "PRINT 1 / 4\nPRINT 7 - 2 * 3\n", "") {
        assert_eq!(out, "0.25\n1.00\n");
    }
}

#[test]
fn test_countdown() {
    let src = "LET n = 3\nWHILE n > 0 REPEAT\nPRINT n\nLET n = n - 1\nENDWHILE\nPRINT \"liftoff\"\n";
    if let Some(out) = run("countdown", src, "") {
        assert_eq!(out, "3.00\n2.00\n1.00\nliftoff\n");
    }
}

#[test]
fn test_goto_skips() {
    let src = "GOTO skip\nPRINT \"skipped\"\nLABEL skip\nPRINT \"landed\"\n";
    if let Some(out) = run("goto", src, "") {
        assert_eq!(out, "landed\n");
    }
}

#[test]
fn test_bad_input_reads_zero() {
    let src = "INPUT a\nINPUT b\nPRINT a\nPRINT b\n";
    if let Some(out) = run("input", src, "oops 2.5\n") {
        assert_eq!(out, "0.00\n2.50\n");
    }
}

#[test]
fn test_label_at_end_of_loop() {
    let src = "LET a = 2\nWHILE a > 0 REPEAT\nPRINT a\nLET a = a - 1\nLABEL inner\nENDWHILE\n";
    if let Some(out) = run("blockend", src, "") {
        assert_eq!(out, "2.00\n1.00\n");
    }
}
