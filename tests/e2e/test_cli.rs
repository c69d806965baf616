//! Integration tests for the famdot binary.
//!
//! These tests pipe text and JSON family descriptions through the compiled
//! binary and verify the emitted DOT graph (or converted JSON) output.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// Two-generation family in the indented text format.
const TEXT_FAMILY: &str = "\
Abraham (M)
Mona (F)
\tHomer (M)

Homer (M)
Marge (F)
\tBart (M)
\tLisa (F)
";

/// The same family in the JSON format.
const JSON_FAMILY: &str = r#"{
  "individuals": [
    {"id": "Abraham", "name": "Abraham", "M": true},
    {"id": "Mona", "name": "Mona", "F": true},
    {"id": "Homer", "name": "Homer", "M": true},
    {"id": "Marge", "name": "Marge", "F": true},
    {"id": "Bart", "name": "Bart", "M": true},
    {"id": "Lisa", "name": "Lisa", "F": true}
  ],
  "households": [
    {"parents": {"ID0": "Abraham", "ID1": "Mona"}, "children": {"ID0": "Homer"}},
    {"parents": {"ID0": "Homer", "ID1": "Marge"}, "children": {"ID0": "Bart", "ID1": "Lisa"}}
  ]
}"#;

/// Get the path to the compiled binary (debug build, built by `cargo test`).
fn binary_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("target");
    path.push("debug");
    path.push("famdot");
    path
}

/// Run the binary with the given stdin input and extra CLI args. Returns stdout.
fn run_binary(input: &str, extra_args: &[&str]) -> String {
    let bin = binary_path();
    assert!(
        bin.exists(),
        "Binary not found at {:?}. Run `cargo build` first.",
        bin
    );

    let output = Command::new(&bin)
        .args(extra_args)
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::Write;
            if let Some(ref mut stdin) = child.stdin {
                stdin.write_all(input.as_bytes()).ok();
            }
            child.wait_with_output()
        })
        .expect("Failed to run binary");

    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("Non-UTF8 output")
}

/// Run the binary expecting a nonzero exit. Returns (exit code, stderr).
fn run_binary_failing(input: &str, extra_args: &[&str]) -> (Option<i32>, String) {
    let bin = binary_path();
    assert!(
        bin.exists(),
        "Binary not found at {:?}. Run `cargo build` first.",
        bin
    );

    let output = Command::new(&bin)
        .args(extra_args)
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::Write;
            if let Some(ref mut stdin) = child.stdin {
                stdin.write_all(input.as_bytes()).ok();
            }
            child.wait_with_output()
        })
        .expect("Failed to run binary");

    assert!(
        !output.status.success(),
        "Binary unexpectedly succeeded:\nstdout: {}",
        String::from_utf8_lossy(&output.stdout)
    );

    (
        output.status.code(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

// ─── DOT output tests ────────────────────────────────────────────────────────

#[test]
fn test_json_stdin_to_dot() {
    let output = run_binary(JSON_FAMILY, &[]);

    assert!(output.starts_with("digraph {\n"), "Missing DOT header");
    assert!(output.contains("\tnodesep=0.5; ranksep=1.5;\n"));
    assert!(output.contains("\tnode [shape=note];\n"));
    assert!(output.contains("\tedge [dir=none];\n"));
    assert!(output.ends_with("\n}\n"), "Missing DOT footer");

    // Abraham has no recorded parents and is picked as the root
    assert!(output.contains("\t\tAbraham -> h0 -> Mona;\n"));
    assert!(output.contains("\t\tHomer -> h1 -> Marge;\n"));
    assert!(output.contains("\t\th0_0 -> Homer;\n"));
    assert!(output.contains("\t\th1_0 -> Bart;\n"));
    assert!(output.contains("\t\th1_2 -> Lisa;\n"));
}

#[test]
fn test_persons_are_styled_by_sex() {
    let output = run_binary(JSON_FAMILY, &[]);
    assert!(output.contains("\tHomer[label=\"Homer\",style=filled,fillcolor=azure2];\n"));
    assert!(output.contains("\tMarge[label=\"Marge\",style=filled,fillcolor=bisque];\n"));
}

#[test]
fn test_text_format_input() {
    let output = run_binary(TEXT_FAMILY, &["-f", "text"]);
    assert!(output.starts_with("digraph {\n"));
    assert!(output.contains("\t\tAbraham -> h0 -> Mona;\n"));
    assert!(output.contains("\t\th1_2 -> Lisa;\n"));
}

#[test]
fn test_text_and_json_inputs_agree() {
    let from_text = run_binary(TEXT_FAMILY, &["-f", "text"]);
    let from_json = run_binary(JSON_FAMILY, &[]);
    assert_eq!(from_text, from_json);
}

#[test]
fn test_descending_tree_skips_forebears() {
    let output = run_binary(JSON_FAMILY, &["-a", "Homer", "-t", "descending"]);
    assert!(output.contains("\t\tHomer -> h1 -> Marge;\n"));
    assert!(
        !output.contains("Abraham"),
        "Forebears must not appear in a descending-only tree"
    );
}

#[test]
fn test_both_trees_include_forebears() {
    let output = run_binary(JSON_FAMILY, &["-a", "Homer"]);
    assert!(output.contains("\t\tAbraham -> h0 -> Mona;\n"));
    assert!(output.contains("\t\tHomer -> h1 -> Marge;\n"));
}

#[test]
fn test_runs_are_reproducible() {
    let first = run_binary(JSON_FAMILY, &["-a", "Homer"]);
    let second = run_binary(JSON_FAMILY, &["-a", "Homer"]);
    assert_eq!(first, second);
}

// ─── JSON conversion tests ───────────────────────────────────────────────────

#[test]
fn test_convert_emits_json() {
    let output = run_binary(TEXT_FAMILY, &["-f", "text", "--convert"]);
    assert!(output.contains("\"individuals\""));
    assert!(output.contains("\"households\""));
    assert!(output.contains("\"ID0\": \"Abraham\""));
    assert!(output.ends_with('\n'));
    assert!(!output.contains("digraph"), "Convert must not emit a graph");
}

#[test]
fn test_convert_round_trips() {
    let converted = run_binary(TEXT_FAMILY, &["-f", "text", "-c"]);
    let from_text = run_binary(TEXT_FAMILY, &["-f", "text"]);
    let from_converted = run_binary(&converted, &[]);
    assert_eq!(from_text, from_converted);
}

// ─── Failure paths ───────────────────────────────────────────────────────────

#[test]
fn test_unknown_ancestor_fails() {
    let (code, stderr) = run_binary_failing(JSON_FAMILY, &["-a", "Nobody"]);
    assert_eq!(code, Some(1));
    assert!(
        stderr.contains("error: cannot find person \"Nobody\""),
        "stderr was: {}",
        stderr
    );
}

#[test]
fn test_unknown_format_fails() {
    let (code, stderr) = run_binary_failing(JSON_FAMILY, &["-f", "xml"]);
    assert_eq!(code, Some(1));
    assert!(stderr.contains("unsupported input format"), "stderr was: {}", stderr);
}

#[test]
fn test_unknown_tree_type_fails() {
    let (code, stderr) = run_binary_failing(JSON_FAMILY, &["-t", "sideways"]);
    assert_eq!(code, Some(1));
    assert!(stderr.contains("unknown tree type"), "stderr was: {}", stderr);
}

#[test]
fn test_text_fed_as_json_fails() {
    let (code, stderr) = run_binary_failing(TEXT_FAMILY, &[]);
    assert_eq!(code, Some(1));
    assert!(stderr.contains("invalid JSON input"), "stderr was: {}", stderr);
}

// ─── File input and output ───────────────────────────────────────────────────

#[test]
fn test_reads_from_file() {
    let dir = std::env::temp_dir().join("famdot_test_read");
    fs::create_dir_all(&dir).ok();
    let input_file = dir.join("family.txt");
    fs::write(&input_file, TEXT_FAMILY).unwrap();

    let bin = binary_path();
    let output = Command::new(&bin)
        .args(["-f", "text", input_file.to_str().unwrap()])
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .output()
        .expect("Failed to run binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("digraph {\n"));
    assert!(stdout.contains("Homer"));

    fs::remove_file(&input_file).ok();
    fs::remove_dir(&dir).ok();
}

#[test]
fn test_missing_input_file_fails() {
    let bin = binary_path();
    let output = Command::new(&bin)
        .arg("/nonexistent/family.txt")
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .output()
        .expect("Failed to run binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: cannot read"), "stderr was: {}", stderr);
}

#[test]
fn test_output_to_file() {
    let dir = std::env::temp_dir().join("famdot_test_write");
    fs::create_dir_all(&dir).ok();
    let out_file = dir.join("family.dot");

    let bin = binary_path();
    let output = Command::new(&bin)
        .args(["--output", out_file.to_str().unwrap()])
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::Write;
            if let Some(ref mut stdin) = child.stdin {
                stdin.write_all(JSON_FAMILY.as_bytes()).ok();
            }
            child.wait_with_output()
        })
        .expect("Failed to run binary");

    assert!(output.status.success());
    assert!(output.stdout.is_empty(), "Nothing goes to stdout with -o");
    let content = fs::read_to_string(&out_file).unwrap();
    assert!(content.starts_with("digraph {\n"));
    assert!(content.ends_with("\n}\n"));

    fs::remove_file(&out_file).ok();
    fs::remove_dir(&dir).ok();
}
