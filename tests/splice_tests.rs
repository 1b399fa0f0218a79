// Live-input splicing, through the library and the binary

use dfaer::interpreter::engine::{Interpreter, RunOutcome};
use dfaer::interpreter::run_source;
use dfaer::interpreter::tape::encode_input;
use dfaer::parser::{read_source, Program};
use std::io::{self, Cursor, Write};
use std::process::{Command, Stdio};

/// Accepting echo automaton: state 0 goes to the state named after each
/// character of `alphabet`, and every such state does the same.
fn echo_definition(alphabet: &str) -> String {
    let mut ids = vec![0u32];
    ids.extend(alphabet.chars().map(u32::from));

    let mut definition = String::new();
    for id in &ids {
        definition.push_str(&format!("..{id:b}. "));
        for target in alphabet.chars().map(u32::from) {
            definition.push_str(&format!("-{target:b}-{target:b}- "));
        }
    }
    definition
}

#[test]
fn test_encoded_block_matches_literal_inputs() {
    let definition = echo_definition("ab");
    let spliced = format!("{definition}!-");
    let literal = format!("{definition}!{}", encode_input("ba"));

    assert_eq!(
        run_source(&spliced, Cursor::new("ba")),
        run_source(&literal, io::empty())
    );
    assert_eq!(
        run_source(&spliced, Cursor::new("ba")),
        Some("\u{0}ba".to_string())
    );
}

#[test]
fn test_splice_then_remainder() {
    let definition = echo_definition("xy");
    let source = format!("{definition}! - .{:b}.", u32::from('y'));
    assert_eq!(
        run_source(&source, Cursor::new("xx")),
        Some("\u{0}xxy".to_string())
    );
}

#[test]
fn test_input_is_read_only_once() {
    // the second '-' finds stdin exhausted, so the trailing input is dropped
    let definition = echo_definition("z");
    let source = format!("{definition}! - - .1.");
    assert_eq!(
        run_source(&source, Cursor::new("z")),
        Some("\u{0}z".to_string())
    );
}

#[test]
fn test_unknown_live_character_is_dead() {
    let definition = echo_definition("a");
    let program = Program::parse(&format!("{definition}!-"));
    let outcome = Interpreter::new(&program.automaton).run(&program.execution, Cursor::new("ab"));
    assert_eq!(
        outcome,
        RunOutcome::DeadTransition {
            state: u64::from('a'),
            symbol: Some(u64::from('b')),
        }
    );
}

#[test]
fn test_invalid_utf8_input_is_treated_as_empty() {
    let source = "..1000001. ! - .1.";
    assert_eq!(
        run_source(source, Cursor::new(vec![0xff, 0xfe])),
        Some("A".to_string())
    );
}

#[test]
fn test_read_source_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    write!(file, "..1000001.!").expect("Failed to write program");

    let source = read_source(Some(file.path())).expect("Failed to read program");
    assert_eq!(source, "..1000001.!");
}

#[test]
fn test_read_source_missing_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("missing.dfa");

    let err = read_source(Some(&path)).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("Error reading file: {}", path.display())
    );
}

fn run_binary(args: &[&str], stdin: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_dfaer"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start dfaer");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");
    child.wait_with_output().expect("Failed to wait for dfaer")
}

#[test]
fn test_binary_reads_file_and_splices_stdin() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    write!(file, "{}! -", echo_definition("hi")).expect("Failed to write program");
    let path = file.path().to_str().expect("temp path is UTF-8");

    let output = run_binary(&[path], "hi");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "\u{0}hi\n");
}

#[test]
fn test_binary_reads_program_from_stdin() {
    let output = run_binary(&[], "..1000001. -1-1000010- ..1000010. ! .1.");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "AB\n");
}

#[test]
fn test_binary_prints_nothing_when_rejected() {
    let output = run_binary(&[], ".1000001. ! ");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_binary_dump() {
    let output = run_binary(&["--dump"], "..0. -1-10- ! .1.");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "STARTING STATE\nstate name: 0\naccepting: True\nstate paths: \n\t1: 2\n\n\
         state name: 2\naccepting: False\nstate paths: \n\n"
    );
}

#[test]
fn test_binary_unreadable_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nope.dfa");
    let output = run_binary(&[path.to_str().expect("temp path is UTF-8")], "");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error reading file:"));
}
