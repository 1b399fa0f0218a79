// Integration tests for the DFA-er interpreter

use dfaer::automaton::Automaton;
use dfaer::interpreter::engine::{Interpreter, RunOutcome};
use dfaer::interpreter::run_source;
use dfaer::parser::builder::build;
use dfaer::parser::Program;
use std::io;

fn run(source: &str) -> RunOutcome {
    let program = Program::parse(source);
    Interpreter::new(&program.automaton).run(&program.execution, io::empty())
}

#[test]
fn test_accepting_self_loop() {
    // accepting state 0 looping on symbol 0
    let outcome = run("..0.-0-0-!.0.");
    assert_eq!(outcome, RunOutcome::Accepted("\u{0}\u{0}".to_string()));
}

#[test]
fn test_dot_terminated_transition_is_truncated() {
    // "-0.0." never sees a closing '-', so no transition is declared
    let program = Program::parse("..0.-0.0.!.0.");
    assert_eq!(program.automaton.len(), 1);
    let start = program.automaton.start().unwrap();
    assert_eq!(program.automaton.state(start).transition_count(), 0);

    let outcome = Interpreter::new(&program.automaton).run(&program.execution, io::empty());
    assert_eq!(
        outcome,
        RunOutcome::DeadTransition {
            state: 0,
            symbol: Some(0)
        }
    );
}

#[test]
fn test_ends_on_non_accepting_state() {
    let outcome = run(".0.-1-1-!.1.");
    assert_eq!(outcome, RunOutcome::Rejected);
    assert_eq!(outcome.output(), None);
}

#[test]
fn test_missing_transition_aborts() {
    let outcome = run(".0.!.1.");
    assert_eq!(
        outcome,
        RunOutcome::DeadTransition {
            state: 0,
            symbol: Some(1)
        }
    );
    assert_eq!(outcome.output(), None);
}

#[test]
fn test_empty_definition() {
    assert_eq!(run("!.0. .1. -"), RunOutcome::NoStart);
    assert_eq!(run(""), RunOutcome::NoStart);
}

#[test]
fn test_no_separator_means_no_execution() {
    // Only the start state is visited
    assert_eq!(run("..1000001. -1-1-").output(), Some("A"));
    assert_eq!(run(".1000001. -1-1-").output(), None);
}

#[test]
fn test_hello() {
    // H -0-> e -0-> l, l loops on 1, l -0-> o (accepting)
    let source = "\
        .1001000.  -0-1100101-
        .1100101.  -0-1101100-
        .1101100.  -1-1101100- -0-1101111-
        ..1101111.
        ! .0. .0. .1. .0.";
    assert_eq!(run(source).output(), Some("Hello"));
}

#[test]
fn test_accepting_flag_only_matters_at_the_end() {
    let source = "..1000001. -1-1000010- .1000010. -1-1000011- ..1000011. ! .1. .1.";
    assert_eq!(run(source).output(), Some("ABC"));

    let source = "..1000001. -1-1000010- .1000010. -1-1000011- ..1000011. ! .1.";
    assert_eq!(run(source), RunOutcome::Rejected);
}

#[test]
fn test_cycle_between_states() {
    let source = "..1000001. -0-1000010- ..1000010. -0-1000001- ! .0. .0. .0.";
    assert_eq!(run(source).output(), Some("ABAB"));
}

#[test]
fn test_large_identities_print_decimal() {
    let source = format!(
        "..1000001. -1-{big:b}- ..{big:b}. ! .1.",
        big = 0x110000u64 + 7
    );
    assert_eq!(run(&source).output(), Some("A1114119"));
}

#[test]
fn test_noise_in_execution_section() {
    let source = "..1000001. -1-1000010- ..1000010. ! feed one: .1. done";
    assert_eq!(run(source).output(), Some("AB"));
}

#[test]
fn test_run_source_helper() {
    assert_eq!(
        run_source("..1000001.!", io::empty()),
        Some("A".to_string())
    );
    assert_eq!(run_source(".1000001.!", io::empty()), None);
}

#[test]
fn test_builder_is_idempotent() {
    let definition = "..0. -1-1- .1. -0-0- -1-10- ..10. -0-0- .1.";
    let first = build(definition);
    let second = build(definition);
    assert_eq!(first, second);
    assert_eq!(first.start(), second.start());
}

#[test]
fn test_start_never_reassigned() {
    let dfa: Automaton = build(".101. -0-1- .1. ..0. ..101.");
    let start = dfa.start().unwrap();
    assert_eq!(dfa.state(start).id(), 5);
    assert!(dfa.state(start).is_accepting());
}

#[test]
fn test_oversized_input_suppresses_output() {
    // 2^64 cannot be a transition symbol, so the walk dies on it
    let source = format!("..0.-0-0-!.1{}.", "0".repeat(64));
    assert_eq!(run_source(&source, io::empty()), None);
}

#[test]
fn test_oversized_symbol_does_not_stop_build() {
    let source = format!("..0.-1{}-1- -0-0-!.0.", "0".repeat(64));
    assert_eq!(
        run_source(&source, io::empty()),
        Some("\u{0}\u{0}".to_string())
    );
}
