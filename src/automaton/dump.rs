//! Diagnostic listing of an automaton

use super::Automaton;
use std::fmt;

/// Borrowing wrapper that formats every state of an [`Automaton`].
///
/// ```text
/// STARTING STATE
/// state name: 0
/// accepting: True
/// state paths:
///     0: 0
/// ```
pub struct Dump<'a>(pub &'a Automaton);

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dfa = self.0;
        for (idx, state) in dfa.states() {
            if dfa.start() == Some(idx) {
                writeln!(f, "STARTING STATE")?;
            }
            writeln!(f, "state name: {}", state.id())?;
            writeln!(
                f,
                "accepting: {}",
                if state.is_accepting() { "True" } else { "False" }
            )?;
            writeln!(f, "state paths: ")?;
            for (symbol, dest) in state.transitions() {
                writeln!(f, "\t{}: {}", symbol, dfa.state(dest).id())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Automaton {
    pub fn dump(&self) -> Dump<'_> {
        Dump(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_marks_start() {
        let mut dfa = Automaton::new();
        let a = dfa.declare(0, true);
        let b = dfa.reference(2);
        dfa.add_transition(a, 1, b);
        dfa.add_transition(a, 0, a);

        let text = dfa.dump().to_string();
        assert_eq!(
            text,
            "STARTING STATE\nstate name: 0\naccepting: True\nstate paths: \n\t0: 0\n\t1: 2\n\n\
             state name: 2\naccepting: False\nstate paths: \n\n"
        );
    }

    #[test]
    fn test_dump_empty() {
        assert_eq!(Automaton::new().dump().to_string(), "");
    }
}
