// Walk history for step-through replay

use crate::automaton::{StateIndex, Symbol};
use crate::interpreter::errors::HistoryError;
use std::mem;

/// What happened on a recorded step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// Landed on the start state
    Start,
    /// Took the transition on `symbol`
    Transition { symbol: Symbol },
    /// Spliced `chars` characters of live input into the tape
    Splice { chars: usize },
    /// No transition on `symbol`; output is suppressed. `None` marks an input
    /// too wide to be a symbol.
    DeadTransition { symbol: Option<Symbol> },
    /// Tape exhausted or unreadable token; the run ended normally
    Halt { accepted: bool },
}

/// Walker state after one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub event: StepEvent,
    pub state: StateIndex,
    pub cursor: usize,
    pub tape: usize, // Index into the recorded tape versions
    pub output_len: usize,
}

impl Snapshot {
    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        mem::size_of::<Snapshot>()
    }
}

/// Memory-bounded record of one walk
#[derive(Debug)]
pub struct SnapshotManager {
    snapshots: Vec<Snapshot>,
    tapes: Vec<String>,
    transcript: String,
    truncated: bool,
    max_memory: usize,
    current_memory: usize,
}

impl SnapshotManager {
    pub fn new(max_memory: usize) -> Self {
        SnapshotManager {
            snapshots: Vec::new(),
            tapes: Vec::new(),
            transcript: String::new(),
            truncated: false,
            max_memory,
            current_memory: 0,
        }
    }

    /// Add a snapshot to history
    pub fn push(&mut self, snapshot: Snapshot) -> Result<(), HistoryError> {
        self.reserve(snapshot.estimated_size())?;
        self.snapshots.push(snapshot);
        Ok(())
    }

    /// Record a new version of the tape, returning its index
    pub fn push_tape(&mut self, text: String) -> Result<usize, HistoryError> {
        self.reserve(text.len())?;
        self.tapes.push(text);
        Ok(self.tapes.len() - 1)
    }

    /// Store the full trace of visited identities once the walk is over.
    ///
    /// Kept even for dead runs, whose output is never printed.
    pub fn finish(&mut self, transcript: &str, truncated: bool) {
        self.transcript = transcript.to_string();
        self.truncated = truncated;
    }

    fn reserve(&mut self, size: usize) -> Result<(), HistoryError> {
        if self.current_memory + size > self.max_memory {
            return Err(HistoryError::LimitExceeded {
                current: self.current_memory,
                requested: size,
                limit: self.max_memory,
            });
        }
        self.current_memory += size;
        Ok(())
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Tape text for a recorded version
    pub fn tape(&self, version: usize) -> Option<&str> {
        self.tapes.get(version).map(String::as_str)
    }

    /// Trace emitted up to and including `snapshot`
    pub fn output_at(&self, snapshot: &Snapshot) -> &str {
        self.transcript
            .get(..snapshot.output_len)
            .unwrap_or(&self.transcript)
    }

    /// Whether recording stopped early because of the memory limit
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Get the number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Get current memory usage
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::Automaton;

    fn snapshot(state: StateIndex, output_len: usize) -> Snapshot {
        Snapshot {
            event: StepEvent::Start,
            state,
            cursor: 0,
            tape: 0,
            output_len,
        }
    }

    #[test]
    fn test_limit_is_enforced() {
        let mut dfa = Automaton::new();
        let start = dfa.declare(0, true);
        let one = snapshot(start, 0).estimated_size();

        let mut history = SnapshotManager::new(one * 2);
        assert!(history.push(snapshot(start, 0)).is_ok());
        assert!(history.push(snapshot(start, 1)).is_ok());
        assert!(matches!(
            history.push(snapshot(start, 2)),
            Err(HistoryError::LimitExceeded { .. })
        ));
        assert_eq!(history.len(), 2);
        assert_eq!(history.memory_usage(), one * 2);
    }

    #[test]
    fn test_output_prefix() {
        let mut dfa = Automaton::new();
        let start = dfa.declare(0x41, true);

        let mut history = SnapshotManager::new(1024);
        let tape = history.push_tape(".1.".to_string()).unwrap();
        assert_eq!(history.tape(tape), Some(".1."));

        history.finish("AB", false);
        assert_eq!(history.output_at(&snapshot(start, 1)), "A");
        assert_eq!(history.output_at(&snapshot(start, 2)), "AB");
        assert!(!history.is_truncated());
    }
}
