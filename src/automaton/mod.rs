//! In-memory automaton model
//!
//! States live in a flat table indexed by [`StateIndex`] in creation order, with
//! a side map from identity to index. Transitions store destination indices, so
//! cycles, self-loops and back-edges need no shared ownership.
//!
//! - [`dump`]: Human-readable listing of every state, used by `--dump`

pub mod dump;

use rustc_hash::FxHashMap;

/// State identity. Doubles as the symbol a state emits when the walker lands on it.
pub type StateId = u64;

/// Transition input symbol.
pub type Symbol = u64;

/// Position of a state in the automaton's state table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateIndex(usize);

/// A single automaton state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    id: StateId,
    accepting: bool,
    transitions: FxHashMap<Symbol, StateIndex>,
}

impl State {
    fn new(id: StateId, accepting: bool) -> Self {
        State {
            id,
            accepting,
            transitions: FxHashMap::default(),
        }
    }

    pub fn id(&self) -> StateId {
        self.id
    }

    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    /// Destination for `symbol`, if this state has a transition on it
    pub fn transition(&self, symbol: Symbol) -> Option<StateIndex> {
        self.transitions.get(&symbol).copied()
    }

    /// Transitions sorted by symbol
    pub fn transitions(&self) -> Vec<(Symbol, StateIndex)> {
        let mut paths: Vec<(Symbol, StateIndex)> =
            self.transitions.iter().map(|(&s, &d)| (s, d)).collect();
        paths.sort_unstable_by_key(|&(symbol, _)| symbol);
        paths
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }
}

/// A deterministic finite automaton built from a definition section.
///
/// `start` is fixed by the first call to [`Automaton::declare`] and never
/// reassigned afterwards. If the table is empty there is no start state and a
/// run over this automaton produces nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Automaton {
    states: Vec<State>,
    index: FxHashMap<StateId, StateIndex>,
    start: Option<StateIndex>,
}

impl Automaton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert a state from an explicit declaration.
    ///
    /// An existing state keeps its transitions and only has its accepting flag
    /// overwritten. The first state ever created becomes the start state.
    pub fn declare(&mut self, id: StateId, accepting: bool) -> StateIndex {
        if let Some(&idx) = self.index.get(&id) {
            self.states[idx.0].accepting = accepting;
            return idx;
        }

        let idx = self.insert(id, accepting);
        if self.start.is_none() {
            self.start = Some(idx);
        }
        idx
    }

    /// Upsert a state discovered as a transition destination.
    ///
    /// A new state starts non-accepting with no transitions. Never sets the start state.
    pub fn reference(&mut self, id: StateId) -> StateIndex {
        match self.index.get(&id) {
            Some(&idx) => idx,
            None => self.insert(id, false),
        }
    }

    /// Record `from --symbol--> to`, replacing any earlier transition on `symbol`
    pub fn add_transition(&mut self, from: StateIndex, symbol: Symbol, to: StateIndex) {
        self.states[from.0].transitions.insert(symbol, to);
    }

    /// Follow the transition on `symbol` out of `from`
    pub fn step(&self, from: StateIndex, symbol: Symbol) -> Option<StateIndex> {
        self.states.get(from.0)?.transition(symbol)
    }

    pub fn start(&self) -> Option<StateIndex> {
        self.start
    }

    /// Get a state by table index.
    ///
    /// Indices handed out by this automaton are always valid for it.
    pub fn state(&self, idx: StateIndex) -> &State {
        &self.states[idx.0]
    }

    /// Find a state by identity
    pub fn lookup(&self, id: StateId) -> Option<StateIndex> {
        self.index.get(&id).copied()
    }

    /// States in creation order
    pub fn states(&self) -> impl Iterator<Item = (StateIndex, &State)> {
        self.states
            .iter()
            .enumerate()
            .map(|(i, state)| (StateIndex(i), state))
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    fn insert(&mut self, id: StateId, accepting: bool) -> StateIndex {
        let idx = StateIndex(self.states.len());
        self.states.push(State::new(id, accepting));
        self.index.insert(id, idx);
        idx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_declaration_is_start() {
        let mut dfa = Automaton::new();
        let a = dfa.declare(3, false);
        let b = dfa.declare(5, true);

        assert_eq!(dfa.start(), Some(a));
        assert_ne!(a, b);
        assert_eq!(dfa.len(), 2);
    }

    #[test]
    fn test_redeclare_keeps_transitions() {
        let mut dfa = Automaton::new();
        let a = dfa.declare(1, false);
        let b = dfa.reference(2);
        dfa.add_transition(a, 0, b);

        let again = dfa.declare(1, true);
        assert_eq!(again, a);
        assert!(dfa.state(a).is_accepting());
        assert_eq!(dfa.step(a, 0), Some(b));
    }

    #[test]
    fn test_reference_never_sets_start() {
        let mut dfa = Automaton::new();
        let dest = dfa.reference(7);

        assert_eq!(dfa.start(), None);
        assert!(!dfa.state(dest).is_accepting());
        assert_eq!(dfa.state(dest).transition_count(), 0);

        // A later declaration still becomes start, even for a different identity
        let decl = dfa.declare(9, true);
        assert_eq!(dfa.start(), Some(decl));
    }

    #[test]
    fn test_reference_does_not_touch_accepting() {
        let mut dfa = Automaton::new();
        let a = dfa.declare(4, true);
        assert_eq!(dfa.reference(4), a);
        assert!(dfa.state(a).is_accepting());
    }

    #[test]
    fn test_last_transition_wins() {
        let mut dfa = Automaton::new();
        let a = dfa.declare(0, false);
        let b = dfa.reference(1);
        let c = dfa.reference(2);
        dfa.add_transition(a, 5, b);
        dfa.add_transition(a, 5, c);

        assert_eq!(dfa.step(a, 5), Some(c));
        assert_eq!(dfa.state(a).transition_count(), 1);
    }

    #[test]
    fn test_self_loop_and_cycle() {
        let mut dfa = Automaton::new();
        let a = dfa.declare(0, true);
        let b = dfa.reference(1);
        dfa.add_transition(a, 0, a);
        dfa.add_transition(a, 1, b);
        dfa.add_transition(b, 1, a);

        assert_eq!(dfa.step(a, 0), Some(a));
        assert_eq!(dfa.step(dfa.step(a, 1).unwrap(), 1), Some(a));
        assert_eq!(dfa.step(b, 0), None);
    }
}
