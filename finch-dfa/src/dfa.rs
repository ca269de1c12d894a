// Deterministic transition table and matcher
//
// Built once by the SubsetBuilder and immutable afterwards, so a single
// Dfa can serve any number of concurrent match calls.

use crate::{DfaError, DfaResult};
use finch_nfa::{Alphabet, StateId, SymbolId};
use std::fmt;

/// Index of a DFA state in the table arena
pub type DfaStateId = usize;

/// A DFA state: a canonical set of NFA states plus its outgoing row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfaState {
    /// State ID (index in the arena)
    pub id: DfaStateId,

    /// Sorted, deduplicated NFA state ids this DFA state represents
    /// (empty for the dead state)
    pub nfa_states: Vec<StateId>,

    /// One slot per alphabet symbol. `None` is the "no transition"
    /// sentinel, distinct from a transition to the empty-set dead state.
    pub transitions: Vec<Option<DfaStateId>>,

    /// Precomputed acceptance flag: this set contains every NFA
    /// accepting state
    pub is_accepting: bool,
}

impl DfaState {
    pub(crate) fn new(
        id: DfaStateId,
        nfa_states: Vec<StateId>,
        alphabet_len: usize,
        is_accepting: bool,
    ) -> Self {
        Self {
            id,
            nfa_states,
            transitions: vec![None; alphabet_len],
            is_accepting,
        }
    }

    /// Next state on `symbol`, or `None` for the no-transition sentinel
    pub fn transition(&self, symbol: SymbolId) -> Option<DfaStateId> {
        self.transitions.get(symbol as usize).copied().flatten()
    }
}

/// An immutable DFA produced by subset construction
#[derive(Clone)]
pub struct Dfa {
    states: Vec<DfaState>,
    start: DfaStateId,
    alphabet: Alphabet,
    /// The NFA accepting set the acceptance rule was evaluated against
    accept: Vec<StateId>,
}

impl Dfa {
    pub(crate) fn new(
        states: Vec<DfaState>,
        start: DfaStateId,
        alphabet: Alphabet,
        accept: Vec<StateId>,
    ) -> Self {
        Self {
            states,
            start,
            alphabet,
            accept,
        }
    }

    /// The start state: the epsilon-closure of the NFA start state
    pub fn start(&self) -> DfaStateId {
        self.start
    }

    pub fn state(&self, id: DfaStateId) -> Option<&DfaState> {
        self.states.get(id)
    }

    /// All DFA states, in construction order
    pub fn states(&self) -> &[DfaState] {
        &self.states
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The NFA accepting set; a DFA state accepts iff it contains every
    /// member of this set
    pub fn accept_set(&self) -> &[StateId] {
        &self.accept
    }

    pub fn is_accepting(&self, id: DfaStateId) -> bool {
        self.state(id).map(|s| s.is_accepting).unwrap_or(false)
    }

    /// Next state for `(state, symbol)`, or `None` when the slot holds
    /// the no-transition sentinel
    pub fn transition(&self, state: DfaStateId, symbol: SymbolId) -> Option<DfaStateId> {
        self.state(state).and_then(|s| s.transition(symbol))
    }

    /// All `(source, symbol, target)` edges, for external renderers
    pub fn edges(&self) -> impl Iterator<Item = (DfaStateId, char, DfaStateId)> + '_ {
        let alphabet = &self.alphabet;
        self.states.iter().flat_map(move |state| {
            state
                .transitions
                .iter()
                .enumerate()
                .filter_map(move |(slot, target)| {
                    let target = (*target)?;
                    let symbol = alphabet.symbol(slot as SymbolId)?;
                    Some((state.id, symbol, target))
                })
        })
    }

    /// Match `input` against the DFA
    ///
    /// Characters outside the alphabet are an error, never a silent
    /// non-match. Acceptance is evaluated only after the whole input has
    /// been consumed; hitting the no-transition sentinel rejects early.
    pub fn matches(&self, input: &str) -> DfaResult<bool> {
        let mut current = self.start;
        for symbol in input.chars() {
            let id = self
                .alphabet
                .symbol_id(symbol)
                .ok_or(DfaError::InvalidSymbol { symbol })?;
            match self.transition(current, id) {
                Some(next) => current = next,
                None => return Ok(false),
            }
        }
        Ok(self.is_accepting(current))
    }
}

impl fmt::Debug for Dfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dfa")
            .field("state_count", &self.states.len())
            .field("start", &self.start)
            .field("alphabet_len", &self.alphabet.len())
            .field("accept_set", &self.accept)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SubsetBuilder, SubsetConfig};
    use finch_nfa::Nfa;

    fn build(pattern: &str) -> Dfa {
        let alphabet = Alphabet::new(['a', 'b']).unwrap();
        let nfa = Nfa::from_regex(pattern, alphabet).unwrap();
        SubsetBuilder::new(SubsetConfig::default()).build(&nfa).unwrap()
    }

    #[test]
    fn test_invalid_symbol_is_an_error() {
        let dfa = build("a*b");
        let err = dfa.matches("abc").unwrap_err();
        assert!(matches!(err, DfaError::InvalidSymbol { symbol: 'c' }));
    }

    #[test]
    fn test_matcher_does_not_consume_the_table() {
        let dfa = build("ab");
        assert!(dfa.matches("ab").unwrap());
        assert!(dfa.matches("ab").unwrap());
        assert!(!dfa.matches("ba").unwrap());
    }

    #[test]
    fn test_edges_cover_every_state_and_symbol() {
        let dfa = build("a*b");
        let edge_count = dfa.edges().count();
        // the eager builder fills every (state, symbol) slot
        assert_eq!(edge_count, dfa.state_count() * dfa.alphabet().len());
    }

    #[test]
    fn test_sentinel_rejects() {
        // a hand-assembled state with an empty row: every symbol hits the
        // no-transition sentinel
        let alphabet = Alphabet::new(['a']).unwrap();
        let state = DfaState::new(0, vec![0], alphabet.len(), false);
        assert_eq!(state.transition(0), None);
        let dfa = Dfa::new(vec![state], 0, alphabet, vec![1]);
        assert!(!dfa.matches("a").unwrap());
    }

    #[test]
    fn test_debug_is_compact() {
        let dfa = build("a");
        let rendered = format!("{:?}", dfa);
        assert!(rendered.contains("state_count"));
    }
}
