// NFA arena
//
// States live in a flat Vec indexed by StateId. Each state keeps one
// target list per alphabet symbol plus a separate epsilon list. Targets
// may be empty, multi-valued, or form epsilon cycles; the subset engine
// downstream is responsible for taming all three.

use crate::alphabet::{Alphabet, Label, SymbolId};
use crate::{NfaError, NfaResult};
use smallvec::SmallVec;

/// Handle into the NFA state arena
pub type StateId = u32;

/// A single NFA state: symbol transitions plus epsilon transitions
#[derive(Debug, Clone)]
struct NfaState {
    /// Target lists indexed by SymbolId
    moves: Vec<SmallVec<[StateId; 2]>>,
    /// Epsilon targets
    epsilon: SmallVec<[StateId; 2]>,
}

impl NfaState {
    fn new(alphabet_len: usize) -> Self {
        Self {
            moves: vec![SmallVec::new(); alphabet_len],
            epsilon: SmallVec::new(),
        }
    }
}

/// A nondeterministic finite automaton with epsilon transitions
///
/// A fresh `Nfa` has no states; `add_state` allocates them and the first
/// allocated state is the default start state. All mutating operations
/// validate state ids eagerly, so a fully built `Nfa` never contains a
/// dangling transition target.
#[derive(Debug, Clone)]
pub struct Nfa {
    alphabet: Alphabet,
    states: Vec<NfaState>,
    start: StateId,
    /// Sorted, deduplicated accepting states
    accepting: Vec<StateId>,
}

impl Nfa {
    /// Create an empty NFA over `alphabet`
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            states: Vec::new(),
            start: 0,
            accepting: Vec::new(),
        }
    }

    /// Allocate a new state with no transitions
    pub fn add_state(&mut self) -> StateId {
        let id = self.states.len() as StateId;
        self.states.push(NfaState::new(self.alphabet.len()));
        id
    }

    fn check_state(&self, state: StateId) -> NfaResult<()> {
        if (state as usize) < self.states.len() {
            Ok(())
        } else {
            Err(NfaError::UnknownState {
                state,
                states: self.states.len(),
            })
        }
    }

    /// Add a transition `from --label--> to`
    ///
    /// Duplicate transitions are collapsed. Fails fast on ids outside the
    /// arena or symbol ids outside the alphabet.
    pub fn add_transition(&mut self, from: StateId, label: Label, to: StateId) -> NfaResult<()> {
        self.check_state(from)?;
        self.check_state(to)?;
        let state = &mut self.states[from as usize];
        match label {
            Label::Symbol(id) => {
                let targets =
                    state
                        .moves
                        .get_mut(id as usize)
                        .ok_or(NfaError::InvalidSymbolId {
                            id,
                            len: self.alphabet.len(),
                        })?;
                if !targets.contains(&to) {
                    targets.push(to);
                }
            }
            Label::Epsilon => {
                if !state.epsilon.contains(&to) {
                    state.epsilon.push(to);
                }
            }
        }
        Ok(())
    }

    /// Make `state` the start state
    pub fn set_start(&mut self, state: StateId) -> NfaResult<()> {
        self.check_state(state)?;
        self.start = state;
        Ok(())
    }

    /// Mark `state` as accepting
    pub fn mark_accepting(&mut self, state: StateId) -> NfaResult<()> {
        self.check_state(state)?;
        if let Err(pos) = self.accepting.binary_search(&state) {
            self.accepting.insert(pos, state);
        }
        Ok(())
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    /// The accepting set, sorted and deduplicated
    pub fn accepting(&self) -> &[StateId] {
        &self.accepting
    }

    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.binary_search(&state).is_ok()
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Targets of `state` on `symbol`; empty slice for unknown ids
    #[inline]
    pub fn symbol_moves(&self, state: StateId, symbol: SymbolId) -> &[StateId] {
        self.states
            .get(state as usize)
            .and_then(|s| s.moves.get(symbol as usize))
            .map(|v| &v[..])
            .unwrap_or(&[])
    }

    /// Epsilon targets of `state`; empty slice for unknown ids
    #[inline]
    pub fn epsilon_moves(&self, state: StateId) -> &[StateId] {
        self.states
            .get(state as usize)
            .map(|s| &s.epsilon[..])
            .unwrap_or(&[])
    }
}
