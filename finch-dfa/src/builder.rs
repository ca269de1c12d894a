// Eager subset construction
//
// Explores the powerset of NFA states with an explicit worklist, memoized
// by canonical state-set value, so each distinct DFA state is expanded at
// most once and construction terminates for any finite NFA.

use crate::closure::{epsilon_closure, move_set, StateSet};
use crate::dfa::{Dfa, DfaState, DfaStateId};
use crate::{DfaError, DfaResult, SubsetConfig};
use ahash::AHashMap;
use finch_nfa::{Nfa, StateId};

/// Builds a [`Dfa`] from an epsilon-NFA
pub struct SubsetBuilder {
    config: SubsetConfig,
}

impl SubsetBuilder {
    pub fn new(config: SubsetConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(SubsetConfig::default())
    }

    /// Run eager subset construction over `nfa`
    ///
    /// Every (state, real symbol) slot of the resulting table is filled;
    /// a move with no targets lands in the empty-set dead state, which is
    /// an ordinary table entry whose own moves all loop back to itself.
    ///
    /// The acceptance flag uses the strict containment rule: a DFA state
    /// accepts iff its set contains *every* NFA accepting state, not
    /// merely one of them. Single-accepting-state NFAs (everything the
    /// regex front end produces) behave exactly like the textbook rule;
    /// multi-accepting-state NFAs get the stricter semantics on purpose.
    pub fn build(&self, nfa: &Nfa) -> DfaResult<Dfa> {
        self.validate(nfa)?;

        let alphabet = nfa.alphabet().clone();
        let accept: Vec<StateId> = nfa.accepting().to_vec();

        let mut states: Vec<DfaState> = Vec::new();
        let mut index: AHashMap<StateSet, DfaStateId> = AHashMap::new();
        let mut worklist: Vec<DfaStateId> = Vec::new();

        let start_set = epsilon_closure(nfa, &[nfa.start()]);
        let start = intern(
            start_set,
            &accept,
            alphabet.len(),
            &mut states,
            &mut index,
            &mut worklist,
        );

        while let Some(id) = worklist.pop() {
            // expansion appends to the arena, so take a copy of the set
            let set = states[id].nfa_states.clone();
            for symbol in alphabet.symbol_ids() {
                let target_set = move_set(nfa, &set, symbol);
                let target = intern(
                    target_set,
                    &accept,
                    alphabet.len(),
                    &mut states,
                    &mut index,
                    &mut worklist,
                );
                states[id].transitions[symbol as usize] = Some(target);

                if self.config.max_states != 0 && states.len() > self.config.max_states {
                    return Err(DfaError::StateLimitExceeded {
                        states: states.len(),
                        max: self.config.max_states,
                    });
                }
            }
        }

        tracing::debug!(
            "subset construction: {} NFA states -> {} DFA states",
            nfa.state_count(),
            states.len()
        );

        Ok(Dfa::new(states, start, alphabet, accept))
    }

    /// Fail fast on an automaton whose start or accepting markers point
    /// outside its state universe. Transition targets need no scan: the
    /// Nfa building API already rejects dangling ids.
    fn validate(&self, nfa: &Nfa) -> DfaResult<()> {
        let states = nfa.state_count();
        if nfa.start() as usize >= states {
            return Err(DfaError::DanglingState {
                state: nfa.start(),
                states,
            });
        }
        if let Some(&bad) = nfa.accepting().iter().find(|&&s| (s as usize) >= states) {
            return Err(DfaError::DanglingState { state: bad, states });
        }
        Ok(())
    }
}

/// Look up `set` in the memo table, materializing and enqueueing a fresh
/// DFA state on a miss
fn intern(
    set: StateSet,
    accept: &[StateId],
    alphabet_len: usize,
    states: &mut Vec<DfaState>,
    index: &mut AHashMap<StateSet, DfaStateId>,
    worklist: &mut Vec<DfaStateId>,
) -> DfaStateId {
    if let Some(&id) = index.get(&set) {
        return id;
    }
    let id = states.len();
    let is_accepting = accept.iter().all(|a| set.binary_search(a).is_ok());
    states.push(DfaState::new(id, set.clone(), alphabet_len, is_accepting));
    index.insert(set, id);
    worklist.push(id);
    id
}
