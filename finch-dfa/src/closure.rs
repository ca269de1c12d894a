// Epsilon closures and symbol moves
//
// A DFA state is identified by the set of NFA states it represents. Sets
// are kept in canonical form (sorted, deduplicated) so that equal sets
// compare and hash equally no matter how they were assembled.

use ahash::AHashSet;
use finch_nfa::{Nfa, StateId, SymbolId};

/// Canonical set of NFA state ids: sorted and deduplicated
pub type StateSet = Vec<StateId>;

/// Sort and deduplicate a set of state ids into canonical form
pub(crate) fn canonicalize(mut states: Vec<StateId>) -> StateSet {
    states.sort_unstable();
    states.dedup();
    states
}

/// The smallest superset of `seeds` closed under epsilon transitions
///
/// Traverses with an explicit worklist and a visited set, so epsilon
/// cycles terminate and the result is idempotent:
/// `epsilon_closure(epsilon_closure(s)) == epsilon_closure(s)`.
pub fn epsilon_closure(nfa: &Nfa, seeds: &[StateId]) -> StateSet {
    let mut visited: AHashSet<StateId> = seeds.iter().copied().collect();
    let mut worklist: Vec<StateId> = seeds.to_vec();
    while let Some(state) = worklist.pop() {
        for &next in nfa.epsilon_moves(state) {
            if visited.insert(next) {
                worklist.push(next);
            }
        }
    }
    canonicalize(visited.into_iter().collect())
}

/// All states reachable from `set` via epsilon*, one `symbol` step, epsilon*
///
/// Returns the empty set when no member has a move on `symbol`; the caller
/// treats that as an ordinary (dead) DFA state, not an error.
pub(crate) fn move_set(nfa: &Nfa, set: &StateSet, symbol: SymbolId) -> StateSet {
    let before = epsilon_closure(nfa, set);
    let mut targets: Vec<StateId> = Vec::new();
    for &state in &before {
        targets.extend_from_slice(nfa.symbol_moves(state, symbol));
    }
    if targets.is_empty() {
        return StateSet::new();
    }
    epsilon_closure(nfa, &targets)
}
