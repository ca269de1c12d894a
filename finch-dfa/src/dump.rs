// Serializable table dump
//
// A flat, lossless projection of the DFA for persistence and external
// rendering: every state set, the (source-set, symbol, target-set)
// transition triples, the start set and the accept set. Rebuilding from
// a dump re-validates everything it references.

use crate::dfa::{Dfa, DfaState, DfaStateId};
use crate::{DfaError, DfaResult};
use ahash::AHashMap;
use finch_nfa::{Alphabet, StateId, SymbolId};
use serde::{Deserialize, Serialize};

/// One transition triple in a dump
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpEdge {
    pub source: Vec<StateId>,
    pub symbol: char,
    pub target: Vec<StateId>,
}

/// Lossless dump of a DFA transition table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDump {
    /// Alphabet symbols in index order
    pub alphabet: Vec<char>,
    /// The start state set
    pub start: Vec<StateId>,
    /// The NFA accepting set the acceptance rule is evaluated against
    pub accept: Vec<StateId>,
    /// Every state set in the table, in construction order; listed
    /// separately from the edges so states with empty rows survive
    pub states: Vec<Vec<StateId>>,
    pub edges: Vec<DumpEdge>,
}

impl Dfa {
    /// Project the transition table into a serializable dump
    pub fn dump(&self) -> TableDump {
        let mut edges = Vec::new();
        for state in self.states() {
            for (slot, target) in state.transitions.iter().enumerate() {
                let (Some(target), Some(symbol)) =
                    (*target, self.alphabet().symbol(slot as SymbolId))
                else {
                    continue;
                };
                edges.push(DumpEdge {
                    source: state.nfa_states.clone(),
                    symbol,
                    target: self.states()[target].nfa_states.clone(),
                });
            }
        }
        TableDump {
            alphabet: self.alphabet().symbols().to_vec(),
            start: self.states()[self.start()].nfa_states.clone(),
            accept: self.accept_set().to_vec(),
            states: self
                .states()
                .iter()
                .map(|s| s.nfa_states.clone())
                .collect(),
            edges,
        }
    }

    /// Rebuild a DFA from a dump
    ///
    /// Every edge endpoint must be a dumped state set and every edge
    /// symbol a member of the dumped alphabet; anything else is a
    /// `MalformedDump` error.
    pub fn from_dump(dump: &TableDump) -> DfaResult<Dfa> {
        let alphabet = Alphabet::new(dump.alphabet.iter().copied())?;

        let mut index: AHashMap<Vec<StateId>, DfaStateId> = AHashMap::new();
        let mut states: Vec<DfaState> = Vec::with_capacity(dump.states.len());
        for set in &dump.states {
            let id = states.len();
            if index.insert(set.clone(), id).is_some() {
                return Err(DfaError::MalformedDump(format!(
                    "duplicate state set {:?}",
                    set
                )));
            }
            let is_accepting = dump.accept.iter().all(|a| set.contains(a));
            states.push(DfaState::new(id, set.clone(), alphabet.len(), is_accepting));
        }

        for edge in &dump.edges {
            let symbol = alphabet.symbol_id(edge.symbol).ok_or_else(|| {
                DfaError::MalformedDump(format!("edge symbol '{}' not in alphabet", edge.symbol))
            })?;
            let &source = index.get(&edge.source).ok_or_else(|| {
                DfaError::MalformedDump(format!("edge source {:?} is not a dumped state", edge.source))
            })?;
            let &target = index.get(&edge.target).ok_or_else(|| {
                DfaError::MalformedDump(format!("edge target {:?} is not a dumped state", edge.target))
            })?;
            states[source].transitions[symbol as usize] = Some(target);
        }

        let &start = index.get(&dump.start).ok_or_else(|| {
            DfaError::MalformedDump("start set is not a dumped state".to_string())
        })?;

        Ok(Dfa::new(states, start, alphabet, dump.accept.clone()))
    }
}
