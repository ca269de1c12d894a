// Finch DFA - Subset construction engine and matcher
//
// Converts an epsilon-NFA from finch-nfa into a deterministic transition
// table via eager subset construction, then matches input strings against
// the result. A DFA state is a canonical sorted set of NFA state ids; the
// table is immutable after construction and safe to share across
// concurrent matches.

mod builder;
mod closure;
mod dfa;
mod dump;

pub use builder::SubsetBuilder;
pub use closure::{epsilon_closure, StateSet};
pub use dfa::{Dfa, DfaState, DfaStateId};
pub use dump::{DumpEdge, TableDump};

use finch_nfa::{NfaError, StateId};
use thiserror::Error;

/// Errors that can occur during DFA construction and matching
#[derive(Debug, Error)]
pub enum DfaError {
    /// An input character is not a member of the alphabet
    #[error("Input symbol '{symbol}' is not in the alphabet")]
    InvalidSymbol { symbol: char },

    /// The defensive bound on materialized DFA states was breached
    #[error("DFA state limit exceeded: {states} states (max: {max})")]
    StateLimitExceeded { states: usize, max: usize },

    /// The source NFA referenced a state outside its own universe
    #[error("Source NFA references unknown state id {state} (universe has {states} states)")]
    DanglingState { state: StateId, states: usize },

    /// A table dump failed validation while being rebuilt
    #[error("Malformed table dump: {0}")]
    MalformedDump(String),

    /// Error propagated from the automaton source
    #[error(transparent)]
    Nfa(#[from] NfaError),
}

/// Result type for DFA operations
pub type DfaResult<T> = Result<T, DfaError>;

/// Configuration for subset construction
#[derive(Debug, Clone)]
pub struct SubsetConfig {
    /// Maximum number of DFA states to materialize (0 = unlimited)
    ///
    /// Construction always terminates on its own (the powerset of a finite
    /// NFA is finite); the limit is a defensive bound against exponential
    /// blowup on adversarial inputs.
    pub max_states: usize,
}

impl Default for SubsetConfig {
    fn default() -> Self {
        Self { max_states: 0 }
    }
}
