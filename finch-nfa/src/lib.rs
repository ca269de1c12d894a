// Finch NFA - Automaton source for the Finch matching engine
//
// This crate owns everything upstream of subset construction:
// - The fixed input alphabet with dense symbol indices
// - The NFA arena: states, per-symbol transitions, epsilon transitions
// - A small regex front end (literals, concatenation, `*`, `|`, grouping)
//   compiled into epsilon-NFAs via Thompson construction

mod alphabet;
mod ast;
mod automaton;
mod parser;
mod thompson;

pub use alphabet::{Alphabet, Label, SymbolId};
pub use ast::Ast;
pub use automaton::{Nfa, StateId};
pub use parser::parse;

use thiserror::Error;

/// Errors that can occur while building an NFA
#[derive(Debug, Error)]
pub enum NfaError {
    /// Syntax error during pattern parsing
    #[error("Syntax error in pattern `{pattern}`: {message}")]
    SyntaxError { pattern: String, message: String },

    /// A pattern literal is not a member of the alphabet
    #[error("Symbol '{symbol}' is not in the alphabet")]
    UnknownSymbol { symbol: char },

    /// The same symbol was declared twice when building an alphabet
    #[error("Duplicate symbol '{symbol}' in alphabet")]
    DuplicateSymbol { symbol: char },

    /// A transition or marker referenced a state id outside the arena
    #[error("Unknown state id {state} (automaton has {states} states)")]
    UnknownState { state: StateId, states: usize },

    /// A transition referenced a symbol id outside the alphabet
    #[error("Symbol id {id} out of range (alphabet has {len} symbols)")]
    InvalidSymbolId { id: SymbolId, len: usize },
}

/// Result type for NFA operations
pub type NfaResult<T> = Result<T, NfaError>;

impl NfaError {
    pub(crate) fn syntax(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        NfaError::SyntaxError {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NfaError::UnknownSymbol { symbol: 'Ω' };
        assert!(err.to_string().contains('Ω'));

        let err = NfaError::UnknownState {
            state: 7,
            states: 3,
        };
        assert!(err.to_string().contains('7'));
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_syntax_helper() {
        let err = NfaError::syntax("a**", "dangling star");
        assert!(err.to_string().contains("a**"));
        assert!(err.to_string().contains("dangling star"));
    }
}
