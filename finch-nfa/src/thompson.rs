// Thompson construction
//
// Compiles a regex AST into an epsilon-NFA fragment by fragment. Every
// fragment has a single entry and a single exit state; `*` wires an
// epsilon back edge, so nested stars produce epsilon-only cycles. The
// compiled automaton always has exactly one accepting state.

use crate::alphabet::{Alphabet, Label};
use crate::ast::Ast;
use crate::automaton::{Nfa, StateId};
use crate::{parser, NfaError, NfaResult};

struct Fragment {
    start: StateId,
    end: StateId,
}

impl Nfa {
    /// Compile a regex pattern into an epsilon-NFA over `alphabet`
    pub fn from_regex(pattern: &str, alphabet: Alphabet) -> NfaResult<Self> {
        let ast = parser::parse(pattern)?;
        let nfa = compile(&ast, alphabet)?;
        tracing::debug!(
            "compiled pattern {:?} into {} NFA states",
            pattern,
            nfa.state_count()
        );
        Ok(nfa)
    }
}

/// Compile an AST into an NFA with one accepting state
pub(crate) fn compile(ast: &Ast, alphabet: Alphabet) -> NfaResult<Nfa> {
    let mut nfa = Nfa::new(alphabet);
    let fragment = emit(&mut nfa, ast)?;
    nfa.set_start(fragment.start)?;
    nfa.mark_accepting(fragment.end)?;
    Ok(nfa)
}

fn emit(nfa: &mut Nfa, ast: &Ast) -> NfaResult<Fragment> {
    match ast {
        Ast::Char(c) => {
            let symbol = nfa
                .alphabet()
                .symbol_id(*c)
                .ok_or(NfaError::UnknownSymbol { symbol: *c })?;
            let start = nfa.add_state();
            let end = nfa.add_state();
            nfa.add_transition(start, Label::Symbol(symbol), end)?;
            Ok(Fragment { start, end })
        }
        Ast::Star(inner) => {
            let inner = emit(nfa, inner)?;
            let start = nfa.add_state();
            let end = nfa.add_state();
            nfa.add_transition(start, Label::Epsilon, inner.start)?;
            nfa.add_transition(start, Label::Epsilon, end)?;
            // back edge: repeat the body
            nfa.add_transition(inner.end, Label::Epsilon, inner.start)?;
            nfa.add_transition(inner.end, Label::Epsilon, end)?;
            Ok(Fragment { start, end })
        }
        Ast::Concat(parts) => {
            let mut iter = parts.iter();
            let Some(first) = iter.next() else {
                // empty concatenation matches the empty string
                let state = nfa.add_state();
                return Ok(Fragment {
                    start: state,
                    end: state,
                });
            };
            let first = emit(nfa, first)?;
            let start = first.start;
            let mut end = first.end;
            for part in iter {
                let next = emit(nfa, part)?;
                nfa.add_transition(end, Label::Epsilon, next.start)?;
                end = next.end;
            }
            Ok(Fragment { start, end })
        }
        Ast::Alt(lhs, rhs) => {
            let lhs = emit(nfa, lhs)?;
            let rhs = emit(nfa, rhs)?;
            let start = nfa.add_state();
            let end = nfa.add_state();
            nfa.add_transition(start, Label::Epsilon, lhs.start)?;
            nfa.add_transition(start, Label::Epsilon, rhs.start)?;
            nfa.add_transition(lhs.end, Label::Epsilon, end)?;
            nfa.add_transition(rhs.end, Label::Epsilon, end)?;
            Ok(Fragment { start, end })
        }
    }
}
