// Alphabet and transition labels
//
// The alphabet is fixed at construction time: every symbol gets a dense
// SymbolId so transition tables can be flat arrays indexed by symbol.
// Epsilon is a distinguished transition label, never a member of the
// alphabet itself, which keeps the subset-construction outer loop over
// real symbols only.

use crate::{NfaError, NfaResult};
use ahash::AHashMap;

/// Dense index of a symbol within an [`Alphabet`]
pub type SymbolId = u16;

/// A transition label: either a real alphabet symbol or the epsilon marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// A real input symbol
    Symbol(SymbolId),
    /// The no-input (epsilon) marker
    Epsilon,
}

/// A fixed, ordered set of input symbols with dense indices
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: Vec<char>,
    index: AHashMap<char, SymbolId>,
}

impl Alphabet {
    /// Build an alphabet from an ordered sequence of symbols
    pub fn new(symbols: impl IntoIterator<Item = char>) -> NfaResult<Self> {
        let symbols: Vec<char> = symbols.into_iter().collect();
        let mut index = AHashMap::with_capacity(symbols.len());
        for (i, &symbol) in symbols.iter().enumerate() {
            if index.insert(symbol, i as SymbolId).is_some() {
                return Err(NfaError::DuplicateSymbol { symbol });
            }
        }
        Ok(Self { symbols, index })
    }

    /// The `[a-z]` alphabet used by the regex front end
    pub fn lowercase() -> Self {
        let symbols: Vec<char> = ('a'..='z').collect();
        let index = symbols
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i as SymbolId))
            .collect();
        Self { symbols, index }
    }

    /// Number of symbols (epsilon excluded)
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Dense index of `symbol`, or `None` if it is not in the alphabet
    pub fn symbol_id(&self, symbol: char) -> Option<SymbolId> {
        self.index.get(&symbol).copied()
    }

    /// The symbol at a dense index
    pub fn symbol(&self, id: SymbolId) -> Option<char> {
        self.symbols.get(id as usize).copied()
    }

    /// All symbol ids in index order
    pub fn symbol_ids(&self) -> std::ops::Range<SymbolId> {
        0..self.symbols.len() as SymbolId
    }

    /// All symbols in index order
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}
