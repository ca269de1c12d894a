// Regex AST

/// Parsed regex expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ast {
    /// A single literal symbol
    Char(char),
    /// Zero or more repetitions of the inner expression
    Star(Box<Ast>),
    /// Concatenation, in order
    Concat(Vec<Ast>),
    /// Alternation between two branches
    Alt(Box<Ast>, Box<Ast>),
}
