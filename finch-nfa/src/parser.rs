//! Regex parser using Pest

use crate::ast::Ast;
use crate::{NfaError, NfaResult};
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "regex.pest"]
struct RegexParser;

/// Parse a regex pattern into an AST
pub fn parse(pattern: &str) -> NfaResult<Ast> {
    let mut pairs = RegexParser::parse(Rule::regex, pattern)
        .map_err(|e| NfaError::syntax(pattern, e.to_string()))?;

    let regex = pairs
        .next()
        .ok_or_else(|| NfaError::syntax(pattern, "empty parse result"))?;

    let alternation = regex
        .into_inner()
        .find(|p| p.as_rule() == Rule::alternation)
        .ok_or_else(|| NfaError::syntax(pattern, "expected an expression"))?;

    build_alternation(alternation, pattern)
}

fn build_alternation(pair: Pair<Rule>, pattern: &str) -> NfaResult<Ast> {
    let mut branches = pair.into_inner();
    let first = branches
        .next()
        .ok_or_else(|| NfaError::syntax(pattern, "empty alternation"))?;
    let mut ast = build_concat(first, pattern)?;
    for branch in branches {
        let rhs = build_concat(branch, pattern)?;
        ast = Ast::Alt(Box::new(ast), Box::new(rhs));
    }
    Ok(ast)
}

fn build_concat(pair: Pair<Rule>, pattern: &str) -> NfaResult<Ast> {
    let mut parts = Vec::new();
    for repetition in pair.into_inner() {
        parts.push(build_repetition(repetition, pattern)?);
    }
    if parts.len() == 1 {
        Ok(parts.remove(0))
    } else {
        Ok(Ast::Concat(parts))
    }
}

fn build_repetition(pair: Pair<Rule>, pattern: &str) -> NfaResult<Ast> {
    let mut inner = pair.into_inner();
    let atom = inner
        .next()
        .ok_or_else(|| NfaError::syntax(pattern, "empty repetition"))?;

    let ast = match atom.as_rule() {
        Rule::literal => {
            let c = atom
                .as_str()
                .chars()
                .next()
                .ok_or_else(|| NfaError::syntax(pattern, "empty literal"))?;
            Ast::Char(c)
        }
        Rule::group => {
            let alternation = atom
                .into_inner()
                .next()
                .ok_or_else(|| NfaError::syntax(pattern, "empty group"))?;
            build_alternation(alternation, pattern)?
        }
        rule => {
            return Err(NfaError::syntax(
                pattern,
                format!("unexpected rule {:?}", rule),
            ))
        }
    };

    // a trailing pair can only be the star marker
    if inner.next().is_some() {
        Ok(Ast::Star(Box::new(ast)))
    } else {
        Ok(ast)
    }
}
