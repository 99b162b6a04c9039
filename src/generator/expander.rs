use log::trace;

use crate::grammar::{Alternative, Form, Grammar, Symbol};

/// Position and name of the leftmost nonterminal in `form`.
pub fn leftmost_nonterminal(form: &[Symbol]) -> Option<(usize, char)> {
    form.iter().enumerate().find_map(|(i, symbol)| match symbol {
        Symbol::Nonterminal(c) => Some((i, *c)),
        _ => None,
    })
}

/// Copy of `form` with the symbol at `at` replaced by `alternative`.
pub fn substitute(form: &[Symbol], at: usize, alternative: &Alternative) -> Form {
    let mut rewritten = Vec::with_capacity(form.len() + alternative.len() - 1);
    rewritten.extend_from_slice(&form[..at]);
    rewritten.extend_from_slice(alternative);
    rewritten.extend_from_slice(&form[at + 1..]);
    rewritten
}

/// Every form reachable from `form` by rewriting its leftmost nonterminal
/// once, in the order the alternatives were declared.
///
/// Closed forms and forms whose leftmost nonterminal has no productions
/// have no expansions.
pub fn expand(grammar: &Grammar, form: &[Symbol]) -> Vec<Form> {
    let Some((at, nonterminal)) = leftmost_nonterminal(form) else {
        return Vec::new();
    };

    let expansions: Vec<Form> = grammar
        .alternatives(nonterminal)
        .iter()
        .map(|alternative| substitute(form, at, alternative))
        .collect();

    trace!("{} expansions of `{}` at {}", expansions.len(), nonterminal, at);
    expansions
}
