use std::collections::HashSet;
use std::path::Path;

use crate::grammar::{Alternative, Symbol::{Nonterminal, Unclassified}};
use super::CompileErrorType::{EmptyGrammar, UnclassifiedSymbol, UndefinedNonterminal};
use super::{CompileError, CompileErrors, FileResult, Location, Rule};

fn get_alternative_bad_symbols(alternative: &Alternative, location: &Location, defined: &HashSet<char>) -> CompileErrors {
    // Keep the nonterminals nothing defines and anything left unclassified
    alternative.iter()
        .filter_map(|symbol| match symbol {
            Nonterminal(c) if !defined.contains(c) => Some(UndefinedNonterminal(*c)),
            Unclassified(c) => Some(UnclassifiedSymbol(*c)),
            _ => None
        })
        .map(|error| CompileError {
            location: location.to_owned(),
            error
        })
        .collect()
}

fn get_rule_bad_symbols(rule: &Rule, defined: &HashSet<char>) -> CompileErrors {
    // Flatten the problems in each alternative into the problems of the rule
    rule.alternatives.iter()
        .flat_map(|alternative| get_alternative_bad_symbols(alternative, &rule.location, defined))
        .collect()
}

fn get_bad_symbols(rules: &[Rule]) -> CompileErrors {
    let defined: HashSet<char> = rules.iter().map(|rule| rule.symbol).collect();

    rules.iter()
        .flat_map(|rule| get_rule_bad_symbols(rule, &defined))
        .collect()
}

pub(super) fn verify_rules(rules: &[Rule], origin: &Path) -> FileResult<()> {
    if rules.is_empty() {
        return Err(vec![CompileError {
            location: Location::whole(origin),
            error: EmptyGrammar
        }]);
    }

    let errors = get_bad_symbols(rules);

    if errors.len() > 0 {
        Err(errors)
    } else {
        Ok(())
    }
}
