/*
    This module decides whether a word belongs to a grammar
*/

use std::collections::{HashSet, VecDeque};

use log::debug;

use crate::generator::expand;
use crate::grammar::*;

/// Whether the membership search drops forms longer than the target word.
///
/// Dropping them is only sound when no production shrinks a form, so
/// grammars with empty alternatives can be wrongly rejected while it is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthPrune {
    #[default]
    Enabled,
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Forms the membership search may dequeue before giving up.
    pub max_iterations: usize,
    /// Forms at least this long are not explored when looking for the empty
    /// word.
    pub empty_search_length: usize,
    pub length_prune: LengthPrune,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_iterations: 10_000,
            empty_search_length: 20,
            length_prune: LengthPrune::Enabled,
        }
    }
}

/// Bounded check of whether `word` derives from the start symbol.
///
/// A `false` answer is not proof: the search gives up after
/// `max_iterations` forms and may prune paths through empty alternatives.
/// Words with characters outside the terminal alphabet are rejected without
/// searching.
pub fn belongs(grammar: &Grammar, word: &str, config: &SearchConfig) -> bool {
    if word.is_empty() {
        return derives_empty(grammar, config);
    }

    if !in_alphabet(grammar, word) {
        debug!("`{}` uses symbols outside the terminal alphabet", word);
        return false;
    }

    let target: Form = word.chars().map(Symbol::Terminal).collect();
    search(grammar, &target, config)
}

/// Whether every character of `word` is a terminal of the grammar.
pub fn in_alphabet(grammar: &Grammar, word: &str) -> bool {
    word.chars().all(|c| grammar.is_terminal(c))
}

fn search(grammar: &Grammar, target: &[Symbol], config: &SearchConfig) -> bool {
    let Some(start) = grammar.start_symbol() else {
        return false;
    };

    let start_form = vec![Symbol::Nonterminal(start)];
    let mut visited = HashSet::from([start_form.clone()]);
    let mut queue = VecDeque::from([start_form]);
    let mut iterations = 0;

    while iterations < config.max_iterations {
        let Some(current) = queue.pop_front() else {
            debug!("search space exhausted after {} forms", iterations);
            return false;
        };
        iterations += 1;

        if current == target {
            debug!("found after {} forms", iterations);
            return true;
        }

        if is_closed(&current) {
            continue;
        }

        if config.length_prune == LengthPrune::Enabled && current.len() > target.len() {
            continue;
        }

        for expansion in expand(grammar, &current) {
            if !visited.contains(&expansion) {
                visited.insert(expansion.clone());
                queue.push_back(expansion);
            }
        }
    }

    debug!("gave up after {} forms with {} still queued", iterations, queue.len());
    false
}

/// Bounded check of whether the start symbol derives the empty word.
pub fn derives_empty(grammar: &Grammar, config: &SearchConfig) -> bool {
    let Some(start) = grammar.start_symbol() else {
        return false;
    };

    let start_form = vec![Symbol::Nonterminal(start)];
    let mut visited = HashSet::from([start_form.clone()]);
    let mut queue = VecDeque::from([start_form]);

    while let Some(current) = queue.pop_front() {
        if current.is_empty() {
            return true;
        }

        if is_closed(&current) {
            continue;
        }

        for expansion in expand(grammar, &current) {
            if expansion.len() < config.empty_search_length && !visited.contains(&expansion) {
                visited.insert(expansion.clone());
                queue.push_back(expansion);
            }
        }
    }

    false
}
