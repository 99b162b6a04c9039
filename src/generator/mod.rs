/*
    This module generates words from a grammar
*/

mod expander;
mod sample;

use std::collections::{BTreeSet, HashSet, VecDeque};

use log::debug;

use crate::grammar::*;

pub use expander::{expand, leftmost_nonterminal, substitute};
pub use sample::sample;

/// Breadth-first enumeration of the words the grammar derives, using
/// leftmost derivations only.
///
/// Words longer than `max_length` and the empty word are never returned.
/// Intermediate forms may grow up to twice `max_length` before they are
/// dropped, since later productions can still shrink them. The search stops
/// as soon as `max_words` words have been found, so which words make the cut
/// depends on breadth-first order. The result is sorted.
pub fn generate(grammar: &Grammar, max_length: usize, max_words: usize) -> Vec<String> {
    let Some(start) = grammar.start_symbol() else {
        return Vec::new();
    };

    let start_form = vec![Symbol::Nonterminal(start)];
    let mut words = BTreeSet::new();
    let mut visited = HashSet::from([start_form.clone()]);
    let mut queue = VecDeque::from([start_form]);
    let mut explored = 0usize;

    while words.len() < max_words {
        let Some(current) = queue.pop_front() else {
            break;
        };
        explored += 1;

        if is_closed(&current) {
            if !current.is_empty() && current.len() <= max_length {
                words.insert(form_to_string(&current));
            }
            continue;
        }

        if current.len() > max_length {
            continue;
        }

        for expansion in expand(grammar, &current) {
            if expansion.len() <= max_length.saturating_mul(2) && !visited.contains(&expansion) {
                visited.insert(expansion.clone());
                queue.push_back(expansion);
            }
        }
    }

    debug!(
        "generated {} words from {} forms ({} still queued)",
        words.len(),
        explored,
        queue.len()
    );

    words.into_iter().collect()
}
