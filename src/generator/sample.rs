use log::debug;
use rand::prelude::*;

use super::expander::{leftmost_nonterminal, substitute};
use crate::grammar::*;

/// Derives one random word by repeatedly rewriting the leftmost nonterminal
/// with a uniformly chosen alternative.
///
/// Gives up with `None` after `max_steps` rewrites, when the leftmost
/// nonterminal has no productions, or when an unclassified symbol keeps the
/// form from closing. The empty word is a valid result.
pub fn sample<R: Rng + ?Sized>(grammar: &Grammar, rng: &mut R, max_steps: usize) -> Option<String> {
    let mut form = vec![Symbol::Nonterminal(grammar.start_symbol()?)];

    for _ in 0..max_steps {
        let Some((at, nonterminal)) = leftmost_nonterminal(&form) else {
            break;
        };

        let Some(alternative) = grammar.alternatives(nonterminal).choose(rng) else {
            debug!("sample stalled on undefined nonterminal `{}`", nonterminal);
            return None;
        };
        form = substitute(&form, at, alternative);
    }

    if is_closed(&form) {
        Some(form_to_string(&form))
    } else {
        debug!("sample stopped at `{}` without closing", form_to_string(&form));
        None
    }
}
