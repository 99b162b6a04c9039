/*
    This module is for storing and inspecting grammars
*/

use std::collections::{BTreeSet, HashMap};
use std::fmt::Display;

use itertools::Itertools;

// The grammar used when the user does not supply one
pub const EXAMPLE_GRAMMAR: &str = "\
S -> aB | bA
A -> a | aS | bAA
B -> b | bS | aBB
";

// The base unit in a grammar rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Terminal(char),
    Nonterminal(char),
    // Neither rewritable nor part of a word, so any form holding one never
    // closes
    Unclassified(char),
}

impl Symbol {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }

    pub fn as_char(&self) -> char {
        match self {
            Symbol::Terminal(c) | Symbol::Nonterminal(c) | Symbol::Unclassified(c) => *c,
        }
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// The symbols in a single alternative
pub type Alternative = Vec<Symbol>;

// A partial derivation: any mix of symbols
pub type Form = Vec<Symbol>;

/// A form is closed once nothing in it can be rewritten any more.
pub fn is_closed(form: &[Symbol]) -> bool {
    form.iter().all(Symbol::is_terminal)
}

pub fn form_to_string(form: &[Symbol]) -> String {
    form.iter().map(Symbol::as_char).collect()
}

/// Immutable context-free grammar over single character symbols.
///
/// Built once from a list of productions and only ever borrowed by the
/// searches afterwards.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Grammar {
    start_symbol: Option<char>,
    rules: HashMap<char, Vec<Alternative>>,
    terminals: BTreeSet<char>,
    nonterminals: BTreeSet<char>,
}

impl Grammar {
    /// Builds a grammar from `(lhs, rhs)` pairs. The first left hand side
    /// becomes the start symbol and repeated left hand sides accumulate
    /// alternatives in the order given.
    pub fn from_productions<I>(productions: I) -> Self
    where
        I: IntoIterator<Item = (char, Alternative)>,
    {
        let mut grammar = Grammar::default();

        for (lhs, rhs) in productions {
            grammar.start_symbol.get_or_insert(lhs);
            grammar.nonterminals.insert(lhs);

            for symbol in &rhs {
                match symbol {
                    Symbol::Terminal(c) => grammar.terminals.insert(*c),
                    Symbol::Nonterminal(c) => grammar.nonterminals.insert(*c),
                    Symbol::Unclassified(_) => false,
                };
            }

            grammar.rules.entry(lhs).or_default().push(rhs);
        }

        grammar
    }

    pub fn start_symbol(&self) -> Option<char> {
        self.start_symbol
    }

    /// Alternatives for `nonterminal`, empty when it was never defined.
    pub fn alternatives(&self, nonterminal: char) -> &[Alternative] {
        self.rules.get(&nonterminal).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_terminal(&self, c: char) -> bool {
        self.terminals.contains(&c)
    }

    pub fn is_nonterminal(&self, c: char) -> bool {
        self.nonterminals.contains(&c)
    }

    pub fn terminals(&self) -> &BTreeSet<char> {
        &self.terminals
    }

    pub fn nonterminals(&self) -> &BTreeSet<char> {
        &self.nonterminals
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Nonterminals that appear somewhere but have no productions.
    pub fn undefined_nonterminals(&self) -> impl Iterator<Item = char> + '_ {
        self.nonterminals.iter().copied().filter(|nt| !self.rules.contains_key(nt))
    }
}

fn format_set(set: &BTreeSet<char>) -> String {
    set.iter().join(", ")
}

impl Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Grammar Productions:")?;
        writeln!(f, "{}", "=".repeat(20))?;

        for nonterminal in &self.nonterminals {
            if let Some(alternatives) = self.rules.get(nonterminal) {
                let rendered = alternatives.iter().map(|alt| form_to_string(alt)).join(" | ");
                writeln!(f, "{} -> {}", nonterminal, rendered)?;
            }
        }

        match self.start_symbol {
            Some(start) => writeln!(f, "\nStart Symbol: {}", start)?,
            None => writeln!(f, "\nStart Symbol: (none)")?,
        }
        writeln!(f, "Terminals: {{{}}}", format_set(&self.terminals))?;
        writeln!(f, "Non-terminals: {{{}}}", format_set(&self.nonterminals))
    }
}
