/*
    This module parses grammars written as `S -> aB | bA` lines
*/

mod lexer;
mod verifier;

use std::fmt::Display;
use std::path::Path;

use crate::error_handling::*;
use crate::grammar::*;
use itertools::Itertools;
use lexer::*;
use log::{debug, warn};
use verifier::verify_rules;

#[derive(Debug)]
pub enum CompileErrorType {
    // A rule line does not start with a nonterminal
    MissingNonterminal,
    // The left hand side is longer than one nonterminal
    LongLeftHandSide,
    // A line which should contain a rule has no `->` after its nonterminal
    MissingArrow,
    // A rule has more than one `->`
    UnexpectedArrow,
    // A nonterminal is used but never defined (strict mode only)
    UndefinedNonterminal(char),
    // A right hand side holds something that is neither a terminal nor a
    // nonterminal (strict mode only)
    UnclassifiedSymbol(char),
    // Not a single rule was found (strict mode only)
    EmptyGrammar,
    // Somehow a whole right hand side was parsed as one alternative
    // This is a problem with wordsmith, not the grammar
    UnsplitAlternatives,
    // There was an issue with reading a file
    FileError(std::io::Error),
}

impl ErrorType for CompileErrorType {}

impl PartialEq for CompileErrorType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CompileErrorType::FileError(a), CompileErrorType::FileError(b)) => a.kind() == b.kind(),
            (CompileErrorType::UndefinedNonterminal(a), CompileErrorType::UndefinedNonterminal(b)) => a == b,
            (CompileErrorType::UnclassifiedSymbol(a), CompileErrorType::UnclassifiedSymbol(b)) => a == b,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl Display for CompileErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileErrorType::MissingNonterminal => write!(f, "Expected a nonterminal before `->`"),
            CompileErrorType::LongLeftHandSide => write!(f, "Left hand side must be a single nonterminal"),
            CompileErrorType::MissingArrow => write!(f, "Expected `->` after nonterminal"),
            CompileErrorType::UnexpectedArrow => write!(f, "Unexpected `->` encountered"),
            CompileErrorType::UndefinedNonterminal(nonterminal) => write!(f, "Could not find definition for `{}`", nonterminal),
            CompileErrorType::UnclassifiedSymbol(symbol) => write!(f, "`{}` is neither a terminal nor a nonterminal", symbol.escape_debug()),
            CompileErrorType::EmptyGrammar => write!(f, "No productions found"),
            CompileErrorType::UnsplitAlternatives => write!(f, "Alternatives were not fully split (this is a problem with wordsmith, not the grammar)"),
            CompileErrorType::FileError(e) => write!(f, "File error: {}", e),
        }
    }
}

pub type CompileError = Error<CompileErrorType>;
pub type CompileErrors = Errors<CompileErrorType>;

pub type Result<T> = std::result::Result<T, CompileErrorType>;
pub type LineResult<T> = std::result::Result<T, CompileError>;
pub type FileResult<T> = std::result::Result<T, CompileErrors>;

/// How much to trust the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Skip malformed lines and leave undefined nonterminals to stall the
    /// searches.
    #[default]
    Permissive,
    /// Report malformed lines, undefined nonterminals, unclassified symbols
    /// and empty grammars.
    Strict,
}

/// Which characters of a right hand side count as terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alphabet {
    /// Lowercase letters only. Anything else, including whitespace inside an
    /// alternative, is left unclassified and stalls every form it reaches.
    #[default]
    Letters,
    /// Every character that is not uppercase or whitespace. Whitespace
    /// inside an alternative is dropped.
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub strictness: Strictness,
    pub alphabet: Alphabet,
}

impl ParseOptions {
    pub fn strict() -> Self {
        ParseOptions { strictness: Strictness::Strict, ..ParseOptions::default() }
    }
}

#[derive(PartialEq, Debug)]
struct Rule {
    symbol: char,
    alternatives: Vec<Alternative>,
    location: Location
}

fn is_blank(token: &Token) -> bool {
    matches!(token, Token::Blank(_))
}

// Drops leading and trailing whitespace, keeping what is in between
fn trim_blanks(tokens: &[Token]) -> &[Token] {
    let start = tokens.iter().position(|t| !is_blank(t)).unwrap_or(tokens.len());
    let end = tokens.iter().rposition(|t| !is_blank(t)).map_or(start, |i| i + 1);
    &tokens[start..end]
}

fn parse_alternative(tokens: &[Token], alphabet: Alphabet) -> Result<Alternative> {
    trim_blanks(tokens).iter()
        .filter(|t| !(alphabet == Alphabet::Open && is_blank(t)))
        .map(|t| match t {
            Token::Arrow => Err(CompileErrorType::UnexpectedArrow),
            Token::Or => Err(CompileErrorType::UnsplitAlternatives),
            Token::Nonterminal(c) => Ok(Symbol::Nonterminal(*c)),
            Token::Terminal(c) => Ok(Symbol::Terminal(*c)),
            Token::Blank(c) | Token::Unclassified(c) => Ok(Symbol::Unclassified(*c))
        }).collect()
}

fn parse_alternatives(tokens: &[Token], alphabet: Alphabet) -> Result<Vec<Alternative>> {
    tokens.split(|t| *t == Token::Or).map(|alt| parse_alternative(alt, alphabet)).collect()
}

fn parse_line(tokens: &[Token], location: Location, alphabet: Alphabet) -> Result<Rule> {
    let arrow = tokens.iter().position(|t| *t == Token::Arrow);
    let head = &tokens[..arrow.unwrap_or(tokens.len())];
    let mut head_symbols = head.iter().filter(|t| !is_blank(t));

    let symbol = match head_symbols.next() {
        Some(Token::Nonterminal(c)) => Ok(*c),
        _ => Err(CompileErrorType::MissingNonterminal)
    }?;

    let Some(arrow) = arrow else {
        return Err(CompileErrorType::MissingArrow);
    };

    if head_symbols.next().is_some() {
        return Err(CompileErrorType::LongLeftHandSide);
    }

    let alternatives = parse_alternatives(&tokens[arrow + 1..], alphabet)?;

    return Ok(Rule {
        symbol,
        alternatives,
        location
    });
}

fn parse_lex_line(line: &str, location: Location, alphabet: Alphabet) -> LineResult<Rule> {
    parse_line(&lexer::lex_line(line, alphabet), location.clone(), alphabet)
        .map_err(|error| CompileError { location, error })
}

fn is_rule_line(line: &str) -> bool {
    line.contains("->")
}

fn grammar_from_rules(rules: Vec<Rule>) -> Grammar {
    Grammar::from_productions(rules.into_iter().flat_map(|rule| {
        let symbol = rule.symbol;
        rule.alternatives.into_iter().map(move |alternative| (symbol, alternative))
    }))
}

/// Parses grammar text. `origin` only labels error locations.
pub fn parse_str(text: &str, origin: &Path, options: ParseOptions) -> FileResult<Grammar> {
    let parsed_lines = text
        .lines()
        .enumerate()
        .filter(|(_, line)| is_rule_line(line))
        .map(|(num, line)| parse_lex_line(line, Location::at(origin, num + 1), options.alphabet));

    let (rules, errors): (Vec<_>, Vec<_>) = parsed_lines.partition_result();

    match options.strictness {
        Strictness::Strict => {
            if !errors.is_empty() {
                return Err(errors);
            }
            verify_rules(&rules, origin)?;
        }
        Strictness::Permissive => {
            for error in &errors {
                warn!("skipping line {}", error.plain());
            }
        }
    }

    debug!("parsed {} rule lines from {}", rules.len(), origin.display());
    Ok(grammar_from_rules(rules))
}

pub fn parse_file(path: &Path, options: ParseOptions) -> FileResult<Grammar> {
    let text = std::fs::read_to_string(path).map_err(|e| vec![CompileError {
        location: Location::whole(path),
        error: CompileErrorType::FileError(e)
    }])?;

    parse_str(&text, path, options)
}
