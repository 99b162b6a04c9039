use itertools::PeekingNext;

use super::Alphabet;

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Token {
    Arrow,
    Or,
    Blank(char),
    Nonterminal(char),
    Terminal(char),
    Unclassified(char)
}

// Consumes `->` if it is next, otherwise leaves the iterator alone and
// reports the dash as a plain symbol
pub fn lex_dash(line: &mut impl PeekingNext<Item = char>, alphabet: Alphabet) -> Token {
    line.next(); // Consume dash
    match line.peeking_next(|&c| c == '>') {
        Some(_) => Token::Arrow,
        None => lex_symbol('-', alphabet)
    }
}

pub fn lex_symbol(c: char, alphabet: Alphabet) -> Token {
    if c.is_uppercase() {
        Token::Nonterminal(c)
    } else if c.is_lowercase() || alphabet == Alphabet::Open {
        Token::Terminal(c)
    } else {
        Token::Unclassified(c)
    }
}

pub fn lex_line(line: &str, alphabet: Alphabet) -> Vec<Token> {
    let mut tokens = Vec::new();

    let mut line_chars = line.chars().peekable();

    while let Some(&c) = line_chars.peek() {
        if c == '-' {
            tokens.push(lex_dash(&mut line_chars, alphabet));
        } else if c == '|' {
            line_chars.next();
            tokens.push(Token::Or);
        } else if c.is_whitespace() {
            line_chars.next();
            tokens.push(Token::Blank(c));
        } else {
            line_chars.next();
            tokens.push(lex_symbol(c, alphabet));
        }
    }

    return tokens;
}
