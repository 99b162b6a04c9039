/*
    Line based input and output around the searches
*/

use std::io::{self, BufRead, Write};

use wordsmith::grammar::Grammar;
use wordsmith::recognizer::{belongs, SearchConfig};

const QUIT: &str = "quit";

// Reads grammar lines until a blank line or the end of the input
pub fn read_grammar_text(input: &mut impl BufRead) -> io::Result<String> {
    let mut text = String::new();

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        text.push_str(&line);
        text.push('\n');
    }

    Ok(text)
}

pub fn write_words(output: &mut impl Write, words: &[String]) -> io::Result<()> {
    writeln!(output, "\nGenerated {} words:", words.len())?;
    writeln!(output, "{}", "-".repeat(30))?;
    for (i, word) in words.iter().enumerate() {
        writeln!(output, "{:2}. '{}'", i + 1, word)?;
    }
    Ok(())
}

pub fn write_membership(output: &mut impl Write, grammar: &Grammar, config: &SearchConfig, word: &str) -> io::Result<()> {
    if belongs(grammar, word, config) {
        writeln!(output, "✓ '{}' BELONGS to the grammar", word)
    } else {
        writeln!(output, "✗ '{}' does NOT belong to the grammar", word)
    }
}

// Tests words typed by the user until `quit` or the end of the input
pub fn membership_loop(
    grammar: &Grammar,
    config: &SearchConfig,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    let mut line = String::new();

    loop {
        write!(output, "\nEnter word to test (or '{}' to exit): ", QUIT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        let word = line.trim();
        if word.eq_ignore_ascii_case(QUIT) {
            break;
        }
        write_membership(output, grammar, config, word)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::Path;

    use wordsmith::grammar::EXAMPLE_GRAMMAR;
    use wordsmith::parser::{parse_str, ParseOptions};

    use super::*;

    fn example() -> Grammar {
        parse_str(EXAMPLE_GRAMMAR, Path::new("example"), ParseOptions::strict()).unwrap()
    }

    fn run_loop(input: &str) -> String {
        let mut output = Vec::new();
        membership_loop(&example(), &SearchConfig::default(), &mut Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn grammar_text_stops_at_blank_line() {
        let mut input = Cursor::new("S -> aS | a\n\nab\n");

        assert_eq!(read_grammar_text(&mut input).unwrap(), "S -> aS | a\n");
        assert_eq!(read_grammar_text(&mut input).unwrap(), "ab\n");
        assert_eq!(read_grammar_text(&mut input).unwrap(), "");
    }

    #[test]
    fn numbered_words() {
        let mut output = Vec::new();
        write_words(&mut output, &["ab".to_string(), "ba".to_string()]).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            format!("\nGenerated 2 words:\n{}\n 1. 'ab'\n 2. 'ba'\n", "-".repeat(30))
        );
    }

    #[test]
    fn loop_until_quit() {
        let output = run_loop("ab\n  aab  \nQUIT\nba\n");

        assert!(output.contains("✓ 'ab' BELONGS to the grammar"));
        assert!(output.contains("✗ 'aab' does NOT belong to the grammar"));
        assert!(!output.contains("'ba'"));
    }

    #[test]
    fn loop_until_end_of_input() {
        let output = run_loop("z\n");

        assert!(output.contains("✗ 'z' does NOT belong to the grammar"));
        assert_eq!(output.matches("Enter word to test").count(), 2);
    }

    #[test]
    fn empty_word_is_tested() {
        assert!(run_loop("\nquit\n").contains("✗ '' does NOT belong to the grammar"));
    }
}
