use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// File containing the grammar, `-` to type it in (default: built-in example)
    pub file: Option<PathBuf>,

    /// Longest word to generate
    #[arg(short = 'l', long, value_name = "LENGTH", default_value_t = 8,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub max_length: u32,

    /// Most words to generate
    #[arg(short = 'n', long, value_name = "AMOUNT", default_value_t = 50,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub max_words: u32,

    /// Word to test for membership (repeatable)
    #[arg(short, long, value_name = "WORD")]
    pub check: Vec<String>,

    /// Keep reading words to test from stdin until `quit`
    #[arg(short, long)]
    pub interactive: bool,

    /// Number of random derivations to print
    #[arg(long, value_name = "AMOUNT")]
    pub sample: Option<u32>,

    /// Seed for the random derivations
    #[arg(long, value_name = "SEED", requires = "sample")]
    pub seed: Option<u64>,

    /// Rewrites a random derivation may take before it is abandoned
    #[arg(long, value_name = "STEPS", default_value_t = 50)]
    pub sample_steps: usize,

    /// Reject malformed lines, undefined nonterminals and unclassified symbols instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Treat every character other than uppercase letters and whitespace as a terminal
    #[arg(long)]
    pub open_alphabet: bool,

    /// Keep exploring forms longer than the word being tested
    #[arg(long)]
    pub no_length_prune: bool,

    /// Forms the membership search may explore per word
    #[arg(long, value_name = "COUNT", default_value_t = 10_000)]
    pub max_iterations: usize,
}
