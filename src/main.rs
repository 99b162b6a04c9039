mod cli;
mod session;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use cli::Cli;
use wordsmith::error_handling::Location;
use wordsmith::generator::{generate, sample};
use wordsmith::grammar::{Grammar, EXAMPLE_GRAMMAR};
use wordsmith::parser::{parse_file, parse_str, Alphabet, CompileError, CompileErrorType, CompileErrors, FileResult, ParseOptions, Strictness};
use wordsmith::recognizer::{LengthPrune, SearchConfig};

const STDIN_PATH: &str = "-";
const PREVIEW_WORDS: usize = 5;

fn search_config(cli: &Cli) -> SearchConfig {
    SearchConfig {
        max_iterations: cli.max_iterations,
        length_prune: if cli.no_length_prune { LengthPrune::Disabled } else { LengthPrune::Enabled },
        ..SearchConfig::default()
    }
}

fn parse_options(cli: &Cli) -> ParseOptions {
    ParseOptions {
        strictness: if cli.strict { Strictness::Strict } else { Strictness::Permissive },
        alphabet: if cli.open_alphabet { Alphabet::Open } else { Alphabet::Letters },
    }
}

fn example_grammar(options: ParseOptions) -> FileResult<Grammar> {
    parse_str(EXAMPLE_GRAMMAR, Path::new("<example>"), options)
}

fn read_stdin_grammar(options: ParseOptions) -> FileResult<Grammar> {
    println!("Enter grammar (one production per line, empty line to finish):");
    println!("Format: S -> aB | bA");

    let origin = PathBuf::from("<stdin>");
    let text = session::read_grammar_text(&mut io::stdin().lock()).map_err(|e| vec![CompileError {
        location: Location::whole(origin.clone()),
        error: CompileErrorType::FileError(e)
    }])?;

    if text.trim().is_empty() {
        println!("No grammar entered. Using example grammar.");
        return example_grammar(options);
    }

    parse_str(&text, &origin, options)
}

fn load_grammar(cli: &Cli) -> FileResult<Grammar> {
    let options = parse_options(cli);

    match &cli.file {
        None => example_grammar(options),
        Some(path) if path.as_os_str() == STDIN_PATH => read_stdin_grammar(options),
        Some(path) => parse_file(path, options),
    }
}

fn run(cli: &Cli, grammar: &Grammar) -> io::Result<()> {
    let config = search_config(cli);
    let mut out = io::stdout().lock();

    writeln!(out, "{}", grammar)?;

    let words = generate(grammar, cli.max_length as usize, cli.max_words as usize);
    info!("generated {} words", words.len());
    session::write_words(&mut out, &words)?;

    if !words.is_empty() {
        writeln!(out, "\nTesting some generated words first:")?;
        for word in words.iter().take(PREVIEW_WORDS) {
            session::write_membership(&mut out, grammar, &config, word)?;
        }
    }

    if !cli.check.is_empty() {
        writeln!(out, "\nRequested words:")?;
        for word in &cli.check {
            session::write_membership(&mut out, grammar, &config, word)?;
        }
    }

    if let Some(amount) = cli.sample {
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        writeln!(out, "\nRandom derivations:")?;
        for _ in 0..amount {
            match sample(grammar, &mut rng, cli.sample_steps) {
                Some(word) => writeln!(out, "  '{}'", word)?,
                None => writeln!(out, "  (no word within {} steps)", cli.sample_steps)?,
            }
        }
    }

    if cli.interactive {
        session::membership_loop(grammar, &config, &mut io::stdin().lock(), &mut out)?;
    }

    Ok(())
}

fn report(errors: &CompileErrors) {
    for error in errors {
        eprintln!("{}", error);
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let grammar = match load_grammar(&cli) {
        Ok(grammar) => grammar,
        Err(errors) => {
            report(&errors);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = run(&cli, &grammar) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
