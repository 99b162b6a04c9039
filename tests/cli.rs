// End to end runs of the wordsmith binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn wordsmith() -> Command {
    Command::cargo_bin("wordsmith").unwrap()
}

fn grammar_file(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("grammar.cfg");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn example_grammar_by_default() {
    wordsmith()
        .args(["--max-length", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> a | aS | bAA"))
        .stdout(predicate::str::contains("Start Symbol: S"))
        .stdout(predicate::str::contains("Generated 2 words:"))
        .stdout(predicate::str::contains(" 1. 'ab'\n 2. 'ba'\n"))
        .stdout(predicate::str::contains("✓ 'ba' BELONGS to the grammar"));
}

#[test]
fn word_limit() {
    wordsmith()
        .args(["-l", "8", "-n", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 10 words:"))
        .stdout(predicate::str::contains("10. 'bbaa'"));
}

#[test]
fn checks_words() {
    wordsmith()
        .args(["-c", "abab", "-c", "aab", "-c", "z", "-c", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ 'abab' BELONGS to the grammar"))
        .stdout(predicate::str::contains("✗ 'aab' does NOT belong to the grammar"))
        .stdout(predicate::str::contains("✗ 'z' does NOT belong to the grammar"))
        .stdout(predicate::str::contains("✗ '' does NOT belong to the grammar"));
}

#[test]
fn grammar_from_file() {
    let dir = TempDir::new().unwrap();
    let path = grammar_file(&dir, "S -> aSb | ab\n");

    wordsmith()
        .arg(&path)
        .args(["-l", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 3 words:"))
        .stdout(predicate::str::contains("'aaabbb'"));
}

#[test]
fn length_prune_can_be_disabled() {
    let dir = TempDir::new().unwrap();
    let path = grammar_file(&dir, "S -> aSb |\n");

    wordsmith()
        .arg(&path)
        .args(["-c", "aabb"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✗ 'aabb' does NOT belong to the grammar"));

    wordsmith()
        .arg(&path)
        .args(["-c", "aabb", "--no-length-prune"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ 'aabb' BELONGS to the grammar"));
}

#[test]
fn digits_stall_unless_alphabet_is_open() {
    let dir = TempDir::new().unwrap();
    let path = grammar_file(&dir, "S -> a1B | a b\nB -> b\n");

    wordsmith()
        .arg(&path)
        .args(["-l", "5", "-c", "a1b", "-c", "ab"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Terminals: {a, b}"))
        .stdout(predicate::str::contains("Generated 0 words:"))
        .stdout(predicate::str::contains("✗ 'a1b' does NOT belong to the grammar"))
        .stdout(predicate::str::contains("✗ 'ab' does NOT belong to the grammar"));

    wordsmith()
        .arg(&path)
        .args(["-l", "5", "-c", "a1b", "-c", "ab", "--open-alphabet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Terminals: {1, a, b}"))
        .stdout(predicate::str::contains("Generated 2 words:"))
        .stdout(predicate::str::contains("✓ 'a1b' BELONGS to the grammar"))
        .stdout(predicate::str::contains("✓ 'ab' BELONGS to the grammar"));
}

#[test]
fn permissive_skips_bad_lines() {
    let dir = TempDir::new().unwrap();
    let path = grammar_file(&dir, "S -> aX\nXY -> b\nX -> c\n");

    wordsmith()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("X -> c"))
        .stdout(predicate::str::contains("'ac'"));
}

#[test]
fn strict_reports_bad_lines() {
    let dir = TempDir::new().unwrap();
    let path = grammar_file(&dir, "S -> aX\nXY -> b\n");

    wordsmith()
        .arg(&path)
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("grammar.cfg:2"))
        .stderr(predicate::str::contains("Left hand side must be a single nonterminal"));
}

#[test]
fn strict_reports_undefined_nonterminals() {
    let dir = TempDir::new().unwrap();
    let path = grammar_file(&dir, "S -> aX\n");

    wordsmith()
        .arg(&path)
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not find definition for `X`"));
}

#[test]
fn missing_file() {
    wordsmith()
        .arg("no/such/grammar.cfg")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File error"));
}

#[test]
fn grammar_from_stdin() {
    wordsmith()
        .args(["-", "-l", "4", "-i"])
        .write_stdin("S -> aS | b\n\nab\naab\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 4 words:"))
        .stdout(predicate::str::contains("'aaab'"))
        .stdout(predicate::str::contains("✗ 'ab' does NOT belong").not())
        .stdout(predicate::str::contains("✓ 'aab' BELONGS to the grammar"));
}

#[test]
fn empty_stdin_falls_back_to_example() {
    wordsmith()
        .arg("-")
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No grammar entered. Using example grammar."))
        .stdout(predicate::str::contains("S -> aB | bA"));
}

#[test]
fn interactive_loop_until_quit() {
    wordsmith()
        .args(["-l", "2", "--interactive"])
        .write_stdin("abba\nbab\nquit\nab\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ 'abba' BELONGS to the grammar"))
        .stdout(predicate::str::contains("✗ 'bab' does NOT belong to the grammar"))
        .stdout(predicate::str::contains("Enter word to test").count(3));
}

#[test]
fn seeded_samples() {
    let run = || {
        wordsmith()
            .args(["-l", "2", "--sample", "5", "--seed", "11"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Random derivations:"))
            .get_output()
            .stdout
            .clone()
    };

    assert_eq!(run(), run());
}

#[test]
fn zero_length_is_rejected() {
    wordsmith().args(["--max-length", "0"]).assert().failure();
}
