//! Bounded breadth-first exploration of context-free grammars: enumerate the
//! words a grammar derives, or decide whether a given word is one of them.

pub mod error_handling;
pub mod generator;
pub mod grammar;
pub mod parser;
pub mod recognizer;
