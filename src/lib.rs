//! # rpni
//!
//! rpni is an interpreter for a tiny Reverse Polish Notation (postfix)
//! arithmetic language. It tokenizes whitespace-separated source text into
//! numbers, the four binary operators `+ - * /`, and function names, then
//! evaluates the token sequence left to right against an operand stack. The
//! single built-in function `print` pops the top of the stack and writes it
//! to the output channel.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::interpreter::{
    evaluator::{evaluate, OperandStack},
    lexer::tokenize,
};

/// Provides unified error types for tokenization and evaluation.
///
/// This module defines all errors that can be raised while turning source
/// text into tokens or while executing a token sequence. Every error carries
/// the source position (row and column) where it occurred, so the driver can
/// point the user at the offending input.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, evaluator).
/// - Attaches row/column positions and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the process of interpreting postfix source code.
///
/// This module ties together the lexer and the stack-based evaluator to
/// provide a complete runtime for one source unit (a file, or one REPL
/// line). Each pass is stateless relative to the next: a fresh token
/// sequence and operand stack are created per unit and discarded afterwards.
///
/// # Responsibilities
/// - Converts raw source text into a typed token sequence.
/// - Evaluates the sequence against a LIFO operand stack.
/// - Surfaces typed errors to the caller instead of terminating the process.
pub mod interpreter;

/// Tokenizes and evaluates one source unit, returning the final stack.
///
/// This is the convenience entry point used by the driver: it runs the full
/// tokenize-then-evaluate pass over `source`, writing any `print` output to
/// `out`. On success the final operand stack is returned so the caller may
/// inspect or dump it; on failure the first tokenization or evaluation error
/// is returned and nothing of the failed pass is kept.
///
/// # Errors
/// Returns an error if tokenization or evaluation fails; see
/// [`error::LexError`] and [`error::EvalError`] for the failure modes.
///
/// # Examples
/// ```
/// use rpni::run_source;
///
/// let mut out = Vec::new();
/// let stack = run_source("1 2 + print", &mut out).unwrap();
///
/// assert!(stack.is_empty());
/// assert_eq!(String::from_utf8(out).unwrap(), "Type: Number, Value: 3\n");
///
/// // Popping with too few operands is a typed error, not a process abort.
/// let mut out = Vec::new();
/// assert!(run_source("1 + print", &mut out).is_err());
/// ```
pub fn run_source<W: Write>(source: &str,
                            out: &mut W)
                            -> Result<OperandStack, Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    let stack = evaluate(&tokens, out)?;
    Ok(stack)
}
