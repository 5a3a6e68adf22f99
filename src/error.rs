/// Tokenization errors.
///
/// Defines all error types that can occur while scanning raw source text
/// into tokens. Lexical errors include malformed numeric literals and
/// character sequences that match none of the lexical classes.
pub mod lex_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while executing a token
/// sequence against the operand stack, such as stack underflow, division by
/// zero, or a call to an unknown function.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
