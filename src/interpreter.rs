/// The lexer module tokenizes source code for evaluation.
///
/// The lexer reads raw source text and produces an ordered sequence of
/// tokens: numeric literals, the four binary operators, and function names.
/// Operators always form their own token, even when adjacent to a digit or
/// letter run with no separating whitespace. Each token carries its source
/// position for error reporting.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and source
///   location.
/// - Handles numeric literals, identifiers, and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The evaluator module executes a token sequence against an operand stack.
///
/// The evaluator walks the tokens left to right: numbers are pushed,
/// operators pop two operands and push one result, and `print` pops and
/// displays the top of the stack. It is a single linear pass with no
/// branches or jumps.
///
/// # Responsibilities
/// - Maintains the LIFO operand stack for one pass.
/// - Performs the four arithmetic operations and the `print` builtin.
/// - Reports runtime errors such as stack underflow or division by zero.
pub mod evaluator;
