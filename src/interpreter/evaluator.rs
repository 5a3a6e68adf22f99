use std::io::Write;

use crate::{
    error::EvalError,
    interpreter::lexer::{Token, TokenKind},
};

/// The LIFO operand stack mutated by one evaluation pass.
///
/// Only numbers live on the stack; the restriction is enforced by the type
/// rather than checked at runtime. A fresh stack is created per pass and
/// discarded after the pass completes or fails.
#[derive(Debug, Default)]
pub struct OperandStack {
    entries: Vec<f64>,
}

impl OperandStack {
    fn push(&mut self, value: f64) {
        self.entries.push(value);
    }

    fn pop(&mut self, row: usize, col: usize) -> Result<f64, EvalError> {
        self.entries.pop().ok_or(EvalError::StackUnderflow { row, col })
    }

    /// Returns the number of operands currently on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the stack holds no operands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the stack contents in bottom-to-top order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.entries
    }

    /// Writes the stack contents to `out` in bottom-to-top order, one line
    /// per operand. Dumping borrows the stack immutably: invoking it any
    /// number of times produces identical output.
    ///
    /// # Errors
    /// Returns the underlying I/O error if writing to `out` fails.
    pub fn dump<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for value in &self.entries {
            writeln!(out, "[INFO] Type: Number, Token: {value}")?;
        }
        Ok(())
    }
}

/// Executes a token sequence against a fresh operand stack.
///
/// Walks the tokens in source order: numbers are pushed, each operator pops
/// the top two entries (the most recent pop is the right operand) and pushes
/// the result, and `print` pops the top of the stack and writes one line of
/// the shape `Type: Number, Value: <v>` to `out`. The first failure aborts
/// the pass; remaining tokens are not processed.
///
/// On success the final stack is returned so the caller may inspect or dump
/// it. For a well-formed expression that ends with `print`, the stack is
/// empty.
///
/// # Errors
/// - [`EvalError::StackUnderflow`] if an operator or `print` finds too few
///   operands.
/// - [`EvalError::DivisionByZero`] if the right operand of `/` is zero.
/// - [`EvalError::UnknownIdentifier`] for any function name other than
///   `print`.
/// - [`EvalError::Io`] if writing `print` output fails.
///
/// # Examples
/// ```
/// use rpni::interpreter::{evaluator::evaluate, lexer::tokenize};
///
/// let tokens = tokenize("3 4 + 2 *").unwrap();
/// let mut out = Vec::new();
/// let stack = evaluate(&tokens, &mut out).unwrap();
///
/// assert_eq!(stack.values(), &[14.0]);
/// assert!(out.is_empty());
/// ```
pub fn evaluate<W: Write>(tokens: &[Token], out: &mut W) -> Result<OperandStack, EvalError> {
    let mut stack = OperandStack::default();

    for token in tokens {
        match &token.kind {
            TokenKind::Number(value) => stack.push(*value),

            TokenKind::Plus => {
                let right = stack.pop(token.row, token.col)?;
                let left = stack.pop(token.row, token.col)?;
                stack.push(left + right);
            },

            TokenKind::Minus => {
                let right = stack.pop(token.row, token.col)?;
                let left = stack.pop(token.row, token.col)?;
                stack.push(left - right);
            },

            TokenKind::Mult => {
                let right = stack.pop(token.row, token.col)?;
                let left = stack.pop(token.row, token.col)?;
                stack.push(left * right);
            },

            TokenKind::Div => {
                let right = stack.pop(token.row, token.col)?;
                let left = stack.pop(token.row, token.col)?;
                if right == 0.0 {
                    return Err(EvalError::DivisionByZero { row: token.row,
                                                           col: token.col, });
                }
                stack.push(left / right);
            },

            TokenKind::Func(name) => {
                if name == "print" {
                    let value = stack.pop(token.row, token.col)?;
                    writeln!(out, "Type: Number, Value: {value}").map_err(|source| {
                                                                      EvalError::Io { source }
                                                                  })?;
                } else {
                    return Err(EvalError::UnknownIdentifier { name: name.clone(),
                                                              row:  token.row,
                                                              col:  token.col, });
                }
            },

            TokenKind::Newline | TokenKind::Whitespace => {
                unreachable!("whitespace is skipped during tokenization")
            },
        }
    }

    Ok(stack)
}
