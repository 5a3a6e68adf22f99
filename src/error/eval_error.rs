#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
///
/// Any of these aborts the evaluation pass immediately; no further tokens
/// are processed and the partial stack is discarded. Positions are 1-based
/// and refer to the token being executed when the error occurred.
pub enum EvalError {
    /// An operator or `print` executed with too few operands on the stack.
    StackUnderflow {
        /// The source row of the token that required the missing operand.
        row: usize,
        /// The source column of the token that required the missing operand.
        col: usize,
    },
    /// The right operand of `/` was exactly zero.
    DivisionByZero {
        /// The source row of the division operator.
        row: usize,
        /// The source column of the division operator.
        col: usize,
    },
    /// An identifier other than `print` reached the evaluator.
    UnknownIdentifier {
        /// The name of the identifier.
        name: String,
        /// The source row of the identifier.
        row:  usize,
        /// The source column of the identifier.
        col:  usize,
    },
    /// Writing `print` output to the output channel failed.
    Io {
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StackUnderflow { row, col } => {
                write!(f, "Error at {row}:{col}: Attempting to pop from empty stack.")
            },

            Self::DivisionByZero { row, col } => {
                write!(f, "Error at {row}:{col}: Division by zero.")
            },

            Self::UnknownIdentifier { name, row, col } => {
                write!(f, "Error at {row}:{col}: Unknown identifier '{name}'.")
            },

            Self::Io { source } => write!(f, "Error while writing output: {source}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source } => Some(source),
            _ => None,
        }
    }
}
