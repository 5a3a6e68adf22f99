#[derive(Debug)]
/// Represents all errors that can occur during tokenization.
///
/// Any of these aborts the whole tokenize call: no partial token sequence is
/// returned to the caller. Positions are 1-based.
pub enum LexError {
    /// A run that began with a digit contained something other than digits
    /// and a decimal point, or did not parse as a number.
    InvalidNumber {
        /// The offending literal as it appeared in the source.
        literal: String,
        /// The source row where the error occurred.
        row:     usize,
        /// The source column where the error occurred.
        col:     usize,
    },
    /// A numeric run contained no digits at all, such as a bare `.`.
    NoDigitsFound {
        /// The source row where the error occurred.
        row: usize,
        /// The source column where the error occurred.
        col: usize,
    },
    /// A numeric literal was outside the representable floating-point range.
    NumberOutOfRange {
        /// The offending literal as it appeared in the source.
        literal: String,
        /// The source row where the error occurred.
        row:     usize,
        /// The source column where the error occurred.
        col:     usize,
    },
    /// A character sequence matched none of the lexical classes.
    UnrecognizedToken {
        /// The unrecognized input.
        token: String,
        /// The source row where the error occurred.
        row:   usize,
        /// The source column where the error occurred.
        col:   usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNumber { literal, row, col } => {
                write!(f, "Error at {row}:{col}: Invalid number literal '{literal}'.")
            },

            Self::NoDigitsFound { row, col } => {
                write!(f, "Error at {row}:{col}: No digits found in numeric literal.")
            },

            Self::NumberOutOfRange { literal, row, col } => write!(f,
                                                                   "Error at {row}:{col}: Number literal '{literal}' is out of range."),

            Self::UnrecognizedToken { token, row, col } => {
                write!(f, "Error at {row}:{col}: Unrecognized token '{token}'.")
            },
        }
    }
}

impl std::error::Error for LexError {}
