use logos::Logos;

use crate::error::LexError;

/// Represents the kind of a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
pub enum TokenKind {
    /// Numeric literal tokens, such as `42`, `2.3` or `.5`.
    #[regex(r"[0-9][0-9a-zA-Z_.]*", parse_number)]
    #[regex(r"\.[0-9a-zA-Z_.]*", parse_fraction)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `/`
    #[token("/")]
    Div,
    /// `*`
    #[token("*")]
    Mult,
    /// Identifier tokens; function names such as `print`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Func(String),

    /// Line breaks; tracked for positions, never yielded.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    Newline,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Whitespace,
}

impl TokenKind {
    /// Returns the human-readable name of this token kind, as used in
    /// `print` output and trace dumps.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Number(_) => "Number",
            Self::Plus => "Plus",
            Self::Minus => "Minus",
            Self::Div => "Div",
            Self::Mult => "Mult",
            Self::Func(_) => "Func",
            Self::Newline => "Newline",
            Self::Whitespace => "Whitespace",
        }
    }
}

/// A classified token together with its source position.
///
/// Positions are 1-based: the first byte of the source is row 1, column 1.
/// Tokens are immutable once produced.
#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    /// The classified kind and payload of the token.
    pub kind: TokenKind,
    /// The source row the token starts on.
    pub row:  usize,
    /// The source column the token starts at.
    pub col:  usize,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            TokenKind::Number(value) => {
                write!(f, "Type: {}, Token: {value}", self.kind.name())
            },
            TokenKind::Plus => write!(f, "Type: Plus, Token: +"),
            TokenKind::Minus => write!(f, "Type: Minus, Token: -"),
            TokenKind::Div => write!(f, "Type: Div, Token: /"),
            TokenKind::Mult => write!(f, "Type: Mult, Token: *"),
            TokenKind::Func(name) => write!(f, "Type: {}, Token: {name}", self.kind.name()),
            TokenKind::Newline | TokenKind::Whitespace => {
                write!(f, "Type: {}, Token:", self.kind.name())
            },
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current row and the byte offset of its first character, so
/// every token can be stamped with a (row, column) position. Advances
/// monotonically; a fresh value is used for every source unit.
pub struct LexerExtras {
    /// The current row in the source being tokenized.
    pub line:       usize,
    /// The byte offset at which the current row starts.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// Internal classification of a lexical failure, before it is attached to a
/// source position. `Default` is the class logos assigns to input that
/// matches no token pattern at all.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LexErrorKind {
    /// A digit-led run contained non-numeric characters or did not parse.
    InvalidNumber,
    /// A numeric run contained no digits, such as a bare `.`.
    NoDigitsFound,
    /// A literal parsed outside the representable floating-point range.
    NumberOutOfRange,
    /// Input matching no lexical class.
    #[default]
    UnrecognizedToken,
}

impl LexErrorKind {
    fn into_error(self, slice: &str, row: usize, col: usize) -> LexError {
        match self {
            Self::InvalidNumber => LexError::InvalidNumber { literal: slice.to_string(),
                                                             row,
                                                             col },
            Self::NoDigitsFound => LexError::NoDigitsFound { row, col },
            Self::NumberOutOfRange => LexError::NumberOutOfRange { literal: slice.to_string(),
                                                                   row,
                                                                   col },
            Self::UnrecognizedToken => LexError::UnrecognizedToken { token: slice.to_string(),
                                                                     row,
                                                                     col },
        }
    }
}

/// Converts one source unit into an ordered token sequence.
///
/// Scans the input left to right, grouping characters into maximal runs:
/// whitespace separates runs, the operators `+ - * /` always form a
/// single-character token even with no surrounding whitespace, alphabetic
/// runs become [`TokenKind::Func`] identifiers, and digit-led runs become
/// [`TokenKind::Number`] literals. Newlines advance the row counter and
/// reset the column origin.
///
/// # Errors
/// Any malformed run fails the whole call with a [`LexError`] carrying the
/// source position; no partial token sequence is returned.
///
/// # Examples
/// ```
/// use rpni::interpreter::lexer::{tokenize, TokenKind};
///
/// // Operators force a run boundary even without whitespace.
/// let tokens = tokenize("2+3").unwrap();
/// let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            vec![TokenKind::Number(2.0), TokenKind::Plus, TokenKind::Number(3.0)]);
///
/// assert!(tokenize("12abc").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras::default());

    while let Some(result) = lexer.next() {
        let row = lexer.extras.line;
        let col = lexer.span().start - lexer.extras.line_start + 1;
        match result {
            Ok(kind) => tokens.push(Token { kind, row, col }),
            Err(kind) => return Err(kind.into_error(lexer.slice(), row, col)),
        }
    }

    Ok(tokens)
}

/// Parses a digit-led numeric literal from the current token slice.
///
/// The run must consist of digits and at most one decimal point; any other
/// character in it is an error rather than a new token, matching the
/// whitespace-and-operator-delimited run semantics of the language.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(f64)`: The parsed floating-point value.
/// - `Err(LexErrorKind)`: The literal is malformed or out of range.
fn parse_number(lex: &logos::Lexer<TokenKind>) -> Result<f64, LexErrorKind> {
    let slice = lex.slice();
    if !slice.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return Err(LexErrorKind::InvalidNumber);
    }

    let value: f64 = slice.parse().map_err(|_| LexErrorKind::InvalidNumber)?;
    if value.is_infinite() {
        return Err(LexErrorKind::NumberOutOfRange);
    }
    Ok(value)
}

/// Parses a numeric literal that starts with a decimal point, such as `.5`.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(f64)`: The parsed floating-point value.
/// - `Err(LexErrorKind)`: The run contains no digits or does not parse.
fn parse_fraction(lex: &logos::Lexer<TokenKind>) -> Result<f64, LexErrorKind> {
    let slice = lex.slice();
    if !slice.bytes().any(|b| b.is_ascii_digit()) {
        return Err(LexErrorKind::NoDigitsFound);
    }
    if !slice.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return Err(LexErrorKind::InvalidNumber);
    }

    slice.parse().map_err(|_| LexErrorKind::InvalidNumber)
}
