/// The two error kinds produced by this crate: `CompileError` from `compile`,
/// `RuntimeError` from `Expression::search`. No other failure mode escapes
/// either boundary — everything else resolves to `Null` (see `interpreter`).
use thiserror::Error;

/// Failure to lex or parse a JMESPath expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    #[error("unterminated {delim} delimiter starting at position {start}")]
    UnterminatedDelimiter { delim: char, start: usize },

    #[error("invalid character '{ch}' at position {pos}")]
    InvalidCharacter { ch: char, pos: usize },

    #[error("invalid integer literal '{text}' at position {pos}")]
    InvalidNumber { text: String, pos: usize },

    #[error("unable to parse literal JSON at position {pos}: {message}")]
    InvalidLiteralJson { pos: usize, message: String },

    #[error("unable to parse quoted identifier at position {pos}: {message}")]
    InvalidQuotedIdentifier { pos: usize, message: String },

    #[error("expected '==', got bare '=' at position {pos} (did you mean \"==\"?)")]
    BareEquals { pos: usize },

    #[error("slice step cannot be 0")]
    ZeroStep,

    #[error("too many colons in slice expression")]
    TooManyColons,

    #[error("quoted identifiers cannot be used as function names")]
    QuotedIdentifierAsFunction,

    #[error("unexpected token {found}, expected {expected}")]
    UnexpectedToken { found: String, expected: String },

    #[error("trailing tokens after end of expression: {found}")]
    TrailingTokens { found: String },
}

/// Failure during `search`: unknown function, arity/type mismatch, or a
/// function-specific semantic failure (e.g. `sort_by` with mixed key types).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("unknown function name '{0}'")]
    UnknownFunction(String),

    #[error("invalid arity calling '{name}': expected {expected}, got {got}")]
    InvalidArity {
        name: String,
        expected: String,
        got: usize,
    },

    #[error(
        "invalid type for argument {position} of '{name}': expected {expected}, got {got}"
    )]
    InvalidType {
        name: String,
        position: usize,
        expected: String,
        got: String,
    },

    #[error("invalid value calling '{name}': {message}")]
    InvalidValue { name: String, message: String },
}
