use std::num::ParseFloatError;

use thiserror::Error;

/// Why a single evaluation failed. Positions are 0-based character indices
/// into the input after spaces have been removed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("invalid number format")]
    InvalidNumberFormat,
    #[error("expected number at position {pos}")]
    ExpectedNumber { pos: usize },
    #[error("missing closing parenthesis")]
    MissingClosingParen,
    #[error("division by zero")]
    DivisionByZero,
    #[error("unexpected character at position {pos}")]
    UnexpectedChar { pos: usize },
    #[error("parsing {literal:?}: {source}")]
    InvalidLiteral {
        literal: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("parsing {literal:?}: value out of range")]
    OutOfRange { literal: String },
}

/// Unified error type for the calculator library and binary.
#[derive(Debug, Error)]
pub enum ReckonError {
    #[error("{0}")]
    Eval(#[from] EvalError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReckonError>;
