//! Error types. Parsing and I/O failures are ordinary [`thiserror`] enums
//! propagated with `?`; a handful of truly-unreachable states (a pivot
//! selected on a zero element, an internal invariant broken) are left as
//! `panic!`/`assert!` in the modules that can hit them, matching how the
//! rest of this crate treats "this should be impossible" differently from
//! "this is a bad but expected input".

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: expected {expected} numbers, found malformed input")]
    BadNumber { line: usize, expected: &'static str },

    #[error("header line must contain two positive integers \"m n\", got {found:?}")]
    BadDimensions { found: String },

    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("{context}: expected {expected} values, got {got}")]
    WrongLength { context: &'static str, expected: usize, got: usize },
}

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("linear program is infeasible")]
    Infeasible,

    #[error("linear program is unbounded")]
    Unbounded,

    #[error("integer solver exhausted its cut budget ({limit} cuts) without reaching an integral solution")]
    CutBudgetExhausted { limit: usize },
}
