//! Error handling for dispatch, mapping and coercion

use thiserror::Error;

use crate::value::{Kind, KindList};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// No registered signature matches the runtime kind(s) of the arguments.
    #[error("no signature found for {op}({kinds})")]
    NoMatchingSignature { op: String, kinds: KindList },

    #[error("wrong number of arguments for {op}: expected {expected}, got {got}")]
    ArityMismatch { op: String, expected: usize, got: usize },

    #[error("expected {expected}, got {got}")]
    TypeMismatch { expected: &'static str, got: Kind },

    #[error("cannot convert \"{0}\" to a number")]
    InvalidNumber(String),

    #[error("dimension mismatch: expected {expected} element(s), found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("rank mismatch: expected {expected} dimension(s), found {found}")]
    RankMismatch { expected: usize, found: usize },

    #[error("unknown function: {0}")]
    UnknownFunction(String),

    #[error("invalid configuration value: {0}")]
    InvalidConfig(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type MathResult<T> = Result<T, MathError>;

impl MathError {
    pub fn no_signature(op: &str, kinds: &[Kind]) -> Self {
        MathError::NoMatchingSignature { op: op.to_string(), kinds: KindList(kinds.to_vec()) }
    }

    pub fn type_mismatch(expected: &'static str, got: Kind) -> Self {
        MathError::TypeMismatch { expected, got }
    }

    pub fn invalid_number(text: impl Into<String>) -> Self {
        MathError::InvalidNumber(text.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        MathError::Internal(msg.into())
    }
}
