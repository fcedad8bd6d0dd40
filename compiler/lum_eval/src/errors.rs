//! Runtime errors.
//!
//! None of these abort evaluation. The interpreter turns each one into a
//! diagnostic and continues with `void` in place of the failed expression.

use std::fmt;

use lum_diagnostic::{Diagnostic, ErrorCode};

use crate::Value;

/// Result of evaluating an operator or a leaf.
pub type EvalResult = Result<Value, EvalError>;

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    DivisionByZero,
    IntegerOverflow {
        operation: &'static str,
    },
    /// Read of a name nothing was ever stored under.
    UnboundVariable {
        name: String,
    },
    /// Literal text that does not parse as the kind its shape implies.
    MalformedLiteral {
        text: String,
        kind: &'static str,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::IntegerOverflow { operation } => write!(f, "Integer overflow in {operation}"),
            Self::UnboundVariable { name } => write!(f, "variable '{name}' has no value"),
            Self::MalformedLiteral { text, kind } => {
                write!(f, "malformed {kind} literal '{text}'")
            }
        }
    }
}

/// A runtime error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
}

impl EvalError {
    #[inline]
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            EvalErrorKind::UnboundVariable { .. } => ErrorCode::E6001,
            EvalErrorKind::DivisionByZero => ErrorCode::E6002,
            EvalErrorKind::IntegerOverflow { .. } => ErrorCode::E6003,
            EvalErrorKind::MalformedLiteral { .. } => ErrorCode::E6004,
        }
    }

    /// Runtime diagnostics carry no source line.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code()).with_message(self.kind.to_string())
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl std::error::Error for EvalError {}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::new(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::IntegerOverflow { operation })
}

#[cold]
pub fn unbound_variable(name: &str) -> EvalError {
    EvalError::new(EvalErrorKind::UnboundVariable {
        name: name.to_owned(),
    })
}

#[cold]
pub fn malformed_literal(text: &str, kind: &'static str) -> EvalError {
    EvalError::new(EvalErrorKind::MalformedLiteral {
        text: text.to_owned(),
        kind,
    })
}
