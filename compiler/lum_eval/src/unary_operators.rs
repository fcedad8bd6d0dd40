//! Unary operator implementations for the evaluator.
//!
//! Only logical negation of a bool is defined. Every other operand yields
//! `void`, as does every unknown unary token (handled by the caller).

use lum_ir::UnaryOp;

use crate::{Value, ValueKind};

/// Evaluate a unary operation.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> Value {
    match (&value.kind, op) {
        (ValueKind::Bool(b), UnaryOp::Not) => Value::bool(!b),
        _ => Value::void(),
    }
}
