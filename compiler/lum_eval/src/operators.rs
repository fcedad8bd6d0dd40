//! Binary operator implementations for the evaluator.
//!
//! Dispatch looks at the left operand's kind only. The right operand is read
//! through the field of that same kind (see [`Value::int_field`] and
//! friends), so `1 + 2.5` adds `0` and a string compared with an int compares
//! against `""`. Operator/kind pairs with no defined meaning yield `void`
//! without an error.

use std::cmp::Ordering;

use lum_ir::BinaryOp;

use crate::errors::{division_by_zero, integer_overflow, EvalResult};
use crate::{Value, ValueKind};

/// Checked integer arithmetic where the only failure is overflow.
#[inline]
fn checked_arith(result: Option<i32>, op_name: &'static str) -> EvalResult {
    result.map(Value::int).ok_or_else(|| integer_overflow(op_name))
}

/// Checked integer division with a zero guard.
#[inline]
fn checked_div(a: i32, b: i32) -> EvalResult {
    if b == 0 {
        Err(division_by_zero())
    } else {
        checked_arith(a.checked_div(b), "division")
    }
}

/// Evaluate a binary operation.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match &left.kind {
        ValueKind::Int(a) => eval_int_binary(*a, right.int_field(), op),
        ValueKind::Float(a) => eval_float_binary(*a, right.float_field(), op),
        ValueKind::Bool(a) => Ok(eval_bool_binary(*a, right.bool_field(), op)),
        ValueKind::Str(a) => Ok(eval_string_binary(a, right.str_field(), op)),
        ValueKind::Void => Ok(Value::void()),
    }
}

fn eval_int_binary(a: i32, b: i32, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div => checked_div(a, b),
        BinaryOp::Eq => Ok(Value::bool(a == b)),
        BinaryOp::NotEq => Ok(Value::bool(a != b)),
        BinaryOp::Lt => Ok(Value::bool(a < b)),
        BinaryOp::LtEq => Ok(Value::bool(a <= b)),
        BinaryOp::Gt => Ok(Value::bool(a > b)),
        BinaryOp::GtEq => Ok(Value::bool(a >= b)),
        BinaryOp::And | BinaryOp::Or => Ok(Value::void()),
    }
}

fn eval_float_binary(a: f32, b: f32, op: BinaryOp) -> EvalResult {
    let ord = a.partial_cmp(&b);
    let value = match op {
        BinaryOp::Add => Value::float(a + b),
        BinaryOp::Sub => Value::float(a - b),
        BinaryOp::Mul => Value::float(a * b),
        BinaryOp::Div => {
            // Both signed zeros compare equal to zero.
            if b.partial_cmp(&0.0) == Some(Ordering::Equal) {
                return Err(division_by_zero());
            }
            Value::float(a / b)
        }
        // partial_cmp keeps IEEE semantics: NaN compares unequal to everything.
        BinaryOp::Eq => Value::bool(ord == Some(Ordering::Equal)),
        BinaryOp::NotEq => Value::bool(ord != Some(Ordering::Equal)),
        BinaryOp::Lt => Value::bool(ord == Some(Ordering::Less)),
        BinaryOp::LtEq => Value::bool(matches!(ord, Some(Ordering::Less | Ordering::Equal))),
        BinaryOp::Gt => Value::bool(ord == Some(Ordering::Greater)),
        BinaryOp::GtEq => Value::bool(matches!(ord, Some(Ordering::Greater | Ordering::Equal))),
        BinaryOp::And | BinaryOp::Or => Value::void(),
    };
    Ok(value)
}

fn eval_bool_binary(a: bool, b: bool, op: BinaryOp) -> Value {
    match op {
        BinaryOp::Eq => Value::bool(a == b),
        BinaryOp::NotEq => Value::bool(a != b),
        BinaryOp::And => Value::bool(a && b),
        BinaryOp::Or => Value::bool(a || b),
        _ => Value::void(),
    }
}

fn eval_string_binary(a: &str, b: &str, op: BinaryOp) -> Value {
    match op {
        BinaryOp::Add => Value::string(format!("{a}{b}")),
        BinaryOp::Eq => Value::bool(a == b),
        BinaryOp::NotEq => Value::bool(a != b),
        _ => Value::void(),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::errors::EvalErrorKind;

    fn eval(left: Value, op: &str, right: Value) -> EvalResult {
        evaluate_binary(&left, &right, BinaryOp::from_token(op).unwrap())
    }

    #[test]
    fn int_arithmetic() {
        assert_eq!(eval(Value::int(2), "+", Value::int(3)).unwrap(), Value::int(5));
        assert_eq!(eval(Value::int(5), "-", Value::int(8)).unwrap(), Value::int(-3));
        assert_eq!(eval(Value::int(4), "*", Value::int(3)).unwrap(), Value::int(12));
        assert_eq!(eval(Value::int(7), "/", Value::int(2)).unwrap(), Value::int(3));
        assert_eq!(eval(Value::int(-7), "/", Value::int(2)).unwrap(), Value::int(-3));
    }

    #[test]
    fn int_comparisons() {
        assert_eq!(eval(Value::int(2), "<", Value::int(3)).unwrap(), Value::bool(true));
        assert_eq!(eval(Value::int(3), "<=", Value::int(3)).unwrap(), Value::bool(true));
        assert_eq!(eval(Value::int(2), ">", Value::int(3)).unwrap(), Value::bool(false));
        assert_eq!(eval(Value::int(3), ">=", Value::int(4)).unwrap(), Value::bool(false));
        assert_eq!(eval(Value::int(3), "==", Value::int(3)).unwrap(), Value::bool(true));
        assert_eq!(eval(Value::int(3), "!=", Value::int(3)).unwrap(), Value::bool(false));
    }

    #[test]
    fn int_division_by_zero() {
        let err = eval(Value::int(10), "/", Value::int(0)).unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    }

    #[test]
    fn int_overflow() {
        let err = eval(Value::int(i32::MAX), "+", Value::int(1)).unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::IntegerOverflow { operation: "addition" });
        let err = eval(Value::int(i32::MIN), "/", Value::int(-1)).unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::IntegerOverflow { operation: "division" });
        assert!(eval(Value::int(i32::MIN), "-", Value::int(1)).is_err());
        assert!(eval(Value::int(1 << 20), "*", Value::int(1 << 20)).is_err());
    }

    #[test]
    fn logical_on_int_is_void() {
        assert_eq!(eval(Value::int(1), "&&", Value::int(1)).unwrap(), Value::void());
    }

    #[test]
    fn float_arithmetic_and_comparison() {
        assert_eq!(eval(Value::float(1.5), "+", Value::float(2.0)).unwrap(), Value::float(3.5));
        assert_eq!(eval(Value::float(1.0), "/", Value::float(4.0)).unwrap(), Value::float(0.25));
        assert_eq!(eval(Value::float(1.5), "<", Value::float(2.0)).unwrap(), Value::bool(true));
        assert_eq!(eval(Value::float(2.0), "==", Value::float(2.0)).unwrap(), Value::bool(true));
    }

    #[test]
    fn float_division_by_zero() {
        let err = eval(Value::float(1.0), "/", Value::float(0.0)).unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
        assert!(eval(Value::float(1.0), "/", Value::float(-0.0)).is_err());
    }

    #[test]
    fn float_nan_is_unequal() {
        let nan = Value::float(f32::NAN);
        assert_eq!(eval(nan.clone(), "==", nan.clone()).unwrap(), Value::bool(false));
        assert_eq!(eval(nan.clone(), "!=", nan).unwrap(), Value::bool(true));
    }

    #[test]
    fn bool_operations() {
        assert_eq!(eval(Value::bool(true), "&&", Value::bool(false)).unwrap(), Value::bool(false));
        assert_eq!(eval(Value::bool(false), "||", Value::bool(true)).unwrap(), Value::bool(true));
        assert_eq!(eval(Value::bool(true), "==", Value::bool(true)).unwrap(), Value::bool(true));
        assert_eq!(eval(Value::bool(true), "+", Value::bool(true)).unwrap(), Value::void());
        assert_eq!(eval(Value::bool(true), "<", Value::bool(true)).unwrap(), Value::void());
    }

    #[test]
    fn string_operations() {
        assert_eq!(
            eval(Value::string("foo"), "+", Value::string("bar")).unwrap(),
            Value::string("foobar")
        );
        assert_eq!(
            eval(Value::string("a"), "==", Value::string("a")).unwrap(),
            Value::bool(true)
        );
        assert_eq!(
            eval(Value::string("a"), "<", Value::string("b")).unwrap(),
            Value::void()
        );
        assert_eq!(
            eval(Value::string("a"), "-", Value::string("b")).unwrap(),
            Value::void()
        );
    }

    #[test]
    fn right_operand_read_through_left_kind() {
        // The float right operand reads as int 0.
        assert_eq!(eval(Value::int(1), "+", Value::float(2.5)).unwrap(), Value::int(1));
        assert!(eval(Value::int(1), "/", Value::float(2.5)).is_err());
        assert_eq!(eval(Value::float(1.5), "+", Value::int(2)).unwrap(), Value::float(1.5));
        assert_eq!(
            eval(Value::string("n="), "+", Value::int(3)).unwrap(),
            Value::string("n=")
        );
        assert_eq!(eval(Value::bool(true), "&&", Value::int(1)).unwrap(), Value::bool(false));
    }

    #[test]
    fn void_left_is_void() {
        assert_eq!(eval(Value::void(), "+", Value::int(1)).unwrap(), Value::void());
        assert_eq!(eval(Value::void(), "==", Value::void()).unwrap(), Value::void());
    }
}
