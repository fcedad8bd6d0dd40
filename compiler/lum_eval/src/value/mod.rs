//! Runtime values.
//!
//! A [`Value`] is a tagged scalar plus a return flag. The flag marks a value
//! produced by `return` that is still travelling up through enclosing blocks
//! and loops; it is not a value kind of its own.

mod float_fmt;

use std::fmt;

use lum_ir::TypeInfo;

/// The scalar carried by a [`Value`].
#[derive(Clone, Debug, PartialEq)]
pub enum ValueKind {
    Int(i32),
    Float(f32),
    Bool(bool),
    Str(String),
    Void,
}

/// A runtime value.
#[derive(Clone, Debug, PartialEq)]
pub struct Value {
    pub kind: ValueKind,
    returning: bool,
}

impl Value {
    #[inline]
    pub fn new(kind: ValueKind) -> Self {
        Value {
            kind,
            returning: false,
        }
    }

    #[inline]
    pub fn int(n: i32) -> Self {
        Self::new(ValueKind::Int(n))
    }

    #[inline]
    pub fn float(f: f32) -> Self {
        Self::new(ValueKind::Float(f))
    }

    #[inline]
    pub fn bool(b: bool) -> Self {
        Self::new(ValueKind::Bool(b))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Self::new(ValueKind::Str(s.into()))
    }

    #[inline]
    pub fn void() -> Self {
        Self::new(ValueKind::Void)
    }

    /// Zero value of a declared type: `0`, `0.0`, `false`, `""`, else void.
    pub fn zero_of(ty: &TypeInfo) -> Self {
        match ty {
            TypeInfo::Int => Self::int(0),
            TypeInfo::Float => Self::float(0.0),
            TypeInfo::Bool => Self::bool(false),
            TypeInfo::String => Self::string(""),
            TypeInfo::Void | TypeInfo::Class(_) | TypeInfo::Unknown => Self::void(),
        }
    }

    /// Mark this value as a `return` result in flight.
    #[must_use]
    pub fn into_return(mut self) -> Self {
        self.returning = true;
        self
    }

    #[inline]
    pub fn is_return(&self) -> bool {
        self.returning
    }

    #[inline]
    pub fn is_void(&self) -> bool {
        matches!(self.kind, ValueKind::Void)
    }

    /// Whether this is exactly `Bool(true)`. Conditions of any other kind are false.
    #[inline]
    pub fn is_true(&self) -> bool {
        matches!(self.kind, ValueKind::Bool(true))
    }

    pub fn type_name(&self) -> &'static str {
        match self.kind {
            ValueKind::Int(_) => "int",
            ValueKind::Float(_) => "float",
            ValueKind::Bool(_) => "bool",
            ValueKind::Str(_) => "string",
            ValueKind::Void => "void",
        }
    }

    // Field reads. Binary operators pick the field matching the left operand
    // and read it from the right operand whatever its tag; a value of another
    // kind reads as the field's zero.

    pub fn int_field(&self) -> i32 {
        match self.kind {
            ValueKind::Int(n) => n,
            _ => 0,
        }
    }

    pub fn float_field(&self) -> f32 {
        match self.kind {
            ValueKind::Float(f) => f,
            _ => 0.0,
        }
    }

    pub fn bool_field(&self) -> bool {
        matches!(self.kind, ValueKind::Bool(true))
    }

    pub fn str_field(&self) -> &str {
        match &self.kind {
            ValueKind::Str(s) => s,
            _ => "",
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::void()
    }
}

/// Canonical text of a value, as written by `print`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ValueKind::Int(n) => write!(f, "{n}"),
            ValueKind::Float(x) => f.write_str(&float_fmt::format_general(f64::from(*x))),
            ValueKind::Bool(b) => write!(f, "{b}"),
            ValueKind::Str(s) => f.write_str(s),
            ValueKind::Void => f.write_str("void"),
        }
    }
}
