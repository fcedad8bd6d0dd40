//! Static type tags.

use std::fmt;

/// Static type of a declaration or an expression.
///
/// Equality is structural: two `Class` types are equal only when their class
/// names match.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeInfo {
    Int,
    Float,
    String,
    Bool,
    Void,
    /// A user-defined class, by name.
    Class(String),
    /// Inference failed or was never attempted.
    #[default]
    Unknown,
}

impl TypeInfo {
    /// Create a class type.
    pub fn class(name: impl Into<String>) -> Self {
        TypeInfo::Class(name.into())
    }

    #[inline]
    pub fn is_unknown(&self) -> bool {
        matches!(self, TypeInfo::Unknown)
    }

    /// The class name, if this is a class type.
    pub fn class_name(&self) -> Option<&str> {
        match self {
            TypeInfo::Class(name) => Some(name),
            _ => None,
        }
    }

    /// Simulated storage size in bytes, used for the symbol-table layout.
    ///
    /// Classes and `void` occupy no simulated storage.
    pub fn size(&self) -> u32 {
        match self {
            TypeInfo::Int => 4,
            TypeInfo::Float => 8,
            TypeInfo::Bool => 1,
            TypeInfo::String => 256,
            TypeInfo::Void | TypeInfo::Class(_) | TypeInfo::Unknown => 0,
        }
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeInfo::Int => f.write_str("int"),
            TypeInfo::Float => f.write_str("float"),
            TypeInfo::String => f.write_str("string"),
            TypeInfo::Bool => f.write_str("bool"),
            TypeInfo::Void => f.write_str("void"),
            TypeInfo::Class(name) => f.write_str(name),
            TypeInfo::Unknown => f.write_str("unknown"),
        }
    }
}
