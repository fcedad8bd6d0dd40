//! Symbol-table entries.

use std::fmt;

use lum_ir::TypeInfo;

/// What a symbol names.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SymbolKind {
    Variable,
    Function,
    Class,
}

impl SymbolKind {
    /// Capitalized name, for the start of a message.
    pub fn title(self) -> &'static str {
        match self {
            SymbolKind::Variable => "Variable",
            SymbolKind::Function => "Function",
            SymbolKind::Class => "Class",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolKind::Variable => f.write_str("variable"),
            SymbolKind::Function => f.write_str("function"),
            SymbolKind::Class => f.write_str("class"),
        }
    }
}

/// A declared name.
///
/// `size` and `offset` describe a simulated storage layout inside the
/// declaring scope. They are informational and never read by evaluation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SymbolInfo {
    pub name: String,
    /// Variable type, function return type, or the class type itself.
    pub ty: TypeInfo,
    pub kind: SymbolKind,
    /// Class of a class-typed variable.
    pub class_name: Option<String>,
    /// Parameter types, for functions.
    pub param_types: Vec<TypeInfo>,
    pub size: u32,
    /// Assigned by the scope on insertion.
    pub offset: u32,
    /// Last known value, shown in the scope dump.
    pub value: Option<String>,
}

impl SymbolInfo {
    pub fn new(name: impl Into<String>, ty: TypeInfo, kind: SymbolKind) -> Self {
        let class_name = ty.class_name().map(str::to_owned);
        let size = ty.size();
        SymbolInfo {
            name: name.into(),
            ty,
            kind,
            class_name,
            param_types: Vec::new(),
            size,
            offset: 0,
            value: None,
        }
    }

    pub fn variable(name: impl Into<String>, ty: TypeInfo) -> Self {
        Self::new(name, ty, SymbolKind::Variable)
    }

    pub fn function(name: impl Into<String>, return_type: TypeInfo) -> Self {
        Self::new(name, return_type, SymbolKind::Function)
    }

    /// A class declaration; its type is the class itself.
    pub fn class(name: impl Into<String>) -> Self {
        let name = name.into();
        let ty = TypeInfo::Class(name.clone());
        Self::new(name, ty, SymbolKind::Class)
    }

    #[must_use]
    pub fn with_params(mut self, params: Vec<TypeInfo>) -> Self {
        self.param_types = params;
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[inline]
    pub fn is_function(&self) -> bool {
        self.kind == SymbolKind::Function
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_follows_type() {
        assert_eq!(SymbolInfo::variable("s", TypeInfo::String).size, 256);
        assert_eq!(SymbolInfo::variable("f", TypeInfo::Float).size, 8);
        assert_eq!(SymbolInfo::function("g", TypeInfo::Void).size, 0);
    }

    #[test]
    fn class_typed_variable_records_class_name() {
        let sym = SymbolInfo::variable("p", TypeInfo::class("Point"));
        assert_eq!(sym.class_name.as_deref(), Some("Point"));
        assert_eq!(SymbolInfo::variable("n", TypeInfo::Int).class_name, None);
    }

    #[test]
    fn class_symbol_has_its_own_type() {
        let sym = SymbolInfo::class("Point");
        assert_eq!(sym.ty, TypeInfo::class("Point"));
        assert_eq!(sym.kind.to_string(), "class");
    }
}
