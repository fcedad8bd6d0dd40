//! Declaration walk and expression type inference.
//!
//! [`TypeChecker::check_program`] walks a whole tree, opening the same scopes
//! the language's block structure implies and declaring every variable,
//! function, parameter and class it meets. Expressions are typed with
//! [`TypeChecker::infer_type`], which reports unresolved identifiers and
//! otherwise stays silent: a type it cannot decide is `unknown`.

use lum_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode};
use lum_ir::{is_boolean_operator, string_body, LiteralKind, Node, NodeKind, Param, TypeInfo};
use lum_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::{ScopeManager, SymbolInfo};

/// Outcome of analyzing one program.
#[derive(Clone, Debug)]
pub struct CheckResult {
    /// Every scope created during the walk, for lookups and the scope dump.
    pub scopes: ScopeManager,
    pub diagnostics: DiagnosticQueue,
}

impl CheckResult {
    /// Number of semantic errors. Redeclaration warnings are not counted.
    pub fn error_count(&self) -> usize {
        self.diagnostics.error_count()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }
}

/// Analyze a program from a fresh global scope.
pub fn check_program(program: &Node) -> CheckResult {
    let mut checker = TypeChecker::new();
    checker.check_program(program);
    checker.finish()
}

/// Whether `node` can stand on the left of an assignment.
pub fn is_lvalue(node: &Node) -> bool {
    matches!(node.kind, NodeKind::Identifier { .. } | NodeKind::Dot { .. })
}

/// Per-run analysis context.
#[derive(Debug, Default)]
pub struct TypeChecker {
    scopes: ScopeManager,
    diagnostics: DiagnosticQueue,
}

impl TypeChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing scopes, e.g. globals declared by an embedding tool.
    pub fn with_scopes(scopes: ScopeManager) -> Self {
        TypeChecker {
            scopes,
            diagnostics: DiagnosticQueue::new(),
        }
    }

    pub fn scopes(&self) -> &ScopeManager {
        &self.scopes
    }

    pub fn scopes_mut(&mut self) -> &mut ScopeManager {
        &mut self.scopes
    }

    pub fn diagnostics(&self) -> &DiagnosticQueue {
        &self.diagnostics
    }

    /// Semantic errors reported so far.
    pub fn error_count(&self) -> usize {
        self.diagnostics.error_count()
    }

    pub fn finish(self) -> CheckResult {
        CheckResult {
            scopes: self.scopes,
            diagnostics: self.diagnostics,
        }
    }

    /// Walk a whole program, declaring symbols and inferring every expression.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn check_program(&mut self, program: &Node) {
        self.check_node(program);
        debug!(
            errors = self.diagnostics.error_count(),
            warnings = self.diagnostics.warning_count(),
            "semantic analysis finished"
        );
    }

    fn check_node(&mut self, node: &Node) {
        ensure_sufficient_stack(|| self.check_node_inner(node));
    }

    fn check_node_inner(&mut self, node: &Node) {
        match &node.kind {
            NodeKind::Program { globals, main } => {
                for global in globals {
                    self.check_node(global);
                }
                if let Some(main) = main {
                    self.check_node(main);
                }
            }
            NodeKind::VarDecl { ty, name, init } => {
                let mut sym = SymbolInfo::variable(name.as_str(), ty.clone());
                if let Some(init) = init {
                    self.infer_type(init);
                    if let NodeKind::Literal { text } = &init.kind {
                        sym = sym.with_value(literal_display(text));
                    }
                }
                self.declare(sym, node.line);
            }
            NodeKind::FuncDef {
                return_type,
                name,
                params,
                body,
            } => {
                let sym = SymbolInfo::function(name.as_str(), return_type.clone());
                if self.declare(sym, node.line) {
                    let param_types = params.iter().map(|p| p.ty.clone()).collect();
                    self.scopes.update_function_params(name, param_types);
                }
                self.scopes.enter_scope(name.as_str());
                for Param { ty, name } in params {
                    self.declare(SymbolInfo::variable(name.as_str(), ty.clone()), node.line);
                }
                if let Some(body) = body {
                    self.check_body(body);
                }
                self.scopes.exit_scope();
            }
            NodeKind::ClassDef { name, members } => {
                self.declare(SymbolInfo::class(name.as_str()), node.line);
                self.scopes.enter_scope(name.as_str());
                for member in members {
                    self.check_node(member);
                }
                self.scopes.save_class_scope(name.as_str());
                self.scopes.exit_scope();
            }
            NodeKind::Main { body } => {
                self.scopes.enter_scope("main");
                if let Some(body) = body {
                    self.check_body(body);
                }
                self.scopes.exit_scope();
            }
            NodeKind::Block { statements } => {
                self.scopes.enter_scope("block");
                for stmt in statements {
                    self.check_node(stmt);
                }
                self.scopes.exit_scope();
            }
            NodeKind::If {
                condition,
                then_branch: body,
            }
            | NodeKind::While { condition, body } => {
                self.infer_type(condition);
                self.check_node(body);
            }
            NodeKind::Print { expr } => {
                self.infer_type(expr);
            }
            NodeKind::Return { expr } => {
                if let Some(expr) = expr {
                    self.infer_type(expr);
                }
            }
            _ => {
                self.infer_type(node);
            }
        }
    }

    /// A function or main body: a block's statements share the enclosing scope.
    fn check_body(&mut self, body: &Node) {
        match &body.kind {
            NodeKind::Block { statements } => {
                for stmt in statements {
                    self.check_node(stmt);
                }
            }
            _ => self.check_node(body),
        }
    }

    /// Add a symbol to the current scope, warning on redeclaration.
    fn declare(&mut self, sym: SymbolInfo, line: u32) -> bool {
        let kind = sym.kind;
        match self.scopes.add_symbol(sym) {
            Ok(()) => true,
            Err(dup) => {
                self.diagnostics.push(
                    Diagnostic::warning(ErrorCode::W2002)
                        .with_message(format!(
                            "{} '{}' already declared in this scope.",
                            kind.title(),
                            dup.name
                        ))
                        .with_line(line)
                        .with_note("the first declaration is kept"),
                );
                false
            }
        }
    }

    /// Static type of an expression.
    ///
    /// Unresolved identifiers are reported as semantic errors; nothing else
    /// is. Call and method arguments and assigned values are inferred for
    /// their diagnostics even when they do not affect the result.
    pub fn infer_type(&mut self, node: &Node) -> TypeInfo {
        ensure_sufficient_stack(|| self.infer_type_inner(node))
    }

    fn infer_type_inner(&mut self, node: &Node) -> TypeInfo {
        match &node.kind {
            NodeKind::Literal { text } => match LiteralKind::classify(text) {
                LiteralKind::Int => TypeInfo::Int,
                LiteralKind::Float => TypeInfo::Float,
                LiteralKind::Bool => TypeInfo::Bool,
                LiteralKind::Str => TypeInfo::String,
            },
            NodeKind::Identifier { name } => {
                if let Some(sym) = self.scopes.lookup(name) {
                    return sym.ty.clone();
                }
                self.diagnostics.push(
                    Diagnostic::error(ErrorCode::E2001)
                        .with_message(format!("Semantic Error: Variable '{name}' undefined."))
                        .with_line(node.line),
                );
                TypeInfo::Unknown
            }
            NodeKind::Assign { name, value } => {
                self.infer_type(value);
                self.lookup_type(name)
            }
            NodeKind::BinaryExpr { op, left, right } => {
                let left = self.infer_type(left);
                let right = match right {
                    Some(right) => self.infer_type(right),
                    None => TypeInfo::Unknown,
                };
                if is_boolean_operator(op) {
                    TypeInfo::Bool
                } else if left.is_unknown() || right.is_unknown() || left != right {
                    TypeInfo::Unknown
                } else {
                    left
                }
            }
            NodeKind::Call { callee, args } => {
                for arg in args {
                    self.infer_type(arg);
                }
                self.lookup_type(callee)
            }
            NodeKind::Dot { object, member } => self
                .member_of(object, member)
                .map_or(TypeInfo::Unknown, |sym| sym.ty.clone()),
            NodeKind::MemberAssign { value, .. } => self.infer_type(value),
            NodeKind::MethodCall {
                object,
                method,
                args,
            } => {
                for arg in args {
                    self.infer_type(arg);
                }
                let Some(class) = object
                    .as_identifier()
                    .and_then(|name| self.scopes.lookup(name))
                    .and_then(|sym| sym.ty.class_name())
                else {
                    return TypeInfo::Unknown;
                };
                self.scopes
                    .lookup_in_class(class, method)
                    .filter(|sym| sym.is_function())
                    .map_or(TypeInfo::Unknown, |sym| sym.ty.clone())
            }
            _ => TypeInfo::Unknown,
        }
    }

    fn lookup_type(&self, name: &str) -> TypeInfo {
        self.scopes
            .lookup(name)
            .map_or(TypeInfo::Unknown, |sym| sym.ty.clone())
    }

    /// Symbol named by `object.member`.
    ///
    /// `object` must be a bound identifier. The class of its type is searched
    /// first; if that finds nothing and the name is itself a registered class,
    /// that class is searched.
    fn member_of(&self, object: &Node, member: &str) -> Option<&SymbolInfo> {
        let name = object.as_identifier()?;
        let sym = self.scopes.lookup(name)?;
        sym.ty
            .class_name()
            .and_then(|class| self.scopes.lookup_in_class(class, member))
            .or_else(|| {
                if self.scopes.is_class(name) {
                    self.scopes.lookup_in_class(name, member)
                } else {
                    None
                }
            })
    }
}

/// Text recorded as a variable's last-known value.
fn literal_display(text: &str) -> &str {
    match LiteralKind::classify(text) {
        LiteralKind::Str => string_body(text),
        _ => text,
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
