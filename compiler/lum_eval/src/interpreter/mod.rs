//! Tree-walking interpreter for Lumen.
//!
//! # Architecture
//!
//! [`Interpreter::eval`] is one `match` over [`NodeKind`], recursing directly
//! into children against a single flat [`RuntimeScope`]. There is no
//! unwinding: `return` produces a value with its return flag set, and `Block`
//! and `While` stop as soon as a child hands one back.
//!
//! Runtime errors never stop the run. Each is written to the print handler's
//! error channel, kept in [`Interpreter::diagnostics`], and replaced by
//! `void`.
//!
//! Function bodies are not executed. Evaluating a `FuncDef` records the
//! declared return type, and a call to that name yields the zero value of
//! that type. Member access and method calls yield `void`.

mod builder;

pub use builder::InterpreterBuilder;

use lum_diagnostic::DiagnosticQueue;
use lum_ir::{string_body, BinaryOp, LiteralKind, Node, NodeKind, TypeInfo, UnaryOp};
use lum_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::errors::{malformed_literal, unbound_variable, EvalError};
use crate::{evaluate_binary, evaluate_unary, RuntimeScope, SharedPrintHandler, Value};

/// Per-run evaluation context.
pub struct Interpreter {
    env: RuntimeScope,
    /// Declared return types of every `FuncDef` evaluated so far.
    signatures: FxHashMap<String, TypeInfo>,
    print_handler: SharedPrintHandler,
    diagnostics: DiagnosticQueue,
}

impl Interpreter {
    /// An interpreter printing to stdout/stderr.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Evaluate a whole program and return its final value.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&mut self, program: &Node) -> Value {
        let result = self.eval(program);
        debug!(
            runtime_errors = self.diagnostics.error_count(),
            result = %result,
            "evaluation finished"
        );
        result
    }

    /// Evaluate one node.
    pub fn eval(&mut self, node: &Node) -> Value {
        ensure_sufficient_stack(|| self.eval_inner(node))
    }

    pub fn env(&self) -> &RuntimeScope {
        &self.env
    }

    /// Runtime errors reported so far, in order.
    pub fn diagnostics(&self) -> &DiagnosticQueue {
        &self.diagnostics
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    fn eval_inner(&mut self, node: &Node) -> Value {
        match &node.kind {
            NodeKind::Program { globals, main } => {
                for global in globals {
                    self.eval(global);
                }
                self.eval_opt(main.as_deref())
            }
            NodeKind::Main { body } => self.eval_opt(body.as_deref()),
            NodeKind::Block { statements } => {
                for stmt in statements {
                    let value = self.eval(stmt);
                    if value.is_return() {
                        return value;
                    }
                }
                Value::void()
            }
            NodeKind::VarDecl { ty, name, init } => {
                let value = match init {
                    Some(init) => self.eval(init),
                    None => Value::zero_of(ty),
                };
                self.env.define(name, value);
                Value::void()
            }
            NodeKind::FuncDef {
                return_type, name, ..
            } => {
                self.signatures.insert(name.clone(), return_type.clone());
                Value::void()
            }
            NodeKind::ClassDef { .. } | NodeKind::Dot { .. } | NodeKind::MethodCall { .. } => {
                Value::void()
            }
            NodeKind::If {
                condition,
                then_branch,
            } => {
                if self.eval(condition).is_true() {
                    self.eval(then_branch)
                } else {
                    Value::void()
                }
            }
            NodeKind::While { condition, body } => {
                let mut last = Value::void();
                while self.eval(condition).is_true() {
                    last = self.eval(body);
                    if last.is_return() {
                        break;
                    }
                }
                last
            }
            NodeKind::Print { expr } => {
                let value = self.eval(expr);
                self.print_handler.println(&value.to_string());
                value
            }
            NodeKind::Assign { name, value } => {
                let value = self.eval(value);
                self.env.assign(name, value.clone());
                value
            }
            NodeKind::MemberAssign { value, .. } => self.eval(value),
            NodeKind::Return { expr } => self.eval_opt(expr.as_deref()).into_return(),
            NodeKind::BinaryExpr { op, left, right } => {
                let left = self.eval(left);
                let Some(right) = right else {
                    return UnaryOp::from_token(op)
                        .map_or_else(Value::void, |op| evaluate_unary(&left, op));
                };
                let right = self.eval(right);
                let Some(op) = BinaryOp::from_token(op) else {
                    return Value::void();
                };
                match evaluate_binary(&left, &right, op) {
                    Ok(value) => value,
                    Err(err) => self.report(&err),
                }
            }
            NodeKind::Literal { text } => match literal_value(text) {
                Ok(value) => value,
                Err(err) => self.report(&err),
            },
            NodeKind::Identifier { name } => match self.env.lookup(name) {
                Some(value) => value.clone(),
                None => self.report(&unbound_variable(name)),
            },
            NodeKind::Call { callee, .. } => self
                .signatures
                .get(callee)
                .map_or_else(Value::void, Value::zero_of),
        }
    }

    fn eval_opt(&mut self, node: Option<&Node>) -> Value {
        node.map_or_else(Value::void, |node| self.eval(node))
    }

    /// Record a runtime error and yield the `void` that replaces the failed expression.
    #[cold]
    fn report(&mut self, err: &EvalError) -> Value {
        debug!(%err, "runtime error");
        let diag = err.to_diagnostic();
        self.print_handler.eprintln(&diag.to_string());
        self.diagnostics.push(diag);
        Value::void()
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// The value a literal's text denotes, by the same shape rules the type checker uses.
pub fn literal_value(text: &str) -> Result<Value, EvalError> {
    match LiteralKind::classify(text) {
        LiteralKind::Str => Ok(Value::string(string_body(text))),
        LiteralKind::Bool => Ok(Value::bool(text == "true")),
        LiteralKind::Float => text
            .parse::<f32>()
            .map(Value::float)
            .map_err(|_| malformed_literal(text, "float")),
        LiteralKind::Int => text
            .parse::<i32>()
            .map(Value::int)
            .map_err(|_| malformed_literal(text, "int")),
    }
}
