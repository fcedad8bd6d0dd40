//! Semantic analysis for Lumen: lexical scopes and static type inference.
//!
//! # Architecture
//!
//! - [`ScopeManager`]: an arena of [`SymbolTable`]s linked by parent
//!   [`ScopeId`]s, plus the class registry used for member lookup. It also
//!   owns the diagnostic scope dump.
//! - [`TypeChecker`]: the per-run analysis context. It owns a scope manager
//!   and a diagnostic queue, declares symbols while walking a program, and
//!   infers expression types with [`TypeChecker::infer_type`].
//!
//! Inference never aborts. An unresolved identifier is reported, counted and
//! typed `unknown`; everything downstream keeps going.

mod check;
mod scope;
mod symbol;

pub use check::{check_program, is_lvalue, CheckResult, TypeChecker};
pub use lum_ir::TypeInfo;
pub use scope::{DumpError, DuplicateSymbol, ScopeId, ScopeManager, SymbolTable};
pub use symbol::{SymbolInfo, SymbolKind};
