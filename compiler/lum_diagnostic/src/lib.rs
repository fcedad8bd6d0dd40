//! Diagnostics for the Lumen semantic passes.
//!
//! Diagnostics are plain data. The passes push them into a
//! [`DiagnosticQueue`]; a driver decides when and where to render them with an
//! emitter. Nothing here aborts a pass: semantic errors accumulate so one
//! run can surface all of them.
//!
//! Rendered shape:
//!
//! ```text
//! Error: Semantic Error: Variable 'y' undefined. at line 4
//! Warning: Variable 'x' already declared in this scope. at line 7
//! Error: Division by zero
//! ```
//!
//! The `at line` suffix is present only for diagnostics anchored to a source
//! line (compile-time ones); runtime diagnostics are plain messages.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod queue;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use queue::DiagnosticQueue;
