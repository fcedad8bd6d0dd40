//! Lumen Eval - tree-walking interpreter for the Lumen core.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `RuntimeScope`: one flat variable table per run
//! - `evaluate_binary`: left-operand-driven binary operator dispatch
//! - `evaluate_unary`: unary operator dispatch
//! - `Value`: tagged scalar plus the `return` flag
//! - `PrintHandlerImpl`: destination of `print` output and runtime errors

mod environment;
pub mod errors;
pub mod interpreter;
mod operators;
mod print_handler;
mod unary_operators;
mod value;

pub use environment::RuntimeScope;
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{literal_value, Interpreter, InterpreterBuilder};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl, SharedPrintHandler,
    StdoutPrintHandler,
};
pub use unary_operators::evaluate_unary;
pub use value::{Value, ValueKind};
