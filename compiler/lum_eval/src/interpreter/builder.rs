//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use rustc_hash::FxHashMap;

use super::Interpreter;
use crate::{stdout_handler, RuntimeScope, SharedPrintHandler};
use lum_diagnostic::DiagnosticQueue;

/// Builder for creating Interpreter instances.
#[derive(Default)]
pub struct InterpreterBuilder {
    env: Option<RuntimeScope>,
    print_handler: Option<SharedPrintHandler>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from pre-populated variables instead of an empty store.
    #[must_use]
    pub fn env(mut self, env: RuntimeScope) -> Self {
        self.env = Some(env);
        self
    }

    /// Where `print` output and runtime error lines go. Defaults to stdout/stderr.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            env: self.env.unwrap_or_default(),
            signatures: FxHashMap::default(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            diagnostics: DiagnosticQueue::new(),
        }
    }
}
