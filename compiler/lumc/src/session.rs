//! One check-then-run pass over a program.

use std::path::PathBuf;

use lum_diagnostic::DiagnosticQueue;
use lum_eval::{stdout_handler, Interpreter, SharedPrintHandler, Value};
use lum_ir::Node;
use lum_types::{check_program, CheckResult, DumpError};
use tracing::{info, warn};

/// Per-run configuration.
#[derive(Clone, Debug, Default)]
pub struct SessionOptions {
    /// Write the scope dump here after analysis.
    pub dump_scopes: Option<PathBuf>,
    /// Evaluate even when analysis reported semantic errors.
    pub run_despite_errors: bool,
}

/// Failure that stops a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Dump(#[from] DumpError),
}

/// What a session produced.
#[derive(Debug)]
pub struct SessionOutcome {
    pub check: CheckResult,
    /// Final value of the program; `None` when evaluation was skipped.
    pub value: Option<Value>,
    /// Runtime errors, already written to the print handler's error channel.
    pub runtime: DiagnosticQueue,
}

impl SessionOutcome {
    pub fn evaluated(&self) -> bool {
        self.value.is_some()
    }
}

/// Driver state for one program.
pub struct Session {
    options: SessionOptions,
    print_handler: SharedPrintHandler,
}

impl Session {
    /// A session printing to stdout/stderr.
    pub fn new(options: SessionOptions) -> Self {
        Self::with_print_handler(options, stdout_handler())
    }

    pub fn with_print_handler(options: SessionOptions, print_handler: SharedPrintHandler) -> Self {
        Session {
            options,
            print_handler,
        }
    }

    /// Analyze `program`, dump scopes if asked, then evaluate it unless
    /// analysis found errors and the options say to stop.
    pub fn run(&self, program: &Node) -> Result<SessionOutcome, SessionError> {
        let check = self.check(program)?;
        Ok(self.execute(program, check))
    }

    /// Semantic analysis plus the optional scope dump.
    pub fn check(&self, program: &Node) -> Result<CheckResult, SessionError> {
        let check = check_program(program);
        if let Some(path) = &self.options.dump_scopes {
            check.scopes.dump_all_scopes(path)?;
        }
        Ok(check)
    }

    /// Evaluate an analyzed program.
    pub fn execute(&self, program: &Node, check: CheckResult) -> SessionOutcome {
        if check.has_errors() && !self.options.run_despite_errors {
            warn!(
                errors = check.error_count(),
                "semantic errors found, skipping evaluation"
            );
            return SessionOutcome {
                check,
                value: None,
                runtime: DiagnosticQueue::new(),
            };
        }

        let mut interpreter = Interpreter::builder()
            .print_handler(self.print_handler.clone())
            .build();
        let value = interpreter.run(program);
        info!(result = %value, "program finished");

        SessionOutcome {
            check,
            value: Some(value),
            runtime: interpreter.diagnostics().clone(),
        }
    }
}
