//! Print handler for configurable output.
//!
//! `print` statements and runtime error lines go through a print handler so
//! their destination can be chosen per run:
//! - Native: stdout for program output, stderr for errors (default)
//! - Tests and embedding: in-memory buffers, one per channel
//!
//! # Performance
//! Uses enum dispatch instead of trait objects on this per-statement path.

use parking_lot::Mutex;

/// Default print handler: program output to stdout, errors to stderr.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }

    /// Print an error line (with newline).
    pub fn eprintln(&self, msg: &str) {
        eprintln!("{msg}");
    }
}

/// Print handler that captures both channels in memory.
pub struct BufferPrintHandler {
    output: Mutex<String>,
    errors: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler {
            output: Mutex::new(String::new()),
            errors: Mutex::new(String::new()),
        }
    }

    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        push_line(&self.output, msg);
    }

    /// Print an error line (with newline).
    pub fn eprintln(&self, msg: &str) {
        push_line(&self.errors, msg);
    }

    /// Everything printed so far.
    pub fn get_output(&self) -> String {
        self.output.lock().clone()
    }

    /// Every error line so far.
    pub fn get_errors(&self) -> String {
        self.errors.lock().clone()
    }

    /// Clear both channels.
    pub fn clear(&self) {
        self.output.lock().clear();
        self.errors.lock().clear();
    }
}

impl Default for BufferPrintHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn push_line(buffer: &Mutex<String>, msg: &str) {
    let mut buf = buffer.lock();
    buf.push_str(msg);
    buf.push('\n');
}

/// Print handler implementation using enum dispatch.
pub enum PrintHandlerImpl {
    /// Writes to stdout/stderr (default).
    Stdout(StdoutPrintHandler),
    /// Captures to buffers.
    Buffer(BufferPrintHandler),
}

impl PrintHandlerImpl {
    /// Print a line of program output.
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
        }
    }

    /// Print a line on the error channel.
    pub fn eprintln(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.eprintln(msg),
            Self::Buffer(h) => h.eprintln(msg),
        }
    }

    /// Captured program output; empty for stdout.
    pub fn get_output(&self) -> String {
        match self {
            Self::Stdout(_) => String::new(),
            Self::Buffer(h) => h.get_output(),
        }
    }

    /// Captured error lines; empty for stdout.
    pub fn get_errors(&self) -> String {
        match self {
            Self::Stdout(_) => String::new(),
            Self::Buffer(h) => h.get_errors(),
        }
    }

    /// Clear captured output. No-op for stdout.
    pub fn clear(&self) {
        match self {
            Self::Stdout(_) => {}
            Self::Buffer(h) => h.clear(),
        }
    }
}

/// Shared print handler that can be passed around.
pub type SharedPrintHandler = std::sync::Arc<PrintHandlerImpl>;

/// Create a default stdout/stderr print handler.
pub fn stdout_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

/// Create a buffer print handler for capturing output.
pub fn buffer_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}
