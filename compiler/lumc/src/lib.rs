//! Lumen driver.
//!
//! Wires the two passes together for one program: semantic analysis with
//! `lum_types`, an optional scope dump, then evaluation with `lum_eval`.
//! Programs arrive as pre-built trees; [`load_program`] reads one serialized
//! as JSON.

mod load;
mod session;
mod tracing_setup;

pub use load::{load_program, parse_program, LoadError};
pub use session::{Session, SessionError, SessionOptions, SessionOutcome};
pub use tracing_setup::init_tracing;
