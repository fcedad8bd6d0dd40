//! Stack growth guard for the recursive passes.
//!
//! Both the type checker and the interpreter walk the AST by plain recursion,
//! so their depth equals the nesting depth of the analyzed program. Each
//! recursive step is wrapped in [`ensure_sufficient_stack`], which grows the
//! stack on native targets instead of overflowing on pathologically deep trees
//! (a `while` nested ten thousand blocks deep, a long left-leaning `+` chain).
//!
//! - **Native targets**: `stacker` allocates a fresh segment when less than the
//!   red zone remains.
//! - **WASM targets**: passthrough.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, growing the stack first if the red zone has been reached.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
