//! Shape-based literal classification.
//!
//! Literal nodes carry only their source text. The kind is recovered from the
//! characters of that text, and both the type checker and the interpreter go
//! through [`LiteralKind::classify`] so the static type of a literal and the
//! runtime value it produces never disagree.

/// Kind of a literal, derived from its text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LiteralKind {
    Int,
    Float,
    Bool,
    Str,
}

impl LiteralKind {
    /// Classify literal text.
    ///
    /// Rules, in order: any `"` makes a string; exactly `true`/`false` is a
    /// bool; any `.` makes a float; everything else is an int.
    pub fn classify(text: &str) -> Self {
        if text.contains('"') {
            LiteralKind::Str
        } else if text == "true" || text == "false" {
            LiteralKind::Bool
        } else if text.contains('.') {
            LiteralKind::Float
        } else {
            LiteralKind::Int
        }
    }
}

/// The body of a string literal: the text minus one leading and one trailing quote.
pub fn string_body(text: &str) -> &str {
    let text = text.strip_prefix('"').unwrap_or(text);
    text.strip_suffix('"').unwrap_or(text)
}
