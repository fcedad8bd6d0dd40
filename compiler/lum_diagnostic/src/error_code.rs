//! Error codes for every diagnostic the core emits.

use std::fmt;

/// Error codes.
///
/// Format: `E####` for errors, `W####` for warnings; the first digit is the
/// phase:
/// - 2xxx: semantic analysis
/// - 6xxx: evaluation
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Semantic (E2xxx / W2xxx)
    /// Identifier used without a visible declaration
    E2001,
    /// Name declared twice in the same scope
    W2002,

    // Runtime (E6xxx)
    /// Variable read before any value was stored under its name
    E6001,
    /// Division by an integer or float zero
    E6002,
    /// Integer arithmetic overflowed `i32`
    E6003,
    /// Literal text that does not fit its classified kind
    E6004,
}

impl ErrorCode {
    /// All codes, for lookup tables and exhaustive tests.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E2001,
        ErrorCode::W2002,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E2001 => "E2001",
            ErrorCode::W2002 => "W2002",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
        }
    }

    /// One-line explanation, for `--explain`-style lookups.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E2001 => "an identifier was used without a visible declaration",
            ErrorCode::W2002 => "a name was declared twice in the same scope; the first declaration is kept",
            ErrorCode::E6001 => "a variable was read before any value was stored under its name",
            ErrorCode::E6002 => "division by zero; the expression evaluates to void",
            ErrorCode::E6003 => "integer arithmetic overflowed; the expression evaluates to void",
            ErrorCode::E6004 => "a literal could not be converted to its value; it evaluates to void",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a code string like `"E2001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}
