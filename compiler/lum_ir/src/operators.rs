//! Operator tokens.
//!
//! `BinaryExpr` nodes store their operator as the raw token the parser saw.
//! Tokens outside the known set are legal in the tree: the checker treats
//! them with the generic operand-matching rule and the evaluator yields
//! `void` for them.

/// Binary operators with defined semantics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    And,
    Or,
}

impl BinaryOp {
    /// Parse an operator token.
    pub fn from_token(token: &str) -> Option<Self> {
        let op = match token {
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" => Self::Mul,
            "/" => Self::Div,
            "==" => Self::Eq,
            "!=" => Self::NotEq,
            "<" => Self::Lt,
            "<=" => Self::LtEq,
            ">" => Self::Gt,
            ">=" => Self::GtEq,
            "&&" => Self::And,
            "||" => Self::Or,
            _ => return None,
        };
        Some(op)
    }

    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::And => "&&",
            Self::Or => "||",
        }
    }

    /// Comparison, equality and logical operators: statically `bool`.
    pub const fn is_boolean(self) -> bool {
        matches!(
            self,
            Self::Eq
                | Self::NotEq
                | Self::Lt
                | Self::LtEq
                | Self::Gt
                | Self::GtEq
                | Self::And
                | Self::Or
        )
    }
}

/// Unary operators. A `BinaryExpr` without a right operand is unary.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// Logical negation (`!`).
    Not,
}

impl UnaryOp {
    /// Parse an operator token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "!" => Some(Self::Not),
            _ => None,
        }
    }

    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Not => "!",
        }
    }
}

/// Whether an operator token always produces `bool`, whatever its operands.
///
/// Covers `== != < > <= >= && ||` and the unary `!`.
pub fn is_boolean_operator(token: &str) -> bool {
    BinaryOp::from_token(token).is_some_and(BinaryOp::is_boolean)
        || UnaryOp::from_token(token).is_some()
}
