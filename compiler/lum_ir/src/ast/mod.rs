//! AST node types.
//!
//! The tree is owned top-down: every node exclusively owns its children and
//! nothing points back up or sideways. Both semantic passes take `&Node` and
//! never mutate the tree.
//!
//! Construction helpers (`Node::literal`, `Node::binary`, ...) produce nodes at
//! line 0; parsers attach the real line with [`Node::at_line`].

mod dump;

use crate::TypeInfo;

/// A formal parameter of a function definition.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Param {
    pub ty: TypeInfo,
    pub name: String,
}

impl Param {
    pub fn new(ty: TypeInfo, name: impl Into<String>) -> Self {
        Param {
            ty,
            name: name.into(),
        }
    }
}

/// A node with the source line it was parsed from.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub kind: NodeKind,
    /// 1-based source line, 0 for synthesized nodes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub line: u32,
}

/// The closed set of node kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    /// Root: global declarations followed by the main block.
    Program {
        globals: Vec<Node>,
        main: Option<Box<Node>>,
    },
    Block {
        statements: Vec<Node>,
    },
    VarDecl {
        ty: TypeInfo,
        name: String,
        init: Option<Box<Node>>,
    },
    FuncDef {
        return_type: TypeInfo,
        name: String,
        params: Vec<Param>,
        body: Option<Box<Node>>,
    },
    ClassDef {
        name: String,
        members: Vec<Node>,
    },
    Main {
        body: Option<Box<Node>>,
    },
    /// `if (cond) then`. There is no else branch.
    If {
        condition: Box<Node>,
        then_branch: Box<Node>,
    },
    While {
        condition: Box<Node>,
        body: Box<Node>,
    },
    Print {
        expr: Box<Node>,
    },
    Assign {
        name: String,
        value: Box<Node>,
    },
    MemberAssign {
        object: Box<Node>,
        member: String,
        value: Box<Node>,
    },
    Return {
        expr: Option<Box<Node>>,
    },
    /// Binary operation, or unary when `right` is `None`.
    BinaryExpr {
        op: String,
        left: Box<Node>,
        right: Option<Box<Node>>,
    },
    /// Raw literal text as written in the source (`42`, `3.5`, `"hi"`, `true`).
    Literal {
        text: String,
    },
    Identifier {
        name: String,
    },
    Call {
        callee: String,
        args: Vec<Node>,
    },
    Dot {
        object: Box<Node>,
        member: String,
    },
    MethodCall {
        object: Box<Node>,
        method: String,
        args: Vec<Node>,
    },
}

impl Node {
    #[inline]
    pub fn new(kind: NodeKind, line: u32) -> Self {
        Node { kind, line }
    }

    /// Attach a source line.
    #[must_use]
    pub fn at_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    /// The identifier name, if this is an `Identifier` node.
    pub fn as_identifier(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Identifier { name } => Some(name),
            _ => None,
        }
    }

    pub fn program(globals: Vec<Node>, main: Option<Node>) -> Self {
        Self::from(NodeKind::Program {
            globals,
            main: main.map(Box::new),
        })
    }

    pub fn block(statements: Vec<Node>) -> Self {
        Self::from(NodeKind::Block { statements })
    }

    pub fn var_decl(ty: TypeInfo, name: impl Into<String>, init: Option<Node>) -> Self {
        Self::from(NodeKind::VarDecl {
            ty,
            name: name.into(),
            init: init.map(Box::new),
        })
    }

    pub fn func_def(
        return_type: TypeInfo,
        name: impl Into<String>,
        params: Vec<Param>,
        body: Option<Node>,
    ) -> Self {
        Self::from(NodeKind::FuncDef {
            return_type,
            name: name.into(),
            params,
            body: body.map(Box::new),
        })
    }

    pub fn class_def(name: impl Into<String>, members: Vec<Node>) -> Self {
        Self::from(NodeKind::ClassDef {
            name: name.into(),
            members,
        })
    }

    pub fn main(body: Option<Node>) -> Self {
        Self::from(NodeKind::Main {
            body: body.map(Box::new),
        })
    }

    pub fn if_then(condition: Node, then_branch: Node) -> Self {
        Self::from(NodeKind::If {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
        })
    }

    pub fn while_loop(condition: Node, body: Node) -> Self {
        Self::from(NodeKind::While {
            condition: Box::new(condition),
            body: Box::new(body),
        })
    }

    pub fn print_stmt(expr: Node) -> Self {
        Self::from(NodeKind::Print {
            expr: Box::new(expr),
        })
    }

    pub fn assign(name: impl Into<String>, value: Node) -> Self {
        Self::from(NodeKind::Assign {
            name: name.into(),
            value: Box::new(value),
        })
    }

    pub fn member_assign(object: Node, member: impl Into<String>, value: Node) -> Self {
        Self::from(NodeKind::MemberAssign {
            object: Box::new(object),
            member: member.into(),
            value: Box::new(value),
        })
    }

    pub fn ret(expr: Option<Node>) -> Self {
        Self::from(NodeKind::Return {
            expr: expr.map(Box::new),
        })
    }

    pub fn binary(op: impl Into<String>, left: Node, right: Node) -> Self {
        Self::from(NodeKind::BinaryExpr {
            op: op.into(),
            left: Box::new(left),
            right: Some(Box::new(right)),
        })
    }

    pub fn unary(op: impl Into<String>, operand: Node) -> Self {
        Self::from(NodeKind::BinaryExpr {
            op: op.into(),
            left: Box::new(operand),
            right: None,
        })
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Self::from(NodeKind::Literal { text: text.into() })
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Self::from(NodeKind::Identifier { name: name.into() })
    }

    pub fn call(callee: impl Into<String>, args: Vec<Node>) -> Self {
        Self::from(NodeKind::Call {
            callee: callee.into(),
            args,
        })
    }

    pub fn dot(object: Node, member: impl Into<String>) -> Self {
        Self::from(NodeKind::Dot {
            object: Box::new(object),
            member: member.into(),
        })
    }

    pub fn method_call(object: Node, method: impl Into<String>, args: Vec<Node>) -> Self {
        Self::from(NodeKind::MethodCall {
            object: Box::new(object),
            method: method.into(),
            args,
        })
    }
}

impl From<NodeKind> for Node {
    fn from(kind: NodeKind) -> Self {
        Node::new(kind, 0)
    }
}
