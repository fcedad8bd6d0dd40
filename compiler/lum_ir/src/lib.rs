//! Lumen IR - the tree both semantic passes walk.
//!
//! The parser is an external collaborator: it builds a [`Node`] tree and hands
//! it over fully formed. Nothing in this crate tokenizes source text.
//!
//! # Module Structure
//!
//! - `ast`: the closed node set ([`NodeKind`]) and the diagnostic tree dump
//! - `operators`: operator tokens as they appear on `BinaryExpr` nodes
//! - `literal`: shape-based literal classification shared by checker and evaluator
//! - `type_info`: declared/inferred static types

mod ast;
mod literal;
mod operators;
mod type_info;

pub use ast::{Node, NodeKind, Param};
pub use literal::{string_body, LiteralKind};
pub use operators::{is_boolean_operator, BinaryOp, UnaryOp};
pub use type_info::TypeInfo;
