//! Indented text dump of a tree, for debugging parser output.

use std::fmt::Write;

use lum_stack::ensure_sufficient_stack;

use super::{Node, NodeKind};

impl Node {
    /// Render the subtree rooted here, starting at `level` (two spaces per level).
    pub fn dump(&self, level: usize) -> String {
        let mut out = String::new();
        self.write_tree(level, &mut out);
        out
    }

    /// Print the subtree to stdout.
    pub fn print(&self, level: usize) {
        print!("{}", self.dump(level));
    }

    fn write_tree(&self, level: usize, out: &mut String) {
        ensure_sufficient_stack(|| self.write_tree_inner(level, out));
    }

    fn write_tree_inner(&self, level: usize, out: &mut String) {
        match &self.kind {
            NodeKind::Program { globals, main } => {
                line(out, level, format_args!("PROGRAM ROOT"));
                for global in globals {
                    global.write_tree(level + 1, out);
                }
                if let Some(main) = main {
                    main.write_tree(level + 1, out);
                }
            }
            NodeKind::Block { statements } => {
                line(out, level, format_args!("Block {{"));
                for stmt in statements {
                    stmt.write_tree(level + 1, out);
                }
                line(out, level, format_args!("}}"));
            }
            NodeKind::VarDecl { name, init, .. } => {
                line(out, level, format_args!("VarDecl: {name}"));
                if let Some(init) = init {
                    init.write_tree(level + 1, out);
                }
            }
            NodeKind::FuncDef {
                name, params, body, ..
            } => {
                line(out, level, format_args!("Function: {name}"));
                line(out, level + 1, format_args!("Params: {}", params.len()));
                for param in params {
                    line(out, level + 2, format_args!("VarDecl: {}", param.name));
                }
                if let Some(body) = body {
                    body.write_tree(level + 1, out);
                }
            }
            NodeKind::ClassDef { name, members } => {
                line(out, level, format_args!("Class: {name}"));
                for member in members {
                    member.write_tree(level + 1, out);
                }
            }
            NodeKind::Main { body } => {
                line(out, level, format_args!("MAIN BLOCK"));
                if let Some(body) = body {
                    body.write_tree(level + 1, out);
                }
            }
            NodeKind::If {
                condition,
                then_branch,
            } => {
                line(out, level, format_args!("If"));
                condition.write_tree(level + 1, out);
                then_branch.write_tree(level + 1, out);
            }
            NodeKind::While { condition, body } => {
                line(out, level, format_args!("While"));
                condition.write_tree(level + 1, out);
                body.write_tree(level + 1, out);
            }
            NodeKind::Print { expr } => {
                line(out, level, format_args!("Print"));
                expr.write_tree(level + 1, out);
            }
            NodeKind::Assign { name, value } => {
                line(out, level, format_args!("Assign: {name}"));
                value.write_tree(level + 1, out);
            }
            NodeKind::MemberAssign {
                object,
                member,
                value,
            } => {
                line(out, level, format_args!("MemberAssign: .{member}"));
                object.write_tree(level + 1, out);
                value.write_tree(level + 1, out);
            }
            NodeKind::Return { expr } => {
                line(out, level, format_args!("Return"));
                if let Some(expr) = expr {
                    expr.write_tree(level + 1, out);
                }
            }
            NodeKind::BinaryExpr { op, left, right } => {
                line(out, level, format_args!("Op: {op}"));
                left.write_tree(level + 1, out);
                if let Some(right) = right {
                    right.write_tree(level + 1, out);
                }
            }
            NodeKind::Literal { text } => line(out, level, format_args!("Literal: {text}")),
            NodeKind::Identifier { name } => line(out, level, format_args!("ID: {name}")),
            NodeKind::Call { callee, args } => {
                line(out, level, format_args!("Call: {callee}"));
                for arg in args {
                    arg.write_tree(level + 1, out);
                }
            }
            NodeKind::Dot { object, member } => {
                line(out, level, format_args!("Access .{member}"));
                object.write_tree(level + 1, out);
            }
            NodeKind::MethodCall {
                object,
                method,
                args,
            } => {
                line(out, level, format_args!("MethodCall: .{method}"));
                object.write_tree(level + 1, out);
                for arg in args {
                    arg.write_tree(level + 1, out);
                }
            }
        }
    }
}

fn line(out: &mut String, level: usize, text: std::fmt::Arguments<'_>) {
    for _ in 0..level {
        out.push_str("  ");
    }
    // Writing into a String cannot fail.
    let _ = out.write_fmt(text);
    out.push('\n');
}
