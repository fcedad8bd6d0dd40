use pretty_assertions::assert_eq;

use super::*;
use crate::SymbolKind;
use lum_diagnostic::Severity;

fn checker_with(symbols: Vec<SymbolInfo>) -> TypeChecker {
    let mut checker = TypeChecker::new();
    for sym in symbols {
        checker.scopes_mut().add_symbol(sym).unwrap();
    }
    checker
}

fn messages(result: &CheckResult) -> Vec<String> {
    result
        .diagnostics
        .diagnostics()
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// `class Point { int x; int norm() {} }` plus `Point p;` in the global scope.
fn point_program(main_body: Vec<Node>) -> Node {
    Node::program(
        vec![
            Node::var_decl(TypeInfo::Int, "g", None),
            Node::class_def(
                "Point",
                vec![
                    Node::var_decl(TypeInfo::Int, "x", None),
                    Node::func_def(TypeInfo::Float, "norm", vec![], Some(Node::block(vec![]))),
                ],
            ),
            Node::var_decl(TypeInfo::class("Point"), "p", None),
        ],
        Some(Node::main(Some(Node::block(main_body)))),
    )
}

// Literals

#[test]
fn literal_shapes() {
    let mut checker = TypeChecker::new();
    assert_eq!(checker.infer_type(&Node::literal("42")), TypeInfo::Int);
    assert_eq!(checker.infer_type(&Node::literal("4.2")), TypeInfo::Float);
    assert_eq!(checker.infer_type(&Node::literal("true")), TypeInfo::Bool);
    assert_eq!(checker.infer_type(&Node::literal("\"4.2\"")), TypeInfo::String);
    assert_eq!(checker.error_count(), 0);
}

// Identifiers

#[test]
fn identifier_resolves_nearest_binding() {
    let mut checker = checker_with(vec![SymbolInfo::variable("x", TypeInfo::Int)]);
    checker.scopes_mut().enter_scope("block");
    checker
        .scopes_mut()
        .add_symbol(SymbolInfo::variable("x", TypeInfo::Bool))
        .unwrap();
    assert_eq!(checker.infer_type(&Node::ident("x")), TypeInfo::Bool);
    checker.scopes_mut().exit_scope();
    assert_eq!(checker.infer_type(&Node::ident("x")), TypeInfo::Int);
}

#[test]
fn undefined_identifier_is_counted_and_unknown() {
    let mut checker = TypeChecker::new();
    let ty = checker.infer_type(&Node::ident("ghost").at_line(7));
    assert_eq!(ty, TypeInfo::Unknown);
    assert_eq!(checker.error_count(), 1);

    let diag = &checker.diagnostics().diagnostics()[0];
    assert_eq!(diag.code, ErrorCode::E2001);
    assert_eq!(
        diag.to_string(),
        "Error: Semantic Error: Variable 'ghost' undefined. at line 7"
    );
}

#[test]
fn errors_accumulate() {
    let mut checker = TypeChecker::new();
    checker.infer_type(&Node::binary("+", Node::ident("a"), Node::ident("b")));
    checker.infer_type(&Node::ident("c"));
    assert_eq!(checker.error_count(), 3);
}

// Assignment

#[test]
fn assign_takes_left_hand_type() {
    let mut checker = checker_with(vec![SymbolInfo::variable("x", TypeInfo::Float)]);
    let node = Node::assign("x", Node::literal("\"text\""));
    assert_eq!(checker.infer_type(&node), TypeInfo::Float);
}

#[test]
fn assign_to_undeclared_is_unknown_without_error() {
    let mut checker = TypeChecker::new();
    assert_eq!(
        checker.infer_type(&Node::assign("y", Node::literal("1"))),
        TypeInfo::Unknown
    );
    assert_eq!(checker.error_count(), 0);
}

#[test]
fn assign_value_is_still_checked() {
    let mut checker = checker_with(vec![SymbolInfo::variable("x", TypeInfo::Int)]);
    checker.infer_type(&Node::assign("x", Node::ident("nope")));
    assert_eq!(checker.error_count(), 1);
}

// Binary and unary expressions

#[test]
fn boolean_operators_are_bool_regardless_of_operands() {
    let mut checker = TypeChecker::new();
    for op in ["==", "!=", "<", ">", "<=", ">=", "&&", "||"] {
        let node = Node::binary(op, Node::literal("1"), Node::literal("\"s\""));
        assert_eq!(checker.infer_type(&node), TypeInfo::Bool, "operator {op}");
    }
    assert_eq!(
        checker.infer_type(&Node::unary("!", Node::literal("3"))),
        TypeInfo::Bool
    );
}

#[test]
fn boolean_operator_still_reports_undefined_operands() {
    let mut checker = TypeChecker::new();
    let node = Node::binary("<", Node::ident("i"), Node::literal("10"));
    assert_eq!(checker.infer_type(&node), TypeInfo::Bool);
    assert_eq!(checker.error_count(), 1);
}

#[test]
fn arithmetic_requires_matching_operands() {
    let mut checker = TypeChecker::new();
    let same = Node::binary("+", Node::literal("1"), Node::literal("2"));
    let mixed = Node::binary("*", Node::literal("1"), Node::literal("2.0"));
    let strings = Node::binary("+", Node::literal("\"a\""), Node::literal("\"b\""));
    assert_eq!(checker.infer_type(&same), TypeInfo::Int);
    assert_eq!(checker.infer_type(&mixed), TypeInfo::Unknown);
    assert_eq!(checker.infer_type(&strings), TypeInfo::String);
    assert_eq!(checker.error_count(), 0);
}

#[test]
fn unknown_operand_propagates() {
    let mut checker = checker_with(vec![SymbolInfo::variable("p", TypeInfo::class("Point"))]);
    let node = Node::binary("+", Node::dot(Node::ident("p"), "missing"), Node::literal("1"));
    assert_eq!(checker.infer_type(&node), TypeInfo::Unknown);
    assert_eq!(checker.error_count(), 0);
}

#[test]
fn non_boolean_unary_is_unknown() {
    let mut checker = TypeChecker::new();
    assert_eq!(
        checker.infer_type(&Node::unary("-", Node::literal("3"))),
        TypeInfo::Unknown
    );
}

#[test]
fn matching_class_operands_keep_class_type() {
    let mut checker = checker_with(vec![
        SymbolInfo::variable("a", TypeInfo::class("V")),
        SymbolInfo::variable("b", TypeInfo::class("V")),
        SymbolInfo::variable("c", TypeInfo::class("W")),
    ]);
    let same = Node::binary("+", Node::ident("a"), Node::ident("b"));
    let other = Node::binary("+", Node::ident("a"), Node::ident("c"));
    assert_eq!(checker.infer_type(&same), TypeInfo::class("V"));
    assert_eq!(checker.infer_type(&other), TypeInfo::Unknown);
}

// Calls and member access

#[test]
fn call_uses_declared_return_type() {
    let mut checker = checker_with(vec![SymbolInfo::function("f", TypeInfo::String)]);
    assert_eq!(
        checker.infer_type(&Node::call("f", vec![Node::literal("1")])),
        TypeInfo::String
    );
    assert_eq!(checker.infer_type(&Node::call("g", vec![])), TypeInfo::Unknown);
    assert_eq!(checker.error_count(), 0);
}

#[test]
fn call_arguments_are_checked() {
    let mut checker = checker_with(vec![SymbolInfo::function("f", TypeInfo::Int)]);
    let ty = checker.infer_type(&Node::call("f", vec![Node::ident("missing")]));
    assert_eq!(ty, TypeInfo::Int);
    assert_eq!(checker.error_count(), 1);
}

#[test]
fn dot_on_instance_and_on_class_name() {
    let result = check_program(&point_program(vec![]));
    let mut checker = TypeChecker::with_scopes(result.scopes);

    assert_eq!(
        checker.infer_type(&Node::dot(Node::ident("p"), "x")),
        TypeInfo::Int
    );
    assert_eq!(
        checker.infer_type(&Node::dot(Node::ident("Point"), "norm")),
        TypeInfo::Float
    );
    assert_eq!(
        checker.infer_type(&Node::dot(Node::ident("p"), "y")),
        TypeInfo::Unknown
    );
}

#[test]
fn dot_never_reaches_class_ancestors() {
    let result = check_program(&point_program(vec![]));
    let mut checker = TypeChecker::with_scopes(result.scopes);
    // `g` is global and lexically visible from the class body.
    assert_eq!(
        checker.infer_type(&Node::dot(Node::ident("p"), "g")),
        TypeInfo::Unknown
    );
}

#[test]
fn dot_falls_back_to_class_named_like_the_object() {
    let mut checker = TypeChecker::new();
    let scopes = checker.scopes_mut();
    scopes.add_symbol(SymbolInfo::class("Point")).unwrap();
    scopes.enter_scope("Point");
    scopes.add_symbol(SymbolInfo::variable("x", TypeInfo::Float)).unwrap();
    scopes.save_class_scope("Point");
    scopes.exit_scope();
    scopes.enter_scope("main");
    scopes.add_symbol(SymbolInfo::variable("Point", TypeInfo::Int)).unwrap();

    // `Point` now names an int, but the class scope of the same name is still searched.
    assert_eq!(
        checker.infer_type(&Node::dot(Node::ident("Point"), "x")),
        TypeInfo::Float
    );
    assert_eq!(
        checker.infer_type(&Node::dot(Node::ident("Point"), "y")),
        TypeInfo::Unknown
    );
}

#[test]
fn dot_on_unbound_class_name_is_unknown() {
    let mut checker = TypeChecker::new();
    let scopes = checker.scopes_mut();
    scopes.enter_scope("Shape");
    scopes.add_symbol(SymbolInfo::variable("sides", TypeInfo::Int)).unwrap();
    scopes.save_class_scope("Shape");
    scopes.exit_scope();

    assert_eq!(
        checker.infer_type(&Node::dot(Node::ident("Shape"), "sides")),
        TypeInfo::Unknown
    );
    assert_eq!(checker.error_count(), 0);
}

#[test]
fn dot_on_non_class_or_non_identifier_is_unknown() {
    let mut checker = checker_with(vec![SymbolInfo::variable("n", TypeInfo::Int)]);
    assert_eq!(
        checker.infer_type(&Node::dot(Node::ident("n"), "x")),
        TypeInfo::Unknown
    );
    let chained = Node::dot(Node::dot(Node::ident("n"), "a"), "b");
    assert_eq!(checker.infer_type(&chained), TypeInfo::Unknown);
    // Unresolved objects are silent.
    assert_eq!(
        checker.infer_type(&Node::dot(Node::ident("ghost"), "x")),
        TypeInfo::Unknown
    );
    assert_eq!(checker.error_count(), 0);
}

#[test]
fn member_assign_takes_value_type() {
    let mut checker = TypeChecker::new();
    let node = Node::member_assign(Node::ident("p"), "x", Node::literal("2.5"));
    assert_eq!(checker.infer_type(&node), TypeInfo::Float);
}

#[test]
fn method_call_needs_function_member() {
    let result = check_program(&point_program(vec![]));
    let mut checker = TypeChecker::with_scopes(result.scopes);

    let norm = Node::method_call(Node::ident("p"), "norm", vec![]);
    let field = Node::method_call(Node::ident("p"), "x", vec![]);
    let on_class = Node::method_call(Node::ident("g"), "norm", vec![]);
    assert_eq!(checker.infer_type(&norm), TypeInfo::Float);
    assert_eq!(checker.infer_type(&field), TypeInfo::Unknown);
    assert_eq!(checker.infer_type(&on_class), TypeInfo::Unknown);
}

#[test]
fn other_nodes_are_unknown() {
    let mut checker = TypeChecker::new();
    assert_eq!(checker.infer_type(&Node::block(vec![])), TypeInfo::Unknown);
    assert_eq!(
        checker.infer_type(&Node::print_stmt(Node::literal("1"))),
        TypeInfo::Unknown
    );
}

#[test]
fn lvalues() {
    assert!(is_lvalue(&Node::ident("x")));
    assert!(is_lvalue(&Node::dot(Node::ident("p"), "x")));
    assert!(!is_lvalue(&Node::literal("1")));
    assert!(!is_lvalue(&Node::call("f", vec![])));
}

// Whole-program walk

#[test]
fn clean_program_has_no_errors() {
    // int x = 0; main { while (x < 3) { x = x + 1; } print x; }
    let program = Node::program(
        vec![Node::var_decl(TypeInfo::Int, "x", Some(Node::literal("0")))],
        Some(Node::main(Some(Node::block(vec![
            Node::while_loop(
                Node::binary("<", Node::ident("x"), Node::literal("3")),
                Node::block(vec![Node::assign(
                    "x",
                    Node::binary("+", Node::ident("x"), Node::literal("1")),
                )]),
            ),
            Node::print_stmt(Node::ident("x")),
        ])))),
    );
    let result = check_program(&program);
    assert_eq!(result.error_count(), 0);
    assert!(result.diagnostics.is_empty());
}

#[test]
fn undefined_in_print_and_return_is_reported() {
    let program = Node::program(
        vec![Node::func_def(
            TypeInfo::Int,
            "f",
            vec![],
            Some(Node::block(vec![Node::ret(Some(Node::ident("r").at_line(2)))])),
        )],
        Some(Node::main(Some(Node::block(vec![
            Node::print_stmt(Node::ident("q").at_line(4)),
        ])))),
    );
    let result = check_program(&program);
    assert_eq!(result.error_count(), 2);
    assert_eq!(
        messages(&result),
        vec![
            "Error: Semantic Error: Variable 'r' undefined. at line 2",
            "Error: Semantic Error: Variable 'q' undefined. at line 4",
        ]
    );
}

#[test]
fn function_params_are_scoped_to_body() {
    let program = Node::program(
        vec![Node::func_def(
            TypeInfo::Int,
            "add",
            vec![Param::new(TypeInfo::Int, "a"), Param::new(TypeInfo::Int, "b")],
            Some(Node::block(vec![Node::ret(Some(Node::binary(
                "+",
                Node::ident("a"),
                Node::ident("b"),
            )))])),
        )],
        Some(Node::main(Some(Node::block(vec![Node::print_stmt(
            Node::ident("a"),
        )])))),
    );
    let result = check_program(&program);
    assert_eq!(result.error_count(), 1);

    let add = result.scopes.scope(result.scopes.global_scope()).get("add").unwrap();
    assert_eq!(add.kind, SymbolKind::Function);
    assert_eq!(add.param_types, vec![TypeInfo::Int, TypeInfo::Int]);
}

#[test]
fn redeclaration_is_a_warning_not_an_error() {
    let program = Node::program(
        vec![
            Node::var_decl(TypeInfo::Int, "x", Some(Node::literal("1"))),
            Node::var_decl(TypeInfo::Float, "x", None).at_line(3),
        ],
        None,
    );
    let result = check_program(&program);
    assert_eq!(result.error_count(), 0);
    assert_eq!(result.diagnostics.warning_count(), 1);

    let diag = &result.diagnostics.diagnostics()[0];
    assert_eq!(diag.severity, Severity::Warning);
    assert_eq!(diag.code, ErrorCode::W2002);
    assert_eq!(
        diag.to_string(),
        "Warning: Variable 'x' already declared in this scope. at line 3"
    );
    assert_eq!(diag.notes, vec!["the first declaration is kept".to_owned()]);
    assert_eq!(result.scopes.lookup("x").unwrap().ty, TypeInfo::Int);
}

#[test]
fn nested_block_shadowing() {
    // main { int x; { string x; print x; } print x; }
    let program = Node::program(
        vec![],
        Some(Node::main(Some(Node::block(vec![
            Node::var_decl(TypeInfo::Int, "x", None),
            Node::block(vec![
                Node::var_decl(TypeInfo::String, "x", None),
                Node::print_stmt(Node::ident("x")),
            ]),
            Node::print_stmt(Node::ident("x")),
        ])))),
    );
    let result = check_program(&program);
    assert!(result.diagnostics.is_empty());

    let names: Vec<&str> = result.scopes.scopes().map(|(_, t)| t.name()).collect();
    assert_eq!(names, vec!["Global", "main", "block"]);
}

#[test]
fn walk_scope_dump() {
    let program = Node::program(
        vec![
            Node::var_decl(TypeInfo::String, "s", Some(Node::literal("\"hi\""))),
            Node::func_def(
                TypeInfo::Void,
                "f",
                vec![Param::new(TypeInfo::Bool, "flag")],
                Some(Node::block(vec![])),
            ),
        ],
        Some(Node::main(Some(Node::block(vec![])))),
    );
    let result = check_program(&program);

    let mut out = Vec::new();
    result.scopes.write_scopes(&mut out).unwrap();
    let expected = "
===== SCOPE: Global =====
Parent: none
Symbols:
  f : void (function) [Params: 1]
  s : string (variable) [Val: hi]

===== SCOPE: f =====
Parent: Global
Symbols:
  flag : bool (variable)

===== SCOPE: main =====
Parent: Global
Symbols:
  (none)
";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn class_members_declared_in_class_scope() {
    let result = check_program(&point_program(vec![Node::print_stmt(Node::dot(
        Node::ident("p"),
        "x",
    ))]));
    assert_eq!(result.error_count(), 0);
    assert!(result.scopes.is_class("Point"));
    assert!(result.scopes.lookup_in_class("Point", "norm").unwrap().is_function());
    assert!(result.scopes.scope(result.scopes.global_scope()).get("x").is_none());
}

#[test]
fn deep_nesting_does_not_overflow() {
    let mut expr = Node::literal("1");
    for _ in 0..50_000 {
        expr = Node::binary("+", expr, Node::literal("1"));
    }
    let mut checker = TypeChecker::new();
    assert_eq!(checker.infer_type(&expr), TypeInfo::Int);
    // Drop iteratively; the default recursive drop would need a deep stack.
    let mut stack = vec![expr];
    while let Some(node) = stack.pop() {
        if let NodeKind::BinaryExpr { left, right, .. } = node.kind {
            stack.push(*left);
            if let Some(right) = right {
                stack.push(*right);
            }
        }
    }
}
