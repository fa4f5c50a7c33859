use calcite::{
    ast::{ArithOperator, ImplicitMul, Node, Sign, TermOperator, Terminal, TokenKind},
    error::RuntimeError,
    get_result,
    interpreter::{
        evaluator::core::Context,
        value::{complex::ComplexNumber, core::Value},
    },
};
use pretty_assertions::assert_eq;

fn num(text: &str) -> Node {
    Node::number(text, 1)
}

fn ident(name: &str) -> Node {
    Node::ident(name, 1)
}

fn expr_stmt(expr: Node) -> Node {
    Node::Statement(Box::new(Node::ExprStmt(Box::new(expr))))
}

fn factorial(operand: Node) -> Node {
    Node::Atom(Box::new(Node::Factorial { operand: Box::new(operand),
                                          line:    1, }))
}

fn implicit(number: Option<&str>,
            constant: Option<&str>,
            identifiers: &[&str],
            group: Option<Node>)
            -> Node {
    Node::Atom(Box::new(Node::ImplicitMul(ImplicitMul {
        number:      number.map(|n| Terminal::new(TokenKind::Number, n, 1)),
        constant:    constant.map(|c| Terminal::new(TokenKind::Constant, c, 1)),
        identifiers: identifiers.iter()
                                .map(|id| Terminal::new(TokenKind::Identifier, *id, 1))
                                .collect(),
        group:       group.map(Box::new),
        line:        1,
    })))
}

/// Runs a program and returns its result together with everything printed.
fn run(statements: Vec<Node>) -> Result<(Option<Value>, String), RuntimeError> {
    let mut context = Context::with_output(Vec::new());
    let result = context.eval_program(&Node::Program(statements))?;
    let printed = String::from_utf8(context.into_output()).expect("output is UTF-8");
    Ok((result, printed))
}

fn assert_prints(statements: Vec<Node>, expected: &str) {
    match run(statements) {
        Ok((_, printed)) => assert_eq!(printed, expected),
        Err(e) => panic!("Program failed: {e}"),
    }
}

fn value_of(expr: Node) -> Value {
    run(vec![expr_stmt(expr)]).unwrap_or_else(|e| panic!("Program failed: {e}"))
                              .0
                              .expect("expression statement yields a value")
}

fn error_of(statements: Vec<Node>) -> RuntimeError {
    match run(statements) {
        Ok(_) => panic!("Program succeeded but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn unary_plus_then_addition() {
    // print(+1+1);
    let expr = Node::arith(Node::unary(Sign::Plus, num("1")), ArithOperator::Add, num("1"));
    assert_prints(vec![Node::print(expr)], "2\n");
}

#[test]
fn logical_and_of_comparisons() {
    // print(3 > 2 and 2 < 3);
    let expr = Node::And { left:  Box::new(Node::compare(num("3"), vec![(">", num("2"))])),
                           right: Box::new(Node::compare(num("2"), vec![("<", num("3"))])),
                           line:  1, };
    assert_prints(vec![Node::print(expr)], "true\n");
}

#[test]
fn not_of_grouped_or() {
    // print(not(2 == 3 or 3 == 4));
    let or = Node::Or { left:  Box::new(Node::compare(num("2"), vec![("==", num("3"))])),
                        right: Box::new(Node::compare(num("3"), vec![("==", num("4"))])),
                        line:  1, };
    let expr = Node::Not { operand: Box::new(Node::group(or)),
                           line:    1, };
    assert_prints(vec![Node::print(expr)], "true\n");
}

#[test]
fn precedence_follows_tree_shape() {
    // print((2 + 3) * 4); print(2 + 3 * 4); print((5 - 2) / 3);
    let first = Node::term(Node::group(Node::arith(num("2"), ArithOperator::Add, num("3"))),
                           TermOperator::Mul,
                           num("4"));
    let second = Node::arith(num("2"),
                             ArithOperator::Add,
                             Node::term(num("3"), TermOperator::Mul, num("4")));
    let third = Node::term(Node::group(Node::arith(num("5"), ArithOperator::Sub, num("2"))),
                           TermOperator::Div,
                           num("3"));

    assert_prints(vec![Node::print(first), Node::print(second), Node::print(third)],
                  "20\n14\n1\n");
}

#[test]
fn sqrt_power_and_factorial() {
    // print(sqrt(16)); print(2 ^ 5); print(5!);
    assert_prints(vec![Node::print(Node::call("sqrt", vec![num("16")], 1)),
                       Node::print(Node::power(num("2"), num("5"))),
                       Node::print(factorial(num("5")))],
                  "4\n32\n120\n");
}

#[test]
fn vector_length_and_sum() {
    // var vec = [1, 2, 3]; print(len(vec)); print(sum(vec));
    let vector = Node::vector(vec![num("1"), num("2"), num("3")], 1);
    assert_prints(vec![Node::define("vec", vector),
                       Node::print(Node::call("len", vec![ident("vec")], 1)),
                       Node::print(Node::call("sum", vec![ident("vec")], 1))],
                  "3\n6\n");
}

#[test]
fn imaginary_product_collapses_to_number() {
    // print(2i * 2i);
    let expr = Node::term(Node::imaginary("2i", 1),
                          TermOperator::Mul,
                          Node::imaginary("2i", 1));
    assert_prints(vec![Node::print(expr)], "-4\n");
    assert_eq!(value_of(Node::term(Node::imaginary("2i", 1),
                                   TermOperator::Mul,
                                   Node::imaginary("2i", 1))),
               Value::Number(-4.0));
}

#[test]
fn complex_values_print_with_sign() {
    let plus = Node::arith(num("1"), ArithOperator::Add, Node::imaginary("2i", 1));
    let minus = Node::arith(num("1"), ArithOperator::Sub, Node::imaginary("2i", 1));
    let pure = Node::power(Node::imaginary("i", 1), num("3"));

    assert_prints(vec![Node::print(plus), Node::print(minus), Node::print(pure)],
                  "1 + 2i\n1 - 2i\n-1i\n");
}

#[test]
fn matrices_print_as_nested_lists() {
    let row = |a: &str, b: &str| Node::Row(Box::new(Node::ExprList(vec![num(a), num(b)])));
    let matrix = Node::Atom(Box::new(Node::Matrix { rows: vec![row("1", "2"), row("3", "4")],
                                                    line: 1, }));

    assert_prints(vec![Node::print(matrix)], "[[1, 2], [3, 4]]\n");
}

#[test]
fn defining_twice_is_error() {
    let err = error_of(vec![Node::define("x", num("1")), Node::define("x", num("2"))]);
    assert!(matches!(err, RuntimeError::DuplicateDefinition { ref name, .. } if name == "x"));
}

#[test]
fn duplicate_definition_is_reported_before_the_value_is_evaluated() {
    let err = error_of(vec![Node::define("x", num("1")), Node::define("x", ident("missing"))]);
    assert!(matches!(err, RuntimeError::DuplicateDefinition { .. }));
}

#[test]
fn assigning_undefined_variable_is_error() {
    let err = error_of(vec![Node::assign("y", num("1"))]);
    assert!(matches!(err, RuntimeError::UndefinedVariable { ref name, .. } if name == "y"));
}

#[test]
fn assignment_replaces_value() {
    let (result, _) = run(vec![Node::define("x", num("1")),
                               Node::assign("x", num("5")),
                               expr_stmt(ident("x"))]).unwrap();
    assert_eq!(result, Some(Value::Number(5.0)));
}

#[test]
fn implicit_multiplication_matches_explicit() {
    // 2(3 + 4) and 2 * (3 + 4)
    let sum = || Node::arith(num("3"), ArithOperator::Add, num("4"));
    let juxtaposed = implicit(Some("2"), None, &[], Some(sum()));
    let explicit = Node::term(num("2"), TermOperator::Mul, Node::group(sum()));

    assert_eq!(value_of(juxtaposed), Value::Number(14.0));
    assert_eq!(value_of(explicit), Value::Number(14.0));
}

#[test]
fn implicit_multiplication_shapes() {
    let program = |expr: Node| {
        vec![Node::define("a", num("3")), Node::define("b", num("4")), expr_stmt(expr)]
    };
    let result = |expr: Node| run(program(expr)).unwrap().0.unwrap();

    assert_eq!(result(implicit(Some("2"), None, &["a"], None)), Value::Number(6.0));
    assert_eq!(result(implicit(None, None, &["a", "b"], None)), Value::Number(12.0));
    assert_eq!(result(implicit(None, None, &["a"], Some(num("5")))), Value::Number(15.0));
    assert_eq!(result(implicit(None, Some("PI"), &["a"], None)),
               Value::Number(std::f64::consts::PI * 3.0));
}

#[test]
fn unsupported_implicit_multiplication_is_error() {
    let err = error_of(vec![expr_stmt(implicit(Some("2"), Some("pi"), &[], None))]);
    assert!(matches!(err, RuntimeError::UnsupportedImplicitMultiplication { .. }));

    let err = error_of(vec![expr_stmt(implicit(None, None, &["a", "b", "c"], None))]);
    assert!(matches!(err, RuntimeError::UnsupportedImplicitMultiplication { .. }));
}

#[test]
fn comparison_chains() {
    let ascending = Node::compare(num("1"), vec![("<", num("2")), ("<=", num("2"))]);
    let broken = Node::compare(num("3"), vec![("<", num("2")), ("<", ident("missing"))]);
    let single = Node::compare(num("5"), vec![]);

    assert_eq!(value_of(ascending), Value::Boolean(true));
    // The failing first link stops the chain before `missing` is resolved.
    assert_eq!(value_of(broken), Value::Boolean(false));
    assert_eq!(value_of(single), Value::Number(5.0));
}

#[test]
fn unknown_comparison_operator_is_error() {
    let err = error_of(vec![expr_stmt(Node::compare(num("1"), vec![("<>", num("2"))]))]);
    assert!(matches!(err, RuntimeError::UnsupportedOperator { ref operator, .. } if operator == "<>"));
}

#[test]
fn logical_operators_short_circuit() {
    let and = Node::And { left:  Box::new(num("0")),
                          right: Box::new(ident("missing")),
                          line:  1, };
    let or = Node::Or { left:  Box::new(num("2")),
                        right: Box::new(ident("missing")),
                        line:  1, };

    assert_eq!(value_of(and), Value::Boolean(false));
    assert_eq!(value_of(or), Value::Boolean(true));
}

#[test]
fn not_of_valueless_operand_is_true() {
    let expr = Node::Not { operand: Box::new(Node::Blank { line: 1 }),
                           line:    1, };
    assert_eq!(value_of(expr), Value::Boolean(true));
}

#[test]
fn equation_tests_equality_without_binding() {
    let equation = |left: Node, right: Node| {
        Node::Statement(Box::new(Node::EquationStmt(Box::new(Node::Equation { left:  Box::new(left),
                                                                              right: Box::new(right),
                                                                              line:  1, }))))
    };

    let (result, _) =
        run(vec![equation(Node::term(num("0.1"), TermOperator::Mul, num("3")), num("0.3"))]).unwrap();
    assert_eq!(result, Some(Value::Boolean(true)));

    let (result, _) = run(vec![equation(num("1"), num("2"))]).unwrap();
    assert_eq!(result, Some(Value::Boolean(false)));

    let mut context = Context::with_output(Vec::new());
    context.eval_program(&Node::Program(vec![equation(num("1"), num("1"))]))
           .unwrap();
    assert_eq!(context.environment().variables().count(), 0);
}

#[test]
fn constants_are_case_insensitive() {
    assert_eq!(value_of(Node::constant("PI", 1)), Value::Number(std::f64::consts::PI));
    assert_eq!(value_of(Node::constant("e", 1)), Value::Number(std::f64::consts::E));

    let err = error_of(vec![expr_stmt(Node::constant("tau", 1))]);
    assert!(matches!(err, RuntimeError::UnknownConstant { .. }));
}

#[test]
fn identifiers_fall_back_to_constants() {
    assert_eq!(value_of(ident("pi")), Value::Number(std::f64::consts::PI));

    let err = error_of(vec![expr_stmt(ident("zeta"))]);
    assert!(matches!(err, RuntimeError::UnknownIdentifier { ref name, .. } if name == "zeta"));
}

#[test]
fn unknown_call_with_one_argument_multiplies() {
    let (result, _) = run(vec![Node::define("r", num("3")),
                               expr_stmt(Node::call("r", vec![num("2")], 2))]).unwrap();
    assert_eq!(result, Some(Value::Number(6.0)));

    let err = error_of(vec![Node::define("r", num("3")),
                            expr_stmt(Node::call("r", vec![num("2"), num("3")], 2))]);
    assert!(matches!(err, RuntimeError::UnknownFunction { ref name, line: 2 } if name == "r"));
}

#[test]
fn initial_bindings_are_visible() {
    let mut context =
        Context::with_output(Vec::new()).with_bindings([("x".to_string(), Value::Number(4.0))]);
    let result = context.eval_program(&Node::Program(vec![Node::print(Node::power(ident("x"),
                                                                                  num("2")))]))
                        .unwrap();

    assert_eq!(result, Some(Value::Number(16.0)));
    assert_eq!(context.output().as_slice(), b"16\n");
}

#[test]
fn state_persists_within_one_context() {
    let mut context = Context::with_output(Vec::new());
    context.eval_program(&Node::Program(vec![Node::define("x", num("1"))]))
           .unwrap();

    let err = context.eval_program(&Node::Program(vec![Node::define("x", num("2"))]))
                     .unwrap_err();
    assert!(matches!(err, RuntimeError::DuplicateDefinition { .. }));
}

#[test]
fn empty_program_has_no_value() {
    assert_eq!(get_result(&Node::Program(vec![])).unwrap(), None);
    assert_eq!(run(vec![Node::Blank { line: 1 }]).unwrap(), (None, String::new()));
}

#[test]
fn last_statement_decides_the_result() {
    let (result, printed) =
        run(vec![Node::print(num("1")), expr_stmt(num("2")), Node::Blank { line: 3 }]).unwrap();
    assert_eq!(result, None);
    assert_eq!(printed, "1\n");
}

#[test]
fn failure_stops_remaining_statements() {
    let mut context = Context::with_output(Vec::new());
    let program = Node::Program(vec![Node::print(num("1")),
                                     expr_stmt(Node::term(num("1"), TermOperator::Div, num("0"))),
                                     Node::print(num("2"))]);

    assert!(matches!(context.eval_program(&program), Err(RuntimeError::DivisionByZero { .. })));
    assert_eq!(context.into_output(), b"1\n".to_vec());
}

#[test]
fn blank_in_expression_position_is_error() {
    let err = error_of(vec![Node::print(Node::Blank { line: 7 })]);
    assert!(matches!(err, RuntimeError::EmptyExpressionResult { line: 7 }));
}

#[test]
fn error_node_is_unexpected_token() {
    let node = Node::Error(Terminal::new(TokenKind::Symbol, "$", 3));
    let err = error_of(vec![node]);
    assert!(matches!(err, RuntimeError::UnexpectedToken { ref token, line: 3 } if token == "$"));
}

#[test]
fn bare_terminal_yields_its_text() {
    let node = Node::Terminal(Terminal::new(TokenKind::Text, "hello", 1));
    assert_eq!(value_of(node), Value::from("hello"));
}

#[test]
fn atom_around_non_atom_is_error() {
    let wrapped = Node::Atom(Box::new(Node::arith(num("1"), ArithOperator::Add, num("2"))));
    let err = error_of(vec![expr_stmt(wrapped)]);
    assert!(matches!(err, RuntimeError::UnsupportedAtom { .. }));
}

#[test]
fn malformed_literal_is_error() {
    let err = error_of(vec![expr_stmt(num("0xZZ"))]);
    assert!(matches!(err, RuntimeError::InvalidLiteral { .. }));
}

#[test]
fn power_rules() {
    assert_eq!(value_of(Node::power(num("2"), Node::unary(Sign::Minus, num("1")))),
               Value::Number(0.5));
    assert_eq!(value_of(Node::power(num("4"), num("0.5"))), Value::Number(2.0));

    let err = error_of(vec![expr_stmt(Node::power(num("2"), Node::imaginary("i", 1)))]);
    assert!(matches!(err, RuntimeError::ComplexExponentUnsupported { .. }));

    let err = error_of(vec![expr_stmt(Node::power(Node::imaginary("i", 1), num("0.5")))]);
    assert!(matches!(err, RuntimeError::NonIntegerComplexPowerUnsupported { .. }));

    let err = error_of(vec![expr_stmt(Node::power(num("0"), Node::unary(Sign::Minus, num("1"))))]);
    assert!(matches!(err, RuntimeError::DivisionByZero { .. }));
}

#[test]
fn power_is_right_associative_through_nesting() {
    // 2 ^ 3 ^ 2 = 2 ^ 9
    let expr = Node::power(num("2"), Node::power(num("3"), num("2")));
    assert_eq!(value_of(expr), Value::Number(512.0));
}

#[test]
fn factorial_domain() {
    assert_eq!(value_of(factorial(num("0"))), Value::Number(1.0));

    let err = error_of(vec![expr_stmt(factorial(num("2.5")))]);
    assert!(matches!(err, RuntimeError::InvalidFactorialArgument { .. }));

    let err = error_of(vec![expr_stmt(factorial(Node::group(Node::unary(Sign::Minus,
                                                                         num("1")))))]);
    assert!(matches!(err, RuntimeError::InvalidFactorialArgument { .. }));
}

#[test]
fn modulo_follows_dividend_sign() {
    let expr = Node::term(Node::unary(Sign::Minus, num("7")), TermOperator::Mod, num("3"));
    assert_eq!(value_of(expr), Value::Number(-1.0));

    let err = error_of(vec![expr_stmt(Node::term(num("7"), TermOperator::Mod, num("0")))]);
    assert!(matches!(err, RuntimeError::ModuloByZero { .. }));
}

#[test]
fn ordering_rejects_complex_and_strings() {
    let complex = Node::compare(Node::imaginary("i", 1), vec![("<", num("1"))]);
    let err = error_of(vec![expr_stmt(complex)]);
    assert!(matches!(err, RuntimeError::TypeMismatch { .. }));

    // Equality is total across types.
    let text = Node::Terminal(Terminal::new(TokenKind::Text, "1", 1));
    assert_eq!(value_of(Node::compare(text, vec![("==", num("1"))])), Value::Boolean(false));
}

#[test]
fn lists_compare_structurally() {
    let list = |items: &[&str]| Node::vector(items.iter().map(|i| num(i)).collect(), 1);

    assert_eq!(value_of(Node::compare(list(&["1", "2"]), vec![("==", list(&["1", "2"]))])),
               Value::Boolean(true));
    assert_eq!(value_of(Node::compare(list(&["1", "2"]), vec![("==", list(&["1", "3"]))])),
               Value::Boolean(false));
    assert_eq!(value_of(Node::compare(list(&["1"]), vec![("!=", list(&["1", "1"]))])),
               Value::Boolean(true));
}

#[test]
fn arithmetic_on_lists_is_type_mismatch() {
    let expr = Node::arith(Node::vector(vec![num("1")], 1), ArithOperator::Add, num("1"));
    let err = error_of(vec![expr_stmt(expr)]);
    assert!(matches!(err, RuntimeError::TypeMismatch { .. }));
}

#[test]
fn booleans_promote_to_numbers() {
    let truth = Node::compare(num("1"), vec![("<", num("2"))]);
    let expr = Node::arith(Node::group(truth), ArithOperator::Add, num("1"));
    assert_eq!(value_of(expr), Value::Number(2.0));
}

#[test]
fn radix_literals() {
    assert_eq!(value_of(num("0b1010")), Value::Number(10.0));
    assert_eq!(value_of(num("0o777")), Value::Number(511.0));
    assert_eq!(value_of(num("0xff")), Value::Number(255.0));
    assert_eq!(value_of(Node::imaginary("-i", 1)),
               Value::Complex(ComplexNumber::new(0.0, -1.0)));
}

#[test]
fn error_messages_name_the_line() {
    let err = error_of(vec![Node::assign("y", Node::number("1", 12))]);
    assert_eq!(err.to_string(), "Error on line 12: Variable 'y' is not defined.");
}
