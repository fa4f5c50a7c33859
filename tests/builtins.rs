use calcite::{
    ast::{Node, Sign, Terminal, TokenKind},
    error::RuntimeError,
    interpreter::{
        evaluator::{core::Context, function::core::BUILTIN_FUNCTIONS},
        value::{complex::ComplexNumber, core::Value},
    },
};
use pretty_assertions::assert_eq;

fn num(text: &str) -> Node {
    Node::number(text, 1)
}

fn call(name: &str, arguments: Vec<Node>) -> Result<Value, RuntimeError> {
    Context::with_output(Vec::new()).evaluate(&Node::call(name, arguments, 1))
}

fn assert_value(name: &str, arguments: Vec<Node>, expected: Value) {
    match call(name, arguments) {
        Ok(value) => assert!(value.equals(&expected), "{name}: {value} != {expected}"),
        Err(e) => panic!("{name} failed: {e}"),
    }
}

#[test]
fn every_builtin_is_registered() {
    let mut names = BUILTIN_FUNCTIONS.to_vec();
    names.sort_unstable();
    assert_eq!(names,
               vec!["abs", "ceil", "cos", "exp", "floor", "len", "log", "max", "min", "round",
                    "sin", "sqrt", "sum", "tan"]);
}

#[test]
fn rounding_functions() {
    assert_value("ceil", vec![num("1.2")], Value::Number(2.0));
    assert_value("floor", vec![num("1.8")], Value::Number(1.0));
    assert_value("round", vec![num("2.5")], Value::Number(3.0));
    assert_value("round", vec![num("2.4")], Value::Number(2.0));
}

#[test]
fn round_sends_halves_upward() {
    let negative = |text: &str| Node::unary(Sign::Minus, num(text));

    assert_value("round", vec![negative("2.5")], Value::Number(-2.0));
    assert_value("round", vec![negative("2.6")], Value::Number(-3.0));
    assert_value("round", vec![num("0.49999999999999994")], Value::Number(0.0));

    let zero = call("round", vec![negative("0.5")]).unwrap();
    assert_eq!(zero, Value::Number(0.0));
    assert_eq!(zero.to_string(), "0");
}

#[test]
fn trigonometry_and_exp() {
    assert_value("sin", vec![num("0")], Value::Number(0.0));
    assert_value("cos", vec![num("0")], Value::Number(1.0));
    assert_value("tan", vec![num("0")], Value::Number(0.0));
    assert_value("exp", vec![num("1")], Value::Number(std::f64::consts::E));
    assert_value("cos", vec![Node::constant("pi", 1)], Value::Number(-1.0));
}

#[test]
fn abs_of_real_and_complex() {
    assert_value("abs", vec![Node::unary(Sign::Minus, num("3"))], Value::Number(3.0));
    assert_value("abs", vec![Node::imaginary("-2i", 1)], Value::Number(2.0));
}

#[test]
fn sqrt_of_negative_is_imaginary() {
    assert_value("sqrt", vec![num("16")], Value::Number(4.0));
    assert_value("sqrt",
                 vec![Node::unary(Sign::Minus, num("4"))],
                 Value::Complex(ComplexNumber::new(0.0, 2.0)));
}

#[test]
fn logarithms() {
    assert_value("log", vec![Node::constant("e", 1)], Value::Number(1.0));
    assert_value("log", vec![num("1000"), num("10")], Value::Number(3.0));

    for base in ["1", "0"] {
        let err = call("log", vec![num("8"), num(base)]).unwrap_err();
        assert!(matches!(err, RuntimeError::InvalidLogBase { .. }), "base {base}");
    }

    let err = call("log", vec![]).unwrap_err();
    assert!(matches!(err, RuntimeError::ArityMismatch { name: "log", found: 0, .. }));
}

#[test]
fn min_and_max_are_variadic() {
    assert_value("min", vec![num("3"), num("1"), num("2")], Value::Number(1.0));
    assert_value("max", vec![num("3"), num("1"), num("2")], Value::Number(3.0));

    let list = Node::vector(vec![num("4"), num("9"), num("-1")], 1);
    assert_value("max", vec![list.clone()], Value::Number(9.0));
    assert_value("min", vec![list], Value::Number(-1.0));

    // Infinities are outside the tolerant comparison.
    assert_eq!(call("min", vec![Node::vector(vec![], 1)]).unwrap(), Value::Number(f64::INFINITY));
    assert_eq!(call("max", vec![Node::vector(vec![], 1)]).unwrap(),
               Value::Number(f64::NEG_INFINITY));
}

#[test]
fn min_and_max_propagate_nan() {
    // log(-1) is NaN.
    let nan = || Node::call("log", vec![Node::unary(Sign::Minus, num("1"))], 1);

    for name in ["min", "max"] {
        let forward = call(name, vec![nan(), num("1")]).unwrap();
        let backward = call(name, vec![num("1"), nan()]).unwrap();

        assert!(matches!(forward, Value::Number(n) if n.is_nan()), "{name}: {forward}");
        assert!(matches!(backward, Value::Number(n) if n.is_nan()), "{name}: {backward}");
    }
}

#[test]
fn min_without_arguments_is_arity_error() {
    let err = call("min", vec![]).unwrap_err();
    assert!(matches!(err, RuntimeError::ArityMismatch { name: "min", found: 0, .. }));
    assert_eq!(err.to_string(), "Error on line 1: min expects at least 1 argument(s), but found 0.");
}

#[test]
fn min_rejects_complex_items() {
    let err = call("min", vec![Node::imaginary("i", 1), num("2")]).unwrap_err();
    assert!(matches!(err, RuntimeError::TypeMismatch { .. }));
}

#[test]
fn sum_mixes_numbers_and_complex() {
    assert_value("sum", vec![], Value::Number(0.0));
    assert_value("sum", vec![num("1"), num("2"), num("3")], Value::Number(6.0));
    assert_value("sum",
                 vec![num("1"), Node::imaginary("2i", 1)],
                 Value::Complex(ComplexNumber::new(1.0, 2.0)));

    let list = Node::vector(vec![Node::imaginary("i", 1), Node::imaginary("-i", 1)], 1);
    assert_value("sum", vec![list], Value::Number(0.0));
}

#[test]
fn len_counts_elements_and_characters() {
    assert_value("len", vec![Node::vector(vec![num("1"), num("2")], 1)], Value::Number(2.0));

    let text = Node::Terminal(Terminal::new(TokenKind::Text, "héllo", 1));
    assert_value("len", vec![text], Value::Number(5.0));

    let err = call("len", vec![num("3")]).unwrap_err();
    assert!(matches!(err, RuntimeError::TypeMismatch { .. }));
}

#[test]
fn unary_builtins_check_arity() {
    for name in ["abs", "ceil", "cos", "exp", "floor", "len", "round", "sin", "sqrt", "tan"] {
        let err = call(name, vec![num("1"), num("2")]).unwrap_err();
        assert!(matches!(err, RuntimeError::ArityMismatch { found: 2, .. }), "{name}");
    }
}

#[test]
fn real_builtins_reject_non_numbers() {
    let err = call("sin", vec![Node::vector(vec![], 1)]).unwrap_err();
    assert!(matches!(err, RuntimeError::TypeMismatch { .. }));

    let err = call("floor", vec![Node::imaginary("2i", 1)]).unwrap_err();
    assert!(matches!(err, RuntimeError::TypeMismatch { .. }));
}

#[test]
fn arguments_are_evaluated_before_lookup() {
    let err = call("nope", vec![Node::ident("missing", 1)]).unwrap_err();
    assert!(matches!(err, RuntimeError::UnknownIdentifier { .. }));

    let err = call("nope", vec![num("1")]).unwrap_err();
    assert!(matches!(err, RuntimeError::UnknownFunction { .. }));
}
