//! # calcite
//!
//! calcite is the evaluator of a small calculator language written in Rust.
//! It walks an already parsed program tree and computes its value, with an
//! automatic numeric tower (boolean, real, complex), boolean logic, chained
//! comparisons, vectors and matrices, variables, builtin math functions and
//! implicit multiplication such as `2(3 + 4)` or `pi r`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{evaluator::core::Context, value::core::Value},
};

/// Defines the parse tree consumed by the evaluator.
///
/// This module declares the `Node` enum and the terminal token type that
/// represent the syntactic structure of a program. Trees are produced by an
/// external parser (or built by hand) and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines one node kind per grammar construct, statements included.
/// - Attaches source line numbers to nodes for error reporting.
/// - Offers shorthand constructors for building trees in code.
pub mod ast;
/// Provides the error type for evaluation.
///
/// This module defines every error that can be raised while evaluating a
/// program. Each variant carries the source line and the offending name or
/// details.
pub mod error;
/// Orchestrates program evaluation.
///
/// This module ties together the evaluator, the environment and the value
/// representations, and exposes the public API for evaluating programs.
///
/// # Responsibilities
/// - Coordinates evaluation, variable state and value types.
/// - Provides entry points for evaluating whole programs or single nodes.
/// - Manages the flow of values and errors between nodes.
pub mod interpreter;
/// General numeric utilities.
///
/// This module provides the epsilon comparisons and literal decoding shared by
/// the value model and the evaluator.
pub mod util;

/// Evaluates a program and returns its final value.
///
/// A fresh context is created for the call, so no state carries over from
/// earlier programs. `print` statements write to standard output.
///
/// # Errors
/// Returns the first `RuntimeError` raised while evaluating the program.
///
/// # Examples
/// ```
/// use calcite::{
///     ast::{ArithOperator, Node},
///     get_result,
///     interpreter::value::core::Value,
/// };
///
/// // var x = 2 + 2; x
/// let program = Node::Program(vec![
///     Node::define("x", Node::arith(Node::number("2", 1), ArithOperator::Add, Node::number("2", 1))),
///     Node::Statement(Box::new(Node::ExprStmt(Box::new(Node::ident("x", 2))))),
/// ]);
/// assert_eq!(get_result(&program).unwrap(), Some(Value::Number(4.0)));
///
/// // Example with an intentional error (unknown identifier).
/// let program = Node::Program(vec![Node::define("y", Node::ident("x", 1))]);
/// assert!(get_result(&program).is_err());
/// ```
pub fn get_result(program: &Node) -> Result<Option<Value>, RuntimeError> {
    Context::new().eval_program(program)
}
