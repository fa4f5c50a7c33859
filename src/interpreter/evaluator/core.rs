use std::io::{self, Stdout, Write};

use tracing::{debug, trace};

use crate::{
    ast::{Node, TokenKind},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        value::{complex::ComplexNumber, core::Value},
    },
    util::num::{parse_imaginary_literal, parse_number_literal},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// A context owns the variable bindings of one program run and the sink that
/// `print` statements write to. State is never reset between calls, so
/// independent programs need independent contexts.
///
/// ## Usage
///
/// ```
/// use calcite::{
///     ast::Node,
///     interpreter::{evaluator::core::Context, value::core::Value},
/// };
///
/// let mut context = Context::with_output(Vec::new()).with_bindings([("r".to_string(),
///                                                                     Value::Number(2.0))]);
///
/// context.eval_program(&Node::Program(vec![Node::print(Node::ident("r", 1))])).unwrap();
/// assert_eq!(String::from_utf8(context.into_output()).unwrap(), "2\n");
/// ```
pub struct Context<W: Write = Stdout> {
    environment: Environment,
    output:      W,
}

#[allow(clippy::new_without_default)]
impl Context<Stdout> {
    /// Creates a context with no variables that prints to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl<W: Write> Context<W> {
    /// Creates a context with no variables that prints to `output`.
    #[must_use]
    pub fn with_output(output: W) -> Self {
        Self { environment: Environment::new(),
               output }
    }

    /// Adds initial variable bindings, applied before any statement runs.
    #[must_use]
    pub fn with_bindings<I>(mut self, bindings: I) -> Self
        where I: IntoIterator<Item = (String, Value)>
    {
        self.environment.extend(bindings);
        self
    }

    /// The current variable bindings.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    pub(crate) const fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    /// The print sink.
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.output
    }

    pub(crate) const fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the context and returns the print sink.
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Evaluates a whole program tree.
    ///
    /// This is the entry point for a parsed program. Statements run in order
    /// against this context's environment; the first failure aborts the rest.
    ///
    /// # Returns
    /// The value of the final statement, or `None` for an empty program.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn eval_program(&mut self, program: &Node) -> EvalResult<Option<Value>> {
        let result = self.visit(program)?;
        debug!(result = ?result, "program evaluated");
        Ok(result)
    }

    /// Evaluates a node that must produce a value.
    ///
    /// # Returns
    /// - `Ok(Value)`: The node's value.
    /// - `Err(RuntimeError::EmptyExpressionResult)`: If the node yields no
    ///   value, e.g. a blank statement.
    ///
    /// # Example
    /// ```
    /// use calcite::{ast::Node, interpreter::evaluator::core::Context};
    ///
    /// let mut context = Context::with_output(Vec::new());
    /// assert!(context.evaluate(&Node::Blank { line: 4 }).is_err());
    /// ```
    pub fn evaluate(&mut self, node: &Node) -> EvalResult<Value> {
        self.visit(node)?
            .ok_or_else(|| RuntimeError::EmptyExpressionResult { line: node.line_number() })
    }

    /// Dispatches on the node kind.
    ///
    /// Every node kind is handled here. Statement-level nodes may yield
    /// `None`; all expression-level nodes yield a value or fail.
    ///
    /// # Parameters
    /// - `node`: The node to evaluate.
    ///
    /// # Returns
    /// `Some(Value)` for nodes that produce a value, or `None` for those that
    /// do not.
    pub fn visit(&mut self, node: &Node) -> EvalResult<Option<Value>> {
        let value = match node {
            Node::Program(statements) => {
                let mut result = None;
                for statement in statements {
                    trace!(line = statement.line_number(), kind = statement.kind_name(), "statement");
                    result = self.visit(statement)?;
                }
                return Ok(result);
            },
            Node::Blank { .. } => return Ok(None),
            Node::Statement(inner) | Node::Row(inner) | Node::Group(inner) => {
                return self.visit(inner);
            },
            Node::Define { name, value, line } => self.eval_define(name, value, *line)?,
            Node::Assign { name, value, line } => self.eval_assign(name, value, *line)?,
            Node::EquationStmt(equation) => self.evaluate(equation)?,
            Node::Equation { left, right, .. } => self.eval_equation(left, right)?,
            Node::Print { expr, .. } => self.eval_print(expr)?,
            Node::ExprStmt(expr) => self.evaluate(expr)?,
            Node::Or { left, right, .. } => self.eval_or(left, right)?,
            Node::And { left, right, .. } => self.eval_and(left, right)?,
            Node::Not { operand, .. } => self.eval_not(operand)?,
            Node::Comparison { first, chain, .. } => self.eval_comparison(first, chain)?,
            Node::Arith { left,
                          op,
                          right,
                          line, } => self.eval_arith(left, *op, right, *line)?,
            Node::Term { left,
                         op,
                         right,
                         line, } => self.eval_term(left, *op, right, *line)?,
            Node::Factor { base,
                           exponent,
                           line, } => self.eval_factor(base, exponent, *line)?,
            Node::Unary { sign,
                          operand,
                          line, } => self.eval_unary(*sign, operand, *line)?,
            Node::Atom(inner) => self.eval_atom(inner)?,
            Node::Factorial { operand, line } => self.eval_factorial(operand, *line)?,
            Node::ImplicitMul(implicit) => self.eval_implicit_mul(implicit)?,
            Node::FunctionCall { name,
                                 arguments,
                                 line, } => self.eval_function_call(name, arguments, *line)?,
            Node::ArgList(items)
            | Node::ExprList(items)
            | Node::Vector { elements: items, .. }
            | Node::Matrix { rows: items, .. } => self.eval_list(items)?,
            Node::Constant(terminal) => self.environment.constant(&terminal.text, terminal.line)?,
            Node::Terminal(terminal) => Value::String(terminal.text.clone()),
            Node::Error(terminal) => {
                return Err(RuntimeError::UnexpectedToken { token: terminal.text.clone(),
                                                           line:  terminal.line, });
            },
        };

        Ok(Some(value))
    }

    /// Evaluates the child of an `Atom` wrapper.
    ///
    /// Identifier terminals resolve against variables, then constants.
    /// Number and imaginary terminals are decoded from their text. The
    /// atom-level node kinds are evaluated normally; anything else is
    /// rejected.
    ///
    /// # Returns
    /// - `Ok(Value)`: The atom's value.
    /// - `Err(RuntimeError::UnsupportedAtom)`: If the child is not an atom.
    fn eval_atom(&mut self, inner: &Node) -> EvalResult<Value> {
        match inner {
            Node::Terminal(terminal) => match terminal.kind {
                TokenKind::Identifier => self.environment.resolve(&terminal.text, terminal.line),
                TokenKind::Number => {
                    Ok(Value::Number(parse_number_literal(&terminal.text, terminal.line)?))
                },
                TokenKind::Imaginary => {
                    let imaginary = parse_imaginary_literal(&terminal.text, terminal.line)?;
                    Ok(ComplexNumber::new(0.0, imaginary).into_value())
                },
                TokenKind::Constant | TokenKind::Operator | TokenKind::Text | TokenKind::Symbol => {
                    Err(RuntimeError::UnsupportedAtom { text: terminal.text.clone(),
                                                        line: terminal.line, })
                },
            },
            Node::Factorial { .. }
            | Node::Group(_)
            | Node::ImplicitMul(_)
            | Node::FunctionCall { .. }
            | Node::Vector { .. }
            | Node::Matrix { .. }
            | Node::Constant(_) => self.evaluate(inner),
            other => Err(RuntimeError::UnsupportedAtom { text: other.kind_name().to_string(),
                                                         line: other.line_number(), }),
        }
    }

    /// Evaluates every node in order and collects the values into a list.
    fn eval_list(&mut self, items: &[Node]) -> EvalResult<Value> {
        let values = items.iter()
                          .map(|item| self.evaluate(item))
                          .collect::<EvalResult<Vec<_>>>()?;
        Ok(Value::from(values))
    }
}
