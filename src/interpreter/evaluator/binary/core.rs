use std::io::Write;

use crate::{
    ast::{ArithOperator, Node, TermOperator},
    interpreter::{
        evaluator::{
            binary::{
                power::eval_pow,
                scalar::{add, divide, modulo, multiply, subtract},
            },
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
};

impl<W: Write> Context<W> {
    /// Evaluates an additive node `left + right` or `left - right`.
    ///
    /// Both operands are evaluated left to right before the operator is
    /// applied.
    ///
    /// # Example
    /// ```
    /// use calcite::{
    ///     ast::{ArithOperator, Node},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut context = Context::with_output(Vec::new());
    /// let node = Node::arith(Node::number("3", 1), ArithOperator::Sub, Node::number("5", 1));
    ///
    /// assert_eq!(context.evaluate(&node).unwrap(), Value::Number(-2.0));
    /// ```
    pub fn eval_arith(&mut self,
                      left: &Node,
                      op: ArithOperator,
                      right: &Node,
                      line: usize)
                      -> EvalResult<Value> {
        let left = self.evaluate(left)?;
        let right = self.evaluate(right)?;

        match op {
            ArithOperator::Add => add(&left, &right, line),
            ArithOperator::Sub => subtract(&left, &right, line),
        }
    }

    /// Evaluates a multiplicative node `*`, `/` or `%`.
    ///
    /// # Example
    /// ```
    /// use calcite::{
    ///     ast::{Node, TermOperator},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut context = Context::with_output(Vec::new());
    /// let node = Node::term(Node::number("7", 1), TermOperator::Mod, Node::number("4", 1));
    ///
    /// assert_eq!(context.evaluate(&node).unwrap(), Value::Number(3.0));
    /// ```
    pub fn eval_term(&mut self,
                     left: &Node,
                     op: TermOperator,
                     right: &Node,
                     line: usize)
                     -> EvalResult<Value> {
        let left = self.evaluate(left)?;
        let right = self.evaluate(right)?;

        match op {
            TermOperator::Mul => multiply(&left, &right, line),
            TermOperator::Div => divide(&left, &right, line),
            TermOperator::Mod => modulo(&left, &right, line),
        }
    }

    /// Evaluates `base ^ exponent`.
    ///
    /// Right associativity comes from the tree shape: `2 ^ 3 ^ 2` arrives as
    /// `Factor(2, Factor(3, 2))`.
    pub fn eval_factor(&mut self, base: &Node, exponent: &Node, line: usize) -> EvalResult<Value> {
        let base = self.evaluate(base)?;
        let exponent = self.evaluate(exponent)?;
        eval_pow(&base, &exponent, line)
    }
}
