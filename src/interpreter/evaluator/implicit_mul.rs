use std::io::Write;

use tracing::debug;

use crate::{
    ast::{ImplicitMul, Terminal},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::scalar::multiply,
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
    util::num::parse_number_literal,
};

impl<W: Write> Context<W> {
    /// Resolves a juxtaposition into a single multiplication.
    ///
    /// Only five shapes are accepted:
    ///
    /// | shape          | meaning             |
    /// |----------------|---------------------|
    /// | `2 x`          | number * variable   |
    /// | `2 (expr)`     | number * expr       |
    /// | `pi x`         | constant * variable |
    /// | `x y`          | variable * variable |
    /// | `x (expr)`     | variable * expr     |
    ///
    /// Identifiers resolve against variables first, then constants.
    ///
    /// # Returns
    /// - `Ok(Value)`: The product.
    /// - `Err(RuntimeError::UnsupportedImplicitMultiplication)`: For any other
    ///   combination of parts.
    ///
    /// # Example
    /// ```
    /// use calcite::{
    ///     ast::{ImplicitMul, Node, Terminal, TokenKind},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut context = Context::with_output(Vec::new());
    /// let two_x = ImplicitMul { number:      Some(Terminal::new(TokenKind::Number, "2", 1)),
    ///                           constant:    None,
    ///                           identifiers: vec![Terminal::new(TokenKind::Identifier, "pi", 1)],
    ///                           group:       None,
    ///                           line:        1, };
    ///
    /// assert_eq!(context.eval_implicit_mul(&two_x).unwrap(),
    ///            Value::Number(2.0 * std::f64::consts::PI));
    /// ```
    pub fn eval_implicit_mul(&mut self, implicit: &ImplicitMul) -> EvalResult<Value> {
        let ImplicitMul { number,
                          constant,
                          identifiers,
                          group,
                          line, } = implicit;

        let (left, right) = match (number, constant, identifiers.as_slice(), group) {
            (Some(number), None, [id], None) => {
                (literal(number)?, self.identifier(id)?)
            },
            (Some(number), None, [], Some(expr)) => (literal(number)?, self.evaluate(expr)?),
            (None, Some(constant), [id], None) => {
                (self.environment().constant(&constant.text, constant.line)?, self.identifier(id)?)
            },
            (None, None, [first, second], None) => {
                (self.identifier(first)?, self.identifier(second)?)
            },
            (None, None, [id], Some(expr)) => (self.identifier(id)?, self.evaluate(expr)?),
            _ => {
                return Err(RuntimeError::UnsupportedImplicitMultiplication { text: implicit.to_string(),
                                                                            line: *line, });
            },
        };

        debug!(%implicit, "implicit multiplication");
        multiply(&left, &right, *line)
    }

    fn identifier(&self, id: &Terminal) -> EvalResult<Value> {
        self.environment().resolve(&id.text, id.line)
    }
}

fn literal(number: &Terminal) -> EvalResult<Value> {
    Ok(Value::Number(parse_number_literal(&number.text, number.line)?))
}
