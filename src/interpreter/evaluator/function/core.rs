use std::{fmt, io::Write};

use tracing::debug;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::scalar::multiply,
            core::{Context, EvalResult},
            function::{builtin, log, min_max, sqrt, sum},
        },
        value::core::Value,
    },
};

/// Signature shared by every builtin: evaluated arguments plus the call line.
type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// How many arguments a builtin accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// Any of the listed counts.
    OneOf(&'static [usize]),
    /// This many arguments or more.
    AtLeast(usize),
}

impl Arity {
    /// Returns `true` if `n` arguments are acceptable.
    ///
    /// ## Example
    /// ```
    /// use calcite::interpreter::evaluator::function::core::Arity;
    ///
    /// assert!(Arity::OneOf(&[1, 2]).check(2));
    /// assert!(!Arity::AtLeast(1).check(0));
    /// ```
    #[must_use]
    pub fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(counts) => counts.contains(&n),
            Self::AtLeast(m) => n >= *m,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::OneOf(counts) => {
                let counts = counts.iter().map(ToString::to_string).collect::<Vec<_>>();
                write!(f, "{}", counts.join(" or "))
            },
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// Expands `"name" => { arity, func }` entries into the private
/// `BUILTIN_TABLE` used for dispatch and the public `BUILTIN_FUNCTIONS` name
/// list.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every builtin function, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "abs"   => { arity: Arity::Exact(1), func: builtin::abs },
    "ceil"  => { arity: Arity::Exact(1), func: builtin::ceil },
    "cos"   => { arity: Arity::Exact(1), func: builtin::cos },
    "exp"   => { arity: Arity::Exact(1), func: builtin::exp },
    "floor" => { arity: Arity::Exact(1), func: builtin::floor },
    "len"   => { arity: Arity::Exact(1), func: builtin::len },
    "log"   => { arity: Arity::OneOf(&[1, 2]), func: log::log },
    "max"   => { arity: Arity::AtLeast(1), func: min_max::max },
    "min"   => { arity: Arity::AtLeast(1), func: min_max::min },
    "round" => { arity: Arity::Exact(1), func: builtin::round },
    "sin"   => { arity: Arity::Exact(1), func: builtin::sin },
    "sqrt"  => { arity: Arity::Exact(1), func: sqrt::sqrt },
    "sum"   => { arity: Arity::AtLeast(0), func: sum::sum },
    "tan"   => { arity: Arity::Exact(1), func: builtin::tan },
}

/// Fails with `ArityMismatch` unless `args` satisfies `arity`.
pub fn check_arity(name: &'static str,
                   arity: Arity,
                   args: &[Value],
                   line: usize)
                   -> EvalResult<()> {
    if arity.check(args.len()) {
        return Ok(());
    }
    Err(RuntimeError::ArityMismatch { name,
                                      expected: arity.to_string(),
                                      found: args.len(),
                                      line })
}

/// Returns the only argument of a one-argument builtin.
///
/// # Example
/// ```
/// use calcite::interpreter::{evaluator::function::core::single_argument, value::core::Value};
///
/// let args = [Value::Number(1.0)];
/// assert_eq!(single_argument("abs", &args, 1).unwrap(), &Value::Number(1.0));
/// assert!(single_argument("abs", &[], 1).is_err());
/// ```
pub fn single_argument<'a>(name: &'static str,
                           args: &'a [Value],
                           line: usize)
                           -> EvalResult<&'a Value> {
    match args {
        [value] => Ok(value),
        _ => Err(RuntimeError::ArityMismatch { name,
                                               expected: Arity::Exact(1).to_string(),
                                               found: args.len(),
                                               line }),
    }
}

/// Selects the values a variadic builtin reduces over.
///
/// A call with exactly one list argument reduces over the list's elements;
/// any other call reduces over the arguments themselves.
///
/// # Example
/// ```
/// use calcite::interpreter::{evaluator::function::core::variadic_items, value::core::Value};
///
/// let list = [Value::from(vec![Value::Number(1.0), Value::Number(2.0)])];
/// assert_eq!(variadic_items(&list).len(), 2);
///
/// let scalars = [Value::Number(1.0), Value::Number(2.0), Value::Number(3.0)];
/// assert_eq!(variadic_items(&scalars).len(), 3);
/// ```
#[must_use]
pub fn variadic_items(args: &[Value]) -> &[Value] {
    match args {
        [Value::List(items)] => items.as_slice(),
        _ => args,
    }
}

impl<W: Write> Context<W> {
    /// Runs a call node.
    ///
    /// Arguments are evaluated first, left to right. If the name matches a
    /// builtin, its arity is verified and the builtin runs. Otherwise a call
    /// with exactly one argument whose name resolves to a variable or
    /// constant is read as a multiplication, so `r(2)` means `r * 2`.
    ///
    /// # Parameters
    /// - `name`: Callee as written.
    /// - `arguments`: Unevaluated argument nodes.
    /// - `line`: Line of the call.
    ///
    /// # Returns
    /// - `Ok(Value)`: The function result or the product.
    /// - `Err(RuntimeError::ArityMismatch)`: For a builtin with the wrong
    ///   number of arguments.
    /// - `Err(RuntimeError::UnknownFunction)`: If neither reading applies.
    ///
    /// # Example
    /// ```
    /// use calcite::{
    ///     ast::Node,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut context = Context::with_output(Vec::new());
    ///
    /// let call = Node::call("pi", vec![Node::number("2", 1)], 1);
    /// assert_eq!(context.evaluate(&call).unwrap(), Value::Number(2.0 * std::f64::consts::PI));
    ///
    /// let unknown = Node::call("frobnicate", vec![Node::number("2", 1)], 1);
    /// assert!(context.evaluate(&unknown).is_err());
    /// ```
    pub fn eval_function_call(&mut self,
                              name: &str,
                              arguments: &[Node],
                              line: usize)
                              -> EvalResult<Value> {
        let values = arguments.iter()
                              .map(|argument| self.evaluate(argument))
                              .collect::<EvalResult<Vec<_>>>()?;

        if let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) {
            check_arity(builtin.name, builtin.arity, &values, line)?;
            debug!(name, arguments = values.len(), "builtin call");
            return (builtin.func)(&values, line);
        }

        if let [argument] = values.as_slice()
           && let Some(factor) = self.environment().lookup(name)
        {
            debug!(name, "call read as implicit multiplication");
            return multiply(&factor, argument, line);
        }

        Err(RuntimeError::UnknownFunction { name: name.to_string(),
                                            line })
    }
}
