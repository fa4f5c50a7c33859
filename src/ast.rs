/// The category of a terminal token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A name such as `x` or `vec`.
    Identifier,
    /// A numeric literal: `42`, `3.5`, `1e3`, `0b101`, `0o17`, `0xff`.
    Number,
    /// An imaginary literal: `2i`, `i`, `+i`, `-i`.
    Imaginary,
    /// A constant name such as `pi` or `E`.
    Constant,
    /// An operator such as `<` or `==`.
    Operator,
    /// Free text, e.g. a quoted string.
    Text,
    /// Punctuation such as `(` or `,`.
    Symbol,
}

/// A terminal token as produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terminal {
    /// The token category.
    pub kind: TokenKind,
    /// The exact source text.
    pub text: String,
    /// Line number in the source code.
    pub line: usize,
}

impl Terminal {
    /// Creates a terminal.
    ///
    /// ## Example
    /// ```
    /// use calcite::ast::{Terminal, TokenKind};
    ///
    /// let t = Terminal::new(TokenKind::Identifier, "x", 3);
    /// assert_eq!(t.text, "x");
    /// assert_eq!(t.line, 3);
    /// ```
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self { kind,
               text: text.into(),
               line }
    }
}

impl std::fmt::Display for Terminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Additive operators (`+`, `-`) of the `Arith` level.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArithOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
}

/// Multiplicative operators (`*`, `/`, `%`) of the `Term` level.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TermOperator {
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
}

/// Prefix sign of the `Unary` level.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Sign {
    /// Unary plus (`+x`)
    Plus,
    /// Unary minus (`-x`)
    Minus,
}

/// The operands of a juxtaposition such as `2x`, `2(x + 1)`, `pi r`, `a b` or
/// `a(b + 1)`.
///
/// The parser fills in whichever parts were present; the evaluator decides
/// whether the combination is one it supports.
#[derive(Debug, Clone, PartialEq)]
pub struct ImplicitMul {
    /// Leading numeric literal, if any.
    pub number:      Option<Terminal>,
    /// Leading constant, if any.
    pub constant:    Option<Terminal>,
    /// Identifiers in source order.
    pub identifiers: Vec<Terminal>,
    /// Parenthesised expression, if any.
    pub group:       Option<Box<Node>>,
    /// Line number in the source code.
    pub line:        usize,
}

impl std::fmt::Display for ImplicitMul {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if let Some(number) = &self.number {
            parts.push(number.text.clone());
        }
        if let Some(constant) = &self.constant {
            parts.push(constant.text.clone());
        }
        parts.extend(self.identifiers.iter().map(|id| id.text.clone()));
        if self.group.is_some() {
            parts.push("(...)".to_string());
        }
        write!(f, "{}", parts.join(" "))
    }
}

/// A node of the parse tree handed to the evaluator.
///
/// Each variant is one node kind produced by the upstream parser. The
/// precedence levels appear only where the source actually used an operator
/// at that level; pass-through levels are collapsed into their child.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A whole program: statements in source order.
    Program(Vec<Self>),
    /// A statement wrapper around one of the statement kinds.
    Statement(Box<Self>),
    /// An empty statement. Produces no value.
    Blank {
        /// Line number in the source code.
        line: usize,
    },
    /// `var name = value`
    Define {
        /// Name of the new variable.
        name:  String,
        /// Initial value.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `name = value` for an existing variable.
    Assign {
        /// Name of the variable.
        name:  String,
        /// New value.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A statement wrapping an `Equation`.
    EquationStmt(Box<Self>),
    /// `left = right` tested for numeric equality. Binds nothing.
    Equation {
        /// Left-hand side.
        left:  Box<Self>,
        /// Right-hand side.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `print(expr)`
    Print {
        /// The printed expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A statement evaluated only for its value.
    ExprStmt(Box<Self>),
    /// `left or right`
    Or {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand, evaluated only when the left one is falsy.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `left and right`
    And {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand, evaluated only when the left one is truthy.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `not operand`
    Not {
        /// The negated operand.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// A comparison chain `a < b <= c`.
    Comparison {
        /// First operand.
        first: Box<Self>,
        /// Operator token and operand for every further link.
        chain: Vec<(Terminal, Self)>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `left + right` or `left - right`
    Arith {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    ArithOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `left * right`, `left / right` or `left % right`
    Term {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    TermOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `base ^ exponent`, right-associative through nesting.
    Factor {
        /// The base.
        base:     Box<Self>,
        /// The exponent.
        exponent: Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// `+operand` or `-operand`
    Unary {
        /// The sign.
        sign:    Sign,
        /// The operand.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// An atom wrapper. Its child must be an atom-level node or an
    /// identifier, number or imaginary terminal.
    Atom(Box<Self>),
    /// Postfix factorial `operand!`.
    Factorial {
        /// The operand.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// A parenthesised expression.
    Group(Box<Self>),
    /// Juxtaposition resolved as a multiplication.
    ImplicitMul(ImplicitMul),
    /// `name(arguments)`
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A comma separated argument list. Evaluates to a list.
    ArgList(Vec<Self>),
    /// A named constant such as `pi`. Matched case-insensitively.
    Constant(Terminal),
    /// `[a, b, c]`
    Vector {
        /// Elements of the vector.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// `[[a, b]; [c, d]]`: rows, each evaluating to a list.
    Matrix {
        /// Rows of the matrix.
        rows: Vec<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// One matrix row wrapping an `ExprList`.
    Row(Box<Self>),
    /// A comma separated expression list. Evaluates to a list.
    ExprList(Vec<Self>),
    /// A bare terminal. Evaluates to its text.
    Terminal(Terminal),
    /// A token the parser could not place.
    Error(Terminal),
}

impl Node {
    /// Gets the line number from `self`.
    ///
    /// Lists report the line of their first element and `0` when empty.
    ///
    /// ## Example
    /// ```
    /// use calcite::ast::Node;
    ///
    /// let node = Node::ident("x", 5);
    ///
    /// assert_eq!(node.line_number(), 5);
    /// ```
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::Program(items) | Self::ArgList(items) | Self::ExprList(items) => {
                items.first().map_or(0, Self::line_number)
            },
            Self::Statement(inner)
            | Self::EquationStmt(inner)
            | Self::ExprStmt(inner)
            | Self::Atom(inner)
            | Self::Group(inner)
            | Self::Row(inner) => inner.line_number(),
            Self::Blank { line }
            | Self::Define { line, .. }
            | Self::Assign { line, .. }
            | Self::Equation { line, .. }
            | Self::Print { line, .. }
            | Self::Or { line, .. }
            | Self::And { line, .. }
            | Self::Not { line, .. }
            | Self::Comparison { line, .. }
            | Self::Arith { line, .. }
            | Self::Term { line, .. }
            | Self::Factor { line, .. }
            | Self::Unary { line, .. }
            | Self::Factorial { line, .. }
            | Self::FunctionCall { line, .. }
            | Self::Vector { line, .. }
            | Self::Matrix { line, .. }
            | Self::ImplicitMul(ImplicitMul { line, .. }) => *line,
            Self::Constant(t) | Self::Terminal(t) | Self::Error(t) => t.line,
        }
    }

    /// Name of the node kind, used in error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Program(_) => "program",
            Self::Statement(_) => "statement",
            Self::Blank { .. } => "blank statement",
            Self::Define { .. } => "definition",
            Self::Assign { .. } => "assignment",
            Self::EquationStmt(_) | Self::Equation { .. } => "equation",
            Self::Print { .. } => "print statement",
            Self::ExprStmt(_) => "expression statement",
            Self::Or { .. } => "or",
            Self::And { .. } => "and",
            Self::Not { .. } => "not",
            Self::Comparison { .. } => "comparison",
            Self::Arith { .. } => "additive expression",
            Self::Term { .. } => "multiplicative expression",
            Self::Factor { .. } => "power",
            Self::Unary { .. } => "unary expression",
            Self::Atom(_) => "atom",
            Self::Factorial { .. } => "factorial",
            Self::Group(_) => "group",
            Self::ImplicitMul(_) => "implicit multiplication",
            Self::FunctionCall { .. } => "function call",
            Self::ArgList(_) => "argument list",
            Self::Constant(_) => "constant",
            Self::Vector { .. } => "vector",
            Self::Matrix { .. } => "matrix",
            Self::Row(_) => "row",
            Self::ExprList(_) => "expression list",
            Self::Terminal(_) => "terminal",
            Self::Error(_) => "error",
        }
    }
}

/// Shorthand constructors for building trees by hand.
///
/// Leaves are wrapped in `Atom` the way the parser emits them.
impl Node {
    /// An identifier atom.
    #[must_use]
    pub fn ident(name: &str, line: usize) -> Self {
        Self::Atom(Box::new(Self::Terminal(Terminal::new(TokenKind::Identifier, name, line))))
    }

    /// A numeric literal atom.
    ///
    /// ## Example
    /// ```
    /// use calcite::{ast::Node, interpreter::{evaluator::core::Context, value::core::Value}};
    ///
    /// let mut context = Context::with_output(Vec::new());
    /// assert_eq!(context.evaluate(&Node::number("0x10", 1)).unwrap(), Value::Number(16.0));
    /// ```
    #[must_use]
    pub fn number(text: &str, line: usize) -> Self {
        Self::Atom(Box::new(Self::Terminal(Terminal::new(TokenKind::Number, text, line))))
    }

    /// An imaginary literal atom.
    #[must_use]
    pub fn imaginary(text: &str, line: usize) -> Self {
        Self::Atom(Box::new(Self::Terminal(Terminal::new(TokenKind::Imaginary, text, line))))
    }

    /// A constant atom.
    #[must_use]
    pub fn constant(text: &str, line: usize) -> Self {
        Self::Atom(Box::new(Self::Constant(Terminal::new(TokenKind::Constant, text, line))))
    }

    /// A binary `Arith` node.
    #[must_use]
    pub fn arith(left: Self, op: ArithOperator, right: Self) -> Self {
        let line = left.line_number();
        Self::Arith { left: Box::new(left),
                      op,
                      right: Box::new(right),
                      line }
    }

    /// A binary `Term` node.
    #[must_use]
    pub fn term(left: Self, op: TermOperator, right: Self) -> Self {
        let line = left.line_number();
        Self::Term { left: Box::new(left),
                     op,
                     right: Box::new(right),
                     line }
    }

    /// A power node.
    #[must_use]
    pub fn power(base: Self, exponent: Self) -> Self {
        let line = base.line_number();
        Self::Factor { base: Box::new(base),
                       exponent: Box::new(exponent),
                       line }
    }

    /// A unary sign node.
    #[must_use]
    pub fn unary(sign: Sign, operand: Self) -> Self {
        let line = operand.line_number();
        Self::Unary { sign,
                      operand: Box::new(operand),
                      line }
    }

    /// A parenthesised expression atom.
    #[must_use]
    pub fn group(inner: Self) -> Self {
        Self::Atom(Box::new(Self::Group(Box::new(inner))))
    }

    /// A comparison chain with operators given as text.
    #[must_use]
    pub fn compare(first: Self, links: Vec<(&str, Self)>) -> Self {
        let line = first.line_number();
        let chain = links.into_iter()
                         .map(|(op, operand)| (Terminal::new(TokenKind::Operator, op, line), operand))
                         .collect();
        Self::Comparison { first: Box::new(first),
                           chain,
                           line }
    }

    /// A function call atom.
    #[must_use]
    pub fn call(name: &str, arguments: Vec<Self>, line: usize) -> Self {
        Self::Atom(Box::new(Self::FunctionCall { name: name.to_string(),
                                                 arguments,
                                                 line }))
    }

    /// A vector atom.
    #[must_use]
    pub fn vector(elements: Vec<Self>, line: usize) -> Self {
        Self::Atom(Box::new(Self::Vector { elements, line }))
    }

    /// A print statement.
    #[must_use]
    pub fn print(expr: Self) -> Self {
        let line = expr.line_number();
        Self::Statement(Box::new(Self::Print { expr: Box::new(expr),
                                               line }))
    }

    /// A define statement.
    #[must_use]
    pub fn define(name: &str, value: Self) -> Self {
        let line = value.line_number();
        Self::Statement(Box::new(Self::Define { name: name.to_string(),
                                                value: Box::new(value),
                                                line }))
    }

    /// An assignment statement.
    #[must_use]
    pub fn assign(name: &str, value: Self) -> Self {
        let line = value.line_number();
        Self::Statement(Box::new(Self::Assign { name: name.to_string(),
                                                value: Box::new(value),
                                                line }))
    }
}
