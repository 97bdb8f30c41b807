use std::{
    fmt::{self, Write as _},
    rc::Rc,
};

/// The root of a parsed source text: an ordered list of statements.
///
/// `Display` renders the canonical, fully parenthesized form of the program,
/// one statement per line. Re-parsing that rendering yields a program with
/// the same rendering.
///
/// ## Example
/// ```
/// let program = monkey::parse("a + b * c").unwrap();
///
/// assert_eq!(program.to_string(), "(a + (b * c));");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// A statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A binding introduced with `let <name> = <value>;`.
    Let {
        /// Name being bound.
        name:  String,
        /// The bound expression.
        value: Expr,
    },
    /// An explicit `return <value>;`.
    Return {
        /// The returned expression.
        value: Expr,
    },
    /// A bare expression used as a statement.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
}

/// A braced sequence of statements, used as the body of `if` branches and
/// function literals.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStatement {
    /// Statements inside the braces.
    pub statements: Vec<Statement>,
}

/// An abstract syntax tree node representing an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a binding by name.
    Identifier(String),
    /// A decimal integer literal.
    IntegerLiteral(i64),
    /// A string literal; the text carries no escape processing.
    StringLiteral(String),
    /// `true` or `false`.
    Boolean(bool),
    /// A prefix operator applied to one operand (e.g. `-x`, `!ok`).
    Prefix {
        /// The operator.
        op:    UnaryOperator,
        /// The operand.
        right: Box<Self>,
    },
    /// A binary operator between two operands.
    Infix {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// `if (<condition>) { ... } else { ... }`.
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequence: BlockStatement,
        /// Block evaluated otherwise, if present.
        alternative: Option<BlockStatement>,
    },
    /// `fn(<parameters>) { ... }`.
    ///
    /// The body is reference counted so function values created from this
    /// literal can outlive the program that defined them.
    FunctionLiteral {
        /// Parameter names in declaration order.
        parameters: Vec<String>,
        /// The function body.
        body:       Rc<BlockStatement>,
    },
    /// `[e1, e2, ...]`.
    ArrayLiteral(Vec<Self>),
    /// `<left>[<index>]`.
    Index {
        /// The collection being indexed.
        left:  Box<Self>,
        /// The index expression.
        index: Box<Self>,
    },
    /// `{k1: v1, k2: v2, ...}` with pairs kept in source order.
    HashLiteral(Vec<(Self, Self)>),
    /// `<function>(<arguments>)`.
    Call {
        /// The callee expression.
        function:  Box<Self>,
        /// Argument expressions in source order.
        arguments: Vec<Self>,
    },
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Logical NOT (`!x`).
    Not,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, statement) in self.statements.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value } => write!(f, "return {value};"),
            Self::Expression { expr } => write!(f, "{expr};"),
        }
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for statement in &self.statements {
            f.write_char('\t')?;
            write_indented(f, &statement.to_string())?;
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

/// Writes `text`, adding one tab after every line break that lies outside a
/// string literal. Literals cannot contain `"`, so quote parity is exact.
fn write_indented(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    let mut in_string = false;
    for c in text.chars() {
        f.write_char(c)?;
        match c {
            '"' => in_string = !in_string,
            '\n' if !in_string => f.write_char('\t')?,
            _ => {},
        }
    }
    Ok(())
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(name) => write!(f, "{name}"),
            Self::IntegerLiteral(value) => write!(f, "{value}"),
            Self::StringLiteral(text) => write!(f, "\"{text}\""),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Prefix { op, right } => write!(f, "({op}{right})"),
            Self::Infix { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::If { condition,
                       consequence,
                       alternative, } => {
                // Operator and index forms already render inside one pair of
                // parentheses; everything else needs the grammar's own pair.
                if matches!(**condition, Self::Prefix { .. } | Self::Infix { .. } | Self::Index { .. }) {
                    write!(f, "if {condition} {consequence}")?;
                } else {
                    write!(f, "if ({condition}) {consequence}")?;
                }
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body } => {
                write!(f, "fn({}) {body}", parameters.join(", "))
            },
            Self::ArrayLiteral(elements) => {
                write!(f, "[")?;
                write_separated(f, elements)?;
                write!(f, "]")
            },
            Self::Index { left, index } => write!(f, "({left}[{index}])"),
            Self::HashLiteral(pairs) => {
                write!(f, "{{")?;
                for (index, (key, value)) in pairs.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
            Self::Call { function, arguments } => {
                write!(f, "{function}(")?;
                write_separated(f, arguments)?;
                write!(f, ")")
            },
        }
    }
}

fn write_separated(f: &mut fmt::Formatter<'_>, items: &[Expr]) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
