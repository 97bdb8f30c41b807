use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::{BlockStatement, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::{Env, Environment},
        evaluator::function::builtin,
        value::{
            core::{NULL, Value},
            function::Function,
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. The `?` operator gives every
/// composite step the same short-circuit: the first error wins.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// A context owns the root environment. Programs evaluated through the same
/// context share their top-level bindings, which is how a REPL keeps state
/// between lines.
///
/// ## Usage
/// ```
/// use monkey::{Context, interpreter::value::core::Value};
///
/// let context = Context::new();
///
/// monkey::run("let double = fn(x) { x * 2 };", &context).unwrap();
/// let value = monkey::run("double(21)", &context).unwrap();
///
/// assert_eq!(value, Some(Value::Integer(42)));
/// ```
pub struct Context {
    env: Env,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a context with an empty root environment.
    #[must_use]
    pub fn new() -> Self {
        Self { env: Environment::new().shared() }
    }

    /// Creates a context around an existing root environment.
    #[must_use]
    pub const fn with_env(env: Env) -> Self {
        Self { env }
    }

    /// The root environment.
    #[must_use]
    pub const fn env(&self) -> &Env {
        &self.env
    }

    /// Evaluates a whole program against the root environment.
    ///
    /// Statements run in order. A `return` stops the program and its value
    /// becomes the result; a runtime error stops the program and becomes an
    /// [`Value::Error`] result. Returns `None` when the program produces no
    /// value, e.g. when it is empty or ends in a `let`.
    pub fn eval_program(&self, program: &Program) -> Option<Value> {
        match Self::eval_statements(&program.statements, &self.env) {
            Ok(Some(Value::ReturnValue(value))) => Some(*value),
            Ok(result) => result,
            Err(error) => {
                debug!(%error, "program stopped on runtime error");
                Some(Value::Error(error))
            },
        }
    }

    /// Evaluates a block in `env`.
    ///
    /// Like a program, a block stops at the first `return`, but it hands the
    /// `ReturnValue` marker back unopened so the enclosing call can tell an
    /// explicit return from falling off the end. An empty block, or one
    /// ending in a `let`, yields `null`.
    pub fn eval_block(block: &BlockStatement, env: &Env) -> EvalResult<Value> {
        Ok(Self::eval_statements(&block.statements, env)?.unwrap_or(NULL))
    }

    fn eval_statements(statements: &[Statement], env: &Env) -> EvalResult<Option<Value>> {
        let mut result = None;

        for statement in statements {
            result = Self::eval_statement(statement, env)?;

            if let Some(Value::ReturnValue(_)) = result {
                return Ok(result);
            }
        }

        Ok(result)
    }

    /// Evaluates a single statement.
    ///
    /// `let` binds in `env` itself (never a new scope) and yields no value;
    /// `return` wraps its value in the `ReturnValue` marker; expression
    /// statements yield their value.
    pub fn eval_statement(statement: &Statement, env: &Env) -> EvalResult<Option<Value>> {
        match statement {
            Statement::Let { name, value } => {
                let value = Self::eval(value, env)?;
                if let Value::ReturnValue(_) = value {
                    return Ok(Some(value));
                }

                env.borrow_mut().set(name.as_str(), value);
                Ok(None)
            },
            Statement::Return { value } => {
                let value = Self::eval(value, env)?;
                Ok(Some(Value::ReturnValue(Box::new(value))))
            },
            Statement::Expression { expr } => Ok(Some(Self::eval(expr, env)?)),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant; every variant that evaluates
    /// sub-expressions stops at the first error among them.
    pub fn eval(expr: &Expr, env: &Env) -> EvalResult<Value> {
        match expr {
            Expr::Identifier(name) => Self::eval_identifier(name, env),
            Expr::IntegerLiteral(value) => Ok(Value::Integer(*value)),
            Expr::StringLiteral(text) => Ok(Value::from(text.as_str())),
            Expr::Boolean(value) => Ok(Value::from(*value)),
            Expr::Prefix { op, right } => {
                let right = Self::eval(right, env)?;
                Self::eval_unary(*op, &right)
            },
            Expr::Infix { left, op, right } => {
                let left = Self::eval(left, env)?;
                let right = Self::eval(right, env)?;
                Self::eval_binary(*op, &left, &right)
            },
            Expr::If { condition,
                       consequence,
                       alternative, } => {
                Self::eval_if_expr(condition, consequence, alternative.as_ref(), env)
            },
            Expr::FunctionLiteral { parameters, body } => {
                Ok(Value::Function(Rc::new(Function { parameters: parameters.clone(),
                                                      body:       Rc::clone(body),
                                                      env:        Rc::clone(env), })))
            },
            Expr::Call { function, arguments } => {
                Self::eval_function_call(function, arguments, env)
            },
            Expr::ArrayLiteral(elements) => Self::eval_array_literal(elements, env),
            Expr::Index { left, index } => {
                let left = Self::eval(left, env)?;
                let index = Self::eval(index, env)?;
                Self::eval_index(&left, &index)
            },
            Expr::HashLiteral(pairs) => Self::eval_hash_literal(pairs, env),
        }
    }

    /// Evaluates a list of expressions left to right, stopping at the first
    /// error.
    pub fn eval_expressions(exprs: &[Expr], env: &Env) -> EvalResult<Vec<Value>> {
        exprs.iter().map(|expr| Self::eval(expr, env)).collect()
    }

    /// Looks up a name.
    ///
    /// The environment chain is searched innermost first; names it does not
    /// bind fall back to the builtin table.
    fn eval_identifier(name: &str, env: &Env) -> EvalResult<Value> {
        if let Some(value) = env.borrow().get(name) {
            return Ok(value);
        }

        builtin::lookup(name).map(Value::Builtin)
                             .ok_or_else(|| RuntimeError::IdentifierNotFound { name: name.to_string() })
    }

    /// Evaluates an `if` expression.
    ///
    /// The consequence runs when the condition is truthy (anything but `null`
    /// and `false`, so `0` is truthy). A missing alternative yields `null`.
    fn eval_if_expr(condition: &Expr,
                    consequence: &BlockStatement,
                    alternative: Option<&BlockStatement>,
                    env: &Env)
                    -> EvalResult<Value> {
        let condition = Self::eval(condition, env)?;

        if condition.is_truthy() {
            Self::eval_block(consequence, env)
        } else {
            alternative.map_or(Ok(NULL), |block| Self::eval_block(block, env))
        }
    }
}
