use tracing::trace;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::{Env, Environment},
        evaluator::core::{Context, EvalResult},
        value::{
            core::{NULL, Value},
            function::Function,
        },
    },
};

impl Context {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first and must be a function or a builtin.
    /// The arguments are then evaluated left to right, stopping at the first
    /// error, and the callee is applied to them.
    pub(crate) fn eval_function_call(function: &Expr,
                                     arguments: &[Expr],
                                     env: &Env)
                                     -> EvalResult<Value> {
        let callee = Self::eval(function, env)?;
        if !matches!(callee, Value::Function(_) | Value::Builtin(_)) {
            return Err(RuntimeError::NotAFunction { kind: callee.value_type() });
        }

        let args = Self::eval_expressions(arguments, env)?;
        Self::apply_function(&callee, args)
    }

    /// Applies a callable value to already evaluated arguments.
    ///
    /// A builtin is invoked directly. A user function runs its body in a fresh
    /// scope enclosed by the environment it captured, with parameters bound
    /// by position; an explicit `return` inside the body is unwrapped here.
    ///
    /// The argument count is not checked against the parameter list: surplus
    /// arguments are ignored and missing ones are bound to `null`.
    ///
    /// # Errors
    /// - `not a function` if `callee` is not callable.
    /// - Any error raised by the body or the builtin.
    pub fn apply_function(callee: &Value, args: Vec<Value>) -> EvalResult<Value> {
        match callee {
            Value::Function(function) => {
                trace!(parameters = function.parameters.len(), arguments = args.len(), "applying function");

                let scope = Self::bind_parameters(function, args);
                match Self::eval_block(&function.body, &scope)? {
                    Value::ReturnValue(value) => Ok(*value),
                    value => Ok(value),
                }
            },
            Value::Builtin(builtin) => {
                trace!(name = builtin.name, arguments = args.len(), "calling builtin");
                builtin.call(&args)
            },
            _ => Err(RuntimeError::NotAFunction { kind: callee.value_type() }),
        }
    }

    /// Creates the call frame for `function`, binding each parameter to the
    /// argument at the same position.
    fn bind_parameters(function: &Function, args: Vec<Value>) -> Env {
        let mut scope = Environment::enclosed(&function.env);
        let mut args = args.into_iter();

        for parameter in &function.parameters {
            scope.set(parameter.as_str(), args.next().unwrap_or(NULL));
        }

        scope.shared()
    }
}
