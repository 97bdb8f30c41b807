use std::rc::Rc;

use crate::{
    ast::BlockStatement,
    error::RuntimeError,
    interpreter::{environment::Env, evaluator::core::EvalResult, value::core::Value},
};

/// A closure: parameters, body, and the environment it was created in.
///
/// The captured environment stays alive for as long as any function value
/// refers to it, which is what lets an inner function keep using the
/// parameters of a call frame that has already returned.
pub struct Function {
    /// Parameter names in declaration order.
    pub parameters: Vec<String>,
    /// The function body, shared with the literal it was created from.
    pub body:       Rc<BlockStatement>,
    /// The environment active when the literal was evaluated.
    pub env:        Env,
}

impl std::fmt::Debug for Function {
    // The captured environment may contain this very function.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

/// Signature shared by all builtin implementations.
///
/// A builtin receives the evaluated arguments and returns a value or a
/// runtime error.
pub type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `Any` accepts every argument count, including zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Any,
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns the mismatch error when it does not.
    fn check(self, got: usize) -> EvalResult<()> {
        match self {
            Self::Exact(want) if got != want => {
                Err(RuntimeError::ArgumentCountMismatch { got, want })
            },
            _ => Ok(()),
        }
    }
}

/// A host function exposed to the language as a callable value.
#[derive(Clone, Copy)]
pub struct Builtin {
    /// The name the builtin is bound to.
    pub name:  &'static str,
    /// Accepted argument counts.
    pub arity: Arity,
    /// The implementation.
    pub func:  BuiltinFn,
}

impl Builtin {
    /// Checks the argument count, then invokes the implementation.
    pub fn call(&self, args: &[Value]) -> EvalResult<Value> {
        self.arity.check(args.len())?;
        (self.func)(args)
    }
}

impl std::fmt::Debug for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builtin")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}
