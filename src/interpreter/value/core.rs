use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::value::{
        function::{Builtin, Function},
        hash::{HashKey, HashObject},
    },
};

/// The shared `true` value.
pub const TRUE: Value = Value::Boolean(true);
/// The shared `false` value.
pub const FALSE: Value = Value::Boolean(false);
/// The shared `null` value.
pub const NULL: Value = Value::Null;

/// Represents a runtime value in the interpreter.
///
/// Collections and functions are reference counted: cloning a `Value` never
/// copies an array, hash or closure, and `==` in the language compares those
/// by identity (see [`Value::is_identical`]).
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// `true` or `false`.
    Boolean(bool),
    /// An immutable string.
    String(Rc<str>),
    /// An ordered, 0-indexed list of values.
    Array(Rc<Vec<Self>>),
    /// A mapping from hashable keys to values.
    Hash(Rc<HashObject>),
    /// A user-defined function together with its captured environment.
    Function(Rc<Function>),
    /// A host function from the builtin table.
    Builtin(Builtin),
    /// The absence of a value.
    Null,
    /// Marks a value produced by `return` while it travels up to the
    /// enclosing call. Never observable from user code.
    ReturnValue(Box<Self>),
    /// A runtime fault, surfaced as the final result of a program.
    Error(RuntimeError),
}

/// The type tag of a [`Value`], as shown in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// `INTEGER`
    Integer,
    /// `BOOLEAN`
    Boolean,
    /// `STRING`
    String,
    /// `ARRAY`
    Array,
    /// `HASH`
    Hash,
    /// `FUNCTION`
    Function,
    /// `BUILTIN`
    Builtin,
    /// `NULL`
    Null,
    /// `RETURN_VALUE`
    ReturnValue,
    /// `ERROR`
    Error,
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Integer => "INTEGER",
            Self::Boolean => "BOOLEAN",
            Self::String => "STRING",
            Self::Array => "ARRAY",
            Self::Hash => "HASH",
            Self::Function => "FUNCTION",
            Self::Builtin => "BUILTIN",
            Self::Null => "NULL",
            Self::ReturnValue => "RETURN_VALUE",
            Self::Error => "ERROR",
        };
        write!(f, "{name}")
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        if v { TRUE } else { FALSE }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(Rc::from(v))
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl From<HashObject> for Value {
    fn from(v: HashObject) -> Self {
        Self::Hash(Rc::new(v))
    }
}

impl Value {
    /// Returns the type tag of the value.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Integer(_) => ValueType::Integer,
            Self::Boolean(_) => ValueType::Boolean,
            Self::String(_) => ValueType::String,
            Self::Array(_) => ValueType::Array,
            Self::Hash(_) => ValueType::Hash,
            Self::Function(_) => ValueType::Function,
            Self::Builtin(_) => ValueType::Builtin,
            Self::Null => ValueType::Null,
            Self::ReturnValue(_) => ValueType::ReturnValue,
            Self::Error(_) => ValueType::Error,
        }
    }

    /// Conditional truthiness: only `null` and `false` are falsy.
    ///
    /// ## Example
    /// ```
    /// use monkey::interpreter::value::core::{NULL, Value};
    ///
    /// assert!(Value::Integer(0).is_truthy());
    /// assert!(!Value::Boolean(false).is_truthy());
    /// assert!(!NULL.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Boolean(false))
    }

    /// Equality as seen by the language's `==` and `!=`.
    ///
    /// Booleans and `null` behave as singletons, integers and strings compare
    /// by content, and arrays, hashes and functions compare by identity: two
    /// separately built arrays with the same elements are not identical.
    #[must_use]
    pub fn is_identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b),
            (Self::Hash(a), Self::Hash(b)) => Rc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => a.name == b.name,
            _ => false,
        }
    }

    /// Computes the hash key of the value, or `None` for unhashable values.
    ///
    /// Only integers, booleans and strings are hashable.
    #[must_use]
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Self::Integer(n) => Some(HashKey::integer(*n)),
            Self::Boolean(b) => Some(HashKey::boolean(*b)),
            Self::String(s) => Some(HashKey::string(s)),
            _ => None,
        }
    }

    /// Returns the external representation of the value.
    ///
    /// This is the same text as the `Display` implementation.
    #[must_use]
    pub fn inspect(&self) -> String {
        self.to_string()
    }

    /// Returns `true` if the value is an [`Value::Error`].
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl PartialEq for Value {
    /// Structural equality, for host-side comparisons. Functions are only
    /// equal to themselves.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Hash(a), Self::Hash(b)) => a == b,
            (Self::ReturnValue(a), Self::ReturnValue(b)) => a == b,
            (Self::Error(a), Self::Error(b)) => a == b,
            _ => self.is_identical(other),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Array(a) => {
                write!(f, "[")?;

                for (index, value) in a.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Hash(h) => {
                write!(f, "{{")?;
                for (index, pair) in h.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", pair.key, pair.value)?;
                }
                write!(f, "}}")
            },
            Self::Function(function) => {
                write!(f, "fn({}) {}", function.parameters.join(", "), function.body)
            },
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::Null => write!(f, "null"),
            Self::ReturnValue(value) => write!(f, "{value}"),
            Self::Error(error) => write!(f, "ERROR: {error}"),
        }
    }
}
