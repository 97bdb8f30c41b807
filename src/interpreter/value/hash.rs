use std::hash::{Hash, Hasher};

use rustc_hash::{FxHashMap, FxHasher};

use crate::interpreter::value::core::{Value, ValueType};

/// The normalized key under which a hashable value is stored in a hash.
///
/// A key pairs the value's type with a 64-bit normalization of its content,
/// so `1` and `true` never collide even though both normalize to `1`.
///
/// ## Example
/// ```
/// use monkey::interpreter::value::core::Value;
///
/// let a = Value::from("name").hash_key();
/// let b = Value::from("name").hash_key();
/// let c = Value::from("other").hash_key();
///
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashKey {
    /// Type of the value the key was computed from.
    pub kind:  ValueType,
    /// Normalized content of the value.
    pub value: u64,
}

impl HashKey {
    /// Key of an integer: its two's-complement bit pattern.
    #[must_use]
    pub const fn integer(n: i64) -> Self {
        Self { kind:  ValueType::Integer,
               value: u64::from_ne_bytes(n.to_ne_bytes()), }
    }

    /// Key of a boolean: `1` for `true`, `0` for `false`.
    #[must_use]
    pub fn boolean(b: bool) -> Self {
        Self { kind:  ValueType::Boolean,
               value: u64::from(b), }
    }

    /// Key of a string: a deterministic Fx hash of its text.
    #[must_use]
    pub fn string(s: &str) -> Self {
        let mut hasher = FxHasher::default();
        s.hash(&mut hasher);
        Self { kind:  ValueType::String,
               value: hasher.finish(), }
    }
}

/// A stored hash entry: the original key value and the mapped value.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    /// The key as written by the user, kept for display.
    pub key:   Value,
    /// The mapped value.
    pub value: Value,
}

/// The storage behind `Value::Hash`.
///
/// Entries keep their first-insertion order; inserting an existing key
/// replaces its pair in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HashObject {
    index: FxHashMap<HashKey, usize>,
    pairs: Vec<HashPair>,
}

impl HashObject {
    /// Creates an empty hash.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a pair under `key`, replacing any previous pair.
    pub fn insert(&mut self, key: HashKey, pair: HashPair) {
        if let Some(&slot) = self.index.get(&key) {
            self.pairs[slot] = pair;
        } else {
            self.index.insert(key, self.pairs.len());
            self.pairs.push(pair);
        }
    }

    /// Looks up the pair stored under `key`.
    #[must_use]
    pub fn get(&self, key: &HashKey) -> Option<&HashPair> {
        self.index.get(key).map(|&slot| &self.pairs[slot])
    }

    /// Iterates over the pairs in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, HashPair> {
        self.pairs.iter()
    }

    /// Number of stored pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if the hash has no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
