use std::fmt;

/// The universal runtime value carried on the data stack, in memory, and in
/// registers. Arithmetic opcodes require `Int`; `Str` and `Addr` pass through
/// stack/memory opcodes untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Str(String),
    Addr(String),
    /// A label resolved to a concrete instruction index.
    Index(i64),
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Index(i) => Some(*i),
            _ => None,
        }
    }

    /// Estimated in-memory cost in bytes, used by the resource accountant.
    /// Strings cost a flat 64 bytes regardless of length; everything else
    /// costs 8. This mirrors the constant-cost model the original VM uses
    /// (see DESIGN.md) rather than `std::mem::size_of`.
    pub fn memory_cost(&self) -> u64 {
        match self {
            Value::Str(_) | Value::Addr(_) => 64,
            Value::Int(_) | Value::Index(_) => 8,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Str(s) => write!(f, "{}", s),
            Value::Addr(a) => write!(f, "@{}", a),
            Value::Index(i) => write!(f, "{}", i),
        }
    }
}
