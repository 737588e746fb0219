use std::cmp::Ordering;

/// A type-erased scalar value, used as the plan-time carrier for literal
/// operands and column values.
///
/// Column element types are generic at the storage layer, but the planner
/// (and everything in this crate) only ever needs to move values around and
/// compare them via a caller-supplied order, never to compute with them. A
/// boxed/erased representation keeps the planner monomorphic; see
/// `core::interval` for the generic (non-erased) interval type this feeds.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    I64(i64),
    F64(f64),
    String(String),
    Bytes(Vec<u8>),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::I64(_) => "i64",
            Value::F64(_) => "f64",
            Value::String(_) => "string",
            Value::Bytes(_) => "bytes",
        }
    }
}

/// A caller-supplied total order over a value domain `T`.
///
/// Deliberately not `Ord` — callers may want a collation that differs from
/// the type's natural order (case-insensitive strings, reversed numerics,
/// locale-aware collation), and the interval algebra must work against
/// whichever order the column was declared with.
pub trait TotalOrder<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> TotalOrder<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering { self(a, b) }
}

/// The natural order on `Value`, used by default when a column doesn't
/// supply a custom collation. Cross-variant comparisons are ordered by a
/// fixed type rank (documented, not silent) so the comparator remains
/// total even over a heterogeneous `Value` domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalValueOrder;

impl TotalOrder<Value> for NaturalValueOrder {
    fn compare(&self, a: &Value, b: &Value) -> Ordering {
        fn rank(v: &Value) -> u8 {
            match v {
                Value::Null => 0,
                Value::Bool(_) => 1,
                Value::I64(_) => 2,
                Value::F64(_) => 3,
                Value::String(_) => 4,
                Value::Bytes(_) => 5,
            }
        }
        match (a, b) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
            (Value::I64(x), Value::I64(y)) => x.cmp(y),
            (Value::F64(x), Value::F64(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
            (Value::String(x), Value::String(y)) => x.cmp(y),
            (Value::Bytes(x), Value::Bytes(y)) => x.cmp(y),
            _ => rank(a).cmp(&rank(b)),
        }
    }
}
