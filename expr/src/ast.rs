//! The expression-tree dialect accepted by the planner.
//!
//! This mirrors the shape of a host-language lambda expression tree (think
//! `Expression<Func<Row, bool>>`): a predicate term is a small tree of
//! comparisons, member accesses, and calls, rooted at a `Parameter` node
//! that stands for "the current row". Node kinds outside this list are
//! represented as `Opaque` and compared structurally by identity only (see
//! `equality` module) — this is a documented fallback, not silent data loss.

use crate::value::Value;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

/// Identifies a nominal type by name, for the identity-bearing metadata
/// `Default`, `NewArray`, and `Lambda` carry (declared element/return type).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeId(pub String);

impl TypeId {
    pub fn new(name: impl Into<String>) -> Self { Self(name.into()) }
}

/// Identifies a field or property being accessed by a `Member` node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberId {
    pub declaring_type: TypeId,
    pub name: String,
}

/// Identifies the method or function invoked by a `Call` node, including its
/// parameter types so overloads are distinguished.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodId {
    pub declaring_type: TypeId,
    pub name: String,
    pub param_types: Vec<TypeId>,
}

/// Identifies the constructor invoked by a `New` node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CtorId {
    pub declaring_type: TypeId,
    pub param_types: Vec<TypeId>,
}

/// Identifies a row-variable (lambda parameter) slot.
///
/// Two `Parameter` nodes are structurally equal only if they carry the same
/// `ParamId`, *unless* the comparison's unification pair names both of
/// them — that's the one hook that lets a column's extraction expression
/// (bound to its own row variable) match a predicate subtree bound to a
/// different row variable of the same query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParamId(pub u64);

impl ParamId {
    /// Allocates a fresh, process-unique parameter id.
    pub fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        ParamId(NEXT.fetch_add(1, AtomicOrdering::Relaxed))
    }
}

/// Identifies a node kind this dialect doesn't otherwise model. Compared by
/// identity (`OpaqueId` equality) only — a documented referential-identity
/// fallback, not silent data loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpaqueId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Eq,
    NotEq,
    Lt,
    Lte,
    Gt,
    Gte,
    And,
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
    Not,
}

/// A node in the expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A constant value.
    Literal(Value),
    /// A row-variable reference (the dialect's lambda parameter).
    Parameter(ParamId),
    /// Field/property access. `target` is `None` for a static member.
    Member { target: Option<Box<Expr>>, member: MemberId },
    /// Method or free-function invocation. `target` is `None` for a static call.
    Call { target: Option<Box<Expr>>, method: MethodId, args: Vec<Expr> },
    /// Indexer access, `target[index]`.
    Index { target: Box<Expr>, index: Box<Expr> },
    /// Binary arithmetic, comparison, or logical operator.
    Binary { op: BinaryOp, left: Box<Expr>, right: Box<Expr> },
    /// Unary negation or logical not.
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// A lambda; `params` are typically a single row variable.
    Lambda { params: Vec<ParamId>, return_type: TypeId, body: Box<Expr> },
    /// Constructor invocation.
    New { ctor: CtorId, args: Vec<Expr> },
    /// Array-literal construction.
    NewArray { element_type: TypeId, elements: Vec<Expr> },
    /// `default(T)` / the zero value of a declared type.
    Default { ty: TypeId },
    /// Any node kind outside this dialect; compared by identity only.
    Opaque(OpaqueId),
}

impl Expr {
    pub fn param(id: ParamId) -> Self { Expr::Parameter(id) }

    pub fn literal(v: impl Into<Value>) -> Self { Expr::Literal(v.into()) }

    pub fn member(target: Option<Expr>, member: MemberId) -> Self { Expr::Member { target: target.map(Box::new), member } }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary { op, left: Box::new(left), right: Box::new(right) }
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self { Expr::Unary { op, operand: Box::new(operand) } }

    pub fn not(inner: Expr) -> Self { Self::unary(UnaryOp::Not, inner) }

    /// True if this node is a `Literal`.
    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            Expr::Literal(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self { Value::I64(v) }
}
impl From<f64> for Value {
    fn from(v: f64) -> Self { Value::F64(v) }
}
impl From<bool> for Value {
    fn from(v: bool) -> Self { Value::Bool(v) }
}
impl From<String> for Value {
    fn from(v: String) -> Self { Value::String(v) }
}
impl From<&str> for Value {
    fn from(v: &str) -> Self { Value::String(v.to_string()) }
}
