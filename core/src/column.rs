//! Column descriptors (component C3): a column's key-extraction expression,
//! its comparator, and the one nontrivial query — "does this expression
//! extract me?".

use rangeplan_expr::{expr_eq, Expr, ParamId, TotalOrder, Value};
use std::sync::Arc;

/// A column's comparator: exactly one of a total order (for ordered/ B-tree
/// style indices) or an equivalence (for hash indices). An enum makes the
/// "exactly one of the two is present" invariant unrepresentable any other
/// way, which two `Option` fields would not.
#[derive(Clone)]
pub enum ColumnOrder {
    Ordered(Arc<dyn TotalOrder<Value> + Send + Sync>),
    Equivalence(Arc<dyn Fn(&Value, &Value) -> bool + Send + Sync>),
}

impl ColumnOrder {
    pub fn ordered<C>(cmp: C) -> Self
    where C: TotalOrder<Value> + Send + Sync + 'static {
        ColumnOrder::Ordered(Arc::new(cmp))
    }

    pub fn is_ordered(&self) -> bool { matches!(self, ColumnOrder::Ordered(_)) }
}

impl std::fmt::Debug for ColumnOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnOrder::Ordered(_) => write!(f, "ColumnOrder::Ordered(..)"),
            ColumnOrder::Equivalence(_) => write!(f, "ColumnOrder::Equivalence(..)"),
        }
    }
}

/// A column of an index: the placeholder row-expression it's defined
/// against, the extraction expression itself, its comparator, and whether
/// the column is known-unique.
///
/// Built once when the index catalog is defined and treated as immutable
/// during planning.
#[derive(Debug, Clone)]
pub struct ColumnDescriptor {
    /// The row-variable slot standing for "a row" inside `column_expr`.
    row_param: ParamId,
    /// The extraction expression, e.g. `row => row.age`.
    column_expr: Expr,
    order: ColumnOrder,
    is_unique: bool,
}

impl ColumnDescriptor {
    pub fn new(row_param: ParamId, column_expr: Expr, order: ColumnOrder, is_unique: bool) -> Self {
        Self { row_param, column_expr, order, is_unique }
    }

    pub fn row_param(&self) -> ParamId { self.row_param }

    pub fn column_expr(&self) -> &Expr { &self.column_expr }

    pub fn order(&self) -> &ColumnOrder { &self.order }

    pub fn is_unique(&self) -> bool { self.is_unique }

    /// Returns true iff `expr` is structurally equal to this column's
    /// extraction expression, when this column's row-placeholder is
    /// unified with `row_var`.
    pub fn matches(&self, row_var: ParamId, expr: &Expr) -> bool { expr_eq(&self.column_expr, expr, Some((self.row_param, row_var))) }
}
