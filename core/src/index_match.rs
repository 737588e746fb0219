//! Index-column match attribution (component C5).
//!
//! For a given ordered index and a list of predicate terms, attributes each
//! term to at most one column and folds its interval in.

use crate::column::ColumnDescriptor;
use crate::decode::match_predicate;
use crate::interval::Interval;
use crate::table_index::TableIndex;
use rangeplan_expr::{Expr, ParamId, Value};

/// The accumulated interval for one index column, produced during planning
/// and consumed read-only by the filtered cursor at run time.
#[derive(Debug, Clone)]
pub struct IndexColumnMatch {
    pub(crate) column: ColumnDescriptor,
    pub interval: Interval<Value>,
}

impl IndexColumnMatch {
    pub fn new(column: ColumnDescriptor) -> Self { Self { column, interval: Interval::universe() } }

    pub fn column(&self) -> &ColumnDescriptor { &self.column }
}

/// Attributes each term in `terms` to at most one column of `index`, in
/// column order, clearing consumed slots in `terms` as it goes.
///
/// A term that matches nothing is left in place (`Some(_)`) for the caller
/// to use as a post-filter. A term that could match more than one column is
/// attributed to the leftmost — the inner walk stops at the first success.
pub fn compute_matches(index: &TableIndex, row_var: ParamId, terms: &mut [Option<Expr>]) -> Vec<IndexColumnMatch> {
    let mut matches: Vec<IndexColumnMatch> = index.columns().iter().cloned().map(IndexColumnMatch::new).collect();

    for term_slot in terms.iter_mut() {
        let Some(term) = term_slot else { continue };
        for slot in matches.iter_mut() {
            if match_predicate(slot, row_var, term) {
                tracing::trace!(column = ?slot.column().column_expr(), "attributed predicate term to column");
                *term_slot = None;
                break;
            }
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnOrder;
    use crate::table_index::TableIndex;
    use rangeplan_expr::{BinaryOp, MemberId, NaturalValueOrder, TypeId};

    fn row_member(p: ParamId, name: &str) -> Expr {
        Expr::member(Some(Expr::param(p)), MemberId { declaring_type: TypeId::new("Row"), name: name.to_string() })
    }

    #[test]
    fn attributes_each_term_to_leftmost_matching_column() {
        let col_row = ParamId::fresh();
        let index = TableIndex::new(vec![
            ColumnDescriptor::new(col_row, row_member(col_row, "a"), ColumnOrder::ordered(NaturalValueOrder), false),
            ColumnDescriptor::new(col_row, row_member(col_row, "b"), ColumnOrder::ordered(NaturalValueOrder), false),
        ])
        .unwrap();

        let query_row = ParamId::fresh();
        let mut terms = vec![
            Some(Expr::binary(BinaryOp::Gte, row_member(query_row, "a"), Expr::literal(3i64))),
            Some(Expr::binary(BinaryOp::Lte, row_member(query_row, "a"), Expr::literal(7i64))),
            Some(Expr::binary(BinaryOp::Eq, row_member(query_row, "b"), Expr::literal(9i64))),
            Some(Expr::binary(BinaryOp::NotEq, row_member(query_row, "b"), Expr::literal(0i64))), // not indexable
        ];

        let matches = compute_matches(&index, query_row, &mut terms);

        assert_eq!(matches[0].interval.lower().unwrap().value, Value::I64(3));
        assert_eq!(matches[0].interval.upper().unwrap().value, Value::I64(7));
        assert_eq!(matches[1].interval.lower().unwrap().value, Value::I64(9));
        assert_eq!(matches[1].interval.upper().unwrap().value, Value::I64(9));

        // First three consumed, the top-level `!=` left as a post-filter term.
        assert!(terms[0].is_none());
        assert!(terms[1].is_none());
        assert!(terms[2].is_none());
        assert!(terms[3].is_some());
    }
}
