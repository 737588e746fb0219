//! Predicate recognition and normalization (component C4).
//!
//! Recognizes a comparison predicate against a given column and normalizes
//! it into a direction-tagged comparison against a literal operand. This is
//! the boundary between "arbitrary predicate term" and "something the
//! interval algebra can fold into a bound".

use crate::column::ColumnDescriptor;
use crate::index_match::IndexColumnMatch;
use crate::interval::Interval;
use rangeplan_expr::{BinaryOp, Expr, ParamId, UnaryOp};

/// The normalized output of predicate recognition.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnComparison {
    pub is_equality: bool,
    /// Meaningful for inequalities: `true` = "<=/<" (an upper bound), `false` = ">=/>" (a lower bound).
    pub is_upper_bound: bool,
    /// Meaningful for inequalities: whether the comparison is strict.
    pub is_exclusive: bool,
    pub operand: Expr,
}

/// Recognizes `expr` as a comparison against `column`, returning the
/// normalized form or `None` if it isn't one.
///
/// `top_level` gates the one rejection rule: a literal `!=` (equality with
/// `is_exclusive = true`) is only acceptable when reached through a `NOT`
/// (i.e. not at the outermost call) — `!(x != a)` is fine, `x != a` alone is
/// not an indexable restriction.
pub fn decode(column: &ColumnDescriptor, row_var: ParamId, expr: &Expr, top_level: bool) -> Option<ColumnComparison> {
    let result = decode_inner(column, row_var, expr)?;
    if top_level && result.is_equality && result.is_exclusive {
        return None;
    }
    Some(result)
}

fn decode_inner(column: &ColumnDescriptor, row_var: ParamId, expr: &Expr) -> Option<ColumnComparison> {
    if let Expr::Unary { op: UnaryOp::Not, operand } = expr {
        let inner = decode_inner(column, row_var, operand)?;
        return Some(ColumnComparison { is_exclusive: !inner.is_exclusive, is_upper_bound: !inner.is_upper_bound, ..inner });
    }

    let Expr::Binary { op, left, right } = expr else { return None };

    let (is_equality, is_upper_bound, is_exclusive) = match op {
        BinaryOp::Eq => (true, false, false),
        BinaryOp::NotEq => (true, false, true),
        BinaryOp::Lt => (false, true, true),
        BinaryOp::Lte => (false, true, false),
        BinaryOp::Gt => (false, false, true),
        BinaryOp::Gte => (false, false, false),
        _ => return None,
    };

    if column.matches(row_var, left) {
        Some(ColumnComparison { is_equality, is_upper_bound, is_exclusive, operand: (**right).clone() })
    } else if column.matches(row_var, right) {
        Some(ColumnComparison { is_equality, is_upper_bound: !is_upper_bound, is_exclusive, operand: (**left).clone() })
    } else {
        None
    }
}

/// Decodes `term` against `slot`'s column, and if it resolves to a literal
/// bound, intersects that bound into `slot.interval`.
///
/// Returns `true` iff the term was consumed (caller should clear it from its
/// pending list); `false` means "no match", which is always local — the
/// term is left intact for the caller to use as a post-filter.
pub fn match_predicate(slot: &mut IndexColumnMatch, row_var: ParamId, term: &Expr) -> bool {
    let crate::column::ColumnOrder::Ordered(cmp) = slot.column.order() else {
        return false;
    };

    let Some(comparison) = decode(&slot.column, row_var, term, true) else { return false };

    let Some(literal) = comparison.operand.as_literal() else {
        // Non-literal operand: only literal bounds can be folded into
        // intervals at plan time.
        return false;
    };

    let bound = if comparison.is_equality {
        Interval::single_point(literal.clone())
    } else {
        Interval::one_sided_bound(literal.clone(), comparison.is_exclusive, comparison.is_upper_bound)
    };

    slot.interval = slot.interval.intersect(&bound, cmp.as_ref());
    true
}
