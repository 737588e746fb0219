//! Structural expression equality with one-pair row-variable unification
//! (component C2).
//!
//! Two trees are equal if they perform the same computation — not if they
//! are the same object. The one wrinkle is the unification pair: when
//! comparing a column's extraction expression (bound to the column's own
//! row variable) against a predicate subtree (bound to the query's row
//! variable), the two row variables are a priori different `ParamId`s but
//! should compare equal everywhere they appear. `unify` names that pair.

use crate::ast::{Expr, ParamId};

/// Compares two optional subtrees — used for the `target` of `Member`/`Call`
/// nodes, which is `None` for static members/calls.
pub fn expr_eq_opt(x: Option<&Expr>, y: Option<&Expr>, unify: Option<(ParamId, ParamId)>) -> bool {
    match (x, y) {
        (None, None) => true,
        (None, Some(_)) | (Some(_), None) => false,
        (Some(x), Some(y)) => expr_eq(x, y, unify),
    }
}

fn is_unify_member(p: ParamId, unify: Option<(ParamId, ParamId)>) -> bool { matches!(unify, Some((u1, u2)) if p == u1 || p == u2) }

/// Compares two expression trees, unifying `unify.0` and `unify.1` wherever
/// either appears as a `Parameter` node on either side.
pub fn expr_eq(x: &Expr, y: &Expr, unify: Option<(ParamId, ParamId)>) -> bool {
    if let (Expr::Parameter(px), Expr::Parameter(py)) = (x, y) {
        if is_unify_member(*px, unify) && is_unify_member(*py, unify) {
            return true;
        }
        return px == py;
    }

    match (x, y) {
        (Expr::Literal(a), Expr::Literal(b)) => a == b,

        (Expr::Member { target: tx, member: mx }, Expr::Member { target: ty, member: my }) => {
            mx == my && expr_eq_opt(tx.as_deref(), ty.as_deref(), unify)
        }

        (Expr::Call { target: tx, method: mx, args: ax }, Expr::Call { target: ty, method: my, args: ay }) => {
            mx == my && expr_eq_opt(tx.as_deref(), ty.as_deref(), unify) && eq_slice(ax, ay, unify)
        }

        (Expr::Index { target: tx, index: ix }, Expr::Index { target: ty, index: iy }) => {
            expr_eq(tx, ty, unify) && expr_eq(ix, iy, unify)
        }

        (Expr::Binary { op: ox, left: lx, right: rx }, Expr::Binary { op: oy, left: ly, right: ry }) => {
            ox == oy && expr_eq(lx, ly, unify) && expr_eq(rx, ry, unify)
        }

        (Expr::Unary { op: ox, operand: ex }, Expr::Unary { op: oy, operand: ey }) => ox == oy && expr_eq(ex, ey, unify),

        (Expr::Lambda { params: px, return_type: rtx, body: bx }, Expr::Lambda { params: py, return_type: rty, body: by }) => {
            // Parameter *identity* within a nested lambda isn't meaningful here
            // (unification is a single pair, supplied by the caller for the
            // outer row variable) — arity stands in for "parameter list".
            rtx == rty && px.len() == py.len() && expr_eq(bx, by, unify)
        }

        (Expr::New { ctor: cx, args: ax }, Expr::New { ctor: cy, args: ay }) => cx == cy && eq_slice(ax, ay, unify),

        (Expr::NewArray { element_type: tx, elements: ex }, Expr::NewArray { element_type: ty, elements: ey }) => {
            tx == ty && eq_slice(ex, ey, unify)
        }

        (Expr::Default { ty: tx }, Expr::Default { ty: ty }) => tx == ty,

        // Unsupported/external node kinds: referential-identity fallback,
        // documented rather than silently treated as always-equal or
        // always-unequal.
        (Expr::Opaque(ox), Expr::Opaque(oy)) => ox == oy,

        _ => {
            tracing::trace!(?x, ?y, "expression node kinds differ, not equal");
            false
        }
    }
}

fn eq_slice(a: &[Expr], b: &[Expr], unify: Option<(ParamId, ParamId)>) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| expr_eq(x, y, unify))
}
