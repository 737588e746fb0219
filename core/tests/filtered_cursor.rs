//! End-to-end scenarios driving `FilteredCursor` over the digits test
//! cursor: each scenario fixes a handful of column intervals and checks the
//! resulting row count, order, and (for the brute-force property test)
//! exact membership against an independent nested-loop reference.

use rangeplan_core::cursor::testsupport::DigitsCursor;
use rangeplan_core::{ColumnDescriptor, ColumnOrder, FilteredCursor, IndexColumnMatch, Interval};
use rangeplan_expr::{Expr, MemberId, NaturalValueOrder, ParamId, TypeId, Value};

/// Installs a `tracing` subscriber so `RUST_LOG=trace` surfaces the cursor's
/// seek/roll/jump instrumentation while debugging a failing scenario.
/// Idempotent: later calls in the same process are no-ops.
fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn column(name: &str) -> ColumnDescriptor {
    let p = ParamId::fresh();
    let expr = Expr::member(Some(Expr::param(p)), MemberId { declaring_type: TypeId::new("Row"), name: name.into() });
    ColumnDescriptor::new(p, expr, ColumnOrder::ordered(NaturalValueOrder), false)
}

fn matched(name: &str, interval: Interval<Value>) -> IndexColumnMatch {
    let mut m = IndexColumnMatch::new(column(name));
    m.interval = interval;
    m
}

fn drain(mut fc: FilteredCursor<DigitsCursor>) -> Vec<Vec<i64>> {
    let mut rows = Vec::new();
    while fc.move_next().unwrap() {
        rows.push(fc.current().unwrap().unwrap().clone());
    }
    rows
}

#[test]
fn four_constrained_columns_with_unconstrained_tail() {
    init_tracing();
    // c0 in [2,6], c1 universal, c2 = 4, c3 in (3,8) exclusive both ends; c4 is
    // an untouched tail column. Expected count: 5 * 10 * 1 * 4 * 10 = 2000.
    let matches = vec![
        matched("c0", Interval::lower_bounded(Value::I64(2), false).intersect(&Interval::upper_bounded(Value::I64(6), false), &NaturalValueOrder)),
        matched("c1", Interval::universe()),
        matched("c2", Interval::single_point(Value::I64(4))),
        matched("c3", Interval::lower_bounded(Value::I64(3), true).intersect(&Interval::upper_bounded(Value::I64(8), true), &NaturalValueOrder)),
    ];
    let fc = FilteredCursor::new(DigitsCursor::new(5), matches).unwrap();
    let rows = drain(fc);
    assert_eq!(rows.len(), 2000);
    for r in &rows {
        assert!((2..=6).contains(&r[0]));
        assert_eq!(r[2], 4);
        assert!((4..=7).contains(&r[3]));
    }
}

#[test]
fn no_constraints_yields_every_row_in_order() {
    init_tracing();
    let matches = vec![matched("c0", Interval::universe()), matched("c1", Interval::universe()), matched("c2", Interval::universe())];
    let fc = FilteredCursor::new(DigitsCursor::new(3), matches).unwrap();
    let rows = drain(fc);
    assert_eq!(rows.len(), 1000);
    assert_eq!(rows[0], vec![0, 0, 0]);
    assert_eq!(rows[999], vec![9, 9, 9]);
    for w in rows.windows(2) {
        assert!(w[0] < w[1]);
    }
}

#[test]
fn two_equality_constraints_leave_tail_column_free() {
    init_tracing();
    let matches = vec![matched("c0", Interval::single_point(Value::I64(3))), matched("c1", Interval::single_point(Value::I64(7)))];
    let fc = FilteredCursor::new(DigitsCursor::new(3), matches).unwrap();
    let rows = drain(fc);
    assert_eq!(rows.len(), 10);
    for (i, r) in rows.iter().enumerate() {
        assert_eq!(*r, vec![3, 7, i as i64]);
    }
}

#[test]
fn lower_exclusive_bound_on_leading_column() {
    init_tracing();
    // c0 in (5, 9] -> {6,7,8,9}, three unconstrained tail columns.
    let matches = vec![matched("c0", Interval::lower_bounded(Value::I64(5), true).intersect(&Interval::upper_bounded(Value::I64(9), false), &NaturalValueOrder))];
    let fc = FilteredCursor::new(DigitsCursor::new(4), matches).unwrap();
    let rows = drain(fc);
    assert_eq!(rows.len(), 4 * 1000);
    assert_eq!(rows[0], vec![6, 0, 0, 0]);
    assert_eq!(*rows.last().unwrap(), vec![9, 9, 9, 9]);
}

#[test]
fn empty_column_interval_short_circuits_to_zero_rows() {
    init_tracing();
    let contradictory = Interval::lower_bounded(Value::I64(8), false).intersect(&Interval::upper_bounded(Value::I64(3), false), &NaturalValueOrder);
    assert!(contradictory.is_empty());
    let matches = vec![matched("c0", Interval::single_point(Value::I64(5))), matched("c1", contradictory)];
    let fc = FilteredCursor::new(DigitsCursor::new(2), matches).unwrap();
    assert_eq!(drain(fc).len(), 0);
}

#[test]
fn reset_replays_the_same_sequence() {
    init_tracing();
    let matches = vec![matched("c0", Interval::lower_bounded(Value::I64(7), false))];
    let mut fc = FilteredCursor::new(DigitsCursor::new(2), matches).unwrap();

    let mut first = Vec::new();
    while fc.move_next().unwrap() {
        first.push(fc.current().unwrap().unwrap().clone());
    }

    fc.reset().unwrap();

    let mut second = Vec::new();
    while fc.move_next().unwrap() {
        second.push(fc.current().unwrap().unwrap().clone());
    }

    assert_eq!(first, second);
    assert_eq!(first.len(), 300);
}

#[test]
fn released_cursor_rejects_further_operations() {
    init_tracing();
    let matches = vec![matched("c0", Interval::universe())];
    let mut fc = FilteredCursor::new(DigitsCursor::new(2), matches).unwrap();
    assert!(fc.move_next().unwrap());
    fc.release();
    assert!(matches!(fc.move_next(), Err(rangeplan_core::CursorError::Disposed)));
    assert!(matches!(fc.current(), Err(rangeplan_core::CursorError::Disposed)));
    assert!(matches!(fc.reset(), Err(rangeplan_core::CursorError::Disposed)));
}

/// For every emitted row, each column's value lies within that column's
/// interval, output is strictly increasing (hence row-unique), and — by
/// nested-loop brute force over the full small domain — nothing in-range
/// was skipped.
#[test]
fn emitted_rows_equal_brute_force_membership_for_small_domain() {
    init_tracing();
    let n = 3;
    let c0 = Interval::lower_bounded(Value::I64(2), false).intersect(&Interval::upper_bounded(Value::I64(4), true), &NaturalValueOrder);
    let c2 = Interval::lower_bounded(Value::I64(1), true);

    let matches = vec![matched("c0", c0.clone()), matched("c1", Interval::universe()), matched("c2", c2.clone())];
    let fc = FilteredCursor::new(DigitsCursor::new(n), matches).unwrap();
    let rows = drain(fc);

    for w in rows.windows(2) {
        assert!(w[0] < w[1], "output must be strictly increasing");
    }

    let mut expected = Vec::new();
    for a in 0..10 {
        for b in 0..10 {
            for c in 0..10 {
                let in_c0 = a >= 2 && a < 4;
                let in_c2 = c > 1;
                if in_c0 && in_c2 {
                    expected.push(vec![a, b, c]);
                }
            }
        }
    }
    assert_eq!(rows, expected);
}
