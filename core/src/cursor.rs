//! The multi-column filtered cursor (component C6).
//!
//! Drives an underlying [`SeekableCursor`] so that it yields exactly the
//! rows whose key tuple lies in the product of the per-column intervals
//! computed by planning (C5), in index order, with work bounded by the
//! size of the output rather than of the table.
//!
//! The state machine is written as an explicit `Phase` enum driven by a
//! loop, not as a recursive or `goto`-threaded function — some transitions
//! jump back to strictly earlier phases after a side effect (a roll-over
//! detected mid-scan, or a jump seek past a violated upper bound), and that
//! reads far more clearly as a tagged loop than as nested booleans.

use crate::column::ColumnOrder;
use crate::error::CursorError;
use crate::index_match::IndexColumnMatch;
use rangeplan_expr::{TotalOrder, Value};
use std::cmp::Ordering;

/// The underlying ordered cursor C6 drives. An external collaborator: the
/// concrete storage engine implements this, never this crate.
pub trait SeekableCursor {
    type Row;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Advances one row in index order. `false` iff past the end.
    fn move_next(&mut self) -> Result<bool, Self::Error>;

    /// The current row. Only meaningful after `move_next`/`seek_to` returned `true`.
    fn current(&self) -> Option<&Self::Row>;

    /// The current row's `ordinal`-th key column value. Undefined before the
    /// first successful `move_next`/`seek_to`.
    fn get_column_value(&self, ordinal: usize) -> Value;

    /// Positions at the lower bound (`following = false`) or upper bound
    /// (`following = true`) of key tuples whose first `prefix_length`
    /// components equal `key_values[..prefix_length]`. Returns `false` iff
    /// no such position exists. On `true`, the cursor is left positioned on
    /// a row — no extra `move_next` is needed.
    fn seek_to(&mut self, prefix_length: usize, key_values: &[Value], following: bool) -> Result<bool, Self::Error>;

    /// Rewinds to before the first row.
    fn reset(&mut self) -> Result<(), Self::Error>;
}

enum Phase {
    StartColumn(usize),
    CheckRoll(usize),
    UpdateThis(usize),
    CheckThis(usize),
}

/// Drives `C` so that `move_next` yields only rows in the product of
/// `matches`' intervals.
pub struct FilteredCursor<C: SeekableCursor> {
    cursor: C,
    matches: Vec<IndexColumnMatch>,
    /// Number of leading index columns under constraint; columns beyond this
    /// are unconstrained and traversed naturally by `cursor`.
    k: usize,
    started: bool,
    /// Cache of the last-observed values of the first `k` key columns.
    current_key: Vec<Value>,
    /// Any column's interval was empty at construction — the product is
    /// empty and no row can ever satisfy it, so every `move_next` is `false`
    /// without touching `cursor` at all.
    vacuous: bool,
    released: bool,
}

impl<C: SeekableCursor> FilteredCursor<C> {
    /// Takes exclusive ownership of `cursor` for the filtered cursor's
    /// lifetime. Fails loudly if any matched column isn't ordered — C6 has
    /// no algorithm for hash-indexed (equivalence-only) columns.
    pub fn new(cursor: C, matches: Vec<IndexColumnMatch>) -> Result<Self, CursorError> {
        for (i, m) in matches.iter().enumerate() {
            if !m.column().order().is_ordered() {
                return Err(CursorError::UnorderedColumn(i));
            }
        }
        let k = matches.len();
        let vacuous = matches.iter().any(|m| m.interval.is_empty());
        Ok(Self { cursor, matches, k, started: false, current_key: vec![Value::Null; k], vacuous, released: false })
    }

    fn ensure_alive(&self) -> Result<(), CursorError> {
        if self.released { Err(CursorError::Disposed) } else { Ok(()) }
    }

    fn comparator(&self, j: usize) -> &(dyn TotalOrder<Value> + Send + Sync) {
        match self.matches[j].column().order() {
            ColumnOrder::Ordered(cmp) => cmp.as_ref(),
            ColumnOrder::Equivalence(_) => unreachable!("validated as ordered in `new`"),
        }
    }

    fn wrap(e: C::Error) -> CursorError { CursorError::Underlying(Box::new(e)) }

    /// Advances to the next row satisfying every column's interval, in
    /// index order. `false` iff exhausted.
    pub fn move_next(&mut self) -> Result<bool, CursorError> {
        self.ensure_alive()?;

        if self.vacuous {
            return Ok(false);
        }

        let k = self.k;
        if k == 0 {
            return self.cursor.move_next().map_err(Self::wrap);
        }

        let mut phase = if !self.started {
            self.started = true;
            if self.matches[0].interval.lower().is_none() {
                // Column 0 has no lower bound to seek to; establish an
                // initial position the same way a subsequent call would.
                if !self.cursor.move_next().map_err(Self::wrap)? {
                    return Ok(false);
                }
                Phase::UpdateThis(0)
            } else {
                Phase::StartColumn(0)
            }
        } else {
            if !self.cursor.move_next().map_err(Self::wrap)? {
                return Ok(false);
            }
            Phase::CheckRoll(k - 1)
        };

        loop {
            phase = match phase {
                Phase::StartColumn(j) => match self.matches[j].interval.lower().cloned() {
                    Some(edge) => {
                        self.current_key[j] = edge.value.clone();
                        tracing::trace!(column = j, exclusive = edge.exclusive, "seeking to column lower bound");
                        if !self.cursor.seek_to(j + 1, &self.current_key[..=j], edge.exclusive).map_err(Self::wrap)? {
                            return Ok(false);
                        }
                        Phase::CheckRoll(j)
                    }
                    None => Phase::UpdateThis(j),
                },

                Phase::CheckRoll(j) => {
                    let mut rolled = None;
                    for i in 0..j {
                        let seen = self.cursor.get_column_value(i);
                        if self.comparator(i).compare(&seen, &self.current_key[i]) != Ordering::Equal {
                            tracing::trace!(column = i, "preceding column rolled over, re-checking from there");
                            self.current_key[i] = seen;
                            rolled = Some(i);
                            break;
                        }
                    }
                    match rolled {
                        Some(i) => Phase::CheckThis(i),
                        None => Phase::UpdateThis(j),
                    }
                }

                Phase::UpdateThis(j) => {
                    self.current_key[j] = self.cursor.get_column_value(j);
                    Phase::CheckThis(j)
                }

                Phase::CheckThis(j) => {
                    let violates_upper = match self.matches[j].interval.upper() {
                        Some(edge) => match self.comparator(j).compare(&self.current_key[j], &edge.value) {
                            Ordering::Greater => true,
                            Ordering::Equal => edge.exclusive,
                            Ordering::Less => false,
                        },
                        None => false,
                    };

                    if violates_upper {
                        tracing::trace!(column = j, "upper bound violated, jumping past preceding prefix");
                        if !self.cursor.seek_to(j, &self.current_key[..j], true).map_err(Self::wrap)? {
                            return Ok(false);
                        }
                        // `seek_to` with an empty prefix (j == 0) can never
                        // find a row "strictly past" it, so reaching here
                        // with a successful seek implies j > 0.
                        Phase::CheckRoll(j - 1)
                    } else if j + 1 == k {
                        return Ok(true);
                    } else {
                        Phase::StartColumn(j + 1)
                    }
                }
            };
        }
    }

    /// The current row, if `move_next` last returned `true`.
    pub fn current(&self) -> Result<Option<&C::Row>, CursorError> {
        self.ensure_alive()?;
        Ok(self.cursor.current())
    }

    /// Rewinds the underlying cursor and clears cached state.
    pub fn reset(&mut self) -> Result<(), CursorError> {
        self.ensure_alive()?;
        self.cursor.reset().map_err(Self::wrap)?;
        self.started = false;
        Ok(())
    }

    /// Releases the underlying cursor early. Any operation after this
    /// returns `CursorError::Disposed`. Idempotent.
    pub fn release(&mut self) { self.released = true; }
}

impl<C: SeekableCursor> Drop for FilteredCursor<C> {
    fn drop(&mut self) { self.released = true; }
}

pub mod testsupport;
