//! An ordered index: a sequence of columns with per-column scan direction.
//!
//! Only ordered indices are represented here; a hash index has no cursor
//! algorithm in this crate and so has no run-time support.

use crate::column::ColumnDescriptor;
use crate::error::PlanError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexDirection {
    Asc,
    Desc,
}

/// An ordered sequence of `ColumnDescriptor`s. The flattened key has the
/// lexicographic total order induced by column order.
#[derive(Debug, Clone)]
pub struct TableIndex {
    columns: Vec<ColumnDescriptor>,
    directions: Vec<IndexDirection>,
    is_ordered: bool,
}

impl TableIndex {
    /// Builds an ordered index with every column ascending.
    pub fn new(columns: Vec<ColumnDescriptor>) -> Result<Self, PlanError> {
        if columns.is_empty() {
            return Err(PlanError::EmptyIndex);
        }
        let directions = vec![IndexDirection::Asc; columns.len()];
        Ok(Self { columns, directions, is_ordered: true })
    }

    /// Builds an ordered index with an explicit per-column direction.
    pub fn with_directions(columns: Vec<ColumnDescriptor>, directions: Vec<IndexDirection>) -> Result<Self, PlanError> {
        if columns.is_empty() {
            return Err(PlanError::EmptyIndex);
        }
        assert_eq!(columns.len(), directions.len(), "one direction per column is required");
        Ok(Self { columns, directions, is_ordered: true })
    }

    pub fn columns(&self) -> &[ColumnDescriptor] { &self.columns }

    pub fn direction(&self, ordinal: usize) -> IndexDirection { self.directions[ordinal] }

    pub fn is_ordered(&self) -> bool { self.is_ordered }

    pub fn len(&self) -> usize { self.columns.len() }

    pub fn is_empty(&self) -> bool { self.columns.is_empty() }
}

/// Whether a query's required column order is satisfiable by scanning this
/// index forwards, in reverse, or not at all. This is metadata for the
/// (out-of-scope) index-choice policy — the filtered cursor itself doesn't
/// consult it, since `SeekableCursor` is already responsible for its own
/// physical iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionMatch {
    Forward,
    Reverse,
}

/// Compares a query's required directions (a prefix) against this index's
/// directions: satisfiable by scanning forwards, by scanning in reverse, or
/// not at all if the prefix doesn't agree with either direction throughout.
pub fn direction_match(required: &[IndexDirection], index: &TableIndex) -> Option<DirectionMatch> {
    if required.len() > index.len() {
        return None;
    }
    let mut forward = true;
    let mut reverse = true;
    for (i, want) in required.iter().enumerate() {
        let have = index.direction(i);
        if want != &have {
            forward = false;
        } else {
            reverse = false;
        }
    }
    if forward {
        Some(DirectionMatch::Forward)
    } else if reverse {
        Some(DirectionMatch::Reverse)
    } else {
        None
    }
}
