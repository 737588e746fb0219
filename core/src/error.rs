use thiserror::Error;

/// Construction-time contract violations for the planning layer.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("index has no columns to plan against")]
    EmptyIndex,
}

/// Errors from operating a `FilteredCursor`.
#[derive(Debug, Error)]
pub enum CursorError {
    /// A column given to `FilteredCursor::new` uses an equivalence
    /// comparator rather than a total order — C6 has no seek algorithm for
    /// hash-indexed columns.
    #[error("column {0} is not ordered")]
    UnorderedColumn(usize),

    /// An operation was attempted after `release()` (or after the cursor was
    /// dropped and this error was surfaced through a clone of its state).
    #[error("operation attempted on a released cursor")]
    Disposed,

    /// The underlying `SeekableCursor` failed.
    #[error("underlying cursor error: {0}")]
    Underlying(#[source] Box<dyn std::error::Error + Send + Sync>),
}
