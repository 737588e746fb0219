//! Interval-algebra query planning and filtered cursor execution over
//! ordered table indices.
//!
//! Six components cover the path from a decoded predicate term to a filtered
//! scan: an interval algebra (`interval`), column descriptors (`column`),
//! predicate decoding (`decode`), index-column attribution (`index_match`),
//! and the cursor state machine that drives a caller-supplied
//! `SeekableCursor` (`cursor`). `table_index` supplements the index-metadata
//! surface the other five assume.

pub mod column;
pub mod cursor;
pub mod decode;
pub mod error;
pub mod index_match;
pub mod interval;
pub mod table_index;

pub use column::{ColumnDescriptor, ColumnOrder};
pub use cursor::{FilteredCursor, SeekableCursor};
pub use decode::{decode, ColumnComparison};
pub use error::{CursorError, PlanError};
pub use index_match::{compute_matches, IndexColumnMatch};
pub use interval::{Edge, Interval};
pub use table_index::{direction_match, DirectionMatch, IndexDirection, TableIndex};
