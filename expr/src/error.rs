use thiserror::Error;

/// Errors from this crate's expression-tree operations. Structural equality
/// is total over the dialect, so this has no variants yet.
#[derive(Debug, Error)]
pub enum EqualityError {}
