//! Host-language expression tree dialect and structural expression equality.
//!
//! This crate is the smaller of the two: it defines the node-kind vocabulary
//! a predicate term or column-extraction expression is built from, and the
//! one nontrivial operation over it — structural equality up to a single
//! row-variable unification pair.

pub mod ast;
pub mod equality;
pub mod error;
pub mod value;

pub use ast::*;
pub use equality::{expr_eq, expr_eq_opt};
pub use value::{NaturalValueOrder, TotalOrder, Value};
