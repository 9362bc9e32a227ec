//! A virtual-value algebra for abstract interpretation: three-valued
//! Booleans and interval-typed Numbers, each carrying a relational-
//! constraint graph so residual facts survive past the operation that
//! produced them (spec.md OVERVIEW).
//!
//! The two domains share a common shape — an identity-bearing cell
//! behind a cheap-to-clone handle, a depth-bounded constraint consult
//! before falling back to structural reasoning — captured in [`value::Value`]
//! and split into [`boolean`] and [`number`] because their constraint
//! vocabularies differ (two relations vs. six).

pub mod boolean;
pub mod error;
pub mod number;
pub mod trilean;
pub mod value;

pub use boolean::{BoolConstraint, Boolean};
pub use error::{Error, Result};
pub use number::{BinaryOp, ComputeError, Edge, NumConstraint, Number, Range, RangeOp};
pub use trilean::Trilean;
pub use value::Value;
