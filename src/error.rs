//! Error kinds for the virtual-value algebra (spec.md §7).
//!
//! The teacher crate ties its `Diagnostic` type to source spans rendered
//! through `ariadne`; that doesn't fit a library with no source text.
//! `thiserror` is used here instead, following the pack's
//! `alliecatowo-lumen` convention for plain (non-span) error enums.

/// Everything that can go wrong evaluating a virtual value.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Arithmetic by an exact zero constant (`div`, `idiv`).
    #[error("division by zero")]
    DivByZero,

    /// A range normalization produced a NaN endpoint with no sound
    /// interpretation.
    #[error("NaN edge in range")]
    NaNEdge,

    /// `range_adjust` was asked to force integrality on a range that
    /// contains no integer.
    #[error("no integer representation for range")]
    NoIntegerRepresentation,

    /// A `BoolConstraint` visitor was applied to a non-Boolean subject.
    /// Unreachable through this crate's own API (the type system rules it
    /// out) but kept for API completeness — see SPEC_FULL.md §3.1.
    #[error("constraint visitor applied to a non-Boolean subject")]
    InvalidBooleanSubject,

    /// A `NumConstraint` visitor was applied to a non-Number subject.
    #[error("constraint visitor applied to a non-Number subject")]
    InvalidNumberSubject,

    /// A caller-triggerable precondition was violated (e.g. constructing
    /// a `Number` from zero ranges, or an `Or` constraint with fewer than
    /// two variants). Fatal to the operation, but never a panic.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// The operation does not support multi-range (`next`-chain) operands
    /// yet. Spec.md §9 directs that unimplemented multi-range paths must
    /// surface this way rather than panic.
    #[error("operation unsupported on multi-range cells: {0}")]
    Unsupported(String),
}

pub type Result<T> = std::result::Result<T, Error>;
