//! Residual relational facts attached to a [`super::NumCellData`]
//! (spec.md §4.5), the `Number` counterpart to
//! [`crate::boolean::BoolConstraint`].
//!
//! Numbers carry six relations instead of Boolean's two, since order
//! comparisons (`<`, `<=`, `>`, `>=`) are meaningful here.

use crate::number::NumCellRef;
use crate::trilean::Trilean;

/// A residual fact a `NumCell` carries about its relationship to another
/// cell, consulted when the cell's own range/value doesn't decide a
/// query outright.
#[derive(Clone, Debug)]
pub enum NumConstraint {
    Equal(NumCellRef),
    NotEqual(NumCellRef),
    Less(NumCellRef),
    LessEqual(NumCellRef),
    Greater(NumCellRef),
    GreaterEqual(NumCellRef),
    /// True if any variant reports True; False if every variant reports
    /// False; else Unknown. Must hold at least two variants.
    Or(Vec<NumConstraint>),
}

impl NumConstraint {
    pub fn or(variants: Vec<NumConstraint>) -> crate::error::Result<NumConstraint> {
        if variants.len() < 2 {
            return Err(crate::error::Error::InvariantViolation(
                "NumberOr requires at least two variants".into(),
            ));
        }
        Ok(NumConstraint::Or(variants))
    }

    pub(crate) fn equal(&self, other: &NumCellRef, depth: u32) -> Trilean {
        match self {
            NumConstraint::Equal(subject) => {
                if std::rc::Rc::ptr_eq(subject, other) {
                    Trilean::True
                } else {
                    super::equal_cells_depth(subject, other, depth)
                }
            }
            NumConstraint::NotEqual(subject) => self.not_equal_inner(subject, other, depth).not(),
            NumConstraint::Less(subject) => super::less_cells_depth(subject, other, depth),
            NumConstraint::LessEqual(subject) => {
                super::less_cells_depth(subject, other, depth)
                    .or(super::equal_cells_depth(subject, other, depth))
            }
            NumConstraint::Greater(subject) => super::less_cells_depth(other, subject, depth),
            NumConstraint::GreaterEqual(subject) => {
                super::less_cells_depth(other, subject, depth)
                    .or(super::equal_cells_depth(subject, other, depth))
            }
            NumConstraint::Or(variants) => {
                Trilean::fold_or(variants.iter().map(|v| v.equal(other, depth)))
            }
        }
    }

    fn not_equal_inner(&self, subject: &NumCellRef, other: &NumCellRef, depth: u32) -> Trilean {
        if std::rc::Rc::ptr_eq(subject, other) {
            Trilean::False
        } else {
            super::equal_cells_depth(subject, other, depth)
        }
    }

    pub(crate) fn less(&self, other: &NumCellRef, depth: u32) -> Trilean {
        match self {
            NumConstraint::Less(subject) => {
                if std::rc::Rc::ptr_eq(subject, other) {
                    Trilean::True
                } else {
                    super::less_cells_depth(subject, other, depth)
                }
            }
            NumConstraint::LessEqual(subject) => super::less_cells_depth(subject, other, depth),
            NumConstraint::Equal(subject) | NumConstraint::GreaterEqual(subject) => {
                if std::rc::Rc::ptr_eq(subject, other) {
                    Trilean::False
                } else {
                    Trilean::Unknown
                }
            }
            NumConstraint::Greater(_) | NumConstraint::NotEqual(_) => Trilean::Unknown,
            NumConstraint::Or(variants) => {
                Trilean::fold_or(variants.iter().map(|v| v.less(other, depth)))
            }
        }
    }

    /// Dual of [`NumConstraint::less`] — "is the subject greater than
    /// `other`?"
    pub(crate) fn greater(&self, other: &NumCellRef, depth: u32) -> Trilean {
        match self {
            NumConstraint::Greater(subject) => {
                if std::rc::Rc::ptr_eq(subject, other) {
                    Trilean::True
                } else {
                    super::less_cells_depth(other, subject, depth)
                }
            }
            NumConstraint::GreaterEqual(subject) => super::less_cells_depth(other, subject, depth),
            NumConstraint::Equal(subject) | NumConstraint::LessEqual(subject) => {
                if std::rc::Rc::ptr_eq(subject, other) {
                    Trilean::False
                } else {
                    Trilean::Unknown
                }
            }
            NumConstraint::Less(_) | NumConstraint::NotEqual(_) => Trilean::Unknown,
            NumConstraint::Or(variants) => {
                Trilean::fold_or(variants.iter().map(|v| v.greater(other, depth)))
            }
        }
    }

    /// Rewrite this constraint so `subject` is replaced by `new_subject`,
    /// flipping the relation's direction when needed (e.g. `a < b`
    /// becomes `b > a`).
    pub fn inverse(&self, new_subject: NumCellRef) -> NumConstraint {
        match self {
            NumConstraint::Equal(_) => NumConstraint::Equal(new_subject),
            NumConstraint::NotEqual(_) => NumConstraint::NotEqual(new_subject),
            NumConstraint::Less(_) => NumConstraint::Greater(new_subject),
            NumConstraint::LessEqual(_) => NumConstraint::GreaterEqual(new_subject),
            NumConstraint::Greater(_) => NumConstraint::Less(new_subject),
            NumConstraint::GreaterEqual(_) => NumConstraint::LessEqual(new_subject),
            NumConstraint::Or(variants) => NumConstraint::Or(
                variants
                    .iter()
                    .map(|v| v.inverse(new_subject.clone()))
                    .collect(),
            ),
        }
    }
}
