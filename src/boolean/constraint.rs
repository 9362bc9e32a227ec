//! Tagged relational predicates attached to a [`super::BoolCellData`]
//! (spec.md §4.2).

use crate::boolean::BoolCellRef;
use crate::trilean::Trilean;

/// A residual fact a `BoolCell` carries about its relationship to another
/// cell, consulted when the cell's own value is `Unknown`.
#[derive(Clone, Debug)]
pub enum BoolConstraint {
    /// The subject is semantically equal to the constrained cell.
    Equal(BoolCellRef),
    /// The subject is semantically unequal to the constrained cell.
    NotEqual(BoolCellRef),
    /// True if any variant reports True; False if every variant reports
    /// False; else Unknown. Must hold at least two variants — built only
    /// through [`BoolConstraint::or`], which enforces that.
    Or(Vec<BoolConstraint>),
    /// Always `Unknown`, regardless of the query. Reserved for callers
    /// that want to append "no fact available" to a constraint list.
    Dummy,
}

impl BoolConstraint {
    /// Build an `Or` constraint. Spec.md §7 treats an `Or` with fewer
    /// than two variants as a caller bug — we surface it as an
    /// `InvariantViolation` rather than accept a degenerate constraint.
    pub fn or(variants: Vec<BoolConstraint>) -> crate::error::Result<BoolConstraint> {
        if variants.len() < 2 {
            return Err(crate::error::Error::InvariantViolation(
                "BooleanOr requires at least two variants".into(),
            ));
        }
        Ok(BoolConstraint::Or(variants))
    }

    /// Evaluate "is the subject equal to `other`?" under this constraint,
    /// within `depth` remaining hops of recursive constraint-chasing
    /// (see [`super::MAX_CONSTRAINT_DEPTH`]).
    pub(crate) fn equal(&self, other: &BoolCellRef, depth: u32) -> Trilean {
        match self {
            BoolConstraint::Equal(subject) => {
                if std::rc::Rc::ptr_eq(subject, other) {
                    Trilean::True
                } else {
                    super::equal_cells_depth(subject, other, depth).value()
                }
            }
            BoolConstraint::NotEqual(subject) => {
                if std::rc::Rc::ptr_eq(subject, other) {
                    Trilean::False
                } else {
                    super::equal_cells_depth(subject, other, depth).value().not()
                }
            }
            BoolConstraint::Or(variants) => {
                Trilean::fold_or(variants.iter().map(|v| v.equal(other, depth)))
            }
            BoolConstraint::Dummy => Trilean::Unknown,
        }
    }

    /// Evaluate "is the subject unequal to `other`?" — the dual of
    /// [`BoolConstraint::equal`].
    pub(crate) fn not_equal(&self, other: &BoolCellRef, depth: u32) -> Trilean {
        match self {
            BoolConstraint::Equal(_) | BoolConstraint::NotEqual(_) => {
                self.equal(other, depth).not()
            }
            BoolConstraint::Or(variants) => {
                Trilean::fold_or(variants.iter().map(|v| v.not_equal(other, depth)))
            }
            BoolConstraint::Dummy => Trilean::Unknown,
        }
    }

    /// Rewrite this constraint so `subject` is replaced by `new_subject`
    /// — used to propagate a fact from `a op b = c` to `b op a = c`
    /// (spec.md §4.2).
    pub fn inverse(&self, new_subject: BoolCellRef) -> BoolConstraint {
        match self {
            BoolConstraint::Equal(_) => BoolConstraint::Equal(new_subject),
            BoolConstraint::NotEqual(_) => BoolConstraint::NotEqual(new_subject),
            BoolConstraint::Or(variants) => BoolConstraint::Or(
                variants
                    .iter()
                    .map(|v| v.inverse(new_subject.clone()))
                    .collect(),
            ),
            BoolConstraint::Dummy => BoolConstraint::Dummy,
        }
    }
}
