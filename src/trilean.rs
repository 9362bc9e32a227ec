//! Three-valued truth lattice.
//!
//! `Trilean` is the value `BoolCell` and `NumCell`'s integrality flag are
//! built on. `Invalid` is never a lattice value — it exists solely as the
//! error channel a constraint visitor returns when handed a cell of the
//! wrong kind (see [`crate::error::Error::InvalidBooleanSubject`] and
//! [`crate::error::Error::InvalidNumberSubject`]).

/// A three-valued truth, plus the `Invalid` visitor-error sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trilean {
    False,
    True,
    Unknown,
    /// Never produced by lattice operations; only by constraint visitors
    /// on a kind mismatch.
    Invalid,
}

impl Trilean {
    pub fn is_false(self) -> bool {
        self == Trilean::False
    }

    pub fn is_true(self) -> bool {
        self == Trilean::True
    }

    pub fn is_unknown(self) -> bool {
        self == Trilean::Unknown
    }

    pub fn is_constant(self) -> bool {
        matches!(self, Trilean::False | Trilean::True)
    }

    pub fn is_valid(self) -> bool {
        self != Trilean::Invalid
    }

    /// Lattice negation. `Unknown` and `Invalid` are fixed points.
    pub fn not(self) -> Trilean {
        match self {
            Trilean::False => Trilean::True,
            Trilean::True => Trilean::False,
            Trilean::Unknown => Trilean::Unknown,
            Trilean::Invalid => Trilean::Invalid,
        }
    }

    /// Three-valued conjunction, ignoring any constraint graph (pure
    /// truth-table fallback used once constraint consultation has been
    /// exhausted).
    pub fn and(self, other: Trilean) -> Trilean {
        match (self, other) {
            (Trilean::False, _) | (_, Trilean::False) => Trilean::False,
            (Trilean::True, Trilean::True) => Trilean::True,
            _ => Trilean::Unknown,
        }
    }

    /// Three-valued disjunction, same caveat as [`Trilean::and`].
    pub fn or(self, other: Trilean) -> Trilean {
        match (self, other) {
            (Trilean::True, _) | (_, Trilean::True) => Trilean::True,
            (Trilean::False, Trilean::False) => Trilean::False,
            _ => Trilean::Unknown,
        }
    }

    /// `True` if either side is a known constant and reports true; `False`
    /// if either side is a known constant and reports false; else
    /// `Unknown`. Used by `Or`-constraint evaluation (spec.md §4.2) to
    /// fold per-variant trileans.
    pub fn fold_or(results: impl IntoIterator<Item = Trilean>) -> Trilean {
        let mut saw_unknown = false;
        for r in results {
            match r {
                Trilean::True => return Trilean::True,
                Trilean::Unknown => saw_unknown = true,
                Trilean::False => {}
                Trilean::Invalid => return Trilean::Invalid,
            }
        }
        if saw_unknown {
            Trilean::Unknown
        } else {
            Trilean::False
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_is_involutive_except_unknown_stays_fixed() {
        assert_eq!(Trilean::True.not(), Trilean::False);
        assert_eq!(Trilean::False.not(), Trilean::True);
        assert_eq!(Trilean::Unknown.not(), Trilean::Unknown);
        assert_eq!(Trilean::True.not().not(), Trilean::True);
    }

    #[test]
    fn and_short_circuits_on_false() {
        assert_eq!(Trilean::False.and(Trilean::Unknown), Trilean::False);
        assert_eq!(Trilean::Unknown.and(Trilean::False), Trilean::False);
        assert_eq!(Trilean::True.and(Trilean::True), Trilean::True);
        assert_eq!(Trilean::True.and(Trilean::Unknown), Trilean::Unknown);
    }

    #[test]
    fn or_short_circuits_on_true() {
        assert_eq!(Trilean::True.or(Trilean::Unknown), Trilean::True);
        assert_eq!(Trilean::False.or(Trilean::False), Trilean::False);
        assert_eq!(Trilean::False.or(Trilean::Unknown), Trilean::Unknown);
    }

    #[test]
    fn fold_or_true_dominates_false_then_unknown() {
        assert_eq!(
            Trilean::fold_or([Trilean::False, Trilean::True, Trilean::Unknown]),
            Trilean::True
        );
        assert_eq!(
            Trilean::fold_or([Trilean::False, Trilean::Unknown]),
            Trilean::Unknown
        );
        assert_eq!(
            Trilean::fold_or([Trilean::False, Trilean::False]),
            Trilean::False
        );
    }
}
