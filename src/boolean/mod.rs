//! Three-valued Boolean cells with a relational-constraint graph
//! (spec.md §4.1, §4.2).
//!
//! A `Boolean` is a thin, `Clone`-cheap handle onto a shared, (mostly)
//! immutable [`BoolCellData`]. Identity is `Rc::ptr_eq` on that data —
//! two `Boolean`s built from the same cell always compare as the same
//! argument, which is what lets `x.not().equal(x)` collapse to `False`
//! even while `x` itself stays `Unknown`.

mod constraint;
#[cfg(test)]
mod tests;

pub use constraint::BoolConstraint;

use std::cell::RefCell;
use std::rc::Rc;

use crate::trilean::Trilean;
use crate::value::Value;

/// Constraint chains are chased this many hops before giving up and
/// reporting `Unknown`. Chosen well above any legitimate chain this
/// crate's own tests build (see spec.md §8 scenario 2, a 5-cell chain);
/// it exists purely to guarantee termination if a caller builds a cyclic
/// constraint graph (spec.md §5 permits this by construction).
pub const MAX_CONSTRAINT_DEPTH: u32 = 64;

/// The shared, identity-bearing cell behind every `Boolean`.
#[derive(Debug)]
pub struct BoolCellData {
    value: Trilean,
    constraints: RefCell<Vec<BoolConstraint>>,
}

pub type BoolCellRef = Rc<BoolCellData>;

impl BoolCellData {
    fn new(value: Trilean, constraints: Vec<BoolConstraint>) -> BoolCellRef {
        Rc::new(BoolCellData {
            value,
            constraints: RefCell::new(constraints),
        })
    }
}

/// A three-valued Boolean virtual value.
#[derive(Clone, Debug)]
pub struct Boolean {
    cell: BoolCellRef,
}

impl Boolean {
    /// A fresh, unconstrained `Unknown`.
    pub fn new_unknown() -> Boolean {
        Boolean {
            cell: BoolCellData::new(Trilean::Unknown, Vec::new()),
        }
    }

    /// A constant `True`/`False`, or an `Unknown` carrying the given
    /// residual constraints.
    pub fn new_const(value: Trilean, constraints: Vec<BoolConstraint>) -> Boolean {
        Boolean {
            cell: BoolCellData::new(value, constraints),
        }
    }

    pub(crate) fn value(&self) -> Trilean {
        self.cell.value
    }

    pub(crate) fn cell(&self) -> &BoolCellRef {
        &self.cell
    }

    pub fn is_unknown(&self) -> bool {
        self.cell.value.is_unknown()
    }

    pub fn is_constant(&self) -> bool {
        self.cell.value.is_constant()
    }

    pub fn is_true(&self) -> bool {
        self.cell.value.is_true()
    }

    pub fn is_false(&self) -> bool {
        self.cell.value.is_false()
    }

    /// Append a residual constraint to this cell's list. The only source
    /// of post-construction mutation this crate performs, used to build
    /// cyclic constraint graphs deliberately (spec.md §5, §9).
    pub fn append_constraint(&self, constraint: BoolConstraint) {
        self.cell.constraints.borrow_mut().push(constraint);
    }

    pub fn not(&self) -> Boolean {
        let result = self.cell.value.not();
        Boolean::new_const(result, vec![BoolConstraint::NotEqual(self.cell.clone())])
    }

    pub fn and(&self, other: &Boolean) -> Boolean {
        if self.is_false() {
            return self.clone();
        }

        if self.is_unknown() {
            let res = consult_constraints(&self.cell, &other.cell, |c, o, d| c.equal(o, d));
            if res.is_false() {
                return false_with_or(&self.cell, &other.cell);
            }
        }

        if other.is_false() {
            if self.is_unknown() {
                return false_with_or(&self.cell, &other.cell);
            }
            return other.clone();
        }

        if other.is_unknown() {
            let res = consult_constraints(&other.cell, &self.cell, |c, o, d| c.equal(o, d));
            if res.is_false() {
                if self.is_unknown() {
                    return false_with_or(&self.cell, &other.cell);
                }
                return Boolean::new_const(Trilean::False, vec![BoolConstraint::Equal(other.cell.clone())]);
            }
        }

        if self.is_unknown() {
            return unknown_with_or(&self.cell, &other.cell);
        }

        other.clone()
    }

    pub fn or(&self, other: &Boolean) -> Boolean {
        if self.is_true() {
            return self.clone();
        }
        if self.is_false() {
            return other.clone();
        }
        let result = if other.is_true() {
            Trilean::True
        } else {
            Trilean::Unknown
        };
        Boolean::new_const(
            result,
            vec![BoolConstraint::Or(vec![
                BoolConstraint::Equal(self.cell.clone()),
                BoolConstraint::Equal(other.cell.clone()),
            ])],
        )
    }

    pub fn equal(&self, other: &Boolean) -> Boolean {
        equal_cells_depth(&self.cell, &other.cell, MAX_CONSTRAINT_DEPTH)
    }
}

fn false_with_or(x: &BoolCellRef, y: &BoolCellRef) -> Boolean {
    Boolean::new_const(
        Trilean::False,
        vec![BoolConstraint::Or(vec![
            BoolConstraint::Equal(x.clone()),
            BoolConstraint::Equal(y.clone()),
        ])],
    )
}

fn unknown_with_or(x: &BoolCellRef, y: &BoolCellRef) -> Boolean {
    Boolean::new_const(
        Trilean::Unknown,
        vec![BoolConstraint::Or(vec![
            BoolConstraint::Equal(x.clone()),
            BoolConstraint::Equal(y.clone()),
        ])],
    )
}

fn consult_constraints(
    subject: &BoolCellRef,
    other: &BoolCellRef,
    visit: impl Fn(&BoolConstraint, &BoolCellRef, u32) -> Trilean,
) -> Trilean {
    let mut result = Trilean::Unknown;
    for c in subject.constraints.borrow().iter() {
        let r = visit(c, other, MAX_CONSTRAINT_DEPTH.saturating_sub(1));
        if r.is_false() {
            return Trilean::False;
        }
        if r.is_true() {
            result = Trilean::True;
        }
    }
    result
}

/// The core depth-bounded equality algorithm (spec.md §4.1 `equal`).
/// Identity is checked first; then each side's constraint list is
/// consulted (one visitor call per constraint — each of those may
/// recurse into this same function on a different pair of cells, bounded
/// by `depth` so a cyclic constraint graph can't recurse forever); then
/// constant/constant structural comparison; else `Unknown`.
pub(crate) fn equal_cells_depth(x: &BoolCellRef, y: &BoolCellRef, depth: u32) -> Boolean {
    if Rc::ptr_eq(x, y) {
        return Boolean::new_const(Trilean::True, Vec::new());
    }

    if x.value.is_constant() && y.value.is_constant() {
        let result = if x.value == y.value {
            Trilean::True
        } else {
            Trilean::False
        };
        return Boolean::new_const(result, Vec::new());
    }

    if depth == 0 {
        log::trace!("equal_cells_depth: depth exhausted, giving up as Unknown");
        return Boolean::new_const(Trilean::Unknown, Vec::new());
    }

    if x.value.is_unknown() {
        let res = eval_constraints(x, y, depth - 1);
        if res.is_false() {
            return Boolean::new_const(Trilean::False, Vec::new());
        }
        if res.is_true() {
            return Boolean::new_const(Trilean::True, Vec::new());
        }
    }

    if y.value.is_unknown() {
        let res = eval_constraints(y, x, depth - 1);
        if res.is_constant() {
            return Boolean::new_const(res, Vec::new());
        }
    }

    Boolean::new_const(Trilean::Unknown, Vec::new())
}

fn eval_constraints(subject: &BoolCellRef, other: &BoolCellRef, depth: u32) -> Trilean {
    let mut result = Trilean::Unknown;
    for c in subject.constraints.borrow().iter() {
        let r = c.equal(other, depth);
        if r.is_false() {
            return Trilean::False;
        }
        if r.is_true() {
            result = Trilean::True;
        }
    }
    result
}

impl Value for Boolean {
    fn type_name(&self) -> &'static str {
        "Boolean"
    }

    fn is_valid(&self) -> bool {
        true
    }

    fn is_undefined(&self) -> bool {
        false
    }

    fn is_constant(&self) -> bool {
        Boolean::is_constant(self)
    }

    fn is_same(&self, other: &Boolean) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell) || self.cell.value == other.cell.value
    }

    fn equal(&self, other: &Boolean) -> Boolean {
        Boolean::equal(self, other)
    }

    fn to_boolean(&self) -> Boolean {
        self.clone()
    }
}
