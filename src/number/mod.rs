//! Range-backed numeric cells with order/equality constraints
//! (spec.md §3.3–§3.4, §4.3–§4.6) — the `Number` counterpart to
//! [`crate::boolean`].
//!
//! A `Number` is either a concrete `f64` constant, or an unresolved
//! value pinned between one or more [`Range`]s plus an integrality
//! flag. Multiple ranges ("next chain" in spec.md §3.4/§9) only ever
//! arise from [`Number::sign`] in this crate; every other operation on
//! a multi-range operand reports [`crate::error::Error::Unsupported`]
//! rather than guess at semantics spec.md leaves open.

mod arith;
mod constraint;
mod range;
#[cfg(test)]
mod tests;

pub use arith::BinaryOp;
pub use constraint::NumConstraint;
pub use range::{ComputeError, Edge, Range, RangeOp};

use std::cell::RefCell;
use std::rc::Rc;

use arith::{OpAdd, OpDiv, OpIDiv, OpMul, OpPow, OpSub};

use crate::boolean::Boolean;
use crate::boolean::MAX_CONSTRAINT_DEPTH;
use crate::error::{Error, Result};
use crate::trilean::Trilean;
use crate::value::Value;

/// Signs are drawn from the fixed set `{-1, 0, 1}`; [`Number::sign`] can
/// never produce more than this many point-ranges.
const MAX_SIGN_RANGES: usize = 3;

/// The shared, identity-bearing cell behind every `Number`.
#[derive(Debug)]
pub struct NumCellData {
    val: Option<f64>,
    ranges: Vec<Range>,
    integer: Trilean,
    constraints: RefCell<Vec<NumConstraint>>,
}

pub type NumCellRef = Rc<NumCellData>;

/// A numeric virtual value: a constant, or a range pinned down by
/// arithmetic and comparisons performed on it.
#[derive(Clone, Debug)]
pub struct Number {
    cell: NumCellRef,
}

impl Number {
    pub fn new_unknown() -> Number {
        Number::new_cell(None, vec![Range::universal()], Trilean::Unknown, Vec::new())
    }

    pub fn new_const(v: f64) -> Number {
        let integer = integer_flag_of(v);
        Number::new_cell(Some(v), Vec::new(), integer, Vec::new())
    }

    /// Build from one or more ranges, running the same normalization a
    /// constructed range always gets: collapse to a constant if the
    /// range is a single point, tighten to integers if `integer` is
    /// known, and loosen closed endpoints that sit on a non-integer
    /// boundary when it's known `integer` is false.
    pub fn new_range(ranges: Vec<Range>) -> Result<Number> {
        if ranges.is_empty() {
            return Err(Error::InvariantViolation(
                "no ranges passed to Number::new_range".into(),
            ));
        }
        Number::new_cell(None, ranges, Trilean::Unknown, Vec::new()).range_adjust()
    }

    pub fn new_segment(l: f64, r: f64) -> Result<Number> {
        Number::new_range(vec![Range::segment(l, r)])
    }

    fn new_cell(
        val: Option<f64>,
        ranges: Vec<Range>,
        integer: Trilean,
        constraints: Vec<NumConstraint>,
    ) -> Number {
        Number {
            cell: Rc::new(NumCellData {
                val,
                ranges,
                integer,
                constraints: RefCell::new(constraints),
            }),
        }
    }

    fn with_integer(&self, integer: Trilean) -> Number {
        Number::new_cell(
            self.cell.val,
            self.cell.ranges.clone(),
            integer,
            self.cell.constraints.borrow().clone(),
        )
    }

    pub(crate) fn cell(&self) -> &NumCellRef {
        &self.cell
    }

    pub(crate) fn constant_value(&self) -> Option<f64> {
        self.cell.val
    }

    pub(crate) fn sign_bounds(&self) -> Option<(i8, i8)> {
        let signs = if let Some(v) = self.cell.val {
            vec![sign_of(v)]
        } else if self.cell.ranges.len() == 1 {
            self.cell.ranges[0].sign()?
        } else {
            return None;
        };
        let min = *signs.iter().min()?;
        let max = *signs.iter().max()?;
        Some((min, max))
    }

    /// Append a residual constraint to this cell's list (spec.md §5,
    /// mirrors [`crate::boolean::Boolean::append_constraint`]).
    pub fn append_constraint(&self, constraint: NumConstraint) {
        self.cell.constraints.borrow_mut().push(constraint);
    }

    pub fn is_valid(&self) -> bool {
        true
    }

    pub fn is_constant(&self) -> bool {
        self.cell.val.is_some()
    }

    pub fn is_same(&self, other: &Number) -> bool {
        if Rc::ptr_eq(&self.cell, &other.cell) {
            return true;
        }
        match (self.cell.val, other.cell.val) {
            (Some(a), Some(b)) => a == b || (a.is_nan() && b.is_nan()),
            (None, None) => {
                self.cell.ranges == other.cell.ranges && self.cell.integer == other.cell.integer
            }
            _ => false,
        }
    }

    pub fn is_unknown(&self) -> bool {
        if self.is_constant() {
            return false;
        }
        self.cell.ranges.len() == 1
            && self.cell.ranges[0].l == f64::NEG_INFINITY
            && self.cell.ranges[0].r == f64::INFINITY
    }

    pub fn is_inf(&self, sign: i32) -> Boolean {
        if let Some(v) = self.cell.val {
            let matches = match sign.cmp(&0) {
                std::cmp::Ordering::Less => v == f64::NEG_INFINITY,
                std::cmp::Ordering::Greater => v == f64::INFINITY,
                std::cmp::Ordering::Equal => v.is_infinite(),
            };
            return Boolean::new_const(
                if matches { Trilean::True } else { Trilean::False },
                Vec::new(),
            );
        }
        if self.cell.ranges.len() != 1 {
            return Boolean::new_unknown();
        }
        Boolean::new_const(self.cell.ranges[0].is_inf(sign), Vec::new())
    }

    /// The unbounded `(-∞, +∞)` range, regardless of integrality. Gated on
    /// a single range the same way [`Number::is_unknown`] is — going
    /// through [`Number::is_inf`] instead would treat a multi-range cell's
    /// "can't tell" `Unknown` (e.g. the `{-1, 0, 1}` result of
    /// [`Number::sign`]) as confirmation of universality, which it isn't.
    pub fn is_universum(&self) -> bool {
        if self.is_constant() {
            return false;
        }
        self.cell.ranges.len() == 1
            && self.cell.ranges[0].l == f64::NEG_INFINITY
            && self.cell.ranges[0].r == f64::INFINITY
    }

    pub fn is_nan(&self) -> Boolean {
        if let Some(v) = self.cell.val {
            return Boolean::new_const(
                if v.is_nan() { Trilean::True } else { Trilean::False },
                Vec::new(),
            );
        }
        if self.is_unknown() || self.cell.ranges.len() != 1 {
            return Boolean::new_unknown();
        }
        let r = &self.cell.ranges[0];
        Boolean::new_const(
            if r.l.is_nan() || r.r.is_nan() {
                Trilean::True
            } else {
                Trilean::False
            },
            Vec::new(),
        )
    }

    pub fn is_integer(&self) -> Boolean {
        Boolean::new_const(self.cell.integer, Vec::new())
    }

    /// Re-derive the cell's normal form after its range or integrality
    /// may have changed (spec.md §4.6): collapse a point range to a
    /// constant, tighten to the nearest integer bounds when `integer`
    /// is known true, or open up integer-valued closed endpoints when
    /// `integer` is known false.
    pub fn range_adjust(self) -> Result<Number> {
        if self.cell.val.is_some() {
            return Ok(self);
        }
        if self.cell.ranges.len() != 1 {
            return Ok(self);
        }

        let mut r = self.cell.ranges[0];
        let integer = self.cell.integer;

        if r.l > r.r {
            r = r.invert();
        } else if r.l == r.r {
            return Ok(const_with_integer_hint(r.l, integer));
        } else if r.l.is_nan() || r.r.is_nan() {
            return Err(Error::NaNEdge);
        }

        if integer.is_true() {
            match r.to_integer_range() {
                None => return Err(Error::NoIntegerRepresentation),
                Some(int_range) => {
                    if !int_range.is_same(&r) {
                        if int_range.is_constant() {
                            return Ok(const_with_integer_hint(int_range.l, integer));
                        }
                        r = int_range;
                    }
                }
            }
        } else if integer.is_false() {
            let mut l_closed = r.l_closed;
            let mut r_closed = r.r_closed;
            if r.l.floor() == r.l && l_closed {
                l_closed = false;
            }
            if r.r.floor() == r.r && r_closed {
                r_closed = false;
            }
            r = Range { l_closed, r_closed, ..r };
        }

        if r.is_same(&self.cell.ranges[0]) {
            return Ok(self);
        }

        log::debug!(
            "range_adjust: [{}, {}] -> [{}, {}]",
            self.cell.ranges[0].l,
            self.cell.ranges[0].r,
            r.l,
            r.r
        );

        Ok(Number::new_cell(
            None,
            vec![r],
            integer,
            self.cell.constraints.borrow().clone(),
        ))
    }

    pub fn negate(&self) -> Number {
        if let Some(v) = self.cell.val {
            return Number::new_cell(Some(-v), Vec::new(), self.cell.integer, Vec::new());
        }
        let ranges = self.cell.ranges.iter().map(Range::negate).collect();
        Number::new_cell(None, ranges, self.cell.integer, Vec::new())
    }

    pub fn abs(&self) -> Result<Number> {
        if let Some(v) = self.cell.val {
            return Ok(if v < 0.0 {
                Number::new_const(-v)
            } else {
                self.clone()
            });
        }
        if self.cell.ranges.len() != 1 {
            return Err(Error::Unsupported("abs on multi-range cell".into()));
        }
        let original = self.cell.ranges[0];
        let widened = original.abs();
        if widened == original {
            return Ok(self.clone());
        }
        let res = Number::new_range(vec![widened])?;
        let zero = Number::new_const(0.0);
        let constraint = if res.greater(&zero).is_true() {
            NumConstraint::Greater(self.cell.clone())
        } else {
            NumConstraint::GreaterEqual(self.cell.clone())
        };
        res.append_constraint(constraint);
        Ok(res)
    }

    pub fn floor(&self) -> Result<Number> {
        self.floor_with_opt(false, false)
    }

    pub fn ceil(&self) -> Result<Number> {
        self.floor_with_opt(false, true)
    }

    fn floor_with_opt(&self, arith_correct: bool, inverted: bool) -> Result<Number> {
        let floor_scalar = |v: f64| -> f64 {
            if arith_correct && v < 0.0 {
                -(-v).floor()
            } else {
                v.floor()
            }
        };

        if let Some(v) = self.cell.val {
            let mut new_val = floor_scalar(v);
            if new_val == v {
                return Ok(self.clone());
            }
            if inverted {
                new_val += 1.0;
            }
            return Ok(Number::new_cell(Some(new_val), Vec::new(), Trilean::True, Vec::new()));
        }

        if self.cell.ranges.len() != 1 {
            return Err(Error::Unsupported("floor/ceil on multi-range cell".into()));
        }
        let new_range = self.cell.ranges[0].floor(arith_correct, inverted);
        Number::new_cell(None, vec![new_range], Trilean::True, Vec::new()).range_adjust()
    }

    pub fn sign(&self) -> Result<Number> {
        let signs = if let Some(v) = self.cell.val {
            vec![sign_of(v)]
        } else {
            if self.cell.ranges.len() != 1 {
                return Err(Error::Unsupported("sign on multi-range cell".into()));
            }
            self.cell.ranges[0].sign().ok_or(Error::NaNEdge)?
        };
        debug_assert!(signs.len() <= MAX_SIGN_RANGES);

        let can_be_zero = !self.is_integer().is_false();
        let signs: Vec<i8> = if can_be_zero {
            signs
        } else {
            signs.into_iter().filter(|&s| s != 0).collect()
        };

        let ranges = signs
            .into_iter()
            .map(|s| Range::segment(s as f64, s as f64))
            .collect();
        Ok(Number::new_cell(None, ranges, Trilean::True, Vec::new()))
    }

    pub fn split(&self, p: f64) -> Result<(Option<Number>, Option<Number>)> {
        if let Some(v) = self.cell.val {
            return Ok(if v < p {
                (Some(self.clone()), None)
            } else {
                (None, Some(self.clone()))
            });
        }
        if self.cell.ranges.len() != 1 {
            return Err(Error::Unsupported("split on multi-range cell".into()));
        }
        let (left, right) = self.cell.ranges[0].split(p);
        let integer = self.cell.integer;
        let left = left
            .map(|r| Number::new_cell(None, vec![r], integer, Vec::new()).range_adjust())
            .transpose()?;
        let right = right
            .map(|r| Number::new_cell(None, vec![r], integer, Vec::new()).range_adjust())
            .transpose()?;
        Ok((left, right))
    }

    pub fn less(&self, other: &Number) -> Boolean {
        Boolean::new_const(
            less_cells_depth(&self.cell, &other.cell, MAX_CONSTRAINT_DEPTH),
            Vec::new(),
        )
    }

    pub fn greater(&self, other: &Number) -> Boolean {
        other.less(self)
    }

    pub fn less_equal(&self, other: &Number) -> Boolean {
        if Rc::ptr_eq(&self.cell, &other.cell) {
            return Boolean::new_const(Trilean::True, Vec::new());
        }
        let lt = less_cells_depth(&self.cell, &other.cell, MAX_CONSTRAINT_DEPTH);
        if lt.is_true() {
            return Boolean::new_const(Trilean::True, Vec::new());
        }
        if self.cell.val.is_none()
            && other.cell.val.is_none()
            && self.cell.ranges.len() == 1
            && other.cell.ranges.len() == 1
        {
            let a = &self.cell.ranges[0];
            let b = &other.cell.ranges[0];
            if a.r == b.l && a.r_closed && b.l_closed {
                return Boolean::new_const(Trilean::True, Vec::new());
            }
        }
        let eq = equal_cells_depth(&self.cell, &other.cell, MAX_CONSTRAINT_DEPTH);
        Boolean::new_const(lt.or(eq), Vec::new())
    }

    pub fn greater_equal(&self, other: &Number) -> Boolean {
        other.less_equal(self)
    }

    pub fn equal(&self, other: &Number) -> Boolean {
        Boolean::new_const(
            equal_cells_depth(&self.cell, &other.cell, MAX_CONSTRAINT_DEPTH),
            Vec::new(),
        )
    }

    pub fn max(&self, numbers: &[Number]) -> Result<Number> {
        if self.is_nan().is_true() {
            return Ok(self.clone());
        }
        let mut current = self.clone();
        for num in numbers {
            if num.is_nan().is_true() {
                return Ok(num.clone());
            }
            let gt = num.greater(&current);
            if gt.is_true() {
                current = num.clone();
            } else if gt.is_unknown() {
                return Err(Error::Unsupported(
                    "max with unknown-ordered operand".into(),
                ));
            }
        }
        Ok(current)
    }

    pub fn min(&self, numbers: &[Number]) -> Result<Number> {
        if self.is_nan().is_true() {
            return Ok(self.clone());
        }
        let mut current = self.clone();
        for num in numbers {
            if num.is_nan().is_true() {
                return Ok(num.clone());
            }
            let lt = num.less(&current);
            if lt.is_true() {
                current = num.clone();
            } else if lt.is_unknown() {
                return Err(Error::Unsupported(
                    "min with unknown-ordered operand".into(),
                ));
            }
        }
        Ok(current)
    }

    pub fn add(&self, other: &Number) -> Result<Number> {
        operate(self, other, &OpAdd)
    }

    pub fn sub(&self, other: &Number) -> Result<Number> {
        operate(self, other, &OpSub)
    }

    pub fn mul(&self, other: &Number) -> Result<Number> {
        operate(self, other, &OpMul)
    }

    pub fn div(&self, other: &Number) -> Result<Number> {
        operate(self, other, &OpDiv)
    }

    pub fn pow(&self, other: &Number) -> Result<Number> {
        operate(self, other, &OpPow)
    }

    pub fn idiv(&self, other: &Number) -> Result<Number> {
        let res = operate(self, other, &OpIDiv)?;
        if res.is_nan().is_true() {
            Ok(res)
        } else {
            Ok(res.with_integer(Trilean::True))
        }
    }
}

fn sign_of(v: f64) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

fn integer_flag_of(v: f64) -> Trilean {
    if v.is_nan() {
        Trilean::Unknown
    } else if v == v.floor() {
        Trilean::True
    } else {
        Trilean::False
    }
}

fn const_with_integer_hint(val: f64, hint: Trilean) -> Number {
    if integer_flag_of(val) == hint {
        Number::new_cell(Some(val), Vec::new(), hint, Vec::new())
    } else {
        Number::new_const(val)
    }
}

fn consult_num_constraints(
    subject: &NumCellRef,
    other: &NumCellRef,
    depth: u32,
    visit: impl Fn(&NumConstraint, &NumCellRef, u32) -> Trilean,
) -> Trilean {
    let mut result = Trilean::Unknown;
    for c in subject.constraints.borrow().iter() {
        let r = visit(c, other, depth);
        if r.is_false() {
            return Trilean::False;
        }
        if r.is_true() {
            result = Trilean::True;
        }
    }
    result
}

/// Depth-bounded equality, mirroring
/// [`crate::boolean::equal_cells_depth`] but falling back to range
/// overlap/containment once constraint consultation is exhausted
/// (spec.md §4.5).
fn equal_cells_depth(x: &NumCellRef, y: &NumCellRef, depth: u32) -> Trilean {
    if Rc::ptr_eq(x, y) {
        return if x.val.is_some_and(f64::is_nan) {
            Trilean::False
        } else {
            Trilean::True
        };
    }

    if let (Some(a), Some(b)) = (x.val, y.val) {
        return if a == b { Trilean::True } else { Trilean::False };
    }

    if depth == 0 {
        log::trace!("equal_cells_depth: depth exhausted, giving up as Unknown");
        return Trilean::Unknown;
    }

    let r = consult_num_constraints(x, y, depth - 1, |c, o, d| c.equal(o, d));
    if r.is_constant() {
        return r;
    }
    let r = consult_num_constraints(y, x, depth - 1, |c, o, d| c.equal(o, d));
    if r.is_constant() {
        return r;
    }

    match (x.val, y.val) {
        (None, None) => {
            if x.ranges.len() != 1 || y.ranges.len() != 1 {
                return Trilean::Unknown;
            }
            let (overlap, _) = x.ranges[0].overlaps(&y.ranges[0]);
            if overlap.is_none() {
                Trilean::False
            } else {
                Trilean::Unknown
            }
        }
        (None, Some(b)) => range_contains_trilean(&x.ranges, b),
        (Some(a), None) => range_contains_trilean(&y.ranges, a),
        (Some(_), Some(_)) => unreachable!(),
    }
}

fn range_contains_trilean(ranges: &[Range], v: f64) -> Trilean {
    if ranges.len() != 1 {
        return Trilean::Unknown;
    }
    let (contains, _) = ranges[0].contains(v);
    if contains {
        Trilean::Unknown
    } else {
        Trilean::False
    }
}

/// Depth-bounded strict order, mirroring [`equal_cells_depth`]
/// (spec.md §4.5).
fn less_cells_depth(x: &NumCellRef, y: &NumCellRef, depth: u32) -> Trilean {
    if Rc::ptr_eq(x, y) {
        return Trilean::False;
    }

    if let (Some(a), Some(b)) = (x.val, y.val) {
        return if a < b { Trilean::True } else { Trilean::False };
    }

    if depth == 0 {
        log::trace!("less_cells_depth: depth exhausted, giving up as Unknown");
        return Trilean::Unknown;
    }

    let r = consult_num_constraints(x, y, depth - 1, |c, o, d| c.less(o, d));
    if r.is_constant() {
        return r;
    }
    let r = consult_num_constraints(y, x, depth - 1, |c, o, d| c.greater(o, d));
    if r.is_constant() {
        return r;
    }

    match (x.val, y.val) {
        (Some(a), None) => {
            if y.ranges.len() != 1 {
                return Trilean::Unknown;
            }
            let yr = &y.ranges[0];
            if a < yr.l {
                Trilean::True
            } else if a == yr.l {
                if !yr.l_closed {
                    Trilean::True
                } else {
                    Trilean::Unknown
                }
            } else if a >= yr.r {
                Trilean::False
            } else {
                Trilean::Unknown
            }
        }
        (None, Some(b)) => {
            if x.ranges.len() != 1 {
                return Trilean::Unknown;
            }
            let xr = &x.ranges[0];
            if xr.r < b {
                Trilean::True
            } else if xr.r == b {
                if !xr.r_closed {
                    Trilean::True
                } else {
                    Trilean::Unknown
                }
            } else if xr.l >= b {
                Trilean::False
            } else {
                Trilean::Unknown
            }
        }
        (None, None) => {
            if x.ranges.len() != 1 || y.ranges.len() != 1 {
                return Trilean::Unknown;
            }
            x.ranges[0].less(&y.ranges[0])
        }
        (Some(_), Some(_)) => unreachable!(),
    }
}

/// The binary-operator dispatcher (spec.md §4.4): short-circuits on
/// constant/constant and identity edge cases before falling back to
/// lifting the operator over ranges and renormalizing the result.
fn operate(x: &Number, y: &Number, op: &impl BinaryOp) -> Result<Number> {
    if x.cell.ranges.len() > 1 || y.cell.ranges.len() > 1 {
        log::debug!("operate: refusing arithmetic on a multi-range operand");
        return Err(Error::Unsupported("arithmetic on multi-range cell".into()));
    }

    let x_const = x.is_constant();
    let y_const = y.is_constant();

    if x_const && y_const {
        let xv = x.cell.val.unwrap();
        let yv = y.cell.val.unwrap();
        return match op.compute(xv, yv) {
            Ok(res) => Ok(if res == xv {
                x.clone()
            } else if res == yv {
                y.clone()
            } else {
                Number::new_const(res)
            }),
            Err(ComputeError::NaNEdge) => Ok(Number::new_const(f64::NAN)),
            Err(ComputeError::DivByZero) => Err(Error::DivByZero),
        };
    }

    if Rc::ptr_eq(&x.cell, &y.cell) {
        if let Some(edge) = op.detect_edge_case_same(x)? {
            return Ok(op.result_constraints(x, y, edge));
        }
    }

    let x_range = if x_const { None } else { Some(x.cell.ranges[0]) };
    let y_range = if y_const { None } else { Some(y.cell.ranges[0]) };

    let ranges = if x_range.is_none() && y_range.is_none() {
        vec![Range::universal()]
    } else {
        let xr = match x_range {
            Some(r) => r,
            None => {
                let xv = x.cell.val.unwrap();
                if let Some(edge) = op.detect_edge_case_left(xv, y)? {
                    return Ok(op.result_constraints(x, y, edge));
                }
                Range::segment(xv, xv)
            }
        };
        let yr = match y_range {
            Some(r) => r,
            None => {
                let yv = y.cell.val.unwrap();
                if let Some(edge) = op.detect_edge_case_right(x, yv)? {
                    return Ok(op.result_constraints(x, y, edge));
                }
                Range::segment(yv, yv)
            }
        };
        xr.arithmetic_operation(&yr, op)?
    };

    if ranges.len() == 1 && ranges[0].is_constant() {
        return Ok(op.result_constraints(x, y, Number::new_const(ranges[0].l)));
    }

    let mut result_int = op.is_result_int();
    let mut need_adjust = !op.is_strict_closed_field();

    if op.is_closed_field() {
        let both_int = x.is_integer().value().and(y.is_integer().value());
        if both_int.is_constant() {
            result_int = Some(both_int.is_true());
        }
        if result_int != Some(false) || op.is_strict_closed_field() {
            need_adjust = true;
        }
    }

    let integer = match result_int {
        Some(true) => {
            need_adjust = true;
            Trilean::True
        }
        Some(false) => {
            need_adjust = true;
            Trilean::False
        }
        None => Trilean::Unknown,
    };

    let mut result = Number::new_cell(None, ranges, integer, Vec::new());
    if need_adjust {
        result = result.range_adjust()?;
    }
    Ok(op.result_constraints(x, y, result))
}

impl Value for Number {
    fn type_name(&self) -> &'static str {
        "Number"
    }

    fn is_valid(&self) -> bool {
        Number::is_valid(self)
    }

    fn is_undefined(&self) -> bool {
        Number::is_unknown(self)
    }

    fn is_constant(&self) -> bool {
        Number::is_constant(self)
    }

    fn is_same(&self, other: &Number) -> bool {
        Number::is_same(self, other)
    }

    fn equal(&self, other: &Number) -> Boolean {
        Number::equal(self, other)
    }

    fn to_boolean(&self) -> Boolean {
        match self.cell.val {
            Some(v) => Boolean::new_const(
                if v != 0.0 { Trilean::True } else { Trilean::False },
                Vec::new(),
            ),
            None => Boolean::new_unknown(),
        }
    }
}
