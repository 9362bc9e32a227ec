//! A single contiguous interval over the extended reals with
//! inclusive/exclusive endpoints (spec.md §3.3, §4.3).
//!
//! Every method here is a pure function of its inputs — no identity, no
//! constraints, no allocation beyond the occasional `Vec` returned by
//! multi-range operations (`split`, `arithmetic_operation`).

use crate::error::{Error, Result};
use crate::trilean::Trilean;

/// Which endpoint, if any, an operation's result sits exactly on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    None,
    Left,
    Right,
}

/// `{x ∈ ℝ : l ◁ x ◁ r}`, where `◁` is `<` or `≤` per the closedness
/// bits. `l`/`r` may be `±∞`; a `NaN` endpoint makes the range invalid
/// (see [`Range::is_nan`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub l: f64,
    pub r: f64,
    pub l_closed: bool,
    pub r_closed: bool,
}

impl Range {
    /// A closed segment `[l, r]`.
    pub fn segment(l: f64, r: f64) -> Range {
        Range {
            l,
            r,
            l_closed: true,
            r_closed: true,
        }
    }

    /// `(-∞, +∞)`.
    pub fn universal() -> Range {
        Range::segment(f64::NEG_INFINITY, f64::INFINITY)
    }

    pub fn invert(&self) -> Range {
        Range {
            l: self.r,
            r: self.l,
            l_closed: self.r_closed,
            r_closed: self.l_closed,
        }
    }

    pub fn negate(&self) -> Range {
        Range {
            l: -self.r,
            r: -self.l,
            l_closed: self.r_closed,
            r_closed: self.l_closed,
        }
    }

    /// `l > r`, or `l = r` without both endpoints closed, or a `NaN`
    /// endpoint (spec.md §3.3).
    pub fn is_nan(&self) -> bool {
        if self.l > self.r || (self.l == self.r && !(self.l_closed && self.r_closed)) {
            return true;
        }
        self.l.is_nan() || self.r.is_nan()
    }

    /// `l = r` with both endpoints closed (spec.md §3.4).
    pub fn is_constant(&self) -> bool {
        self.l == self.r && self.l_closed && self.r_closed
    }

    pub fn is_same(&self, other: &Range) -> bool {
        self.l == other.l
            && self.r == other.r
            && self.l_closed == other.l_closed
            && self.r_closed == other.r_closed
    }

    /// Partition at `p`: `p ≤ l` → `(None, self)`; `p > r` → `(self,
    /// None)`; `p = r` (closed) → `([l,r), {r})`; else `([l,p), [p,r])`.
    pub fn split(&self, p: f64) -> (Option<Range>, Option<Range>) {
        if p <= self.l {
            return (None, Some(*self));
        }
        if p > self.r {
            return (Some(*self), None);
        }
        if p == self.r {
            if !self.r_closed {
                return (Some(*self), None);
            }
            let left = Range {
                r_closed: false,
                ..*self
            };
            return (Some(left), Some(Range::segment(p, p)));
        }

        let left = Range {
            l: self.l,
            r: p,
            l_closed: self.l_closed,
            r_closed: false,
        };
        let right = Range {
            l: p,
            r: self.r,
            l_closed: true,
            r_closed: self.r_closed,
        };
        (Some(left), Some(right))
    }

    fn order(&self, other: &Range) -> (Range, Range) {
        let (cmp, _) = edge_cmp(self, other, true, true);
        if cmp == 1 {
            (*other, *self)
        } else {
            (*self, *other)
        }
    }

    /// Union of two ranges, if they touch (share a closed endpoint) or
    /// overlap; `None` if a genuine gap separates them.
    pub fn merge(&self, other: &Range) -> Option<Range> {
        let (a, b) = self.order(other);
        if a.r < b.l {
            return None;
        }
        if a.r == b.l && !a.r_closed && !b.l_closed {
            return None;
        }

        let (mut r_val, mut r_closed) = (b.r, b.r_closed);
        if r_val < a.r {
            r_val = a.r;
            r_closed = a.r_closed;
        } else if r_val == a.r {
            r_closed = r_closed || a.r_closed;
        }

        Some(Range {
            l: a.l,
            r: r_val,
            l_closed: a.l_closed,
            r_closed,
        })
    }

    /// Intersection with `other`, plus whether that intersection is a
    /// single shared endpoint.
    pub fn overlaps(&self, other: &Range) -> (Option<Range>, Edge) {
        let (l_cmp, _) = edge_cmp(self, other, true, true);
        let (r_cmp, _) = edge_cmp(self, other, false, false);

        let (mut r, mut o, mut swapped) = (*self, *other, false);

        if l_cmp == 0 {
            if r_cmp <= 0 {
                return (Some(r), Edge::None);
            }
        } else if l_cmp < 0 {
            if r_cmp >= 0 {
                return (Some(o), Edge::None);
            }
        } else {
            if r_cmp <= 0 {
                return (Some(r), Edge::None);
            }
            std::mem::swap(&mut r, &mut o);
            swapped = true;
        }

        let (right_left_cmp, _) = edge_cmp(&r, &o, false, true);
        if right_left_cmp == -1 {
            return (None, Edge::None);
        }

        let edge = if right_left_cmp == 0 {
            if swapped {
                Edge::Left
            } else {
                Edge::Right
            }
        } else {
            Edge::None
        };

        (
            Some(Range {
                l: o.l,
                r: r.r,
                l_closed: o.l_closed,
                r_closed: r.r_closed,
            }),
            edge,
        )
    }

    /// Widen one end to match `other`'s, used when folding a set of
    /// numbers into their covering range.
    pub fn extend(&self, other: &Range, left_side: bool) -> Range {
        if left_side {
            if self.l > other.l {
                return Range {
                    l: other.l,
                    r: self.r,
                    l_closed: other.l_closed,
                    r_closed: self.r_closed,
                };
            } else if self.l == other.l && !self.l_closed && other.l_closed {
                return Range {
                    l_closed: other.l_closed,
                    ..*self
                };
            }
        } else if self.r < other.r {
            return Range {
                l: self.l,
                r: other.r,
                l_closed: self.l_closed,
                r_closed: other.r_closed,
            };
        } else if self.r == other.r && !self.r_closed && other.r_closed {
            return Range {
                r_closed: other.r_closed,
                ..*self
            };
        }
        *self
    }

    /// `if l <= 0 and r <= 0` → negate; if straddling zero → `[0,
    /// max(|l|, r)]`, closedness taken from whichever side has the
    /// larger magnitude (union of both if they tie).
    pub fn abs(&self) -> Range {
        if self.l <= 0.0 && self.r <= 0.0 {
            return self.negate();
        }
        if self.l < 0.0 {
            let neg_l = -self.l;
            if neg_l > self.r {
                return Range {
                    l: 0.0,
                    r: neg_l,
                    l_closed: true,
                    r_closed: self.l_closed,
                };
            } else if neg_l == self.r {
                return Range {
                    l: 0.0,
                    r: self.r,
                    l_closed: true,
                    r_closed: self.l_closed || self.r_closed,
                };
            }
            return Range {
                l: 0.0,
                r: self.r,
                l_closed: true,
                r_closed: self.r_closed,
            };
        }
        *self
    }

    /// `arith_correct` rounds toward zero instead of toward `-∞` for
    /// negative values; `inverted` computes a ceiling instead of a
    /// floor. Result is always integer-closed on both ends.
    pub fn floor(&self, arith_correct: bool, inverted: bool) -> Range {
        let floor_scalar = |v: f64| -> f64 {
            if arith_correct && v < 0.0 {
                -(-v).floor()
            } else {
                v.floor()
            }
        };

        let mut l = floor_scalar(self.l);
        if inverted && (l < self.l || !self.l_closed) {
            l += 1.0;
        }

        let mut r = floor_scalar(self.r);
        if r == self.r && !self.r_closed {
            r -= 1.0;
        }
        if inverted && r < self.r {
            r += 1.0;
        }

        if l != self.l || r != self.r || !self.l_closed || !self.r_closed {
            return Range::segment(l, r);
        }
        *self
    }

    /// Tighten open endpoints to the nearest interior integer; `None` if
    /// the result is empty (e.g. `(1,2)` has no integer interior).
    pub fn to_integer_range(&self) -> Option<Range> {
        let mut changed = false;

        let mut l = self.l.floor();
        if !l.is_infinite() && (l < self.l || !self.l_closed) {
            changed = true;
            l += 1.0;
        }

        let mut r = self.r.floor();
        if !r.is_infinite() {
            if r < self.r {
                changed = true;
            } else if !self.r_closed {
                changed = true;
                r -= 1.0;
            }
        }

        if l > r {
            return None;
        }
        if !changed {
            return Some(*self);
        }
        Some(Range::segment(l, r))
    }

    pub fn contains(&self, v: f64) -> (bool, Edge) {
        if v.is_nan() {
            return (false, Edge::None);
        }

        let mut edge = Edge::None;

        if v < self.l {
            return (false, Edge::None);
        } else if v == self.l {
            if self.l_closed {
                edge = Edge::Left;
            } else {
                return (false, Edge::Left);
            }
        }

        if v > self.r {
            return (false, Edge::None);
        } else if v == self.r {
            if self.r_closed {
                edge = Edge::Right;
            } else {
                return (false, Edge::Right);
            }
        }

        (true, edge)
    }

    /// Whether the relevant endpoint can be infinite. `sign < 0` asks
    /// about `-∞`, `sign > 0` about `+∞`, `sign == 0` either. `Unknown`
    /// (never `True`) when the endpoint is infinite — an infinite bound
    /// is a limit, not necessarily an attained value.
    pub fn is_inf(&self, sign: i32) -> Trilean {
        match sign.cmp(&0) {
            std::cmp::Ordering::Less => {
                if self.l == f64::NEG_INFINITY {
                    Trilean::Unknown
                } else {
                    Trilean::False
                }
            }
            std::cmp::Ordering::Greater => {
                if self.r == f64::INFINITY {
                    Trilean::Unknown
                } else {
                    Trilean::False
                }
            }
            std::cmp::Ordering::Equal => {
                if self.l == f64::NEG_INFINITY || self.r == f64::INFINITY {
                    Trilean::Unknown
                } else {
                    Trilean::False
                }
            }
        }
    }

    /// The set of signs this range's values can take, as a subset of
    /// `{-1, 0, 1}`. `None` for a NaN/empty range.
    pub fn sign(&self) -> Option<Vec<i8>> {
        if self.is_nan() {
            return None;
        }
        if self.l > 0.0 {
            Some(vec![1])
        } else if self.l == 0.0 {
            if self.l_closed {
                Some(vec![0, 1])
            } else {
                Some(vec![1])
            }
        } else if self.r < 0.0 {
            Some(vec![-1])
        } else if self.r == 0.0 {
            if self.r_closed {
                Some(vec![-1, 0])
            } else {
                Some(vec![-1])
            }
        } else {
            Some(vec![-1, 0, 1])
        }
    }

    pub fn less(&self, other: &Range) -> Trilean {
        if self.r < other.l {
            Trilean::True
        } else if self.r == other.l {
            if self.r_closed && other.l_closed {
                Trilean::Unknown
            } else {
                Trilean::True
            }
        } else if other.r <= self.l {
            Trilean::False
        } else {
            Trilean::Unknown
        }
    }

    /// Lift a binary operation over two ranges (spec.md §4.4). When the
    /// operator isn't a closed field and `other` straddles zero, splits
    /// `other` at zero, recurses on each half, and tries to merge the
    /// sub-results before falling back to a genuine two-range union.
    pub fn arithmetic_operation<O: RangeOp>(&self, other: &Range, op: &O) -> Result<Vec<Range>> {
        if !op.is_closed_field() {
            if let (Some(left_o), Some(right_o)) = other.split(0.0) {
                let left_res = self.arithmetic_operation(&left_o, op)?;
                let right_res = self.arithmetic_operation(&right_o, op)?;

                if left_res.len() == 1 && right_res.len() == 1 {
                    if let Some(merged) = left_res[0].merge(&right_res[0]) {
                        return Ok(vec![merged]);
                    }
                }
                let mut out = left_res;
                out.extend(right_res);
                return Ok(out);
            }
        }

        let r = op.preprocess_range_left(*self);
        let o = op.preprocess_range_right(*other);

        let mut l_closed_force = false;
        let mut r_closed_force = false;

        let l_val = match op.compute(r.l, o.l) {
            Ok(v) => v,
            Err(ComputeError::DivByZero) => {
                if o.l == 0.0 && o.r == 0.0 {
                    return Err(Error::DivByZero);
                }
                l_closed_force = true;
                f64::INFINITY.copysign(r.l * o.r)
            }
            Err(ComputeError::NaNEdge) => r.l,
        };

        let r_val = match op.compute(r.r, o.r) {
            Ok(v) => v,
            Err(ComputeError::DivByZero) => {
                if o.l == 0.0 && o.r == 0.0 {
                    return Err(Error::DivByZero);
                }
                r_closed_force = true;
                f64::INFINITY.copysign(r.r * o.l)
            }
            Err(ComputeError::NaNEdge) => r.r,
        };

        let l_closed = (r.l_closed && o.l_closed) || l_closed_force;
        let r_closed = (r.r_closed && o.r_closed) || r_closed_force;

        Ok(vec![Range {
            l: l_val,
            r: r_val,
            l_closed,
            r_closed,
        }])
    }
}

/// What [`Range::arithmetic_operation`] needs from a binary operator —
/// the pointwise function plus how it may reshape the operand ranges
/// before lifting. The fuller capability set (edge-case detection,
/// result constraints) lives on [`super::arith::BinaryOp`], which
/// extends this trait for the `Number`-level dispatcher.
pub trait RangeOp {
    fn compute(&self, x: f64, y: f64) -> std::result::Result<f64, ComputeError>;
    fn is_closed_field(&self) -> bool;
    fn preprocess_range_left(&self, r: Range) -> Range {
        r
    }
    fn preprocess_range_right(&self, r: Range) -> Range {
        r
    }
}

/// Why [`RangeOp::compute`] could not produce a sound pointwise value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComputeError {
    /// Division by an exact zero.
    DivByZero,
    /// An algebraic edge case with no single sound real value (e.g.
    /// `∞ ÷ ∞`); the caller passes the original endpoint through
    /// untouched rather than inventing one.
    NaNEdge,
}

fn edge_pick(r: &Range, left: bool) -> (f64, bool) {
    if left {
        (r.l, r.l_closed)
    } else {
        (r.r, r.r_closed)
    }
}

/// Orders two endpoints (possibly on different sides) at equal numeric
/// value by their closed/open flags and side (spec.md §4.3). Returns
/// `(ordering, is_edge_case)`.
fn edge_cmp(a: &Range, b: &Range, a_left: bool, b_left: bool) -> (i32, bool) {
    let (a_val, a_including) = edge_pick(a, a_left);
    let (b_val, b_including) = edge_pick(b, b_left);

    if a_val < b_val {
        return (-1, false);
    }
    if a_val > b_val {
        return (1, false);
    }

    if a_including == b_including {
        if a_including || a_left == b_left {
            return (0, true);
        }
        return if b_left { (-1, true) } else { (1, true) };
    }

    if a_left == b_left {
        return if a_left {
            if a_including {
                (-1, true)
            } else {
                (1, true)
            }
        } else if a_including {
            (1, true)
        } else {
            (-1, true)
        };
    }
    if a_left {
        return (1, true);
    }
    (-1, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_is_constant_iff_collapsed() {
        assert!(Range::segment(3.0, 3.0).is_constant());
        assert!(!Range::segment(3.0, 4.0).is_constant());
        let open_point = Range {
            l: 3.0,
            r: 3.0,
            l_closed: true,
            r_closed: false,
        };
        assert!(open_point.is_nan());
        assert!(!open_point.is_constant());
    }

    #[test]
    fn split_partitions_without_overlap() {
        let r = Range::segment(1.0, 5.0);
        let (left, right) = r.split(2.0);
        let left = left.unwrap();
        let right = right.unwrap();
        assert_eq!(left, Range { l: 1.0, r: 2.0, l_closed: true, r_closed: false });
        assert_eq!(right, Range { l: 2.0, r: 5.0, l_closed: true, r_closed: true });
    }

    #[test]
    fn split_at_right_edge_peels_a_point() {
        let r = Range::segment(1.0, 5.0);
        let (left, right) = r.split(5.0);
        let left = left.unwrap();
        let right = right.unwrap();
        assert!(!left.r_closed);
        assert_eq!(right, Range::segment(5.0, 5.0));
    }

    #[test]
    fn merge_touching_ranges() {
        let a = Range::segment(1.0, 2.0);
        let b = Range { l: 2.0, r: 3.0, l_closed: false, r_closed: true };
        assert!(a.merge(&b).is_some());

        let c = Range { l: 1.0, r: 2.0, l_closed: true, r_closed: false };
        let d = Range { l: 2.0, r: 3.0, l_closed: false, r_closed: true };
        assert!(c.merge(&d).is_none());
    }

    #[test]
    fn abs_straddling_zero_takes_dominating_side() {
        let r = Range::segment(-10.0, 2.5);
        let abs = r.abs();
        assert_eq!(abs, Range::segment(0.0, 10.0));
    }

    #[test]
    fn abs_right_dominant_side_also_anchors_at_zero() {
        let r = Range::segment(-2.0, 10.0);
        let abs = r.abs();
        assert_eq!(abs, Range::segment(0.0, 10.0));
    }

    #[test]
    fn sign_straddling_zero_is_all_three() {
        assert_eq!(Range::segment(-1.0, 1.0).sign(), Some(vec![-1, 0, 1]));
        assert_eq!(Range::segment(0.0, 1.0).sign(), Some(vec![0, 1]));
        assert_eq!(
            Range { l: 0.0, r: 1.0, l_closed: false, r_closed: true }.sign(),
            Some(vec![1])
        );
    }

    #[test]
    fn less_strict_when_both_edges_closed_at_boundary() {
        let a = Range::segment(0.0, 1.0);
        let b = Range::segment(1.0, 2.0);
        assert_eq!(a.less(&b), Trilean::Unknown);

        let a_open = Range { r_closed: false, ..a };
        assert_eq!(a_open.less(&b), Trilean::True);
    }

    #[test]
    fn to_integer_range_empty_between_consecutive_integers() {
        let r = Range { l: 1.0, r: 2.0, l_closed: false, r_closed: false };
        assert!(r.to_integer_range().is_none());
    }

    struct FakeAdd;
    impl RangeOp for FakeAdd {
        fn compute(&self, x: f64, y: f64) -> std::result::Result<f64, ComputeError> {
            Ok(x + y)
        }
        fn is_closed_field(&self) -> bool {
            true
        }
    }

    #[test]
    fn arithmetic_operation_lifts_addition_over_ranges() {
        let a = Range::segment(1.0, 5.0);
        let b = Range::segment(1.0, 1.0);
        let result = a.arithmetic_operation(&b, &FakeAdd).unwrap();
        assert_eq!(result, vec![Range::segment(2.0, 6.0)]);
    }

    struct FakeDiv;
    impl RangeOp for FakeDiv {
        fn compute(&self, x: f64, y: f64) -> std::result::Result<f64, ComputeError> {
            if y == 0.0 {
                return Err(ComputeError::DivByZero);
            }
            Ok(x / y)
        }
        fn is_closed_field(&self) -> bool {
            false
        }
        fn preprocess_range_right(&self, r: Range) -> Range {
            r.invert()
        }
    }

    #[test]
    fn division_straddling_zero_splits_and_unions() {
        // 4 / (-2, 16] should split around zero in the divisor.
        let four = Range::segment(4.0, 4.0);
        let divisor = Range { l: -2.0, r: 16.0, l_closed: false, r_closed: true };
        let result = four.arithmetic_operation(&divisor, &FakeDiv).unwrap();
        assert!(!result.is_empty());
    }

    #[test]
    fn division_by_exact_zero_constant_errors() {
        let four = Range::segment(4.0, 4.0);
        let zero = Range::segment(0.0, 0.0);
        let err = four.arithmetic_operation(&zero, &FakeDiv).unwrap_err();
        assert_eq!(err, Error::DivByZero);
    }
}
