//! Binary arithmetic operators as a capability trait (spec.md §4.4),
//! styled after the teacher's [`crate::field::PrimeField`]-style
//! associated-behavior traits: one trait describing everything an
//! operator needs to contribute, one zero-sized type per operator.

use super::range::{ComputeError, Range, RangeOp};
use super::Number;
use crate::error::Result;

/// Everything [`operate`] needs from a binary numeric operator, beyond
/// the pointwise [`RangeOp`] it's built on: edge-case short-circuits
/// that skip range arithmetic entirely, and what constraints the result
/// should carry relative to its operands.
pub trait BinaryOp: RangeOp {
    /// Whether integer operands always yield an integer result.
    fn is_strict_closed_field(&self) -> bool;

    /// Short-circuit when the left operand is the constant `val` (e.g.
    /// `0 + n == n`). `Ok(None)` means no shortcut applies; `Err` surfaces
    /// a failure from building the shortcut's result (e.g. `n.floor()`
    /// hitting a `NaNEdge`).
    fn detect_edge_case_left(&self, _val: f64, _n: &Number) -> Result<Option<Number>> {
        Ok(None)
    }

    fn detect_edge_case_right(&self, _n: &Number, _val: f64) -> Result<Option<Number>> {
        Ok(None)
    }

    /// Short-circuit when both operands are literally the same cell
    /// (e.g. `n - n == 0`).
    fn detect_edge_case_same(&self, _n: &Number) -> Result<Option<Number>> {
        Ok(None)
    }

    /// `Some(true/false)` if the result's integrality is forced by the
    /// operator itself, independent of the operands (e.g. `idiv` always
    /// produces an integer).
    fn is_result_int(&self) -> Option<bool> {
        None
    }

    /// Attach residual order constraints to `result`, given the operand
    /// numbers `x` and `y`.
    fn result_constraints(&self, x: &Number, y: &Number, result: Number) -> Number {
        let _ = (x, y);
        result
    }
}

pub struct OpAdd;

impl RangeOp for OpAdd {
    fn compute(&self, x: f64, y: f64) -> std::result::Result<f64, ComputeError> {
        Ok(x + y)
    }
    fn is_closed_field(&self) -> bool {
        true
    }
}

impl BinaryOp for OpAdd {
    fn is_strict_closed_field(&self) -> bool {
        true
    }

    fn detect_edge_case_left(&self, val: f64, n: &Number) -> Result<Option<Number>> {
        if val == 0.0 {
            return Ok(Some(n.clone()));
        }
        if val.is_infinite() {
            return Ok(Some(Number::new_const(val)));
        }
        Ok(None)
    }

    fn detect_edge_case_right(&self, n: &Number, val: f64) -> Result<Option<Number>> {
        self.detect_edge_case_left(val, n)
    }

    fn result_constraints(&self, x: &Number, y: &Number, result: Number) -> Number {
        if result.is_constant() || x.is_nan().is_true() || y.is_nan().is_true() {
            return result;
        }

        let mut constraints = Vec::new();

        if !result.is_same(y) {
            if let Some((min_sign, max_sign)) = x.sign_bounds() {
                if min_sign > 0 {
                    constraints.push(super::constraint::NumConstraint::Greater(y.cell().clone()));
                } else if min_sign == 0 {
                    constraints.push(super::constraint::NumConstraint::GreaterEqual(
                        y.cell().clone(),
                    ));
                }
                if max_sign < 0 {
                    constraints.push(super::constraint::NumConstraint::Less(y.cell().clone()));
                } else if max_sign == 0 {
                    constraints.push(super::constraint::NumConstraint::LessEqual(
                        y.cell().clone(),
                    ));
                }
            }
        }

        if !result.is_same(x) && !y.is_same(x) {
            if let Some((min_sign, max_sign)) = y.sign_bounds() {
                if min_sign > 0 {
                    constraints.push(super::constraint::NumConstraint::Greater(x.cell().clone()));
                } else if min_sign == 0 {
                    constraints.push(super::constraint::NumConstraint::GreaterEqual(
                        x.cell().clone(),
                    ));
                }
                if max_sign < 0 {
                    constraints.push(super::constraint::NumConstraint::Less(x.cell().clone()));
                } else if max_sign == 0 {
                    constraints.push(super::constraint::NumConstraint::LessEqual(
                        x.cell().clone(),
                    ));
                }
            }
        }

        for c in constraints {
            result.append_constraint(c);
        }
        result
    }
}

pub struct OpSub;

impl RangeOp for OpSub {
    fn compute(&self, x: f64, y: f64) -> std::result::Result<f64, ComputeError> {
        Ok(x - y)
    }
    fn is_closed_field(&self) -> bool {
        true
    }
    fn preprocess_range_right(&self, r: Range) -> Range {
        r.invert()
    }
}

impl BinaryOp for OpSub {
    fn is_strict_closed_field(&self) -> bool {
        true
    }

    fn detect_edge_case_left(&self, val: f64, n: &Number) -> Result<Option<Number>> {
        if val == 0.0 {
            return Ok(Some(n.negate()));
        }
        if val.is_infinite() {
            return Ok(Some(Number::new_const(val)));
        }
        Ok(None)
    }

    fn detect_edge_case_right(&self, n: &Number, val: f64) -> Result<Option<Number>> {
        if val == 0.0 {
            return Ok(Some(n.clone()));
        }
        if val.is_infinite() {
            return Ok(Some(Number::new_const(-val)));
        }
        Ok(None)
    }

    fn detect_edge_case_same(&self, n: &Number) -> Result<Option<Number>> {
        if !n.is_nan().is_true() {
            return Ok(Some(Number::new_const(0.0)));
        }
        Ok(None)
    }
}

pub struct OpMul;

impl RangeOp for OpMul {
    fn compute(&self, x: f64, y: f64) -> std::result::Result<f64, ComputeError> {
        Ok(x * y)
    }
    fn is_closed_field(&self) -> bool {
        true
    }
}

impl BinaryOp for OpMul {
    fn is_strict_closed_field(&self) -> bool {
        false
    }

    fn detect_edge_case_left(&self, val: f64, n: &Number) -> Result<Option<Number>> {
        if val == 0.0 {
            return Ok(Some(Number::new_const(0.0)));
        }
        if val == 1.0 {
            return Ok(Some(n.clone()));
        }
        Ok(None)
    }

    fn detect_edge_case_right(&self, n: &Number, val: f64) -> Result<Option<Number>> {
        self.detect_edge_case_left(val, n)
    }
}

pub struct OpDiv;

impl RangeOp for OpDiv {
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

impl BinaryOp for OpDiv {
    fn is_strict_closed_field(&self) -> bool {
        false
    }

    fn detect_edge_case_left(&self, val: f64, _n: &Number) -> Result<Option<Number>> {
        if val == 0.0 {
            Ok(Some(Number::new_const(0.0)))
        } else {
            Ok(None)
        }
    }

    fn detect_edge_case_right(&self, n: &Number, val: f64) -> Result<Option<Number>> {
        if val == 1.0 {
            Ok(Some(n.clone()))
        } else {
            Ok(None)
        }
    }

    fn detect_edge_case_same(&self, n: &Number) -> Result<Option<Number>> {
        Ok(div_edge_case_same(n))
    }
}

fn div_edge_case_same(n: &Number) -> Option<Number> {
    if n.is_nan().is_true() {
        return Some(Number::new_const(f64::NAN));
    }
    if n.is_constant() && n.constant_value() == Some(0.0) {
        return None;
    }
    Some(Number::new_const(1.0))
}

pub struct OpIDiv;

impl RangeOp for OpIDiv {
    fn compute(&self, x: f64, y: f64) -> std::result::Result<f64, ComputeError> {
        if y == 0.0 {
            return Err(ComputeError::DivByZero);
        }
        if x.is_infinite() && y.is_infinite() {
            return Err(ComputeError::NaNEdge);
        }
        Ok((x as i64 / y as i64) as f64)
    }
    fn is_closed_field(&self) -> bool {
        false
    }
    fn preprocess_range_right(&self, r: Range) -> Range {
        r.invert()
    }
}

impl BinaryOp for OpIDiv {
    fn is_strict_closed_field(&self) -> bool {
        false
    }

    fn detect_edge_case_left(&self, val: f64, _n: &Number) -> Result<Option<Number>> {
        if val == 0.0 {
            Ok(Some(Number::new_const(0.0)))
        } else {
            Ok(None)
        }
    }

    fn detect_edge_case_right(&self, n: &Number, val: f64) -> Result<Option<Number>> {
        if val == 1.0 {
            Ok(Some(n.floor()?))
        } else {
            Ok(None)
        }
    }

    fn detect_edge_case_same(&self, n: &Number) -> Result<Option<Number>> {
        Ok(div_edge_case_same(n))
    }

    fn is_result_int(&self) -> Option<bool> {
        Some(true)
    }
}

pub struct OpPow;

impl RangeOp for OpPow {
    fn compute(&self, x: f64, y: f64) -> std::result::Result<f64, ComputeError> {
        Ok(x.powf(y))
    }
    fn is_closed_field(&self) -> bool {
        false
    }
}

impl BinaryOp for OpPow {
    fn is_strict_closed_field(&self) -> bool {
        false
    }

    fn detect_edge_case_left(&self, val: f64, n: &Number) -> Result<Option<Number>> {
        if val == 0.0 {
            let lt_zero = n.less(&Number::new_const(0.0));
            if lt_zero.is_true() {
                return Ok(Some(Number::new_const(f64::INFINITY)));
            } else if lt_zero.is_false() {
                return Ok(Some(Number::new_const(0.0)));
            }
            Ok(None)
        } else if val == 1.0 {
            Ok(Some(Number::new_const(1.0)))
        } else {
            Ok(None)
        }
    }

    fn detect_edge_case_right(&self, n: &Number, val: f64) -> Result<Option<Number>> {
        if val == 0.0 {
            Ok(Some(Number::new_const(1.0)))
        } else if val == 1.0 {
            Ok(Some(n.clone()))
        } else {
            Ok(None)
        }
    }
}
