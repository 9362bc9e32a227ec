use super::*;

fn seg(l: f64, r: f64) -> Number {
    Number::new_segment(l, r).unwrap()
}

#[test]
fn constant_construction_infers_integrality() {
    let three = Number::new_const(3.0);
    assert!(three.is_integer().is_true());
    let half = Number::new_const(0.5);
    assert!(half.is_integer().is_false());
}

#[test]
fn add_one_to_range_shifts_both_ends() {
    let r = seg(1.0, 5.0);
    let one = Number::new_const(1.0);
    let sum = r.add(&one).unwrap();
    assert!(!sum.is_constant());
    assert!(sum.greater(&Number::new_const(1.0)).is_true());
    assert!(sum.less_equal(&Number::new_const(6.0)).is_true());
}

#[test]
fn four_div_half_open_range_spanning_zero_does_not_panic() {
    // divisor straddles zero: must split and union rather than blow up.
    let divisor = Number::new_range(vec![range::Range {
        l: -2.0,
        r: 16.0,
        l_closed: false,
        r_closed: true,
    }])
    .unwrap();
    let four = Number::new_const(4.0);
    let result = four.div(&divisor);
    assert!(result.is_ok());
}

#[test]
fn idiv_of_two_infinities_yields_nan_constant() {
    let inf = Number::new_const(f64::INFINITY);
    let result = inf.idiv(&inf).unwrap();
    assert!(result.is_constant());
    assert!(result.is_nan().is_true());
}

#[test]
fn division_by_exact_zero_errors() {
    let zero = Number::new_const(0.0);
    let four = Number::new_const(4.0);
    let err = four.div(&zero).unwrap_err();
    assert_eq!(err, Error::DivByZero);
}

#[test]
fn integer_range_split_produces_two_disjoint_integer_ranges() {
    let r = Number::new_segment(1.0, 10.0).unwrap();
    let (left, right) = r.split(5.0).unwrap();
    let left = left.unwrap();
    let right = right.unwrap();
    assert!(left.less(&right).is_true());
}

#[test]
fn abs_on_straddling_range_attaches_greater_equal_constraint() {
    let r = seg(-10.0, 3.0);
    let abs = r.abs().unwrap();
    // abs(r) >= r always holds, and is answerable via the attached
    // constraint rather than by re-deriving it from ranges alone.
    assert!(abs.greater_equal(&r).is_true());
}

#[test]
fn sign_of_straddling_range_has_three_points() {
    let r = seg(-5.0, 5.0);
    let signs = r.sign().unwrap();
    assert!(!signs.is_constant());
    assert!(signs.is_integer().is_true());
    // A multi-range cell can't decide equality against a single point outright.
    assert!(signs.equal(&Number::new_const(0.0)).is_unknown());
}

#[test]
fn sign_of_straddling_range_is_not_universum() {
    // {-1, 0, 1} is a small bounded set, not (-inf, +inf) — is_universum
    // must not mistake "can't tell via is_inf" for "confirmed unbounded".
    let r = seg(-5.0, 5.0);
    let signs = r.sign().unwrap();
    assert!(!signs.is_universum());
}

#[test]
fn self_equality_and_self_order_hold() {
    let r = seg(1.0, 5.0);
    assert!(r.equal(&r).is_true());
    assert!(!r.less(&r).is_true());
}

#[test]
fn disjoint_ranges_are_definitely_unequal() {
    let a = seg(1.0, 2.0);
    let b = seg(5.0, 6.0);
    assert!(a.equal(&b).is_false());
    assert!(a.less(&b).is_true());
}

#[test]
fn touching_closed_ranges_are_less_equal_but_not_strictly_less() {
    let a = seg(1.0, 5.0);
    let b = seg(5.0, 10.0);
    assert!(a.less_equal(&b).is_true());
    assert!(a.less(&b).is_unknown());
}

#[test]
fn max_picks_the_constant_with_larger_value() {
    let a = Number::new_const(3.0);
    let b = Number::new_const(7.0);
    let c = Number::new_const(1.0);
    let max = a.max(&[b.clone(), c]).unwrap();
    assert!(max.is_same(&b));
}

#[test]
fn max_with_unknown_order_is_unsupported() {
    let a = Number::new_const(3.0);
    let unknown = Number::new_unknown();
    let err = a.max(&[unknown]).unwrap_err();
    assert_eq!(err, Error::Unsupported("max with unknown-ordered operand".into()));
}

#[test]
fn floor_and_ceil_on_a_constant() {
    let v = Number::new_const(3.7);
    assert!(v.floor().unwrap().is_same(&Number::new_const(3.0)));
    assert!(v.ceil().unwrap().is_same(&Number::new_const(4.0)));
}

#[test]
fn range_adjust_collapses_single_point_range_to_constant() {
    let n = Number::new_range(vec![Range::segment(4.0, 4.0)]).unwrap();
    assert!(n.is_constant());
    assert!(n.is_same(&Number::new_const(4.0)));
}

#[test]
fn unknown_is_universal_and_not_itself_constant() {
    let u = Number::new_unknown();
    assert!(u.is_unknown());
    assert!(!u.is_constant());
    assert!(u.is_integer().is_unknown());
}

#[test]
fn new_range_rejects_empty_vec() {
    assert!(Number::new_range(Vec::new()).is_err());
}
