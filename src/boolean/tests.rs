use super::*;
use crate::trilean::Trilean;

fn unknown() -> Boolean {
    Boolean::new_unknown()
}

fn tru() -> Boolean {
    Boolean::new_const(Trilean::True, Vec::new())
}

fn fals() -> Boolean {
    Boolean::new_const(Trilean::False, Vec::new())
}

#[test]
fn not_not_round_trips() {
    assert!(tru().not().not().is_true());
    assert!(fals().not().not().is_false());
    assert!(unknown().not().not().is_unknown());
}

#[test]
fn self_equality_holds_for_every_kind() {
    let t = tru();
    let f = fals();
    let u = unknown();
    assert!(t.equal(&t).is_true());
    assert!(f.equal(&f).is_true());
    assert!(u.equal(&u).is_true());
}

#[test]
fn two_independent_unknowns_are_unknown_equal() {
    let a = unknown();
    let b = unknown();
    assert!(a.equal(&b).is_unknown());
}

#[test]
fn identity_sharing_implies_equal() {
    let a = unknown();
    let a_copy = a.clone();
    assert!(a.equal(&a_copy).is_true());
}

#[test]
fn not_attaches_backlink_so_double_check_collapses() {
    let x = unknown();
    let not_x = x.not();
    // not_x carries NotEqual(x); querying not_x.equal(x) must be False.
    assert!(not_x.equal(&x).is_false());
}

#[test]
fn equality_chain_transitivity_is_pairwise_true() {
    let a = unknown();
    let b = Boolean::new_const(Trilean::Unknown, vec![BoolConstraint::Equal(a.cell().clone())]);
    let c = Boolean::new_const(Trilean::Unknown, vec![BoolConstraint::Equal(b.cell().clone())]);
    let d = Boolean::new_const(Trilean::Unknown, vec![BoolConstraint::Equal(c.cell().clone())]);
    let e = Boolean::new_const(Trilean::Unknown, vec![BoolConstraint::Equal(d.cell().clone())]);

    for (x, y) in [(&a, &b), (&b, &c), (&c, &d), (&d, &e), (&a, &e), (&a, &c)] {
        assert!(x.equal(y).is_true(), "expected equal(True)");
        assert!(y.equal(x).is_true(), "expected symmetric equal(True)");
    }
}

#[test]
fn not_equal_constraint_breaks_the_chain() {
    let a = unknown();
    let e = Boolean::new_const(Trilean::Unknown, vec![BoolConstraint::Equal(a.cell().clone())]);
    let f = Boolean::new_const(Trilean::Unknown, vec![BoolConstraint::NotEqual(e.cell().clone())]);

    assert!(f.equal(&a).is_false());
}

#[test]
fn and_with_false_operand_is_always_false() {
    assert!(unknown().and(&fals()).is_false());
    assert!(tru().and(&fals()).is_false());
    assert!(fals().and(&unknown()).is_false());
}

#[test]
fn and_true_identity_returns_other_cell() {
    let u = unknown();
    let result = tru().and(&u);
    assert!(result.is_same(&u));
}

#[test]
fn or_true_identity_short_circuits() {
    let t = tru();
    assert!(t.clone().or(&unknown()).is_same(&t));
}

#[test]
fn or_false_identity_returns_other_cell() {
    let u = unknown();
    let result = fals().or(&u);
    assert!(result.is_same(&u));
}

#[test]
fn or_unknown_with_false_is_unknown() {
    assert!(unknown().or(&fals()).is_unknown());
}

#[test]
fn appended_constraint_can_form_a_cycle_without_looping() {
    let a = unknown();
    let b = Boolean::new_const(Trilean::Unknown, vec![BoolConstraint::Equal(a.cell().clone())]);
    // Close the cycle: a now also claims to equal b.
    a.append_constraint(BoolConstraint::Equal(b.cell().clone()));

    // Must terminate (bounded depth) rather than loop forever.
    let result = a.equal(&b);
    assert!(result.is_true());
}

#[test]
fn or_constraint_requires_at_least_two_variants() {
    assert!(BoolConstraint::or(vec![BoolConstraint::Dummy]).is_err());
    assert!(BoolConstraint::or(vec![BoolConstraint::Dummy, BoolConstraint::Dummy]).is_ok());
}
