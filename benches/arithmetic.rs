//! Throughput benchmark for the Number algebra.
//!
//! Measures:
//! 1. Pointwise range arithmetic lifting (`Range::arithmetic_operation`)
//! 2. The full `Number` operator dispatch, including constant
//!    short-circuits and depth-bounded constraint consultation
//! 3. Depth-bounded equality/order over a chained constraint graph

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use virtual_values::{ComputeError, Number, Range, RangeOp};

struct Add;
impl RangeOp for Add {
    fn compute(&self, x: f64, y: f64) -> Result<f64, ComputeError> {
        Ok(x + y)
    }
    fn is_closed_field(&self) -> bool {
        true
    }
}

struct Div;
impl RangeOp for Div {
    fn compute(&self, x: f64, y: f64) -> Result<f64, ComputeError> {
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

fn bench_range_arithmetic(c: &mut Criterion) {
    let a = Range::segment(-10.0, 10.0);
    let b = Range::segment(0.0, 5.0);
    c.bench_function("range_add_closed_field", |b2| {
        b2.iter(|| a.arithmetic_operation(black_box(&b), &Add))
    });

    let straddling = Range {
        l: -4.0,
        r: 4.0,
        l_closed: true,
        r_closed: true,
    };
    c.bench_function("range_div_straddling_zero", |b2| {
        b2.iter(|| a.arithmetic_operation(black_box(&straddling), &Div))
    });
}

fn bench_number_operate(c: &mut Criterion) {
    let x = Number::new_segment(1.0, 100.0).unwrap();
    let y = Number::new_const(7.0);

    c.bench_function("number_add_range_const", |b| {
        b.iter(|| black_box(&x).add(black_box(&y)))
    });
    c.bench_function("number_mul_range_const", |b| {
        b.iter(|| black_box(&x).mul(black_box(&y)))
    });
}

fn bench_constraint_chain(c: &mut Criterion) {
    let mut chain = vec![Number::new_const(0.0)];
    for i in 1..8 {
        let prev = chain.last().unwrap();
        chain.push(prev.add(&Number::new_const(i as f64)).unwrap());
    }
    let first = chain.first().unwrap();
    let last = chain.last().unwrap();

    c.bench_function("less_depth_bounded_chain", |b| {
        b.iter(|| black_box(first).less(black_box(last)))
    });
}

criterion_group!(
    benches,
    bench_range_arithmetic,
    bench_number_operate,
    bench_constraint_chain
);
criterion_main!(benches);
