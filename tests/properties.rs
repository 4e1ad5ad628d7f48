//! Randomised checks of the container contracts.
//!
//! Each test draws random sizes, offsets and values and verifies an algebraic or value-semantics
//! property against a manual computation over plain slices.

use approx::assert_abs_diff_eq;
use rand::Rng;
use utmatrix::{Matrix, Vector};

/// Helper generating a random vector of `n` integers at a random start index.
fn random_vector(rng: &mut impl Rng, n: usize) -> Vector<i64> {
    let data: Vec<i64> = (0..n).map(|_| rng.gen_range(-1000..1000)).collect();
    Vector::from_vec(data, rng.gen_range(0..10)).unwrap()
}

/// Write-then-read returns the written value at every valid external index.
#[test]
fn set_then_get_roundtrips_every_index() {
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let n = rng.gen_range(0..50);
        let start = rng.gen_range(0..20);
        let mut v = Vector::<i64>::with_start(n, start).unwrap();
        for i in start..start + n {
            let x = rng.gen_range(-100..100);
            v[i] = x;
            assert_eq!(v[i], x);
        }
        assert!(v.get(start - 1).is_err());
        assert!(v.get(start + n).is_err());
    }
}

/// Mutating a copy never changes the original.
#[test]
fn copies_are_independent() {
    let mut rng = rand::thread_rng();
    let v = random_vector(&mut rng, 16);
    let mut copy = v.clone();
    let start = copy.start_index() as isize;
    for i in start..start + 16 {
        copy[i] += 1;
    }
    for (a, b) in v.iter().zip(copy.iter()) {
        assert_eq!(*a + 1, *b);
    }
}

/// `(v + c)[i] == v[i] + c` and scalar ops never touch the operand.
#[test]
fn scalar_ops_are_pointwise_and_pure() {
    let mut rng = rand::thread_rng();
    let v = random_vector(&mut rng, 32);
    let snapshot = v.as_slice().to_vec();
    let c = rng.gen_range(-50..50);
    let plus = v.add_scalar(c);
    let minus = v.sub_scalar(c);
    let times = v.mul_scalar(c);
    for k in 0..32 {
        assert_eq!(plus.as_slice()[k], snapshot[k] + c);
        assert_eq!(minus.as_slice()[k], snapshot[k] - c);
        assert_eq!(times.as_slice()[k], snapshot[k] * c);
    }
    assert_eq!(plus.start_index(), v.start_index());
    assert_eq!(v.as_slice(), snapshot.as_slice());
}

/// Dot product equals the sum of pairwise products.
#[test]
fn dot_matches_manual_sum() {
    let mut rng = rand::thread_rng();
    let n = 25;
    let xs: Vec<f64> = (0..n).map(|_| rng.r#gen()).collect();
    let ys: Vec<f64> = (0..n).map(|_| rng.r#gen()).collect();
    let x = Vector::from_vec(xs.clone(), 0).unwrap();
    let y = Vector::from_vec(ys.clone(), 3).unwrap();
    let expected: f64 = xs.iter().zip(ys.iter()).map(|(a, b)| a * b).sum();
    assert_abs_diff_eq!(x.dot(&y).unwrap(), expected, epsilon = 1e-10);
}

/// A failed binary operation leaves both operands unchanged.
#[test]
fn failed_ops_leave_operands_intact() {
    let mut rng = rand::thread_rng();
    let a = random_vector(&mut rng, 4);
    let b = random_vector(&mut rng, 7);
    let (sa, sb) = (a.clone(), b.clone());
    assert!(a.try_add(&b).is_err());
    assert!(a.try_sub(&b).is_err());
    assert!(a.dot(&b).is_err());
    assert_eq!(a, sa);
    assert_eq!(b, sb);
}

/// Matrix sum and difference agree with entrywise arithmetic on the upper triangle.
#[test]
fn matrix_add_sub_entrywise() {
    let mut rng = rand::thread_rng();
    let n = rng.gen_range(1..12);
    let mut a = Matrix::<i64>::new(n).unwrap();
    let mut b = Matrix::<i64>::new(n).unwrap();
    for i in 0..n {
        for j in i..n {
            a[(i, j)] = rng.gen_range(-100..100);
            b[(i, j)] = rng.gen_range(-100..100);
        }
    }
    let sum = a.try_add(&b).unwrap();
    let diff = a.try_sub(&b).unwrap();
    for i in 0..n {
        for j in i..n {
            assert_eq!(sum[(i, j)], a[(i, j)] + b[(i, j)]);
            assert_eq!(diff[(i, j)], a[(i, j)] - b[(i, j)]);
        }
        for j in 0..i {
            assert!(sum.get(i, j).is_err());
        }
        assert!(sum.get(i, n).is_err());
    }
    assert_eq!(diff.try_add(&b).unwrap(), a);
}
