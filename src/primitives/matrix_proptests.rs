pub(crate) use super::*;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// (m×k) * (k×n) always has shape (m, n).
    #[test]
    fn prop_matmul_shape(
        m in 1..=8usize,
        k in 1..=8usize,
        n in 1..=8usize,
        seed in any::<u64>(),
    ) {
        let a = Matrix::random(m, k, Some(seed));
        let b = Matrix::random(k, n, Some(seed.wrapping_add(1)));
        let c = a.matmul(&b).expect("conformable by construction");
        prop_assert_eq!(c.shape(), (m, n));
    }

    /// (A*B)*C and A*(B*C) agree within floating-point tolerance.
    ///
    /// Tolerance-based on purpose: the two groupings sum in different
    /// orders, so exact equality is not the contract here.
    #[test]
    fn prop_matmul_associative(
        m in 1..=6usize,
        k in 1..=6usize,
        n in 1..=6usize,
        p in 1..=6usize,
        seed in any::<u64>(),
    ) {
        let a = Matrix::random(m, k, Some(seed));
        let b = Matrix::random(k, n, Some(seed.wrapping_add(1)));
        let c = Matrix::random(n, p, Some(seed.wrapping_add(2)));

        let left = a
            .matmul(&b)
            .expect("conformable by construction")
            .matmul(&c)
            .expect("conformable by construction");
        let right = a
            .matmul(&b.matmul(&c).expect("conformable by construction"))
            .expect("conformable by construction");

        prop_assert_eq!(left.shape(), right.shape());
        for i in 0..m {
            for j in 0..p {
                prop_assert!(
                    (left.get(i, j) - right.get(i, j)).abs() < 1e-9,
                    "(A*B)*C[{},{}]={} vs A*(B*C)[{},{}]={}",
                    i, j, left.get(i, j), i, j, right.get(i, j)
                );
            }
        }
    }

    /// Every randomized cell lands on one of the 101 steps in [-1, 1].
    #[test]
    fn prop_randomize_discretized(
        rows in 0..=6usize,
        cols in 0..=6usize,
        seed in any::<u64>(),
    ) {
        let m = Matrix::random(rows, cols, Some(seed));
        for &v in m.as_slice() {
            prop_assert!((-1.0..=1.0).contains(&v));
            prop_assert!(
                (0..=100u32).any(|k| v == f64::from(k) / 50.0 - 1.0),
                "value {} is not one of the 101 steps", v
            );
        }
    }

    /// Equal seeds fill bit-identically.
    #[test]
    fn prop_randomize_deterministic(seed in any::<u64>()) {
        prop_assert_eq!(
            Matrix::random(5, 3, Some(seed)),
            Matrix::random(5, 3, Some(seed))
        );
    }

    /// Transpose involution: (A^T)^T = A, exactly (no arithmetic).
    #[test]
    fn prop_transpose_involution(
        rows in 1..=8usize,
        cols in 1..=8usize,
        seed in any::<u64>(),
    ) {
        let a = Matrix::random(rows, cols, Some(seed));
        prop_assert_eq!(a.transpose().transpose(), a);
    }

    /// Row-parallel multiplication is bit-identical to the sequential
    /// product.
    #[test]
    fn prop_par_matmul_bit_identical(
        m in 1..=6usize,
        k in 1..=6usize,
        n in 1..=6usize,
        seed in any::<u64>(),
    ) {
        let a = Matrix::random(m, k, Some(seed));
        let b = Matrix::random(k, n, Some(seed ^ 0x9e37_79b9));
        prop_assert_eq!(
            a.par_matmul(&b).expect("conformable by construction"),
            a.matmul(&b).expect("conformable by construction")
        );
    }
}
