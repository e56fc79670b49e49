// End-to-end pass over the public matriz API.
//
// Run with: cargo test --test matrix_ops

use matriz::prelude::*;

#[test]
fn seeded_pipeline_multiplies_and_compares() {
    let a = Matrix::random(4, 3, Some(1));
    let b = Matrix::random(3, 5, Some(2));

    let product = a.matmul(&b).expect("4x3 * 3x5 is conformable");
    assert_eq!(product.shape(), (4, 5));

    // the parallel path must reproduce the sequential product exactly
    let par_product = a.par_matmul(&b).expect("4x3 * 3x5 is conformable");
    assert_eq!(product, par_product);

    // echoing a result back through the exact-equality contract
    let again = a.matmul(&b).expect("4x3 * 3x5 is conformable");
    assert_eq!(product, again);
}

#[test]
fn mismatch_is_a_typed_error() {
    let a = Matrix::new(4, 3);
    let b = Matrix::new(4, 3);

    let err = a.matmul(&b).expect_err("4x3 * 4x3 is not conformable");
    assert!(matches!(err, MatrizError::DimensionMismatch { .. }));
    assert!(err.to_string().contains("4x3"));
}

#[test]
fn lossy_multiply_degrades_to_empty() {
    let a = Matrix::random(4, 3, Some(8));
    let b = Matrix::random(4, 3, Some(9));

    let product = a.multiply_or_empty(&b);
    assert_eq!(product, Matrix::default());
}

#[test]
fn display_renders_fixed_width_rows() {
    let mut m = Matrix::new(2, 3);
    m.set(0, 0, -1.0);
    m.set(1, 2, 0.5);

    let rendered = format!("{m}");
    assert_eq!(rendered, "-1.00  0.00  0.00 \n 0.00  0.00  0.50 \n");
    assert_eq!(rendered.lines().count(), 2);
}
