use gamelib_math::{MathError, Matrix};

#[test]
fn test_add_same_shape() {
    let a = Matrix::new(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    let b = Matrix::new(2, 2, &[10.0, 20.0, 30.0, 40.0]).unwrap();
    let sum = a.add(&b).unwrap();
    assert_eq!(sum, Matrix::new(2, 2, &[11.0, 22.0, 33.0, 44.0]).unwrap());
    // Operands are untouched.
    assert_eq!(a.get(0, 0), Some(1.0));
}

#[test]
fn test_add_dimension_mismatch() {
    let a = Matrix::new(2, 3, &[0.0; 6]).unwrap();
    let b = Matrix::new(3, 2, &[0.0; 6]).unwrap();
    let err = a.add(&b).unwrap_err();
    assert_eq!(
        err,
        MathError::DimensionMismatch {
            op: "addition",
            left: (2, 3),
            right: (3, 2),
        }
    );
}

#[test]
fn test_mult_dimension_mismatch() {
    let a = Matrix::new(2, 3, &[0.0; 6]).unwrap();
    let b = Matrix::new(2, 3, &[0.0; 6]).unwrap();
    assert!(matches!(
        a.mult(&b),
        Err(MathError::DimensionMismatch { op: "multiplication", .. })
    ));
}

#[test]
fn test_mult_2x3_by_3x4() {
    let a = Matrix::new(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    let b = Matrix::new(
        3,
        4,
        &[
            1.0, 0.0, 2.0, -1.0, //
            0.0, 1.0, 1.0, 2.0, //
            3.0, 1.0, 0.0, 1.0,
        ],
    )
    .unwrap();

    let product = a.mult(&b).unwrap();
    assert_eq!(product.shape(), (2, 4));

    // Row 0: [1 2 3] · columns
    assert_eq!(product.row(0).unwrap(), &[10.0, 5.0, 4.0, 6.0]);
    // Row 1: [4 5 6] · columns
    assert_eq!(product.row(1).unwrap(), &[22.0, 11.0, 13.0, 12.0]);
}

#[test]
fn test_identity_is_neutral() {
    let a = Matrix::new(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).unwrap();
    let id = Matrix::identity(3);
    assert_eq!(a.mult(&id).unwrap(), a);
    assert_eq!(id.mult(&a).unwrap(), a);
}

#[test]
fn test_new_rejects_wrong_value_count() {
    let err = Matrix::new(2, 2, &[1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(err, MathError::InvalidShape { rows: 2, cols: 2, len: 3 });
    assert_eq!(err.to_string(), "cannot fill a 2x2 matrix with 3 values");
}

#[test]
fn test_new_rejects_overflowing_shape() {
    let err = Matrix::new(usize::MAX, 2, &[1.0]).unwrap_err();
    assert_eq!(err, MathError::InvalidShape { rows: usize::MAX, cols: 2, len: 1 });
}

#[test]
fn test_get_out_of_bounds() {
    let a = Matrix::zeros(2, 2);
    assert_eq!(a.get(2, 0), None);
    assert_eq!(a.get(0, 2), None);
    assert!(a.row(5).is_none());
}

#[test]
fn test_display_one_row_per_line() {
    let a = Matrix::new(2, 2, &[1.0, 2.5, -3.0, 4.0]).unwrap();
    assert_eq!(a.to_string(), "1 2.5\n-3 4");
}

#[test]
fn test_dimension_mismatch_message() {
    let a = Matrix::zeros(2, 3);
    let b = Matrix::zeros(2, 3);
    let err = a.mult(&b).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid dimensions for matrix multiplication: 2x3 and 2x3"
    );
}
