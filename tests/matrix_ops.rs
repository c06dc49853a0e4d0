//! Integration tests for Matrix construction, indexing and arithmetic.

use dense_linalg::{chainable, conformable, LinalgError, Matrix, Shape};

fn m(rows: &[&[f64]]) -> Matrix {
    Matrix::from_rows(rows).unwrap()
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn shape_constructors() {
    let sq = Matrix::square(3).unwrap();
    assert_eq!(sq.shape(), Shape::new(3, 3));
    assert!(sq.iter().all(|v| *v == 0.0));

    let filled = Matrix::square_filled(2, 1.5).unwrap();
    assert!(filled.iter().all(|v| *v == 1.5));

    let rect = Matrix::filled(4, 2, -1.0).unwrap();
    assert_eq!(rect.width(), 4);
    assert_eq!(rect.height(), 2);
    assert_eq!(rect.len(), 8);
}

#[test]
fn zero_dimensions_are_invalid() {
    assert!(matches!(Matrix::square(0), Err(LinalgError::InvalidShape { .. })));
    assert!(matches!(Matrix::new(0, 3), Err(LinalgError::InvalidShape { .. })));
    assert!(matches!(Matrix::filled(3, 0, 1.0), Err(LinalgError::InvalidShape { .. })));
}

#[test]
fn literal_is_copied_row_major() {
    let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    assert_eq!(a.shape(), Shape::new(3, 2));
    assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn ragged_literal_is_invalid_shape() {
    let rows: Vec<Vec<f64>> = vec![vec![1.0, 2.0], vec![3.0]];
    let err = Matrix::from_rows(&rows).unwrap_err();
    assert!(matches!(err, LinalgError::InvalidShape { op: "from_rows", .. }));
}

#[test]
fn empty_literals_are_invalid_shape() {
    let no_rows: Vec<Vec<f64>> = vec![];
    assert!(Matrix::from_rows(&no_rows).is_err());

    let empty_rows: Vec<Vec<f64>> = vec![vec![], vec![]];
    assert!(Matrix::from_rows(&empty_rows).is_err());
}

#[test]
fn from_shape_vec_checks_length() {
    assert!(Matrix::from_shape_vec(Shape::new(2, 2), vec![1.0, 2.0, 3.0]).is_err());
    let a = Matrix::from_shape_vec(Shape::new(2, 1), vec![1.0, 2.0]).unwrap();
    assert_eq!(a[(0, 1)], 2.0);
}

// ---------------------------------------------------------------------------
// Copy and move
// ---------------------------------------------------------------------------

#[test]
fn clone_is_independent() {
    let a = m(&[&[1.0, 2.0]]);
    let mut b = a.clone();
    b[0][0] = 10.0;
    assert_eq!(a[0][0], 1.0);
    assert_eq!(b[0][0], 10.0);
}

#[test]
fn take_moves_buffer_and_leaves_sentinel() {
    let mut a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let ptr = a.as_slice().as_ptr();
    let b = a.take();
    assert_eq!(b.as_slice().as_ptr(), ptr);
    assert_eq!(a.width(), 0);
    assert_eq!(a.height(), 0);
    assert!(a.as_slice().is_empty());
    drop(a);
    assert_eq!(b[(1, 0)], 3.0);
}

#[test]
fn mem_take_matches_take() {
    let mut a = Matrix::square_filled(2, 1.0).unwrap();
    let b = std::mem::take(&mut a);
    assert_eq!(a, Matrix::default());
    assert_eq!(b.shape(), Shape::new(2, 2));
}

// ---------------------------------------------------------------------------
// Queries and predicates
// ---------------------------------------------------------------------------

#[test]
fn max_and_min_scan_everything() {
    let a = m(&[&[3.0, -7.0], &[12.5, 0.0]]);
    assert_eq!(a.max().unwrap(), 12.5);
    assert_eq!(a.min().unwrap(), -7.0);
}

#[test]
fn conformable_and_chainable() {
    let a = Matrix::new(3, 2).unwrap();
    let b = Matrix::new(3, 2).unwrap();
    let c = Matrix::new(4, 3).unwrap();
    assert!(conformable(&a, &b));
    assert!(!conformable(&a, &c));
    assert!(chainable(&a, &c));
    assert!(!chainable(&c, &a));
}

// ---------------------------------------------------------------------------
// Indexing
// ---------------------------------------------------------------------------

#[test]
fn row_views_read_and_write() {
    let mut a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    {
        let row = a.row(1).unwrap();
        assert_eq!(row.row_index(), 1);
        assert_eq!(row.as_slice(), &[3.0, 4.0]);
        assert_eq!(row.get(0).unwrap(), 3.0);
        assert_eq!(row[1], 4.0);
    }
    {
        let mut row = a.row_mut(0).unwrap();
        row.set(1, 20.0).unwrap();
        row[0] = 10.0;
    }
    assert_eq!(a.as_slice(), &[10.0, 20.0, 3.0, 4.0]);

    a[1][1] = 40.0;
    assert_eq!(a.get(1, 1).unwrap(), 40.0);
}

#[test]
fn out_of_range_row_and_column() {
    let mut a = Matrix::new(2, 3).unwrap();
    assert!(matches!(
        a.row(3),
        Err(LinalgError::IndexOutOfRange { axis: "row", index: 3, bound: 3 })
    ));
    assert!(matches!(
        a.get(0, 2),
        Err(LinalgError::IndexOutOfRange { axis: "column", index: 2, bound: 2 })
    ));
    assert!(matches!(
        a.row(0).unwrap().get(5),
        Err(LinalgError::IndexOutOfRange { axis: "column", .. })
    ));
    assert!(a.row_mut(0).unwrap().set(2, 1.0).is_err());
    assert!(a.set(7, 0, 1.0).is_err());
    assert!(a.column(2).is_err());
}

#[test]
#[should_panic(expected = "row index 2 is out of range")]
fn index_operator_panics_past_last_row() {
    let a = Matrix::square(2).unwrap();
    let _ = a[2][0];
}

#[test]
#[should_panic(expected = "index out of bounds: the len is 2 but the index is 5")]
fn index_operator_column_uses_slice_panic() {
    let a = Matrix::square(2).unwrap();
    let _ = a[0][5];
}

#[test]
#[should_panic(expected = "column index 5 is out of range")]
fn tuple_index_reports_column_bound() {
    let a = Matrix::square(2).unwrap();
    let _ = a[(0, 5)];
}

#[test]
fn column_extraction() {
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]);
    assert_eq!(a.column(1).unwrap(), vec![2.0, 4.0, 6.0]);
}

// ---------------------------------------------------------------------------
// Transpose
// ---------------------------------------------------------------------------

#[test]
fn transposed_swaps_indices() {
    let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    let t = a.transposed();
    assert_eq!(t.shape(), Shape::new(2, 3));
    for r in 0..a.height() {
        for c in 0..a.width() {
            assert_eq!(t[(c, r)], a[(r, c)]);
        }
    }
}

#[test]
fn transpose_in_place_matches_transposed() {
    let a = m(&[&[5.0, 6.0, 7.0, 8.0, 9.0], &[9.0, 8.0, 7.0, 6.0, 5.0], &[1.0, 2.0, 3.0, 4.0, 5.0]]);
    let mut b = a.clone();
    b.transpose_in_place();
    assert_eq!(b, a.transposed());
    assert_eq!(b.shape(), Shape::new(3, 5));
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

#[test]
fn literal_product() {
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let b = m(&[&[5.0, 6.0], &[7.0, 8.0]]);
    assert_eq!(&a * &b, m(&[&[19.0, 22.0], &[43.0, 50.0]]));
}

#[test]
fn column_times_row_is_outer_product() {
    let col = m(&[&[1.0], &[2.0]]);
    let row = m(&[&[3.0, 4.0, 5.0]]);
    let outer = col.try_mul(&row).unwrap();
    assert_eq!(outer, m(&[&[3.0, 4.0, 5.0], &[6.0, 8.0, 10.0]]));
}

#[test]
fn non_chainable_product_is_rejected() {
    let mut a = Matrix::new(3, 2).unwrap();
    let b = Matrix::new(2, 2).unwrap();
    let before = a.clone();
    let err = a.try_mul_assign(&b).unwrap_err();
    assert!(matches!(err, LinalgError::IncompatibleForProduct { .. }));
    assert_eq!(a, before);
}

#[test]
fn elementwise_add_and_sub() {
    let mut a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let b = m(&[&[1.0, 1.0], &[1.0, 1.0]]);
    a += &b;
    assert_eq!(a, m(&[&[2.0, 3.0], &[4.0, 5.0]]));
    a -= &b;
    a -= &b;
    assert_eq!(a, m(&[&[0.0, 1.0], &[2.0, 3.0]]));
    assert!(matches!(
        a.try_sub(&Matrix::square(3).unwrap()),
        Err(LinalgError::ShapeMismatch { op: "sub", .. })
    ));
}

#[test]
fn scalar_product_commutes() {
    let a = m(&[&[1.0, 2.0, 3.0, 4.0, 5.0]]);
    assert_eq!(&a * 6.0, 6.0 * &a);
    assert_eq!((&a * 6.0).as_slice(), &[6.0, 12.0, 18.0, 24.0, 30.0]);

    let mut b = a.clone();
    b *= 0.5;
    assert_eq!(b.as_slice(), &[0.5, 1.0, 1.5, 2.0, 2.5]);
}

#[test]
fn unary_minus_negates_every_element() {
    let a = m(&[&[1.0, -2.0], &[3.0, -4.0]]);
    assert_eq!(-&a, m(&[&[-1.0, 2.0], &[-3.0, 4.0]]));
}

#[test]
fn owned_operators_reuse_left_operand() {
    let a = m(&[&[1.0, 2.0]]);
    let b = m(&[&[3.0, 4.0]]);
    let sum = a + &b;
    assert_eq!(sum.as_slice(), &[4.0, 6.0]);
    let diff = sum - b;
    assert_eq!(diff.as_slice(), &[1.0, 2.0]);
}

#[test]
fn assign_scalar_fills() {
    let mut a = Matrix::new(2, 2).unwrap();
    a.assign_scalar(3.0);
    assert!(a.iter().all(|v| *v == 3.0));
}
