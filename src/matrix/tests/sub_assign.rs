use crate::assert_panic;
use crate::matrix::Matrix;

#[test]
fn test_sub_assign_matrix() {
    let mut matrix = Matrix::new(&[11.0, 22.0, 33.0, 44.0], 2, 2);
    matrix -= Matrix::new(&[1.0, 2.0, 3.0, 4.0], 2, 2);
    let expected = Matrix::new(&[10.0, 20.0, 30.0, 40.0], 2, 2);
    assert_eq!(matrix, expected);
}

#[test]
fn test_sub_assign_matrix_ref() {
    let mut matrix = Matrix::new(&[11.0, 22.0, 33.0, 44.0], 2, 2);
    let other = Matrix::new(&[1.0, 2.0, 3.0, 4.0], 2, 2);
    matrix -= &other;
    let expected = Matrix::new(&[10.0, 20.0, 30.0, 40.0], 2, 2);
    assert_eq!(matrix, expected);
    // other未被消耗
    assert_eq!(other, Matrix::new(&[1.0, 2.0, 3.0, 4.0], 2, 2));
}

#[test]
fn test_sub_assign_f64() {
    let mut matrix = Matrix::new(&[1.0, 2.0, 3.0], 1, 3);
    matrix -= 1.0;
    let expected = Matrix::new(&[0.0, 1.0, 2.0], 1, 3);
    assert_eq!(matrix, expected);
}

#[test]
fn test_sub_assign_with_diff_shape() {
    let mut matrix = Matrix::new(&[1.0, 2.0], 1, 2);
    assert_panic!(
        matrix -= Matrix::new(&[1.0, 2.0, 3.0, 4.0], 2, 2),
        "形状不一致，故无法自相减：第一个矩阵的形状为[1, 2]，第二个矩阵的形状为[2, 2]"
    );
}
