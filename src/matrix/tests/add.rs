use crate::assert_panic;
use crate::matrix::Matrix;

#[test]
fn test_add_with_or_without_ownership() {
    let matrix1 = Matrix::new(&[1.0, 2.0, 3.0, 4.0], 2, 2);
    let matrix2 = Matrix::new(&[5.0, 6.0, 7.0, 8.0], 2, 2);

    // f64 + 不带引用的矩阵
    let result = 5.0 + matrix1.clone();
    let expected = Matrix::new(&[6.0, 7.0, 8.0, 9.0], 2, 2);
    assert_eq!(result, expected);

    // f64 + 带引用的矩阵
    let result = 5.0 + &matrix1;
    let expected = Matrix::new(&[6.0, 7.0, 8.0, 9.0], 2, 2);
    assert_eq!(result, expected);

    // 不带引用的矩阵 + f64
    let result = matrix1.clone() + 5.0;
    let expected = Matrix::new(&[6.0, 7.0, 8.0, 9.0], 2, 2);
    assert_eq!(result, expected);

    // 带引用的矩阵 + f64
    let result = &matrix1 + 5.0;
    let expected = Matrix::new(&[6.0, 7.0, 8.0, 9.0], 2, 2);
    assert_eq!(result, expected);

    // 不带引用的矩阵 + 不带引用的矩阵
    let result = matrix1.clone() + matrix2.clone();
    let expected = Matrix::new(&[6.0, 8.0, 10.0, 12.0], 2, 2);
    assert_eq!(result, expected);

    // 不带引用的矩阵 + 带引用的矩阵
    let result = matrix1.clone() + &matrix2;
    let expected = Matrix::new(&[6.0, 8.0, 10.0, 12.0], 2, 2);
    assert_eq!(result, expected);

    // 带引用的矩阵 + 不带引用的矩阵
    let result = &matrix1 + matrix2.clone();
    let expected = Matrix::new(&[6.0, 8.0, 10.0, 12.0], 2, 2);
    assert_eq!(result, expected);

    // 带引用的矩阵 + 带引用的矩阵
    let result = &matrix1 + &matrix2;
    let expected = Matrix::new(&[6.0, 8.0, 10.0, 12.0], 2, 2);
    assert_eq!(result, expected);

    // 验证原始矩阵仍然可用
    assert_eq!(matrix1, Matrix::new(&[1.0, 2.0, 3.0, 4.0], 2, 2));
    assert_eq!(matrix2, Matrix::new(&[5.0, 6.0, 7.0, 8.0], 2, 2));
}

#[test]
fn test_add_matrices_with_diff_shape() {
    let matrix1 = Matrix::new(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
    let matrix2 = Matrix::new(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2);
    assert_panic!(
        &matrix1 + &matrix2,
        "形状不一致，故无法相加：第一个矩阵的形状为[2, 3]，第二个矩阵的形状为[3, 2]"
    );
}

#[test]
fn test_add_does_not_broadcast_1x1() {
    // 1x1矩阵不被视为标量，不参与广播
    let matrix = Matrix::new(&[1.0, 2.0, 3.0, 4.0], 2, 2);
    let single = Matrix::new(&[10.0], 1, 1);
    assert_panic!(
        &matrix + &single,
        "形状不一致，故无法相加：第一个矩阵的形状为[2, 2]，第二个矩阵的形状为[1, 1]"
    );
}
