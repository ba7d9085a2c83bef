use crate::errors::{MatrixError, Operator};
use crate::matrix::Matrix;
use std::ops::Sub;

impl Sub<Matrix> for f64 {
    type Output = Matrix;

    fn sub(self, matrix: Matrix) -> Matrix {
        Matrix {
            data: self - &matrix.data,
        }
    }
}
impl<'a> Sub<&'a Matrix> for f64 {
    type Output = Matrix;

    fn sub(self, matrix: &'a Matrix) -> Matrix {
        Matrix {
            data: self - &matrix.data,
        }
    }
}

impl Sub<f64> for Matrix {
    type Output = Self;

    fn sub(self, scalar: f64) -> Self {
        Self {
            data: &self.data - scalar,
        }
    }
}
impl Sub<f64> for &Matrix {
    type Output = Matrix;

    fn sub(self, scalar: f64) -> Matrix {
        Matrix {
            data: &self.data - scalar,
        }
    }
}

impl Sub for Matrix {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        sub_within_matrices(&self, &other)
    }
}

impl<'a> Sub<&'a Self> for Matrix {
    type Output = Self;

    fn sub(self, other: &'a Self) -> Self {
        sub_within_matrices(&self, other)
    }
}

impl Sub<Matrix> for &Matrix {
    type Output = Matrix;

    fn sub(self, other: Matrix) -> Matrix {
        sub_within_matrices(self, &other)
    }
}

impl<'b> Sub<&'b Matrix> for &Matrix {
    type Output = Matrix;

    fn sub(self, other: &'b Matrix) -> Matrix {
        sub_within_matrices(self, other)
    }
}

/// 两个矩阵逐元素相减，形状必须严格一致
///
/// # Panics
/// 如果两个矩阵形状不一致
fn sub_within_matrices(matrix_1: &Matrix, matrix_2: &Matrix) -> Matrix {
    assert!(
        matrix_1.is_same_shape(matrix_2),
        "{}",
        MatrixError::OperatorError {
            operator: Operator::Sub,
            matrix1_shape: matrix_1.shape(),
            matrix2_shape: matrix_2.shape(),
        }
    );
    Matrix {
        data: &matrix_1.data - &matrix_2.data,
    }
}
