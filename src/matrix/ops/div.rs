use crate::errors::{MatrixError, Operator};
use crate::matrix::Matrix;
use std::ops::Div;

// 除法遵循IEEE 754语义：除数中的零元素产生inf或NaN，不会panic。

//↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓f64 /（不）带引用的矩阵↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓
impl Div<Matrix> for f64 {
    type Output = Matrix;

    fn div(self, matrix: Matrix) -> Matrix {
        Matrix {
            data: self / &matrix.data,
        }
    }
}
impl<'a> Div<&'a Matrix> for f64 {
    type Output = Matrix;

    fn div(self, matrix: &'a Matrix) -> Matrix {
        Matrix {
            data: self / &matrix.data,
        }
    }
}
//↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑f64 /（不）带引用的矩阵↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑

//↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓（不）带引用的矩阵 / f64↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓
impl Div<f64> for Matrix {
    type Output = Matrix;

    fn div(self, scalar: f64) -> Matrix {
        Matrix {
            data: &self.data / scalar,
        }
    }
}
impl<'a> Div<f64> for &'a Matrix {
    type Output = Matrix;

    fn div(self, scalar: f64) -> Matrix {
        Matrix {
            data: &self.data / scalar,
        }
    }
}
//↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑（不）带引用的矩阵 / f64↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑

//↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓（不）带引用的矩阵 /（不）带引用的矩阵↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓
impl Div for Matrix {
    type Output = Matrix;

    fn div(self, other: Matrix) -> Matrix {
        div_within_matrices(&self, &other)
    }
}

impl<'a> Div<&'a Matrix> for Matrix {
    type Output = Matrix;

    fn div(self, other: &'a Matrix) -> Matrix {
        div_within_matrices(&self, other)
    }
}

impl<'a> Div<Matrix> for &'a Matrix {
    type Output = Matrix;

    fn div(self, other: Matrix) -> Matrix {
        div_within_matrices(self, &other)
    }
}

impl<'a, 'b> Div<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn div(self, other: &'b Matrix) -> Matrix {
        div_within_matrices(self, other)
    }
}
//↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑（不）带引用的矩阵 /（不）带引用的矩阵↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑

/// 两个矩阵逐元素相除，形状必须严格一致
///
/// # Panics
/// 如果两个矩阵形状不一致
fn div_within_matrices(matrix_1: &Matrix, matrix_2: &Matrix) -> Matrix {
    assert!(
        matrix_1.is_same_shape(matrix_2),
        "{}",
        MatrixError::OperatorError {
            operator: Operator::Div,
            matrix1_shape: matrix_1.shape(),
            matrix2_shape: matrix_2.shape(),
        }
    );
    Matrix {
        data: &matrix_1.data / &matrix_2.data,
    }
}
