/*
 * @Author       : 老董
 * @Date         : 2025-11-03 10:15:02
 * @LastEditors  : 老董
 * @LastEditTime : 2026-02-08 15:23:11
 * @Description  : 矩阵的乘法，实现了两个矩阵“逐元素”（或矩阵与纯数）相乘的运算（Hadamard积），
 *                 并返回一个新的矩阵。注意：这里不是线性代数中的矩阵乘法（mat_mul）。
 */

use crate::errors::{MatrixError, Operator};
use crate::matrix::Matrix;
use std::ops::Mul;

impl Mul<Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, matrix: Matrix) -> Matrix {
        Matrix {
            data: self * &matrix.data,
        }
    }
}
impl<'a> Mul<&'a Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, matrix: &'a Matrix) -> Matrix {
        Matrix {
            data: self * &matrix.data,
        }
    }
}

impl Mul<f64> for Matrix {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            data: &self.data * scalar,
        }
    }
}
impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix {
        Matrix {
            data: &self.data * scalar,
        }
    }
}

impl Mul for Matrix {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        mul_within_matrices(&self, &other)
    }
}

impl<'a> Mul<&'a Self> for Matrix {
    type Output = Self;

    fn mul(self, other: &'a Self) -> Self {
        mul_within_matrices(&self, other)
    }
}

impl Mul<Matrix> for &Matrix {
    type Output = Matrix;

    fn mul(self, other: Matrix) -> Matrix {
        mul_within_matrices(self, &other)
    }
}

impl<'b> Mul<&'b Matrix> for &Matrix {
    type Output = Matrix;

    fn mul(self, other: &'b Matrix) -> Matrix {
        mul_within_matrices(self, other)
    }
}

/// 两个矩阵逐元素相乘（Hadamard积），形状必须严格一致
///
/// # Panics
/// 如果两个矩阵形状不一致
fn mul_within_matrices(matrix_1: &Matrix, matrix_2: &Matrix) -> Matrix {
    assert!(
        matrix_1.is_same_shape(matrix_2),
        "{}",
        MatrixError::OperatorError {
            operator: Operator::Mul,
            matrix1_shape: matrix_1.shape(),
            matrix2_shape: matrix_2.shape(),
        }
    );
    Matrix {
        data: &matrix_1.data * &matrix_2.data,
    }
}
