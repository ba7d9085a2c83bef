/*
 * @Author       : 老董
 * @Date         : 2025-11-03 09:42:17
 * @LastEditors  : 老董
 * @LastEditTime : 2026-02-08 15:21:40
 * @Description  : 矩阵的加法，实现了两个矩阵“逐元素”（或矩阵与纯数）相加的运算，并返回一个新的矩阵。
 *                 该运算支持以下情况：
 *                 1. 其中一个操作数为纯数而另一个为矩阵：则返回的矩阵形状与该矩阵相同。
 *                 2. 两个操作数均为矩阵：两者形状必须严格一致，不支持广播（broadcasting）。
 */

use crate::errors::{MatrixError, Operator};
use crate::matrix::Matrix;
use std::ops::Add;

/*↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓f64 +（不）带引用的矩阵↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓*/
impl Add<Matrix> for f64 {
    type Output = Matrix;

    fn add(self, matrix: Matrix) -> Matrix {
        Matrix {
            data: self + &matrix.data,
        }
    }
}
impl<'a> Add<&'a Matrix> for f64 {
    type Output = Matrix;

    fn add(self, matrix: &'a Matrix) -> Matrix {
        Matrix {
            data: self + &matrix.data,
        }
    }
}
/*↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑f64 +（不）带引用的矩阵↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑*/

/*↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓（不）带引用的矩阵 + f64↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓*/
impl Add<f64> for Matrix {
    type Output = Self;

    fn add(self, scalar: f64) -> Self {
        Self {
            data: &self.data + scalar,
        }
    }
}
impl Add<f64> for &Matrix {
    type Output = Matrix;

    fn add(self, scalar: f64) -> Matrix {
        Matrix {
            data: &self.data + scalar,
        }
    }
}
/*↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑（不）带引用的矩阵 + f64↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑*/

/*↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓（不）带引用的矩阵 +（不）带引用的矩阵↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓*/
impl Add for Matrix {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        add_within_matrices(&self, &other)
    }
}

impl<'a> Add<&'a Self> for Matrix {
    type Output = Self;

    fn add(self, other: &'a Self) -> Self {
        add_within_matrices(&self, other)
    }
}

impl Add<Matrix> for &Matrix {
    type Output = Matrix;

    fn add(self, other: Matrix) -> Matrix {
        add_within_matrices(self, &other)
    }
}

impl<'b> Add<&'b Matrix> for &Matrix {
    type Output = Matrix;

    fn add(self, other: &'b Matrix) -> Matrix {
        add_within_matrices(self, other)
    }
}
/*↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑（不）带引用的矩阵 +（不）带引用的矩阵↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑*/

/// 两个矩阵逐元素相加，形状必须严格一致
///
/// # Panics
/// 如果两个矩阵形状不一致
fn add_within_matrices(matrix_1: &Matrix, matrix_2: &Matrix) -> Matrix {
    assert!(
        matrix_1.is_same_shape(matrix_2),
        "{}",
        MatrixError::OperatorError {
            operator: Operator::Add,
            matrix1_shape: matrix_1.shape(),
            matrix2_shape: matrix_2.shape(),
        }
    );
    Matrix {
        data: &matrix_1.data + &matrix_2.data,
    }
}
