use crate::errors::{MatrixError, Operator};
use crate::matrix::Matrix;
use std::ops::MulAssign;

impl MulAssign for Matrix {
    fn mul_assign(&mut self, other: Matrix) {
        // 检查是否可以执行乘法操作
        if self.is_same_shape(&other) {
            self.data *= &other.data;
        } else {
            panic!(
                "{}",
                MatrixError::OperatorError {
                    operator: Operator::MulAssign,
                    matrix1_shape: self.shape(),
                    matrix2_shape: other.shape(),
                }
            )
        }
    }
}

impl<'a> MulAssign<&'a Matrix> for Matrix {
    fn mul_assign(&mut self, other: &'a Matrix) {
        // 检查是否可以执行乘法操作
        if self.is_same_shape(other) {
            self.data *= &other.data;
        } else {
            panic!(
                "{}",
                MatrixError::OperatorError {
                    operator: Operator::MulAssign,
                    matrix1_shape: self.shape(),
                    matrix2_shape: other.shape(),
                }
            )
        }
    }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, scalar: f64) {
        self.data *= scalar;
    }
}

impl<'a> MulAssign<f64> for &'a mut Matrix {
    fn mul_assign(&mut self, scalar: f64) {
        self.data *= scalar;
    }
}
