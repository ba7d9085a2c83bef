use crate::errors::{MatrixError, Operator};
use crate::matrix::Matrix;
use std::ops::SubAssign;

impl SubAssign for Matrix {
    fn sub_assign(&mut self, other: Matrix) {
        // 检查是否可以执行减法操作
        if self.is_same_shape(&other) {
            self.data -= &other.data;
        } else {
            panic!(
                "{}",
                MatrixError::OperatorError {
                    operator: Operator::SubAssign,
                    matrix1_shape: self.shape(),
                    matrix2_shape: other.shape(),
                }
            )
        }
    }
}

impl<'a> SubAssign<&'a Matrix> for Matrix {
    fn sub_assign(&mut self, other: &'a Matrix) {
        // 检查是否可以执行减法操作
        if self.is_same_shape(other) {
            self.data -= &other.data;
        } else {
            panic!(
                "{}",
                MatrixError::OperatorError {
                    operator: Operator::SubAssign,
                    matrix1_shape: self.shape(),
                    matrix2_shape: other.shape(),
                }
            )
        }
    }
}

impl SubAssign<f64> for Matrix {
    fn sub_assign(&mut self, scalar: f64) {
        self.data -= scalar;
    }
}

impl<'a> SubAssign<f64> for &'a mut Matrix {
    fn sub_assign(&mut self, scalar: f64) {
        self.data -= scalar;
    }
}
