use crate::errors::{MatrixError, Operator};
use crate::matrix::Matrix;
use std::ops::DivAssign;

// 与`div`一样遵循IEEE 754语义，除数为零不会panic。

impl DivAssign for Matrix {
    fn div_assign(&mut self, other: Matrix) {
        // 检查是否可以执行除法操作
        if self.is_same_shape(&other) {
            self.data /= &other.data;
        } else {
            panic!(
                "{}",
                MatrixError::OperatorError {
                    operator: Operator::DivAssign,
                    matrix1_shape: self.shape(),
                    matrix2_shape: other.shape(),
                }
            )
        }
    }
}

impl<'a> DivAssign<&'a Matrix> for Matrix {
    fn div_assign(&mut self, other: &'a Matrix) {
        // 检查是否可以执行除法操作
        if self.is_same_shape(other) {
            self.data /= &other.data;
        } else {
            panic!(
                "{}",
                MatrixError::OperatorError {
                    operator: Operator::DivAssign,
                    matrix1_shape: self.shape(),
                    matrix2_shape: other.shape(),
                }
            )
        }
    }
}

impl DivAssign<f64> for Matrix {
    fn div_assign(&mut self, scalar: f64) {
        self.data /= scalar;
    }
}

impl<'a> DivAssign<f64> for &'a mut Matrix {
    fn div_assign(&mut self, scalar: f64) {
        self.data /= scalar;
    }
}
