/*
 * @Author       : 老董
 * @Date         : 2025-11-04 11:08:33
 * @LastEditors  : 老董
 * @LastEditTime : 2026-02-08 15:26:05
 * @Description  : 矩阵的其他运算，如逐元素开方、取绝对值、逐元素取最大及求和等。
 */

use crate::errors::{MatrixError, Operator};
use crate::matrix::Matrix;
use ndarray::Zip;

impl Matrix {
    /// 对矩阵的每个元素开平方，返回一个新的矩阵。
    /// 注：负数元素的结果为NaN。
    pub fn sqrt(&self) -> Matrix {
        Matrix {
            data: self.data.mapv(f64::sqrt),
        }
    }

    /// 对矩阵的每个元素取绝对值，返回一个新的矩阵。
    pub fn abs(&self) -> Matrix {
        Matrix {
            data: self.data.mapv(f64::abs),
        }
    }

    /// 与另一矩阵逐元素取较大值，返回一个新的矩阵，形状必须严格一致。
    ///
    /// # Panics
    /// 如果两个矩阵形状不一致
    pub fn maximum(&self, other: &Matrix) -> Matrix {
        assert!(
            self.is_same_shape(other),
            "{}",
            MatrixError::OperatorError {
                operator: Operator::Maximum,
                matrix1_shape: self.shape(),
                matrix2_shape: other.shape(),
            }
        );
        Matrix {
            data: Zip::from(&self.data)
                .and(&other.data)
                .map_collect(|&a, &b| a.max(b)),
        }
    }

    /// 矩阵所有元素之和，空矩阵返回0.0。
    pub fn sum(&self) -> f64 {
        let mut value = 0.0;
        Zip::from(&self.data).for_each(|a| value += a);
        value
    }
}
