/*
 * @Author       : 老董
 * @Date         : 2025-11-05 16:40:21
 * @LastEditors  : 老董
 * @LastEditTime : 2026-02-10 09:55:12
 * @Description  : 朴素梯度下降的更新策略
 */

use super::base::UpdatePolicy;
use crate::errors::OptimizerError;
use crate::matrix::Matrix;

/// 朴素梯度下降，无任何累积状态：
/// - w -= step_size * g
#[derive(Debug, Clone, Copy, Default)]
pub struct VanillaUpdate;

impl VanillaUpdate {
    pub const fn new() -> Self {
        Self
    }
}

impl UpdatePolicy for VanillaUpdate {
    /// 无状态，无需分配
    fn initialize(&mut self, _rows: usize, _cols: usize) {}

    fn update(
        &mut self,
        params: &mut Matrix,
        step_size: f64,
        gradient: &Matrix,
        _iteration: usize,
    ) -> Result<(), OptimizerError> {
        if gradient.shape() != params.shape() {
            return Err(OptimizerError::ShapeMismatch {
                expected: params.shape(),
                got: gradient.shape(),
                message: "梯度矩阵与参数矩阵的形状不一致".to_string(),
            });
        }
        *params -= step_size * gradient;
        Ok(())
    }
}
