/*
 * @Author       : 老董
 * @Date         : 2025-11-05 15:02:48
 * @LastEditors  : 老董
 * @LastEditTime : 2026-02-12 10:31:09
 * @Description  : Adam更新策略及其AdaMax变体
 */

use super::base::UpdatePolicy;
use crate::errors::OptimizerError;
use crate::matrix::Matrix;

/// Adam的二阶统计量，两种变体二选一：
/// - `SecondMoment`：梯度平方的指数滑动平均（标准Adam）
/// - `InfinityNorm`：梯度绝对值的指数加权无穷范数（AdaMax）
///
/// 具体用哪种由`initialize`时的变体开关决定，两种累积量不会同时存在。
#[derive(Debug, Clone)]
pub enum SecondOrderEstimate {
    SecondMoment(Matrix),
    InfinityNorm(Matrix),
}

/// Adam更新策略
///
/// 标准Adam（`ada_max`为false）：
/// - m = beta1 * m + (1 - beta1) * g
/// - v = beta2 * v + (1 - beta2) * g^2
/// - w -= step_size * sqrt(1 - beta2^i) / (1 - beta1^i) * m / (sqrt(v) + epsilon)
///
/// AdaMax变体（`ada_max`为true）：
/// - m = beta1 * m + (1 - beta1) * g
/// - u = max(beta2 * u, |g|)
/// - w -= step_size / (1 - beta1^i) * m / (u + epsilon)
///
/// 注：标准Adam分母中的epsilon不随偏置修正缩放，即m / (sqrt(v) + epsilon)
/// 是对m̂ / (sqrt(v̂) + epsilon)的近似，二者相差约epsilon量级。
///
/// 参考文献：
/// - Kingma & Ba, "Adam: A Method for Stochastic Optimization" (ICLR 2015)
/// - AdaMax变体见同文第7.1节
///
/// 使用示例：
/// ```ignore
/// let mut policy = AdamUpdate::default();
/// policy.initialize(param.rows(), param.cols());
/// for i in 1..=max_iter {
///     let gradient = compute_gradient(&param);
///     policy.update(&mut param, 0.001, &gradient, i)?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdamUpdate {
    /// 数值稳定项，加在分母上
    epsilon: f64,
    /// 一阶矩的指数衰减率
    beta1: f64,
    /// 二阶统计量的指数衰减率
    beta2: f64,
    /// true时采用AdaMax变体，在下一次`initialize`时生效
    ada_max: bool,
    /// 一阶矩估计
    first_moment: Matrix,
    /// 二阶统计量
    second_order: SecondOrderEstimate,
}

impl Default for AdamUpdate {
    /// 论文推荐的默认超参数：epsilon=1e-8，beta1=0.9，beta2=0.999，标准Adam变体。
    fn default() -> Self {
        Self::new(1e-8, 0.9, 0.999, false)
    }
}

impl AdamUpdate {
    /// 创建Adam更新策略，累积状态为空矩阵，使用前需`initialize`。
    pub fn new(epsilon: f64, beta1: f64, beta2: f64, ada_max: bool) -> Self {
        let second_order = if ada_max {
            SecondOrderEstimate::InfinityNorm(Matrix::zeros(0, 0))
        } else {
            SecondOrderEstimate::SecondMoment(Matrix::zeros(0, 0))
        };
        Self {
            epsilon,
            beta1,
            beta2,
            ada_max,
            first_moment: Matrix::zeros(0, 0),
            second_order,
        }
    }

    /// 获取数值稳定项
    pub const fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// 设置数值稳定项
    pub const fn set_epsilon(&mut self, epsilon: f64) {
        self.epsilon = epsilon;
    }

    /// 获取一阶矩的衰减率
    pub const fn beta1(&self) -> f64 {
        self.beta1
    }

    /// 设置一阶矩的衰减率
    pub const fn set_beta1(&mut self, beta1: f64) {
        self.beta1 = beta1;
    }

    /// 获取二阶统计量的衰减率
    pub const fn beta2(&self) -> f64 {
        self.beta2
    }

    /// 设置二阶统计量的衰减率
    pub const fn set_beta2(&mut self, beta2: f64) {
        self.beta2 = beta2;
    }

    /// 是否采用AdaMax变体
    pub const fn ada_max(&self) -> bool {
        self.ada_max
    }

    /// 设置变体开关。已分配的累积状态不受影响，到下一次`initialize`才会切换。
    pub const fn set_ada_max(&mut self, ada_max: bool) {
        self.ada_max = ada_max;
    }

    /// 一阶矩估计（未`initialize`时为0x0空矩阵）
    pub const fn first_moment(&self) -> &Matrix {
        &self.first_moment
    }

    /// 二阶原始矩估计，仅标准Adam变体持有
    pub fn second_moment(&self) -> Option<&Matrix> {
        match &self.second_order {
            SecondOrderEstimate::SecondMoment(second_moment) => Some(second_moment),
            SecondOrderEstimate::InfinityNorm(_) => None,
        }
    }

    /// 指数加权无穷范数，仅AdaMax变体持有
    pub fn infinity_norm(&self) -> Option<&Matrix> {
        match &self.second_order {
            SecondOrderEstimate::SecondMoment(_) => None,
            SecondOrderEstimate::InfinityNorm(infinity_norm) => Some(infinity_norm),
        }
    }
}

impl UpdatePolicy for AdamUpdate {
    fn initialize(&mut self, rows: usize, cols: usize) {
        self.first_moment = Matrix::zeros(rows, cols);
        self.second_order = if self.ada_max {
            SecondOrderEstimate::InfinityNorm(Matrix::zeros(rows, cols))
        } else {
            SecondOrderEstimate::SecondMoment(Matrix::zeros(rows, cols))
        };
    }

    fn update(
        &mut self,
        params: &mut Matrix,
        step_size: f64,
        gradient: &Matrix,
        iteration: usize,
    ) -> Result<(), OptimizerError> {
        let expected = self.first_moment.shape();
        if gradient.shape() != expected {
            return Err(OptimizerError::ShapeMismatch {
                expected,
                got: gradient.shape(),
                message: "梯度矩阵与累积状态的形状不一致，需先按正确尺寸调用initialize".to_string(),
            });
        }
        if params.shape() != expected {
            return Err(OptimizerError::ShapeMismatch {
                expected,
                got: params.shape(),
                message: "参数矩阵与累积状态的形状不一致".to_string(),
            });
        }

        // 一阶矩：m = beta1 * m + (1 - beta1) * g
        let scaled_gradient = gradient * (1.0 - self.beta1);
        self.first_moment *= self.beta1;
        self.first_moment += &scaled_gradient;

        // 二阶统计量，按initialize时选定的变体累积
        match &mut self.second_order {
            SecondOrderEstimate::SecondMoment(second_moment) => {
                // v = beta2 * v + (1 - beta2) * g^2
                let scaled_square = gradient * gradient * (1.0 - self.beta2);
                *second_moment *= self.beta2;
                *second_moment += &scaled_square;
            }
            SecondOrderEstimate::InfinityNorm(infinity_norm) => {
                // u = max(beta2 * u, |g|)
                *infinity_norm *= self.beta2;
                *infinity_norm = infinity_norm.maximum(&gradient.abs());
            }
        }

        let bias_correction1 = 1.0 - self.beta1.powi(iteration as i32);
        let bias_correction2 = 1.0 - self.beta2.powi(iteration as i32);

        match &self.second_order {
            SecondOrderEstimate::SecondMoment(second_moment) => {
                // 迭代序号为0时两个偏置修正均为0，系数0/0会把参数污染成NaN
                let coefficient = step_size * bias_correction2.sqrt() / bias_correction1;
                *params -= coefficient * &self.first_moment / (second_moment.sqrt() + self.epsilon);
            }
            SecondOrderEstimate::InfinityNorm(infinity_norm) => {
                // 迭代序号为0时跳过参数更新，上面的矩累积照常进行
                if bias_correction1 != 0.0 {
                    *params -= step_size / bias_correction1 * &self.first_moment
                        / (infinity_norm + self.epsilon);
                }
            }
        }

        Ok(())
    }
}
