/*
 * @Author       : 老董
 * @Date         : 2025-11-05 14:25:10
 * @LastEditors  : 老董
 * @LastEditTime : 2026-02-12 10:05:44
 * @Description  : 更新策略的基础trait与可静态分发的策略枚举
 */

use enum_dispatch::enum_dispatch;

use super::adam::AdamUpdate;
use super::vanilla::VanillaUpdate;
use crate::errors::OptimizerError;
use crate::matrix::Matrix;

#[enum_dispatch]
#[derive(Debug, Clone)]
pub enum PolicyEnum {
    AdamUpdate,
    VanillaUpdate,
}

/// 更新策略的核心 trait
#[enum_dispatch(PolicyEnum)]
pub trait UpdatePolicy {
    /// 按参数矩阵的尺寸分配（或清零重建）累积状态。
    /// 依赖内部状态的策略必须先调用本方法再做`update`；
    /// 重复调用会丢弃已有的累积量，变体开关类的配置也在此刻生效。
    fn initialize(&mut self, rows: usize, cols: usize);

    /// 执行单步参数更新，就地修改`params`。
    ///
    /// `iteration`是从1开始计数的迭代序号，用于偏置修正；
    /// 形状不匹配时返回错误且不触碰任何状态。
    ///
    /// ```ignore
    /// let mut policy = AdamUpdate::default();
    /// policy.initialize(2, 2);
    /// policy.update(&mut params, 0.01, &gradient, 1)?;
    /// ```
    fn update(
        &mut self,
        params: &mut Matrix,
        step_size: f64,
        gradient: &Matrix,
        iteration: usize,
    ) -> Result<(), OptimizerError>;
}
