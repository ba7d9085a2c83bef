//! # Only Optim
//!
//! `only_optim`项目旨在用纯rust实现一组即插即用的梯度更新策略（Adam及其AdaMax变体等），
//! 策略对象自持累积状态（一阶矩、二阶矩或无穷范数），由外层训练循环喂入参数与梯度驱动，
//! 不绑定任何特定的计算图或网络结构，便于嵌入各类优化器外壳。
//!

pub mod errors;
pub mod matrix;
pub mod optimizer;
pub mod utils;
