/*
 * @Author       : 老董
 * @Date         : 2025-11-05 14:20:35
 * @LastEditors  : 老董
 * @LastEditTime : 2026-02-12 10:02:18
 * @Description  : 梯度更新策略模块，实现Adam（含AdaMax变体）与朴素梯度下降。
 *                 策略对象持有自身的累积状态，由外层训练循环负责喂入梯度。
 */

mod adam;
mod base;
mod vanilla;

#[cfg(test)]
mod tests;

pub use adam::{AdamUpdate, SecondOrderEstimate};
pub use base::{PolicyEnum, UpdatePolicy};
pub use vanilla::VanillaUpdate;
