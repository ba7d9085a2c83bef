/*
 * @Author       : 老董
 * @Date         : 2026-02-12
 * @Description  : 更新策略模块单元测试
 *
 * 测试按功能分组：
 * - adam: 标准Adam策略测试
 * - adamax: AdaMax变体测试
 * - vanilla: 朴素梯度下降测试
 * - trait_tests: UpdatePolicy trait与枚举分发的通用行为测试
 */
