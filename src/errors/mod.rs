use thiserror::Error;
mod ops;
pub use self::ops::*;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MatrixError {
    // 矩阵二元运算
    #[error(
        "形状不一致，故无法{operator}：第一个矩阵的形状为{matrix1_shape:?}，第二个矩阵的形状为{matrix2_shape:?}"
    )]
    OperatorError {
        operator: Operator,
        matrix1_shape: [usize; 2],
        matrix2_shape: [usize; 2],
    },

    // 构造用
    #[error("数据长度与形状不符：形状{shape:?}需要{expected}个元素，实际得到{got}个")]
    DataLengthMismatch {
        shape: [usize; 2],
        expected: usize,
        got: usize,
    },
}

/// 优化器更新过程的错误类型
///
/// 形状对不上时更新会立即返回错误，累积状态保持原样不动。
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OptimizerError {
    #[error("形状不匹配：预期{expected:?}，实际得到{got:?}，{message}")]
    ShapeMismatch {
        expected: [usize; 2],
        got: [usize; 2],
        message: String,
    },
}
