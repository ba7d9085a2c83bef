use crate::matrix::Matrix;

//↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓（不）带引用的矩阵 ==（不）带引用的矩阵↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓
// 注：形状不同或任一元素为NaN时均不相等。
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl PartialEq<&Self> for Matrix {
    fn eq(&self, other: &&Self) -> bool {
        self.data == other.data
    }
}

impl PartialEq<Matrix> for &Matrix {
    fn eq(&self, other: &Matrix) -> bool {
        self.data == other.data
    }
}
//↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑（不）带引用的矩阵 ==（不）带引用的矩阵↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑
