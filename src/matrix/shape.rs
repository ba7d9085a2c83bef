use super::Matrix;

impl Matrix {
    /// 矩阵的行数。
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// 矩阵的列数。
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// 矩阵的形状，形如`[行数, 列数]`。
    pub fn shape(&self) -> [usize; 2] {
        [self.data.nrows(), self.data.ncols()]
    }

    /// 矩阵的元素总数。
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// 行数或列数为0时即为空矩阵。
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// 判断两个矩阵的形状是否严格一致。
    pub fn is_same_shape(&self, other: &Self) -> bool {
        self.shape() == other.shape()
    }
}
