use crate::matrix::Matrix;
use std::ops::{Index, IndexMut};

// 按(行, 列)下标访问元素，下标越界时panic。

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.data[[index.0, index.1]]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.data[[index.0, index.1]]
    }
}
