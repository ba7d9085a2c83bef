use crate::matrix::Matrix;
use std::ops::AddAssign;

impl AddAssign for Matrix {
    fn add_assign(&mut self, other: Self) {
        // 使用`Add` trait的`add`方法来执行加法，并更新当前矩阵
        *self = self.clone() + other;
    }
}

impl<'a> AddAssign<&'a Self> for Matrix {
    fn add_assign(&mut self, other: &'a Self) {
        // 使用`Add` trait的`add`方法来执行加法，并更新当前矩阵
        *self = self.clone() + other;
    }
}

impl AddAssign<f64> for Matrix {
    fn add_assign(&mut self, scalar: f64) {
        // 使用`Add` trait的`add`方法来执行加法，并更新当前矩阵
        *self = self.clone() + scalar;
    }
}

impl AddAssign<f64> for &mut Matrix {
    fn add_assign(&mut self, scalar: f64) {
        // 使用`Add` trait的`add`方法来执行加法，并更新当前矩阵
        **self = (*self).clone() + scalar;
    }
}
