use ndarray::Array2;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::MatrixError;

mod ops {
    pub mod add;
    pub mod add_assign;
    pub mod div;
    pub mod div_assign;
    pub mod eq;
    pub mod index;
    pub mod mul;
    pub mod mul_assign;
    pub mod others;
    pub mod sub;
    pub mod sub_assign;
}

mod print;
mod shape;

#[cfg(test)]
pub mod tests;

/// 定义矩阵的结构体。这里的矩阵专指二维的f64数组，行、列数均可为0（空矩阵）。
/// 注：通常意义上的数字（类型为usize、i32、f64等）就只是纯数（number），
/// 在这里不被认为是矩阵；1x1的矩阵也不会被当作标量参与广播。
#[derive(Debug, Clone)]
pub struct Matrix {
    data: Array2<f64>,
}

impl Matrix {
    /// 创建一个矩阵，`data`按行优先排列，其长度必须等于`rows * cols`。
    pub fn new(data: &[f64], rows: usize, cols: usize) -> Matrix {
        assert!(
            data.len() == rows * cols,
            "{}",
            MatrixError::DataLengthMismatch {
                shape: [rows, cols],
                expected: rows * cols,
                got: data.len(),
            }
        );
        let data = Array2::from_shape_vec((rows, cols), data.to_vec()).unwrap();
        Matrix { data }
    }

    /// 创建一个全零矩阵。
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            data: Array2::zeros((rows, cols)),
        }
    }

    /// 创建一个随机矩阵，其值在[min, max]的闭区间内均匀分布。
    pub fn new_random(min: f64, max: f64, rows: usize, cols: usize) -> Matrix {
        let mut rng = rand::thread_rng();
        let data = (0..rows * cols)
            .map(|_| Uniform::from(min..=max).sample(&mut rng))
            .collect::<Vec<_>>();
        Matrix::new(&data, rows, cols)
    }

    /// 创建一个随机矩阵，其值在[min, max]的闭区间内均匀分布。
    /// 使用固定种子，同一种子产生的矩阵完全一致。
    pub fn new_random_with_seed(min: f64, max: f64, rows: usize, cols: usize, seed: u64) -> Matrix {
        let mut rng = StdRng::seed_from_u64(seed);
        let data = (0..rows * cols)
            .map(|_| Uniform::from(min..=max).sample(&mut rng))
            .collect::<Vec<_>>();
        Matrix::new(&data, rows, cols)
    }

    /// 创建一个服从正态分布的随机矩阵，其值按指定的均值和标准差生成。
    pub fn new_normal(mean: f64, std_dev: f64, rows: usize, cols: usize) -> Matrix {
        let mut rng = rand::thread_rng();
        let data = normal_samples(&mut rng, mean, std_dev, rows * cols);
        Matrix::new(&data, rows, cols)
    }

    /// 创建一个服从正态分布的随机矩阵，使用固定种子以保证可复现。
    pub fn new_normal_with_seed(
        mean: f64,
        std_dev: f64,
        rows: usize,
        cols: usize,
        seed: u64,
    ) -> Matrix {
        let mut rng = StdRng::seed_from_u64(seed);
        let data = normal_samples(&mut rng, mean, std_dev, rows * cols);
        Matrix::new(&data, rows, cols)
    }
}

/// Box-Muller法生成正态分布样本，非有限值会被丢弃并重新采样。
fn normal_samples<R: Rng>(rng: &mut R, mean: f64, std_dev: f64, data_len: usize) -> Vec<f64> {
    let unit = Uniform::from(0.0..1.0);
    let mut data = Vec::with_capacity(data_len);
    while data.len() < data_len {
        let u1: f64 = unit.sample(rng);
        let u2: f64 = unit.sample(rng);
        let radius = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * std::f64::consts::PI * u2;
        let z0 = mean + std_dev * radius * theta.cos();
        let z1 = mean + std_dev * radius * theta.sin();
        if z0.is_finite() {
            data.push(z0);
        }
        if data.len() < data_len && z1.is_finite() {
            data.push(z1);
        }
    }
    data
}
