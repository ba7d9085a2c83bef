use super::Matrix;
use std::fmt;

impl Matrix {
    pub fn print(&self) {
        println!("{self}");
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for row in 0..self.rows() {
            if row > 0 {
                write!(f, " ")?;
            }
            write!(f, "[")?;
            for col in 0..self.cols() {
                write!(f, "{:8.4}", self.data[[row, col]])?;
                if col + 1 < self.cols() {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
            if row + 1 < self.rows() {
                write!(f, ", ")?;
                writeln!(f)?;
            }
        }
        write!(f, "]")?;
        writeln!(f, "\n形状: {:?}", self.shape())
    }
}
