use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    #[error("invalid dimensions for matrix {op}: {}x{} and {}x{}", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("cannot fill a {rows}x{cols} matrix with {len} values")]
    InvalidShape { rows: usize, cols: usize, len: usize },

    #[error("matrix is not a 3x3 affine transform")]
    NotAffine,

    #[error("cannot normalize a zero-length vector")]
    ZeroLength,
}

pub type Result<T> = std::result::Result<T, MathError>;
