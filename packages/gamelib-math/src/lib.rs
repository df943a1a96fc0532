pub mod context;
pub mod error;
pub mod matrix;
pub mod random;
pub mod transform;
pub mod vector;

pub use context::{CommandRecorder, DrawCommand, DrawContext};
pub use error::{MathError, Result};
pub use matrix::Matrix;
pub use transform::Transform;
pub use vector::Vector2;
