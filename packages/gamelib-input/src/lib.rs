pub mod codes;
pub mod keys;

pub use keys::{KeyEvent, Keys, Modifiers};
