//! Platform adapter for the browser (WASM + canvas).

pub mod app;
pub mod canvas;
pub mod error;

pub use app::WebGame;
pub use canvas::CanvasContext;
pub use error::{Result, WebError};

use wasm_bindgen::prelude::*;

/// Routes Rust panics to the browser console. Call once at startup.
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
