use gamelib_math::DrawContext;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{Result, WebError};

/// [`DrawContext`] over a canvas' 2D rendering context.
pub struct CanvasContext {
    ctx: CanvasRenderingContext2d,
}

impl CanvasContext {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(WebError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| WebError::NoContext)?;
        Ok(Self::new(ctx))
    }

    pub fn raw(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }
}

impl DrawContext for CanvasContext {
    fn set_transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
        if let Err(err) = self.ctx.set_transform(a, b, c, d, e, f) {
            tracing::warn!("setTransform failed: {:?}", err);
        }
    }

    fn set_fill_style(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.fill_rect(x, y, width, height);
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64, anticlockwise: bool) {
        if let Err(err) = self
            .ctx
            .arc_with_anticlockwise(x, y, radius, start, end, anticlockwise)
        {
            // Negative radius.
            tracing::warn!("arc failed: {:?}", err);
        }
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }
}
