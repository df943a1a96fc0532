//! Built-in drawable behaviors.

use std::f64::consts::TAU;

use gamelib_math::{DrawContext, Transform};

use crate::behavior::{Behavior, DrawCx, UpdateCx};

/// Fill color of the origin marker drawn in debug mode.
pub const DEBUG_COLOR: &str = "#f0f";
const DEBUG_MARKER: f64 = 4.0;

/// Axis-aligned rectangle centered on the node.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
    pub color: String,
}

impl Default for Rectangle {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            color: "#fff".to_string(),
        }
    }
}

impl Rectangle {
    pub fn new(width: f64, height: f64, color: impl Into<String>) -> Self {
        Self {
            width,
            height,
            color: color.into(),
        }
    }
}

impl Behavior for Rectangle {
    fn draw(&self, cx: &DrawCx<'_>, ctx: &mut dyn DrawContext, transform: &Transform, debug: bool) {
        let frame = cx.draw_children(ctx, transform, debug);
        frame.apply(ctx);
        ctx.set_fill_style(&self.color);
        ctx.fill_rect(-self.width / 2.0, -self.height / 2.0, self.width, self.height);
        if debug {
            draw_origin(ctx);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub radius: f64,
    pub color: String,
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            radius: 0.0,
            color: "#fff".to_string(),
        }
    }
}

impl Circle {
    pub fn new(radius: f64, color: impl Into<String>) -> Self {
        Self {
            radius,
            color: color.into(),
        }
    }
}

impl Behavior for Circle {
    fn draw(&self, cx: &DrawCx<'_>, ctx: &mut dyn DrawContext, transform: &Transform, debug: bool) {
        let frame = cx.draw_children(ctx, transform, debug);
        frame.apply(ctx);
        ctx.set_fill_style(&self.color);
        ctx.begin_path();
        ctx.arc(0.0, 0.0, self.radius, 0.0, TAU, true);
        ctx.fill();
        if debug {
            draw_origin(ctx);
        }
    }
}

/// Wraps another behavior and turns the node at `speed` radians per second.
///
/// The wrapped behavior updates first, then the rotation is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Spinning<B> {
    pub inner: B,
    pub speed: f64,
    pub enabled: bool,
}

impl<B: Behavior> Spinning<B> {
    pub fn new(inner: B, speed: f64) -> Self {
        Self {
            inner,
            speed,
            enabled: true,
        }
    }
}

impl<B: Behavior> Behavior for Spinning<B> {
    fn update(&mut self, cx: &mut UpdateCx<'_>, dt: f64) {
        self.inner.update(cx, dt);
        if !self.enabled {
            return;
        }
        if let Some(body) = cx.body() {
            body.rotate_by(self.speed * dt);
        }
    }

    fn draw(&self, cx: &DrawCx<'_>, ctx: &mut dyn DrawContext, transform: &Transform, debug: bool) {
        self.inner.draw(cx, ctx, transform, debug);
    }
}

fn draw_origin(ctx: &mut dyn DrawContext) {
    ctx.set_fill_style(DEBUG_COLOR);
    ctx.fill_rect(
        -DEBUG_MARKER / 2.0,
        -DEBUG_MARKER / 2.0,
        DEBUG_MARKER,
        DEBUG_MARKER,
    );
}
