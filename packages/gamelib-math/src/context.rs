/// The rendering boundary: the handful of 2D canvas calls the library makes.
///
/// Browser builds implement this over `CanvasRenderingContext2d`; tests and
/// headless runs use [`CommandRecorder`].
pub trait DrawContext {
    /// Replaces the current transform with `[a c e; b d f; 0 0 1]` in
    /// canvas argument order.
    fn set_transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64);

    fn set_fill_style(&mut self, color: &str);

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn begin_path(&mut self);

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64, anticlockwise: bool);

    fn fill(&mut self);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SetTransform([f64; 6]),
    SetFillStyle(String),
    FillRect { x: f64, y: f64, width: f64, height: f64 },
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
    BeginPath,
    Arc {
        x: f64,
        y: f64,
        radius: f64,
        start: f64,
        end: f64,
        anticlockwise: bool,
    },
    Fill,
}

/// A [`DrawContext`] that only remembers what it was asked to do.
#[derive(Debug, Default, Clone)]
pub struct CommandRecorder {
    pub commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn last_transform(&self) -> Option<[f64; 6]> {
        self.commands.iter().rev().find_map(|cmd| match cmd {
            DrawCommand::SetTransform(coeffs) => Some(*coeffs),
            _ => None,
        })
    }
}

impl DrawContext for CommandRecorder {
    fn set_transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
        self.commands.push(DrawCommand::SetTransform([a, b, c, d, e, f]));
    }

    fn set_fill_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::SetFillStyle(color.to_string()));
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::FillRect { x, y, width, height });
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::ClearRect { x, y, width, height });
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64, anticlockwise: bool) {
        self.commands.push(DrawCommand::Arc {
            x,
            y,
            radius,
            start,
            end,
            anticlockwise,
        });
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }
}
