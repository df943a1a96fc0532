use gamelib_math::{Transform, Vector2};

/// Position and rotation of something placed in its parent's frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Positionable {
    pub position: Vector2,
    /// Radians.
    pub rotation: f64,
}

impl Positionable {
    pub fn new(position: Vector2, rotation: f64) -> Self {
        Self { position, rotation }
    }

    pub fn at(x: f64, y: f64) -> Self {
        Self::new(Vector2::new(x, y), 0.0)
    }

    pub fn move_to(&mut self, position: Vector2) {
        self.position = position;
    }

    pub fn rotate_to(&mut self, rotation: f64) {
        self.rotation = rotation;
    }

    pub fn rotate_by(&mut self, delta: f64) {
        self.rotation += delta;
    }

    /// Derived on every call, never stored.
    pub fn local_transform(&self) -> Transform {
        Transform::new(self.position, self.rotation)
    }
}
