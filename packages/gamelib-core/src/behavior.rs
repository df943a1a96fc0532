use std::any::Any;

use gamelib_math::{DrawContext, Transform};
use gamelib_timer::Timer;

use crate::positionable::Positionable;
use crate::scene::{NodeId, Scene};

/// Downcasting support for boxed behaviors.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Per-node hooks run by the scene.
///
/// `update` runs after the node's children have been updated and its
/// deferred removals applied. `draw` replaces the node's default drawing;
/// implementations that still want their children drawn call
/// [`DrawCx::draw_children`] and draw themselves in the frame it returns.
pub trait Behavior: AsAny + 'static {
    fn update(&mut self, _cx: &mut UpdateCx<'_>, _dt: f64) {}

    fn draw(&self, cx: &DrawCx<'_>, ctx: &mut dyn DrawContext, transform: &Transform, debug: bool) {
        cx.draw_children(ctx, transform, debug);
    }
}

/// Mutable access to the scene for the node being updated.
pub struct UpdateCx<'a> {
    scene: &'a mut Scene,
    id: NodeId,
}

impl<'a> UpdateCx<'a> {
    pub(crate) fn new(scene: &'a mut Scene, id: NodeId) -> Self {
        Self { scene, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn scene(&mut self) -> &mut Scene {
        self.scene
    }

    pub fn body(&mut self) -> Option<&mut Positionable> {
        self.scene.body_mut(self.id).ok()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.scene.parent(self.id)
    }

    /// Detaches this node from its parent. Safe mid-update: the parent is
    /// still walking its children, so the removal is queued.
    pub fn remove_self(&mut self) {
        if let Some(parent) = self.parent() {
            self.scene.remove_child(parent, self.id);
        }
    }

    pub fn despawn_self(&mut self) -> bool {
        self.scene.despawn(self.id)
    }
}

/// Read-only view of the scene for the node being drawn.
pub struct DrawCx<'a> {
    scene: &'a Scene,
    id: NodeId,
}

impl<'a> DrawCx<'a> {
    pub(crate) fn new(scene: &'a Scene, id: NodeId) -> Self {
        Self { scene, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn scene(&self) -> &'a Scene {
        self.scene
    }

    pub fn body(&self) -> Option<&'a Positionable> {
        self.scene.body(self.id).ok()
    }

    /// See [`Scene::draw_children`].
    pub fn draw_children(
        &self,
        ctx: &mut dyn DrawContext,
        transform: &Transform,
        debug: bool,
    ) -> Transform {
        self.scene.draw_children(self.id, ctx, transform, debug)
    }
}

/// A timer hung in the tree advances with the frame.
impl Behavior for Timer {
    fn update(&mut self, _cx: &mut UpdateCx<'_>, dt: f64) {
        Timer::update(self, dt);
    }
}
