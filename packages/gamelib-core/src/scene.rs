use gamelib_events::{Eventer, HandlerId};
use gamelib_math::{DrawContext, Transform, Vector2};
use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

use crate::behavior::{AsAny, Behavior, DrawCx, UpdateCx};
use crate::error::{Result, SceneError};
use crate::positionable::Positionable;

new_key_type! {
    pub struct NodeId;
}

/// Structural changes, delivered through [`Scene::on`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    Attached { parent: NodeId, child: NodeId },
    Detached { parent: NodeId, child: NodeId },
    Despawned(NodeId),
}

impl SceneEvent {
    pub const ATTACHED: &'static str = "attached";
    pub const DETACHED: &'static str = "detached";
    pub const DESPAWNED: &'static str = "despawned";

    pub fn name(&self) -> &'static str {
        match self {
            SceneEvent::Attached { .. } => Self::ATTACHED,
            SceneEvent::Detached { .. } => Self::DETACHED,
            SceneEvent::Despawned(_) => Self::DESPAWNED,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Detach(NodeId),
    Despawn(NodeId),
}

struct SceneNode {
    body: Positionable,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
    // True only while this node walks its own children.
    is_updating: bool,
    pending: Vec<Pending>,
    behavior: Option<Box<dyn Behavior>>,
}

impl SceneNode {
    fn new(body: Positionable, behavior: Option<Box<dyn Behavior>>) -> Self {
        Self {
            body,
            parent: None,
            children: SmallVec::new(),
            is_updating: false,
            pending: Vec::new(),
            behavior,
        }
    }
}

/// Arena-backed scene graph.
///
/// Every node lives in the arena and is addressed by a [`NodeId`]. A node
/// is attached to at most one parent; the parent's child list is the only
/// ownership edge and `parent` is a plain back-reference. Nodes that are
/// detached stay in the arena until [`Scene::despawn`] releases them.
///
/// Removing a child while its parent is walking its children does not touch
/// the child list. The request is queued on the parent and applied, in
/// request order, right after that walk finishes.
pub struct Scene {
    nodes: SlotMap<NodeId, SceneNode>,
    root: NodeId,
    events: Eventer<SceneEvent>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(SceneNode::new(Positionable::default(), None));
        Self {
            nodes,
            root,
            events: Eventer::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Creates a detached node with no behavior.
    pub fn spawn(&mut self, body: Positionable) -> NodeId {
        self.nodes.insert(SceneNode::new(body, None))
    }

    /// Creates a detached node driven by `behavior`.
    pub fn spawn_with<B: Behavior>(&mut self, body: Positionable, behavior: B) -> NodeId {
        self.nodes
            .insert(SceneNode::new(body, Some(Box::new(behavior))))
    }

    pub fn set_behavior<B: Behavior>(&mut self, id: NodeId, behavior: B) -> Result<()> {
        self.node_mut(id)?.behavior = Some(Box::new(behavior));
        Ok(())
    }

    pub fn behavior<B: Behavior>(&self, id: NodeId) -> Option<&B> {
        self.nodes
            .get(id)?
            .behavior
            .as_deref()?
            .as_any()
            .downcast_ref::<B>()
    }

    pub fn behavior_mut<B: Behavior>(&mut self, id: NodeId) -> Option<&mut B> {
        self.nodes
            .get_mut(id)?
            .behavior
            .as_deref_mut()?
            .as_any_mut()
            .downcast_mut::<B>()
    }

    pub fn body(&self, id: NodeId) -> Result<&Positionable> {
        Ok(&self.node(id)?.body)
    }

    pub fn body_mut(&mut self, id: NodeId) -> Result<&mut Positionable> {
        Ok(&mut self.node_mut(id)?.body)
    }

    pub fn position(&self, id: NodeId) -> Result<Vector2> {
        Ok(self.node(id)?.body.position)
    }

    pub fn rotation(&self, id: NodeId) -> Result<f64> {
        Ok(self.node(id)?.body.rotation)
    }

    pub fn move_to(&mut self, id: NodeId, position: Vector2) -> Result<()> {
        self.node_mut(id)?.body.move_to(position);
        Ok(())
    }

    pub fn rotate_to(&mut self, id: NodeId, rotation: f64) -> Result<()> {
        self.node_mut(id)?.body.rotate_to(rotation);
        Ok(())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id)?.parent
    }

    /// Children in draw/update order. Empty for unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id)
            .map_or(&[][..], |node| node.children.as_slice())
    }

    pub fn is_updating(&self, id: NodeId) -> bool {
        self.nodes.get(id).is_some_and(|node| node.is_updating)
    }

    /// True if `ancestor` is a strict ancestor of `id`.
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = self.parent(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    pub fn on<F>(&mut self, event: &str, callback: F) -> HandlerId
    where
        F: FnMut(&SceneEvent) + 'static,
    {
        self.events.on(event, callback)
    }

    pub fn remove_handler(&mut self, id: HandlerId) -> bool {
        self.events.remove_handler(id)
    }

    /// Appends `child` to `parent`'s children.
    ///
    /// Ignored when `child` already has a parent: moving a node is a
    /// `remove_child` followed by an `add_child`. Also ignored for unknown
    /// ids, for the root, and when the link would close a cycle.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        if child == self.root || child == parent || !self.nodes.contains_key(parent) {
            return;
        }
        match self.nodes.get(child) {
            Some(node) if node.parent.is_none() => {}
            _ => return,
        }
        if self.is_ancestor(child, parent) {
            return;
        }

        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(child);
        }
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = Some(parent);
        }
        tracing::trace!("Attached {:?} to {:?}", child, parent);
        self.emit(SceneEvent::Attached { parent, child });
    }

    /// Detaches `child` from `parent`.
    ///
    /// Immediate unless `parent` is walking its children, in which case the
    /// request is queued and applied once the walk ends. Removing something
    /// that is not a child of `parent` does nothing.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        let Some(node) = self.nodes.get_mut(parent) else {
            return;
        };
        if node.is_updating {
            tracing::trace!("Deferring removal of {:?} from {:?}", child, parent);
            node.pending.push(Pending::Detach(child));
            return;
        }
        self.detach_now(parent, child);
    }

    /// Detaches `id` and frees it and its whole subtree from the arena.
    ///
    /// Deferred like [`Scene::remove_child`] when the parent is mid-update.
    /// Returns false for unknown ids and for the root, which cannot be
    /// despawned.
    pub fn despawn(&mut self, id: NodeId) -> bool {
        if id == self.root {
            tracing::warn!("Refusing to despawn the scene root");
            return false;
        }
        let Some(node) = self.nodes.get(id) else {
            return false;
        };

        if let Some(parent) = node.parent {
            if let Some(parent_node) = self.nodes.get_mut(parent) {
                if parent_node.is_updating {
                    tracing::trace!("Deferring despawn of {:?}", id);
                    parent_node.pending.push(Pending::Despawn(id));
                    return true;
                }
            }
            self.detach_now(parent, id);
        }

        let mut stack = vec![id];
        let mut freed = 0usize;
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.remove(current) {
                stack.extend(node.children);
                freed += 1;
                self.emit(SceneEvent::Despawned(current));
            }
        }
        tracing::debug!("Despawned {:?} ({} nodes freed)", id, freed);
        true
    }

    /// Advances the whole tree by `dt` seconds.
    pub fn update(&mut self, dt: f64) {
        self.update_node(self.root, dt);
    }

    fn update_node(&mut self, id: NodeId, dt: f64) {
        let children = match self.nodes.get_mut(id) {
            Some(node) if node.is_updating => {
                tracing::warn!("Re-entrant update of {:?} ignored", id);
                return;
            }
            Some(node) => {
                node.is_updating = true;
                node.children.clone()
            }
            None => return,
        };

        // Walk the list as it was when the walk began.
        for child in children {
            self.update_node(child, dt);
        }

        let pending = match self.nodes.get_mut(id) {
            Some(node) => {
                node.is_updating = false;
                std::mem::take(&mut node.pending)
            }
            None => return,
        };
        if !pending.is_empty() {
            tracing::debug!("Applying {} deferred removals on {:?}", pending.len(), id);
        }
        for request in pending {
            match request {
                Pending::Detach(child) => self.detach_now(id, child),
                Pending::Despawn(child) => {
                    self.despawn(child);
                }
            }
        }

        self.run_behavior(id, dt);
    }

    fn run_behavior(&mut self, id: NodeId, dt: f64) {
        let Some(mut behavior) = self.nodes.get_mut(id).and_then(|node| node.behavior.take())
        else {
            return;
        };
        behavior.update(&mut UpdateCx::new(self, id), dt);
        if let Some(node) = self.nodes.get_mut(id) {
            // Keep a replacement installed during the update.
            if node.behavior.is_none() {
                node.behavior = Some(behavior);
            }
        }
    }

    fn detach_now(&mut self, parent: NodeId, child: NodeId) {
        let Some(node) = self.nodes.get_mut(parent) else {
            return;
        };
        let Some(index) = node.children.iter().position(|&c| c == child) else {
            return;
        };
        node.children.remove(index);
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = None;
        }
        tracing::trace!("Detached {:?} from {:?}", child, parent);
        self.emit(SceneEvent::Detached { parent, child });
    }

    /// Draws the whole tree. `transform` is normally [`Transform::identity`].
    pub fn draw(&self, ctx: &mut dyn DrawContext, transform: &Transform, debug: bool) {
        self.draw_node(self.root, ctx, transform, debug);
    }

    /// Draws one node: through its behavior if it has one, otherwise just
    /// its children.
    pub fn draw_node(
        &self,
        id: NodeId,
        ctx: &mut dyn DrawContext,
        transform: &Transform,
        debug: bool,
    ) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        match node.behavior.as_deref() {
            Some(behavior) => behavior.draw(&DrawCx::new(self, id), ctx, transform, debug),
            None => {
                self.draw_children(id, ctx, transform, debug);
            }
        }
    }

    /// The generic traversal step.
    ///
    /// Composes `parent_transform ∘ local` and draws every child with it.
    /// Returns that frame with the node's own rotation undone, which is
    /// where shapes draw their primitive.
    pub fn draw_children(
        &self,
        id: NodeId,
        ctx: &mut dyn DrawContext,
        parent_transform: &Transform,
        debug: bool,
    ) -> Transform {
        let Some(node) = self.nodes.get(id) else {
            return parent_transform.clone();
        };
        let transform = parent_transform.transform(&node.body.local_transform());
        for &child in &node.children {
            self.draw_node(child, ctx, &transform, debug);
        }
        transform.rotate(-node.body.rotation)
    }

    pub fn local_transform(&self, id: NodeId) -> Result<Transform> {
        Ok(self.node(id)?.body.local_transform())
    }

    /// Composes local transforms from the root down to `id`. Not cached.
    pub fn global_transform(&self, id: NodeId) -> Result<Transform> {
        let node = self.node(id)?;
        let local = node.body.local_transform();
        match node.parent {
            None => Ok(local),
            Some(parent) => Ok(self.global_transform(parent)?.transform(&local)),
        }
    }

    fn node(&self, id: NodeId) -> Result<&SceneNode> {
        self.nodes.get(id).ok_or(SceneError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut SceneNode> {
        self.nodes.get_mut(id).ok_or(SceneError::UnknownNode(id))
    }

    fn emit(&mut self, event: SceneEvent) {
        self.events.trigger(event.name(), &event);
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("root", &self.root)
            .field("nodes", &self.nodes.len())
            .finish()
    }
}
