use rustc_hash::FxHashMap;
use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

new_key_type! {
    pub struct HandlerId;
}

struct Handler<D> {
    event: String,
    callback: Box<dyn FnMut(&D)>,
}

/// Registry of callbacks keyed by event name.
///
/// Handlers for one event run in the order they were registered. The data
/// passed to `trigger` is shared by reference with every handler.
pub struct Eventer<D> {
    handlers: SlotMap<HandlerId, Handler<D>>,
    by_event: FxHashMap<String, SmallVec<[HandlerId; 4]>>,
}

impl<D> Default for Eventer<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Eventer<D> {
    pub fn new() -> Self {
        Self {
            handlers: SlotMap::with_key(),
            by_event: FxHashMap::default(),
        }
    }

    /// Registers `callback` for `event`. The returned id removes it again.
    pub fn on<F>(&mut self, event: impl Into<String>, callback: F) -> HandlerId
    where
        F: FnMut(&D) + 'static,
    {
        let event = event.into();
        let id = self.handlers.insert(Handler {
            event: event.clone(),
            callback: Box::new(callback),
        });
        tracing::trace!("Registered handler {:?} for '{}'", id, event);
        self.by_event.entry(event).or_default().push(id);
        id
    }

    /// Calls every handler registered for `event`. Unknown events do nothing.
    pub fn trigger(&mut self, event: &str, data: &D) {
        let Self { handlers, by_event } = self;
        let Some(ids) = by_event.get(event) else {
            return;
        };
        for &id in ids {
            if let Some(handler) = handlers.get_mut(id) {
                (handler.callback)(data);
            }
        }
    }

    /// Removes a handler. Returns false if the id was unknown or already
    /// removed.
    pub fn remove_handler(&mut self, id: HandlerId) -> bool {
        let Some(handler) = self.handlers.remove(id) else {
            return false;
        };
        if let Some(ids) = self.by_event.get_mut(&handler.event) {
            if let Some(pos) = ids.iter().position(|&h| h == id) {
                ids.remove(pos);
            }
            if ids.is_empty() {
                self.by_event.remove(&handler.event);
            }
        }
        true
    }

    pub fn handler_count(&self, event: &str) -> usize {
        self.by_event.get(event).map_or(0, SmallVec::len)
    }

    pub fn has_handlers(&self, event: &str) -> bool {
        self.handler_count(event) > 0
    }

    pub fn clear(&mut self) {
        self.handlers.clear();
        self.by_event.clear();
    }
}

impl<D> std::fmt::Debug for Eventer<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Eventer")
            .field("handlers", &self.handlers.len())
            .field("events", &self.by_event.keys().collect::<Vec<_>>())
            .finish()
    }
}
