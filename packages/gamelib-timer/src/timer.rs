use gamelib_events::{Eventer, HandlerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Countdown {
    id: TimerId,
    remaining: f64,
    timeout: f64,
    name: String,
    repeat: bool,
}

/// Timers advanced by the frame loop rather than by a clock.
///
/// Nothing happens until [`Timer::update`] is called, so pausing the game
/// pauses every timer with it. Expiry is only noticed at the end of the
/// interval that crosses it; timeouts much shorter than a frame fire at
/// most once per update.
///
/// When a timer expires its name is triggered as an event, carrying the
/// timer's id.
#[derive(Debug, Default)]
pub struct Timer {
    events: Eventer<TimerId>,
    timers: Vec<Countdown>,
    next_id: u64,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a timer that fires `name` after `timeout` seconds, and again
    /// every `timeout` seconds if `repeat` is set.
    pub fn add_timer(&mut self, timeout: f64, name: impl Into<String>, repeat: bool) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let name = name.into();
        tracing::trace!("Timer {:?} '{}' armed for {}s (repeat: {})", id, name, timeout, repeat);
        self.timers.push(Countdown {
            id,
            remaining: timeout,
            timeout,
            name,
            repeat,
        });
        id
    }

    /// Like [`Timer::add_timer`], also registering `callback` on `name`.
    pub fn add_timer_with<F>(
        &mut self,
        timeout: f64,
        name: impl Into<String>,
        repeat: bool,
        callback: F,
    ) -> TimerId
    where
        F: FnMut(&TimerId) + 'static,
    {
        let name = name.into();
        self.events.on(name.clone(), callback);
        self.add_timer(timeout, name, repeat)
    }

    /// One-shot timer with a callback registered on its event name.
    pub fn after<F>(&mut self, timeout: f64, name: impl Into<String>, callback: F) -> TimerId
    where
        F: FnMut(&TimerId) + 'static,
    {
        self.add_timer_with(timeout, name, false, callback)
    }

    /// Repeating timer with a callback registered on its event name.
    pub fn every<F>(&mut self, timeout: f64, name: impl Into<String>, callback: F) -> TimerId
    where
        F: FnMut(&TimerId) + 'static,
    {
        self.add_timer_with(timeout, name, true, callback)
    }

    pub fn on<F>(&mut self, name: impl Into<String>, callback: F) -> HandlerId
    where
        F: FnMut(&TimerId) + 'static,
    {
        self.events.on(name, callback)
    }

    pub fn remove_handler(&mut self, id: HandlerId) -> bool {
        self.events.remove_handler(id)
    }

    pub fn stop_timer(&mut self, id: TimerId) {
        self.timers.retain(|t| t.id != id);
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    pub fn active_count(&self) -> usize {
        self.timers.len()
    }

    /// Seconds left before `id` fires, if it is still armed.
    pub fn remaining(&self, id: TimerId) -> Option<f64> {
        self.timers.iter().find(|t| t.id == id).map(|t| t.remaining)
    }

    /// Advances every timer by `dt` seconds, newest first.
    pub fn update(&mut self, dt: f64) {
        let mut i = self.timers.len();
        while i > 0 {
            i -= 1;
            let timer = &mut self.timers[i];
            timer.remaining -= dt;
            if timer.remaining > 0.0 {
                continue;
            }

            let id = timer.id;
            tracing::trace!("Timer {:?} '{}' fired", id, timer.name);
            self.events.trigger(&timer.name, &id);

            if timer.repeat {
                // Carry the overshoot into the next period.
                timer.remaining += timer.timeout;
            } else {
                self.timers.remove(i);
            }
        }
    }
}
