use gamelib_events::{Eventer, HandlerId};
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::codes::{self, CONTROL, SHIFT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
}

/// Payload of every key and control event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub modifiers: Modifiers,
    pub key_code: u32,
    /// First name the key resolved to, if the code is known.
    pub name: Option<String>,
}

type Names = SmallVec<[String; 4]>;

/// Keyboard state machine.
///
/// Feed it raw key codes with [`Keys::key_down`] / [`Keys::key_up`] and
/// listen with [`Keys::on`]. Event names:
///
/// - `key-<name>` and `key-<name>-down` on press, `key-<name>-up` on release
/// - `control-<control>`, `control-<control>-down`, `control-<control>-up`
///   for keys mapped through the control set
///
/// Shifted names (`key-colon`, `key-A`) only fire while shift is held;
/// unshifted names (`key-semicolon`, `key-a`) fire either way. Holding a key
/// does not repeat its press events.
#[derive(Debug, Default)]
pub struct Keys {
    events: Eventer<KeyEvent>,
    down: FxHashSet<u32>,
    control_set: FxHashMap<String, String>,
}

impl Keys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<F>(&mut self, event: impl Into<String>, callback: F) -> HandlerId
    where
        F: FnMut(&KeyEvent) + 'static,
    {
        self.events.on(event, callback)
    }

    pub fn remove_handler(&mut self, id: HandlerId) -> bool {
        self.events.remove_handler(id)
    }

    /// Replaces the key-name to control-name mapping.
    pub fn set_control_set<I, K, V>(&mut self, controls: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.control_set = controls
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
    }

    pub fn is_down(&self, code: u32) -> bool {
        self.down.contains(&code)
    }

    pub fn modifiers(&self) -> Modifiers {
        Modifiers {
            shift: self.is_down(SHIFT),
            control: self.is_down(CONTROL),
        }
    }

    /// Handles a press. Returns false for auto-repeat of a key already down.
    pub fn key_down(&mut self, code: u32) -> bool {
        if !self.down.insert(code) {
            return false;
        }
        let (keys, controls, event) = self.resolve(code);
        tracing::trace!("Key down {} -> {:?}", code, keys);

        for key in &keys {
            self.events.trigger(&format!("key-{key}-down"), &event);
            self.events.trigger(&format!("key-{key}"), &event);
        }
        for control in &controls {
            self.events.trigger(&format!("control-{control}-down"), &event);
            self.events.trigger(&format!("control-{control}"), &event);
        }
        true
    }

    /// Handles a release. Returns false if the key was not down.
    pub fn key_up(&mut self, code: u32) -> bool {
        if !self.down.remove(&code) {
            return false;
        }
        let (keys, controls, event) = self.resolve(code);
        tracing::trace!("Key up {} -> {:?}", code, keys);

        for key in &keys {
            self.events.trigger(&format!("key-{key}-up"), &event);
        }
        for control in &controls {
            self.events.trigger(&format!("control-{control}-up"), &event);
        }
        true
    }

    /// Forgets every held key without firing release events, e.g. when the
    /// window loses focus.
    pub fn release_all(&mut self) {
        self.down.clear();
    }

    fn resolve(&self, code: u32) -> (Names, Names, KeyEvent) {
        let modifiers = self.modifiers();
        let keys = key_names(code, modifiers.shift);

        let mut controls = Names::new();
        for key in &keys {
            if let Some(control) = self.control_set.get(key) {
                if !controls.contains(control) {
                    controls.push(control.clone());
                }
            }
        }

        let event = KeyEvent {
            modifiers,
            key_code: code,
            name: keys.first().cloned(),
        };
        (keys, controls, event)
    }
}

/// All names `code` goes by, shifted names first. Duplicates are dropped.
pub fn key_names(code: u32, shift: bool) -> SmallVec<[String; 4]> {
    let mut names = Names::new();
    let mut push = |name: String| {
        if !names.contains(&name) {
            names.push(name);
        }
    };

    if shift {
        if codes::is_letter(code) {
            push(char_name(code, true));
        } else {
            let shifted = codes::shift_key_names(code);
            let table = if shifted.is_empty() {
                codes::key_names(code)
            } else {
                shifted
            };
            table.iter().for_each(|n| push((*n).to_string()));
        }
    }

    if codes::is_letter(code) || codes::is_digit(code) {
        push(char_name(code, false));
    } else {
        codes::key_names(code)
            .iter()
            .for_each(|n| push((*n).to_string()));
    }

    names
}

fn char_name(code: u32, upper: bool) -> String {
    let c = char::from_u32(code).unwrap_or_default();
    if upper {
        c.to_ascii_uppercase().to_string()
    } else {
        c.to_ascii_lowercase().to_string()
    }
}
