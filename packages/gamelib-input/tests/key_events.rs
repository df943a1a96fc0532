use gamelib_input::codes::{CONTROL, SHIFT};
use gamelib_input::keys::key_names;
use gamelib_input::{KeyEvent, Keys};
use std::cell::RefCell;
use std::rc::Rc;

const KEY_A: u32 = 65;
const KEY_1: u32 = 49;
const SEMICOLON: u32 = 186;

fn record(keys: &mut Keys, log: &Rc<RefCell<Vec<String>>>, events: &[&str]) {
    for &event in events {
        let log = log.clone();
        let name = event.to_string();
        keys.on(event, move |_: &KeyEvent| log.borrow_mut().push(name.clone()));
    }
}

#[test]
fn test_press_fires_down_then_plain_event() {
    let mut keys = Keys::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    record(&mut keys, &log, &["key-a", "key-a-down", "key-a-up"]);

    assert!(keys.key_down(KEY_A));
    assert_eq!(*log.borrow(), vec!["key-a-down", "key-a"]);

    assert!(keys.key_up(KEY_A));
    assert_eq!(*log.borrow(), vec!["key-a-down", "key-a", "key-a-up"]);
}

#[test]
fn test_auto_repeat_is_ignored() {
    let mut keys = Keys::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    record(&mut keys, &log, &["key-space"]);

    assert!(keys.key_down(32));
    assert!(!keys.key_down(32));
    assert_eq!(log.borrow().len(), 1);

    // Releasing a key that is not down does nothing.
    assert!(keys.key_up(32));
    assert!(!keys.key_up(32));
}

#[test]
fn test_shifted_names_need_shift() {
    let mut keys = Keys::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    record(&mut keys, &log, &["key-colon", "key-semicolon", "key-A", "key-a"]);

    keys.key_down(SEMICOLON);
    keys.key_up(SEMICOLON);
    assert_eq!(*log.borrow(), vec!["key-semicolon"]);
    log.borrow_mut().clear();

    keys.key_down(SHIFT);
    keys.key_down(SEMICOLON);
    keys.key_down(KEY_A);
    assert_eq!(
        *log.borrow(),
        vec!["key-colon", "key-semicolon", "key-A", "key-a"]
    );
}

#[test]
fn test_event_payload() {
    let mut keys = Keys::new();
    let seen = Rc::new(RefCell::new(None));
    {
        let seen = seen.clone();
        keys.on("key-1", move |e: &KeyEvent| *seen.borrow_mut() = Some(e.clone()));
    }

    keys.key_down(CONTROL);
    keys.key_down(SHIFT);
    keys.key_down(KEY_1);

    let event = seen.borrow().clone().unwrap();
    assert_eq!(event.key_code, KEY_1);
    assert!(event.modifiers.shift);
    assert!(event.modifiers.control);
    assert_eq!(event.name.as_deref(), Some("!"));
}

#[test]
fn test_control_set_maps_keys_to_controls() {
    let mut keys = Keys::new();
    keys.set_control_set([("a", "hello"), ("left", "move-left")]);

    let log = Rc::new(RefCell::new(Vec::new()));
    record(
        &mut keys,
        &log,
        &["control-hello", "control-hello-down", "control-hello-up", "control-move-left"],
    );

    keys.key_down(KEY_A);
    keys.key_up(KEY_A);
    keys.key_down(37);

    assert_eq!(
        *log.borrow(),
        vec!["control-hello-down", "control-hello", "control-hello-up", "control-move-left"]
    );
}

#[test]
fn test_no_controls_before_control_set() {
    let mut keys = Keys::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    record(&mut keys, &log, &["control-hello"]);
    keys.key_down(KEY_A);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_key_names() {
    assert_eq!(key_names(KEY_A, false).as_slice(), ["a"]);
    assert_eq!(key_names(KEY_A, true).as_slice(), ["A", "a"]);
    assert_eq!(key_names(48, true).as_slice(), [")", "close-paren", "0"]);
    assert_eq!(key_names(13, false).as_slice(), ["return", "enter"]);
    // Shift does not rename the shift key, and names are not repeated.
    assert_eq!(key_names(SHIFT, true).as_slice(), ["shift"]);
    // Shift with no shifted name falls back to the plain table.
    assert_eq!(key_names(32, true).as_slice(), ["space"]);
    assert!(key_names(0, false).is_empty());
}

#[test]
fn test_release_all() {
    let mut keys = Keys::new();
    keys.key_down(SHIFT);
    keys.key_down(KEY_A);
    keys.release_all();
    assert!(!keys.is_down(KEY_A));
    assert!(!keys.modifiers().shift);
}
