use gamelib_timer::Timer;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_after_fires_once() {
    let mut timer = Timer::new();
    let fired = Rc::new(RefCell::new(0));

    let id = {
        let fired = fired.clone();
        timer.after(1.0, "boom", move |_| *fired.borrow_mut() += 1)
    };

    timer.update(0.5);
    assert_eq!(*fired.borrow(), 0);
    assert!(timer.is_active(id));

    timer.update(0.5);
    assert_eq!(*fired.borrow(), 1);
    assert!(!timer.is_active(id));

    timer.update(5.0);
    assert_eq!(*fired.borrow(), 1);
}

#[test]
fn test_every_repeats_and_carries_overshoot() {
    let mut timer = Timer::new();
    let fired = Rc::new(RefCell::new(0));

    let id = {
        let fired = fired.clone();
        timer.every(1.0, "tick", move |_| *fired.borrow_mut() += 1)
    };

    timer.update(1.25);
    assert_eq!(*fired.borrow(), 1);
    assert_eq!(timer.remaining(id), Some(0.75));

    timer.update(0.75);
    assert_eq!(*fired.borrow(), 2);
    assert_eq!(timer.remaining(id), Some(1.0));
}

#[test]
fn test_stop_timer() {
    let mut timer = Timer::new();
    let fired = Rc::new(RefCell::new(false));

    let id = {
        let fired = fired.clone();
        timer.every(0.1, "tick", move |_| *fired.borrow_mut() = true)
    };
    timer.stop_timer(id);
    timer.update(1.0);

    assert!(!*fired.borrow());
    assert_eq!(timer.active_count(), 0);
}

#[test]
fn test_event_carries_timer_id() {
    let mut timer = Timer::new();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let a = timer.add_timer(0.5, "shared", false);
    let b = timer.add_timer(0.5, "shared", false);
    {
        let seen = seen.clone();
        timer.on("shared", move |id| seen.borrow_mut().push(*id));
    }

    timer.update(0.5);

    // Newest timers are visited first.
    assert_eq!(*seen.borrow(), vec![b, a]);
}

#[test]
fn test_timer_without_handlers_still_expires() {
    let mut timer = Timer::new();
    let id = timer.add_timer(0.2, "nobody-listens", false);
    timer.update(0.3);
    assert!(!timer.is_active(id));
}

#[test]
fn test_removed_handler_not_called() {
    let mut timer = Timer::new();
    let fired = Rc::new(RefCell::new(0));
    let handler = {
        let fired = fired.clone();
        timer.on("ping", move |_| *fired.borrow_mut() += 1)
    };
    timer.add_timer(0.1, "ping", true);

    timer.update(0.1);
    assert!(timer.remove_handler(handler));
    timer.update(0.1);

    assert_eq!(*fired.borrow(), 1);
}

#[test]
fn test_add_timer_with_registers_callback() {
    let mut timer = Timer::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    let once = {
        let log = log.clone();
        timer.add_timer_with(0.5, "once", false, move |_| log.borrow_mut().push("once"))
    };
    let again = {
        let log = log.clone();
        timer.add_timer_with(1.0, "again", true, move |_| log.borrow_mut().push("again"))
    };

    timer.update(0.5);
    assert_eq!(*log.borrow(), vec!["once"]);
    assert!(!timer.is_active(once));

    timer.update(0.5);
    timer.update(1.0);
    assert_eq!(*log.borrow(), vec!["once", "again", "again"]);
    assert!(timer.is_active(again));
}
