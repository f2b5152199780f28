use std::sync::Arc;
use std::time::Duration;
use tuido::todo::{HintNotifier, ManualClock, Task, TodoList, TodoOptions};

fn notifier() -> (HintNotifier, ManualClock) {
    let clock = ManualClock::new();
    (HintNotifier::new(Arc::new(clock.clone()), Duration::from_secs(3)), clock)
}

#[test]
fn test_hint_expires_after_duration() {
    let (mut hint, clock) = notifier();
    hint.set("careful");

    clock.advance(Duration::from_millis(2999));
    assert!(!hint.tick());
    assert_eq!(hint.message(), "careful");

    clock.advance(Duration::from_millis(1));
    assert!(hint.tick());
    assert_eq!(hint.message(), "");
    assert!(!hint.tick());
}

#[test]
fn test_newer_hint_survives_older_deadline() {
    let (mut hint, clock) = notifier();
    hint.set("A");

    clock.advance(Duration::from_secs(2));
    hint.set("B");

    // A's original deadline passes
    clock.advance(Duration::from_secs(2));
    assert!(!hint.tick());
    assert_eq!(hint.message(), "B");

    clock.advance(Duration::from_secs(1));
    assert!(hint.tick());
    assert_eq!(hint.message(), "");
}

#[test]
fn test_clear_cancels_timer() {
    let (mut hint, clock) = notifier();
    hint.set("A");
    hint.clear();

    assert_eq!(hint.deadline(), None);
    clock.advance(Duration::from_secs(10));
    assert!(!hint.tick());
}

#[test]
fn test_list_tick_requests_redraw_on_expiry() {
    let clock = ManualClock::new();
    let options = TodoOptions {
        hint_duration: Duration::from_secs(3),
        ..TodoOptions::default()
    };
    let mut todo = TodoList::with_options(vec![Task::new("a")], options, Arc::new(clock.clone()));
    todo.take_redraw_request();

    todo.set_hint("heads up");
    assert!(todo.take_redraw_request());

    clock.advance(Duration::from_secs(3));
    assert!(todo.tick());
    assert_eq!(todo.hint(), "");
    assert!(todo.take_redraw_request());
    assert!(!todo.take_redraw_request());
}
