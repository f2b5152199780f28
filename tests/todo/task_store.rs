use tuido::constants::HELP_TASKS;
use std::sync::Arc;
use tuido::todo::{ManualClock, Task, TodoError, TodoList, TodoOptions};

fn empty_list() -> TodoList {
    let options = TodoOptions {
        seed_help: false,
        ..TodoOptions::default()
    };
    TodoList::with_options(Vec::new(), options, Arc::new(ManualClock::new()))
}

#[test]
fn test_adds_keep_insertion_order() {
    let mut todo = empty_list();
    let titles = ["write report", "call bob", "water plants", "write report"];

    for (i, title) in titles.iter().enumerate() {
        assert_eq!(todo.add(title), Ok(i));
    }

    assert_eq!(todo.len(), titles.len());
    let stored: Vec<&str> = todo.tasks().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(stored, titles);
    assert!(todo.tasks().iter().all(|t| !t.completed));
}

#[test]
fn test_add_empty_is_silent_noop() {
    let mut todo = empty_list();
    todo.add("one").unwrap();

    assert_eq!(todo.add(""), Err(TodoError::EmptyInput));
    assert_eq!(todo.len(), 1);
    assert_eq!(todo.hint(), "");
}

#[test]
fn test_add_rejects_overlong_title() {
    let mut todo = empty_list();
    let result = todo.add(&"x".repeat(81));

    assert_eq!(result, Err(TodoError::LengthExceeded { len: 81, max: 80 }));
    assert!(todo.is_empty());
    assert_eq!(todo.hint(), "Task length should not exceed 80 characters.");
}

#[test]
fn test_add_accepts_exactly_limit() {
    let mut todo = empty_list();
    assert!(todo.add(&"é".repeat(80)).is_ok());
}

#[test]
fn test_toggle_twice_restores_state() {
    let mut todo = TodoList::new(vec![Task::new("a"), Task::new("b")]);

    assert_eq!(todo.toggle_complete(1), Ok(true));
    assert_eq!(todo.toggle_complete(1), Ok(false));
    assert!(!todo.tasks()[1].completed);
}

#[test]
fn test_toggle_out_of_range() {
    let mut todo = TodoList::new(vec![Task::new("a")]);
    assert_eq!(todo.toggle_complete(5), Err(TodoError::InvalidIndex { index: 5, len: 1 }));
    assert!(!todo.hint().is_empty());
}

#[test]
fn test_update_title() {
    let mut todo = TodoList::new(vec![Task::new("a")]);

    assert!(todo.update_title(0, "b").is_ok());
    assert_eq!(todo.tasks()[0].title, "b");
    assert_eq!(todo.update_title(0, ""), Err(TodoError::EmptyInput));
    assert_eq!(todo.update_title(3, "c"), Err(TodoError::InvalidIndex { index: 3, len: 1 }));
    assert_eq!(todo.tasks()[0].title, "b");
}

#[test]
fn test_delete_empty_list_hint() {
    let mut todo = empty_list();
    assert!(todo.delete(0).is_err());
    assert_eq!(todo.hint(), "Task list is empty. Add a task first.");
}

#[test]
fn test_empty_store_is_seeded_with_help() {
    let todo = TodoList::new(Vec::new());

    assert!(todo.seeded_help());
    assert_eq!(todo.len(), 6);
    for (task, expected) in todo.tasks().iter().zip(HELP_TASKS) {
        assert_eq!(task.title, expected);
        assert!(!task.completed);
    }
}

#[test]
fn test_non_empty_store_is_not_seeded() {
    let todo = TodoList::new(vec![Task::new("mine")]);
    assert!(!todo.seeded_help());
    assert_eq!(todo.len(), 1);
}
