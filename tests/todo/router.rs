use tuido::constants::HELP_TASKS;
use tuido::todo::{EditSession, Focus, KeyContext, Task, TodoKey, TodoList};

fn press(todo: &mut TodoList, key: TodoKey, focus: Focus, selected: Option<usize>, entry: &mut String) -> bool {
    todo.handle_key(key, KeyContext { focus, selected, entry })
}

#[test]
fn test_confirm_in_entry_adds_and_clears() {
    let mut todo = TodoList::new(vec![Task::new("a")]);
    let mut entry = "buy milk".to_string();

    assert!(press(&mut todo, TodoKey::Confirm, Focus::Entry, None, &mut entry));
    assert_eq!(todo.len(), 2);
    assert_eq!(todo.tasks()[1].title, "buy milk");
    assert!(entry.is_empty());
}

#[test]
fn test_confirm_with_empty_entry_does_nothing() {
    let mut todo = TodoList::new(vec![Task::new("a")]);
    let mut entry = String::new();

    assert!(press(&mut todo, TodoKey::Confirm, Focus::Entry, None, &mut entry));
    assert_eq!(todo.len(), 1);
}

#[test]
fn test_confirm_on_list_begins_edit_and_seeds_entry() {
    let mut todo = TodoList::new(vec![Task::new("a"), Task::new("b")]);
    let mut entry = String::new();

    assert!(press(&mut todo, TodoKey::Confirm, Focus::List, Some(1), &mut entry));
    assert_eq!(todo.session(), EditSession::Editing(1));
    assert_eq!(entry, "b");
}

#[test]
fn test_confirm_while_editing_saves() {
    let mut todo = TodoList::new(vec![Task::new("a"), Task::new("b")]);
    let mut entry = String::new();
    press(&mut todo, TodoKey::Confirm, Focus::List, Some(0), &mut entry);

    entry = "renamed".to_string();
    assert!(press(&mut todo, TodoKey::Confirm, Focus::Entry, None, &mut entry));
    assert_eq!(todo.session(), EditSession::Idle);
    assert_eq!(todo.tasks()[0].title, "renamed");
    assert_eq!(todo.len(), 2);
    assert!(entry.is_empty());
}

#[test]
fn test_confirm_empty_while_editing_stays_in_edit() {
    let mut todo = TodoList::new(vec![Task::new("a")]);
    let mut entry = String::new();
    press(&mut todo, TodoKey::Confirm, Focus::List, Some(0), &mut entry);

    entry.clear();
    press(&mut todo, TodoKey::Confirm, Focus::Entry, None, &mut entry);
    assert_eq!(todo.session(), EditSession::Editing(0));
    assert_eq!(todo.tasks()[0].title, "a");
}

#[test]
fn test_cancel_only_consumed_while_editing() {
    let mut todo = TodoList::new(vec![Task::new("a")]);
    let mut entry = String::new();

    assert!(!press(&mut todo, TodoKey::Cancel, Focus::List, Some(0), &mut entry));

    press(&mut todo, TodoKey::Confirm, Focus::List, Some(0), &mut entry);
    entry.push_str(" changed");
    assert!(press(&mut todo, TodoKey::Cancel, Focus::Entry, None, &mut entry));
    assert_eq!(todo.session(), EditSession::Idle);
    assert_eq!(todo.tasks()[0].title, "a");
    assert!(entry.is_empty());
}

#[test]
fn test_delete_while_editing_is_rejected_with_hint() {
    let mut todo = TodoList::new(vec![Task::new("a"), Task::new("b")]);
    let mut entry = String::new();
    press(&mut todo, TodoKey::Confirm, Focus::List, Some(0), &mut entry);

    assert!(press(&mut todo, TodoKey::Delete, Focus::List, Some(1), &mut entry));
    assert_eq!(todo.len(), 2);
    assert_eq!(todo.hint(), "Cannot delete while editing a task.");
}

#[test]
fn test_delete_on_empty_list_hint() {
    let mut todo = TodoList::new(vec![Task::new("a")]);
    let mut entry = String::new();
    press(&mut todo, TodoKey::Delete, Focus::List, Some(0), &mut entry);
    assert!(todo.is_empty());

    assert!(press(&mut todo, TodoKey::Delete, Focus::List, None, &mut entry));
    assert_eq!(todo.hint(), "Task list is empty. Add a task first.");
}

#[test]
fn test_list_keys_pass_through_from_entry() {
    let mut todo = TodoList::new(vec![Task::new("a")]);
    let mut entry = "typing".to_string();

    assert!(!press(&mut todo, TodoKey::Delete, Focus::Entry, Some(0), &mut entry));
    assert!(!press(&mut todo, TodoKey::ToggleComplete, Focus::Entry, Some(0), &mut entry));
    assert!(!press(&mut todo, TodoKey::Other, Focus::List, Some(0), &mut entry));
    assert_eq!(todo.len(), 1);
    assert!(!todo.tasks()[0].completed);
    assert_eq!(entry, "typing");
}

#[test]
fn test_entry_over_limit_truncates_with_one_hint() {
    let mut todo = TodoList::new(vec![Task::new("a")]);
    let mut hints = 0;
    todo.subscribe(move |event: &tuido::todo::TodoEvent| {
        if let tuido::todo::TodoEvent::HintChanged { message } = event {
            assert_eq!(message, "Task length should not exceed 80 characters.");
            hints += 1;
            assert_eq!(hints, 1);
        }
    });

    let mut entry = "x".repeat(90);
    assert!(todo.on_entry_changed(&mut entry));
    assert_eq!(entry.chars().count(), 80);
    assert_eq!(todo.hint(), "Task length should not exceed 80 characters.");

    assert!(!todo.on_entry_changed(&mut entry));
}

#[test]
fn test_help_scenario() {
    let mut todo = TodoList::new(Vec::new());
    let mut entry = String::new();
    assert_eq!(todo.len(), 6);
    assert!(todo.tasks().iter().all(|t| !t.completed));

    press(&mut todo, TodoKey::ToggleComplete, Focus::List, Some(0), &mut entry);
    assert!(todo.tasks()[0].completed);
    assert!(todo.tasks()[1..].iter().all(|t| !t.completed));

    press(&mut todo, TodoKey::Delete, Focus::List, Some(0), &mut entry);
    assert_eq!(todo.len(), 5);
    assert_eq!(todo.tasks()[0].title, HELP_TASKS[1]);
}
