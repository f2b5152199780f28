use std::cell::RefCell;
use std::rc::Rc;
use tuido::todo::{Task, TodoEvent, TodoList};

fn recorded(todo: &mut TodoList) -> Rc<RefCell<Vec<TodoEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    todo.subscribe(move |event: &TodoEvent| sink.borrow_mut().push(event.clone()));
    events
}

#[test]
fn test_mutations_emit_events() {
    let mut todo = TodoList::new(vec![Task::new("a")]);
    let events = recorded(&mut todo);

    todo.add("b").unwrap();
    todo.toggle_complete(0).unwrap();
    todo.begin_edit(1).unwrap();
    todo.save_edit("c").unwrap();
    todo.delete(0).unwrap();

    assert_eq!(
        *events.borrow(),
        vec![
            TodoEvent::TaskAdded {
                index: 1,
                title: "b".to_string()
            },
            TodoEvent::TaskToggled {
                index: 0,
                completed: true
            },
            TodoEvent::EditBegun {
                index: 1,
                title: "b".to_string()
            },
            TodoEvent::EditSaved {
                index: 1,
                title: "c".to_string()
            },
            TodoEvent::TaskDeleted {
                index: 0,
                task: Task {
                    title: "a".to_string(),
                    completed: true
                }
            },
        ]
    );
}

#[test]
fn test_rejection_emits_reason_then_hint() {
    let mut todo = TodoList::new(vec![Task::new("a")]);
    let events = recorded(&mut todo);

    todo.begin_edit(0).unwrap();
    events.borrow_mut().clear();
    let _ = todo.delete(0);

    let events = events.borrow();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], TodoEvent::Rejected { operation: "delete", .. }));
    assert_eq!(
        events[1],
        TodoEvent::HintChanged {
            message: "Cannot delete while editing a task.".to_string()
        }
    );
}

#[test]
fn test_redraw_requested_after_mutation_only() {
    let mut todo = TodoList::new(vec![Task::new("a")]);
    assert!(todo.take_redraw_request());
    assert!(!todo.take_redraw_request());

    let _ = todo.add("");
    assert!(!todo.take_redraw_request());

    todo.add("b").unwrap();
    assert!(todo.take_redraw_request());
}
