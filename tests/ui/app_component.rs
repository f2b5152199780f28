use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tuido::config::Config;
use tuido::todo::Task;
use tuido::ui::core::{EventType, Page, Pane};
use tuido::ui::AppComponent;

fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_starts_on_configured_page() {
    let mut config = Config::default();
    config.ui.start_page = "todo".to_string();
    let app = AppComponent::new(&config, Vec::new());

    assert_eq!(app.page(), Page::Todo);
    assert_eq!(app.pane(), Pane::Menu);
    assert_eq!(app.todo_list().tasks().len(), 6);
}

#[test]
fn test_menu_shortcut_opens_todo_page() {
    let mut app = AppComponent::new(&Config::default(), vec![Task::new("a")]);
    assert_eq!(app.page(), Page::Welcome);

    assert!(app.handle_event(key(KeyCode::Char('t'))));
    assert_eq!(app.page(), Page::Todo);
    assert_eq!(app.pane(), Pane::Content);
    assert!(app.todo_list().is_focused());
}

#[test]
fn test_leaving_todo_page_resets_edit() {
    let mut app = AppComponent::new(&Config::default(), vec![Task::new("a")]);
    app.handle_event(key(KeyCode::Char('t')));
    app.handle_event(key(KeyCode::Tab));
    app.handle_event(key(KeyCode::Enter));
    assert!(app.todo_list().todo.is_editing());

    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)));
    assert_eq!(app.pane(), Pane::Menu);
    app.handle_event(key(KeyCode::Char('w')));

    assert_eq!(app.page(), Page::Welcome);
    assert!(!app.todo_list().todo.is_editing());
    assert!(app.todo_list().entry.is_empty());
}

#[test]
fn test_quit_from_menu_and_ctrl_c() {
    let mut app = AppComponent::new(&Config::default(), Vec::new());
    app.handle_event(key(KeyCode::Char('q')));
    assert!(app.should_quit());

    let mut app = AppComponent::new(&Config::default(), Vec::new());
    app.handle_event(key(KeyCode::Char('t')));
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(app.should_quit());
}

#[test]
fn test_q_types_into_entry_when_content_focused() {
    let mut app = AppComponent::new(&Config::default(), Vec::new());
    app.handle_event(key(KeyCode::Char('t')));
    app.handle_event(key(KeyCode::Char('q')));

    assert!(!app.should_quit());
    assert_eq!(app.todo_list().entry.value, "q");
}
