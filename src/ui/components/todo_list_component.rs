//! To-do page: text entry, hint line and task list.
//!
//! This component is the terminal side of [`TodoList`]. It owns the entry
//! buffer, the list selection and the focus between them, translates
//! crossterm keys into [`TodoKey`]s, and renders whatever state the core
//! exposes. All task logic stays in the core.

use crate::constants::TITLE_TODO_LIST;
use crate::todo::{Focus, KeyContext, Task, TodoKey, TodoList};
use crate::ui::components::entry_field::EntryField;
use crate::ui::core::{Action, Component, Pane};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub struct TodoListComponent {
    pub todo: TodoList,
    pub entry: EntryField,
    pub focus: Focus,
    pub list_state: ListState,
    focused: bool,
}

impl TodoListComponent {
    pub fn new(todo: TodoList) -> Self {
        let mut component = Self {
            todo,
            entry: EntryField::new(),
            focus: Focus::Entry,
            list_state: ListState::default(),
            focused: false,
        };
        component.update_list_state();
        component
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn tasks(&self) -> &[Task] {
        self.todo.tasks()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Advance time-based state; true when a redraw is due
    pub fn tick(&mut self) -> bool {
        self.todo.tick();
        self.todo.take_redraw_request()
    }

    /// Leave edit mode and drop the entry contents
    pub fn reset(&mut self) {
        if self.todo.is_editing() {
            self.todo.reset_edit();
            self.entry.clear();
        }
    }

    fn classify(&self, key: &KeyEvent) -> TodoKey {
        match key.code {
            KeyCode::Enter => TodoKey::Confirm,
            KeyCode::Esc => TodoKey::Cancel,
            KeyCode::Delete => TodoKey::Delete,
            KeyCode::Char(' ') => TodoKey::ToggleComplete,
            _ => TodoKey::Other,
        }
    }

    /// Keep the selection inside the list
    fn update_list_state(&mut self) {
        let len = self.todo.len();
        if len == 0 {
            self.list_state.select(None);
        } else {
            let index = self.list_state.selected().unwrap_or(0).min(len - 1);
            self.list_state.select(Some(index));
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Entry => Focus::List,
            Focus::List => Focus::Entry,
        };
    }

    fn handle_entry_key(&mut self, key: KeyEvent) -> Action {
        let changed = match key.code {
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                self.entry.insert_char(c);
                true
            }
            KeyCode::Backspace => self.entry.backspace(),
            KeyCode::Delete => self.entry.delete(),
            KeyCode::Left => {
                self.entry.move_left();
                false
            }
            KeyCode::Right => {
                self.entry.move_right();
                false
            }
            KeyCode::Home => {
                self.entry.move_home();
                false
            }
            KeyCode::End => {
                self.entry.move_end();
                false
            }
            KeyCode::Down => {
                self.focus = Focus::List;
                false
            }
            KeyCode::Esc => return Action::FocusPane(Pane::Menu),
            _ => return Action::None,
        };

        if changed && self.todo.on_entry_changed(&mut self.entry.value) {
            self.entry.clamp_cursor();
        }
        Action::Redraw
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> Action {
        let len = self.todo.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => match self.list_state.selected() {
                Some(0) | None => self.focus = Focus::Entry,
                Some(index) => self.list_state.select(Some(index - 1)),
            },
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(index) = self.list_state.selected() {
                    if index + 1 < len {
                        self.list_state.select(Some(index + 1));
                    }
                }
            }
            KeyCode::Home => {
                if len > 0 {
                    self.list_state.select(Some(0));
                }
            }
            KeyCode::End => {
                if len > 0 {
                    self.list_state.select(Some(len - 1));
                }
            }
            KeyCode::Esc => return Action::FocusPane(Pane::Menu),
            _ => return Action::None,
        }
        Action::Redraw
    }

    fn task_item<'a>(task: &'a Task) -> ListItem<'a> {
        let (marker, color) = if task.completed {
            ("[x]", Color::Gray)
        } else {
            ("[ ]", Color::White)
        };

        let mut title_style = Style::default().fg(color);
        if task.completed {
            title_style = title_style.add_modifier(Modifier::CROSSED_OUT);
        }

        ListItem::new(Line::from(vec![
            Span::styled(marker, Style::default().fg(color)),
            Span::raw(" "),
            Span::styled(task.title.as_str(), title_style),
        ]))
    }
}

impl Component for TodoListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Tab {
            self.toggle_focus();
            return Action::Redraw;
        }

        let todo_key = self.classify(&key);
        let consumed = self.todo.handle_key(
            todo_key,
            KeyContext {
                focus: self.focus,
                selected: self.list_state.selected(),
                entry: &mut self.entry.value,
            },
        );

        if consumed {
            // The router may have cleared or seeded the entry
            self.entry.move_end();
            if self.todo.is_editing() {
                self.focus = Focus::Entry;
            }
            self.update_list_state();
            return Action::Redraw;
        }

        match self.focus {
            Focus::Entry => self.handle_entry_key(key),
            Focus::List => self.handle_list_key(key),
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_color = if self.focused { Color::Cyan } else { Color::White };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(TITLE_TODO_LIST)
            .title_alignment(ratatui::layout::Alignment::Center);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let [entry_area, hint_area, list_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)]).areas(inner);

        // Entry line
        let label = self.todo.input_label();
        let entry = Paragraph::new(Line::from(vec![
            Span::styled(label, Style::default().fg(Color::Yellow)),
            Span::raw(self.entry.value.as_str()),
        ]));
        f.render_widget(entry, entry_area);

        if self.focused && self.focus == Focus::Entry {
            let x = entry_area.x + label.chars().count() as u16 + self.entry.cursor as u16;
            f.set_cursor_position(Position::new(x.min(entry_area.right().saturating_sub(1)), entry_area.y));
        }

        // Hint line
        let hint = Paragraph::new(self.todo.hint()).style(Style::default().fg(Color::Red));
        f.render_widget(hint, hint_area);

        // Task list
        let items: Vec<ListItem> = self.todo.tasks().iter().map(Self::task_item).collect();
        let highlight = if self.focused && self.focus == Focus::List {
            Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let list = List::new(items).highlight_style(highlight);
        f.render_stateful_widget(list, list_area, &mut self.list_state);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
