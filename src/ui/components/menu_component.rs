//! Side menu for switching pages and quitting.

use crate::constants::TITLE_MENU;
use crate::ui::core::{Action, Component, Page, Pane};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

#[derive(Debug, Clone)]
pub struct MenuItem {
    pub title: &'static str,
    pub description: &'static str,
    pub shortcut: char,
    pub action: Action,
}

impl MenuItem {
    pub fn default_items() -> Vec<MenuItem> {
        vec![
            MenuItem {
                title: "Welcome",
                description: "Press to open the welcome page",
                shortcut: 'w',
                action: Action::ShowPage(Page::Welcome),
            },
            MenuItem {
                title: "To-Do List",
                description: "Press to manage your tasks",
                shortcut: 't',
                action: Action::ShowPage(Page::Todo),
            },
            MenuItem {
                title: "Quit",
                description: "Press to exit",
                shortcut: 'q',
                action: Action::Quit,
            },
        ]
    }
}

pub struct MenuComponent {
    pub items: Vec<MenuItem>,
    list_state: ListState,
    focused: bool,
}

impl Default for MenuComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuComponent {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            items: MenuItem::default_items(),
            list_state,
            focused: true,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Highlight the entry that opens `page`
    pub fn select_page(&mut self, page: Page) {
        if let Some(index) = self.items.iter().position(|item| item.action == Action::ShowPage(page)) {
            self.list_state.select(Some(index));
        }
    }

    fn activate(&self, index: usize) -> Action {
        self.items.get(index).map(|item| item.action.clone()).unwrap_or(Action::None)
    }
}

impl Component for MenuComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let len = self.items.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                let index = self.list_state.selected().unwrap_or(0);
                self.list_state.select(Some(if index == 0 { len - 1 } else { index - 1 }));
                Action::Redraw
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let index = self.list_state.selected().unwrap_or(0);
                self.list_state.select(Some((index + 1) % len));
                Action::Redraw
            }
            KeyCode::Enter => self.activate(self.list_state.selected().unwrap_or(0)),
            KeyCode::Right | KeyCode::Tab => Action::FocusPane(Pane::Content),
            KeyCode::Char(c) => match self.items.iter().position(|item| item.shortcut == c) {
                Some(index) => {
                    self.list_state.select(Some(index));
                    self.activate(index)
                }
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let items: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(format!("({}) ", item.shortcut), Style::default().fg(Color::Yellow)),
                        Span::raw(item.title),
                    ]),
                    Line::from(Span::styled(
                        format!("    {}", item.description),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();

        let border_color = if self.focused { Color::Cyan } else { Color::White };
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title(TITLE_MENU),
            )
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
