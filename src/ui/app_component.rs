use crate::config::Config;
use crate::logger::LogObserver;
use crate::todo::{SystemClock, Task, TodoList};
use crate::ui::components::{MenuComponent, TodoListComponent, WelcomeComponent};
use crate::ui::core::{Action, Component, EventType, Page, Pane};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};
use std::sync::Arc;

/// Top-level component: menu on the left, the selected page on the right
pub struct AppComponent {
    // Component composition
    menu: MenuComponent,
    welcome: WelcomeComponent,
    todo_list: TodoListComponent,

    // Simple UI state
    page: Page,
    pane: Pane,
    menu_width: u16,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config, tasks: Vec<Task>) -> Self {
        let mut todo = TodoList::with_options(tasks, config.todo.options(), Arc::new(SystemClock));
        todo.subscribe(LogObserver);
        log::debug!("to-do list ready with {} tasks (help seeded: {})", todo.len(), todo.seeded_help());

        let page = Page::from_config(&config.ui.start_page).unwrap_or_default();
        let mut app = Self {
            menu: MenuComponent::new(),
            welcome: WelcomeComponent::new(),
            todo_list: TodoListComponent::new(todo),
            page,
            pane: Pane::Menu,
            menu_width: config.ui.menu_width,
            should_quit: false,
        };
        app.menu.select_page(page);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn pane(&self) -> Pane {
        self.pane
    }

    pub fn todo_list(&self) -> &TodoListComponent {
        &self.todo_list
    }

    pub fn todo_list_mut(&mut self) -> &mut TodoListComponent {
        &mut self.todo_list
    }

    /// Handle one event from the loop; returns true when a redraw is needed
    pub fn handle_event(&mut self, event_type: EventType) -> bool {
        match event_type {
            EventType::Key(key) => {
                let action = self.handle_key(key);
                self.update(action);
                true
            }
            EventType::Resize(_, _) => true,
            EventType::Tick => self.todo_list.tick(),
            EventType::Other => false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            log::debug!("Global key: Ctrl+C - quitting application");
            return Action::Quit;
        }
        if key.code == KeyCode::BackTab {
            return Action::FocusPane(Pane::Menu);
        }

        match self.pane {
            Pane::Menu => self.menu.handle_key_events(key),
            Pane::Content => match self.page {
                Page::Welcome => self.welcome.handle_key_events(key),
                Page::Todo => self.todo_list.handle_key_events(key),
            },
        }
    }

    fn focus(&mut self, pane: Pane) {
        self.pane = pane;
        match pane {
            Pane::Menu => {
                self.menu.on_focus();
                self.welcome.on_blur();
                self.todo_list.on_blur();
            }
            Pane::Content => {
                self.menu.on_blur();
                match self.page {
                    Page::Welcome => self.welcome.on_focus(),
                    Page::Todo => self.todo_list.on_focus(),
                }
            }
        }
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.handle_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                log::debug!("quit app");
                self.should_quit = true;
                Action::None
            }
            Action::ShowPage(page) => {
                if self.page == Page::Todo && page != Page::Todo {
                    self.todo_list.reset();
                }
                log::debug!("show page {:?}", page);
                self.page = page;
                self.menu.select_page(page);
                self.focus(Pane::Content);
                Action::None
            }
            Action::FocusPane(pane) => {
                self.focus(pane);
                Action::None
            }
            Action::Redraw | Action::None => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let menu_width = self.menu_width.min(rect.width / 2);
        let [menu_area, content_area] =
            Layout::horizontal([Constraint::Length(menu_width), Constraint::Min(0)]).areas(rect);

        self.menu.render(f, menu_area);
        match self.page {
            Page::Welcome => self.welcome.render(f, content_area),
            Page::Todo => self.todo_list.render(f, content_area),
        }
    }
}
