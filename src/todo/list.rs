//! The to-do list component: task store, edit session and hint line wired to
//! a key router.
//!
//! The component owns no terminal state. A host feeds it classified keys
//! through [`TodoList::handle_key`], renders from the read accessors, and
//! redraws whenever [`TodoList::take_redraw_request`] says so.

use super::error::{StateViolation, TodoError, TodoResult};
use super::events::{TodoEvent, TodoObserver};
use super::hint::{Clock, HintNotifier, SystemClock};
use super::session::EditSession;
use super::task::{truncate_chars, Task, TaskStore};
use crate::constants::{HINT_DURATION, MAX_TITLE_LENGTH};
use std::sync::Arc;
use std::time::Duration;

/// Key classes the router understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoKey {
    Confirm,
    Cancel,
    Delete,
    ToggleComplete,
    Other,
}

/// Which part of the view currently receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Entry,
    List,
}

/// What the host knows at the moment a key arrives
#[derive(Debug)]
pub struct KeyContext<'a> {
    pub focus: Focus,
    pub selected: Option<usize>,
    /// Contents of the host's text entry; the router may rewrite or clear it
    pub entry: &'a mut String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoOptions {
    pub max_title_length: usize,
    pub hint_duration: Duration,
    /// Fill an empty initial list with the tutorial tasks
    pub seed_help: bool,
}

impl Default for TodoOptions {
    fn default() -> Self {
        Self {
            max_title_length: MAX_TITLE_LENGTH,
            hint_duration: HINT_DURATION,
            seed_help: true,
        }
    }
}

pub struct TodoList {
    store: TaskStore,
    session: EditSession,
    hint: HintNotifier,
    observers: Vec<Box<dyn TodoObserver>>,
    redraw_requested: bool,
    seeded_help: bool,
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl TodoList {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self::with_options(tasks, TodoOptions::default(), Arc::new(SystemClock))
    }

    pub fn with_options(tasks: Vec<Task>, options: TodoOptions, clock: Arc<dyn Clock>) -> Self {
        let mut store = TaskStore::with_max_title_length(tasks, options.max_title_length);
        let seeded_help = store.is_empty() && options.seed_help;
        if seeded_help {
            store.seed_help();
        }

        Self {
            store,
            session: EditSession::Idle,
            hint: HintNotifier::new(clock, options.hint_duration),
            observers: Vec::new(),
            redraw_requested: true,
            seeded_help,
        }
    }

    pub fn subscribe(&mut self, observer: impl TodoObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    // Read accessors

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn session(&self) -> EditSession {
        self.session
    }

    pub fn is_editing(&self) -> bool {
        self.session.is_editing()
    }

    pub fn input_label(&self) -> &'static str {
        self.session.label()
    }

    pub fn hint(&self) -> &str {
        self.hint.message()
    }

    pub fn max_title_length(&self) -> usize {
        self.store.max_title_length()
    }

    /// Whether the tutorial tasks were added at construction
    pub fn seeded_help(&self) -> bool {
        self.seeded_help
    }

    /// Returns true once per pending redraw
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    // Task operations

    pub fn add(&mut self, title: &str) -> TodoResult<usize> {
        let result = self.store.add(title);
        match &result {
            Ok(index) => self.changed(TodoEvent::TaskAdded {
                index: *index,
                title: title.to_string(),
            }),
            Err(err) => self.reject("add", err),
        }
        result
    }

    pub fn delete(&mut self, index: usize) -> TodoResult<Task> {
        let result = if self.session.is_editing() {
            Err(TodoError::InvalidState(StateViolation::DeleteWhileEditing))
        } else {
            self.store.remove(index)
        };

        match &result {
            Ok(task) => self.changed(TodoEvent::TaskDeleted {
                index,
                task: task.clone(),
            }),
            Err(err) => self.reject("delete", err),
        }
        result
    }

    pub fn toggle_complete(&mut self, index: usize) -> TodoResult<bool> {
        let result = self.store.toggle_complete(index);
        match &result {
            Ok(completed) => self.changed(TodoEvent::TaskToggled {
                index,
                completed: *completed,
            }),
            Err(err) => self.reject("toggle", err),
        }
        result
    }

    pub fn update_title(&mut self, index: usize, title: &str) -> TodoResult<()> {
        let result = self.store.update_title(index, title);
        match &result {
            Ok(()) => self.changed(TodoEvent::EditSaved {
                index,
                title: title.to_string(),
            }),
            Err(err) => self.reject("update", err),
        }
        result
    }

    /// Replace the whole list. An edit session pointing past the new end is reset.
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.store.replace(tasks);
        if let Some(index) = self.session.editing_index() {
            if self.session.revalidate(self.store.len()) {
                self.emit(TodoEvent::EditReset { index });
            }
        }
        self.redraw_requested = true;
    }

    // Edit session

    /// Start editing `index` and return its title for the entry buffer
    pub fn begin_edit(&mut self, index: usize) -> TodoResult<String> {
        let result = self
            .session
            .begin(index, self.store.len())
            .map(|()| self.store.get(index).map(|task| task.title.clone()).unwrap_or_default());

        match &result {
            Ok(title) => self.changed(TodoEvent::EditBegun {
                index,
                title: title.clone(),
            }),
            Err(err) => self.reject("begin_edit", err),
        }
        result
    }

    /// Commit the edit. Empty text is ignored and the session stays open.
    pub fn save_edit(&mut self, title: &str) -> TodoResult<usize> {
        let result = self
            .session
            .target()
            .and_then(|index| self.store.update_title(index, title).map(|()| index));

        match &result {
            Ok(index) => {
                self.session = EditSession::Idle;
                self.changed(TodoEvent::EditSaved {
                    index: *index,
                    title: title.to_string(),
                });
            }
            Err(err) => self.reject("save_edit", err),
        }
        result
    }

    pub fn cancel_edit(&mut self) -> TodoResult<usize> {
        let result = self.session.finish();
        match &result {
            Ok(index) => self.changed(TodoEvent::EditCanceled { index: *index }),
            Err(err) => self.reject("cancel_edit", err),
        }
        result
    }

    /// Force the session back to idle, e.g. when the host switches pages
    pub fn reset_edit(&mut self) {
        if let Some(index) = self.session.editing_index() {
            self.session = EditSession::Idle;
            self.changed(TodoEvent::EditReset { index });
        }
    }

    // Hints

    pub fn set_hint(&mut self, message: impl Into<String>) {
        self.hint.set(message);
        let message = self.hint.message().to_string();
        self.changed(TodoEvent::HintChanged { message });
    }

    pub fn clear_hint(&mut self) {
        self.set_hint(String::new());
    }

    /// Advance hint expiry. Call from the host loop between key events.
    pub fn tick(&mut self) -> bool {
        if self.hint.tick() {
            self.changed(TodoEvent::HintExpired);
            return true;
        }
        false
    }

    // Input routing

    /// Enforce the title limit on the entry buffer after the user typed
    pub fn on_entry_changed(&mut self, entry: &mut String) -> bool {
        let max = self.store.max_title_length();
        let len = entry.chars().count();
        if len <= max {
            return false;
        }

        *entry = truncate_chars(entry, max);
        let err = TodoError::LengthExceeded { len, max };
        match err.hint() {
            // Still showing the same warning: keep it up without a new event
            Some(message) if self.hint.message() == message => self.hint.set(message),
            _ => self.reject("input", &err),
        }
        true
    }

    /// Route one key. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: TodoKey, ctx: KeyContext<'_>) -> bool {
        match key {
            TodoKey::Confirm => {
                self.handle_confirm(ctx);
                true
            }
            TodoKey::Cancel => {
                if !self.session.is_editing() {
                    return false;
                }
                if self.cancel_edit().is_ok() {
                    ctx.entry.clear();
                }
                true
            }
            TodoKey::Delete if ctx.focus == Focus::List => {
                match ctx.selected {
                    Some(index) => {
                        let _ = self.delete(index);
                    }
                    None if self.session.is_editing() || self.store.is_empty() => {
                        let _ = self.delete(0);
                    }
                    None => self.reject(
                        "delete",
                        &TodoError::InvalidIndex {
                            index: 0,
                            len: self.store.len(),
                        },
                    ),
                }
                true
            }
            TodoKey::ToggleComplete if ctx.focus == Focus::List => {
                if let Some(index) = ctx.selected {
                    let _ = self.toggle_complete(index);
                }
                true
            }
            _ => false,
        }
    }

    fn handle_confirm(&mut self, ctx: KeyContext<'_>) {
        if self.session.is_editing() {
            if self.save_edit(ctx.entry.as_str()).is_ok() {
                ctx.entry.clear();
            }
            return;
        }

        match ctx.focus {
            Focus::Entry => {
                if !ctx.entry.is_empty() && self.add(ctx.entry.as_str()).is_ok() {
                    ctx.entry.clear();
                }
            }
            Focus::List => {
                if let Some(index) = ctx.selected {
                    if let Ok(title) = self.begin_edit(index) {
                        *ctx.entry = title;
                    }
                }
            }
        }
    }

    fn changed(&mut self, event: TodoEvent) {
        self.redraw_requested = true;
        self.emit(event);
    }

    fn reject(&mut self, operation: &'static str, err: &TodoError) {
        self.emit(TodoEvent::Rejected {
            operation,
            reason: err.to_string(),
        });
        if let Some(message) = err.hint() {
            self.set_hint(message);
        }
    }

    fn emit(&mut self, event: TodoEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }
}
