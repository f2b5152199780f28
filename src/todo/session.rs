use super::error::{StateViolation, TodoError, TodoResult};
use crate::constants::{LABEL_EDIT_TODO, LABEL_NEW_TODO};

/// Whether entry input creates a new task or rewrites an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditSession {
    #[default]
    Idle,
    Editing(usize),
}

impl EditSession {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Editing(_))
    }

    pub fn editing_index(&self) -> Option<usize> {
        match self {
            EditSession::Editing(index) => Some(*index),
            EditSession::Idle => None,
        }
    }

    /// Label for the text entry, derived only from the current state
    pub fn label(&self) -> &'static str {
        match self {
            EditSession::Idle => LABEL_NEW_TODO,
            EditSession::Editing(_) => LABEL_EDIT_TODO,
        }
    }

    /// Enter edit mode for `index`; `len` is the current store length
    pub fn begin(&mut self, index: usize, len: usize) -> TodoResult<()> {
        if len == 0 {
            return Err(TodoError::InvalidState(StateViolation::ListEmpty));
        }
        if index >= len {
            return Err(TodoError::InvalidIndex { index, len });
        }
        *self = EditSession::Editing(index);
        Ok(())
    }

    /// Index of the task being edited, or an error when idle
    pub fn target(&self) -> TodoResult<usize> {
        self.editing_index()
            .ok_or(TodoError::InvalidState(StateViolation::NotEditing))
    }

    pub fn finish(&mut self) -> TodoResult<usize> {
        let index = self.target()?;
        *self = EditSession::Idle;
        Ok(index)
    }

    /// Drop back to idle if the edited task no longer exists
    pub fn revalidate(&mut self, len: usize) -> bool {
        match *self {
            EditSession::Editing(index) if index >= len => {
                *self = EditSession::Idle;
                true
            }
            _ => false,
        }
    }
}
