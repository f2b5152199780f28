use crate::constants::{HINT_DELETE_WHILE_EDITING, HINT_INVALID_INDEX, HINT_LIST_EMPTY, HINT_NOT_EDITING};
use thiserror::Error;

/// Why an edit session operation was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateViolation {
    DeleteWhileEditing,
    NotEditing,
    ListEmpty,
}

/// Recoverable failures of the to-do core.
///
/// None of these are fatal: the component turns each one into a hint for the
/// user and leaves its state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("index {index} is out of range for {len} tasks")]
    InvalidIndex { index: usize, len: usize },

    #[error("operation not allowed: {0:?}")]
    InvalidState(StateViolation),

    #[error("input is empty")]
    EmptyInput,

    #[error("input has {len} characters, limit is {max}")]
    LengthExceeded { len: usize, max: usize },
}

impl TodoError {
    /// User-facing message for the hint line, `None` when the failure is silent
    pub fn hint(&self) -> Option<String> {
        match self {
            TodoError::InvalidIndex { .. } => Some(HINT_INVALID_INDEX.to_string()),
            TodoError::InvalidState(StateViolation::DeleteWhileEditing) => Some(HINT_DELETE_WHILE_EDITING.to_string()),
            TodoError::InvalidState(StateViolation::ListEmpty) => Some(HINT_LIST_EMPTY.to_string()),
            TodoError::InvalidState(StateViolation::NotEditing) => Some(HINT_NOT_EDITING.to_string()),
            TodoError::EmptyInput => None,
            TodoError::LengthExceeded { max, .. } => Some(format!("Task length should not exceed {} characters.", max)),
        }
    }
}

pub type TodoResult<T> = Result<T, TodoError>;
