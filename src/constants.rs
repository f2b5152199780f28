//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

use std::time::Duration;

// Task limits
/// Maximum number of characters a task title may hold
pub const MAX_TITLE_LENGTH: usize = 80;
/// How long a hint stays visible before it clears itself
pub const HINT_DURATION: Duration = Duration::from_secs(3);

// Input labels
pub const LABEL_NEW_TODO: &str = "New To-Do: ";
pub const LABEL_EDIT_TODO: &str = "Edit To-Do: ";

// Hint Messages
pub const HINT_DELETE_WHILE_EDITING: &str = "Cannot delete while editing a task.";
pub const HINT_LIST_EMPTY: &str = "Task list is empty. Add a task first.";
pub const HINT_INVALID_INDEX: &str = "No task is selected.";
pub const HINT_NOT_EDITING: &str = "No task is being edited.";

/// Tutorial tasks shown when the list starts out empty
pub const HELP_TASKS: [&str; 6] = [
    "💡Write your first to-do task in the input field above.",
    "👏Press Enter to add the task to the list.",
    "📝Select a task and press Enter to edit it.",
    "🤷Press Esc to cancel editing a task.",
    "🥷Press Delete to remove a selected task.",
    "✅Press Space to mark a task as completed.",
];

// Welcome page banner
pub const WELCOME_BANNER: [&str; 6] = [
    r" _    _  _____  _      _____  _____ ___  ___ _____  _ ",
    r"| |  | ||  ___|| |    /  __ \|  _  ||  \/  ||  ___|| |",
    r"| |  | || |__  | |    | /  \/| | | || .  . || |__  | |",
    r"| |/\| ||  __| | |    | |    | | | || |\/| ||  __| | |",
    r"\  /\  /| |___ | |____| \__/\\ \_/ /| |  | || |___ |_|",
    r" \/  \/ \____/ \_____/ \____/ \___/ \_|  |_/\____/ (_)",
];

// Titles
pub const TITLE_MENU: &str = "Menu";
pub const TITLE_WELCOME: &str = "Welcome";
pub const TITLE_TODO_LIST: &str = "To-Do List";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const CONFIG_USING: &str = "Using config file";

// UI Layout Constants
/// Minimum menu width in columns
pub const MENU_MIN_WIDTH: u16 = 15;
/// Maximum menu width in columns
pub const MENU_MAX_WIDTH: u16 = 50;
/// Default menu width in columns
pub const MENU_DEFAULT_WIDTH: u16 = 24;
/// Interval between ticks when no input arrives
pub const TICK_RATE: Duration = Duration::from_millis(100);
