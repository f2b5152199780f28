//! Reusable UI components

pub mod entry_field;

// Component architecture
pub mod menu_component;
pub mod todo_list_component;
pub mod welcome_component;

// Component exports
pub use entry_field::EntryField;
pub use menu_component::{MenuComponent, MenuItem};
pub use todo_list_component::TodoListComponent;
pub use welcome_component::WelcomeComponent;
