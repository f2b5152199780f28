//! Core UI functionality for the Tuido application.
//!
//! This module contains the building blocks every screen component uses.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal input polling and ticks
//!
//! Components turn key events into [`Action`]s, and the
//! [`crate::ui::app_component::AppComponent`] applies them. The to-do logic
//! itself lives in [`crate::todo`] and knows nothing about the terminal.

pub mod actions;
pub mod component;
pub mod event_handler;

// Re-export core types for easier access from other modules
pub use actions::{Action, Page, Pane};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
