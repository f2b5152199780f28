//! Tuido - A terminal to-do list editor
//!
//! This library provides a menu-driven terminal application whose main page
//! is an interactive to-do list: tasks are added, edited, completed and
//! deleted inline, with short-lived hints for rejected actions.
//!
//! # Modules
//!
//! * [`todo`] - The to-do list core, free of any terminal dependency
//! * [`ui`] - Terminal user interface components and the event loop
//! * [`config`] - Application configuration management
//! * [`logger`] - File logging and the to-do event log observer
//! * [`cli`] - Command line arguments

/// Command line arguments
pub mod cli;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// To-do list state machine: tasks, edit session, hints and key routing
pub mod todo;

/// Terminal user interface components and rendering
pub mod ui;
