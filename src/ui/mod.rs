//! UI module for Tuido
//!
//! This module hosts the terminal side of the application: the menu, the
//! pages, and the event loop that drives the to-do core.

pub mod app_component;
pub mod components;
pub mod core;
pub mod renderer;

pub use app_component::AppComponent;
pub use renderer::run_app;
