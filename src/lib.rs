//! # Sectui
//!
//! A sectioned, scrollable list viewer for the terminal, built with Ratatui.
//!
//! The data on screen comes from a read-only [`model::ListModel`]: an ordered
//! sequence of sections, each holding rows of text. The view layer pulls
//! everything it renders through the [`model::ListSource`] callbacks (section
//! count, row count per section, cell content per row, header content per
//! section), so any type implementing that trait can be injected into the
//! [`components::SectionList`] component.
//!
//! ## Modules
//!
//! - [`model`] - list data and the render-data provider contract
//! - [`components`] - UI components driven by the action loop
//! - [`widgets`] - stateless building blocks for rendering
//! - [`app`] - the event/action/render loop
//! - [`config`] - configuration files and keybindings

pub mod action;
pub mod app;
pub mod cli;
pub mod collections;
pub mod components;
pub mod config;
pub mod mode;
pub mod model;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use action::Action;
pub use app::App;
pub use model::{ListModel, ListSource};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
