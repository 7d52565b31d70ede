//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus, field editing
//!   and history browsing
//! - **[`panes`]**: stateless render functions for each visible pane (menu, parameters,
//!   array, status bar)
//! - **[`theme`]**: chrome color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Registry`] and a
//! [`Config`] and call [`App::run`] to start the event loop.
//!
//! [`Registry`]: crate::registry::Registry
//! [`Config`]: crate::config::Config
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
